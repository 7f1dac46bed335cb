pub mod hero;
pub mod icons;
pub mod navbar;
pub mod section;
pub mod section_link;
