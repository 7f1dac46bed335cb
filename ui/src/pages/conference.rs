pub mod about;
pub mod contact;
pub mod dates;
pub mod location;
pub mod patrons;
pub mod registration;
pub mod tracks;

pub use about::About;
pub use contact::Contact;
pub use dates::ImportantDates;
pub use location::Location;
pub use patrons::Patrons;
pub use registration::Registration;
pub use tracks::Tracks;
