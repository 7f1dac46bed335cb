use leptos::prelude::*;

/// Height of the fixed navbar; scroll targets land this far below the viewport top.
pub const HEADER_OFFSET: f64 = 80.0;
/// Vertical scroll (px) after which the navbar switches to its glass look.
pub const SCROLLED_THRESHOLD: f64 = 20.0;
/// Fraction of a section that must be on screen before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Registration,
    Patrons,
    Tracks,
    Dates,
    Location,
    Contact,
}

impl SectionId {
    /// Page order.
    pub const ALL: [SectionId; 7] = [
        SectionId::About,
        SectionId::Registration,
        SectionId::Patrons,
        SectionId::Tracks,
        SectionId::Dates,
        SectionId::Location,
        SectionId::Contact,
    ];

    /// Navbar order. Patrons is reachable by scrolling only.
    pub const NAV: [SectionId; 6] = [
        SectionId::Registration,
        SectionId::About,
        SectionId::Tracks,
        SectionId::Dates,
        SectionId::Location,
        SectionId::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Registration => "registration",
            SectionId::Patrons => "patrons",
            SectionId::Tracks => "tracks",
            SectionId::Dates => "dates",
            SectionId::Location => "location",
            SectionId::Contact => "contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.anchor() == anchor)
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            SectionId::About => "About",
            SectionId::Registration => "Register Now",
            SectionId::Patrons => "Patrons",
            SectionId::Tracks => "Tracks",
            SectionId::Dates => "Important Dates",
            SectionId::Location => "Location",
            SectionId::Contact => "Contact",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Class for the page root; tailwind `dark:` variants key off it.
    pub fn root_class(self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }

    /// Text of the mobile-menu entry, naming the mode a click switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Dark Mode",
            Theme::Dark => "Light Mode",
        }
    }
}

/// Document-relative y to scroll to so an element whose bounding rect starts
/// at `rect_top` ends up just below the fixed header.
pub fn scroll_target(rect_top: f64, page_y_offset: f64) -> f64 {
    rect_top + page_y_offset - HEADER_OFFSET
}

/// Where to scroll for a section, given its rect top if it is in the DOM.
/// `None` means there is nothing to scroll to.
pub fn section_scroll_top(rect_top: Option<f64>, page_y_offset: f64) -> Option<f64> {
    rect_top.map(|top| scroll_target(top, page_y_offset))
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

/// Sections that have faded in. Only ever grows.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Revealed(u8);

impl Revealed {
    pub fn contains(self, id: SectionId) -> bool {
        self.0 & id.bit() != 0
    }

    /// Returns `true` the first time `id` is inserted.
    pub fn insert(&mut self, id: SectionId) -> bool {
        let fresh = !self.contains(id);
        self.0 |= id.bit();
        fresh
    }
}

/// Page-session UI state, shared through context.
#[derive(Copy, Clone)]
pub struct PageState {
    pub menu_open: RwSignal<bool>,
    pub theme: RwSignal<Theme>,
    pub scrolled: Signal<bool>,
    pub revealed: RwSignal<Revealed>,
}

impl PageState {
    pub fn new(scroll_y: Signal<f64>) -> Self {
        Self {
            menu_open: RwSignal::new(false),
            theme: RwSignal::new(Theme::default()),
            scrolled: Signal::derive(move || is_scrolled(scroll_y.get())),
            revealed: RwSignal::new(Revealed::default()),
        }
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    pub fn close_menu(&self) {
        self.menu_open.set(false);
    }

    pub fn toggle_theme(&self) {
        self.theme.update(|t| *t = t.toggled());
    }

    /// Runs `scroll` for the section, then closes the mobile menu whether or
    /// not the section exists.
    pub fn navigate(&self, id: SectionId, scroll: impl FnOnce(SectionId)) {
        scroll(id);
        self.close_menu();
    }

    /// Marks `id` visible. Returns `false` (and notifies nobody) if it already was.
    pub fn reveal(&self, id: SectionId) -> bool {
        if self.revealed.with_untracked(|r| r.contains(id)) {
            return false;
        }
        self.revealed.update(|r| {
            r.insert(id);
        });
        true
    }

    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.revealed.with(|r| r.contains(id))
    }
}

pub fn use_page_state() -> PageState {
    expect_context::<PageState>()
}

/// Slot for a browser-side handle (observer, listener) that must not outlive
/// the current owner. Whatever it holds is dropped when the owner is cleaned up.
pub fn cleanup_slot<T: 'static>() -> StoredValue<Option<T>, LocalStorage> {
    let slot = StoredValue::new_local(None);
    on_cleanup(move || {
        slot.try_update_value(|held| held.take());
    });
    slot
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_state(f: impl FnOnce(PageState, RwSignal<f64>)) {
        let owner = Owner::new();
        owner.with(|| {
            let y = RwSignal::new(0.0);
            f(PageState::new(y.into()), y);
        });
    }

    #[test]
    fn anchors_round_trip_and_are_unique() {
        for id in SectionId::ALL {
            assert_eq!(SectionId::from_anchor(id.anchor()), Some(id));
        }
        assert_eq!(SectionId::from_anchor("register"), None);
        assert_eq!(SectionId::from_anchor(""), None);
    }

    #[test]
    fn nav_order_matches_the_header() {
        let labels: Vec<_> = SectionId::NAV.iter().map(|id| id.nav_label()).collect();
        assert_eq!(
            labels,
            [
                "Register Now",
                "About",
                "Tracks",
                "Important Dates",
                "Location",
                "Contact"
            ]
        );
        assert!(!SectionId::NAV.contains(&SectionId::Patrons));
    }

    #[test]
    fn target_sits_below_the_header() {
        // section 500px below the viewport top, page already scrolled 1200px
        assert_eq!(scroll_target(500.0, 1200.0), 1620.0);
        // section above the viewport
        assert_eq!(scroll_target(-300.0, 1200.0), 820.0);
        assert_eq!(scroll_target(0.0, 0.0), -HEADER_OFFSET);
    }

    #[test]
    fn scrolled_flips_strictly_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.5));
    }

    #[test]
    fn theme_toggles_back() {
        for start in [Theme::Light, Theme::Dark] {
            assert_ne!(start.toggled(), start);
            assert_eq!(start.toggled().toggled(), start);
        }
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::Dark.root_class(), "dark");
        assert_eq!(Theme::Light.toggle_label(), "Dark Mode");
        assert_eq!(Theme::Dark.toggle_label(), "Light Mode");
    }

    #[test]
    fn revealed_only_grows() {
        let mut r = Revealed::default();
        assert!(r.insert(SectionId::Tracks));
        assert!(!r.insert(SectionId::Tracks));
        assert!(r.insert(SectionId::Contact));
        assert!(r.contains(SectionId::Tracks));
        assert!(r.contains(SectionId::Contact));
        assert!(!r.contains(SectionId::About));
    }

    #[test]
    fn theme_signal_toggles_back() {
        with_state(|state, _| {
            state.toggle_theme();
            assert_eq!(state.theme.get_untracked(), Theme::Dark);
            state.toggle_theme();
            assert_eq!(state.theme.get_untracked(), Theme::Light);
        });
    }

    #[test]
    fn picking_a_link_closes_the_menu() {
        with_state(|state, _| {
            for id in SectionId::NAV {
                state.toggle_menu();
                assert!(state.menu_open.get_untracked());

                let mut scrolled_to = None;
                state.navigate(id, |target| scrolled_to = Some(target));

                assert_eq!(scrolled_to, Some(id));
                assert!(!state.menu_open.get_untracked());
            }
        });
    }

    #[test]
    fn missing_section_has_no_scroll_target() {
        assert_eq!(section_scroll_top(None, 1200.0), None);
        assert_eq!(section_scroll_top(Some(500.0), 1200.0), Some(1620.0));
    }

    #[test]
    fn missing_anchor_still_closes_the_menu() {
        with_state(|state, _| {
            state.toggle_menu();

            let mut scrolled_to = None;
            state.navigate(SectionId::Patrons, |_| {
                // section not in the DOM: no rect to measure
                scrolled_to = section_scroll_top(None, 300.0);
            });

            assert_eq!(scrolled_to, None);
            assert!(!state.menu_open.get_untracked());
        });
    }

    struct DropFlag(std::rc::Rc<std::cell::Cell<bool>>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[test]
    fn cleanup_slot_releases_its_handle() {
        let dropped = std::rc::Rc::new(std::cell::Cell::new(false));
        let owner = Owner::new();
        owner.with(|| {
            let slot = cleanup_slot();
            slot.set_value(Some(DropFlag(dropped.clone())));
        });
        assert!(!dropped.get());

        owner.cleanup();
        assert!(dropped.get());
    }

    #[test]
    fn cleanup_slot_replaces_previous_handle() {
        let first = std::rc::Rc::new(std::cell::Cell::new(false));
        let owner = Owner::new();
        owner.with(|| {
            let slot = cleanup_slot();
            slot.set_value(Some(DropFlag(first.clone())));
            slot.set_value(Some(DropFlag(std::rc::Rc::new(std::cell::Cell::new(false)))));
        });
        assert!(first.get());
    }

    #[test]
    fn scrolled_follows_window_position() {
        with_state(|state, y| {
            assert!(!state.scrolled.get_untracked());
            y.set(64.0);
            assert!(state.scrolled.get_untracked());
            y.set(3.0);
            assert!(!state.scrolled.get_untracked());
        });
    }

    #[test]
    fn sections_reveal_once() {
        with_state(|state, _| {
            assert!(!state.revealed.with_untracked(|r| r.contains(SectionId::Dates)));
            assert!(state.reveal(SectionId::Dates));
            assert!(!state.reveal(SectionId::Dates));
            assert!(state.revealed.with_untracked(|r| r.contains(SectionId::Dates)));
            assert!(!state.revealed.with_untracked(|r| r.contains(SectionId::Location)));
        });
    }
}
