use leptos::prelude::*;

/// Stroke icons, 24x24 grid, drawn with `currentColor`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Glyph {
    Menu,
    Close,
    Sun,
    Moon,
    Calendar,
    ChevronRight,
    Phone,
    Mail,
    Globe,
}

impl Glyph {
    fn path(self) -> &'static str {
        match self {
            Glyph::Menu => "M4 6h16M4 12h16M4 18h16",
            Glyph::Close => "M18 6 6 18M6 6l12 12",
            Glyph::Sun => {
                "M12 8a4 4 0 1 0 0 8 4 4 0 0 0 0-8zM12 2v2M12 20v2M4.93 4.93l1.41 1.41\
                 M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41"
            }
            Glyph::Moon => "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9z",
            Glyph::Calendar => {
                "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z\
                 M16 2v4M8 2v4M3 10h18"
            }
            Glyph::ChevronRight => "m9 18 6-6-6-6",
            Glyph::Phone => {
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 \
                 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 \
                 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 \
                 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"
            }
            Glyph::Mail => {
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM22 6l-10 7L2 6"
            }
            Glyph::Globe => {
                "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM2 12h20\
                 M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z"
            }
        }
    }
}

#[component]
pub fn Icon(glyph: Glyph, class: &'static str) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=glyph.path()/>
        </svg>
    }
}
