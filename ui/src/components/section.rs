use leptos::prelude::*;

use crate::state::{SectionId, use_page_state};

/// Page sections alternate between a frosted and a tinted backdrop.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Backdrop {
    #[default]
    Frosted,
    Tinted,
}

impl Backdrop {
    fn class(self) -> &'static str {
        match self {
            Backdrop::Frosted => "bg-white/50 dark:bg-gray-800/50 backdrop-blur-sm",
            Backdrop::Tinted => {
                "bg-gradient-to-br from-blue-50 to-purple-50 dark:from-gray-900 dark:to-blue-900"
            }
        }
    }
}

/// Anchored section that fades in once the observer in `dom` reveals it.
#[component]
pub fn FadeSection(
    id: SectionId,
    #[prop(optional)] backdrop: Backdrop,
    children: Children,
) -> impl IntoView {
    let state = use_page_state();

    view! {
        <section
            id=id.anchor()
            class=format!("section-fade-in py-24 {}", backdrop.class())
            class=("visible", move || state.is_revealed(id))
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                { children() }
            </div>
        </section>
    }
}

#[component]
pub fn SectionHeading(title: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-12">
            <h2 class="text-3xl sm:text-4xl font-bold gradient-text mb-4">{ title }</h2>
        </div>
    }
}
