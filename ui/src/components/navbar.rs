use leptos::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::content::CONFERENCE;
use crate::dom::scroll_to_section;
use crate::state::{SectionId, use_page_state};

#[component]
pub fn NavBar() -> impl IntoView {
    let state = use_page_state();
    let go = move |id: SectionId| state.navigate(id, scroll_to_section);

    let header_class = move || {
        format!(
            "fixed w-full z-50 transition-all duration-300 {}",
            if state.scrolled.get() {
                "glassmorphism shadow-lg"
            } else {
                "bg-transparent"
            }
        )
    };

    let theme_icon = move || {
        let (glyph, class) = if state.theme.get().is_dark() {
            (Glyph::Sun, "h-5 w-5 text-gray-300")
        } else {
            (Glyph::Moon, "h-5 w-5 text-gray-600")
        };
        view! { <Icon glyph class/> }
    };

    let menu_icon = move || {
        let glyph = if state.menu_open.get() {
            Glyph::Close
        } else {
            Glyph::Menu
        };
        view! { <Icon glyph class="h-6 w-6"/> }
    };

    view! {
        <nav class=header_class>
            <div class="w-full mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <a href="/" class="flex items-center space-x-2">
                        <span class="text-2xl font-bold gradient-text">{ CONFERENCE.brand }</span>
                    </a>

                    // desktop
                    <div class="hidden md:flex items-center space-x-8">
                        { SectionId::NAV
                            .into_iter()
                            .map(|id| view! {
                                <button class="nav-link" on:click=move |_| go(id)>
                                    { id.nav_label() }
                                </button>
                            })
                            .collect_view() }
                        <button
                            class="p-2 rounded-full hover:bg-gray-100/20 dark:hover:bg-gray-800/20 transition-colors duration-300"
                            aria-label="Toggle theme"
                            on:click=move |_| state.toggle_theme()
                        >
                            { theme_icon }
                        </button>
                    </div>

                    <button
                        class="md:hidden p-2 rounded-lg text-gray-600 dark:text-gray-300"
                        aria-label="Toggle menu"
                        on:click=move |_| state.toggle_menu()
                    >
                        { menu_icon }
                    </button>
                </div>
            </div>

            // mobile
            <Show when=move || state.menu_open.get()>
                <div class="md:hidden glassmorphism shadow-lg">
                    <div class="px-2 pt-2 pb-3 space-y-1">
                        { SectionId::NAV
                            .into_iter()
                            .map(|id| view! {
                                <button
                                    class="mobile-nav-link w-full text-left"
                                    on:click=move |_| go(id)
                                >
                                    { id.nav_label() }
                                </button>
                            })
                            .collect_view() }
                        <button
                            class="mobile-nav-link w-full text-left flex items-center"
                            on:click=move |_| state.toggle_theme()
                        >
                            { move || state.theme.get().toggle_label() }
                        </button>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
