use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::dom::scroll_to_section;
use crate::state::{SectionId, use_page_state};

/// `<a href="#anchor">` that scrolls through the navbar-offset path instead
/// of letting the router jump the section under the fixed header.
#[component]
pub fn SectionLink(target: SectionId, class: &'static str, children: Children) -> impl IntoView {
    let state = use_page_state();

    view! {
        <a
            href=format!("#{}", target.anchor())
            class=class
            on:click=move |ev: MouseEvent| {
                ev.prevent_default();
                state.navigate(target, scroll_to_section);
            }
        >{ children() }</a>
    }
}
