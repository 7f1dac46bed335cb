use leptos::prelude::*;

use crate::components::section::{FadeSection, SectionHeading};
use crate::content::{PATRONS, Patron, PatronGroup};
use crate::state::SectionId;

fn patron(p: &'static Patron) -> impl IntoView {
    view! {
        <div>
            <p class="text-lg font-semibold text-yellow-500 mb-1">{ p.name }</p>
            <p class="text-gray-600 dark:text-gray-300">{ p.designation }</p>
        </div>
    }
}

fn group(g: &'static PatronGroup) -> impl IntoView {
    // a lone patron spans the card, several go two per row
    let layout = if g.members.len() > 1 {
        "grid sm:grid-cols-2 gap-6"
    } else {
        ""
    };

    view! {
        <div class="glassmorphism rounded-xl p-8 card-hover">
            <h3 class="text-xl font-semibold gradient-text mb-4">{ g.role }</h3>
            <div class=layout>
                { g.members.iter().map(patron).collect_view() }
            </div>
        </div>
    }
}

#[component]
pub fn Patrons() -> impl IntoView {
    view! {
        <FadeSection id=SectionId::Patrons>
            <SectionHeading title="Patrons"/>
            <div class="space-y-8">
                { PATRONS.iter().map(group).collect_view() }
            </div>
        </FadeSection>
    }
}
