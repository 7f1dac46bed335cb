use leptos::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::components::section::{FadeSection, SectionHeading};
use crate::content::KEY_DATES;
use crate::state::SectionId;

#[component]
pub fn ImportantDates() -> impl IntoView {
    view! {
        <FadeSection id=SectionId::Dates>
            <SectionHeading title="Important Dates"/>
            <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-8">
                { KEY_DATES
                    .iter()
                    .map(|item| view! {
                        <div class="glassmorphism rounded-xl p-6 text-center card-hover">
                            <Icon glyph=Glyph::Calendar class="h-8 w-8 mx-auto mb-4 text-blue-600 dark:text-blue-400"/>
                            <h3 class="text-lg font-semibold text-gray-900 dark:text-white mb-2">{ item.title }</h3>
                            <p class="gradient-text font-semibold">{ item.date }</p>
                        </div>
                    })
                    .collect_view() }
            </div>
        </FadeSection>
    }
}
