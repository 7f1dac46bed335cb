use leptos::prelude::*;

use crate::components::section::{FadeSection, SectionHeading};
use crate::content::ABOUT;
use crate::state::SectionId;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <FadeSection id=SectionId::About>
            <div class="max-w-3xl mx-auto text-center">
                <SectionHeading title="About"/>
                <div class="prose prose-lg dark:prose-invert mx-auto">
                    { ABOUT
                        .iter()
                        .map(|para| view! {
                            <p class="text-gray-600 dark:text-gray-300 mb-6">{ *para }</p>
                        })
                        .collect_view() }
                </div>
            </div>
        </FadeSection>
    }
}
