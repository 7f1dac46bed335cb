use leptos::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::components::section::{Backdrop, FadeSection, SectionHeading};
use crate::content::TRACKS;
use crate::state::SectionId;

#[component]
pub fn Tracks() -> impl IntoView {
    let cards = TRACKS
        .iter()
        .map(|track| {
            view! {
                <div class="glassmorphism rounded-xl p-8 card-hover">
                    <h3 class="text-2xl font-semibold gradient-text mb-6">{ track.title }</h3>
                    <ul class="space-y-4">
                        { track
                            .topics
                            .iter()
                            .map(|topic| view! {
                                <li class="flex items-center text-gray-700 dark:text-gray-300 transition-all duration-300 hover:translate-x-2">
                                    <Icon glyph=Glyph::ChevronRight class="h-5 w-5 text-blue-500 mr-2"/>
                                    { *topic }
                                </li>
                            })
                            .collect_view() }
                    </ul>
                </div>
            }
        })
        .collect_view();

    view! {
        <FadeSection id=SectionId::Tracks backdrop=Backdrop::Tinted>
            <SectionHeading title="Conference Tracks"/>
            <div class="grid md:grid-cols-2 gap-8">{ cards }</div>
        </FadeSection>
    }
}
