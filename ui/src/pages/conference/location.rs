use leptos::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::components::section::{Backdrop, FadeSection, SectionHeading};
use crate::content::VENUE;
use crate::state::SectionId;

#[component]
pub fn Location() -> impl IntoView {
    view! {
        <FadeSection id=SectionId::Location backdrop=Backdrop::Tinted>
            <SectionHeading title="Location"/>
            <div class="grid md:grid-cols-2 gap-8">
                <div class="glassmorphism rounded-xl p-8 card-hover">
                    <h3 class="text-2xl font-semibold gradient-text mb-4">"Venue"</h3>
                    <div class="space-y-4">
                        <p class="text-gray-700 dark:text-gray-300">{ VENUE.name }</p>
                        <p class="text-gray-600 dark:text-gray-400">{ VENUE.address }</p>
                        <a
                            href=VENUE.directions_url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-flex items-center text-blue-600 dark:text-blue-400 hover:underline"
                        >
                            <Icon glyph=Glyph::Globe class="h-5 w-5 mr-2"/>
                            "Get Directions"
                        </a>
                    </div>
                </div>
                <div class="glassmorphism rounded-xl overflow-hidden card-hover h-[300px]">
                    <iframe
                        src=VENUE.map_embed_url
                        title="Venue map"
                        width="100%"
                        height="100%"
                        style="border: 0;"
                        allowfullscreen=true
                        {::leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}
                        referrerpolicy="no-referrer-when-downgrade"
                    ></iframe>
                </div>
            </div>
        </FadeSection>
    }
}
