use leptos::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::components::section::{FadeSection, SectionHeading};
use crate::components::section_link::SectionLink;
use crate::content::{CONTACT, LinkTarget, QUICK_LINKS, QuickLink};
use crate::state::SectionId;

#[component]
fn ContactLine(glyph: Glyph, text: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center">
            <Icon glyph class="h-5 w-5 text-blue-600 dark:text-blue-400 mr-3"/>
            <p class="text-gray-700 dark:text-gray-300">{ text }</p>
        </div>
    }
}

const QUICK_LINK_CLASS: &str = "flex items-center text-gray-700 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400 transition-colors";

fn quick_link(link: &'static QuickLink) -> AnyView {
    match link.target {
        LinkTarget::Href(href) => view! {
            <a href=href class=QUICK_LINK_CLASS>
                <Icon glyph=Glyph::ChevronRight class="h-5 w-5 mr-2"/>
                { link.label }
            </a>
        }
        .into_any(),
        LinkTarget::Section(id) => view! {
            <SectionLink target=id class=QUICK_LINK_CLASS>
                <Icon glyph=Glyph::ChevronRight class="h-5 w-5 mr-2"/>
                { link.label }
            </SectionLink>
        }
        .into_any(),
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <FadeSection id=SectionId::Contact>
            <SectionHeading title="Contact Us"/>
            <div class="grid md:grid-cols-2 gap-8">
                <div class="glassmorphism rounded-xl p-8 card-hover">
                    <h3 class="text-2xl font-semibold gradient-text mb-6">"Get in Touch"</h3>
                    <div class="space-y-4">
                        <ContactLine glyph=Glyph::Phone text=CONTACT.phone/>
                        <ContactLine glyph=Glyph::Mail text=CONTACT.email/>
                        <ContactLine glyph=Glyph::Globe text=CONTACT.website/>
                    </div>
                </div>
                <div class="glassmorphism rounded-xl p-8 card-hover">
                    <h3 class="text-2xl font-semibold gradient-text mb-6">"Quick Links"</h3>
                    <div class="space-y-4">
                        { QUICK_LINKS.iter().map(quick_link).collect_view() }
                    </div>
                </div>
            </div>
        </FadeSection>
    }
}
