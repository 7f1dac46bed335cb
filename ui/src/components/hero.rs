use leptos::prelude::*;

use crate::components::section_link::SectionLink;
use crate::content::CONFERENCE;
use crate::state::SectionId;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="relative min-h-screen flex items-center">
            <div class="absolute inset-0 overflow-hidden">
                <div class="tech-lines"></div>
            </div>

            <div class="relative max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-32 text-center">
                <h1 class="text-4xl sm:text-6xl lg:text-7xl font-bold gradient-text mb-8 float">
                    { CONFERENCE.edition }
                </h1>
                <p class="text-xl sm:text-2xl text-gray-600 dark:text-gray-300 mb-4 float">
                    { CONFERENCE.tagline }
                </p>
                <p class="text-lg text-gray-500 dark:text-gray-400 mb-12 float">
                    { CONFERENCE.date }
                </p>
                <div class="flex flex-col sm:flex-row justify-center gap-4">
                    <SectionLink
                        target=SectionId::Registration
                        class="px-8 py-4 bg-gradient-to-r from-blue-600 to-purple-600 text-white rounded-full text-lg font-semibold hover:opacity-90 transition-all duration-300 transform hover:scale-105 hover:shadow-lg"
                    >
                        "Register now"
                    </SectionLink>
                    <SectionLink
                        target=SectionId::About
                        class="px-8 py-4 glassmorphism text-gray-800 dark:text-white rounded-full text-lg font-semibold hover:opacity-90 transition-all duration-300 transform hover:scale-105 hover:shadow-lg"
                    >
                        "View Details"
                    </SectionLink>
                </div>
            </div>
        </div>
    }
}
