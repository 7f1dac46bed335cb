use leptos::prelude::*;

use crate::components::section::{Backdrop, FadeSection, SectionHeading};
use crate::content::{FEE_TIERS, REGISTRATION_FORM_URL, REGISTRATION_QR_URL};
use crate::state::SectionId;

#[component]
pub fn Registration() -> impl IntoView {
    let tiers = FEE_TIERS
        .iter()
        .map(|tier| {
            view! {
                <div class="glassmorphism rounded-xl p-6 card-hover">
                    <h3 class="text-xl font-semibold text-yellow-500 mb-2">{ tier.audience }</h3>
                    <p class="text-3xl font-bold gradient-text">{ tier.amount }</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <FadeSection id=SectionId::Registration backdrop=Backdrop::Tinted>
            <SectionHeading title="Registration"/>
            <div class="grid md:grid-cols-2 gap-8 items-center">
                <div class="space-y-6">
                    { tiers }
                    <a
                        href=REGISTRATION_FORM_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-block w-full text-center px-6 py-3 bg-gradient-to-r from-blue-600 to-purple-600 text-white rounded-lg hover:opacity-90 transition-all duration-300 transform hover:scale-105"
                    >
                        "Register Now"
                    </a>
                </div>
                <div class="flex justify-center">
                    <div class="glassmorphism p-4 rounded-xl card-hover">
                        <img src=REGISTRATION_QR_URL alt="Registration QR Code" class="w-64 h-64"/>
                    </div>
                </div>
            </div>
        </FadeSection>
    }
}
