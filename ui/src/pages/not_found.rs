use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-6 text-center px-4">
            <h1 class="text-4xl font-bold gradient-text">"404 – not found"</h1>
            <a href="/" class="px-6 py-3 glassmorphism rounded-full text-gray-800 dark:text-white">
                "Back to the conference"
            </a>
        </div>
    }
}
