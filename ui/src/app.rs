use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::Router;
use leptos_use::use_window_scroll;

use crate::components::navbar::NavBar;
use crate::routes::RoutesMenu;
use crate::state::PageState;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let (_, scroll_y) = use_window_scroll();
    let state = PageState::new(scroll_y);
    provide_context(state);

    view! {
      <div class=move || format!("min-h-screen {}", state.theme.get().root_class())>
        <div class="bg-gradient-to-br from-blue-50 to-purple-50 dark:from-gray-900 dark:to-blue-900 min-h-screen">
          <Router>
            <NavBar/>
            <main>
              <RoutesMenu/>
            </main>
          </Router>
        </div>
      </div>
    }
}
