//! Browser glue: smooth scrolling and the fade-in observer.

use anyhow::Result;
use anyhow::anyhow;
use leptos::logging::warn;
use wasm_bindgen::{JsCast, JsValue, prelude::Closure};
use web_sys::{
    Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollToOptions, Window,
};

use crate::state::{PageState, REVEAL_THRESHOLD, SectionId, section_scroll_top};

fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| anyhow!("no window"))
}

fn document() -> Result<Document> {
    window()?.document().ok_or_else(|| anyhow!("no document"))
}

/// Smooth-scrolls so the section's top sits just under the navbar.
/// A section that is not in the DOM is ignored.
pub fn scroll_to_section(id: SectionId) {
    if let Err(e) = try_scroll_to_section(id) {
        warn!("scroll to #{}: {e}", id.anchor());
    }
}

fn try_scroll_to_section(id: SectionId) -> Result<()> {
    let win = window()?;
    let rect_top = document()?
        .get_element_by_id(id.anchor())
        .map(|el| el.get_bounding_client_rect().top());

    let page_y = win
        .page_y_offset()
        .map_err(|e| anyhow!("pageYOffset: {e:?}"))?;
    let Some(top) = section_scroll_top(rect_top, page_y) else {
        return Ok(());
    };

    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&opts);
    Ok(())
}

/// The page's fade-in observer. Dropping it disconnects the observer and
/// releases its callback.
pub struct SectionObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Installs one `IntersectionObserver` over every section on the page. A
/// section is revealed the first time it crosses `REVEAL_THRESHOLD` and is
/// then dropped from the observer.
pub fn observe_sections(state: PageState) -> Result<SectionObserver> {
    let doc = document()?;

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(id) = SectionId::from_anchor(&target.id()) {
                    state.reveal(id);
                }
                observer.unobserve(&target);
            }
        },
    );

    let opts = IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts)
        .map_err(|e| anyhow!("IntersectionObserver: {e:?}"))?;

    for id in SectionId::ALL {
        match doc.get_element_by_id(id.anchor()) {
            Some(el) => observer.observe(&el),
            None => warn!("section #{} not mounted", id.anchor()),
        }
    }

    Ok(SectionObserver {
        observer,
        _callback: callback,
    })
}
