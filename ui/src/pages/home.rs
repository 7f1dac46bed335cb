use leptos::logging::error;
use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::hero::Hero;
use crate::content::CONFERENCE;
use crate::dom::observe_sections;
use crate::pages::conference::{
    About, Contact, ImportantDates, Location, Patrons, Registration, Tracks,
};
use crate::state::{cleanup_slot, use_page_state};

#[component]
pub fn Home() -> impl IntoView {
    let state = use_page_state();

    // disconnected when Home unmounts, so remounting never stacks observers
    let observer = cleanup_slot();

    // runs once, after the sections below are in the DOM
    Effect::new(move |_| match observe_sections(state) {
        Ok(handle) => observer.set_value(Some(handle)),
        Err(e) => error!("section fade-in disabled: {e}"),
    });

    view! {
        <Title text=CONFERENCE.edition/>
        <Meta name="description" content=CONFERENCE.description/>

        <Hero/>
        <About/>
        <Registration/>
        <Patrons/>
        <Tracks/>
        <ImportantDates/>
        <Location/>
        <Contact/>
    }
}
