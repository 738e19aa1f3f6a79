//! ShoreSquad: community beach-cleanup page.
//!
//! Startup flow:
//! 1. Provide `AppState` (controller + live weather service) via context.
//! 2. On mount: load the sample spots and events, then drop the loading screen.
//! 3. Sections mount; the map arms its visibility trigger, the weather widget
//!    waits for the Check Weather action. Both activate at most once.

use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};
use shore_core::config::AppConfig;
use shore_ui::actions;
use shore_ui::components::{
    EventsGrid, Hero, LoadingSpinner, MapSection, NavBar, NoticeStack, QuickActions, WeatherWidget,
};
use shore_ui::state::AppState;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("Starting ShoreSquad");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(|| AppState::new(AppConfig::default()));

    // ─── Load sample data once on mount ───
    use_effect(move || actions::initialize(state));

    rsx! {
        NavBar {}

        if (state.loading)() {
            div {
                class: "loading-screen",
                "aria-hidden": "false",
                LoadingSpinner { message: "Getting the squad ready...".to_string() }
            }
        } else {
            main {
                Hero {}
                QuickActions {}
                EventsGrid {}
                MapSection {}
                WeatherWidget {}
            }
        }

        NoticeStack {}
    }
}
