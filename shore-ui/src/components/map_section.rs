//! Cleanup spot map, activated the first time the section scrolls into view.

use crate::actions;
use crate::components::ErrorDisplay;
use crate::js_bridge;
use crate::state::AppState;
use crate::{MAP_CONTAINER_ID, MAP_SECTION_ID};
use dioxus::prelude::*;
use futures::channel::mpsc;
use futures::StreamExt;
use log::warn;
use shore_core::controller::MapStatus;

#[component]
pub fn MapSection() -> Element {
    let state = use_context::<AppState>();
    let status = state.controller.read().map_status().clone();
    let loading = status == MapStatus::Loading;

    // Arm the visibility trigger once the section is mounted. The observer
    // callback only posts to the channel; activation runs as a Dioxus task.
    use_effect(move || {
        spawn(async move {
            let (tx, mut rx) = mpsc::unbounded::<()>();
            let armed = js_bridge::observe_visibility(MAP_SECTION_ID, move || {
                let _ = tx.unbounded_send(());
            });
            match armed {
                Ok(()) => {
                    if rx.next().await.is_some() {
                        actions::activate_map(state).await;
                    }
                }
                Err(e) => {
                    warn!("Visibility observer unavailable ({}), loading map now", e);
                    actions::activate_map(state).await;
                }
            }
        });
    });

    rsx! {
        section {
            id: MAP_SECTION_ID,
            class: "map-section",
            h2 { "Cleanup Spots" }
            if let MapStatus::Failed(message) = &status {
                ErrorDisplay { message: message.clone() }
            } else {
                div {
                    style: "min-height: 400px; position: relative; width: 100%;",
                    if loading {
                        div {
                            class: "loading-spinner",
                            style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                            "Loading map..."
                        }
                    }
                    div {
                        id: MAP_CONTAINER_ID,
                        style: "width: 100%; height: 400px;",
                    }
                }
            }
        }
    }
}
