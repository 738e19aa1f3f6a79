//! Quick action buttons and the suggest-a-spot form.

use crate::actions;
use crate::state::AppState;
use crate::{EVENTS_SECTION_ID, WEATHER_SECTION_ID};
use dioxus::prelude::*;

#[component]
pub fn QuickActions() -> Element {
    let mut state = use_context::<AppState>();
    let suggest_open = (state.suggest_open)();

    rsx! {
        section {
            class: "quick-actions",
            h2 { "Quick Actions" }
            div {
                class: "action-buttons",
                // Anchors so the page also jumps to the region.
                a {
                    class: "action-btn",
                    href: "#{WEATHER_SECTION_ID}",
                    onclick: move |_| {
                        spawn(actions::activate_weather(state));
                    },
                    "🌤️ Check Weather"
                }
                a {
                    class: "action-btn",
                    href: "#{EVENTS_SECTION_ID}",
                    "📅 Find Events"
                }
                button {
                    class: "action-btn",
                    r#type: "button",
                    "aria-expanded": "{suggest_open}",
                    onclick: move |_| state.suggest_open.set(!suggest_open),
                    "📍 Suggest Spot"
                }
            }
            if suggest_open {
                SuggestSpotForm {}
            }
        }
    }
}

/// Free-text spot suggestion. Nothing is stored; the user gets a thank-you.
#[component]
pub fn SuggestSpotForm() -> Element {
    let state = use_context::<AppState>();
    let mut name = use_signal(String::new);

    rsx! {
        form {
            class: "suggest-form",
            onsubmit: move |evt: Event<FormData>| {
                evt.prevent_default();
                actions::suggest_spot(state, &name.read());
                name.set(String::new());
            },
            label {
                r#for: "spot-name",
                "Suggest a beach cleanup location: "
            }
            input {
                id: "spot-name",
                r#type: "text",
                value: "{name}",
                oninput: move |evt: Event<FormData>| name.set(evt.value()),
            }
            button { r#type: "submit", "Send" }
        }
    }
}
