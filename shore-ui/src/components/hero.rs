//! Landing section with the call to action and crew signup.

use crate::actions;
use crate::state::AppState;
use crate::MAP_SECTION_ID;
use dioxus::prelude::*;

#[component]
pub fn Hero() -> Element {
    let state = use_context::<AppState>();

    rsx! {
        section {
            id: "home",
            class: "hero",
            h1 { "Rally your crew. Clean the shore." }
            p {
                class: "hero-subtitle",
                "Find cleanup spots near you, check the weather and join an event."
            }
            div {
                class: "hero-actions",
                a {
                    class: "cta-button",
                    href: "#{MAP_SECTION_ID}",
                    "Get Started"
                }
                button {
                    id: "join-crew-btn",
                    class: "secondary-button",
                    r#type: "button",
                    onclick: move |_| actions::join_crew(state),
                    "Join Crew"
                }
            }
        }
    }
}
