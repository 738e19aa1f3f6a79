//! Toast notices in the corner of the page.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn NoticeStack() -> Element {
    let mut state = use_context::<AppState>();
    let notices: Vec<_> = state.controller.read().notices().iter().cloned().collect();

    rsx! {
        div {
            class: "message-container",
            "aria-live": "polite",
            for notice in notices {
                div {
                    key: "{notice.id.0}",
                    class: "message message-{notice.severity}",
                    span { "{notice.message}" }
                    button {
                        class: "message-close",
                        r#type: "button",
                        "aria-label": "Dismiss",
                        onclick: move |_| {
                            state.controller.write().dismiss_notice(notice.id);
                        },
                        "×"
                    }
                }
            }
        }
    }
}
