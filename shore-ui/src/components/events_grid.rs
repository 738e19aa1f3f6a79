//! Upcoming cleanup events.

use crate::actions;
use crate::state::AppState;
use crate::EVENTS_SECTION_ID;
use dioxus::prelude::*;
use shore_core::view::EventCard;

/// Grid of event cards, re-rendered whenever the controller changes.
#[component]
pub fn EventsGrid() -> Element {
    let state = use_context::<AppState>();
    let cards = state.controller.read().event_cards();

    rsx! {
        section {
            id: EVENTS_SECTION_ID,
            class: "events",
            h2 { "Upcoming Cleanups" }
            div {
                class: "events-grid",
                for card in cards {
                    EventCardView { key: "{card.id}", card: card.clone() }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct EventCardViewProps {
    pub card: EventCard,
}

#[component]
pub fn EventCardView(props: EventCardViewProps) -> Element {
    let state = use_context::<AppState>();
    let id = props.card.id;

    rsx! {
        div {
            class: "event-card",
            role: "article",
            tabindex: "0",
            div {
                class: "event-header",
                h3 { "{props.card.title}" }
                span { class: "participants", "{props.card.participants_label}" }
            }
            div {
                class: "event-details",
                p { class: "location", "📍 {props.card.location}" }
                p { class: "date", "📅 {props.card.date_label}" }
            }
            button {
                class: "join-event-btn",
                r#type: "button",
                onclick: move |_| actions::join_event(state, id),
                "Join Event"
            }
        }
    }
}
