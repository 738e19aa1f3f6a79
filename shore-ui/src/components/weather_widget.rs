//! Weather widget: current conditions, 4-day outlook and cleanup advisory.

use crate::actions;
use crate::components::{ErrorDisplay, LoadingSpinner};
use crate::state::AppState;
use crate::WEATHER_SECTION_ID;
use dioxus::prelude::*;
use shore_core::controller::WeatherPanel;
use shore_core::view::WeatherView;

#[component]
pub fn WeatherWidget() -> Element {
    let state = use_context::<AppState>();
    let (panel, view) = {
        let controller = state.controller.read();
        (controller.weather().clone(), controller.weather_view())
    };

    rsx! {
        section {
            id: WEATHER_SECTION_ID,
            class: "weather-widget",
            match (panel, view) {
                (WeatherPanel::Ready(_), Some(view)) => rsx! { WeatherDetails { view } },
                (WeatherPanel::Loading, _) => rsx! {
                    LoadingSpinner { message: "Loading Singapore weather data...".to_string() }
                },
                (WeatherPanel::Failed(message), _) => rsx! { ErrorDisplay { message } },
                _ => rsx! {
                    div {
                        class: "weather-idle",
                        h3 { "🌊 Beach Weather" }
                        p { "Check conditions before heading out." }
                        button {
                            class: "weather-btn",
                            r#type: "button",
                            onclick: move |_| {
                                spawn(actions::activate_weather(state));
                            },
                            "Check Weather"
                        }
                    }
                },
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct WeatherDetailsProps {
    pub view: WeatherView,
}

#[component]
fn WeatherDetails(props: WeatherDetailsProps) -> Element {
    let view = props.view;

    rsx! {
        div {
            class: "weather-container",
            div {
                class: "weather-header",
                h3 { "🌊 Singapore Weather Forecast" }
                p { class: "update-time", "{view.updated_label}" }
            }
            div {
                class: "current-weather",
                div {
                    class: "current-main",
                    div {
                        class: "temp-display",
                        span { class: "current-temp", "{view.current_temp}" }
                        span { class: "temp-range", "{view.temp_range}" }
                    }
                    div {
                        class: "condition-display",
                        span { class: "weather-emoji", "{view.emoji}" }
                        span { class: "condition-text", "{view.condition}" }
                    }
                }
                div {
                    class: "weather-details",
                    div {
                        class: "detail-item",
                        span { class: "detail-label", "💨 Wind" }
                        span { class: "detail-value", "{view.wind}" }
                    }
                    div {
                        class: "detail-item",
                        span { class: "detail-label", "💧 Humidity" }
                        span { class: "detail-value", "{view.humidity}" }
                    }
                }
            }
            div {
                class: "forecast-section",
                h4 { "4-Day Forecast" }
                div {
                    class: "forecast-grid",
                    for day in view.forecast.iter() {
                        div {
                            key: "{day.date_label}",
                            class: "forecast-card",
                            div { class: "forecast-date", "{day.date_label}" }
                            div { class: "forecast-emoji", "{day.emoji}" }
                            div {
                                class: "forecast-temps",
                                span { class: "high-temp", "{day.high}" }
                                span { class: "low-temp", "{day.low}" }
                            }
                            div { class: "forecast-condition", "{day.condition}" }
                            div { class: "forecast-wind", "{day.wind}" }
                        }
                    }
                }
            }
            div {
                class: "beach-recommendation",
                h4 { "🏖️ Beach Cleanup Recommendation" }
                p { class: "recommendation-text", "{view.advisory}" }
            }
        }
    }
}
