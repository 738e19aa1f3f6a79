//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the controller and the UI-only flags into signals and is
//! provided once via `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.

use chrono::NaiveDate;
use dioxus::prelude::*;
use shore_core::config::{AppConfig, WeatherSource};
use shore_core::controller::Controller;
use shore_core::service::{HttpWeatherService, SimulatedWeatherService, WeatherService};
use std::rc::Rc;

/// Shared application state for the ShoreSquad page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Spots, events, activation latches, weather panel and notices
    pub controller: Signal<Controller>,
    /// Where weather snapshots come from
    pub weather_service: Signal<Rc<dyn WeatherService>>,
    /// Whether startup is still running
    pub loading: Signal<bool>,
    /// Whether the mobile nav menu is expanded
    pub nav_open: Signal<bool>,
    /// Whether the suggest-a-spot form is shown
    pub suggest_open: Signal<bool>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let service: Rc<dyn WeatherService> = match config.weather_source {
            WeatherSource::Live => Rc::new(HttpWeatherService::new(config.endpoints.clone())),
            WeatherSource::Simulated => Rc::new(SimulatedWeatherService::new(today())),
        };
        Self {
            controller: Signal::new(Controller::new(config)),
            weather_service: Signal::new(service),
            loading: Signal::new(true),
            nav_open: Signal::new(false),
            suggest_open: Signal::new(false),
        }
    }
}

/// Today's date in the browser's time zone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
