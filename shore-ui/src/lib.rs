//! Shared Dioxus components and Leaflet bridge for the ShoreSquad web app.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for Leaflet, IntersectionObserver and timers
//! - `state`: `AppState`, the controller and UI flags wrapped in Dioxus Signals
//! - `actions`: async UI operations (lazy activation, joins, notices)
//! - `components`: RSX components for each page region

pub mod actions;
pub mod components;
pub mod js_bridge;
pub mod state;

/// DOM id of the map section (observed for lazy activation).
pub const MAP_SECTION_ID: &str = "map";
/// DOM id of the div Leaflet renders into.
pub const MAP_CONTAINER_ID: &str = "map-container";
pub const EVENTS_SECTION_ID: &str = "events";
pub const WEATHER_SECTION_ID: &str = "weather";
