//! Async UI operations.
//!
//! Each function takes the `AppState` handle by value (it is `Copy`). State
//! changes go through the controller inside a single `write()`; guards are
//! never held across an `.await`.

use crate::js_bridge;
use crate::state::{today, AppState};
use crate::MAP_CONTAINER_ID;
use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use log::{error, info};
use shore_core::error::ActivationError;
use shore_core::notice::NoticeId;
use shore_core::service::fetch_snapshot;

/// Load sample data. Fails soft: errors are logged and the page stays usable.
pub fn initialize(mut state: AppState) {
    let result = state.controller.write().initialize(today());
    match result {
        Ok(()) => info!("🏖️ ShoreSquad app initialized"),
        Err(e) => error!("Failed to initialize app: {:#}", e),
    }
    state.loading.set(false);
}

/// Remove notice `id` once its lifetime has passed.
///
/// The timer lives in the root scope: the component that posted the notice
/// may unmount before it fires (the suggest form closes on submit).
fn schedule_expiry(mut state: AppState, id: NoticeId) {
    let ttl = state.controller.read().notices().ttl_ms();
    spawn_forever(async move {
        js_bridge::sleep(ttl).await;
        state.controller.write().dismiss_notice(id);
    });
}

pub fn join_event(mut state: AppState, id: u32) {
    let notice = state.controller.write().join_event(id, js_bridge::now_ms());
    if let Some(notice) = notice {
        schedule_expiry(state, notice);
    }
}

pub fn suggest_spot(mut state: AppState, name: &str) {
    let notice = state
        .controller
        .write()
        .record_suggested_spot(name, js_bridge::now_ms());
    if let Some(notice) = notice {
        state.suggest_open.set(false);
        schedule_expiry(state, notice);
    }
}

pub fn join_crew(mut state: AppState) {
    let notice = state.controller.write().join_crew(js_bridge::now_ms());
    schedule_expiry(state, notice);
}

/// Bring up the Leaflet map. Runs at most once.
pub async fn activate_map(mut state: AppState) {
    if !state.controller.write().begin_map_activation() {
        return;
    }
    let (markers, config) = {
        let controller = state.controller.read();
        (controller.map_markers(), controller.config().map.clone())
    };
    let result = js_bridge::render_cleanup_map(MAP_CONTAINER_ID, &markers, &config)
        .await
        .map_err(ActivationError::Map);
    state.controller.write().finish_map_activation(result);
}

/// Fetch current conditions and the forecast together. Runs at most once.
pub async fn activate_weather(mut state: AppState) {
    if !state.controller.write().begin_weather_activation() {
        return;
    }
    let service = state.weather_service.read().clone();
    let result = fetch_snapshot(service.as_ref()).await;
    let notice = state
        .controller
        .write()
        .finish_weather_activation(result, js_bridge::now_ms());
    if let Some(notice) = notice {
        schedule_expiry(state, notice);
    }
}
