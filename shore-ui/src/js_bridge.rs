//! Typed wrappers around JS interop.
//!
//! The Leaflet glue lives in `assets/js/cleanup-map.js`, is embedded at
//! compile time and evaluated on first use. It exposes `window.shoreSquadMap`,
//! whose functions return Promises that are awaited here, so a failed script
//! load surfaces as an `Err` instead of a console warning.

use shore_core::config::MapConfig;
use shore_core::view::MapMarker;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

static CLEANUP_MAP_JS: &str = include_str!("../assets/js/cleanup-map.js");

/// Best-effort human readable text for a thrown JS value.
fn describe_js_error(value: JsValue) -> String {
    if let Some(text) = value.as_string() {
        text
    } else if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        String::from(err.message())
    } else {
        format!("{:?}", value)
    }
}

/// Evaluate the map bridge script unless it is already on `window`.
fn ensure_map_script() -> Result<(), String> {
    let loaded = js_sys::eval("typeof window.shoreSquadMap !== 'undefined'")
        .map_err(describe_js_error)?
        .as_bool()
        .unwrap_or(false);
    if !loaded {
        js_sys::eval(CLEANUP_MAP_JS).map_err(describe_js_error)?;
    }
    Ok(())
}

/// Load Leaflet if needed, build the map in `container_id` and add one marker
/// per entry. Resolves once the map is on screen.
pub async fn render_cleanup_map(
    container_id: &str,
    markers: &[MapMarker],
    config: &MapConfig,
) -> Result<(), String> {
    ensure_map_script()?;

    // JSON is a valid JS literal, so the payloads are inlined as-is.
    let id_json = serde_json::to_string(container_id).map_err(|e| e.to_string())?;
    let markers_json = serde_json::to_string(markers).map_err(|e| e.to_string())?;
    let config_json = serde_json::to_string(config).map_err(|e| e.to_string())?;
    let code = format!(
        "window.shoreSquadMap.render({}, {}, {})",
        id_json, markers_json, config_json
    );

    let promise: js_sys::Promise = js_sys::eval(&code)
        .map_err(describe_js_error)?
        .dyn_into()
        .map_err(describe_js_error)?;
    JsFuture::from(promise).await.map_err(describe_js_error)?;
    Ok(())
}

/// Call `on_visible` the first time the element scrolls into view.
///
/// The observer disconnects itself after firing. Fails if there is no
/// document or no element with that id.
pub fn observe_visibility(
    element_id: &str,
    mut on_visible: impl FnMut() + 'static,
) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;
    let element = document
        .get_element_by_id(element_id)
        .ok_or_else(|| format!("no element #{}", element_id))?;

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            let visible = entries.iter().any(|entry| {
                entry
                    .unchecked_into::<web_sys::IntersectionObserverEntry>()
                    .is_intersecting()
            });
            if visible {
                observer.disconnect();
                on_visible();
            }
        },
    );
    let observer = web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref())
        .map_err(describe_js_error)?;
    observer.observe(&element);
    // The observer owns the callback for the rest of the page's life.
    callback.forget();
    Ok(())
}

/// Resolve after `ms` milliseconds (setTimeout). Never resolves without a window.
pub async fn sleep(ms: u64) {
    let delay = ms.min(i32::MAX as u64) as i32;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, delay);
        }
    });
    let _ = JsFuture::from(promise).await;
}

/// Milliseconds since the epoch, from the browser clock.
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}
