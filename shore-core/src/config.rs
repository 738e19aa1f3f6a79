//! Compiled-in configuration.
//!
//! There is no environment or file based configuration; `AppConfig::default()`
//! is what the web app and the CLI run with.

use serde::Serialize;

/// data.gov.sg 24-hour forecast (current conditions) endpoint.
pub const CURRENT_CONDITIONS_URL: &str =
    "https://api.data.gov.sg/v1/environment/24-hour-weather-forecast";

/// data.gov.sg 4-day outlook endpoint.
pub const FOUR_DAY_FORECAST_URL: &str =
    "https://api.data.gov.sg/v1/environment/4-day-weather-forecast";

pub const LEAFLET_JS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
pub const LEAFLET_CSS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";

pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// New York City, where the sample spots live.
pub const DEFAULT_CENTER: (f64, f64) = (40.7128, -74.0060);
pub const DEFAULT_ZOOM: u8 = 10;

/// Wind speed (km/h, upper bound of the reported range) above which the
/// high-wind advisory applies.
pub const HIGH_WIND_KMH: f64 = 25.0;

/// How long a notice stays on screen before it expires.
pub const NOTICE_TTL_MS: u64 = 5_000;

/// Number of days in the forecast outlook.
pub const FORECAST_DAYS: usize = 4;

/// Where weather data comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeatherSource {
    /// Two concurrent reads against the data.gov.sg endpoints.
    #[default]
    Live,
    /// Deterministic offline data, used by tests and `--simulated`.
    Simulated,
}

/// Weather service endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherEndpoints {
    pub current_url: String,
    pub forecast_url: String,
}

impl Default for WeatherEndpoints {
    fn default() -> Self {
        Self {
            current_url: CURRENT_CONDITIONS_URL.to_string(),
            forecast_url: FOUR_DAY_FORECAST_URL.to_string(),
        }
    }
}

/// Leaflet map settings. Serialized as-is into the JS bridge config.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    pub script_url: String,
    pub stylesheet_url: String,
    pub tile_url: String,
    pub attribution: String,
    pub center: [f64; 2],
    pub zoom: u8,
    pub scroll_wheel_zoom: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            script_url: LEAFLET_JS_URL.to_string(),
            stylesheet_url: LEAFLET_CSS_URL.to_string(),
            tile_url: TILE_URL.to_string(),
            attribution: TILE_ATTRIBUTION.to_string(),
            center: [DEFAULT_CENTER.0, DEFAULT_CENTER.1],
            zoom: DEFAULT_ZOOM,
            scroll_wheel_zoom: false,
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub map: MapConfig,
    pub endpoints: WeatherEndpoints,
    pub weather_source: WeatherSource,
    pub notice_ttl_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            map: MapConfig::default(),
            endpoints: WeatherEndpoints::default(),
            weather_source: WeatherSource::Live,
            notice_ttl_ms: NOTICE_TTL_MS,
        }
    }
}

impl AppConfig {
    /// Same as the default, but backed by the simulated weather source.
    pub fn simulated() -> Self {
        Self {
            weather_source: WeatherSource::Simulated,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_live_and_centered_on_nyc() {
        let config = AppConfig::default();
        assert_eq!(config.weather_source, WeatherSource::Live);
        assert_eq!(config.map.center, [40.7128, -74.0060]);
        assert_eq!(config.map.zoom, 10);
        assert!(!config.map.scroll_wheel_zoom);
        assert_eq!(config.notice_ttl_ms, 5_000);
    }

    #[test]
    fn map_config_serializes_camel_case() {
        let json = serde_json::to_value(MapConfig::default()).unwrap();
        assert_eq!(json["scrollWheelZoom"], false);
        assert_eq!(json["tileUrl"], TILE_URL);
        assert_eq!(json["center"][0], 40.7128);
    }
}
