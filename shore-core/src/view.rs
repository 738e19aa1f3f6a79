//! View models: a pure mapping from controller state to what the page shows.
//!
//! Components lay these out; all formatting decisions live here so they can be
//! tested without a browser.

use crate::advisory::condition_emoji;
use crate::event::Event;
use crate::service::WeatherSnapshot;
use crate::spot::CleanupSpot;
use chrono::NaiveDate;
use serde::Serialize;

/// `Mon, Jan 5`
pub fn short_date(date: &NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// Minimal escaping for text interpolated into popup markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventCard {
    pub id: u32,
    pub title: String,
    pub participants_label: String,
    pub location: String,
    pub date_label: String,
}

impl From<&Event> for EventCard {
    fn from(event: &Event) -> Self {
        EventCard {
            id: event.id,
            title: event.title.clone(),
            participants_label: format!("{} going", event.participants),
            location: event.location.clone(),
            date_label: short_date(&event.date),
        }
    }
}

/// A Leaflet marker, serialized for the JS bridge.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    pub latitude: f64,
    pub longitude: f64,
    pub popup_html: String,
}

/// Popup markup for one spot: name, description and a priority badge.
pub fn popup_html(spot: &CleanupSpot) -> String {
    format!(
        r#"<div class="popup-content"><h3>{name}</h3><p>{description}</p><span class="priority-badge priority-{priority}">{priority} priority</span></div>"#,
        name = escape_html(&spot.name),
        description = escape_html(&spot.description),
        priority = spot.priority,
    )
}

pub fn map_markers(spots: &[CleanupSpot]) -> Vec<MapMarker> {
    spots
        .iter()
        .map(|spot| MapMarker {
            latitude: spot.latitude,
            longitude: spot.longitude,
            popup_html: popup_html(spot),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastCard {
    pub date_label: String,
    pub emoji: &'static str,
    pub high: String,
    pub low: String,
    pub condition: String,
    pub wind: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherView {
    pub updated_label: String,
    pub current_temp: String,
    pub temp_range: String,
    pub emoji: &'static str,
    pub condition: String,
    pub wind: String,
    pub humidity: String,
    pub forecast: Vec<ForecastCard>,
    pub advisory: &'static str,
}

impl From<&WeatherSnapshot> for WeatherView {
    fn from(snapshot: &WeatherSnapshot) -> Self {
        let current = &snapshot.current;
        WeatherView {
            updated_label: format!("Updated: {}", current.updated_at.format("%H:%M")),
            current_temp: format!("{}°C", current.temperature.current),
            temp_range: format!("{}° - {}°", current.temperature.low, current.temperature.high),
            emoji: condition_emoji(&current.condition),
            condition: current.condition.clone(),
            wind: format!(
                "{}-{} km/h {}",
                current.wind.speed.low, current.wind.speed.high, current.wind.direction
            ),
            humidity: format!("{}-{}%", current.humidity.low, current.humidity.high),
            forecast: snapshot
                .forecast
                .iter()
                .map(|day| ForecastCard {
                    date_label: short_date(&day.date),
                    emoji: condition_emoji(&day.condition),
                    high: format!("{}°", day.temperature.high),
                    low: format!("{}°", day.temperature.low),
                    condition: day.condition.clone(),
                    wind: format!("💨 {}-{} km/h", day.wind.speed.low, day.wind.speed.high),
                })
                .collect(),
            advisory: snapshot.advisory().message(),
        }
    }
}
