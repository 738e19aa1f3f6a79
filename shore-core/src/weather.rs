//! Weather data types and data.gov.sg payload parsing.
//!
//! Both endpoints return `{ "items": [ ... ] }` where the first item holds the
//! payload. Anything that does not match the expected shape is a hard failure;
//! no defaults are synthesized.

use crate::config::FORECAST_DAYS;
use crate::error::{WeatherError, WeatherResult};
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An inclusive low/high pair as reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub low: f64,
    pub high: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// km/h
    pub speed: Bounds,
    pub direction: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    /// Midpoint of the day's range, rounded.
    pub current: f64,
    pub low: f64,
    pub high: f64,
}

/// One observation period of the 24-hour forecast, with per-region text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPeriod {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub regions: BTreeMap<String, String>,
}

/// Current conditions, from the 24-hour forecast endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temperature: Temperature,
    pub condition: String,
    pub humidity: Bounds,
    pub wind: Wind,
    pub periods: Vec<ForecastPeriod>,
    pub updated_at: DateTime<FixedOffset>,
}

/// One day of the 4-day outlook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub condition: String,
    pub temperature: Bounds,
    pub humidity: Bounds,
    pub wind: Wind,
}

// ─── Wire format ───

#[derive(Debug, Deserialize)]
struct ItemsEnvelope<T> {
    items: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct WireWind {
    speed: Bounds,
    direction: String,
}

impl From<WireWind> for Wind {
    fn from(w: WireWind) -> Self {
        Wind {
            speed: w.speed,
            direction: w.direction,
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireGeneral {
    forecast: String,
    relative_humidity: Bounds,
    temperature: Bounds,
    wind: WireWind,
}

#[derive(Debug, Deserialize)]
struct WireTime {
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
}

#[derive(Debug, Deserialize)]
struct WirePeriod {
    time: WireTime,
    #[serde(default)]
    regions: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct WireCurrentItem {
    update_timestamp: DateTime<FixedOffset>,
    general: WireGeneral,
    #[serde(default)]
    periods: Vec<WirePeriod>,
}

#[derive(Debug, Deserialize)]
struct WireForecastDay {
    date: NaiveDate,
    forecast: String,
    temperature: Bounds,
    relative_humidity: Bounds,
    wind: WireWind,
}

#[derive(Debug, Deserialize)]
struct WireForecastItem {
    forecasts: Vec<WireForecastDay>,
}

fn first_item<T: serde::de::DeserializeOwned>(body: &str, what: &'static str) -> WeatherResult<T> {
    let envelope: ItemsEnvelope<T> =
        serde_json::from_str(body).map_err(|e| WeatherError::Malformed(what, e.to_string()))?;
    envelope
        .items
        .into_iter()
        .next()
        .ok_or_else(|| WeatherError::Malformed(what, "empty items list".to_string()))
}

/// Parse the body of the 24-hour forecast endpoint.
pub fn parse_current(body: &str) -> WeatherResult<CurrentWeather> {
    let item: WireCurrentItem = first_item(body, "current weather")?;
    let general = item.general;
    Ok(CurrentWeather {
        temperature: Temperature {
            current: ((general.temperature.low + general.temperature.high) / 2.0).round(),
            low: general.temperature.low,
            high: general.temperature.high,
        },
        condition: general.forecast,
        humidity: general.relative_humidity,
        wind: general.wind.into(),
        periods: item
            .periods
            .into_iter()
            .map(|p| ForecastPeriod {
                start: p.time.start,
                end: p.time.end,
                regions: p.regions,
            })
            .collect(),
        updated_at: item.update_timestamp,
    })
}

/// Parse the body of the 4-day outlook endpoint.
///
/// Exactly `FORECAST_DAYS` entries are returned; a shorter list is malformed
/// and anything past the fourth day is dropped.
pub fn parse_forecast(body: &str) -> WeatherResult<Vec<ForecastDay>> {
    let item: WireForecastItem = first_item(body, "forecast")?;
    if item.forecasts.len() < FORECAST_DAYS {
        return Err(WeatherError::Malformed(
            "forecast",
            format!("expected {} days, got {}", FORECAST_DAYS, item.forecasts.len()),
        ));
    }
    Ok(item
        .forecasts
        .into_iter()
        .take(FORECAST_DAYS)
        .map(|d| ForecastDay {
            date: d.date,
            condition: d.forecast,
            temperature: d.temperature,
            humidity: d.relative_humidity,
            wind: d.wind.into(),
        })
        .collect())
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Trimmed real responses from api.data.gov.sg.

    pub const CURRENT_BODY: &str = r#"{
  "items": [{
    "update_timestamp": "2024-03-01T05:36:35+08:00",
    "timestamp": "2024-03-01T05:24:00+08:00",
    "valid_period": {"start": "2024-03-01T06:00:00+08:00", "end": "2024-03-02T06:00:00+08:00"},
    "general": {
      "forecast": "Thundery Showers",
      "relative_humidity": {"low": 60, "high": 95},
      "temperature": {"low": 24, "high": 33},
      "wind": {"speed": {"low": 10, "high": 20}, "direction": "NNE"}
    },
    "periods": [{
      "time": {"start": "2024-03-01T06:00:00+08:00", "end": "2024-03-01T12:00:00+08:00"},
      "regions": {"west": "Cloudy", "east": "Cloudy", "central": "Cloudy", "south": "Cloudy", "north": "Cloudy"}
    }]
  }],
  "api_info": {"status": "healthy"}
}"#;

    pub const FORECAST_BODY: &str = r#"{
  "items": [{
    "update_timestamp": "2024-03-01T05:36:35+08:00",
    "forecasts": [
      {"date": "2024-03-02", "forecast": "Afternoon thundery showers",
       "relative_humidity": {"low": 55, "high": 95}, "temperature": {"low": 25, "high": 34},
       "wind": {"speed": {"low": 10, "high": 20}, "direction": "NNE"}},
      {"date": "2024-03-03", "forecast": "Partly cloudy",
       "relative_humidity": {"low": 55, "high": 90}, "temperature": {"low": 25, "high": 33},
       "wind": {"speed": {"low": 10, "high": 25}, "direction": "N"}},
      {"date": "2024-03-04", "forecast": "Fair and warm",
       "relative_humidity": {"low": 50, "high": 90}, "temperature": {"low": 26, "high": 34},
       "wind": {"speed": {"low": 15, "high": 30}, "direction": "NE"}},
      {"date": "2024-03-05", "forecast": "Late morning showers",
       "relative_humidity": {"low": 60, "high": 95}, "temperature": {"low": 24, "high": 32},
       "wind": {"speed": {"low": 5, "high": 15}, "direction": "VARIABLE"}}
    ]
  }],
  "api_info": {"status": "healthy"}
}"#;
}

#[cfg(test)]
mod tests {
    use super::fixtures::{CURRENT_BODY, FORECAST_BODY};
    use super::*;

    #[test]
    fn test_parse_current() {
        let current = parse_current(CURRENT_BODY).unwrap();
        assert_eq!(current.condition, "Thundery Showers");
        assert_eq!(current.temperature.low, 24.0);
        assert_eq!(current.temperature.high, 33.0);
        // (24 + 33) / 2 = 28.5, rounded away from zero
        assert_eq!(current.temperature.current, 29.0);
        assert_eq!(current.humidity.high, 95.0);
        assert_eq!(current.wind.speed.high, 20.0);
        assert_eq!(current.wind.direction, "NNE");
        assert_eq!(current.periods.len(), 1);
        assert_eq!(current.periods[0].regions["west"], "Cloudy");
        assert_eq!(current.updated_at.to_rfc3339(), "2024-03-01T05:36:35+08:00");
    }

    #[test]
    fn test_parse_forecast() {
        let forecast = parse_forecast(FORECAST_BODY).unwrap();
        assert_eq!(forecast.len(), 4);
        assert_eq!(forecast[0].date, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
        assert_eq!(forecast[1].condition, "Partly cloudy");
        assert_eq!(forecast[2].wind.speed.high, 30.0);
        assert_eq!(forecast[3].humidity.low, 60.0);
    }

    #[test]
    fn test_empty_items_is_malformed() {
        let err = parse_current(r#"{"items": []}"#).unwrap_err();
        assert!(matches!(err, WeatherError::Malformed("current weather", _)));
    }

    #[test]
    fn test_missing_fields_is_malformed() {
        let body = r#"{"items": [{"update_timestamp": "2024-03-01T05:36:35+08:00", "general": {"forecast": "Fair"}}]}"#;
        assert!(matches!(
            parse_current(body),
            Err(WeatherError::Malformed(_, _))
        ));
        assert!(parse_forecast("not json").is_err());
    }

    #[test]
    fn test_short_forecast_is_malformed() {
        let body = r#"{"items": [{"forecasts": [
            {"date": "2024-03-02", "forecast": "Fair",
             "relative_humidity": {"low": 55, "high": 95}, "temperature": {"low": 25, "high": 34},
             "wind": {"speed": {"low": 10, "high": 20}, "direction": "NNE"}}
        ]}]}"#;
        let err = parse_forecast(body).unwrap_err();
        assert!(err.to_string().contains("expected 4 days, got 1"));
    }
}
