//! Weather service trait and its implementations.
//!
//! `fetch_snapshot` issues both reads concurrently and only succeeds when both
//! do. There are no retries and no timeouts beyond what the transport imposes.

use crate::advisory::{classify_advisory, Advisory};
#[cfg(feature = "api")]
use crate::config::WeatherEndpoints;
use crate::config::FORECAST_DAYS;
use crate::error::{WeatherError, WeatherResult};
use crate::weather::{Bounds, CurrentWeather, ForecastDay, Temperature, Wind};
use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveTime};
use serde::Serialize;

/// Read-only access to current conditions and the 4-day outlook.
///
/// Futures are not `Send`: the browser build runs everything on one thread.
#[async_trait(?Send)]
pub trait WeatherService {
    async fn current_conditions(&self) -> WeatherResult<CurrentWeather>;
    async fn four_day_forecast(&self) -> WeatherResult<Vec<ForecastDay>>;
}

/// The joined result of both reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSnapshot {
    pub current: CurrentWeather,
    pub forecast: Vec<ForecastDay>,
}

impl WeatherSnapshot {
    pub fn advisory(&self) -> Advisory {
        classify_advisory(&self.current.condition, self.current.wind.speed.high)
    }
}

/// Run both reads concurrently; the first failure fails the pair.
pub async fn fetch_snapshot<S: WeatherService + ?Sized>(service: &S) -> WeatherResult<WeatherSnapshot> {
    let (current, forecast) =
        futures::try_join!(service.current_conditions(), service.four_day_forecast())?;
    log::info!(
        "Weather snapshot: {} ({} forecast days)",
        current.condition,
        forecast.len()
    );
    Ok(WeatherSnapshot { current, forecast })
}

/// data.gov.sg client.
#[cfg(feature = "api")]
pub struct HttpWeatherService {
    client: reqwest::Client,
    endpoints: WeatherEndpoints,
}

#[cfg(feature = "api")]
impl HttpWeatherService {
    pub fn new(endpoints: WeatherEndpoints) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoints,
        }
    }

    async fn get_body(&self, url: &str) -> WeatherResult<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("Bad response status from {}: {}", url, status);
            return Err(WeatherError::Status(status.as_u16(), url.to_string()));
        }
        Ok(response.text().await?)
    }
}

#[cfg(feature = "api")]
#[async_trait(?Send)]
impl WeatherService for HttpWeatherService {
    async fn current_conditions(&self) -> WeatherResult<CurrentWeather> {
        let body = self.get_body(&self.endpoints.current_url).await?;
        crate::weather::parse_current(&body)
    }

    async fn four_day_forecast(&self) -> WeatherResult<Vec<ForecastDay>> {
        let body = self.get_body(&self.endpoints.forecast_url).await?;
        crate::weather::parse_forecast(&body)
    }
}

/// Offline weather source with fixed, fair-weather data.
///
/// Either read can be switched off to exercise the failure paths.
#[derive(Debug, Clone)]
pub struct SimulatedWeatherService {
    current: Option<CurrentWeather>,
    forecast: Option<Vec<ForecastDay>>,
}

impl SimulatedWeatherService {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            current: Some(simulated_current(today)),
            forecast: Some(simulated_forecast(today)),
        }
    }

    pub fn with_current(mut self, current: CurrentWeather) -> Self {
        self.current = Some(current);
        self
    }

    pub fn without_current(mut self) -> Self {
        self.current = None;
        self
    }

    pub fn without_forecast(mut self) -> Self {
        self.forecast = None;
        self
    }
}

#[async_trait(?Send)]
impl WeatherService for SimulatedWeatherService {
    async fn current_conditions(&self) -> WeatherResult<CurrentWeather> {
        self.current
            .clone()
            .ok_or(WeatherError::Unavailable("current weather"))
    }

    async fn four_day_forecast(&self) -> WeatherResult<Vec<ForecastDay>> {
        self.forecast
            .clone()
            .ok_or(WeatherError::Unavailable("forecast"))
    }
}

fn simulated_current(today: NaiveDate) -> CurrentWeather {
    let updated_at = today.and_time(NaiveTime::MIN).and_utc().fixed_offset();
    CurrentWeather {
        temperature: Temperature {
            current: 24.0,
            low: 20.0,
            high: 28.0,
        },
        condition: "Partly Cloudy".to_string(),
        humidity: Bounds {
            low: 50.0,
            high: 80.0,
        },
        wind: Wind {
            speed: Bounds {
                low: 8.0,
                high: 15.0,
            },
            direction: "NE".to_string(),
        },
        periods: Vec::new(),
        updated_at,
    }
}

fn simulated_forecast(today: NaiveDate) -> Vec<ForecastDay> {
    let conditions = ["Sunny", "Partly Cloudy", "Overcast", "Sunny"];
    (0..FORECAST_DAYS)
        .map(|i| ForecastDay {
            date: today + Duration::days(i as i64 + 1),
            condition: conditions[i % conditions.len()].to_string(),
            temperature: Bounds {
                low: 20.0 + i as f64,
                high: 28.0 + i as f64,
            },
            humidity: Bounds {
                low: 50.0,
                high: 80.0,
            },
            wind: Wind {
                speed: Bounds {
                    low: 8.0,
                    high: 15.0,
                },
                direction: "NE".to_string(),
            },
        })
        .collect()
}
