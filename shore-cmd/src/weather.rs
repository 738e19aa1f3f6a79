//! One-shot weather report.

use chrono::Local;
use log::info;
use shore_core::config::AppConfig;
use shore_core::service::{
    fetch_snapshot, HttpWeatherService, SimulatedWeatherService, WeatherService, WeatherSnapshot,
};
use shore_core::view::WeatherView;

/// Fetch both reads and print the report. Fails if either read fails.
pub async fn run_weather(simulated: bool) -> anyhow::Result<()> {
    let config = if simulated {
        AppConfig::simulated()
    } else {
        AppConfig::default()
    };
    let service: Box<dyn WeatherService> = if simulated {
        Box::new(SimulatedWeatherService::new(Local::now().date_naive()))
    } else {
        Box::new(HttpWeatherService::new(config.endpoints.clone()))
    };

    info!("Fetching weather ({:?} source)", config.weather_source);
    let snapshot = fetch_snapshot(service.as_ref()).await?;
    print!("{}", format_report(&snapshot));
    Ok(())
}

/// Plain-text rendering of a snapshot.
pub fn format_report(snapshot: &WeatherSnapshot) -> String {
    let view = WeatherView::from(snapshot);
    let mut out = String::new();
    out.push_str(&format!("{}\n", view.updated_label));
    out.push_str(&format!(
        "Now: {} {} ({}) {}\n",
        view.emoji, view.current_temp, view.temp_range, view.condition
    ));
    out.push_str(&format!("Wind: {}  Humidity: {}\n", view.wind, view.humidity));
    for period in &snapshot.current.periods {
        let regions: Vec<String> = period
            .regions
            .iter()
            .map(|(region, text)| format!("{}={}", region, text))
            .collect();
        out.push_str(&format!(
            "  {}-{}: {}\n",
            period.start.format("%H:%M"),
            period.end.format("%H:%M"),
            regions.join(", ")
        ));
    }
    out.push_str("4-Day Forecast:\n");
    for day in &view.forecast {
        out.push_str(&format!(
            "  {} {} {}/{} {} {}\n",
            day.date_label, day.emoji, day.high, day.low, day.condition, day.wind
        ));
    }
    out.push_str(&format!("Recommendation: {}\n", view.advisory));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use futures::executor::block_on;

    #[test]
    fn report_lists_forecast_and_advisory() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let service = SimulatedWeatherService::new(today);
        let snapshot = block_on(fetch_snapshot(&service)).unwrap();
        let report = format_report(&snapshot);
        assert!(report.contains("Now: ⛅ 24°C (20° - 28°) Partly Cloudy"));
        assert!(report.contains("Sat, Mar 2"));
        assert_eq!(report.matches("km/h").count(), 5);
        assert!(report.contains("Perfect weather for beach cleanup"));
    }
}
