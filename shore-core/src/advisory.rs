//! Cleanup recommendation derived from current conditions.

use crate::config::HIGH_WIND_KMH;
use serde::Serialize;

/// The five fixed recommendations, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Advisory {
    SevereWeather,
    LightRain,
    HighWind,
    ClearWeather,
    Neutral,
}

impl Advisory {
    pub fn message(&self) -> &'static str {
        match self {
            Advisory::SevereWeather => {
                "⚠️ Not ideal for beach cleanup due to thunderstorms. Stay safe and wait for better weather!"
            }
            Advisory::LightRain => {
                "🌧️ Light rain may make cleanup challenging. Consider rescheduling or bringing waterproof gear."
            }
            Advisory::HighWind => {
                "💨 Strong winds today. Great for cleanup but bring secure containers for collected trash."
            }
            Advisory::ClearWeather => {
                "☀️ Perfect weather for beach cleanup! Don't forget sunscreen and plenty of water."
            }
            Advisory::Neutral => {
                "🌤️ Good conditions for beach cleanup. Check the 4-day forecast to plan your next cleanup event."
            }
        }
    }
}

/// Map a condition text and wind speed (km/h, upper bound) to an advisory.
///
/// First match wins: thunder/heavy rain, then rain/shower, then wind above
/// `HIGH_WIND_KMH`, then sunny/partly cloudy, then the neutral default.
pub fn classify_advisory(condition: &str, wind_speed: f64) -> Advisory {
    let condition = condition.to_lowercase();
    if condition.contains("thunder") || condition.contains("heavy rain") {
        Advisory::SevereWeather
    } else if condition.contains("rain") || condition.contains("shower") {
        Advisory::LightRain
    } else if wind_speed > HIGH_WIND_KMH {
        Advisory::HighWind
    } else if condition.contains("sunny") || condition.contains("partly cloudy") {
        Advisory::ClearWeather
    } else {
        Advisory::Neutral
    }
}

/// Pick an emoji for a free-text condition.
pub fn condition_emoji(condition: &str) -> &'static str {
    let condition = condition.to_lowercase();
    if condition.contains("thunder") {
        "⛈️"
    } else if condition.contains("rain") || condition.contains("shower") {
        "🌧️"
    } else if condition.contains("partly cloudy") {
        "⛅"
    } else if condition.contains("cloudy") {
        "☁️"
    } else if condition.contains("sunny") || condition.contains("clear") {
        "☀️"
    } else {
        "🌤️"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thunderstorms_are_severe() {
        assert_eq!(classify_advisory("Thunderstorms", 10.0), Advisory::SevereWeather);
        assert_eq!(classify_advisory("Heavy Rain", 40.0), Advisory::SevereWeather);
        assert_eq!(classify_advisory("Thundery Showers", 0.0), Advisory::SevereWeather);
    }

    #[test]
    fn rain_beats_wind() {
        assert_eq!(classify_advisory("Light Rain", 40.0), Advisory::LightRain);
        assert_eq!(classify_advisory("Passing Showers", 5.0), Advisory::LightRain);
    }

    #[test]
    fn wind_beats_sunny() {
        assert_eq!(classify_advisory("Sunny", 30.0), Advisory::HighWind);
        assert_eq!(classify_advisory("Overcast", 26.0), Advisory::HighWind);
    }

    #[test]
    fn wind_threshold_is_exclusive() {
        assert_eq!(classify_advisory("Sunny", 25.0), Advisory::ClearWeather);
    }

    #[test]
    fn clear_and_default() {
        assert_eq!(classify_advisory("Partly Cloudy (Day)", 10.0), Advisory::ClearWeather);
        assert_eq!(classify_advisory("Fair (Day)", 10.0), Advisory::Neutral);
        assert_eq!(classify_advisory("", 0.0), Advisory::Neutral);
    }

    #[test]
    fn every_advisory_has_a_distinct_message() {
        let all = [
            Advisory::SevereWeather,
            Advisory::LightRain,
            Advisory::HighWind,
            Advisory::ClearWeather,
            Advisory::Neutral,
        ];
        let messages: std::collections::HashSet<&str> = all.iter().map(|a| a.message()).collect();
        assert_eq!(messages.len(), 5);
        assert!(Advisory::SevereWeather.message().contains("thunderstorms"));
    }

    #[test]
    fn test_condition_emoji() {
        assert_eq!(condition_emoji("Thundery Showers"), "⛈️");
        assert_eq!(condition_emoji("Showers"), "🌧️");
        assert_eq!(condition_emoji("Partly Cloudy"), "⛅");
        assert_eq!(condition_emoji("Cloudy"), "☁️");
        assert_eq!(condition_emoji("Fair and clear"), "☀️");
        assert_eq!(condition_emoji("Hazy"), "🌤️");
    }
}
