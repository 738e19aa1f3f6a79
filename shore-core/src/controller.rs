//! Application state.
//!
//! One `Controller` is created at startup and handed to every UI callback.
//! Async work (the weather fetch, loading Leaflet) happens outside; the
//! controller is told when it starts and how it ended, so every state change
//! is a plain synchronous method call.

use crate::config::AppConfig;
use crate::error::{ActivationError, WeatherError};
use crate::event::{self, EventList};
use crate::latch::ActivationLatch;
use crate::notice::{NoticeId, NoticeStack, Severity};
use crate::service::WeatherSnapshot;
use crate::spot::{self, CleanupSpot};
use crate::view::{map_markers, EventCard, MapMarker, WeatherView};
use anyhow::Context;
use chrono::NaiveDate;

pub const MAP_FAILED_MESSAGE: &str = "Failed to load map. Please try again later.";
pub const WEATHER_FAILED_MESSAGE: &str = "Weather data unavailable. Please try again later.";
pub const JOIN_CREW_MESSAGE: &str = "Feature coming soon! Join our newsletter for updates.";

/// What the map region shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MapStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// What the weather widget shows. Only a full snapshot is ever rendered.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum WeatherPanel {
    #[default]
    Idle,
    Loading,
    Ready(Box<WeatherSnapshot>),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct Controller {
    config: AppConfig,
    spots: Vec<CleanupSpot>,
    events: EventList,
    map_latch: ActivationLatch,
    weather_latch: ActivationLatch,
    map_status: MapStatus,
    weather: WeatherPanel,
    notices: NoticeStack,
}

impl Controller {
    pub fn new(config: AppConfig) -> Self {
        let notices = NoticeStack::new(config.notice_ttl_ms);
        Self {
            config,
            spots: Vec::new(),
            events: EventList::default(),
            map_latch: ActivationLatch::default(),
            weather_latch: ActivationLatch::default(),
            map_status: MapStatus::default(),
            weather: WeatherPanel::default(),
            notices,
        }
    }

    /// Load the sample spots and events.
    pub fn initialize(&mut self, today: NaiveDate) -> anyhow::Result<()> {
        self.initialize_from(spot::CSV_OBJECT, event::CSV_OBJECT, today)
    }

    /// Load spots and events from CSV text.
    ///
    /// On error nothing is replaced; the caller logs and carries on.
    pub fn initialize_from(
        &mut self,
        spots_csv: &str,
        events_csv: &str,
        today: NaiveDate,
    ) -> anyhow::Result<()> {
        let spots = CleanupSpot::parse_spot_csv(spots_csv).context("loading cleanup spots")?;
        let events = EventList::parse_event_csv(events_csv, today).context("loading events")?;
        log::info!(
            "Loaded {} cleanup spots and {} events",
            spots.len(),
            events.len()
        );
        self.spots = spots;
        self.events = events;
        Ok(())
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn spots(&self) -> &[CleanupSpot] {
        &self.spots
    }

    pub fn events(&self) -> &EventList {
        &self.events
    }

    pub fn notices(&self) -> &NoticeStack {
        &self.notices
    }

    pub fn map_status(&self) -> &MapStatus {
        &self.map_status
    }

    pub fn weather(&self) -> &WeatherPanel {
        &self.weather
    }

    pub fn event_cards(&self) -> Vec<EventCard> {
        self.events.iter().map(EventCard::from).collect()
    }

    pub fn map_markers(&self) -> Vec<MapMarker> {
        map_markers(&self.spots)
    }

    pub fn weather_view(&self) -> Option<WeatherView> {
        match &self.weather {
            WeatherPanel::Ready(snapshot) => Some(WeatherView::from(snapshot.as_ref())),
            _ => None,
        }
    }

    /// Claim the map activation. `true` exactly once; the caller then loads
    /// the map and reports back through `finish_map_activation`.
    pub fn begin_map_activation(&mut self) -> bool {
        if !self.map_latch.trigger() {
            return false;
        }
        self.map_status = MapStatus::Loading;
        true
    }

    pub fn finish_map_activation(&mut self, result: Result<(), ActivationError>) {
        self.map_status = match result {
            Ok(()) => {
                log::info!("Map initialized with {} markers", self.spots.len());
                MapStatus::Ready
            }
            Err(e) => {
                log::warn!("{}", e);
                MapStatus::Failed(MAP_FAILED_MESSAGE.to_string())
            }
        };
    }

    /// Claim the weather activation. `true` exactly once.
    pub fn begin_weather_activation(&mut self) -> bool {
        if !self.weather_latch.trigger() {
            return false;
        }
        self.weather = WeatherPanel::Loading;
        true
    }

    /// Record the outcome of the joined weather fetch.
    ///
    /// A failure never leaves part of a snapshot on screen; it posts an error
    /// notice and returns its id.
    pub fn finish_weather_activation(
        &mut self,
        result: Result<WeatherSnapshot, WeatherError>,
        now: u64,
    ) -> Option<NoticeId> {
        match result {
            Ok(snapshot) => {
                self.weather = WeatherPanel::Ready(Box::new(snapshot));
                None
            }
            Err(e) => {
                log::warn!("{}", ActivationError::from(e));
                self.weather = WeatherPanel::Failed(WEATHER_FAILED_MESSAGE.to_string());
                Some(self.notify(WEATHER_FAILED_MESSAGE, Severity::Error, now))
            }
        }
    }

    pub fn map_activated(&self) -> bool {
        self.map_latch.is_active()
    }

    pub fn weather_activated(&self) -> bool {
        self.weather_latch.is_active()
    }

    /// Join an event. Unknown ids are ignored.
    pub fn join_event(&mut self, id: u32, now: u64) -> Option<NoticeId> {
        let title = self.events.join(id)?.title.clone();
        let message = format!("You've joined \"{}\"! Check your email for details.", title);
        Some(self.notify(message, Severity::Success, now))
    }

    /// Acknowledge a suggested spot. Blank input is ignored.
    pub fn record_suggested_spot(&mut self, name: &str, now: u64) -> Option<NoticeId> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let message = format!("Thanks for suggesting \"{}\"! Our team will review it.", name);
        Some(self.notify(message, Severity::Success, now))
    }

    pub fn join_crew(&mut self, now: u64) -> NoticeId {
        self.notify(JOIN_CREW_MESSAGE, Severity::Info, now)
    }

    pub fn notify(&mut self, message: impl Into<String>, severity: Severity, now: u64) -> NoticeId {
        self.notices.push(message, severity, now)
    }

    pub fn dismiss_notice(&mut self, id: NoticeId) -> bool {
        self.notices.dismiss(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{fetch_snapshot, SimulatedWeatherService};
    use futures::executor::block_on;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn controller() -> Controller {
        let mut controller = Controller::new(AppConfig::simulated());
        controller.initialize(today()).unwrap();
        controller
    }

    #[test]
    fn initialize_loads_sample_data() {
        let controller = controller();
        assert_eq!(controller.spots().len(), 3);
        assert_eq!(controller.events().len(), 2);
        assert_eq!(controller.event_cards()[0].participants_label, "24 going");
        assert!(!controller.map_activated());
        assert!(!controller.weather_activated());
    }

    #[test]
    fn join_event_notifies_and_increments() {
        let mut controller = controller();
        let id = controller.join_event(1, 100).unwrap();
        assert_eq!(controller.events().get(1).unwrap().participants, 25);
        let notice = controller.notices().iter().find(|n| n.id == id).unwrap();
        assert_eq!(notice.severity, Severity::Success);
        assert_eq!(
            notice.message,
            "You've joined \"Brooklyn Bridge Park Cleanup\"! Check your email for details."
        );
    }

    #[test]
    fn join_missing_event_changes_nothing() {
        let mut controller = controller();
        let events = controller.events().clone();
        assert!(controller.join_event(42, 100).is_none());
        assert_eq!(controller.events(), &events);
        assert!(controller.notices().is_empty());
    }

    #[test]
    fn suggestion_requires_text() {
        let mut controller = controller();
        assert!(controller.record_suggested_spot("   ", 0).is_none());
        assert!(controller.notices().is_empty());
        controller.record_suggested_spot(" Orchard Beach ", 0).unwrap();
        let notice = controller.notices().iter().next().unwrap();
        assert_eq!(
            notice.message,
            "Thanks for suggesting \"Orchard Beach\"! Our team will review it."
        );
    }

    #[test]
    fn map_activates_once() {
        let mut controller = controller();
        assert!(controller.begin_map_activation());
        assert_eq!(controller.map_status(), &MapStatus::Loading);
        assert!(!controller.begin_map_activation());
        assert!(!controller.begin_map_activation());
        controller.finish_map_activation(Ok(()));
        assert_eq!(controller.map_status(), &MapStatus::Ready);
        assert!(!controller.begin_map_activation());
    }

    #[test]
    fn map_failure_is_shown_inline() {
        let mut controller = controller();
        assert!(controller.begin_map_activation());
        controller.finish_map_activation(Err(ActivationError::Map("script blocked".into())));
        assert_eq!(
            controller.map_status(),
            &MapStatus::Failed(MAP_FAILED_MESSAGE.to_string())
        );
        // no automatic retry
        assert!(!controller.begin_map_activation());
    }

    #[test]
    fn weather_renders_full_snapshot() {
        let mut controller = controller();
        assert!(controller.begin_weather_activation());
        assert!(!controller.begin_weather_activation());
        let service = SimulatedWeatherService::new(today());
        let result = block_on(fetch_snapshot(&service));
        assert!(controller.finish_weather_activation(result, 0).is_none());
        let view = controller.weather_view().unwrap();
        assert_eq!(view.forecast.len(), 4);
        assert_eq!(view.condition, "Partly Cloudy");
    }

    #[test]
    fn half_failed_weather_never_renders() {
        let mut controller = controller();
        assert!(controller.begin_weather_activation());
        let service = SimulatedWeatherService::new(today()).without_forecast();
        let result = block_on(fetch_snapshot(&service));
        let notice = controller.finish_weather_activation(result, 1_000).unwrap();
        assert!(controller.weather_view().is_none());
        assert_eq!(
            controller.weather(),
            &WeatherPanel::Failed(WEATHER_FAILED_MESSAGE.to_string())
        );
        let n = controller.notices().iter().find(|n| n.id == notice).unwrap();
        assert_eq!(n.severity, Severity::Error);
        assert!(controller.dismiss_notice(notice));
        assert!(!controller.dismiss_notice(notice));
    }

    #[test]
    fn join_crew_is_informational() {
        let mut controller = controller();
        let id = controller.join_crew(0);
        let notice = controller.notices().iter().find(|n| n.id == id).unwrap();
        assert_eq!(notice.severity, Severity::Info);
        assert_eq!(notice.message, JOIN_CREW_MESSAGE);
    }

    #[test]
    fn bad_fixture_leaves_the_app_usable() {
        let bad_priority = "\
LATITUDE,LONGITUDE,NAME,PRIORITY,DESCRIPTION
40.7,-73.9,Pier 7,urgent,Driftwood
";
        let mut controller = Controller::new(AppConfig::simulated());
        let err = controller
            .initialize_from(bad_priority, event::CSV_OBJECT, today())
            .unwrap_err();
        assert!(format!("{:#}", err).contains("loading cleanup spots"));
        assert!(controller.spots().is_empty());
        assert!(controller.events().is_empty());

        // still usable: lookups miss quietly, notices still post
        assert!(controller.join_event(1, 0).is_none());
        controller.join_crew(0);
        assert_eq!(controller.notices().len(), 1);
        assert!(controller.begin_map_activation());
    }

    #[test]
    fn duplicate_event_ids_fail_startup() {
        let duplicates = "\
ID,TITLE,DAYS FROM NOW,PARTICIPANTS,LOCATION
1,A,1,0,Here
1,B,2,0,There
";
        let mut controller = Controller::new(AppConfig::simulated());
        assert!(controller
            .initialize_from(spot::CSV_OBJECT, duplicates, today())
            .is_err());
        assert!(controller.spots().is_empty());
        assert!(controller.events().is_empty());
    }

    #[test]
    fn failed_reload_keeps_loaded_data() {
        let mut controller = controller();
        let bad_latitude = "LATITUDE,LONGITUDE,NAME,PRIORITY,DESCRIPTION\nnorth,-73.9,Pier 7,low,Cans\n";
        assert!(controller
            .initialize_from(bad_latitude, event::CSV_OBJECT, today())
            .is_err());
        assert_eq!(controller.spots().len(), 3);
        assert_eq!(controller.events().len(), 2);
    }

    #[test]
    fn every_notice_is_removable_by_its_own_id() {
        let mut controller = controller();
        controller.begin_weather_activation();
        let service = SimulatedWeatherService::new(today()).without_current();
        let ids = vec![
            controller.join_event(1, 10_000).unwrap(),
            controller.record_suggested_spot("Orchard Beach", 10_000).unwrap(),
            controller.join_crew(10_000),
            controller
                .finish_weather_activation(block_on(fetch_snapshot(&service)), 10_000)
                .unwrap(),
        ];
        assert_eq!(controller.notices().len(), ids.len());

        // removal is by id, independent of any clock reading
        for (removed, id) in ids.iter().enumerate() {
            assert!(controller.dismiss_notice(*id));
            assert_eq!(controller.notices().len(), ids.len() - removed - 1);
        }
        assert!(ids.iter().all(|id| !controller.dismiss_notice(*id)));
    }
}
