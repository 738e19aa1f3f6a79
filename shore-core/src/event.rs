use chrono::{Duration, NaiveDate};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Embedded CSV data for the sample events.
pub static CSV_OBJECT: &str = include_str!("../../fixtures/events.csv");

/// A scheduled cleanup activity that users can join.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub title: String,
    pub date: NaiveDate,
    /// Only ever incremented, by `EventList::join`.
    pub participants: u32,
    pub location: String,
}

/// The in-memory event set. Ids are unique.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EventList {
    events: Vec<Event>,
}

impl EventList {
    /// Build a list, rejecting duplicate ids.
    pub fn new(events: Vec<Event>) -> anyhow::Result<Self> {
        let mut seen = HashSet::new();
        for event in &events {
            if !seen.insert(event.id) {
                anyhow::bail!("duplicate event id {}", event.id);
            }
        }
        Ok(Self { events })
    }

    /// Parse a CSV string of events, resolving day offsets against `today`.
    ///
    /// Expected columns (with headers): `ID,TITLE,DAYS FROM NOW,PARTICIPANTS,LOCATION`
    pub fn parse_event_csv(csv_object: &str, today: NaiveDate) -> anyhow::Result<Self> {
        let mut events = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let r = row?;
            let id: u32 = r.get(0).unwrap_or("").trim().parse()?;
            let title = r.get(1).unwrap_or("").trim().to_string();
            let days: i64 = r.get(2).unwrap_or("0").trim().parse()?;
            let participants: u32 = r.get(3).unwrap_or("0").trim().parse()?;
            let location = r.get(4).unwrap_or("").trim().to_string();
            events.push(Event {
                id,
                title,
                date: today + Duration::days(days),
                participants,
                location,
            });
        }
        EventList::new(events)
    }

    /// The built-in sample events, dated relative to `today`.
    pub fn sample_events(today: NaiveDate) -> anyhow::Result<Self> {
        EventList::parse_event_csv(CSV_OBJECT, today)
    }

    pub fn get(&self, id: u32) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Add one participant to the event with `id`.
    ///
    /// Returns the updated event, or `None` (and changes nothing) when no
    /// event has that id.
    pub fn join(&mut self, id: u32) -> Option<&Event> {
        let event = self.events.iter_mut().find(|e| e.id == id)?;
        event.participants = event.participants.saturating_add(1);
        Some(event)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn sample_events_are_dated_from_today() {
        let events = EventList::sample_events(today()).unwrap();
        assert_eq!(events.len(), 2);
        let first = events.get(1).unwrap();
        assert_eq!(first.title, "Brooklyn Bridge Park Cleanup");
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 3, 8).unwrap());
        assert_eq!(first.participants, 24);
        let second = events.get(2).unwrap();
        assert_eq!(second.date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(second.location, "Central Park");
    }

    #[test]
    fn join_increments_only_participants() {
        let mut events = EventList::sample_events(today()).unwrap();
        let before = events.get(2).unwrap().clone();
        let after = events.join(2).unwrap().clone();
        assert_eq!(after.participants, before.participants + 1);
        assert_eq!(after.id, before.id);
        assert_eq!(after.title, before.title);
        assert_eq!(after.date, before.date);
        assert_eq!(after.location, before.location);
        // the other event is untouched
        assert_eq!(events.get(1).unwrap().participants, 24);
    }

    #[test]
    fn join_unknown_id_is_a_no_op() {
        let mut events = EventList::sample_events(today()).unwrap();
        let before = events.clone();
        assert!(events.join(99).is_none());
        assert_eq!(events, before);
    }

    #[test]
    fn repeated_joins_never_decrease() {
        let mut events = EventList::sample_events(today()).unwrap();
        let mut last = events.get(1).unwrap().participants;
        for _ in 0..5 {
            let now = events.join(1).unwrap().participants;
            assert_eq!(now, last + 1);
            last = now;
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let csv_data = "\
ID,TITLE,DAYS FROM NOW,PARTICIPANTS,LOCATION
1,A,1,0,Here
1,B,2,0,There
";
        assert!(EventList::parse_event_csv(csv_data, today()).is_err());
    }
}
