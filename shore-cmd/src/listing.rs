//! Sample data listings.

use chrono::Local;
use shore_core::event::EventList;
use shore_core::spot::CleanupSpot;
use shore_core::view::EventCard;

pub fn run_events() -> anyhow::Result<()> {
    let events = EventList::sample_events(Local::now().date_naive())?;
    for event in events.iter() {
        let card = EventCard::from(event);
        println!(
            "#{:<3} {:<32} {:<12} {:<22} {}",
            card.id, card.title, card.date_label, card.location, card.participants_label
        );
    }
    Ok(())
}

pub fn run_spots() -> anyhow::Result<()> {
    for spot in CleanupSpot::sample_spots()? {
        println!(
            "{:<22} {:>9.4} {:>9.4}  {:<6}  {}",
            spot.name, spot.latitude, spot.longitude, spot.priority.as_str(), spot.description
        );
    }
    Ok(())
}
