use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Embedded CSV data for the sample cleanup spots.
pub static CSV_OBJECT: &str = include_str!("../../fixtures/cleanup_spots.csv");

/// How urgently a spot needs volunteers.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => anyhow::bail!("unknown priority '{}'", other),
        }
    }
}

/// A point of interest for a beach or litter cleanup, shown as a map marker.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CleanupSpot {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    pub name: String,
    pub description: String,
    pub priority: Priority,
}

impl CleanupSpot {
    /// Parse a CSV string of cleanup spots.
    ///
    /// Expected columns (with headers): `LATITUDE,LONGITUDE,NAME,PRIORITY,DESCRIPTION`
    pub fn parse_spot_csv(csv_object: &str) -> anyhow::Result<Vec<CleanupSpot>> {
        let mut spots = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let record = row?;
            let latitude: f64 = record.get(0).unwrap_or("").trim().parse()?;
            let longitude: f64 = record.get(1).unwrap_or("").trim().parse()?;
            let name = record.get(2).unwrap_or("").trim();
            if name.is_empty() {
                anyhow::bail!("cleanup spot at ({}, {}) has no name", latitude, longitude);
            }
            let priority: Priority = record.get(3).unwrap_or("").parse()?;
            let description = record.get(4).unwrap_or("").trim().to_string();
            spots.push(CleanupSpot {
                latitude,
                longitude,
                name: name.to_string(),
                description,
                priority,
            });
        }
        Ok(spots)
    }

    /// The built-in sample spots.
    pub fn sample_spots() -> anyhow::Result<Vec<CleanupSpot>> {
        CleanupSpot::parse_spot_csv(CSV_OBJECT)
    }
}

#[cfg(test)]
mod tests {
    use super::{CleanupSpot, Priority};

    #[test]
    fn test_parse_spot_csv() {
        let csv_data = "\
LATITUDE,LONGITUDE,NAME,PRIORITY,DESCRIPTION
40.7589,-73.9851,Central Park Lake,high,Monthly cleanup event
40.5795,-74.1502,Staten Island Beach,Low,Weekend cleanup scheduled
";
        let spots = CleanupSpot::parse_spot_csv(csv_data).unwrap();
        assert_eq!(spots.len(), 2);
        assert_eq!(spots[0].name, "Central Park Lake");
        assert_eq!(spots[0].priority, Priority::High);
        assert!((spots[0].latitude - 40.7589).abs() < f64::EPSILON);
        assert!((spots[0].longitude - (-73.9851)).abs() < f64::EPSILON);
        assert_eq!(spots[1].priority, Priority::Low);
        assert_eq!(spots[1].description, "Weekend cleanup scheduled");
    }

    #[test]
    fn test_unknown_priority_is_rejected() {
        let csv_data = "\
LATITUDE,LONGITUDE,NAME,PRIORITY,DESCRIPTION
40.0,-74.0,Somewhere,urgent,Nope
";
        assert!(CleanupSpot::parse_spot_csv(csv_data).is_err());
    }

    #[test]
    fn test_sample_spots() {
        let spots = CleanupSpot::sample_spots().unwrap();
        assert_eq!(spots.len(), 3);
        let priorities: Vec<Priority> = spots.iter().map(|s| s.priority).collect();
        assert_eq!(priorities, vec![Priority::High, Priority::Medium, Priority::Low]);
    }

    #[test]
    fn test_priority_display() {
        assert_eq!(Priority::Medium.to_string(), "medium");
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
    }
}
