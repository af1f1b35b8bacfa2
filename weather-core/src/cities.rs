//! The fixed set of supported cities.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A supported city and the parameters of its synthetic temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub name: &'static str,
    /// Typical temperature in °C.
    pub baseline_c: f64,
    /// Uniform offset added to the baseline for synthetic readings.
    pub offset_c: Range<f64>,
}

pub static CITIES: [City; 10] = [
    City { name: "Mumbai", baseline_c: 28.0, offset_c: -3.0..5.0 },
    City { name: "Delhi", baseline_c: 25.0, offset_c: -5.0..7.0 },
    City { name: "Bangalore", baseline_c: 23.0, offset_c: -4.0..6.0 },
    City { name: "Chennai", baseline_c: 30.0, offset_c: -3.0..4.0 },
    City { name: "Kolkata", baseline_c: 27.0, offset_c: -4.0..5.0 },
    City { name: "Hyderabad", baseline_c: 26.0, offset_c: -4.0..6.0 },
    City { name: "Pune", baseline_c: 24.0, offset_c: -5.0..7.0 },
    City { name: "Ahmedabad", baseline_c: 27.0, offset_c: -5.0..8.0 },
    City { name: "Jaipur", baseline_c: 26.0, offset_c: -6.0..8.0 },
    City { name: "Lucknow", baseline_c: 24.0, offset_c: -5.0..7.0 },
];

pub const COUNTRY_CODE: &str = "IN";
pub const COUNTRY_NAME: &str = "India";

/// Search result entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationEntry {
    pub city: String,
    pub country: String,
    pub country_name: String,
}

impl From<&City> for LocationEntry {
    fn from(city: &City) -> Self {
        Self {
            city: city.name.to_string(),
            country: COUNTRY_CODE.to_string(),
            country_name: COUNTRY_NAME.to_string(),
        }
    }
}

pub fn find_city(name: &str) -> Option<&'static City> {
    let name = name.trim();
    CITIES.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

/// Cities whose name contains `query`, ignoring case. A blank query matches all.
pub fn search_locations(query: &str) -> Vec<LocationEntry> {
    let query = query.trim().to_lowercase();

    CITIES
        .iter()
        .filter(|c| query.is_empty() || c.name.to_lowercase().contains(&query))
        .map(LocationEntry::from)
        .collect()
}
