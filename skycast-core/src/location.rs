//! Country registry and nearest-country resolution.
//!
//! The registry is a fixed in-process dataset; resolution is a linear scan
//! using plain Euclidean distance in degree space. This is deliberately not a
//! great-circle calculation: the dataset is sparse enough that the cheap
//! metric picks the same winner for realistic inputs, and the approximation
//! is part of the product's observed behavior.

use crate::model::{Coordinates, Country, Location};

const fn country(
    code: &'static str,
    name: &'static str,
    capital: &'static str,
    latitude: f64,
    longitude: f64,
) -> Country {
    Country { code, name, capital, coordinates: Coordinates { latitude, longitude } }
}

/// The 25 selectable countries, keyed by capital coordinates.
///
/// Listing order matters: nearest-country ties resolve to the earliest entry.
pub static COUNTRIES: [Country; 25] = [
    country("US", "United States", "Washington D.C.", 38.9072, -77.0369),
    country("GB", "United Kingdom", "London", 51.5074, -0.1278),
    country("FR", "France", "Paris", 48.8566, 2.3522),
    country("DE", "Germany", "Berlin", 52.5200, 13.4050),
    country("JP", "Japan", "Tokyo", 35.6762, 139.6503),
    country("AU", "Australia", "Canberra", -35.2809, 149.1300),
    country("IN", "India", "New Delhi", 28.6139, 77.2090),
    country("BR", "Brazil", "Brasília", -15.7975, -47.8919),
    country("CA", "Canada", "Ottawa", 45.4215, -75.6972),
    country("CN", "China", "Beijing", 39.9042, 116.4074),
    country("RU", "Russia", "Moscow", 55.7558, 37.6173),
    country("ZA", "South Africa", "Pretoria", -25.7479, 28.2293),
    country("MX", "Mexico", "Mexico City", 19.4326, -99.1332),
    country("IT", "Italy", "Rome", 41.9028, 12.4964),
    country("ES", "Spain", "Madrid", 40.4168, -3.7038),
    country("KR", "South Korea", "Seoul", 37.5665, 126.9780),
    country("NL", "Netherlands", "Amsterdam", 52.3676, 4.9041),
    country("SE", "Sweden", "Stockholm", 59.3293, 18.0686),
    country("CH", "Switzerland", "Bern", 46.9480, 7.4474),
    country("SG", "Singapore", "Singapore", 1.3521, 103.8198),
    country("AE", "UAE", "Abu Dhabi", 24.4539, 54.3773),
    country("EG", "Egypt", "Cairo", 30.0444, 31.2357),
    country("TH", "Thailand", "Bangkok", 13.7563, 100.5018),
    country("NZ", "New Zealand", "Wellington", -41.2865, 174.7762),
    country("AR", "Argentina", "Buenos Aires", -34.6037, -58.3816),
];

/// Fallback location when neither a selection nor a geolocation fix exists.
pub fn default_location() -> Location {
    Location {
        latitude: 51.5074,
        longitude: -0.1278,
        name: "London, United Kingdom".to_string(),
        country: Some("GB".to_string()),
    }
}

/// All countries sorted by display name, ascending.
pub fn countries() -> Vec<&'static Country> {
    let mut list: Vec<&Country> = COUNTRIES.iter().collect();
    list.sort_by(|a, b| a.name.cmp(b.name));
    list
}

/// Look up a registry entry by its ISO-2 code.
pub fn country_by_code(code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

fn squared_distance(a: Coordinates, b: Coordinates) -> f64 {
    let dlat = a.latitude - b.latitude;
    let dlon = a.longitude - b.longitude;
    dlat * dlat + dlon * dlon
}

/// Registry entry whose capital is closest to `coords`.
///
/// Total for any finite coordinates: the registry is statically non-empty
/// and squared distances are always finite and comparable. Strict `<` keeps
/// the first minimal entry in listing order on an exact tie.
pub fn closest_country(coords: Coordinates) -> &'static Country {
    let mut closest = &COUNTRIES[0];
    let mut min_distance = squared_distance(coords, closest.coordinates);

    for candidate in &COUNTRIES[1..] {
        let distance = squared_distance(coords, candidate.coordinates);
        if distance < min_distance {
            min_distance = distance;
            closest = candidate;
        }
    }

    closest
}

/// Reverse-geocoding approximation: "<capital>, <country name>" of the
/// closest registry entry.
pub fn location_name(coords: Coordinates) -> String {
    let closest = closest_country(coords);
    format!("{}, {}", closest.capital, closest.name)
}
