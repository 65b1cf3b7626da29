//! City atlas — coordinates and standard UTC offsets for birth place lookup.
//!
//! Offsets are standard time only; DST at the moment of birth is not modeled.

/// A birth place: latitude, east longitude (degrees), standard UTC offset (hours).
#[derive(Debug, Clone, Copy)]
pub struct City {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub utc_offset: f64,
}

const CITIES: &[City] = &[
    City { name: "new york", latitude: 40.7128, longitude: -74.0060, utc_offset: -5.0 },
    City { name: "los angeles", latitude: 34.0522, longitude: -118.2437, utc_offset: -8.0 },
    City { name: "san francisco", latitude: 37.7749, longitude: -122.4194, utc_offset: -8.0 },
    City { name: "seattle", latitude: 47.6062, longitude: -122.3321, utc_offset: -8.0 },
    City { name: "chicago", latitude: 41.8781, longitude: -87.6298, utc_offset: -6.0 },
    City { name: "houston", latitude: 29.7604, longitude: -95.3698, utc_offset: -6.0 },
    City { name: "denver", latitude: 39.7392, longitude: -104.9903, utc_offset: -7.0 },
    City { name: "miami", latitude: 25.7617, longitude: -80.1918, utc_offset: -5.0 },
    City { name: "boston", latitude: 42.3601, longitude: -71.0589, utc_offset: -5.0 },
    City { name: "toronto", latitude: 43.6532, longitude: -79.3832, utc_offset: -5.0 },
    City { name: "vancouver", latitude: 49.2827, longitude: -123.1207, utc_offset: -8.0 },
    City { name: "mexico city", latitude: 19.4326, longitude: -99.1332, utc_offset: -6.0 },
    City { name: "sao paulo", latitude: -23.5505, longitude: -46.6333, utc_offset: -3.0 },
    City { name: "buenos aires", latitude: -34.6037, longitude: -58.3816, utc_offset: -3.0 },
    City { name: "london", latitude: 51.5074, longitude: -0.1278, utc_offset: 0.0 },
    City { name: "dublin", latitude: 53.3498, longitude: -6.2603, utc_offset: 0.0 },
    City { name: "paris", latitude: 48.8566, longitude: 2.3522, utc_offset: 1.0 },
    City { name: "berlin", latitude: 52.5200, longitude: 13.4050, utc_offset: 1.0 },
    City { name: "madrid", latitude: 40.4168, longitude: -3.7038, utc_offset: 1.0 },
    City { name: "rome", latitude: 41.9028, longitude: 12.4964, utc_offset: 1.0 },
    City { name: "amsterdam", latitude: 52.3676, longitude: 4.9041, utc_offset: 1.0 },
    City { name: "zurich", latitude: 47.3769, longitude: 8.5417, utc_offset: 1.0 },
    City { name: "vienna", latitude: 48.2082, longitude: 16.3738, utc_offset: 1.0 },
    City { name: "stockholm", latitude: 59.3293, longitude: 18.0686, utc_offset: 1.0 },
    City { name: "athens", latitude: 37.9838, longitude: 23.7275, utc_offset: 2.0 },
    City { name: "istanbul", latitude: 41.0082, longitude: 28.9784, utc_offset: 3.0 },
    City { name: "cairo", latitude: 30.0444, longitude: 31.2357, utc_offset: 2.0 },
    City { name: "moscow", latitude: 55.7558, longitude: 37.6173, utc_offset: 3.0 },
    City { name: "dubai", latitude: 25.2048, longitude: 55.2708, utc_offset: 4.0 },
    City { name: "mumbai", latitude: 19.0760, longitude: 72.8777, utc_offset: 5.5 },
    City { name: "delhi", latitude: 28.7041, longitude: 77.1025, utc_offset: 5.5 },
    City { name: "bangkok", latitude: 13.7563, longitude: 100.5018, utc_offset: 7.0 },
    City { name: "singapore", latitude: 1.3521, longitude: 103.8198, utc_offset: 8.0 },
    City { name: "hong kong", latitude: 22.3193, longitude: 114.1694, utc_offset: 8.0 },
    City { name: "beijing", latitude: 39.9042, longitude: 116.4074, utc_offset: 8.0 },
    City { name: "shanghai", latitude: 31.2304, longitude: 121.4737, utc_offset: 8.0 },
    City { name: "taipei", latitude: 25.0330, longitude: 121.5654, utc_offset: 8.0 },
    City { name: "seoul", latitude: 37.5665, longitude: 126.9780, utc_offset: 9.0 },
    City { name: "tokyo", latitude: 35.6762, longitude: 139.6503, utc_offset: 9.0 },
    City { name: "sydney", latitude: -33.8688, longitude: 151.2093, utc_offset: 10.0 },
    City { name: "melbourne", latitude: -37.8136, longitude: 144.9631, utc_offset: 10.0 },
    City { name: "auckland", latitude: -36.8509, longitude: 174.7645, utc_offset: 12.0 },
    City { name: "johannesburg", latitude: -26.2041, longitude: 28.0473, utc_offset: 2.0 },
    City { name: "lagos", latitude: 6.5244, longitude: 3.3792, utc_offset: 1.0 },
];

/// Looks a city up by name, case-insensitively.
pub fn lookup(city: &str) -> Option<&'static City> {
    let needle = city.trim().to_lowercase();
    CITIES.iter().find(|c| c.name == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let city = lookup("New York").expect("New York should be in the atlas");
        assert!((city.latitude - 40.7128).abs() < 1e-9);
        assert!((city.utc_offset - (-5.0)).abs() < 1e-9);
    }

    #[test]
    fn test_lookup_trims_whitespace() {
        assert!(lookup("  london  ").is_some());
    }

    #[test]
    fn test_lookup_unknown_city_is_none() {
        assert!(lookup("Atlantis").is_none());
    }

    #[test]
    fn test_fractional_offsets_survive() {
        let mumbai = lookup("mumbai").unwrap();
        assert!((mumbai.utc_offset - 5.5).abs() < 1e-9);
    }
}
