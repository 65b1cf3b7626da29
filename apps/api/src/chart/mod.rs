//! Chart calculator — turns raw birth facts into a fixed set of named
//! planetary placements.

pub mod atlas;
pub mod ephemeris;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use ephemeris::Planet;

/// Validated birth facts, defaults already applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BirthRequest {
    pub name: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub city: String,
    pub nation: String,
    pub gender: String,
    pub email: String,
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("unknown city '{0}'")]
    UnknownCity(String),

    #[error("invalid birth date/time: {0}")]
    InvalidDateTime(String),
}

/// House placement of a body: an equal-house number, or "Unknown" when the
/// engine could not place it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HousePlacement {
    Number(u8),
    Unknown,
}

impl std::fmt::Display for HousePlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HousePlacement::Number(n) => write!(f, "{n}"),
            HousePlacement::Unknown => write!(f, "Unknown"),
        }
    }
}

impl Serialize for HousePlacement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            HousePlacement::Number(n) => serializer.serialize_u8(*n),
            HousePlacement::Unknown => serializer.serialize_str("Unknown"),
        }
    }
}

impl<'de> Deserialize<'de> for HousePlacement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(u8),
            Text(String),
        }
        Ok(match Repr::deserialize(deserializer)? {
            Repr::Number(n) => HousePlacement::Number(n),
            Repr::Text(_) => HousePlacement::Unknown,
        })
    }
}

/// A single placement: sign, degree within the sign (2 decimals), and — for
/// the bodies that carry one — a house.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartPoint {
    pub sign: String,
    pub degree: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house: Option<HousePlacement>,
}

/// The fixed set of placements every reading is built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartData {
    pub sun: ChartPoint,
    pub moon: ChartPoint,
    pub venus: ChartPoint,
    pub mars: ChartPoint,
    pub mercury: ChartPoint,
    pub jupiter: ChartPoint,
    pub rising: ChartPoint,
    pub house7: ChartPoint,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn point(longitude: f64, house: Option<HousePlacement>) -> ChartPoint {
    ChartPoint {
        sign: ephemeris::sign_name(longitude).to_string(),
        degree: round2(ephemeris::degree_in_sign(longitude)),
        house,
    }
}

/// Computes the birth chart for a validated request.
///
/// Any lookup or computation failure surfaces as a single `ChartError`; no
/// partial chart is ever returned.
pub fn calculate_birth_chart(birth: &BirthRequest) -> Result<ChartData, ChartError> {
    let city = atlas::lookup(&birth.city)
        .ok_or_else(|| ChartError::UnknownCity(birth.city.clone()))?;

    NaiveDate::from_ymd_opt(birth.year, birth.month, birth.day).ok_or_else(|| {
        ChartError::InvalidDateTime(format!(
            "{:04}-{:02}-{:02} is not a calendar date",
            birth.year, birth.month, birth.day
        ))
    })?;
    if birth.hour >= 24 || birth.minute >= 60 {
        return Err(ChartError::InvalidDateTime(format!(
            "{:02}:{:02} is not a time of day",
            birth.hour, birth.minute
        )));
    }

    // Local civil time to UT via the city's standard offset.
    let ut_hours = birth.hour as f64 + birth.minute as f64 / 60.0 - city.utc_offset;
    let jd = ephemeris::julian_day(birth.year, birth.month, birth.day, ut_hours);
    let d = ephemeris::day_number(jd);

    let sun = ephemeris::sun_longitude(d);
    let moon = ephemeris::moon_longitude(d);
    let mercury = ephemeris::planet_longitude(Planet::Mercury, d);
    let venus = ephemeris::planet_longitude(Planet::Venus, d);
    let mars = ephemeris::planet_longitude(Planet::Mars, d);
    let jupiter = ephemeris::planet_longitude(Planet::Jupiter, d);

    let asc = ephemeris::ascendant(d, ut_hours, city.latitude, city.longitude);
    let descendant = ephemeris::rev(asc + 180.0);

    let house = |lon: f64| Some(HousePlacement::Number(ephemeris::equal_house_of(lon, asc)));

    Ok(ChartData {
        sun: point(sun, house(sun)),
        moon: point(moon, house(moon)),
        venus: point(venus, house(venus)),
        mars: point(mars, house(mars)),
        mercury: point(mercury, None),
        jupiter: point(jupiter, None),
        rising: point(asc, None),
        house7: point(descendant, None),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn birth() -> BirthRequest {
        BirthRequest {
            name: "User".to_string(),
            year: 1990,
            month: 5,
            day: 15,
            hour: 14,
            minute: 30,
            city: "New York".to_string(),
            nation: "US".to_string(),
            gender: "female".to_string(),
            email: "user@example.com".to_string(),
        }
    }

    fn has_two_decimals(degree: f64) -> bool {
        ((degree * 100.0).round() - degree * 100.0).abs() < 1e-9
    }

    #[test]
    fn test_chart_contains_all_bodies_with_rounded_degrees() {
        let chart = calculate_birth_chart(&birth()).unwrap();
        for p in [
            &chart.sun,
            &chart.moon,
            &chart.venus,
            &chart.mars,
            &chart.mercury,
            &chart.jupiter,
            &chart.rising,
            &chart.house7,
        ] {
            assert!(ephemeris::SIGNS.contains(&p.sign.as_str()), "bad sign {}", p.sign);
            assert!((0.0..30.0).contains(&p.degree), "degree out of range: {}", p.degree);
            assert!(has_two_decimals(p.degree), "degree not 2dp: {}", p.degree);
        }
    }

    #[test]
    fn test_mid_may_sun_is_taurus() {
        let chart = calculate_birth_chart(&birth()).unwrap();
        assert_eq!(chart.sun.sign, "Taurus");
    }

    #[test]
    fn test_house_carrying_bodies() {
        let chart = calculate_birth_chart(&birth()).unwrap();
        for p in [&chart.sun, &chart.moon, &chart.venus, &chart.mars] {
            match p.house {
                Some(HousePlacement::Number(n)) => assert!((1..=12).contains(&n)),
                other => panic!("expected a numbered house, got {other:?}"),
            }
        }
        for p in [&chart.mercury, &chart.jupiter, &chart.rising, &chart.house7] {
            assert!(p.house.is_none());
        }
    }

    #[test]
    fn test_house7_opposes_rising() {
        let chart = calculate_birth_chart(&birth()).unwrap();
        let rising_idx = ephemeris::SIGNS
            .iter()
            .position(|s| *s == chart.rising.sign)
            .unwrap();
        let house7_idx = ephemeris::SIGNS
            .iter()
            .position(|s| *s == chart.house7.sign)
            .unwrap();
        assert_eq!((rising_idx + 6) % 12, house7_idx);
    }

    #[test]
    fn test_unknown_city_is_a_lookup_error() {
        let mut req = birth();
        req.city = "Atlantis".to_string();
        match calculate_birth_chart(&req) {
            Err(ChartError::UnknownCity(city)) => assert_eq!(city, "Atlantis"),
            other => panic!("expected UnknownCity, got {other:?}"),
        }
    }

    #[test]
    fn test_impossible_date_is_rejected() {
        let mut req = birth();
        req.month = 2;
        req.day = 30;
        assert!(matches!(
            calculate_birth_chart(&req),
            Err(ChartError::InvalidDateTime(_))
        ));
    }

    #[test]
    fn test_impossible_time_is_rejected() {
        let mut req = birth();
        req.hour = 24;
        assert!(matches!(
            calculate_birth_chart(&req),
            Err(ChartError::InvalidDateTime(_))
        ));
    }

    #[test]
    fn test_chart_serialization_shape() {
        let chart = calculate_birth_chart(&birth()).unwrap();
        let value = serde_json::to_value(&chart).unwrap();

        for body in ["sun", "moon", "venus", "mars", "mercury", "jupiter", "rising", "house7"] {
            assert!(value.get(body).is_some(), "missing body {body}");
        }
        // House-carrying bodies serialize a numeric house.
        assert!(value["sun"]["house"].is_u64());
        // The rest omit the key entirely.
        assert!(value["mercury"].get("house").is_none());
        assert!(value["rising"].get("house").is_none());
    }

    #[test]
    fn test_house_placement_unknown_round_trips() {
        let json = serde_json::to_string(&HousePlacement::Unknown).unwrap();
        assert_eq!(json, "\"Unknown\"");
        let back: HousePlacement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, HousePlacement::Unknown);

        let n: HousePlacement = serde_json::from_str("7").unwrap();
        assert_eq!(n, HousePlacement::Number(7));
    }
}
