//! Low-precision ephemeris — geocentric ecliptic longitudes from mean orbital
//! elements, plus the ascendant and equal-house cusps.
//!
//! Accuracy is on the order of arcminutes for the Sun and planets and a
//! fraction of a degree for the Moon, which is ample for sign / degree /
//! house granularity.

/// Zodiac sign names, 30 degrees each from 0° Aries.
pub const SIGNS: [&str; 12] = [
    "Aries",
    "Taurus",
    "Gemini",
    "Cancer",
    "Leo",
    "Virgo",
    "Libra",
    "Scorpio",
    "Sagittarius",
    "Capricorn",
    "Aquarius",
    "Pisces",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Planet {
    Mercury,
    Venus,
    Mars,
    Jupiter,
}

/// Normalizes an angle in degrees to [0, 360).
pub fn rev(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}

fn sin_d(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

fn cos_d(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

fn tan_d(degrees: f64) -> f64 {
    degrees.to_radians().tan()
}

/// Julian day for a Gregorian calendar date and UT expressed in hours.
pub fn julian_day(year: i32, month: u32, day: u32, ut_hours: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor()
        + day as f64
        + b
        - 1524.5
        + ut_hours / 24.0
}

/// Day number since the 2000-ish epoch the mean elements are referred to.
pub fn day_number(jd: f64) -> f64 {
    jd - 2451543.5
}

/// Mean obliquity of the ecliptic, degrees.
pub fn obliquity(d: f64) -> f64 {
    23.4393 - 3.563e-7 * d
}

/// Orbital elements at day number `d`: ascending node, inclination, argument
/// of perihelion, semi-major axis, eccentricity, mean anomaly (degrees/AU).
struct Elements {
    n: f64,
    i: f64,
    w: f64,
    a: f64,
    e: f64,
    m: f64,
}

fn elements(planet: Planet, d: f64) -> Elements {
    match planet {
        Planet::Mercury => Elements {
            n: 48.3313 + 3.24587e-5 * d,
            i: 7.0047 + 5.00e-8 * d,
            w: 29.1241 + 1.01444e-5 * d,
            a: 0.387098,
            e: 0.205635 + 5.59e-10 * d,
            m: rev(168.6562 + 4.0923344368 * d),
        },
        Planet::Venus => Elements {
            n: 76.6799 + 2.46590e-5 * d,
            i: 3.3946 + 2.75e-8 * d,
            w: 54.8910 + 1.38374e-5 * d,
            a: 0.723330,
            e: 0.006773 - 1.302e-9 * d,
            m: rev(48.0052 + 1.6021302244 * d),
        },
        Planet::Mars => Elements {
            n: 49.5574 + 2.11081e-5 * d,
            i: 1.8497 - 1.78e-8 * d,
            w: 286.5016 + 2.92961e-5 * d,
            a: 1.523688,
            e: 0.093405 + 2.516e-9 * d,
            m: rev(18.6021 + 0.5240207766 * d),
        },
        Planet::Jupiter => Elements {
            n: 100.4542 + 2.76854e-5 * d,
            i: 1.3030 - 1.557e-7 * d,
            w: 273.8777 + 1.64505e-5 * d,
            a: 5.20256,
            e: 0.048498 + 4.469e-9 * d,
            m: rev(19.8950 + 0.0830853001 * d),
        },
    }
}

/// Solves Kepler's equation, returning the eccentric anomaly in degrees.
fn eccentric_anomaly(m: f64, e: f64) -> f64 {
    let mut ea = m + e.to_degrees() * sin_d(m) * (1.0 + e * cos_d(m));
    // A handful of Newton iterations converges for all solar-system eccentricities.
    for _ in 0..10 {
        let delta = (ea - e.to_degrees() * sin_d(ea) - m) / (1.0 - e * cos_d(ea));
        ea -= delta;
        if delta.abs() < 1e-7 {
            break;
        }
    }
    ea
}

/// True anomaly and radius from mean anomaly, eccentricity and semi-major axis.
fn true_anomaly_and_radius(m: f64, e: f64, a: f64) -> (f64, f64) {
    let ea = eccentric_anomaly(m, e);
    let xv = a * (cos_d(ea) - e);
    let yv = a * ((1.0 - e * e).sqrt() * sin_d(ea));
    (rev(yv.atan2(xv).to_degrees()), (xv * xv + yv * yv).sqrt())
}

/// Sun's mean anomaly and argument of perihelion at day number `d`.
fn sun_mean_elements(d: f64) -> (f64, f64) {
    let w = 282.9404 + 4.70935e-5 * d;
    let m = rev(356.0470 + 0.9856002585 * d);
    (m, w)
}

/// Sun's mean longitude, degrees. Also drives sidereal time.
pub fn sun_mean_longitude(d: f64) -> f64 {
    let (m, w) = sun_mean_elements(d);
    rev(m + w)
}

/// Geocentric ecliptic longitude of the Sun, degrees.
pub fn sun_longitude(d: f64) -> f64 {
    let (m, w) = sun_mean_elements(d);
    let e = 0.016709 - 1.151e-9 * d;
    let (v, _) = true_anomaly_and_radius(m, e, 1.0);
    rev(v + w)
}

/// Sun's ecliptic rectangular coordinates (AU), used to shift heliocentric
/// planet positions to geocentric.
fn sun_rectangular(d: f64) -> (f64, f64) {
    let (m, w) = sun_mean_elements(d);
    let e = 0.016709 - 1.151e-9 * d;
    let (v, r) = true_anomaly_and_radius(m, e, 1.0);
    let lon = rev(v + w);
    (r * cos_d(lon), r * sin_d(lon))
}

/// Geocentric ecliptic longitude of the Moon, degrees, with the principal
/// perturbation terms (evection, variation, yearly equation and friends).
pub fn moon_longitude(d: f64) -> f64 {
    let n = 125.1228 - 0.0529538083 * d;
    let i = 5.1454;
    let w = 318.0634 + 0.1643573223 * d;
    let a = 60.2666;
    let e = 0.054900;
    let m = rev(115.3654 + 13.0649929509 * d);

    let ea = eccentric_anomaly(m, e);
    let xv = a * (cos_d(ea) - e);
    let yv = a * ((1.0 - e * e).sqrt() * sin_d(ea));
    let v = rev(yv.atan2(xv).to_degrees());
    let r = (xv * xv + yv * yv).sqrt();

    let xh = r * (cos_d(n) * cos_d(v + w) - sin_d(n) * sin_d(v + w) * cos_d(i));
    let yh = r * (sin_d(n) * cos_d(v + w) + cos_d(n) * sin_d(v + w) * cos_d(i));
    let mut lon = rev(yh.atan2(xh).to_degrees());

    let (ms, ws) = sun_mean_elements(d);
    let ls = rev(ms + ws); // Sun's mean longitude
    let lm = rev(n + w + m); // Moon's mean longitude
    let md = rev(lm - ls); // mean elongation
    let f = rev(lm - n); // argument of latitude

    lon += -1.274 * sin_d(m - 2.0 * md)
        + 0.658 * sin_d(2.0 * md)
        - 0.186 * sin_d(ms)
        - 0.059 * sin_d(2.0 * m - 2.0 * md)
        - 0.057 * sin_d(m - 2.0 * md + ms)
        + 0.053 * sin_d(m + 2.0 * md)
        + 0.046 * sin_d(2.0 * md - ms)
        + 0.041 * sin_d(m - ms)
        - 0.035 * sin_d(md)
        - 0.031 * sin_d(m + ms)
        - 0.015 * sin_d(2.0 * f - 2.0 * md)
        + 0.011 * sin_d(m - 4.0 * md);

    rev(lon)
}

/// Geocentric ecliptic longitude of a planet, degrees.
pub fn planet_longitude(planet: Planet, d: f64) -> f64 {
    let el = elements(planet, d);
    let (v, r) = true_anomaly_and_radius(el.m, el.e, el.a);

    let xh = r * (cos_d(el.n) * cos_d(v + el.w) - sin_d(el.n) * sin_d(v + el.w) * cos_d(el.i));
    let yh = r * (sin_d(el.n) * cos_d(v + el.w) + cos_d(el.n) * sin_d(v + el.w) * cos_d(el.i));

    let (xs, ys) = sun_rectangular(d);
    rev((yh + ys).atan2(xh + xs).to_degrees())
}

/// Ecliptic longitude of the ascendant for an observer, degrees.
///
/// `ut_hours` is universal time in hours, `latitude`/`longitude` geographic
/// coordinates (east longitude positive).
pub fn ascendant(d: f64, ut_hours: f64, latitude: f64, longitude: f64) -> f64 {
    let gmst0 = rev(sun_mean_longitude(d) + 180.0);
    let ramc = rev(gmst0 + ut_hours * 15.0 + longitude);
    let eps = obliquity(d);

    let y = -cos_d(ramc);
    let x = sin_d(ramc) * cos_d(eps) + tan_d(latitude) * sin_d(eps);
    rev(y.atan2(x).to_degrees())
}

/// Equal-house placement of an ecliptic longitude, houses numbered 1-12 from
/// the ascendant.
pub fn equal_house_of(longitude: f64, asc: f64) -> u8 {
    ((rev(longitude - asc) / 30.0).floor() as u8) + 1
}

/// Sign name for an ecliptic longitude.
pub fn sign_name(longitude: f64) -> &'static str {
    SIGNS[(rev(longitude) / 30.0).floor() as usize % 12]
}

/// Degree within the sign, [0, 30).
pub fn degree_in_sign(longitude: f64) -> f64 {
    rev(longitude) % 30.0
}
