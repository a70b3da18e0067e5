//! Membership functions for the three delivery inputs.
//!
//! Every function maps a crisp scalar onto a degree in `[0, 1]`. Inputs outside
//! the operating range are not rejected here; they fall through the same
//! clamped or branch-complete formulas.

use serde::{Deserialize, Serialize};

/// Clamp a raw ramp value into `[0, 1]`.
pub fn clamp01(value: f64) -> f64 {
    f64::max(0.0, f64::min(1.0, value))
}

pub fn near(distance_km: f64) -> f64 {
    clamp01((5.0 - distance_km) / 5.0)
}

/// Asymmetric triangle: a 5 km rising edge from 5 to 10 and a 1 km falling edge from 10 to 11.
pub fn medium(distance_km: f64) -> f64 {
    if 5.0 < distance_km && distance_km <= 10.0 {
        (distance_km - 5.0) / 5.0
    } else if 10.0 < distance_km && distance_km <= 11.0 {
        (11.0 - distance_km) / 1.0
    } else {
        0.0
    }
}

pub fn far(distance_km: f64) -> f64 {
    clamp01((distance_km - 10.0) / 10.0)
}

// Weather terms are crisp steps. Temperatures strictly between 24 and 25 fall in
// none of them, which zeroes every rule and sends inference to the fallback price.

pub fn rain(temperature_c: f64) -> f64 {
    if temperature_c <= 24.0 {
        1.0
    } else {
        0.0
    }
}

pub fn cloudy(temperature_c: f64) -> f64 {
    if (25.0..=28.0).contains(&temperature_c) {
        1.0
    } else {
        0.0
    }
}

pub fn hot(temperature_c: f64) -> f64 {
    if temperature_c > 28.0 {
        1.0
    } else {
        0.0
    }
}

pub fn few(items: f64) -> f64 {
    clamp01((1.5 - items) / 1.5)
}

/// Triangle peaking at 2 with both endpoints (1 and 3) excluded.
pub fn some(items: f64) -> f64 {
    if 1.0 < items && items < 3.0 {
        1.0 - (2.0 - items).abs()
    } else {
        0.0
    }
}

pub fn many(items: f64) -> f64 {
    clamp01((items - 1.5) / 1.5)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceTerm {
    Near,
    Medium,
    Far,
}

impl DistanceTerm {
    pub const ALL: [Self; 3] = [Self::Near, Self::Medium, Self::Far];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn membership(self, distance_km: f64) -> f64 {
        match self {
            Self::Near => near(distance_km),
            Self::Medium => medium(distance_km),
            Self::Far => far(distance_km),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Near => "dekat",
            Self::Medium => "sedang",
            Self::Far => "jauh",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherTerm {
    Rain,
    Cloudy,
    Hot,
}

impl WeatherTerm {
    pub const ALL: [Self; 3] = [Self::Rain, Self::Cloudy, Self::Hot];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn membership(self, temperature_c: f64) -> f64 {
        match self {
            Self::Rain => rain(temperature_c),
            Self::Cloudy => cloudy(temperature_c),
            Self::Hot => hot(temperature_c),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Rain => "hujan",
            Self::Cloudy => "berawan",
            Self::Hot => "panas",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCountTerm {
    Few,
    Some,
    Many,
}

impl ItemCountTerm {
    pub const ALL: [Self; 3] = [Self::Few, Self::Some, Self::Many];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn membership(self, items: f64) -> f64 {
        match self {
            Self::Few => few(items),
            Self::Some => some(items),
            Self::Many => many(items),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Few => "sedikit",
            Self::Some => "sedang",
            Self::Many => "banyak",
        }
    }
}

/// Degrees of all nine terms for one set of inputs, indexed by term.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fuzzified {
    pub distance: [f64; 3],
    pub weather: [f64; 3],
    pub items: [f64; 3],
}

impl Fuzzified {
    pub fn distance(&self, term: DistanceTerm) -> f64 {
        self.distance[term.index()]
    }

    pub fn weather(&self, term: WeatherTerm) -> f64 {
        self.weather[term.index()]
    }

    pub fn items(&self, term: ItemCountTerm) -> f64 {
        self.items[term.index()]
    }
}

pub fn fuzzify(distance_km: f64, temperature_c: f64, items: f64) -> Fuzzified {
    Fuzzified {
        distance: DistanceTerm::ALL.map(|term| term.membership(distance_km)),
        weather: WeatherTerm::ALL.map(|term| term.membership(temperature_c)),
        items: ItemCountTerm::ALL.map(|term| term.membership(items)),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        clamp01, cloudy, far, few, fuzzify, hot, many, medium, near, rain, some, DistanceTerm,
        ItemCountTerm, WeatherTerm,
    };

    fn sweep(start: f64, end: f64, step: f64) -> impl Iterator<Item = f64> {
        let count = ((end - start) / step).floor() as usize + 1;
        (0..count).map(move |i| start + step * i as f64)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-12, "expected {expected}, got {actual}");
    }

    #[test]
    fn clamp01_bounds_both_sides() {
        assert_eq!(clamp01(-3.0), 0.0);
        assert_eq!(clamp01(0.25), 0.25);
        assert_eq!(clamp01(7.0), 1.0);
    }

    #[test]
    fn every_membership_function_stays_in_unit_interval() {
        let functions: [fn(f64) -> f64; 9] =
            [near, medium, far, rain, cloudy, hot, few, some, many];

        for x in sweep(-50.0, 80.0, 0.05) {
            for function in functions {
                let degree = function(x);
                assert!((0.0..=1.0).contains(&degree), "degree {degree} out of range at {x}");
            }
        }
    }

    #[test]
    fn distance_terms_follow_their_ramps() {
        assert_eq!(near(0.0), 1.0);
        assert_close(near(2.0), 0.6);
        assert_eq!(near(5.0), 0.0);
        assert_eq!(near(-4.0), 1.0);

        assert_eq!(medium(5.0), 0.0);
        assert_close(medium(7.5), 0.5);
        assert_eq!(medium(10.0), 1.0);
        assert_close(medium(10.5), 0.5);
        assert_eq!(medium(11.0), 0.0);
        assert_eq!(medium(12.0), 0.0);

        assert_eq!(far(10.0), 0.0);
        assert_close(far(15.0), 0.5);
        assert_eq!(far(20.0), 1.0);
        assert_eq!(far(35.0), 1.0);
    }

    #[test]
    fn medium_distance_has_a_steep_falling_edge() {
        assert_close(medium(6.0), 0.2);
        assert_close(medium(10.2), 0.8);
        assert!(medium(10.9) < medium(6.0));
    }

    #[test]
    fn weather_terms_are_crisp_steps() {
        assert_eq!(rain(24.0), 1.0);
        assert_eq!(rain(24.01), 0.0);
        assert_eq!(cloudy(25.0), 1.0);
        assert_eq!(cloudy(28.0), 1.0);
        assert_eq!(cloudy(28.01), 0.0);
        assert_eq!(hot(28.0), 0.0);
        assert_eq!(hot(28.01), 1.0);

        for t in sweep(0.0, 40.0, 0.1) {
            for term in WeatherTerm::ALL {
                let degree = term.membership(t);
                assert!(degree == 0.0 || degree == 1.0);
            }
        }
    }

    #[test]
    fn weather_gap_between_24_and_25_fires_no_term() {
        for t in [24.000_001, 24.3, 24.5, 24.99] {
            let degrees = fuzzify(0.0, t, 0.0).weather;
            assert_eq!(degrees, [0.0, 0.0, 0.0], "temperature {t} should fall in the gap");
        }
    }

    #[test]
    fn item_terms_follow_their_shapes() {
        assert_eq!(few(0.0), 1.0);
        assert_close(few(1.0), 1.0 / 3.0);
        assert_eq!(few(1.5), 0.0);

        assert_eq!(some(1.0), 0.0);
        assert_close(some(1.5), 0.5);
        assert_eq!(some(2.0), 1.0);
        assert_close(some(2.5), 0.5);
        assert_eq!(some(3.0), 0.0);

        assert_eq!(many(1.5), 0.0);
        assert_close(many(2.25), 0.5);
        assert_eq!(many(3.0), 1.0);
    }

    #[test]
    fn fuzzify_indexes_by_term() {
        let degrees = fuzzify(10.5, 26.0, 2.0);

        assert_close(degrees.distance(DistanceTerm::Medium), 0.5);
        assert_close(degrees.distance(DistanceTerm::Far), 0.05);
        assert_eq!(degrees.weather(WeatherTerm::Cloudy), 1.0);
        assert_eq!(degrees.items(ItemCountTerm::Some), 1.0);
        assert_close(degrees.items(ItemCountTerm::Many), 1.0 / 3.0);
    }
}
