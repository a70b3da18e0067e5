use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fuzzy::membership::{cloudy, rain};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceTier {
    #[serde(rename = "Kecil")]
    Kecil,
    #[serde(rename = "Sedang")]
    Sedang,
    #[serde(rename = "Besar")]
    Besar,
    #[serde(rename = "Tidak Diketahui")]
    TidakDiketahui,
}

impl PriceTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Kecil => "Kecil",
            Self::Sedang => "Sedang",
            Self::Besar => "Besar",
            Self::TidakDiketahui => "Tidak Diketahui",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Kecil => "small",
            Self::Sedang => "medium",
            Self::Besar => "large",
            Self::TidakDiketahui => "unknown",
        }
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a crisp price into a tier.
///
/// The price is rounded half-to-even to a whole number first. Bands are
/// `[7000, 10000]`, `(10000, 15000]` and `(16000, 30000]`; everything else,
/// including `(15000, 16000]`, is [`PriceTier::TidakDiketahui`].
pub fn categorize(price: f64) -> PriceTier {
    let rounded = price.round_ties_even();

    if (7_000.0..=10_000.0).contains(&rounded) {
        PriceTier::Kecil
    } else if 10_000.0 < rounded && rounded <= 15_000.0 {
        PriceTier::Sedang
    } else if 16_000.0 < rounded && rounded <= 30_000.0 {
        PriceTier::Besar
    } else {
        PriceTier::TidakDiketahui
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherLabel {
    Hujan,
    Berawan,
    Panas,
}

impl WeatherLabel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hujan => "Hujan",
            Self::Berawan => "Berawan",
            Self::Panas => "Panas",
        }
    }
}

impl fmt::Display for WeatherLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Anything that is neither rain nor cloudy reports as hot, including the
/// 24..25 gap where the hot term itself is zero.
pub fn weather_label(temperature_c: f64) -> WeatherLabel {
    if rain(temperature_c) == 1.0 {
        WeatherLabel::Hujan
    } else if cloudy(temperature_c) == 1.0 {
        WeatherLabel::Berawan
    } else {
        WeatherLabel::Panas
    }
}

#[cfg(test)]
mod tests {
    use super::{categorize, weather_label, PriceTier, WeatherLabel};

    #[test]
    fn bands_include_their_upper_edges() {
        assert_eq!(categorize(7_000.0), PriceTier::Kecil);
        assert_eq!(categorize(10_000.0), PriceTier::Kecil);
        assert_eq!(categorize(10_001.0), PriceTier::Sedang);
        assert_eq!(categorize(15_000.0), PriceTier::Sedang);
        assert_eq!(categorize(16_001.0), PriceTier::Besar);
        assert_eq!(categorize(30_000.0), PriceTier::Besar);
    }

    #[test]
    fn gap_between_sedang_and_besar_is_unknown() {
        assert_eq!(categorize(15_001.0), PriceTier::TidakDiketahui);
        assert_eq!(categorize(15_500.0), PriceTier::TidakDiketahui);
        assert_eq!(categorize(16_000.0), PriceTier::TidakDiketahui);
    }

    #[test]
    fn outside_all_bands_is_unknown() {
        assert_eq!(categorize(0.0), PriceTier::TidakDiketahui);
        assert_eq!(categorize(6_999.0), PriceTier::TidakDiketahui);
        assert_eq!(categorize(30_001.0), PriceTier::TidakDiketahui);
        assert_eq!(categorize(f64::NAN), PriceTier::TidakDiketahui);
    }

    #[test]
    fn price_is_rounded_before_classification() {
        assert_eq!(categorize(6_999.999_999_999_999), PriceTier::Kecil);
        assert_eq!(categorize(6_999.5), PriceTier::Kecil);
        assert_eq!(categorize(10_000.6), PriceTier::Sedang);
        assert_eq!(categorize(16_000.6), PriceTier::Besar);
        // sub-half fractions land back on the band edge
        assert_eq!(categorize(10_000.01), PriceTier::Kecil);
        assert_eq!(categorize(16_000.01), PriceTier::TidakDiketahui);
    }

    #[test]
    fn halves_round_to_even() {
        assert_eq!(categorize(10_000.5), PriceTier::Kecil);
        assert_eq!(categorize(10_001.5), PriceTier::Sedang);
        assert_eq!(categorize(16_000.5), PriceTier::TidakDiketahui);
        assert_eq!(categorize(6_998.5), PriceTier::TidakDiketahui);
    }

    #[test]
    fn tier_labels_are_the_indonesian_names() {
        assert_eq!(PriceTier::TidakDiketahui.to_string(), "Tidak Diketahui");
        assert_eq!(PriceTier::Besar.description(), "large");
    }

    #[test]
    fn weather_label_follows_the_step_terms() {
        assert_eq!(weather_label(0.0), WeatherLabel::Hujan);
        assert_eq!(weather_label(24.0), WeatherLabel::Hujan);
        assert_eq!(weather_label(25.0), WeatherLabel::Berawan);
        assert_eq!(weather_label(28.0), WeatherLabel::Berawan);
        assert_eq!(weather_label(28.1), WeatherLabel::Panas);
        assert_eq!(weather_label(40.0), WeatherLabel::Panas);
    }

    #[test]
    fn weather_gap_reports_hot() {
        assert_eq!(weather_label(24.5), WeatherLabel::Panas);
        assert_eq!(weather_label(24.99), WeatherLabel::Panas);
    }
}
