pub mod categorizer;

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::fuzzy::inference::{infer, infer_with_trace, InferenceTrace};

pub use categorizer::{categorize, weather_label, PriceTier, WeatherLabel};

pub const DISTANCE_RANGE_KM: RangeInclusive<f64> = 0.0..=20.0;
pub const TEMPERATURE_RANGE_C: RangeInclusive<f64> = 0.0..=40.0;
pub const ITEM_RANGE: RangeInclusive<f64> = 0.0..=3.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeliveryInput {
    pub distance_km: f64,
    pub temperature_c: f64,
    pub items: f64,
}

impl DeliveryInput {
    pub fn new(distance_km: f64, temperature_c: f64, items: f64) -> Self {
        Self { distance_km, temperature_c, items }
    }

    /// Reject values the input form would never produce.
    ///
    /// Inference itself accepts any finite value; this is for callers that
    /// want to enforce the operating range before evaluating.
    pub fn check_operating_range(&self) -> Result<(), DomainError> {
        check_field("distance_km", self.distance_km, &DISTANCE_RANGE_KM)?;
        check_field("temperature_c", self.temperature_c, &TEMPERATURE_RANGE_C)?;
        check_field("items", self.items, &ITEM_RANGE)?;
        Ok(())
    }

    pub fn check_finite(&self) -> Result<(), DomainError> {
        for (field, value) in self.fields() {
            if !value.is_finite() {
                return Err(DomainError::NonFiniteInput { field });
            }
        }
        Ok(())
    }

    fn fields(&self) -> [(&'static str, f64); 3] {
        [
            ("distance_km", self.distance_km),
            ("temperature_c", self.temperature_c),
            ("items", self.items),
        ]
    }
}

fn check_field(
    field: &'static str,
    value: f64,
    range: &RangeInclusive<f64>,
) -> Result<(), DomainError> {
    if !value.is_finite() {
        return Err(DomainError::NonFiniteInput { field });
    }
    if !range.contains(&value) {
        return Err(DomainError::InputOutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        });
    }
    Ok(())
}

/// The record handed back to the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub price: f64,
    pub tier: PriceTier,
    pub weather: WeatherLabel,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExplainedEstimate {
    pub estimate: Estimate,
    pub trace: InferenceTrace,
}

pub trait DeliveryPricingEngine: Send + Sync {
    fn estimate(&self, input: &DeliveryInput) -> Estimate;

    fn explain(&self, input: &DeliveryInput) -> ExplainedEstimate;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SugenoPricingEngine;

impl DeliveryPricingEngine for SugenoPricingEngine {
    fn estimate(&self, input: &DeliveryInput) -> Estimate {
        estimate_delivery(input)
    }

    fn explain(&self, input: &DeliveryInput) -> ExplainedEstimate {
        explain_delivery(input)
    }
}

pub fn estimate_delivery(input: &DeliveryInput) -> Estimate {
    let price = infer(input.distance_km, input.temperature_c, input.items);
    let estimate = assemble(price, input.temperature_c);

    tracing::debug!(
        event_name = "core.estimate.evaluated",
        distance_km = input.distance_km,
        temperature_c = input.temperature_c,
        items = input.items,
        price = estimate.price,
        tier = estimate.tier.label(),
        "delivery estimate evaluated"
    );

    estimate
}

pub fn explain_delivery(input: &DeliveryInput) -> ExplainedEstimate {
    let trace = infer_with_trace(input.distance_km, input.temperature_c, input.items);
    let estimate = assemble(trace.price, input.temperature_c);

    ExplainedEstimate { estimate, trace }
}

fn assemble(price: f64, temperature_c: f64) -> Estimate {
    Estimate { price, tier: categorize(price), weather: weather_label(temperature_c) }
}

#[cfg(test)]
mod tests {
    use crate::errors::DomainError;

    use super::{
        estimate_delivery, DeliveryInput, DeliveryPricingEngine, PriceTier, SugenoPricingEngine,
        WeatherLabel,
    };

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
    }

    #[test]
    fn short_rainy_single_item_is_small() {
        let estimate = estimate_delivery(&DeliveryInput::new(2.0, 20.0, 1.0));

        assert_close(estimate.price, 7_000.0);
        assert_eq!(estimate.tier, PriceTier::Kecil);
        assert_eq!(estimate.weather, WeatherLabel::Hujan);
    }

    #[test]
    fn weather_gap_uses_fallback_and_reports_hot() {
        let estimate = estimate_delivery(&DeliveryInput::new(3.0, 24.5, 1.0));

        assert_eq!(estimate.price, 7_000.0);
        assert_eq!(estimate.tier, PriceTier::Kecil);
        assert_eq!(estimate.weather, WeatherLabel::Panas);
    }

    #[test]
    fn zero_inputs_price_at_the_cheapest_rule() {
        let estimate = estimate_delivery(&DeliveryInput::new(0.0, 10.0, 0.0));

        assert_eq!(estimate.price, 7_000.0);
        assert_eq!(estimate.tier, PriceTier::Kecil);
    }

    #[test]
    fn far_hot_full_load_is_large() {
        let estimate = estimate_delivery(&DeliveryInput::new(20.0, 35.0, 3.0));

        assert_eq!(estimate.price, 25_000.0);
        assert_eq!(estimate.tier, PriceTier::Besar);
        assert_eq!(estimate.weather, WeatherLabel::Panas);
    }

    #[test]
    fn cloudy_mid_distance_is_medium() {
        let estimate = SugenoPricingEngine.estimate(&DeliveryInput::new(7.5, 26.0, 2.0));

        assert_close(estimate.price, 12_400.0);
        assert_eq!(estimate.tier, PriceTier::Sedang);
        assert_eq!(estimate.weather, WeatherLabel::Berawan);
    }

    #[test]
    fn explain_matches_estimate() {
        let input = DeliveryInput::new(10.5, 20.0, 2.0);
        let explained = SugenoPricingEngine.explain(&input);

        assert_eq!(explained.estimate, SugenoPricingEngine.estimate(&input));
        assert_eq!(explained.trace.fired().count(), 4);
        assert!(!explained.trace.fallback_used);
    }

    #[test]
    fn engine_is_usable_behind_a_trait_object() {
        let engine: Box<dyn DeliveryPricingEngine> = Box::new(SugenoPricingEngine);
        let estimate = engine.estimate(&DeliveryInput::new(15.0, 22.0, 2.5));

        assert_close(estimate.price, 18_000.0);
        assert_eq!(estimate.tier, PriceTier::Besar);
    }

    #[test]
    fn estimate_serializes_with_indonesian_labels() {
        let estimate = estimate_delivery(&DeliveryInput::new(15.5, 24.5, 1.0));
        let json = serde_json::to_value(estimate).expect("estimate should serialize");

        assert_eq!(json["price"], 7000.0);
        assert_eq!(json["tier"], "Kecil");
        assert_eq!(json["weather"], "Panas");

        let unknown = serde_json::to_value(PriceTier::TidakDiketahui).expect("tier serializes");
        assert_eq!(unknown, "Tidak Diketahui");
    }

    #[test]
    fn operating_range_accepts_form_bounds() {
        assert_eq!(DeliveryInput::new(0.0, 0.0, 0.0).check_operating_range(), Ok(()));
        assert_eq!(DeliveryInput::new(20.0, 40.0, 3.0).check_operating_range(), Ok(()));
    }

    #[test]
    fn operating_range_rejects_values_outside_the_form() {
        let error = DeliveryInput::new(25.0, 20.0, 1.0).check_operating_range();
        assert_eq!(
            error,
            Err(DomainError::InputOutOfRange {
                field: "distance_km",
                value: 25.0,
                min: 0.0,
                max: 20.0
            })
        );

        assert!(matches!(
            DeliveryInput::new(1.0, 20.0, 3.5).check_operating_range(),
            Err(DomainError::InputOutOfRange { field: "items", .. })
        ));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let input = DeliveryInput::new(1.0, f64::NAN, 1.0);

        assert_eq!(
            input.check_finite(),
            Err(DomainError::NonFiniteInput { field: "temperature_c" })
        );
        assert_eq!(
            input.check_operating_range(),
            Err(DomainError::NonFiniteInput { field: "temperature_c" })
        );
    }
}
