//! Zero-order Sugeno inference over the delivery rule base.
//!
//! Consequents are constants, so defuzzification reduces to the weighted
//! average of rule prices by firing strength.

use serde::{Deserialize, Serialize};

use super::membership::{fuzzify, Fuzzified};
use super::rules::{Rule, RULE_BASE, RULE_COUNT};

/// Price returned when no rule fires at all.
pub const FALLBACK_PRICE: f64 = 7_000.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InferenceResult {
    /// Σ strength · consequent
    pub numerator: f64,
    /// Σ strength
    pub denominator: f64,
}

impl InferenceResult {
    /// Weighted average, or `None` when the total firing strength is zero.
    pub fn crisp(&self) -> Option<f64> {
        if self.denominator == 0.0 {
            return None;
        }

        Some(self.numerator / self.denominator)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RuleFiring {
    pub rule: Rule,
    pub strength: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InferenceTrace {
    pub degrees: Fuzzified,
    pub firings: Vec<RuleFiring>,
    pub result: InferenceResult,
    pub fallback_used: bool,
    pub price: f64,
}

impl InferenceTrace {
    /// Rules with a nonzero firing strength, in table order.
    pub fn fired(&self) -> impl Iterator<Item = &RuleFiring> {
        self.firings.iter().filter(|firing| firing.strength > 0.0)
    }
}

pub fn firing_strengths(degrees: &Fuzzified) -> [f64; RULE_COUNT] {
    let mut strengths = [0.0; RULE_COUNT];
    for (strength, rule) in strengths.iter_mut().zip(RULE_BASE.iter()) {
        *strength = rule.strength(degrees);
    }
    strengths
}

/// Sum every rule's contribution in table order so results are bit-reproducible.
pub fn aggregate(degrees: &Fuzzified) -> InferenceResult {
    let strengths = firing_strengths(degrees);
    accumulate(&strengths)
}

fn accumulate(strengths: &[f64; RULE_COUNT]) -> InferenceResult {
    let mut numerator = 0.0;
    let mut denominator = 0.0;

    for (strength, rule) in strengths.iter().zip(RULE_BASE.iter()) {
        numerator += strength * rule.consequent;
    }
    for strength in strengths {
        denominator += strength;
    }

    InferenceResult { numerator, denominator }
}

fn resolve(result: &InferenceResult) -> (f64, bool) {
    match result.crisp() {
        Some(price) => (price, false),
        None => {
            tracing::debug!(
                event_name = "core.inference.fallback",
                fallback_price = FALLBACK_PRICE,
                "no rule fired; using fallback price"
            );
            (FALLBACK_PRICE, true)
        }
    }
}

pub fn infer(distance_km: f64, temperature_c: f64, items: f64) -> f64 {
    let degrees = fuzzify(distance_km, temperature_c, items);
    let (price, _) = resolve(&aggregate(&degrees));
    price
}

pub fn infer_with_trace(distance_km: f64, temperature_c: f64, items: f64) -> InferenceTrace {
    let degrees = fuzzify(distance_km, temperature_c, items);
    let strengths = firing_strengths(&degrees);
    let result = accumulate(&strengths);
    let (price, fallback_used) = resolve(&result);

    let firings = strengths
        .iter()
        .zip(RULE_BASE.iter())
        .map(|(strength, rule)| RuleFiring { rule: *rule, strength: *strength })
        .collect();

    InferenceTrace { degrees, firings, result, fallback_used, price }
}
