pub mod inference;
pub mod membership;
pub mod rules;

pub use inference::{
    aggregate, infer, infer_with_trace, InferenceResult, InferenceTrace, RuleFiring,
    FALLBACK_PRICE,
};
pub use membership::{fuzzify, DistanceTerm, Fuzzified, ItemCountTerm, WeatherTerm};
pub use rules::{consequent, Rule, RULE_BASE};
