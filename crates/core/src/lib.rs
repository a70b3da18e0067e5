pub mod config;
pub mod errors;
pub mod estimate;
pub mod fuzzy;

pub use errors::{ApplicationError, DomainError};
pub use estimate::{
    categorize, estimate_delivery, explain_delivery, weather_label, DeliveryInput,
    DeliveryPricingEngine, Estimate, ExplainedEstimate, PriceTier, SugenoPricingEngine,
    WeatherLabel,
};
pub use fuzzy::{infer, infer_with_trace, InferenceResult, InferenceTrace, FALLBACK_PRICE};
