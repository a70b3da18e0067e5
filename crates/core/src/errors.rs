use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("{field} = {value} is outside the operating range {min}..={max}")]
    InputOutOfRange { field: &'static str, value: f64, min: f64, max: f64 },
    #[error("{field} must be a finite number")]
    NonFiniteInput { field: &'static str },
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("configuration failure: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Stable machine-readable class for command outcomes.
    pub fn error_class(&self) -> &'static str {
        match self {
            Self::Domain(DomainError::InputOutOfRange { .. }) => "input_out_of_range",
            Self::Domain(DomainError::NonFiniteInput { .. }) => "non_finite_input",
            Self::Configuration(_) => "config_validation",
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Domain(_) => {
                "The delivery inputs could not be priced. Check the values and try again."
            }
            Self::Configuration(_) => {
                "The configuration is invalid. Run `ongkir config` to inspect it."
            }
        }
    }
}
