use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RolloverError {
    #[error("Machine parameter '{name}' = {value} is invalid: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Machine input '{field}' is not finite ({value})")]
    NonFiniteInput { field: &'static str, value: f64 },

    #[error("Unknown machine preset '{0}'")]
    UnknownPreset(String),
}

pub type RolloverResult<T> = Result<T, RolloverError>;
