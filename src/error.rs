use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A state quantity checked by the equation builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    Temperature,
    Pressure,
    CriticalTemperature,
    CriticalPressure,
    GasConstant,
    AcentricFactor,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Quantity::Temperature => "temperature",
            Quantity::Pressure => "pressure",
            Quantity::CriticalTemperature => "critical temperature",
            Quantity::CriticalPressure => "critical pressure",
            Quantity::GasConstant => "gas constant",
            Quantity::AcentricFactor => "acentric factor",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EosError {
    /// The leading coefficient of the cubic is zero.
    #[error("Invalid equation: {0}")]
    InvalidEquation(String),

    /// A state quantity is out of range.  Carries the first offending
    /// quantity so callers can point the user at the right field.
    #[error("Invalid input: {message}")]
    InvalidInput { quantity: Quantity, message: String },

    /// Unrecognised equation-of-state name.
    #[error("Unknown equation of state: {0}")]
    UnknownModel(String),

    /// Bad value in the environment / `.env` configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl EosError {
    /// The offending quantity, for `InvalidInput` errors.
    pub fn quantity(&self) -> Option<Quantity> {
        match self {
            EosError::InvalidInput { quantity, .. } => Some(*quantity),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, EosError>;
