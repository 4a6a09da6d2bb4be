/*
 * Error Module
 *
 * Error types for the few operations that can fail: validating flock
 * parameters and scenario settings, and loading a scenario file. The simulation step and the
 * camera mutators are total and never return errors.
 */

use std::fmt;

/// Reasons a set of flock parameters is rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamsError {
    /// A scalar was NaN or infinite.
    NonFinite(&'static str),
    /// A scalar that must be strictly positive was zero or negative.
    NotPositive(&'static str, f32),
    /// A steering weight was negative.
    NegativeWeight(&'static str, f32),
    /// A scalar that must be zero or more was negative.
    Negative(&'static str, f32),
    /// All three steering weights are zero, so the weighted sum cannot be normalized.
    ZeroWeightSum,
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamsError::NonFinite(name) => write!(f, "Parameter `{}` must be finite", name),
            ParamsError::NotPositive(name, value) => {
                write!(f, "Parameter `{}` must be greater than zero (got {})", name, value)
            }
            ParamsError::NegativeWeight(name, value) => {
                write!(f, "Weight `{}` must not be negative (got {})", name, value)
            }
            ParamsError::Negative(name, value) => {
                write!(f, "Parameter `{}` must not be negative (got {})", name, value)
            }
            ParamsError::ZeroWeightSum => write!(
                f,
                "At least one of the separation, cohesion and alignment weights must be non-zero"
            ),
        }
    }
}

impl std::error::Error for ParamsError {}

/// Errors that can occur while loading a scenario configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the file from disk.
    Io(std::io::Error),
    /// The YAML document could not be parsed into a scenario.
    Parse(serde_yaml::Error),
    /// The document parsed but holds a value the simulation cannot run with.
    Params(ParamsError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to read scenario file: {}", e),
            ConfigError::Parse(e) => write!(f, "Failed to parse scenario: {}", e),
            ConfigError::Params(e) => write!(f, "Invalid parameters in scenario: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Params(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<ParamsError> for ConfigError {
    fn from(e: ParamsError) -> Self {
        ConfigError::Params(e)
    }
}
