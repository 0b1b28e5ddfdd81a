//! Error taxonomy
//!
//! Two failure kinds exist: a humid-air state point that cannot be
//! resolved ([`PropertyError`], handled per-point inside the sweep by
//! omission) and an invalid chart configuration ([`ChartError`], the only
//! error the sweep surfaces to callers).

use std::fmt;

/// A requested humid-air state point is not physically resolvable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyError {
    /// The input combination lies outside the model's valid domain
    /// (e.g. vapor pressure at or above total pressure, or a negative
    /// humidity ratio implied by the inputs)
    OutOfDomain(String),
}

impl fmt::Display for PropertyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyError::OutOfDomain(msg) => {
                write!(f, "State point outside model domain: {msg}")
            }
        }
    }
}

impl std::error::Error for PropertyError {}

/// Chart generation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// Caller-supplied configuration is degenerate
    /// (inverted temperature bounds or zero RH steps)
    InvalidConfig(String),
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::InvalidConfig(msg) => write!(f, "Invalid chart configuration: {msg}"),
        }
    }
}

impl std::error::Error for ChartError {}
