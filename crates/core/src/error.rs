use std::fmt;

use thiserror::Error;

/// The numeric part of an [`AxisSpec`](crate::AxisSpec) that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Start,
    Stop,
    Step,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Step => "step",
        })
    }
}

/// Errors returned by [`try_generate`](crate::try_generate).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("{field} is not finite: {value}")]
    NonFinite { field: Field, value: f64 },

    #[error("sequence exceeds {limit} values")]
    LengthLimit { limit: usize },
}
