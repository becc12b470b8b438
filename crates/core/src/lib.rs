//! Axis definitions and sequence generation.
//!
//! An axis is a start value, a stop condition and a step rule:
//!
//! - [`AxisSpec`]: the axis definition
//! - [`Stop`]: an inclusive numeric bound or a predicate
//! - [`Step`]: a numeric increment or a successor function
//! - [`generate`]: walks an axis into a [`Sequence`]
//! - [`try_generate`]: the same walk with finiteness and length checks

mod axis;
mod config;
mod error;
mod sequence;

pub use axis::{AxisSpec, Direction, Step, StepFn, Stop, StopFn};
pub use config::{Config, ConfigError};
pub use error::{Error, Field};
pub use sequence::{Sequence, Values, generate, try_generate};
