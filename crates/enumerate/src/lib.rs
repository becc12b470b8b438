//! Enumerates every combination of stepped numeric axes.
//!
//! A [`Configuration`] holds named axes in order. [`enumerate`] materializes
//! each axis into a [`Sequence`] and calls back once per point of their
//! Cartesian product, with the first axis varying slowest and the last
//! fastest:
//!
//! ```
//! use incrementator::{AxisSpec, Configuration, Step, enumerate};
//!
//! let config = Configuration::new()
//!     .with_axis("x", AxisSpec::new(0.0, 2.0, 1.0))
//!     .with_axis("y", AxisSpec::new(1.0, 8.0, Step::with(|v| v * 2.0)));
//!
//! let mut lines = Vec::new();
//! enumerate(&config, |c| lines.push(format!("x={}, y={}", c["x"], c["y"])));
//!
//! assert_eq!(lines.len(), 12);
//! assert_eq!(lines[0], "x=0, y=1");
//! assert_eq!(lines[1], "x=0, y=2");
//! assert_eq!(lines[11], "x=2, y=8");
//! ```
//!
//! [`enumerate`] always visits every combination. When the caller needs to
//! stop part way, [`enumerate_observed`] passes each combination to an
//! [`Observer`] that may return [`Action::StopEarly`].
//! [`try_enumerate`] additionally rejects non-finite axes and bounds the
//! length of each sequence with a [`Config`].

mod action;
mod combination;
mod configuration;
mod driver;
mod error;
mod event;
mod observer;
mod odometer;
mod summary;

pub use action::Action;
pub use combination::Combination;
pub use configuration::Configuration;
pub use driver::{count, enumerate, enumerate_observed, materialize, try_enumerate};
pub use error::Error;
pub use event::Event;
pub use observer::Observer;
pub use summary::{Status, Summary};

pub use incrementator_core::{
    AxisSpec, Config, ConfigError, Direction, Field, Sequence, Step, Stop, generate, try_generate,
};
