use std::fmt;

use crate::sequence::Values;

/// Predicate form of a stop condition.
pub type StopFn = Box<dyn Fn(f64) -> bool + Send + Sync>;

/// Function form of a step rule.
pub type StepFn = Box<dyn Fn(f64) -> f64 + Send + Sync>;

/// Decides whether a value still belongs to an axis.
///
/// A [`Stop::Value`] is an inclusive bound whose direction is inferred from
/// the axis start (see [`Direction`]).
/// A [`Stop::Predicate`] is called with each candidate value, and the walk
/// ends on the first value for which it returns `false`.
pub enum Stop {
    /// Inclusive numeric bound.
    Value(f64),
    /// Admits each value for which the closure returns `true`.
    Predicate(StopFn),
}

impl Stop {
    /// Creates a predicate stop condition from a closure.
    pub fn when<F>(predicate: F) -> Self
    where
        F: Fn(f64) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Box::new(predicate))
    }

    /// Returns `true` if `value` passes the stop test for an axis starting at `start`.
    #[must_use]
    pub fn admits(&self, start: f64, value: f64) -> bool {
        match self {
            Self::Value(stop) => Direction::between(start, *stop).admits(value, *stop),
            Self::Predicate(predicate) => predicate(value),
        }
    }
}

impl From<f64> for Stop {
    fn from(value: f64) -> Self {
        Self::Value(value)
    }
}

impl fmt::Debug for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// Produces the successor of a value along an axis.
///
/// A [`Step::Value`] is added to the current value.
/// A [`Step::Function`] maps the current value to the next one.
///
/// Generation stops right after a value whose successor equals itself, for
/// example a zero step or a function that returns its input.
/// Only this immediate fixed point is detected: a function that cycles
/// through two or more distinct values never terminates on its own, unless
/// its stop condition rejects one of them.
pub enum Step {
    /// Increment added to each value.
    Value(f64),
    /// Maps each value to its successor.
    Function(StepFn),
}

impl Step {
    /// Creates a step rule from a closure.
    pub fn with<F>(function: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self::Function(Box::new(function))
    }

    /// Returns the value that follows `value`.
    #[must_use]
    pub fn next(&self, value: f64) -> f64 {
        match self {
            Self::Value(step) => value + step,
            Self::Function(function) => function(value),
        }
    }
}

impl From<f64> for Step {
    fn from(value: f64) -> Self {
        Self::Value(value)
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Function(_) => f.write_str("Function(..)"),
        }
    }
}

/// Direction of a numeric stop bound relative to the axis start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `start <= stop`, values are admitted while `value <= stop`.
    Ascending,
    /// `start > stop`, values are admitted while `value >= stop`.
    Descending,
}

impl Direction {
    /// Infers the direction from the start value and a numeric stop.
    #[must_use]
    pub fn between(start: f64, stop: f64) -> Self {
        if start <= stop {
            Self::Ascending
        } else {
            Self::Descending
        }
    }

    /// Returns `true` if `value` has not passed the inclusive `stop` bound.
    #[must_use]
    pub fn admits(self, value: f64, stop: f64) -> bool {
        match self {
            Self::Ascending => value <= stop,
            Self::Descending => value >= stop,
        }
    }
}

/// Defines one numeric axis by its start value, stop condition and step rule.
///
/// # Examples
///
/// ```
/// use incrementator_core::{AxisSpec, Step, Stop};
///
/// let linear = AxisSpec::new(0.0, 2.0, 0.5);
/// let doubling = AxisSpec::new(1.0, Stop::when(|v| v < 100.0), Step::with(|v| v * 2.0));
///
/// assert_eq!(linear.values().collect::<Vec<_>>(), [0.0, 0.5, 1.0, 1.5, 2.0]);
/// assert_eq!(doubling.values().count(), 7);
/// ```
#[derive(Debug)]
pub struct AxisSpec {
    start: f64,
    stop: Stop,
    step: Step,
}

impl AxisSpec {
    /// Creates an axis from a start value, a stop condition and a step rule.
    ///
    /// Plain numbers convert into [`Stop::Value`] and [`Step::Value`].
    pub fn new(start: f64, stop: impl Into<Stop>, step: impl Into<Step>) -> Self {
        Self {
            start,
            stop: stop.into(),
            step: step.into(),
        }
    }

    /// Returns the first value of the axis.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Returns the stop condition.
    #[must_use]
    pub fn stop(&self) -> &Stop {
        &self.stop
    }

    /// Returns the step rule.
    #[must_use]
    pub fn step(&self) -> &Step {
        &self.step
    }

    /// Returns the direction implied by a numeric stop, or `None` for a predicate.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        match self.stop {
            Stop::Value(stop) => Some(Direction::between(self.start, stop)),
            Stop::Predicate(_) => None,
        }
    }

    /// Walks the axis, yielding each value that passes the stop test.
    ///
    /// This is the same walk [`generate`](crate::generate) collects.
    pub fn values(&self) -> Values<'_> {
        Values::new(self)
    }
}
