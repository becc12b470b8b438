use std::{iter::FusedIterator, ops::Index, slice};

use tracing::{debug, trace};

use crate::{AxisSpec, Config, Direction, Error, Field, Step, Stop};

/// The ordered values an axis takes, materialized from an [`AxisSpec`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sequence {
    values: Vec<f64>,
}

impl Sequence {
    /// Returns the number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the axis produced no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Returns the first value (the axis start), if any.
    #[must_use]
    pub fn first(&self) -> Option<f64> {
        self.values.first().copied()
    }

    /// Returns the last value, if any.
    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Returns the values in generation order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Returns an iterator over the values in generation order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }
}

impl Index<usize> for Sequence {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a f64;
    type IntoIter = slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl From<Sequence> for Vec<f64> {
    fn from(sequence: Sequence) -> Self {
        sequence.values
    }
}

impl FromIterator<f64> for Sequence {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Iterator over the values of an axis, returned by [`AxisSpec::values`].
///
/// Each value is checked against the stop condition before it is yielded.
/// After yielding a value, its successor is computed once. The walk is over
/// if the successor equals the value, or if it moves against the direction of
/// a numeric stop, so a numeric-stop sequence is always monotonic.
#[derive(Debug)]
pub struct Values<'a> {
    spec: &'a AxisSpec,
    next: Option<f64>,
}

impl<'a> Values<'a> {
    pub(crate) fn new(spec: &'a AxisSpec) -> Self {
        Self {
            spec,
            next: Some(spec.start()),
        }
    }

    /// Returns `true` if `successor` moves against the direction of a numeric stop.
    fn reverses(&self, value: f64, successor: f64) -> bool {
        match self.spec.direction() {
            Some(Direction::Ascending) => successor < value,
            Some(Direction::Descending) => successor > value,
            None => false,
        }
    }
}

impl Iterator for Values<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let value = self.next.take()?;

        if !self.spec.stop().admits(self.spec.start(), value) {
            trace!(value, "stop condition reached");
            return None;
        }

        let successor = self.spec.step().next(value);

        #[allow(clippy::float_cmp)]
        if successor == value {
            trace!(value, "fixed point reached");
        } else if self.reverses(value, successor) {
            trace!(value, successor, "step reverses direction");
        } else {
            self.next = Some(successor);
        }

        Some(value)
    }
}

impl FusedIterator for Values<'_> {}

/// Materializes the sequence of values for one axis.
///
/// Never fails: a step that moves away from a numeric stop, or a predicate
/// that rejects the start, yields an empty or single-value sequence.
/// A zero step (or any step landing on a fixed point) ends the sequence
/// after that value. With a numeric stop, a step that turns back against the
/// direction from start to stop ends the sequence after the current value.
///
/// There is no length cap. With a predicate stop, a step function that
/// oscillates between distinct values keeps generating, as does a float step
/// too small to change the value before reaching a numeric stop.
/// Use [`try_generate`] to bound the walk.
///
/// # Examples
///
/// ```
/// use incrementator_core::{AxisSpec, generate};
///
/// let sequence = generate(&AxisSpec::new(5.0, 1.0, -1.0));
/// assert_eq!(sequence.as_slice(), [5.0, 4.0, 3.0, 2.0, 1.0]);
///
/// let sequence = generate(&AxisSpec::new(5.0, 10.0, 0.0));
/// assert_eq!(sequence.as_slice(), [5.0]);
/// ```
pub fn generate(spec: &AxisSpec) -> Sequence {
    let sequence: Sequence = spec.values().collect();
    debug!(
        len = sequence.len(),
        direction = ?spec.direction(),
        "sequence generated"
    );
    sequence
}

/// Materializes the sequence for one axis after validating it.
///
/// Produces the same sequence as [`generate`] for every spec it accepts.
///
/// # Errors
///
/// Returns [`Error::NonFinite`] if the start, a numeric stop or a numeric
/// step is NaN or infinite, and [`Error::LengthLimit`] if the sequence would
/// hold more than [`Config::max_len`] values.
pub fn try_generate(spec: &AxisSpec, config: &Config) -> Result<Sequence, Error> {
    validate(spec)?;

    let limit = config.max_len();
    let mut values = Vec::new();
    for value in spec.values() {
        if values.len() == limit {
            return Err(Error::LengthLimit { limit });
        }
        values.push(value);
    }

    debug!(len = values.len(), direction = ?spec.direction(), "sequence generated");
    Ok(Sequence { values })
}

/// Checks that every numeric part of the spec is finite.
fn validate(spec: &AxisSpec) -> Result<(), Error> {
    let start = spec.start();
    if !start.is_finite() {
        return Err(Error::NonFinite {
            field: Field::Start,
            value: start,
        });
    }

    if let Stop::Value(stop) = spec.stop() {
        if !stop.is_finite() {
            return Err(Error::NonFinite {
                field: Field::Stop,
                value: *stop,
            });
        }
    }

    if let Step::Value(step) = spec.step() {
        if !step.is_finite() {
            return Err(Error::NonFinite {
                field: Field::Step,
                value: *step,
            });
        }
    }

    Ok(())
}
