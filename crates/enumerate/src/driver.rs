use std::sync::Arc;

use tracing::{debug, instrument};

use incrementator_core::{Config, Sequence, generate, try_generate};

use crate::{
    Action, Combination, Configuration, Error, Event, Observer, Summary, odometer::Odometer,
};

/// Calls `callback` once for every combination of the configured axes.
///
/// Each axis is first materialized with [`generate`].
/// Combinations are then delivered in nested order: the first axis is the
/// outermost (slowest-varying) and the last axis the innermost.
/// Every combination passed to `callback` is an independent value.
///
/// Nothing is emitted for an empty configuration, or when any axis yields an
/// empty sequence.
///
/// # Examples
///
/// ```
/// use incrementator::{AxisSpec, Configuration, enumerate};
///
/// let config = Configuration::new()
///     .with_axis("a", AxisSpec::new(0.0, 1.0, 1.0))
///     .with_axis("b", AxisSpec::new(10.0, 20.0, 5.0));
///
/// let mut seen = Vec::new();
/// enumerate(&config, |c| seen.push((c["a"], c["b"])));
///
/// assert_eq!(
///     seen,
///     [(0.0, 10.0), (0.0, 15.0), (0.0, 20.0), (1.0, 10.0), (1.0, 15.0), (1.0, 20.0)]
/// );
/// ```
#[instrument(skip_all, fields(axes = config.len()))]
pub fn enumerate<F>(config: &Configuration, mut callback: F)
where
    F: FnMut(Combination),
{
    if config.is_empty() {
        debug!("no axes configured");
        return;
    }

    let sequences = materialize(config);
    drive(config, &sequences, |_, combination| {
        callback(combination);
        None
    });
}

/// Enumerates every combination, letting an observer stop the walk early.
///
/// Produces the same combinations in the same order as [`enumerate`].
/// The observer receives an [`Event`] per combination and may return
/// [`Action::StopEarly`] to end the enumeration after that combination.
#[instrument(skip_all, fields(axes = config.len()))]
pub fn enumerate_observed<Obs>(config: &Configuration, mut observer: Obs) -> Summary
where
    Obs: Observer,
{
    if config.is_empty() {
        debug!("no axes configured");
        return Summary::completed(0);
    }

    let sequences = materialize(config);
    drive(config, &sequences, |ordinal, combination| {
        observer.observe(&Event {
            ordinal,
            combination,
        })
    })
}

/// Enumerates every combination after validating each axis with [`try_generate`].
///
/// No combination is emitted unless every axis passes validation.
///
/// # Errors
///
/// Returns [`Error::Axis`] naming the first axis, in configuration order,
/// whose spec is non-finite or whose sequence exceeds [`Config::max_len`].
#[instrument(skip_all, fields(axes = config.len()))]
pub fn try_enumerate<Obs>(
    config: &Configuration,
    limits: &Config,
    mut observer: Obs,
) -> Result<Summary, Error>
where
    Obs: Observer,
{
    if config.is_empty() {
        debug!("no axes configured");
        return Ok(Summary::completed(0));
    }

    let sequences = config
        .iter()
        .map(|(name, spec)| {
            try_generate(spec, limits).map_err(|source| Error::Axis {
                name: name.to_owned(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(drive(config, &sequences, |ordinal, combination| {
        observer.observe(&Event {
            ordinal,
            combination,
        })
    }))
}

/// Materializes the sequence of every axis, in configuration order.
pub fn materialize(config: &Configuration) -> Vec<Sequence> {
    config.iter().map(|(_, spec)| generate(spec)).collect()
}

/// Returns how many combinations [`enumerate`] would emit, saturating at `usize::MAX`.
///
/// Materializes every axis, so stop and step closures are called.
pub fn count(config: &Configuration) -> usize {
    let sizes = materialize(config).iter().map(Sequence::len).collect();
    Odometer::new(sizes).map_or(0, |odometer| odometer.total())
}

/// Walks the product of `sequences`, handing each combination to `visit`.
fn drive<F>(config: &Configuration, sequences: &[Sequence], mut visit: F) -> Summary
where
    F: FnMut(usize, Combination) -> Option<Action>,
{
    let sizes = sequences.iter().map(Sequence::len).collect();
    let Some(mut odometer) = Odometer::new(sizes) else {
        if let Some((name, _)) = config
            .names()
            .zip(sequences)
            .find(|(_, sequence)| sequence.is_empty())
        {
            debug!(axis = name, "axis has no values, nothing to enumerate");
        }
        return Summary::completed(0);
    };

    debug!(combinations = odometer.total(), "enumeration starting");

    let names: Arc<[String]> = config.names().map(str::to_owned).collect();
    let mut emitted = 0;

    loop {
        let values = odometer
            .indices()
            .iter()
            .zip(sequences)
            .map(|(&index, sequence)| sequence[index])
            .collect();

        let ordinal = emitted;
        emitted += 1;

        if let Some(action) = visit(ordinal, Combination::new(Arc::clone(&names), values)) {
            match action {
                Action::StopEarly => {
                    let summary = Summary::stopped(emitted);
                    debug!(
                        emitted,
                        status = ?summary.status,
                        "enumeration stopped by observer"
                    );
                    return summary;
                }
            }
        }

        if !odometer.advance() {
            break;
        }
    }

    let summary = Summary::completed(emitted);
    debug!(emitted, status = ?summary.status, "enumeration complete");
    summary
}
