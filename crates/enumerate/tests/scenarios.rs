use std::thread;

use approx::assert_relative_eq;

use incrementator::{
    Action, AxisSpec, Combination, Configuration, Event, Status, Step, Stop, enumerate,
    enumerate_observed,
};

/// Runs an enumeration and collects the values of every combination.
fn collect(config: &Configuration) -> Vec<Vec<f64>> {
    let mut rows = Vec::new();
    enumerate(config, |c| rows.push(c.values().to_vec()));
    rows
}

fn single(start: f64, stop: impl Into<Stop>, step: impl Into<Step>) -> Vec<f64> {
    let config = Configuration::new().with_axis("x", AxisSpec::new(start, stop, step));
    collect(&config).into_iter().map(|row| row[0]).collect()
}

#[test]
fn single_axis_ascending() {
    assert_eq!(single(1.0, 5.0, 1.0), [1.0, 2.0, 3.0, 4.0, 5.0]);
}

#[test]
fn single_axis_descending() {
    assert_eq!(single(5.0, 1.0, -1.0), [5.0, 4.0, 3.0, 2.0, 1.0]);
}

#[test]
fn predicate_stop() {
    assert_eq!(single(1.0, Stop::when(|v| v < 5.0), 1.0), [1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn predicate_stop_false_immediately() {
    assert!(single(1.0, Stop::when(|_| false), 1.0).is_empty());
}

#[test]
fn function_step() {
    assert_eq!(single(1.0, 8.0, Step::with(|v| v * 2.0)), [1.0, 2.0, 4.0, 8.0]);
}

#[test]
fn floating_point_step() {
    let values = single(1.0, 2.0, 0.5);
    assert_eq!(values.len(), 3);
    for (actual, expected) in values.into_iter().zip([1.0, 1.5, 2.0]) {
        assert_relative_eq!(actual, expected);
    }
}

#[test]
fn zero_step_emits_once() {
    assert_eq!(single(5.0, 10.0, 0.0), [5.0]);
}

#[test]
fn two_ascending_axes() {
    let config = Configuration::new()
        .with_axis("x", AxisSpec::new(1.0, 3.0, 1.0))
        .with_axis("y", AxisSpec::new(10.0, 12.0, 1.0));

    let expected: Vec<Vec<f64>> = [1.0, 2.0, 3.0]
        .into_iter()
        .flat_map(|x| [10.0, 11.0, 12.0].map(|y| vec![x, y]))
        .collect();

    assert_eq!(collect(&config), expected);
}

#[test]
fn mixed_ascending_and_descending_axes() {
    let config = Configuration::new()
        .with_axis("up", AxisSpec::new(1.0, 3.0, 1.0))
        .with_axis("down", AxisSpec::new(3.0, 1.0, -1.0));

    let mut seen = Vec::new();
    enumerate(&config, |c| seen.push((c["up"], c["down"])));

    assert_eq!(
        seen,
        [
            (1.0, 3.0),
            (1.0, 2.0),
            (1.0, 1.0),
            (2.0, 3.0),
            (2.0, 2.0),
            (2.0, 1.0),
            (3.0, 3.0),
            (3.0, 2.0),
            (3.0, 1.0),
        ]
    );
}

#[test]
fn three_axes_with_mixed_step_types() {
    let config = Configuration::new()
        .with_axis("a", AxisSpec::new(0.0, 1.0, 1.0))
        .with_axis("b", AxisSpec::new(10.0, 20.0, 5.0))
        .with_axis("c", AxisSpec::new(100.0, 10.0, Step::with(|v| v / 2.0)));

    let mut expected = Vec::new();
    for a in [0.0, 1.0] {
        for b in [10.0, 15.0, 20.0] {
            for c in [100.0, 50.0, 25.0, 12.5] {
                expected.push(vec![a, b, c]);
            }
        }
    }

    let rows = collect(&config);
    assert_eq!(rows.len(), 24);
    assert_eq!(rows, expected);
}

#[test]
fn linear_and_exponential_axes() {
    let config = Configuration::new()
        .with_axis("linear", AxisSpec::new(0.0, 4.0, 1.0))
        .with_axis("exponential", AxisSpec::new(1.0, 8.0, Step::with(|v| v * 2.0)));

    let rows = collect(&config);

    assert_eq!(rows.len(), 20);
    assert_eq!(rows[0], [0.0, 1.0]);
    assert_eq!(rows[3], [0.0, 8.0]);
    assert_eq!(rows[4], [1.0, 1.0]);
    assert_eq!(rows[19], [4.0, 8.0]);
}

#[test]
fn empty_configuration_emits_nothing() {
    let mut calls = 0;
    enumerate(&Configuration::new(), |_| calls += 1);
    assert_eq!(calls, 0);
}

#[test]
fn delivered_combinations_are_independent() {
    let config = Configuration::new()
        .with_axis("a", AxisSpec::new(0.0, 1.0, 1.0))
        .with_axis("b", AxisSpec::new(0.0, 1.0, 1.0));

    let mut kept: Vec<Combination> = Vec::new();
    enumerate(&config, |mut c| {
        let snapshot = c.clone();
        c.set("a", -1.0);
        c.set("b", -1.0);
        if let Some(previous) = kept.last_mut() {
            previous.set("b", 99.0);
        }
        kept.push(snapshot);
    });

    let values: Vec<_> = kept.iter().map(|c| c.values().to_vec()).collect();
    assert_eq!(
        values,
        [
            vec![0.0, 99.0],
            vec![0.0, 99.0],
            vec![1.0, 99.0],
            vec![1.0, 1.0],
        ]
    );
}

#[test]
fn observer_stops_after_requested_combination() {
    let config = Configuration::new()
        .with_axis("x", AxisSpec::new(0.0, 1000.0, 1.0))
        .with_axis("y", AxisSpec::new(0.0, 0.0, 1.0));

    let mut last = None;
    let summary = enumerate_observed(&config, |event: &Event| {
        last = event.combination.get("x");
        (event.ordinal == 41).then_some(Action::StopEarly)
    });

    assert_eq!(summary.status, Status::StoppedByObserver);
    assert_eq!(summary.emitted, 42);
    assert_eq!(last, Some(41.0));
}

#[test]
fn concurrent_enumerations_are_independent() {
    let handles: Vec<_> = (1..=4_u32)
        .map(|n| {
            thread::spawn(move || {
                let config = Configuration::new()
                    .with_axis("a", AxisSpec::new(0.0, f64::from(n), 1.0))
                    .with_axis("b", AxisSpec::new(0.0, 2.0, 1.0));
                let mut calls = 0_usize;
                enumerate(&config, |_| calls += 1);
                calls
            })
        })
        .collect();

    let counts: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("thread panicked"))
        .collect();

    assert_eq!(counts, [6, 9, 12, 15]);
}

#[test]
fn step_away_from_numeric_stop_contributes_only_its_start() {
    let config = Configuration::new()
        .with_axis("a", AxisSpec::new(0.0, 2.0, 1.0))
        .with_axis("wrong_way", AxisSpec::new(1.0, 5.0, -1.0));

    assert_eq!(
        collect(&config),
        [vec![0.0, 1.0], vec![1.0, 1.0], vec![2.0, 1.0]]
    );
}
