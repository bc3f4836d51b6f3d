extern crate uniform_clt as clt;

use clt::mc::{run_experiment, sample, ExperimentParameters, MonteCarlo};
use clt::CltError;
use rstest::*;

#[rstest]
#[case(0)]
#[case(1)]
#[case(10)]
#[case(257)]
fn trial_count(#[case] m: usize) {
    let rslts = run_experiment(5, m, 42).unwrap();
    assert_eq!(rslts.len(), m);
    assert_eq!(rslts.is_empty(), m == 0);
    assert_eq!(rslts.n(), 5);
}

#[test]
fn empty_result_set_has_no_range() {
    let rslts = run_experiment(5, 0, 42).unwrap();
    assert!(rslts.range().is_none());
    assert!(matches!(rslts.summarize(), Err(CltError::EmptyResults)));
}

#[test]
fn reproducible_experiment() {
    // Three variables, ten trials, seed 42: bit identical across invocations
    let first = run_experiment(3, 10, 42).unwrap();
    let second = run_experiment(3, 10, 42).unwrap();
    assert_eq!(first.len(), 10);
    for value in first.values() {
        assert!((0.0..=3.0).contains(value));
    }
    let bits = |vals: &[f64]| vals.iter().map(|v| v.to_bits()).collect::<Vec<u64>>();
    assert_eq!(bits(first.values()), bits(second.values()));
}

#[test]
fn trial_i_uses_base_seed_plus_i() {
    let rslts = run_experiment(4, 25, 1000).unwrap();
    for (i, value) in rslts.values().iter().enumerate() {
        assert_eq!(*value, sample(4, 1000 + i as u64).unwrap());
    }
}

#[test]
fn thread_pool_does_not_change_results() {
    let params = ExperimentParameters::new(7, 2_000, 1234).unwrap();
    let mc = MonteCarlo::new(params, "thread pool");
    let parallel = mc.run().unwrap();
    let sequential = run_experiment(7, 2_000, 1234).unwrap();
    assert_eq!(parallel, sequential);
    assert_eq!(parallel, mc.run().unwrap());
}

#[test]
fn all_results_within_bounds() {
    let rslts = run_experiment(10, 50, 42).unwrap();
    let (lo, hi) = rslts.range().unwrap();
    assert!(lo >= 0.0);
    assert!(hi <= 10.0);
}

#[test]
fn zero_variables_rejected() {
    assert!(matches!(run_experiment(0, 10, 42), Err(CltError::NoVariables)));
}
