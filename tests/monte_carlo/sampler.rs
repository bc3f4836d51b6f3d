extern crate uniform_clt as clt;

use clt::mc::{sample, Pcg64Mcg, UniformSum};
use clt::CltError;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};
use rstest::*;

#[rstest]
#[case(1)]
#[case(5)]
#[case(100)]
fn same_seed_same_sum(#[case] n: usize) {
    let seed = 123;
    assert_eq!(sample(n, seed).unwrap(), sample(n, seed).unwrap());
}

#[test]
fn different_seeds_different_sums() {
    assert_ne!(sample(10, 1).unwrap(), sample(10, 2).unwrap());
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(10)]
#[case(100)]
fn sum_within_bounds(#[case] n: usize) {
    for seed in 0..200 {
        let value = sample(n, seed).unwrap();
        assert!(
            (0.0..=n as f64).contains(&value),
            "seed {seed}: {value} outside of [0, {n}]"
        );
    }
}

#[test]
fn single_variable_is_a_uniform_draw() {
    let seed = 42;
    let value = sample(1, seed).unwrap();
    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    assert_eq!(value, Uniform::new(0.0, 1.0).sample(&mut rng));
    assert!((0.0..1.0).contains(&value));
}

#[test]
fn caller_owned_generator() {
    // Drawing twice from the same generator continues its stream
    let distr = UniformSum::new(3).unwrap();
    let mut rng = Pcg64Mcg::seed_from_u64(7);
    let first = distr.sample(&mut rng);
    let second = distr.sample(&mut rng);
    assert_ne!(first, second);
    assert_eq!(first, sample(3, 7).unwrap());
}

#[test]
fn zero_variables_is_a_contract_error() {
    assert!(matches!(sample(0, 1), Err(CltError::NoVariables)));
}
