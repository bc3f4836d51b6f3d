extern crate uniform_clt as clt;

use approx::assert_abs_diff_eq;
use clt::mc::{density_histogram, run_experiment, summarize};
use rstest::*;

#[test]
fn summary_of_known_values() {
    let stats = summarize(&[1.0, 2.0, 3.0, 4.0, 5.0], 5).unwrap();
    assert_eq!(stats.count, 5);
    assert_abs_diff_eq!(stats.theoretical_mean, 2.5, epsilon = 1e-12);
    assert_abs_diff_eq!(stats.theoretical_std, (5.0_f64 / 12.0).sqrt(), epsilon = 1e-12);
    assert_abs_diff_eq!(stats.theoretical_std, 0.6455, epsilon = 1e-4);
    assert_abs_diff_eq!(stats.empirical_mean, 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(stats.empirical_std, 2.5_f64.sqrt(), epsilon = 1e-12);
    assert_abs_diff_eq!(stats.empirical_std, 1.5811, epsilon = 1e-4);
}

#[test]
fn summary_display() {
    let stats = summarize(&[1.0, 2.0, 3.0, 4.0, 5.0], 5).unwrap();
    assert_eq!(
        format!("{stats}"),
        "Experimental: μ=3.000, σ=1.581\nTheoretical: μ=2.500, σ=0.645"
    );
}

/// The experiment itself: the sums converge to the normal approximation N(n/2, n/12).
#[rstest]
#[case(1)]
#[case(2)]
#[case(12)]
#[case(30)]
fn moments_converge(#[case] n: usize) {
    let stats = run_experiment(n, 5_000, 42).unwrap().summarize().unwrap();
    println!("n = {n}\n{stats}");
    assert!(stats.mean_rel_error() < 0.05, "mean: {stats}");
    assert!(stats.std_rel_error() < 0.05, "std: {stats}");
}

#[test]
fn experiment_histogram_is_a_density() {
    let rslts = run_experiment(12, 5_000, 7).unwrap();
    let hist = density_histogram(rslts.values(), 30).unwrap();
    let area = hist.iter().map(|b| b.density * (b.end - b.start)).sum::<f64>();
    assert_abs_diff_eq!(area, 1.0, epsilon = 1e-9);

    // The most populated bin is near the theoretical mean
    let peak = hist
        .iter()
        .max_by_key(|b| b.count)
        .map(|b| 0.5 * (b.start + b.end))
        .unwrap();
    assert!((peak - 6.0).abs() < 1.0, "peak at {peak}");
}
