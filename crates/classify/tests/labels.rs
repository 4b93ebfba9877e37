//! End-to-end labelling of engine output.

use stochlab_classify::{CongestionLabel, classify_markov, classify_queue};
use stochlab_markov::{iterate, stationary, validate_matrix, validate_vector};
use stochlab_queue::{finite_source, mm1, mmk};

const EXAMPLE: [[f64; 3]; 3] = [[0.7, 0.2, 0.1], [0.3, 0.4, 0.3], [0.2, 0.3, 0.5]];

#[test]
fn example_chain_converges_after_five_steps() {
    let p = validate_matrix(&EXAMPLE, 3).unwrap();
    let s0 = validate_vector(&[1.0, 0.0, 0.0], 3).unwrap();
    let pi = stationary(&p);

    // After 4 steps state 0 is still 0.025 above its stationary share.
    let four = iterate(&p, &s0, 4).unwrap();
    let c = classify_markov(four.last(), pi.distribution()).unwrap();
    assert!(!c.converged);
    assert_eq!(c.dominant_state, 0);

    let five = iterate(&p, &s0, 5).unwrap();
    let c = classify_markov(five.last(), pi.distribution()).unwrap();
    assert!(c.converged);
    assert_eq!(c.dominant_state, 0);
}

#[test]
fn stationary_start_is_converged_immediately() {
    let p = validate_matrix(&EXAMPLE, 3).unwrap();
    let pi = stationary(&p);
    let traj = iterate(&p, pi.distribution(), 1).unwrap();
    assert!(
        classify_markov(traj.last(), pi.distribution())
            .unwrap()
            .converged
    );
}

#[test]
fn single_source_is_high_blocking() {
    let s = finite_source(1, 1, 0.5, 1.0).unwrap();
    assert_eq!(classify_queue(&s.metrics), CongestionLabel::HighBlocking);
}

#[test]
fn calculator_presets_are_congested() {
    let single = finite_source(10, 1, 0.2, 1.0).unwrap();
    assert_eq!(classify_queue(&single.metrics), CongestionLabel::Congested);

    let multi = finite_source(10, 3, 0.2, 0.5).unwrap();
    assert_eq!(classify_queue(&multi.metrics), CongestionLabel::Congested);
}

#[test]
fn lightly_loaded_finite_source_is_low_congestion() {
    let s = finite_source(10, 3, 0.01, 1.0).unwrap();
    assert_eq!(classify_queue(&s.metrics), CongestionLabel::LowCongestion);
}

#[test]
fn infinite_population_models_use_queue_length() {
    assert_eq!(
        classify_queue(&mm1(0.6, 1.0).unwrap().metrics),
        CongestionLabel::Congested
    );
    assert_eq!(
        classify_queue(&mm1(0.3, 1.0).unwrap().metrics),
        CongestionLabel::LowCongestion
    );
    assert_eq!(
        classify_queue(&mmk(2.0, 1.0, 3).unwrap().metrics),
        CongestionLabel::Congested
    );
}
