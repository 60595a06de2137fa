//! Sample-size planning for the sequential test.
//!
//! These calculations size the sample cap before compilation starts; none
//! of them run inside the hot decision loop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Expected number of samples for the n_diff rule to reach a verdict, given
/// the true per-sample success probability `p`.
///
/// Models the success/failure lead as an asymmetric random walk absorbed at
/// ±n_diff (gambler's ruin). Closed form:
///
/// ```text
/// p = 1/2:  E[T] = n_diff^2
/// p ≠ 1/2:  E[T] = z/(q-p) - N/(q-p) * (1 - r^z)/(1 - r^N)
///           with q = 1-p, r = q/p, z = n_diff, N = 2*n_diff
/// ```
///
/// Degenerate probabilities (0 or 1) need exactly n_diff samples.
pub fn expected_samples_for_n_diff(n_diff: u32, p: f64) -> f64 {
    assert!(n_diff >= 1, "n_diff must be >= 1");
    assert!((0.0..=1.0).contains(&p), "p must be a probability");

    let n = f64::from(n_diff);
    if p == 0.0 || p == 1.0 {
        return n;
    }
    let q = 1.0 - p;
    if (p - q).abs() < 1e-12 {
        return n * n;
    }
    let r = q / p;
    let z = n;
    let big_n = 2.0 * n;
    z / (q - p) - big_n / (q - p) * (1.0 - r.powf(z)) / (1.0 - r.powf(big_n))
}

/// Monte-Carlo cross-check for [`expected_samples_for_n_diff`], with a
/// deterministic seed so planning stays reproducible.
pub fn simulate_expected_samples(n_diff: u32, p: f64, trials: u32, seed: u64) -> f64 {
    assert!(n_diff >= 1 && trials >= 1);
    assert!((0.0..=1.0).contains(&p));

    let mut rng = StdRng::seed_from_u64(seed);
    let margin = i64::from(n_diff);
    let mut total_steps: u64 = 0;
    for _ in 0..trials {
        let mut lead: i64 = 0;
        let mut steps: u64 = 0;
        while lead.abs() < margin {
            lead += if rng.gen_bool(p) { 1 } else { -1 };
            steps += 1;
        }
        total_steps += steps;
    }
    total_steps as f64 / f64::from(trials)
}

/// Reliability of a majority vote over `k` independent samples, each correct
/// with probability `p`.
///
/// Returns the probability that the majority verdict is correct. Gains over
/// a single sample diminish quickly with k, which is the whole argument for
/// adaptive sequential sampling over wide parallel voting: the first few
/// votes buy most of the reliability, the rest mostly burn tokens.
///
/// `k` must be odd so a majority always exists.
pub fn reliability_boost_from_voting(k: u32, p: f64) -> f64 {
    assert!(k >= 1 && k % 2 == 1, "k must be odd");
    assert!((0.0..=1.0).contains(&p), "p must be a probability");

    let needed = k / 2 + 1;
    let mut total = 0.0;
    for successes in needed..=k {
        total += binomial_pmf(k, successes, p);
    }
    total
}

fn binomial_pmf(n: u32, k: u32, p: f64) -> f64 {
    // Iterative C(n, k) stays exact for the small committee sizes used here.
    let mut coeff = 1.0;
    for i in 0..k {
        coeff = coeff * f64::from(n - i) / f64::from(i + 1);
    }
    coeff * p.powi(k as i32) * (1.0 - p).powi((n - k) as i32)
}
