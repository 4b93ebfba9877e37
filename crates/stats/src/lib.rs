//! Numeric helpers shared by the stochlab engine crates.

/// Index of the largest value, ties broken by first occurrence.
///
/// Returns `None` if `data` is empty. NaN entries never win.
pub fn argmax(data: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &x) in data.iter().enumerate() {
        match best {
            Some((_, b)) if x <= b || x.is_nan() => {}
            None if x.is_nan() => {}
            _ => best = Some((i, x)),
        }
    }
    best.map(|(i, _)| i)
}

/// Largest absolute componentwise difference (infinity-norm distance).
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn max_abs_diff(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(
        a.len(),
        b.len(),
        "max_abs_diff: length mismatch ({} vs {})",
        a.len(),
        b.len()
    );
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

/// Poisson-style terms `a^i / i!` for `i = 0..=n`, up to a common factor.
///
/// Built as a running product (`t_i = t_{i-1} * a / i`) so neither the power
/// nor the factorial is ever formed on its own. Whenever a term passes
/// `1e250` every term so far is divided by it, so only ratios between terms
/// are meaningful; below that the terms are exact.
pub fn erlang_terms(a: f64, n: usize) -> Vec<f64> {
    const RESCALE_ABOVE: f64 = 1e250;

    let mut terms = Vec::with_capacity(n + 1);
    let mut t = 1.0;
    terms.push(t);
    for i in 1..=n {
        t *= a / i as f64;
        terms.push(t);
        if t > RESCALE_ABOVE {
            for x in terms.iter_mut() {
                *x /= t;
            }
            t = 1.0;
        }
    }
    terms
}

/// Mean of the index under a distribution: `Σ n·p[n]`.
pub fn mean_index(probs: &[f64]) -> f64 {
    probs.iter().enumerate().map(|(n, &p)| n as f64 * p).sum()
}

/// Mean excess of the index over `k`: `Σ max(0, n-k)·p[n]`.
pub fn mean_excess(probs: &[f64], k: usize) -> f64 {
    probs
        .iter()
        .enumerate()
        .skip(k + 1)
        .map(|(n, &p)| (n - k) as f64 * p)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_argmax_basic() {
        assert_eq!(argmax(&[0.1, 0.7, 0.2]), Some(1));
    }

    #[test]
    fn test_argmax_ties_first() {
        assert_eq!(argmax(&[0.4, 0.2, 0.4]), Some(0));
        assert_eq!(argmax(&[0.25, 0.25, 0.25, 0.25]), Some(0));
    }

    #[test]
    fn test_argmax_empty() {
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn test_argmax_skips_nan() {
        assert_eq!(argmax(&[f64::NAN, 0.3, 0.5]), Some(2));
        assert_eq!(argmax(&[f64::NAN]), None);
    }

    #[test]
    fn test_max_abs_diff() {
        let a = [0.5, 0.3, 0.2];
        let b = [0.45, 0.35, 0.2];
        assert_relative_eq!(max_abs_diff(&a, &b), 0.05, epsilon = 1e-12);
    }

    #[test]
    fn test_max_abs_diff_identical() {
        assert_eq!(max_abs_diff(&[0.1, 0.9], &[0.1, 0.9]), 0.0);
    }

    #[test]
    #[should_panic(expected = "max_abs_diff: length mismatch")]
    fn test_max_abs_diff_mismatch_panics() {
        max_abs_diff(&[1.0], &[1.0, 2.0]);
    }

    #[test]
    fn test_erlang_terms_small() {
        // a = 2: 1, 2, 2, 4/3
        let t = erlang_terms(2.0, 3);
        assert_eq!(t.len(), 4);
        assert_relative_eq!(t[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(t[1], 2.0, epsilon = 1e-12);
        assert_relative_eq!(t[2], 2.0, epsilon = 1e-12);
        assert_relative_eq!(t[3], 4.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_erlang_terms_matches_factorial_form() {
        let a: f64 = 3.7;
        let t = erlang_terms(a, 20);
        let mut fact = 1.0_f64;
        for (i, &ti) in t.iter().enumerate() {
            if i > 0 {
                fact *= i as f64;
            }
            assert_relative_eq!(ti, a.powi(i as i32) / fact, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_erlang_terms_large_n_finite() {
        // 200! overflows f64, the running product must not.
        let t = erlang_terms(150.0, 200);
        assert!(t.iter().all(|x| x.is_finite() && *x > 0.0));
    }

    #[test]
    fn test_erlang_terms_rescaled_past_overflow() {
        // 900^i/i! peaks near 1e389; the terms must stay finite and keep
        // their ratios.
        let t = erlang_terms(900.0, 1000);
        assert!(t.iter().all(|x| x.is_finite()));
        assert!(t.iter().any(|&x| x > 0.0));
        assert_relative_eq!(t[950] / t[949], 900.0 / 950.0, max_relative = 1e-12);
    }

    #[test]
    fn test_erlang_terms_zero_rate() {
        assert_eq!(erlang_terms(0.0, 3), vec![1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_mean_index() {
        assert_relative_eq!(mean_index(&[0.5, 0.25, 0.25]), 0.75, epsilon = 1e-12);
    }

    #[test]
    fn test_mean_excess() {
        // only n=2 exceeds k=1, by 1
        assert_relative_eq!(mean_excess(&[0.5, 0.25, 0.25], 1), 0.25, epsilon = 1e-12);
        assert_eq!(mean_excess(&[0.5, 0.5], 3), 0.0);
    }
}
