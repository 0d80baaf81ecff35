pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![start];
    }

    let mut result = Vec::with_capacity(n);
    let step = (end - start) / (n as f64 - 1.0);

    for i in 0..n {
        result.push(start + (i as f64) * step);
    }

    result
}

/// Evaluates the polynomial with coefficients ordered from the highest degree
/// at `x` using the Horner scheme.
pub fn polyval(coefs: &[f64], x: f64) -> f64 {
    assert!(!coefs.is_empty(), "polynomial must have at least one coefficient");

    coefs.iter().skip(1).fold(coefs[0], |acc, &c| acc * x + c)
}

pub fn factorial(n: u32) -> f64 {
    assert!(n < 100);

    (1..=n).fold(1.0, |acc, k| acc * k as f64)
}

/// Asserts that two values are equal up to a relative tolerance.
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $tol:expr) => {{
        let left: f64 = $left;
        let right: f64 = $right;
        let scale = f64::max(left.abs(), right.abs());

        assert!(
            (left - right).abs() <= $tol * scale || left == right,
            "assertion failed: `{:e}` is not approximately `{:e}` within relative `{:e}`",
            left,
            right,
            $tol
        );
    }};
}
