use faer::Mat;
use faer::linalg::solvers::SolveLstsq;
use spectro::utility::factorial;

use crate::error::SolverError;

/// Least-squares polynomial fit through sampled points, coefficients ordered
/// from the highest degree. Solves the Vandermonde system with a QR
/// factorization.
pub fn polyfit(xs: &[f64], ys: &[f64], degree: usize) -> Result<Vec<f64>, SolverError> {
    SolverError::check_lengths(xs, ys)?;
    SolverError::check_finite(xs)?;
    SolverError::check_finite(ys)?;

    if xs.len() < degree + 1 {
        return Err(SolverError::InsufficientPoints {
            degree,
            points: xs.len(),
        });
    }

    let vandermonde = Mat::from_fn(xs.len(), degree + 1, |i, j| xs[i].powi((degree - j) as i32));
    let rhs = Mat::from_fn(ys.len(), 1, |i, _| ys[i]);

    let coefs = vandermonde.qr().solve_lstsq(rhs.as_ref());

    Ok((0..degree + 1).map(|i| coefs[(i, 0)]).collect())
}

/// Shifts the sampled potential energies so that the minimum is at zero,
/// returning the applied shift.
pub fn shift_to_floor(values: &mut [f64]) -> f64 {
    let floor = values.iter().copied().fold(f64::INFINITY, f64::min);

    for value in values.iter_mut() {
        *value -= floor;
    }

    floor
}

/// Selects the points whose potential energy lies below the fourth-lowest
/// sampled energy, the window used for the harmonic sanity fit.
pub fn harmonic_window(xs: &[f64], ys: &[f64]) -> Result<(Vec<f64>, Vec<f64>), SolverError> {
    SolverError::check_lengths(xs, ys)?;
    if ys.len() < 4 {
        return Err(SolverError::InsufficientPoints {
            degree: 2,
            points: ys.len(),
        });
    }

    let mut sorted = ys.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).expect("non-finite sampled energy"));
    let fourth_lowest = sorted[3];

    let (window_xs, window_ys) = xs
        .iter()
        .zip(ys)
        .filter(|(_, y)| **y < fourth_lowest)
        .map(|(&x, &y)| (x, y))
        .unzip();

    Ok((window_xs, window_ys))
}

/// Rescales fit coefficients into derivatives at the expansion point by
/// multiplying the coefficient of ascending order `k` with `k!`.
pub fn rescale_to_derivatives(coefs: &mut [f64]) {
    let n = coefs.len();
    for k in 0..n {
        coefs[n - 1 - k] *= factorial(k as u32);
    }
}

#[cfg(test)]
mod test {
    use spectro::{assert_approx_eq, utility::linspace};

    use super::{harmonic_window, polyfit, rescale_to_derivatives, shift_to_floor};

    #[test]
    fn test_polyfit_exact() {
        // 0.3 q^3 - 1.2 q^2 + 0.5 q - 2
        let xs = linspace(-1.0, 1.0, 9);
        let ys: Vec<f64> = xs
            .iter()
            .map(|&x| 0.3 * x * x * x - 1.2 * x * x + 0.5 * x - 2.0)
            .collect();

        let coefs = polyfit(&xs, &ys, 3).unwrap();

        assert_approx_eq!(coefs[0], 0.3, 1e-10);
        assert_approx_eq!(coefs[1], -1.2, 1e-10);
        assert_approx_eq!(coefs[2], 0.5, 1e-10);
        assert_approx_eq!(coefs[3], -2.0, 1e-10);
    }

    #[test]
    fn test_polyfit_overdetermined() {
        let xs = linspace(-0.5, 0.5, 41);
        let ys: Vec<f64> = xs.iter().map(|&x| 2.0 * x * x + 1.0).collect();

        let coefs = polyfit(&xs, &ys, 2).unwrap();

        assert_approx_eq!(coefs[0], 2.0, 1e-10);
        assert!(coefs[1].abs() < 1e-10);
        assert_approx_eq!(coefs[2], 1.0, 1e-10);
    }

    #[test]
    fn test_polyfit_degenerate() {
        assert!(polyfit(&[0.0, 1.0], &[0.0], 1).is_err());
        assert!(polyfit(&[0.0, 1.0], &[0.0, 1.0], 2).is_err());
        assert!(polyfit(&[0.0, f64::NAN], &[0.0, 1.0], 1).is_err());
    }

    #[test]
    fn test_shift_to_floor() {
        let mut values = vec![3.0, 1.5, 2.0, 4.5];
        let floor = shift_to_floor(&mut values);

        assert_eq!(floor, 1.5);
        assert_eq!(values, vec![1.5, 0.0, 0.5, 3.0]);
    }

    #[test]
    fn test_harmonic_window() {
        let xs = vec![-0.3, -0.2, -0.1, 0.0, 0.1, 0.2, 0.3];
        let ys = vec![0.9, 0.4, 0.1, 0.0, 0.1, 0.4, 0.9];

        // fourth lowest is 0.4, both 0.4 samples are excluded
        let (window_xs, window_ys) = harmonic_window(&xs, &ys).unwrap();
        assert_eq!(window_xs, vec![-0.1, 0.0, 0.1]);
        assert_eq!(window_ys, vec![0.1, 0.0, 0.1]);

        assert!(harmonic_window(&xs[..3], &ys[..3]).is_err());
    }

    #[test]
    fn test_rescale_to_derivatives() {
        let mut coefs = vec![1.0, 1.0, 1.0, 1.0];
        rescale_to_derivatives(&mut coefs);

        // ascending orders 3, 2, 1, 0
        assert_eq!(coefs, vec![6.0, 2.0, 1.0, 1.0]);
    }
}
