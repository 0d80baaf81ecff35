use spectro::utility::polyval;

use crate::error::SolverError;

use super::potential::Potential;

/// Polynomial curve with coefficients ordered from the highest degree,
/// as produced by a least-squares fit.
#[derive(Debug, Clone)]
pub struct PolynomialPotential {
    coefs: Vec<f64>,
}

impl PolynomialPotential {
    pub fn new(coefs: Vec<f64>) -> Result<Self, SolverError> {
        if coefs.is_empty() {
            return Err(SolverError::EmptyPolynomial);
        }
        SolverError::check_finite(&coefs)?;

        Ok(Self { coefs })
    }

    pub fn coefs(&self) -> &[f64] {
        &self.coefs
    }

    pub fn degree(&self) -> usize {
        self.coefs.len() - 1
    }
}

impl Potential for PolynomialPotential {
    type Space = f64;

    fn value_inplace(&self, q: f64, value: &mut Self::Space) {
        *value = polyval(&self.coefs, q);
    }

    fn size(&self) -> usize {
        1
    }
}
