use thiserror::Error;

/// Returned from the eigensolver and its collaborators.
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("polynomial curve must have at least one coefficient")]
    EmptyPolynomial,

    #[error("polynomial coefficients must be finite")]
    NonFiniteCoefficients,

    #[error("grid must have at least one step")]
    EmptyGrid,

    #[error("requested number of solutions must be greater than 0")]
    NoSolutionsRequested,

    #[error("energy precision must be greater than 0; got {0:e}")]
    BadPrecision(f64),

    #[error("reduced mass must be greater than 0; got {0:e}")]
    BadMass(f64),

    #[error("wavefunction vanished during cleanup, the grid is too coarse or the seed too small")]
    DegenerateWavefunction,

    #[error("energy search exceeded {max_iterations} iterations with {found} of {requested} states found")]
    EnergySearchDiverged {
        max_iterations: usize,
        found: usize,
        requested: usize,
    },

    #[error("domain stabilization exceeded {0} widening iterations")]
    DomainDiverged(usize),

    #[error("sampled table columns differ in length; got {0} and {1}")]
    MismatchedTable(usize, usize),

    #[error("not enough points for a degree {degree} fit; got {points}")]
    InsufficientPoints { degree: usize, points: usize },
}

impl SolverError {
    pub(crate) fn check_lengths(a: &[f64], b: &[f64]) -> Result<(), Self> {
        (a.len() == b.len())
            .then_some(())
            .ok_or(Self::MismatchedTable(a.len(), b.len()))
    }

    pub(crate) fn check_finite(coefs: &[f64]) -> Result<(), Self> {
        coefs
            .iter()
            .all(|c| c.is_finite())
            .then_some(())
            .ok_or(Self::NonFiniteCoefficients)
    }
}
