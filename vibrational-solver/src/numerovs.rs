use crate::propagator::{Equation, PSI_SEED, Wavefunction};

/// Fourth-order Numerov integrator for `psi'' = g(q) psi`, propagating
/// outward from the left boundary over a fixed uniform grid.
///
/// doi: 10.1090/S0025-5718-1961-0129566-X
pub struct ShootingNumerov<'a> {
    equation: Equation<'a>,
}

impl<'a> ShootingNumerov<'a> {
    pub fn new(equation: Equation<'a>) -> Self {
        Self { equation }
    }

    /// Propagates the recursion over the whole grid, returning the raw,
    /// unnormalized wavefunction.
    pub fn propagate(&self) -> Wavefunction {
        let eq = &self.equation;
        let n = eq.len();
        let step2 = eq.step * eq.step;

        let mut psi = vec![0.0; n];
        psi[1] = PSI_SEED;

        for i in 2..n {
            let t0 = eq.g_value(i - 1) * psi[i - 1] * step2 * 5.0 / 6.0;
            let t1 = eq.g_value(i - 2) * psi[i - 2] * step2 / 12.0;
            let numerator = 2.0 * psi[i - 1] - psi[i - 2] + t0 + t1;

            // the denominator can vanish for pathological g, left unguarded
            psi[i] = numerator / (1.0 - eq.g_value(i) * step2 / 12.0);
        }

        Wavefunction { values: psi }
    }
}
