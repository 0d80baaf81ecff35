use spectro::units::{Au, CmInv, Energy, Mass};

use crate::{
    eigensolver::{Spectrum, SpectrumProblemBuilder},
    error::SolverError,
    grid::{Domain, Grid},
    potentials::polynomial_potential::PolynomialPotential,
};

const DEFAULT_MAX_WIDENINGS: usize = 200;

/// Transition-frequency change below which the domain is accepted, in cm^-1.
pub const FREQUENCY_TOLERANCE_CMINV: f64 = 0.1;

/// Spectrum accepted by the stabilization loop, together with the domain it
/// was computed on.
#[derive(Debug, Clone)]
pub struct StabilizedSpectrum {
    pub spectrum: Spectrum,
    pub grid: Grid,
    pub domain: Domain,
    pub transition_frequency: Energy<CmInv>,
}

/// Widens a symmetric displacement domain until the transition frequency
/// between the highest requested state and the ground state stops moving.
///
/// Too narrow a domain clips the wavefunction tails and biases the energies;
/// the physically meaningful domain is found as the fixed point of this loop.
pub struct DomainStabilization {
    pub domain: Domain,
    pub frequency_tolerance: Energy<CmInv>,
    pub max_widenings: usize,
}

impl Default for DomainStabilization {
    fn default() -> Self {
        Self {
            domain: Domain::default(),
            frequency_tolerance: Energy(FREQUENCY_TOLERANCE_CMINV, CmInv),
            max_widenings: DEFAULT_MAX_WIDENINGS,
        }
    }
}

impl DomainStabilization {
    pub fn new(domain: Domain, frequency_tolerance: Energy<CmInv>) -> Self {
        Self {
            domain,
            frequency_tolerance,
            max_widenings: DEFAULT_MAX_WIDENINGS,
        }
    }

    pub fn with_max_widenings(mut self, max_widenings: usize) -> Self {
        self.max_widenings = max_widenings;

        self
    }

    pub fn stabilize(
        &self,
        potential: &PolynomialPotential,
        property: &PolynomialPotential,
        mass: Mass<Au>,
        num_steps: usize,
        num_solutions: usize,
        energy_precision: Energy<Au>,
    ) -> Result<StabilizedSpectrum, SolverError> {
        let mut domain = self.domain;
        let mut frequency_previous = f64::MAX;

        for _ in 0..self.max_widenings {
            let grid = Grid::symmetric(&domain, num_steps)?;
            let potential_values = grid.sample(potential);
            let property_values = grid.sample(property);

            let spectrum = SpectrumProblemBuilder::new(&grid, &potential_values, &property_values)
                .with_mass(mass)
                .with_search(num_solutions, energy_precision)
                .build()
                .solve()?;

            let frequency = spectrum.transition_energy(num_solutions - 1, 0).to(CmInv);

            if (frequency.value() - frequency_previous).abs() < self.frequency_tolerance.value() {
                return Ok(StabilizedSpectrum {
                    spectrum,
                    grid,
                    domain,
                    transition_frequency: frequency,
                });
            }

            frequency_previous = frequency.value();
            domain.widen();
        }

        Err(SolverError::DomainDiverged(self.max_widenings))
    }
}

#[cfg(test)]
mod test {
    use spectro::{
        assert_approx_eq,
        units::{Au, CmInv, Energy, Mass},
        utility::linspace,
    };

    use crate::{
        error::SolverError, fit::polyfit, grid::Domain,
        potentials::polynomial_potential::PolynomialPotential,
        potentials::potential::SimplePotential,
    };

    use super::DomainStabilization;

    fn reference_potential() -> PolynomialPotential {
        PolynomialPotential::new(vec![
            -2.45560869e-01,
            -8.88252151e-03,
            1.24439946e-01,
            1.93259856e-01,
            2.78860663e-01,
            -5.62738650e-05,
            -5.78784571e-08,
        ])
        .unwrap()
    }

    fn reference_property() -> PolynomialPotential {
        PolynomialPotential::new(vec![
            -1.45680171e-14,
            -2.78094078e-16,
            1.62725432e-15,
            -1.99732822e-15,
            3.08772558e-15,
            2.06211298e-15,
            -7.30656049e-15,
        ])
        .unwrap()
    }

    #[test]
    fn test_stabilization() {
        let potential = reference_potential();
        let property = reference_property();

        let stabilized = DomainStabilization::default()
            .stabilize(
                &potential,
                &property,
                Mass(26245.03, Au),
                101,
                3,
                Energy(1e-12, Au),
            )
            .unwrap();

        // the loop always sees at least two spectra before accepting
        assert!(stabilized.domain.half_width() >= 0.6);
        assert_eq!(stabilized.spectrum.energies.len(), 3);
        assert!(stabilized.transition_frequency.value() > 0.0);

        // idempotence: one more widening moves the frequency below tolerance
        let mut wider = stabilized.domain;
        wider.widen();

        let rerun = DomainStabilization::new(wider, Energy(0.1, CmInv))
            .stabilize(
                &potential,
                &property,
                Mass(26245.03, Au),
                101,
                3,
                Energy(1e-12, Au),
            )
            .unwrap();

        assert!(
            (rerun.transition_frequency.value() - stabilized.transition_frequency.value()).abs()
                < 0.1 + 0.1
        );
    }

    #[test]
    fn test_fitted_pipeline() {
        // a table sampled from the reference curves and refit to the same
        // degree reproduces the direct stabilized result
        let xs = linspace(-0.5, 0.5, 13);
        let pot_table: Vec<f64> = xs.iter().map(|&x| reference_potential().value(x)).collect();
        let prop_table: Vec<f64> = xs.iter().map(|&x| reference_property().value(x)).collect();

        let potential =
            PolynomialPotential::new(polyfit(&xs, &pot_table, 6).unwrap()).unwrap();
        let property =
            PolynomialPotential::new(polyfit(&xs, &prop_table, 6).unwrap()).unwrap();

        let fitted = DomainStabilization::default()
            .stabilize(
                &potential,
                &property,
                Mass(26245.03, Au),
                101,
                3,
                Energy(1e-12, Au),
            )
            .unwrap();

        let direct = DomainStabilization::default()
            .stabilize(
                &reference_potential(),
                &reference_property(),
                Mass(26245.03, Au),
                101,
                3,
                Energy(1e-12, Au),
            )
            .unwrap();

        assert_approx_eq!(
            fitted.transition_frequency.value(),
            direct.transition_frequency.value(),
            1e-6
        );
        assert_eq!(fitted.domain.half_width(), direct.domain.half_width());
    }

    #[test]
    fn test_coarse_grid_divergence() {
        // a 22-point grid resolves the initial domain but not the widened
        // ones, the node search drifts downward without locking a state
        let result = DomainStabilization::default().stabilize(
            &reference_potential(),
            &reference_property(),
            Mass(26245.03, Au),
            21,
            3,
            Energy(1e-12, Au),
        );

        assert!(matches!(
            result,
            Err(SolverError::EnergySearchDiverged { .. })
        ));
    }

    #[test]
    fn test_widening_guard() {
        let result = DomainStabilization::default()
            .with_max_widenings(1)
            .stabilize(
                &reference_potential(),
                &reference_property(),
                Mass(26245.03, Au),
                21,
                3,
                Energy(1e-12, Au),
            );

        assert!(result.is_err());
    }

    #[test]
    fn test_harmonic_stabilization() {
        // omega = 0.1 in atomic units, transition 2 omega
        let mass = 100.0;
        let potential = PolynomialPotential::new(vec![0.5 * mass * 0.1 * 0.1, 0.0, 0.0]).unwrap();
        let property = PolynomialPotential::new(vec![0.0]).unwrap();

        let stabilized = DomainStabilization::new(Domain::new(0.5, 0.1), Energy(0.1, CmInv))
            .stabilize(&potential, &property, Mass(mass, Au), 400, 3, Energy(1e-10, Au))
            .unwrap();

        let expected = Energy(2.0 * 0.1, Au).to(CmInv).value();
        assert_approx_eq!(stabilized.transition_frequency.value(), expected, 1e-3);
    }
}
