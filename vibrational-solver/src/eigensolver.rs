use serde::{Deserialize, Serialize};
use spectro::units::{Au, Energy, EnergyUnit, Mass, MassUnit};

use crate::{
    error::SolverError, grid::Grid, numerovs::ShootingNumerov, propagator::Equation,
};

/// Trial energy opening each spectrum solve, in hartree.
pub const ENERGY_GUESS_START: f64 = 1e-4;
/// Coarse energy step resumed after locking a state, in hartree.
pub const ENERGY_STEP_START: f64 = 1e-4;

const DEFAULT_MAX_ITERATIONS: usize = 200_000;

pub struct SpectrumProblemBuilder<'a> {
    grid: Option<&'a Grid>,
    potential_values: Option<&'a [f64]>,
    property_values: Option<&'a [f64]>,

    mass: f64,
    num_solutions: usize,
    energy_precision: f64,
    max_iterations: usize,
}

impl<'a> Default for SpectrumProblemBuilder<'a> {
    fn default() -> Self {
        Self {
            grid: None,
            potential_values: None,
            property_values: None,

            mass: 0.0,
            num_solutions: 0,
            energy_precision: 0.0,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl<'a> SpectrumProblemBuilder<'a> {
    pub fn new(grid: &'a Grid, potential_values: &'a [f64], property_values: &'a [f64]) -> Self {
        let mut problem = SpectrumProblemBuilder::default();

        problem.grid = Some(grid);
        problem.potential_values = Some(potential_values);
        problem.property_values = Some(property_values);

        problem
    }

    pub fn with_mass(mut self, mass: Mass<impl MassUnit>) -> Self {
        self.mass = mass.to_au();

        self
    }

    pub fn with_search(
        mut self,
        num_solutions: usize,
        energy_precision: Energy<impl EnergyUnit>,
    ) -> Self {
        self.num_solutions = num_solutions;
        self.energy_precision = energy_precision.to_au();

        self
    }

    /// Caps the otherwise unbounded energy search, surfaced as
    /// [`SolverError::EnergySearchDiverged`] when exceeded.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;

        self
    }

    pub fn build(self) -> SpectrumProblem<'a> {
        let grid = self.grid.expect("Did not found grid in SpectrumProblemBuilder");
        let potential_values = self
            .potential_values
            .expect("Did not found potential values in SpectrumProblemBuilder");
        let property_values = self
            .property_values
            .expect("Did not found property values in SpectrumProblemBuilder");

        SpectrumProblem {
            grid,
            potential_values,
            property_values,
            mass: self.mass,
            num_solutions: self.num_solutions,
            energy_precision: self.energy_precision,
            max_iterations: self.max_iterations,
        }
    }
}

/// One full spectrum solve over a fixed grid: locates the lowest
/// `num_solutions` bound states in increasing node-count order with a
/// node-counting, step-halving shooting search.
pub struct SpectrumProblem<'a> {
    grid: &'a Grid,
    potential_values: &'a [f64],
    property_values: &'a [f64],

    mass: f64,
    num_solutions: usize,
    energy_precision: f64,
    max_iterations: usize,
}

impl SpectrumProblem<'_> {
    fn validate(&self) -> Result<(), SolverError> {
        if self.num_solutions == 0 {
            return Err(SolverError::NoSolutionsRequested);
        }
        if self.energy_precision <= 0.0 {
            return Err(SolverError::BadPrecision(self.energy_precision));
        }
        if self.mass <= 0.0 {
            return Err(SolverError::BadMass(self.mass));
        }

        SolverError::check_lengths(self.potential_values, self.property_values)?;
        if self.potential_values.len() != self.grid.len() {
            return Err(SolverError::MismatchedTable(
                self.potential_values.len(),
                self.grid.len(),
            ));
        }

        Ok(())
    }

    /// Runs the eigenvalue search until `num_solutions` states are locked.
    ///
    /// The trial energy climbs from [`ENERGY_GUESS_START`]; every time the
    /// node count crosses the next target the step flips sign and shrinks
    /// tenfold, bracketing the eigenvalue geometrically until the step drops
    /// below the requested precision.
    pub fn solve(&self) -> Result<Spectrum, SolverError> {
        self.validate()?;

        let n = self.grid.len();
        let mut energies = vec![0.0; self.num_solutions];
        let mut psi_squared = vec![vec![0.0; n]; self.num_solutions];
        let mut expectation_values = vec![0.0; self.num_solutions];

        let mut search = EnergySearch::new();
        let mut iterations = 0;

        while search.solutions_found < self.num_solutions {
            iterations += 1;
            if iterations > self.max_iterations {
                return Err(SolverError::EnergySearchDiverged {
                    max_iterations: self.max_iterations,
                    found: search.solutions_found,
                    requested: self.num_solutions,
                });
            }

            let eq = Equation::new(
                self.potential_values,
                search.energy_guess,
                self.mass,
                self.grid.step(),
            );
            let wave = ShootingNumerov::new(eq).propagate().finish()?;

            if search.energy_step.abs() < self.energy_precision
                && wave.nodes > search.solutions_found
            {
                // a trial energy jumping past two thresholds at once leaves
                // a gap at the skipped index
                let state = wave.nodes - 1;

                energies[state] = search.energy_guess;
                psi_squared[state] = wave.squared();
                expectation_values[state] = wave.expectation_value(self.property_values);

                search.accept();
            }

            search.adapt(wave.nodes);
            search.advance();
        }

        Ok(Spectrum {
            energies,
            psi_squared,
            expectation_values,
        })
    }
}

/// Mutable search state owned by one eigenvalue search invocation.
#[derive(Clone, Debug)]
struct EnergySearch {
    energy_guess: f64,
    energy_step: f64,
    solutions_found: usize,
}

impl EnergySearch {
    fn new() -> Self {
        Self {
            energy_guess: ENERGY_GUESS_START,
            energy_step: ENERGY_STEP_START,
            solutions_found: 0,
        }
    }

    fn accept(&mut self) {
        self.energy_step = ENERGY_STEP_START;
        self.solutions_found += 1;
    }

    fn adapt(&mut self, nodes: usize) {
        if nodes > self.solutions_found {
            if self.energy_step > 0.0 {
                self.energy_step /= -10.0;
            }
        } else if self.energy_step < 0.0 {
            self.energy_step /= -10.0;
        }
    }

    fn advance(&mut self) {
        self.energy_guess += self.energy_step;
    }
}

/// Bound states of one solve, ordered by increasing node count.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Spectrum {
    pub energies: Vec<f64>,
    pub psi_squared: Vec<Vec<f64>>,
    pub expectation_values: Vec<f64>,
}

impl Spectrum {
    /// Energy difference between two states, ground state first.
    pub fn transition_energy(&self, upper: usize, lower: usize) -> Energy<Au> {
        Energy(self.energies[upper] - self.energies[lower], Au)
    }
}
