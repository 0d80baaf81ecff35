use spectro::utility::linspace;

use crate::{error::SolverError, potentials::potential::SimplePotential};

/// Uniform displacement grid over `[q_min, q_max]` with `num_steps + 1` points.
/// Immutable once the domain of a solve is fixed.
#[derive(Clone, Debug)]
pub struct Grid {
    q_min: f64,
    q_max: f64,
    num_steps: usize,
}

impl Grid {
    pub fn new(q_min: f64, q_max: f64, num_steps: usize) -> Result<Self, SolverError> {
        if num_steps == 0 {
            return Err(SolverError::EmptyGrid);
        }

        Ok(Self {
            q_min,
            q_max,
            num_steps,
        })
    }

    pub fn symmetric(domain: &Domain, num_steps: usize) -> Result<Self, SolverError> {
        Self::new(-domain.half_width(), domain.half_width(), num_steps)
    }

    pub fn len(&self) -> usize {
        self.num_steps + 1
    }

    pub fn step(&self) -> f64 {
        (self.q_max - self.q_min) / self.num_steps as f64
    }

    pub fn q_min(&self) -> f64 {
        self.q_min
    }

    pub fn q_max(&self) -> f64 {
        self.q_max
    }

    pub fn points(&self) -> Vec<f64> {
        linspace(self.q_min, self.q_max, self.len())
    }

    /// Samples the potential on every grid point.
    pub fn sample(&self, potential: &impl SimplePotential) -> Vec<f64> {
        self.points().iter().map(|&q| potential.value(q)).collect()
    }
}

/// Symmetric displacement range `[-half_width, half_width]`, widened only by
/// the domain-stabilization loop.
#[derive(Clone, Copy, Debug)]
pub struct Domain {
    half_width: f64,
    increment: f64,
}

impl Default for Domain {
    fn default() -> Self {
        Self {
            half_width: 0.5,
            increment: 0.1,
        }
    }
}

impl Domain {
    pub fn new(half_width: f64, increment: f64) -> Self {
        Self {
            half_width,
            increment,
        }
    }

    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    pub fn widen(&mut self) {
        self.half_width += self.increment;
    }
}
