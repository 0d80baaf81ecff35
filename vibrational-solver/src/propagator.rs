use crate::error::SolverError;

/// Seed value breaking the trivial zero solution of the recursion.
pub const PSI_SEED: f64 = 1e-6;

/// Radial equation `psi'' = g(q) psi` with `g = 2 mu (V - E)`, evaluated on
/// the sampled potential values of one grid.
#[derive(Clone, Debug)]
pub struct Equation<'a> {
    pub potential_values: &'a [f64],
    pub energy: f64,
    pub mass: f64,
    pub step: f64,
}

impl<'a> Equation<'a> {
    pub fn new(potential_values: &'a [f64], energy: f64, mass: f64, step: f64) -> Self {
        Self {
            potential_values,
            energy,
            mass,
            step,
        }
    }

    pub fn g_value(&self, i: usize) -> f64 {
        2.0 * self.mass * (self.potential_values[i] - self.energy)
    }

    pub fn len(&self) -> usize {
        self.potential_values.len()
    }
}

/// Raw wavefunction produced by one outward propagation, before cleanup.
#[derive(Clone, Debug, Default)]
pub struct Wavefunction {
    pub values: Vec<f64>,
}

impl Wavefunction {
    /// Truncates the numerical leftover beyond the last node and normalizes
    /// to unit norm.
    ///
    /// Outward integration diverges past the last physically meaningful zero
    /// crossing, so everything strictly after it is zeroed before the norm
    /// is taken.
    pub fn finish(mut self) -> Result<FinishedWave, SolverError> {
        let n = self.values.len();

        let mut nodes = 0;
        let mut i_save = n;
        for i in 1..n {
            if self.values[i - 1] != 0.0 && self.values[i] / self.values[i - 1] < 0.0 {
                nodes += 1;
                i_save = i;
            }
        }

        if i_save + 1 < n {
            for value in &mut self.values[i_save + 1..] {
                *value = 0.0;
            }
        }

        let norm: f64 = self.values.iter().map(|psi| psi * psi).sum();
        if norm == 0.0 {
            return Err(SolverError::DegenerateWavefunction);
        }

        let norm = norm.sqrt();
        for value in &mut self.values {
            *value /= norm;
        }

        Ok(FinishedWave {
            values: self.values,
            nodes,
        })
    }
}

/// Truncated, unit-norm wavefunction together with its node count.
#[derive(Clone, Debug)]
pub struct FinishedWave {
    pub values: Vec<f64>,
    pub nodes: usize,
}

impl FinishedWave {
    pub fn squared(&self) -> Vec<f64> {
        self.values.iter().map(|psi| psi * psi).collect()
    }

    /// Discrete expectation value of a property sampled over the same grid.
    pub fn expectation_value(&self, property_values: &[f64]) -> f64 {
        self.values
            .iter()
            .zip(property_values)
            .map(|(psi, prop)| psi * prop * psi)
            .sum()
    }
}

#[cfg(test)]
mod test {
    use spectro::assert_approx_eq;

    use super::{Equation, Wavefunction};

    #[test]
    fn test_equation() {
        let potential_values = vec![0.5, 0.2, 0.1, 0.2, 0.5];
        let eq = Equation::new(&potential_values, 0.1, 100.0, 0.25);

        assert_eq!(eq.len(), 5);
        assert_approx_eq!(eq.g_value(0), 2.0 * 100.0 * 0.4, 1e-12);
        assert_eq!(eq.g_value(2), 0.0);
        assert!(eq.g_value(1) > 0.0);
    }

    #[test]
    fn test_node_counting() {
        let wave = Wavefunction {
            values: vec![0.0, 1.0, -2.0, 1.0, 3.0],
        };
        let finished = wave.finish().unwrap();

        assert_eq!(finished.nodes, 2);
    }

    #[test]
    fn test_truncation() {
        // last sign change at index 2, the tail is numerical leftover
        let wave = Wavefunction {
            values: vec![0.0, 1.0, -1.0, -2.0, -50.0e3],
        };
        let finished = wave.finish().unwrap();

        assert_eq!(finished.nodes, 1);
        assert_eq!(finished.values[3], 0.0);
        assert_eq!(finished.values[4], 0.0);
    }

    #[test]
    fn test_normalization() {
        let wave = Wavefunction {
            values: vec![0.0, 3.0, 4.0],
        };
        let finished = wave.finish().unwrap();

        let norm: f64 = finished.values.iter().map(|psi| psi * psi).sum();
        assert_approx_eq!(norm, 1.0, 1e-14);
        assert_approx_eq!(finished.values[1], 0.6, 1e-14);
        assert_approx_eq!(finished.values[2], 0.8, 1e-14);
    }

    #[test]
    fn test_degenerate_wave() {
        let wave = Wavefunction {
            values: vec![0.0; 8],
        };

        assert!(wave.finish().is_err());
    }

    #[test]
    fn test_expectation_value() {
        let wave = Wavefunction {
            values: vec![0.0, 3.0, 4.0],
        };
        let finished = wave.finish().unwrap();

        let property_values = vec![1.0, 2.0, -1.0];
        // 0.36 * 2 - 0.64
        assert_approx_eq!(finished.expectation_value(&property_values), 0.08, 1e-12);
    }
}
