use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

/// One row of the ab-initio scan: a displacement with its potential energy
/// and property value.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct SampledStep {
    pub displacement: f64,
    pub pot_energy: f64,
    pub exp_value: f64,
}

/// Input table with its configuration scalars.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InputData {
    pub steps: Vec<SampledStep>,
    pub degree_pot_energy: usize,
    pub degree_exp_value: usize,
    pub num_steps: usize,
    pub num_solutions: usize,
    pub energy_precision_hartree: f64,
    pub reduced_mass_amu: f64,
}

impl InputData {
    pub fn read_file(path: impl AsRef<Path>) -> Result<Self, std::io::Error> {
        let file = File::open(path)?;
        let input: InputData = serde_json::from_reader(BufReader::new(file))?;

        Ok(input)
    }

    pub fn displacements(&self) -> Vec<f64> {
        self.steps.iter().map(|step| step.displacement).collect()
    }

    pub fn pot_energies(&self) -> Vec<f64> {
        self.steps.iter().map(|step| step.pot_energy).collect()
    }

    pub fn exp_values(&self) -> Vec<f64> {
        self.steps.iter().map(|step| step.exp_value).collect()
    }
}

/// Full result record of one stabilized solve.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OutputData {
    pub displacement_range: DisplacementRange,
    pub pot_energy_coefs: Vec<f64>,
    pub exp_value_coefs: Vec<f64>,
    pub pot_energy_coefs_harmonic: Vec<f64>,
    pub energies_hartree: Vec<f64>,
    pub energies_hartree_harmonic: Vec<f64>,
    pub averaged_exp_values_au: Vec<f64>,
    pub transition_frequency_cm1: f64,
    pub qs: Vec<f64>,
    pub psi_squared: Vec<Vec<f64>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct DisplacementRange {
    pub min: f64,
    pub max: f64,
}

/// Rounds every value to the given number of decimals, used to keep the
/// grid and wavefunction tables in the output record compact.
pub fn round_to(values: &[f64], decimals: i32) -> Vec<f64> {
    let scale = 10.0_f64.powi(decimals);

    values.iter().map(|v| (v * scale).round() / scale).collect()
}
