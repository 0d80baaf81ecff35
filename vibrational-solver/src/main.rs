use std::{env, error::Error, process::ExitCode};

use spectro::units::{Au, Dalton, Energy, Mass};
use vibrational_solver::{
    eigensolver::SpectrumProblemBuilder,
    fit::{harmonic_window, polyfit, rescale_to_derivatives, shift_to_floor},
    io::{DisplacementRange, InputData, OutputData, round_to},
    potentials::polynomial_potential::PolynomialPotential,
    stabilization::DomainStabilization,
};

fn main() -> ExitCode {
    let Some(input_file) = env::args().nth(1) else {
        eprintln!("usage: vibrational-solver <input.json>");
        return ExitCode::FAILURE;
    };

    match run(&input_file) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("vibrational-solver: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(input_file: &str) -> Result<(), Box<dyn Error>> {
    let input = InputData::read_file(input_file)?;

    let displacements = input.displacements();
    let mut pot_energies = input.pot_energies();
    let exp_values = input.exp_values();

    // the eigensolver expects the potential minimum at zero energy
    shift_to_floor(&mut pot_energies);

    let potential =
        PolynomialPotential::new(polyfit(&displacements, &pot_energies, input.degree_pot_energy)?)?;
    let property =
        PolynomialPotential::new(polyfit(&displacements, &exp_values, input.degree_exp_value)?)?;

    let mass = Mass(input.reduced_mass_amu, Dalton).to(Au);
    let energy_precision = Energy(input.energy_precision_hartree, Au);

    let stabilized = DomainStabilization::default().stabilize(
        &potential,
        &property,
        mass,
        input.num_steps,
        input.num_solutions,
        energy_precision,
    )?;

    // harmonic sanity fit through the points around the potential minimum,
    // solved over the stabilized domain
    let (harmonic_xs, harmonic_ys) = harmonic_window(&displacements, &pot_energies)?;
    let potential_harmonic = PolynomialPotential::new(polyfit(&harmonic_xs, &harmonic_ys, 2)?)?;

    let harmonic_values = stabilized.grid.sample(&potential_harmonic);
    let property_values = stabilized.grid.sample(&property);

    let spectrum_harmonic =
        SpectrumProblemBuilder::new(&stabilized.grid, &harmonic_values, &property_values)
            .with_mass(mass)
            .with_search(input.num_solutions, energy_precision)
            .build()
            .solve()?;

    let mut pot_energy_coefs = potential.coefs().to_vec();
    let mut exp_value_coefs = property.coefs().to_vec();
    rescale_to_derivatives(&mut pot_energy_coefs);
    rescale_to_derivatives(&mut exp_value_coefs);

    let output = OutputData {
        displacement_range: DisplacementRange {
            min: stabilized.grid.q_min(),
            max: stabilized.grid.q_max(),
        },
        pot_energy_coefs,
        exp_value_coefs,
        pot_energy_coefs_harmonic: potential_harmonic.coefs().to_vec(),
        energies_hartree: stabilized.spectrum.energies.clone(),
        energies_hartree_harmonic: spectrum_harmonic.energies,
        averaged_exp_values_au: stabilized.spectrum.expectation_values.clone(),
        transition_frequency_cm1: stabilized.transition_frequency.value(),
        qs: round_to(&stabilized.grid.points(), 3),
        psi_squared: stabilized
            .spectrum
            .psi_squared
            .iter()
            .map(|row| round_to(row, 5))
            .collect(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
