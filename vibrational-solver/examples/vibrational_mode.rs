use spectro::units::{Au, CmInv, Energy, Mass};
use vibrational_solver::{
    potentials::polynomial_potential::PolynomialPotential,
    stabilization::DomainStabilization,
    utility::{save_data, save_serialize},
};

fn main() {
    let potential = PolynomialPotential::new(vec![
        -2.45560869e-01,
        -8.88252151e-03,
        1.24439946e-01,
        1.93259856e-01,
        2.78860663e-01,
        -5.62738650e-05,
        -5.78784571e-08,
    ])
    .unwrap();

    let property = PolynomialPotential::new(vec![
        -1.45680171e-14,
        -2.78094078e-16,
        1.62725432e-15,
        -1.99732822e-15,
        3.08772558e-15,
        2.06211298e-15,
        -7.30656049e-15,
    ])
    .unwrap();

    let stabilized = DomainStabilization::default()
        .stabilize(
            &potential,
            &property,
            Mass(26245.03, Au),
            21,
            3,
            Energy(1e-12, Au),
        )
        .unwrap();

    println!(
        "stabilized domain half width: {} bohr",
        stabilized.domain.half_width()
    );
    println!(
        "transition frequency: {:.2} cm^-1",
        stabilized.transition_frequency.value()
    );
    for (state, energy) in stabilized.spectrum.energies.iter().enumerate() {
        let energy_cm_inv = Energy(*energy, Au).to(CmInv);
        println!(
            "state {}: {:.10e} hartree ({:.2} cm^-1)",
            state,
            energy,
            energy_cm_inv.value()
        );
    }

    let qs = stabilized.grid.points();
    let potential_values = stabilized.grid.sample(&potential);

    let mut data = vec![qs, potential_values];
    data.extend(stabilized.spectrum.psi_squared.iter().cloned());

    let header = "displacement\tpotential\tpsi squared per state";
    save_data("vibrational_mode/wavefunctions", header, &data).unwrap();
    save_serialize("vibrational_mode/spectrum", &stabilized.spectrum).unwrap();
}
