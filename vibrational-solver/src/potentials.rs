pub mod polynomial_potential;
pub mod potential;
