pub mod energy_units;
pub mod mass_units;

pub use energy_units::{CmInv, Energy, EnergyUnit, Hz};
pub use mass_units::{Dalton, Mass, MassUnit};

/// Trait for units that can be converted to atomic units.
pub trait Unit: Copy + Clone {
    const TO_AU_MUL: f64;

    fn to_au(&self, value: f64) -> f64 {
        value * Self::TO_AU_MUL
    }
}

#[derive(Debug, Copy, Clone)]
pub struct Au;

impl Unit for Au {
    const TO_AU_MUL: f64 = 1.0;
}
