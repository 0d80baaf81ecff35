use super::{Au, Unit};

pub trait EnergyUnit: Unit {}

/// Struct for representing energy unit values
/// # Examples
/// ```
/// use spectro::units::{Au, energy_units::{Energy, CmInv}};
/// let energy_cm_inv = Energy(1.0, CmInv);
/// let energy_hartree = energy_cm_inv.to_au();
/// let energy = energy_cm_inv.to(Au);
/// assert_eq!(energy_hartree, energy.value());
#[derive(Debug, Copy, Clone)]
pub struct Energy<U: EnergyUnit>(pub f64, pub U);

impl<U: EnergyUnit> Energy<U> {
    pub fn to_au(&self) -> f64 {
        self.1.to_au(self.0)
    }

    pub fn to<V: EnergyUnit>(&self, unit: V) -> Energy<V> {
        Energy(self.1.to_au(self.0) / unit.to_au(1.0), unit)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn unit(&self) -> U {
        self.1
    }
}

impl EnergyUnit for Au {}

#[derive(Debug, Copy, Clone)]
pub struct CmInv;

impl Unit for CmInv {
    const TO_AU_MUL: f64 = 1.0 / 2.194746313705e5;
}
impl EnergyUnit for CmInv {}

#[derive(Debug, Copy, Clone)]
pub struct Hz;

impl Unit for Hz {
    const TO_AU_MUL: f64 = 1.0 / 6.579683920721e15;
}
impl EnergyUnit for Hz {}
