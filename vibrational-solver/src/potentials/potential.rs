/// Trait defining potential and property curve functionality over the
/// displacement coordinate.
pub trait Potential {
    type Space;

    fn value_inplace(&self, q: f64, value: &mut Self::Space);

    fn size(&self) -> usize;
}

pub trait SimplePotential: Potential<Space = f64> {
    fn value(&self, q: f64) -> f64 {
        let mut val = 0.;
        self.value_inplace(q, &mut val);

        val
    }
}

impl<P: Potential<Space = f64>> SimplePotential for P {}
