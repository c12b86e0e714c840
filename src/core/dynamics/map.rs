use crate::core::data::complex::Complex;
use crate::core::dynamics::params::ParameterSet;

/// One step of a dynamical system, `z -> f(z; params)`.
pub trait DynamicalMap {
    fn apply(&self, z: Complex, params: &ParameterSet) -> Complex;
}

impl<F> DynamicalMap for F
where
    F: Fn(Complex, &ParameterSet) -> Complex,
{
    #[inline]
    fn apply(&self, z: Complex, params: &ParameterSet) -> Complex {
        self(z, params)
    }
}
