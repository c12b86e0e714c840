use crate::core::data::complex::Complex;
use crate::core::dynamics::map::DynamicalMap;
use crate::core::dynamics::params::ParameterSet;

/// `f(z) = z² − p1·tan(p0)`
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct TangentQuadratic;

impl DynamicalMap for TangentQuadratic {
    #[inline]
    fn apply(&self, z: Complex, params: &ParameterSet) -> Complex {
        z * z - params.param(1) * params.param(0).tan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_parameters_give_real_offset() {
        // p1·tan(p0) = (-1.5i)(i·tanh 1) = 1.5·tanh 1
        let params = ParameterSet::default();
        let result = TangentQuadratic.apply(Complex::new(0.0, 0.0), &params);

        assert!((result.real + 1.5 * 1.0_f64.tanh()).abs() < 1e-15);
        assert!(result.imag.abs() < 1e-15);
    }

    #[test]
    fn test_zero_live_input_reduces_to_squaring() {
        let params = ParameterSet::default().with_live_input(Complex::new(0.0, 0.0));
        let result = TangentQuadratic.apply(Complex::new(2.0, 3.0), &params);

        assert_eq!(result, Complex::new(-5.0, 12.0));
    }
}
