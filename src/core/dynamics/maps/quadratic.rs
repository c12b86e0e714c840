use crate::core::data::complex::Complex;
use crate::core::dynamics::map::DynamicalMap;
use crate::core::dynamics::params::ParameterSet;

/// `f(z) = z² + p0`. With a zero seed this renders the Mandelbrot set.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Quadratic;

impl DynamicalMap for Quadratic {
    #[inline]
    fn apply(&self, z: Complex, params: &ParameterSet) -> Complex {
        z * z + params.live_input()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adds_live_input() {
        let params = ParameterSet::default().with_live_input(Complex::new(-1.0, 0.5));
        let result = Quadratic.apply(Complex::new(0.0, 1.0), &params);

        assert_eq!(result, Complex::new(-2.0, 0.5));
    }
}
