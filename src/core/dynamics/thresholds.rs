use thiserror::Error;

/// Capacity of an orbit; `max_iterations` is always below it.
pub const MAX_ORBIT: usize = 100;

pub const MIN_THRESHOLD: f64 = 1e-12;
pub const MAX_THRESHOLD: f64 = 1e300;

const DEFAULT_MAX_ITERATIONS: usize = 50;
const DEFAULT_INFINITY: f64 = 100.0;
const DEFAULT_ZERO: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThresholdError {
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
}

/// Iteration cap and the escape/convergence thresholds.
///
/// Every setter clamps, so a `Thresholds` value is always safe to iterate
/// with: `1 <= max_iterations < MAX_ORBIT` and both distances are finite and
/// positive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Thresholds {
    max_iterations: usize,
    infinity: f64,
    zero: f64,
}

fn clamp_distance(name: &'static str, value: f64) -> Result<f64, ThresholdError> {
    if !value.is_finite() {
        return Err(ThresholdError::NonFinite { name, value });
    }

    Ok(value.clamp(MIN_THRESHOLD, MAX_THRESHOLD))
}

impl Thresholds {
    pub fn new(max_iterations: i64, infinity: f64, zero: f64) -> Result<Self, ThresholdError> {
        let mut thresholds = Self::default();

        thresholds.set_max_iterations(max_iterations);
        thresholds.set_infinity(infinity)?;
        thresholds.set_zero(zero)?;

        Ok(thresholds)
    }

    #[must_use]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Squared escape radius.
    #[must_use]
    pub fn infinity(&self) -> f64 {
        self.infinity
    }

    /// Squared convergence distance.
    #[must_use]
    pub fn zero(&self) -> f64 {
        self.zero
    }

    /// Clamps to `[1, MAX_ORBIT - 1]` and returns the applied value.
    pub fn set_max_iterations(&mut self, max_iterations: i64) -> usize {
        self.max_iterations = max_iterations.clamp(1, MAX_ORBIT as i64 - 1) as usize;
        self.max_iterations
    }

    pub fn adjust_max_iterations(&mut self, delta: i64) -> usize {
        self.set_max_iterations((self.max_iterations as i64).saturating_add(delta))
    }

    pub fn set_infinity(&mut self, infinity: f64) -> Result<(), ThresholdError> {
        self.infinity = clamp_distance("infinity", infinity)?;
        Ok(())
    }

    pub fn set_zero(&mut self, zero: f64) -> Result<(), ThresholdError> {
        self.zero = clamp_distance("zero", zero)?;
        Ok(())
    }

    pub fn scale_infinity(&mut self, factor: f64) -> Result<(), ThresholdError> {
        self.set_infinity(self.infinity * factor)
    }

    pub fn scale_zero(&mut self, factor: f64) -> Result<(), ThresholdError> {
        self.set_zero(self.zero * factor)
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            infinity: DEFAULT_INFINITY,
            zero: DEFAULT_ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let thresholds = Thresholds::default();

        assert_eq!(thresholds.max_iterations(), 50);
        assert_eq!(thresholds.infinity(), 100.0);
        assert_eq!(thresholds.zero(), 0.01);
    }

    #[test]
    fn test_max_iterations_is_clamped_to_orbit_capacity() {
        let mut thresholds = Thresholds::default();

        assert_eq!(thresholds.set_max_iterations(0), 1);
        assert_eq!(thresholds.set_max_iterations(-40), 1);
        assert_eq!(thresholds.set_max_iterations(MAX_ORBIT as i64), MAX_ORBIT - 1);
        assert_eq!(thresholds.set_max_iterations(i64::MAX), MAX_ORBIT - 1);
    }

    #[test]
    fn test_adjust_max_iterations_saturates() {
        let mut thresholds = Thresholds::default();

        assert_eq!(thresholds.adjust_max_iterations(5), 55);
        assert_eq!(thresholds.adjust_max_iterations(-1000), 1);
        assert_eq!(thresholds.adjust_max_iterations(i64::MAX), MAX_ORBIT - 1);
    }

    #[test]
    fn test_distances_are_clamped_positive() {
        let thresholds = Thresholds::new(10, -5.0, 0.0).unwrap();

        assert_eq!(thresholds.infinity(), MIN_THRESHOLD);
        assert_eq!(thresholds.zero(), MIN_THRESHOLD);
    }

    #[test]
    fn test_non_finite_distance_is_rejected_and_previous_value_kept() {
        let mut thresholds = Thresholds::default();

        assert_eq!(
            thresholds.set_zero(f64::INFINITY),
            Err(ThresholdError::NonFinite {
                name: "zero",
                value: f64::INFINITY
            })
        );
        assert!(thresholds.set_infinity(f64::NAN).is_err());
        assert_eq!(thresholds, Thresholds::default());
    }

    #[test]
    fn test_scale_thresholds() {
        let mut thresholds = Thresholds::default();

        thresholds.scale_infinity(0.5).unwrap();
        thresholds.scale_zero(2.0).unwrap();

        assert_eq!(thresholds.infinity(), 50.0);
        assert_eq!(thresholds.zero(), 0.02);
    }
}
