use crate::core::data::complex::{Complex, ZERO};
use std::fmt;
use thiserror::Error;

/// Total parameter slots, including the live screen input at index 0.
pub const MAX_PARAMS: usize = 10;

/// Slot overwritten per pixel with the plane point under the pixel.
pub const LIVE_INPUT_INDEX: usize = 0;

const MAX_FREE_PARAMS: usize = MAX_PARAMS - 1;

/// A user-editable value. The live input slot has no slider.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SliderId {
    /// Free parameter at the given slot, always `>= 1`.
    Param(usize),
    Seed,
}

impl fmt::Display for SliderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Param(index) => write!(f, "p{}", index),
            Self::Seed => f.write_str("seed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterSetError {
    #[error("at most {max} free parameters are supported, got {count}")]
    TooManyParams { count: usize, max: usize },
    #[error("no slider for {0}")]
    UnknownSlider(SliderId),
    #[error("slider values must be finite, got {0}")]
    NonFinite(Complex),
}

/// Parameters of one instance of the dynamical system.
///
/// Unset free slots read as zero.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ParameterSet {
    live_input: Complex,
    free: [Complex; MAX_FREE_PARAMS],
    free_count: usize,
    seed: Complex,
}

impl ParameterSet {
    pub fn new(free_params: &[Complex], seed: Complex) -> Result<Self, ParameterSetError> {
        if free_params.len() > MAX_FREE_PARAMS {
            return Err(ParameterSetError::TooManyParams {
                count: free_params.len(),
                max: MAX_FREE_PARAMS,
            });
        }

        if let Some(&bad) = free_params.iter().chain([&seed]).find(|z| !z.is_finite()) {
            return Err(ParameterSetError::NonFinite(bad));
        }

        let mut free = [ZERO; MAX_FREE_PARAMS];
        free[..free_params.len()].copy_from_slice(free_params);

        Ok(Self {
            live_input: ZERO,
            free,
            free_count: free_params.len(),
            seed,
        })
    }

    /// Value of slot `index`; slot 0 is the live input.
    #[must_use]
    pub fn param(&self, index: usize) -> Complex {
        match index {
            LIVE_INPUT_INDEX => self.live_input,
            i if i <= MAX_FREE_PARAMS => self.free[i - 1],
            _ => ZERO,
        }
    }

    #[must_use]
    pub fn live_input(&self) -> Complex {
        self.live_input
    }

    #[must_use]
    pub fn with_live_input(&self, live_input: Complex) -> Self {
        Self {
            live_input,
            ..*self
        }
    }

    #[must_use]
    pub fn free_params(&self) -> &[Complex] {
        &self.free[..self.free_count]
    }

    #[must_use]
    pub fn seed(&self) -> Complex {
        self.seed
    }

    /// Sliders in draw order: free parameters first, then the seed.
    pub fn slider_ids(&self) -> impl Iterator<Item = SliderId> + use<> {
        (1..=self.free_count)
            .map(SliderId::Param)
            .chain(std::iter::once(SliderId::Seed))
    }

    fn check_slider(&self, id: SliderId) -> Result<(), ParameterSetError> {
        match id {
            SliderId::Param(index) if index == LIVE_INPUT_INDEX || index > self.free_count => {
                Err(ParameterSetError::UnknownSlider(id))
            }
            _ => Ok(()),
        }
    }

    pub fn slider_value(&self, id: SliderId) -> Result<Complex, ParameterSetError> {
        self.check_slider(id)?;

        Ok(match id {
            SliderId::Param(index) => self.param(index),
            SliderId::Seed => self.seed,
        })
    }

    pub fn set_slider_value(&mut self, id: SliderId, value: Complex) -> Result<(), ParameterSetError> {
        self.check_slider(id)?;

        if !value.is_finite() {
            return Err(ParameterSetError::NonFinite(value));
        }

        match id {
            SliderId::Param(index) => self.free[index - 1] = value,
            SliderId::Seed => self.seed = value,
        }

        Ok(())
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        let mut params = Self::new(&[Complex::new(0.0, -1.5), Complex::new(-1.0, 0.0)], ZERO)
            .expect("default parameters are valid");
        params.live_input = Complex::new(0.0, 1.0);
        params
    }
}
