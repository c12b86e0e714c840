use crate::core::data::complex::{Complex, ZERO};
use crate::core::dynamics::thresholds::MAX_ORBIT;

/// Fixed-capacity orbit, `points()[0]` is the seed.
#[derive(Debug, Clone, PartialEq)]
pub struct Orbit {
    points: [Complex; MAX_ORBIT],
    len: usize,
}

impl Orbit {
    #[must_use]
    pub fn new(seed: Complex) -> Self {
        let mut points = [ZERO; MAX_ORBIT];
        points[0] = seed;

        Self { points, len: 1 }
    }

    pub(crate) fn push(&mut self, z: Complex) {
        debug_assert!(self.len < MAX_ORBIT, "orbit capacity exceeded");
        self.points[self.len] = z;
        self.len += 1;
    }

    #[must_use]
    pub fn points(&self) -> &[Complex] {
        &self.points[..self.len]
    }

    #[must_use]
    pub fn last(&self) -> Complex {
        self.points[self.len - 1]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}
