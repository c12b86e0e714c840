use crate::core::data::complex::Complex;
use crate::core::dynamics::fatou::FatouResult;
use crate::core::dynamics::map::DynamicalMap;
use crate::core::dynamics::orbit::Orbit;
use crate::core::dynamics::params::ParameterSet;
use crate::core::dynamics::thresholds::Thresholds;

/// Iterates a [`DynamicalMap`] and classifies the resulting orbit.
///
/// Stateless between calls: the classification travels in the returned
/// [`FatouResult`], so one system can be shared across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FatouSystem<M> {
    map: M,
}

impl<M: DynamicalMap> FatouSystem<M> {
    pub const fn new(map: M) -> Self {
        Self { map }
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    #[must_use]
    pub fn iterate(&self, seed: Complex, params: &ParameterSet, thresholds: &Thresholds) -> FatouResult {
        let mut orbit = Orbit::new(seed);
        self.classify(&mut orbit, params, thresholds)
    }

    /// Like [`FatouSystem::iterate`] but also hands back the orbit.
    #[must_use]
    pub fn trace(
        &self,
        seed: Complex,
        params: &ParameterSet,
        thresholds: &Thresholds,
    ) -> (FatouResult, Orbit) {
        let mut orbit = Orbit::new(seed);
        let result = self.classify(&mut orbit, params, thresholds);
        (result, orbit)
    }

    fn classify(&self, orbit: &mut Orbit, params: &ParameterSet, thresholds: &Thresholds) -> FatouResult {
        let max_iterations = thresholds.max_iterations();
        let infinity = thresholds.infinity();
        let zero = thresholds.zero();

        let mut max_dist = zero;
        let mut min_dist = infinity;

        for i in 0..max_iterations {
            let current = orbit.last();
            let next = self.map.apply(current, params);
            orbit.push(next);

            let dist = next.magnitude_squared();
            if dist.is_nan() {
                return FatouResult::DEGENERATE;
            }
            max_dist = max_dist.max(dist);

            if dist > infinity {
                return escape_time(current, next, i, thresholds).unwrap_or(FatouResult::DEGENERATE);
            }
        }

        let points = orbit.points();
        let last = points[max_iterations];

        // Scan backwards from the most recent point, the first hit wins.
        for i in 0..max_iterations {
            let dist = (last - points[max_iterations - 1 - i]).magnitude_squared();
            min_dist = min_dist.min(dist);

            if dist < zero {
                return FatouResult::convergent(dist / zero, i);
            }
        }

        FatouResult::indeterminate((max_dist / infinity).max(zero / min_dist))
    }
}

/// Smooth escape index for the step `previous -> next` at iteration `i`.
///
/// Solves `a·t² + b·t + c = 0` for the crossing time `t` and returns
/// `(t + i) / max_iterations`, or `None` when there is no usable root.
fn escape_time(
    previous: Complex,
    next: Complex,
    i: usize,
    thresholds: &Thresholds,
) -> Option<FatouResult> {
    let c = previous.magnitude_squared() - thresholds.infinity();

    // Only the seed can already lie beyond the threshold.
    let t = if c >= 0.0 {
        0.0
    } else {
        let a = (next - previous).magnitude_squared();
        let b = 2.0 * (next * previous.conj()).real;
        let discriminant = b * b - 4.0 * a * c;

        if a <= f64::EPSILON || discriminant.is_nan() || discriminant < 0.0 {
            return None;
        }

        let t = (-b + discriminant.sqrt()) / (2.0 * a);
        if !t.is_finite() {
            return None;
        }

        t.clamp(0.0, 1.0)
    };

    Some(FatouResult::divergent(
        (t + i as f64) / thresholds.max_iterations() as f64,
    ))
}
