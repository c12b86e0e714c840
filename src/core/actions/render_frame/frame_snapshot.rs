use crate::core::data::camera::Camera;
use crate::core::dynamics::params::ParameterSet;
use crate::core::dynamics::thresholds::Thresholds;

/// Frozen copy of everything a frame reads.
///
/// Taken once at the frame boundary so input handling can keep mutating the
/// live state while the frame renders.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct FrameSnapshot {
    pub camera: Camera,
    pub params: ParameterSet,
    pub thresholds: Thresholds,
}
