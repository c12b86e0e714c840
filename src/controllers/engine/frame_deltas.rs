/// Per-frame input, one axis per adjustable quantity.
///
/// Axis values are normally `-1`, `0` or `1` (one key against its opposite).
/// Positive `zoom_steps`, `infinity_steps` and `zero_steps` shrink their
/// quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameDeltas {
    pub pan_x: i32,
    pub pan_y: i32,
    pub zoom_steps: i32,
    pub iteration_steps: i32,
    pub infinity_steps: i32,
    pub zero_steps: i32,
    pub turbo: bool,
}

impl FrameDeltas {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        Self {
            turbo: self.turbo,
            ..Self::default()
        } == *self
    }
}
