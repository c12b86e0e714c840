use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::dynamics::colour_mapping::palette::FatouPalette;
use crate::core::dynamics::fatou::FatouResult;

/// Colours a [`FatouResult`] with the palette of its classification.
#[derive(Debug, Clone, Copy, Default)]
pub struct FatouColourMap;

impl FatouColourMap {
    /// Shown for degenerate or non-finite results.
    pub const NEUTRAL: Colour = Colour::BLACK;
}

impl ColourMap<FatouResult> for FatouColourMap {
    fn map(&self, result: FatouResult) -> Colour {
        if !result.value.is_finite() {
            return Self::NEUTRAL;
        }

        FatouPalette::for_kind(result.kind).colour(result.value, result.period)
    }

    fn display_name(&self) -> &str {
        "Fatou classification"
    }
}
