use log::warn;

use crate::controllers::engine::frame_deltas::FrameDeltas;
use crate::controllers::engine::sliders::{slider_box, slider_screen_position, SliderError};
use crate::core::actions::render_frame::frame_snapshot::FrameSnapshot;
use crate::core::data::camera::Camera;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::point::Point;
use crate::core::dynamics::params::{ParameterSet, SliderId};
use crate::core::dynamics::thresholds::Thresholds;
use crate::core::util::screen_to_plane::screen_to_plane;

/// Fraction of the zoom panned per frame.
const PAN_RATE: f64 = 0.03;
/// Fractional change per frame for zoom and both thresholds.
const SCALE_RATE: f64 = 0.05;
const TURBO_MULTIPLIER: i32 = 5;

/// Live camera, parameters and thresholds of an interactive session.
///
/// Input mutates this between frames; rendering only ever sees a
/// [`FrameSnapshot`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EngineState {
    camera: Camera,
    params: ParameterSet,
    thresholds: Thresholds,
    selected_slider: Option<SliderId>,
}

impl EngineState {
    #[must_use]
    pub fn new(camera: Camera, params: ParameterSet, thresholds: Thresholds) -> Self {
        Self {
            camera,
            params,
            thresholds,
            selected_slider: None,
        }
    }

    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[must_use]
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    #[must_use]
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    #[must_use]
    pub fn selected_slider(&self) -> Option<SliderId> {
        self.selected_slider
    }

    #[must_use]
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            camera: self.camera,
            params: self.params,
            thresholds: self.thresholds,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), PixelRectError> {
        self.camera.resize(width, height)
    }

    /// Applies one frame of input. Panning uses the zoom from before this
    /// frame's zoom change.
    pub fn apply_deltas(&mut self, deltas: &FrameDeltas) {
        let turbo = if deltas.turbo { TURBO_MULTIPLIER } else { 1 };
        let rate = f64::from(turbo);

        let zoom = self.camera.zoom();
        let center = self.camera.center();
        self.camera.set_center(Complex::new(
            center.real + PAN_RATE * rate * zoom * f64::from(deltas.pan_x),
            center.imag + PAN_RATE * rate * zoom * f64::from(deltas.pan_y),
        ));
        self.camera
            .set_zoom(zoom * (1.0 - SCALE_RATE * rate * f64::from(deltas.zoom_steps)));

        self.thresholds
            .adjust_max_iterations(i64::from(turbo) * i64::from(deltas.iteration_steps));

        if let Err(err) = self
            .thresholds
            .scale_infinity(1.0 - SCALE_RATE * rate * f64::from(deltas.infinity_steps))
        {
            warn!("ignoring infinity change: {}", err);
        }
        if let Err(err) = self
            .thresholds
            .scale_zero(1.0 - SCALE_RATE * rate * f64::from(deltas.zero_steps))
        {
            warn!("ignoring zero change: {}", err);
        }
    }

    pub fn slider_screen_position(&self, id: SliderId) -> Result<Point, SliderError> {
        slider_screen_position(&self.params, id, &self.camera)
    }

    pub fn slider_box(&self, id: SliderId) -> Result<PixelRect, SliderError> {
        slider_box(&self.params, id, &self.camera)
    }

    /// Handles of every slider in draw order.
    pub fn slider_boxes(&self) -> impl Iterator<Item = (SliderId, PixelRect)> + '_ {
        self.params
            .slider_ids()
            .filter_map(|id| self.slider_box(id).ok().map(|rect| (id, rect)))
    }

    /// Selects the slider under `point`. Overlapping handles resolve to the
    /// one drawn last.
    pub fn begin_drag(&mut self, point: Point) -> Option<SliderId> {
        self.selected_slider = self
            .slider_boxes()
            .filter(|(_, rect)| rect.contains_point(point))
            .map(|(id, _)| id)
            .last();

        self.selected_slider
    }

    /// Moves the selected slider, if any, to the plane point under `point`.
    pub fn drag_to(&mut self, point: Point) {
        let Some(id) = self.selected_slider else {
            return;
        };

        let target = screen_to_plane(point, &self.camera);
        if let Err(err) = self.params.set_slider_value(id, target) {
            warn!("dropping drag of {}: {}", id, err);
            self.selected_slider = None;
        }
    }

    pub fn end_drag(&mut self) {
        self.selected_slider = None;
    }
}
