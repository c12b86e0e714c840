use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};

pub const MIN_ZOOM: f64 = 1e-12;
pub const MAX_ZOOM: f64 = 1e12;

const DEFAULT_CENTER: Complex = Complex::new(0.0, 4.0);
const DEFAULT_ZOOM: f64 = 10.0;
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

/// Pannable, zoomable view onto the complex plane.
///
/// `zoom` is the number of plane units spanned by the screen height; the
/// same scale applies horizontally so the aspect ratio is preserved.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    center: Complex,
    zoom: f64,
    viewport: PixelRect,
}

impl Camera {
    pub fn new(center: Complex, zoom: f64, width: u32, height: u32) -> Result<Self, PixelRectError> {
        let mut camera = Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            viewport: PixelRect::from_size(width, height)?,
        };

        camera.set_center(center);
        camera.set_zoom(zoom);

        Ok(camera)
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn viewport(&self) -> PixelRect {
        self.viewport
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.viewport.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.viewport.height()
    }

    /// Non-finite centres are ignored.
    pub fn set_center(&mut self, center: Complex) {
        if center.is_finite() {
            self.center = center;
        }
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), PixelRectError> {
        self.viewport = PixelRect::from_size(width, height)?;
        Ok(())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            viewport: PixelRect::from_size(DEFAULT_WIDTH, DEFAULT_HEIGHT)
                .expect("default viewport is valid"),
        }
    }
}
