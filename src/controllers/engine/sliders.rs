use crate::core::data::camera::Camera;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::point::Point;
use crate::core::dynamics::params::{ParameterSet, ParameterSetError, SliderId};
use crate::core::util::screen_to_plane::plane_to_screen;
use thiserror::Error;

/// Half the side of a slider handle in pixels.
pub const SLIDER_RADIUS: i32 = 5;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliderError {
    #[error(transparent)]
    Params(#[from] ParameterSetError),
    #[error(transparent)]
    PixelRect(#[from] PixelRectError),
}

pub fn slider_screen_position(
    params: &ParameterSet,
    id: SliderId,
    camera: &Camera,
) -> Result<Point, SliderError> {
    Ok(plane_to_screen(params.slider_value(id)?, camera))
}

/// Handle of a slider, `2 · SLIDER_RADIUS` pixels square with the slider
/// position one pixel right and below the middle.
pub fn slider_box(params: &ParameterSet, id: SliderId, camera: &Camera) -> Result<PixelRect, SliderError> {
    let Point { x, y } = slider_screen_position(params, id, camera)?;

    Ok(PixelRect::new(
        Point {
            x: x.saturating_sub(SLIDER_RADIUS),
            y: y.saturating_sub(SLIDER_RADIUS),
        },
        Point {
            x: x.saturating_add(SLIDER_RADIUS - 1),
            y: y.saturating_add(SLIDER_RADIUS - 1),
        },
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    #[test]
    fn test_default_slider_positions() {
        let params = ParameterSet::default();
        let camera = Camera::default();

        assert_eq!(
            slider_screen_position(&params, SliderId::Param(1), &camera),
            Ok(Point { x: 400, y: -30 })
        );
        assert_eq!(
            slider_screen_position(&params, SliderId::Param(2), &camera),
            Ok(Point { x: 340, y: 60 })
        );
        assert_eq!(
            slider_screen_position(&params, SliderId::Seed, &camera),
            Ok(Point { x: 400, y: 60 })
        );
    }

    #[test]
    fn test_slider_box_is_ten_pixels_square() {
        let params = ParameterSet::default();
        let slider = slider_box(&params, SliderId::Seed, &Camera::default()).unwrap();

        assert_eq!(slider.top_left(), Point { x: 395, y: 55 });
        assert_eq!(slider.bottom_right(), Point { x: 404, y: 64 });
        assert_eq!((slider.width(), slider.height()), (10, 10));
    }

    #[test]
    fn test_slider_box_saturates_far_off_screen() {
        let params = ParameterSet::new(&[Complex::new(1e300, -1e300)], Complex::new(0.0, 0.0)).unwrap();
        let slider = slider_box(&params, SliderId::Param(1), &Camera::default()).unwrap();

        assert_eq!(slider.bottom_right(), Point { x: i32::MAX, y: i32::MIN + 4 });
    }

    #[test]
    fn test_live_input_has_no_slider() {
        let params = ParameterSet::default();

        assert_eq!(
            slider_box(&params, SliderId::Param(0), &Camera::default()),
            Err(SliderError::Params(ParameterSetError::UnknownSlider(SliderId::Param(0))))
        );
    }
}
