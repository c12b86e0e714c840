use crate::core::data::camera::Camera;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;

// Integer halves, so the centre pixel of an even viewport maps exactly onto
// the camera centre.
fn half_extents(camera: &Camera) -> (f64, f64) {
    (f64::from(camera.width() / 2), f64::from(camera.height() / 2))
}

/// Maps a pixel to the complex plane. Both axes are scaled by the screen
/// height.
#[must_use]
pub fn screen_to_plane(pixel: Point, camera: &Camera) -> Complex {
    let (half_width, half_height) = half_extents(camera);
    let height = f64::from(camera.height());
    let center = camera.center();

    Complex {
        real: center.real + camera.zoom() * (f64::from(pixel.x) - half_width) / height,
        imag: center.imag + camera.zoom() * (f64::from(pixel.y) - half_height) / height,
    }
}

/// Inverse of [`screen_to_plane`], rounded to the nearest pixel. Points far
/// off screen saturate at the `i32` range.
#[must_use]
pub fn plane_to_screen(z: Complex, camera: &Camera) -> Point {
    let (half_width, half_height) = half_extents(camera);
    let height = f64::from(camera.height());
    let center = camera.center();

    let x = height * (z.real - center.real) / camera.zoom() + half_width;
    let y = height * (z.imag - center.imag) / camera.zoom() + half_height;

    Point {
        x: x.round() as i32,
        y: y.round() as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera(center: Complex, zoom: f64, width: u32, height: u32) -> Camera {
        Camera::new(center, zoom, width, height).unwrap()
    }

    #[test]
    fn test_screen_centre_maps_to_camera_centre() {
        let camera = Camera::default();
        let result = screen_to_plane(Point { x: 400, y: 300 }, &camera);

        assert_eq!(result, Complex::new(0.0, 4.0));
    }

    #[test]
    fn test_top_left_uses_height_for_both_axes() {
        let camera = Camera::default();
        let result = screen_to_plane(Point { x: 0, y: 0 }, &camera);

        // 10 * (0 - 400) / 600 and 4 + 10 * (0 - 300) / 600
        assert!((result.real - (-20.0 / 3.0)).abs() < 1e-12);
        assert_eq!(result.imag, -1.0);
    }

    #[test]
    fn test_odd_viewport_uses_integer_half_extent() {
        let camera = camera(Complex::new(0.0, 0.0), 2.0, 5, 4);
        let result = screen_to_plane(Point { x: 2, y: 2 }, &camera);

        assert_eq!(result, Complex::new(0.0, 0.0));
    }

    #[test]
    fn test_round_trip_for_every_viewport_pixel() {
        let cameras = [
            Camera::default(),
            camera(Complex::new(-0.75, 0.1), 0.003, 121, 77),
            camera(Complex::new(12.5, -3.0), 250.0, 64, 48),
        ];

        for camera in cameras {
            for y in 0..camera.height() as i32 {
                for x in 0..camera.width() as i32 {
                    let pixel = Point { x, y };
                    let round_trip = plane_to_screen(screen_to_plane(pixel, &camera), &camera);

                    assert_eq!(round_trip, pixel, "camera {:?}", camera);
                }
            }
        }
    }

    #[test]
    fn test_far_away_point_saturates() {
        let camera = Camera::default();
        let result = plane_to_screen(Complex::new(1e300, -1e300), &camera);

        assert_eq!(result, Point { x: i32::MAX, y: i32::MIN });
    }
}
