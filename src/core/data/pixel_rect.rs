use crate::core::data::point::Point;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelRectError {
    #[error("pixel rect size must be positive: {width}x{height}")]
    InvalidSize { width: i64, height: i64 },
}

/// Inclusive rectangle of pixels, at least 2x2.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    top_left: Point,
    bottom_right: Point,
}

impl PixelRect {
    pub fn new(top_left: Point, bottom_right: Point) -> Result<Self, PixelRectError> {
        let width = i64::from(bottom_right.x) - i64::from(top_left.x) + 1;
        let height = i64::from(bottom_right.y) - i64::from(top_left.y) + 1;

        if width < 2 || height < 2 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// Rect anchored at the origin covering a `width` x `height` viewport.
    pub fn from_size(width: u32, height: u32) -> Result<Self, PixelRectError> {
        if width < 2 || height < 2 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(PixelRectError::InvalidSize {
                width: i64::from(width),
                height: i64::from(height),
            });
        }

        Self::new(
            Point { x: 0, y: 0 },
            Point {
                x: width as i32 - 1,
                y: height as i32 - 1,
            },
        )
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        (i64::from(self.bottom_right.x) - i64::from(self.top_left.x) + 1) as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        (i64::from(self.bottom_right.y) - i64::from(self.top_left.y) + 1) as u32
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.top_left.x <= point.x
            && self.top_left.y <= point.y
            && self.bottom_right.x >= point.x
            && self.bottom_right.y >= point.y
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_rect_dimensions() {
        let rect = PixelRect::new(Point { x: -10, y: -20 }, Point { x: 110, y: 80 }).unwrap();

        assert_eq!(rect.width(), 121);
        assert_eq!(rect.height(), 101);
        assert_eq!(rect.size(), 12221);
    }

    #[test]
    fn test_pixel_rect_must_be_at_least_two_pixels_wide_and_tall() {
        let single_pixel = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 0, y: 0 });
        let inverted = PixelRect::new(Point { x: 2, y: 2 }, Point { x: -2, y: -2 });
        let two_pixels_square = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 1, y: 1 });

        assert_eq!(
            single_pixel,
            Err(PixelRectError::InvalidSize { width: 1, height: 1 })
        );
        assert_eq!(
            inverted,
            Err(PixelRectError::InvalidSize { width: -3, height: -3 })
        );
        assert!(two_pixels_square.is_ok());
    }

    #[test]
    fn test_from_size_matches_viewport() {
        let rect = PixelRect::from_size(800, 600).unwrap();

        assert_eq!(rect.top_left(), Point { x: 0, y: 0 });
        assert_eq!(rect.bottom_right(), Point { x: 799, y: 599 });
        assert_eq!(rect.size(), 480_000);
    }

    #[test]
    fn test_from_size_rejects_degenerate_viewports() {
        assert_eq!(
            PixelRect::from_size(1, 600),
            Err(PixelRectError::InvalidSize { width: 1, height: 600 })
        );
        assert!(PixelRect::from_size(800, 0).is_err());
    }

    #[test]
    fn test_pixel_rect_contains_point() {
        let rect = PixelRect::new(Point { x: -5, y: -5 }, Point { x: 4, y: 4 }).unwrap();

        assert!(rect.contains_point(Point { x: 0, y: 0 }));
        assert!(rect.contains_point(Point { x: -5, y: 4 }));
        assert!(!rect.contains_point(Point { x: 5, y: 0 }));
        assert!(!rect.contains_point(Point { x: 0, y: -6 }));
    }
}
