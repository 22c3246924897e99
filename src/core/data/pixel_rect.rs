use std::error::Error;
use std::fmt;
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    InvalidSize { width: i64, height: i64 },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel rect must be at least 1x1 pixels: {}x{}", width, height)
            }
        }
    }
}

impl Error for PixelRectError {}

/// Inclusive rectangle of raster pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelRect {
    top_left: Point,
    bottom_right: Point,
}

impl PixelRect {
    pub fn new(top_left: Point, bottom_right: Point) -> Result<Self, PixelRectError> {
        let width = i64::from(bottom_right.x) - i64::from(top_left.x) + 1;
        let height = i64::from(bottom_right.y) - i64::from(top_left.y) + 1;

        if width < 1 || height < 1 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// A rect anchored at (0, 0) covering `width` x `height` pixels.
    pub fn from_size(width: u32, height: u32) -> Result<Self, PixelRectError> {
        let too_large = || PixelRectError::InvalidSize {
            width: i64::from(width),
            height: i64::from(height),
        };
        let right = i32::try_from(width).map_err(|_| too_large())? - 1;
        let bottom = i32::try_from(height).map_err(|_| too_large())? - 1;

        Self::new(Point { x: 0, y: 0 }, Point { x: right, y: bottom })
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
        (self.bottom_right.x - self.top_left.x + 1) as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        (self.bottom_right.y - self.top_left.y + 1) as u32
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.top_left.x <= point.x
            && self.top_left.y <= point.y
            && self.bottom_right.x >= point.x
            && self.bottom_right.y >= point.y
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
    }

    #[test]
    fn test_pixel_rect_from_size() {
        let rect = PixelRect::from_size(800, 600).unwrap();

        assert_eq!(rect.top_left(), Point { x: 0, y: 0 });
        assert_eq!(rect.bottom_right(), Point { x: 799, y: 599 });
        assert_eq!(rect.width(), 800);
        assert_eq!(rect.height(), 600);
    }

    #[test]
    fn test_pixel_rect_must_be_at_least_one_pixel_wide_and_tall() {
        assert_eq!(
            PixelRect::from_size(0, 10),
            Err(PixelRectError::InvalidSize { width: 0, height: 10 })
        );
        assert_eq!(
            PixelRect::new(Point { x: 0, y: 0 }, Point { x: -100, y: 10 }),
            Err(PixelRectError::InvalidSize { width: -99, height: 11 })
        );
    }

    #[test]
    fn test_single_pixel_rect_is_valid() {
        let rect = PixelRect::from_size(1, 1).unwrap();

        assert_eq!(rect.top_left(), rect.bottom_right());
        assert_eq!((rect.width(), rect.height()), (1, 1));
        assert!(rect.contains_point(Point { x: 0, y: 0 }));
    }

    #[test]
    fn test_pixel_rect_from_size_rejects_huge_dimensions() {
        assert!(PixelRect::from_size(u32::MAX, 10).is_err());
    }

    #[test]
    fn test_pixel_rect_contains_point() {
        let rect = PixelRect::new(Point { x: -50, y: -50 }, Point { x: 100, y: 100 }).unwrap();

        assert!(rect.contains_point(Point { x: 50, y: 50 }));
        assert!(rect.contains_point(Point { x: -50, y: -50 }));
        assert!(rect.contains_point(Point { x: 100, y: 100 }));
        assert!(!rect.contains_point(Point { x: 101, y: 50 }));
        assert!(!rect.contains_point(Point { x: 50, y: -51 }));
    }
}
