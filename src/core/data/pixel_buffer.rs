use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    pixel_rect.width() as usize * pixel_rect.height() as usize * 3
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds { pixel: Point, pixel_rect: PixelRect },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds { pixel, pixel_rect } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of PixelRect bounds top:{}, left:{}, bottom:{}, right:{}",
                    pixel.x,
                    pixel.y,
                    pixel_rect.top_left().y,
                    pixel_rect.top_left().x,
                    pixel_rect.bottom_right().y,
                    pixel_rect.bottom_right().x
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Packed RGB raster, row-major from the top-left pixel.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn filled(pixel_rect: PixelRect, colour: Colour) -> Self {
        let total_bytes = pixel_rect_to_buffer_size(pixel_rect);
        let mut buffer = Vec::with_capacity(total_bytes);

        for _ in 0..total_bytes / 3 {
            buffer.extend_from_slice(&[colour.r, colour.g, colour.b]);
        }

        Self { pixel_rect, buffer }
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.pixel_rect.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                pixel_rect: self.pixel_rect,
            });
        }

        let relative_x = (pixel.x - self.pixel_rect.top_left().x) as usize;
        let relative_y = (pixel.y - self.pixel_rect.top_left().y) as usize;

        Ok((relative_y * self.pixel_rect.width() as usize + relative_x) * 3)
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> PixelRect {
        PixelRect::from_size(4, 3).unwrap()
    }

    #[test]
    fn test_filled_buffer_has_three_bytes_per_pixel() {
        let buffer = PixelBuffer::filled(rect(), Colour::WHITE);

        assert_eq!(buffer.buffer().len(), 4 * 3 * 3);
        assert!(buffer.buffer().iter().all(|&b| b == 255));
    }

    #[test]
    fn test_set_pixel_writes_rgb_at_row_major_index() {
        let mut buffer = PixelBuffer::filled(rect(), Colour::WHITE);
        let colour = Colour { r: 1, g: 2, b: 3 };

        buffer.set_pixel(Point { x: 2, y: 1 }, colour).unwrap();

        let index = (4 + 2) * 3;
        assert_eq!(&buffer.buffer()[index..index + 3], &[1, 2, 3]);
        assert_eq!(buffer.pixel(Point { x: 2, y: 1 }), Ok(colour));
    }

    #[test]
    fn test_set_pixel_outside_bounds_fails() {
        let mut buffer = PixelBuffer::filled(rect(), Colour::WHITE);
        let pixel = Point { x: 4, y: 0 };

        assert_eq!(
            buffer.set_pixel(pixel, Colour::BLACK),
            Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                pixel_rect: rect()
            })
        );
    }
}
