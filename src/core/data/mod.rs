pub mod canvas_geometry;
pub mod colour;
pub mod iteration_count;
pub mod pixel_buffer;
pub mod pixel_rect;
pub mod point;
pub mod position;
pub mod segment;
