pub mod expand_sequence;
pub mod prepare_curve;
pub mod rasterize_segment;
