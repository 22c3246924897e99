#[allow(clippy::module_inception)]
pub mod expand_sequence;
pub mod expand_sequence_rayon;
