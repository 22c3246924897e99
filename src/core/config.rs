/// How much work one animation `advance` call does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceStride {
    /// Interpret this many symbols per call (at least one).
    Symbols(usize),
    /// Interpret symbols until this many segments were drawn (at least one),
    /// or the sequence runs out.
    Segments(usize),
}

impl Default for AdvanceStride {
    fn default() -> Self {
        Self::Symbols(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Ceiling on the number of symbols any generation may hold.
    pub max_sequence_len: usize,
    /// Predicted lengths from here on are expanded with rayon.
    pub parallel_expansion_threshold: usize,
    pub stride: AdvanceStride,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_sequence_len: 4_000_000,
            parallel_expansion_threshold: 65_536,
            stride: AdvanceStride::default(),
        }
    }
}
