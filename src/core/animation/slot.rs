use crate::core::animation::driver::AnimationHandle;
use crate::core::ports::segment_sink::SegmentSink;

/// Holds the one live animation of a canvas.
///
/// Restarting replaces the handle outright: the previous handle is dropped
/// and none of its remaining symbols are ever interpreted. Each restart bumps
/// the generation so a frame scheduler can tell stale frames apart.
#[derive(Debug, Default)]
pub struct AnimationSlot {
    current: Option<AnimationHandle>,
    generation: u64,
}

impl AnimationSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `handle` as the live animation and returns its generation.
    pub fn restart(&mut self, handle: AnimationHandle) -> u64 {
        self.current = Some(handle);
        self.generation += 1;

        self.generation
    }

    /// Drops the live animation, if any.
    pub fn cancel(&mut self) {
        self.current = None;
    }

    /// Advances the live animation. An empty slot has nothing left to draw.
    pub fn advance<S: SegmentSink + ?Sized>(&mut self, sink: &mut S) -> bool {
        match self.current.as_mut() {
            Some(handle) => handle.advance(sink),
            None => false,
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn current(&self) -> Option<&AnimationHandle> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.current.as_ref().is_some_and(|handle| !handle.is_done())
    }
}
