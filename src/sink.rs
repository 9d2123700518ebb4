use std::{
    hint::black_box,
    sync::atomic::{compiler_fence, Ordering},
};

/// Accumulates benchmark results so the optimizer has to treat them as live.
///
/// The total carries no meaning. Only one thread ever touches a `Sink`; a
/// parallel runner would need an atomic add with the same fence instead.
#[derive(Debug, Default)]
pub struct Sink {
    acc: u64,
}

impl Sink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `v` to the total and fence, so neither `v` nor the work that
    /// produced it can be elided or moved across the call.
    #[inline(never)]
    pub fn consume(&mut self, v: u64) {
        self.acc = black_box(self.acc.wrapping_add(black_box(v)));
        compiler_fence(Ordering::SeqCst);
    }

    pub fn total(&self) -> u64 {
        self.acc
    }
}
