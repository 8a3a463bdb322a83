/// True when any part of `[top, bottom)` lies inside a viewport of the given
/// height (coordinates relative to the viewport top).
#[inline]
pub fn intersects_viewport(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < viewport_height && bottom > 0.0
}

/// One-shot fade-in latch. Once revealed a block stays revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Feed one visibility sample. Returns true only on the transition to
    /// revealed.
    pub fn observe(&mut self, in_view: bool) -> bool {
        if self.revealed || !in_view {
            return false;
        }
        self.revealed = true;
        true
    }
}

/// Latches for every fade-in block on the page, indexed like the blocks.
///
/// `update` runs on any viewport change (scroll, resize, mount). Blocks that
/// are already revealed are not measured again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealSet {
    latches: Vec<RevealLatch>,
}

impl RevealSet {
    pub fn new(len: usize) -> Self {
        Self {
            latches: vec![RevealLatch::default(); len],
        }
    }

    pub fn all_revealed(&self) -> bool {
        self.latches.iter().all(RevealLatch::revealed)
    }

    /// Measure each unrevealed block with `span_of` (top, bottom) and latch
    /// the ones now inside the viewport. Returns the newly revealed indices.
    pub fn update<F>(&mut self, viewport_height: f64, mut span_of: F) -> Vec<usize>
    where
        F: FnMut(usize) -> (f64, f64),
    {
        let mut fresh = Vec::new();
        for (i, latch) in self.latches.iter_mut().enumerate() {
            if latch.revealed() {
                continue;
            }
            let (top, bottom) = span_of(i);
            if latch.observe(intersects_viewport(top, bottom, viewport_height)) {
                fresh.push(i);
            }
        }
        fresh
    }
}
