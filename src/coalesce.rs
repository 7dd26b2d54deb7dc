// Scroll burst coalescing.
// Only the last valid signal decides the final active index, so a burst collapses to one update.

use crate::types::ScrollSignal;
use crate::window::WindowedFeedController;

/// Collects scroll signals between render passes and applies the last usable one.
#[derive(Debug, Clone, Default)]
pub struct ScrollCoalescer {
    pending: Option<ScrollSignal>,
    received: usize,
}

impl ScrollCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a signal. Signals the controller would ignore never replace a usable one.
    pub fn push(&mut self, signal: ScrollSignal) {
        self.received += 1;
        if signal.is_valid() {
            self.pending = Some(signal);
        }
    }

    pub fn extend<I: IntoIterator<Item = ScrollSignal>>(&mut self, signals: I) {
        for signal in signals {
            self.push(signal);
        }
    }

    /// Signals received since the last flush, usable or not.
    pub fn received(&self) -> usize {
        self.received
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Apply the pending signal. Returns whether the active index changed
    /// relative to what it was before the burst.
    pub fn flush<T>(&mut self, controller: &mut WindowedFeedController<T>) -> bool {
        self.received = 0;
        match self.pending.take() {
            Some(signal) => controller.report_scroll(signal.scroll_offset, signal.viewport_extent),
            None => false,
        }
    }
}
