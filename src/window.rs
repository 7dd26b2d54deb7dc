// Windowed feed controller: maps continuous scroll offset to a discrete active index
// and decides which rows get real content versus a placeholder.
// See DESIGN.md: WindowedFeedController

use std::ops::RangeInclusive;

use tracing::{debug, trace};

use crate::types::*;

/// Owns the ordered feed and the active index.
///
/// Rendering cost is bounded by the window (`2 * radius + 1` rows) no matter how
/// long the feed grows. Rows outside the window still exist as placeholders, so
/// snap points and scrollbar proportions stay correct.
#[derive(Debug, Clone)]
pub struct WindowedFeedController<T> {
    items: Vec<FeedItem<T>>,
    active_index: Option<usize>,
    /// Last active index the rendering surface was told about.
    announced: Option<usize>,
    window_radius: usize,
    scroll_behavior: ScrollBehavior,
}

impl<T> WindowedFeedController<T> {
    /// Create an empty controller with the default ±1 window.
    pub fn new() -> Self {
        Self::with_config(&FeedConfig::default())
    }

    pub fn with_config(config: &FeedConfig) -> Self {
        WindowedFeedController {
            items: Vec::new(),
            active_index: None,
            announced: None,
            window_radius: config.window_radius,
            scroll_behavior: config.scroll_behavior,
        }
    }

    /// Replace the item list wholesale (initial load). Does not request any scroll.
    ///
    /// The new index is not announced: the first scroll signal afterwards reports a change.
    pub fn initialize(&mut self, items: Vec<FeedItem<T>>) {
        self.items = items;
        self.active_index = if self.items.is_empty() { None } else { Some(0) };
        self.announced = None;
        debug!(
            target: "feed_core::window",
            len = self.items.len(),
            "feed initialized"
        );
    }

    /// Recompute the active index from a scroll position.
    ///
    /// Returns `true` only when the index differs from the last one announced to the
    /// surface, so an unchanged index is never reported twice. Signals with a
    /// non-positive or non-finite extent, or a non-finite offset, are ignored, as
    /// is any signal while the feed is empty.
    pub fn report_scroll(&mut self, scroll_offset: f64, viewport_extent: f64) -> bool {
        let signal = ScrollSignal::new(scroll_offset, viewport_extent);
        let Some(candidate) = self.candidate_index(&signal) else {
            trace!(
                target: "feed_core::window",
                scroll_offset,
                viewport_extent,
                len = self.items.len(),
                "scroll signal ignored"
            );
            return false;
        };

        if self.announced == Some(candidate) {
            return false;
        }

        debug!(
            target: "feed_core::window",
            from = ?self.announced,
            to = candidate,
            scroll_offset,
            "active index changed"
        );
        self.active_index = Some(candidate);
        self.announced = Some(candidate);
        true
    }

    /// Prepend a newly published item and make it active.
    /// Returns the scroll command the rendering surface should honor.
    pub fn publish(&mut self, item: FeedItem<T>) -> FeedCommand {
        debug!(
            target: "feed_core::window",
            id = %item.id,
            from = ?self.active_index,
            len = self.items.len() + 1,
            "item published"
        );
        self.items.insert(0, item);
        self.active_index = Some(0);
        self.announced = Some(0);
        FeedCommand::ScrollToTop {
            behavior: self.scroll_behavior,
        }
    }

    /// Whether the row at `index` should render its real content.
    /// Always `false` while empty and for indices past the end.
    pub fn should_materialize(&self, index: usize) -> bool {
        match self.active_index {
            Some(active) if index < self.items.len() => {
                index.abs_diff(active) <= self.window_radius
            }
            _ => false,
        }
    }

    /// The inclusive range of materialized indices, or `None` while empty.
    pub fn materialized_range(&self) -> Option<RangeInclusive<usize>> {
        let active = self.active_index?;
        let start = active.saturating_sub(self.window_radius);
        let end = active
            .saturating_add(self.window_radius)
            .min(self.items.len() - 1);
        Some(start..=end)
    }

    /// One slot per item, in display order.
    pub fn render_plan(&self) -> Vec<RenderSlot> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| RenderSlot {
                index,
                id: item.id.clone(),
                kind: if self.should_materialize(index) {
                    SlotKind::Materialized
                } else {
                    SlotKind::Placeholder
                },
            })
            .collect()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    /// The item currently occupying the viewport.
    pub fn active_item(&self) -> Option<&FeedItem<T>> {
        self.active_index.and_then(|i| self.items.get(i))
    }

    pub fn phase(&self) -> FeedPhase {
        if self.items.is_empty() {
            FeedPhase::Empty
        } else {
            FeedPhase::Populated
        }
    }

    pub fn items(&self) -> &[FeedItem<T>] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&FeedItem<T>> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn window_radius(&self) -> usize {
        self.window_radius
    }

    /// Nearest slot for a signal, clamped into the feed. `None` if the signal must be ignored.
    fn candidate_index(&self, signal: &ScrollSignal) -> Option<usize> {
        if !signal.is_valid() || self.items.is_empty() {
            return None;
        }

        let slot = (signal.scroll_offset / signal.viewport_extent).round();
        let last = self.items.len() - 1;
        // Overscroll bounce can report negative offsets; `as` saturates large values.
        let index = if slot <= 0.0 { 0 } else { slot as usize };
        Some(index.min(last))
    }
}

impl<T> Default for WindowedFeedController<T> {
    fn default() -> Self {
        Self::new()
    }
}
