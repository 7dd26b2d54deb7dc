// Strong typing over strings. Newtypes for item identity, feed payloads, and scroll signals.
// See DESIGN.md: types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable unique identifier of a feed item. Newtype for type safety.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        ItemId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derive the id of the `copy`-th repetition of this item (`post-1` -> `post-1_2`).
    pub fn with_copy_suffix(&self, copy: u32) -> Self {
        ItemId(format!("{}_{}", self.0, copy))
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A feed item: an opaque payload plus its identity.
/// On the wire the payload's fields sit beside `id` in one flat object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedItem<T> {
    pub id: ItemId,
    #[serde(flatten)]
    pub payload: T,
}

impl<T> FeedItem<T> {
    pub fn new(id: impl Into<String>, payload: T) -> Self {
        FeedItem {
            id: ItemId::new(id),
            payload,
        }
    }
}

/// Post category as shown on the card badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Education,
    Culture,
    Development,
    Business,
    Sponsored,
    #[serde(rename = "AI Art")]
    AiArt,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Education => "Education",
            Category::Culture => "Culture",
            Category::Development => "Development",
            Category::Business => "Business",
            Category::Sponsored => "Sponsored",
            Category::AiArt => "AI Art",
        }
    }
}

/// A Wantok post, the payload the WASM engine carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: String,
    pub username: String,
    pub user_avatar: String,
    pub content: String,
    pub category: Category,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub comments: u32,
    #[serde(default)]
    pub shares: u32,
    #[serde(default)]
    pub is_verified: bool,
    /// Gradient classes; placeholders reuse them so the feed keeps its colour while scrolling.
    pub background_gradient: String,
    #[serde(default)]
    pub is_ad: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

/// Continuous scroll position reported by the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollSignal {
    /// Pixels scrolled from the top of the feed.
    pub scroll_offset: f64,
    /// Pixel height of one full-screen item slot.
    pub viewport_extent: f64,
}

impl ScrollSignal {
    pub fn new(scroll_offset: f64, viewport_extent: f64) -> Self {
        ScrollSignal {
            scroll_offset,
            viewport_extent,
        }
    }

    /// A signal is usable only once layout has settled: finite offset, positive finite extent.
    pub fn is_valid(&self) -> bool {
        self.scroll_offset.is_finite()
            && self.viewport_extent.is_finite()
            && self.viewport_extent > 0.0
    }
}

/// Batch of scroll signals from JS (minimizes JS↔WASM crossings).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollBatch {
    pub signals: Vec<ScrollSignal>,
}

/// How the surface should animate a programmatic scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// Instruction the controller emits for the rendering surface to carry out.
/// Fire-and-forget: the controller never waits for confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FeedCommand {
    /// Reset the feed container's scroll offset to 0.
    ScrollToTop { behavior: ScrollBehavior },
}

/// Lifecycle phase of the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedPhase {
    /// No items; the active index is undefined.
    Empty,
    /// At least one item; the active index is in range.
    Populated,
}

/// How a row should be drawn on this render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotKind {
    /// Full card with real content.
    Materialized,
    /// Lightweight stand-in that keeps slot height and background.
    Placeholder,
}

/// One row of a render plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSlot {
    pub index: usize,
    pub id: ItemId,
    pub kind: SlotKind,
}

/// Engine configuration passed from JS.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Items within this many slots of the active index are materialized.
    #[serde(default = "default_window_radius")]
    pub window_radius: usize,
    #[serde(default)]
    pub scroll_behavior: ScrollBehavior,
    /// Number of times the initial load is laid out back to back, `1..=MAX_REPEAT_COUNT`.
    #[serde(default = "default_repeat_count")]
    pub repeat_count: u32,
}

/// Upper bound on `FeedConfig::repeat_count`.
pub const MAX_REPEAT_COUNT: u32 = 16;

fn default_window_radius() -> usize {
    1
}

fn default_repeat_count() -> u32 {
    4
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfig {
            window_radius: default_window_radius(),
            scroll_behavior: ScrollBehavior::default(),
            repeat_count: default_repeat_count(),
        }
    }
}
