// feed_core: Wantok Rust/WASM feed engine
// Windowing decisions live here; the JS feed container only reports scroll and draws what it is told.

mod coalesce;
mod error;
mod feed;
mod types;
mod window;

use wasm_bindgen::prelude::*;

pub use coalesce::ScrollCoalescer;
pub use error::FeedError;
pub use feed::{ensure_unique_ids, repeat_feed, search, Searchable};
pub use types::*;
pub use window::WindowedFeedController;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js(err: FeedError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Main engine interface exposed to JavaScript.
/// Batch interface to minimize JS↔WASM crossings.
#[wasm_bindgen]
pub struct FeedEngine {
    config: FeedConfig,
    controller: WindowedFeedController<Post>,
    coalescer: ScrollCoalescer,
}

impl FeedEngine {
    fn from_config_json(config_json: &str) -> Result<FeedEngine, FeedError> {
        let config: FeedConfig = serde_json::from_str(config_json)
            .map_err(|e| FeedError::InvalidConfig(e.to_string()))?;
        if !(1..=MAX_REPEAT_COUNT).contains(&config.repeat_count) {
            return Err(FeedError::InvalidConfig(format!(
                "repeat_count must be between 1 and {}, got {}",
                MAX_REPEAT_COUNT, config.repeat_count
            )));
        }

        Ok(FeedEngine {
            controller: WindowedFeedController::with_config(&config),
            coalescer: ScrollCoalescer::new(),
            config,
        })
    }

    fn load(&mut self, items_json: &str) -> Result<(), FeedError> {
        let items: Vec<FeedItem<Post>> = serde_json::from_str(items_json)
            .map_err(|e| FeedError::InvalidItems(e.to_string()))?;
        let items = repeat_feed(items, self.config.repeat_count);
        ensure_unique_ids(&items)?;

        self.controller.initialize(items);
        Ok(())
    }

    fn prepend(&mut self, item_json: &str) -> Result<String, FeedError> {
        let item: FeedItem<Post> = serde_json::from_str(item_json)
            .map_err(|e| FeedError::InvalidItems(e.to_string()))?;
        if self.controller.items().iter().any(|existing| existing.id == item.id) {
            return Err(FeedError::DuplicateItemId(item.id));
        }

        let command = self.controller.publish(item);
        Ok(serde_json::to_string(&command)?)
    }

    fn apply_batch(&mut self, signals_json: &str) -> Result<bool, FeedError> {
        let batch: ScrollBatch = serde_json::from_str(signals_json)?;
        self.coalescer.extend(batch.signals);
        Ok(self.coalescer.flush(&mut self.controller))
    }

    fn plan_json(&self) -> Result<String, FeedError> {
        Ok(serde_json::to_string(&self.controller.render_plan())?)
    }

    fn search_json(&self, query: &str) -> Result<String, FeedError> {
        Ok(serde_json::to_string(&search(self.controller.items(), query))?)
    }

    /// Borrow the underlying controller.
    pub fn controller(&self) -> &WindowedFeedController<Post> {
        &self.controller
    }
}

#[wasm_bindgen]
impl FeedEngine {
    /// Create an empty engine from a JSON `FeedConfig`; `"{}"` takes every default.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<FeedEngine, JsValue> {
        FeedEngine::from_config_json(config_json).map_err(to_js)
    }

    /// Replace the feed with a JSON array of posts (each carrying its `id`).
    pub fn initialize(&mut self, items_json: &str) -> Result<(), JsValue> {
        self.load(items_json).map_err(to_js)
    }

    /// Report one scroll event. Returns `true` if the active card changed.
    pub fn report_scroll(&mut self, scroll_offset: f64, viewport_extent: f64) -> bool {
        self.controller.report_scroll(scroll_offset, viewport_extent)
    }

    /// Report a burst of scroll events at once: `{ "signals": [{ "scroll_offset", "viewport_extent" }] }`.
    pub fn report_scroll_batch(&mut self, signals_json: &str) -> Result<bool, JsValue> {
        self.apply_batch(signals_json).map_err(to_js)
    }

    /// Prepend a freshly created post. Returns the JSON command the feed container must run.
    pub fn publish(&mut self, item_json: &str) -> Result<String, JsValue> {
        self.prepend(item_json).map_err(to_js)
    }

    pub fn should_materialize(&self, index: usize) -> bool {
        self.controller.should_materialize(index)
    }

    /// Active card index, or `undefined` while the feed is empty.
    pub fn active_index(&self) -> Option<u32> {
        self.controller
            .active_index()
            .map(|i| u32::try_from(i).unwrap_or(u32::MAX))
    }

    pub fn len(&self) -> usize {
        self.controller.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controller.is_empty()
    }

    /// JSON array of `{ index, id, kind }`, one per row.
    pub fn render_plan(&self) -> Result<String, JsValue> {
        self.plan_json().map_err(to_js)
    }

    /// JSON array of matching row indices.
    pub fn search(&self, query: &str) -> Result<String, JsValue> {
        self.search_json(query).map_err(to_js)
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn empty_engine_has_no_active_index() {
        let engine = FeedEngine::new("{}").unwrap();
        assert_eq!(engine.active_index(), None);
        assert!(!engine.should_materialize(0));
    }
}
