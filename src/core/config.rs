use serde::{Deserialize, Serialize};
use tracing::warn;

/// Override key for the recipe document location.
pub const KEY_RECIPES_URL: &str = "recipes-url";
/// Override key for the directory image paths are resolved against.
pub const KEY_IMAGES_DIR: &str = "images-dir";
/// Override key for the search debounce delay.
pub const KEY_SEARCH_DEBOUNCE_MS: &str = "search-debounce-ms";

/// Runtime configuration for the kitchen app.
///
/// Construct with [`KitchenConfig::default`] and optionally apply page-level
/// overrides with [`KitchenConfig::with_overrides`]. Fields missing from a
/// serialized config fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitchenConfig {
    /// Relative URL of the recipe document, fetched once at startup.
    pub recipes_url: String,
    /// Directory that recipe `image` paths are relative to.
    pub images_dir: String,
    /// Quiet period after the last keystroke before the search runs.
    pub search_debounce_ms: u32,
    /// Tags rendered with the special chip style.
    pub special_tags: Vec<String>,
    /// Shown in place of cards when there is nothing to show.
    pub empty_message: String,
    /// Shown in place of the grid when the recipe document failed to load.
    pub error_message: String,
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            recipes_url: "recipes.json".to_string(),
            images_dir: "images".to_string(),
            search_debounce_ms: 300,
            special_tags: vec!["Family Favorite".to_string(), "Grandpa Approved".to_string()],
            empty_message: "No recipes here yet. He's still talking.".to_string(),
            error_message: "Couldn't load the recipes. Check the file and try again.".to_string(),
        }
    }
}

impl KitchenConfig {
    /// Applies string overrides looked up by key (see the `KEY_*` constants).
    ///
    /// Blank values are ignored; values that fail to parse keep the current
    /// setting and are logged.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(url) = get(KEY_RECIPES_URL) {
            self.recipes_url = url;
        }
        if let Some(dir) = get(KEY_IMAGES_DIR) {
            self.images_dir = dir;
        }
        if let Some(raw) = get(KEY_SEARCH_DEBOUNCE_MS) {
            match raw.parse::<u32>() {
                Ok(ms) => self.search_debounce_ms = ms.min(10_000),
                Err(_) => warn!(
                    "Ignoring invalid {} value: {:?} (keeping {} ms)",
                    KEY_SEARCH_DEBOUNCE_MS, raw, self.search_debounce_ms
                ),
            }
        }
        self
    }

    pub fn is_special_tag(&self, tag: &str) -> bool {
        self.special_tags.iter().any(|t| t == tag)
    }

    /// Resolves a recipe image path against [`Self::images_dir`].
    pub fn image_src(&self, image: &str) -> String {
        let dir = self.images_dir.trim_end_matches('/');
        if dir.is_empty() {
            image.to_string()
        } else {
            format!("{dir}/{image}")
        }
    }
}
