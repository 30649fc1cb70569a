//! # kitchen
//!
//! Everything Grumpy Apa's Kitchen knows about recipes that does not need a
//! browser: decoding the recipe document, the searchable catalog, the card and
//! detail projections, and the view/navigation state machine.
//!
//! The browser app (`kitchen_web`) owns a single [`state::AppState`] and only
//! adds DOM glue on top of it.
//!
//! ## Quick Start
//!
//! ```
//! use kitchen::prelude::*;
//!
//! let doc = r#"[{"id":"soup","title":"Soup","description":"Hot.","ingredients":["Lemon"]}]"#;
//! let recipes = parse_recipes(doc).unwrap();
//!
//! let mut state = AppState::new(KitchenConfig::default());
//! state.load_succeeded(recipes);
//! state.apply_query("LEMON");
//! assert_eq!(state.displayed_ids(), vec!["soup"]);
//!
//! assert!(state.select_recipe("soup"));
//! assert_eq!(state.active_view(), View::Recipe);
//! ```
//!
//! ## Modules
//!
//! - [`recipe`]: Recipe records and document decoding
//! - [`catalog`]: The loaded record set and id lookup
//! - [`search`]: Free-text filter
//! - [`debounce`]: "Last input wins" deferred actions
//! - [`view`]: Top-level views
//! - [`grid`] / [`detail`]: What the card grid and detail panel show
//! - [`state`]: Application state tying it together

#[path = "core/config.rs"]
pub mod config;

#[path = "core/error.rs"]
pub mod error;

#[path = "core/recipe.rs"]
pub mod recipe;

#[path = "core/catalog.rs"]
pub mod catalog;

#[path = "core/search.rs"]
pub mod search;

#[path = "core/debounce.rs"]
pub mod debounce;

#[path = "core/view.rs"]
pub mod view;

#[path = "core/grid.rs"]
pub mod grid;

#[path = "core/detail.rs"]
pub mod detail;

#[path = "core/state.rs"]
pub mod state;

/// Prelude module for convenient imports.
///
/// ```
/// use kitchen::prelude::*;
/// ```
pub mod prelude {
    pub use crate::catalog::Catalog;
    pub use crate::config::KitchenConfig;
    pub use crate::debounce::{Debounce, Ticket};
    pub use crate::detail::{DetailModel, IngredientRow, InstructionStep};
    pub use crate::error::LoadError;
    pub use crate::grid::{CardModel, GridContent, TagChip};
    pub use crate::recipe::{parse_recipes, Recipe};
    pub use crate::search::{filter_indices, matches, normalize_query};
    pub use crate::state::{AppState, LoadState};
    pub use crate::view::View;
}
