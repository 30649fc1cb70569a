//! UI models and metadata that should be available on both wasm and native.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test the
//! navigation inventory on the host.

use kitchen::view::View;

pub const BRAND: &str = "Grumpy Apa's Kitchen";
pub const SEARCH_PLACEHOLDER: &str = "Search recipes, tags, ingredients...";
pub const BACK_LABEL: &str = "← Back to recipes";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLink {
    Home,
    About,
}

impl NavLink {
    pub fn label(self) -> &'static str {
        match self {
            NavLink::Home => "Recipes",
            NavLink::About => "About",
        }
    }

    /// View this link switches to.
    pub fn view(self) -> View {
        match self {
            NavLink::Home => View::Home,
            NavLink::About => View::About,
        }
    }

    pub fn all() -> &'static [NavLink] {
        &[NavLink::Home, NavLink::About]
    }
}

/// Class list for a top-level panel.
pub fn view_class(active: bool) -> &'static str {
    if active {
        "view active"
    } else {
        "view"
    }
}

/// Class list for a navigation link.
pub fn nav_link_class(active: bool) -> &'static str {
    if active {
        "nav-link active"
    } else {
        "nav-link"
    }
}

pub fn ingredient_checkbox_class(checked: bool) -> &'static str {
    if checked {
        "ingredient-checkbox checked"
    } else {
        "ingredient-checkbox"
    }
}
