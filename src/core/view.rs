/// Mutually exclusive top-level panels of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Home,
    Recipe,
    About,
}

impl View {
    /// Key used in `data-view` attributes on navigation controls.
    pub fn key(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Recipe => "recipe",
            View::About => "about",
        }
    }

    /// DOM id of the panel element.
    pub fn element_id(self) -> &'static str {
        match self {
            View::Home => "home-view",
            View::Recipe => "recipe-view",
            View::About => "about-view",
        }
    }

    pub fn from_key(key: &str) -> Option<View> {
        View::all().iter().copied().find(|v| v.key() == key)
    }

    pub fn all() -> &'static [View] {
        &[View::Home, View::Recipe, View::About]
    }
}
