use tracing::{debug, error, info, warn};

use crate::catalog::Catalog;
use crate::config::KitchenConfig;
use crate::detail::DetailModel;
use crate::error::LoadError;
use crate::recipe::Recipe;
use crate::search::{filter_indices, normalize_query};
use crate::view::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Pending,
    Ready,
    Failed,
}

/// The recipe currently open in the detail panel.
#[derive(Debug, Clone)]
struct Selection {
    index: usize,
    checked: Vec<bool>,
}

/// All state of one browsing session.
///
/// The record set is written once (`load_succeeded`) and only read after
/// that. Everything else is navigation state: which records the grid shows,
/// which recipe is open, and which view/nav link is active.
#[derive(Debug, Clone)]
pub struct AppState {
    config: KitchenConfig,
    catalog: Catalog,
    load: LoadState,
    displayed: Vec<usize>,
    selection: Option<Selection>,
    detail_epoch: u64,
    active_view: View,
    active_nav: View,
}

impl AppState {
    pub fn new(config: KitchenConfig) -> Self {
        Self {
            config,
            catalog: Catalog::default(),
            load: LoadState::Pending,
            displayed: Vec::new(),
            selection: None,
            detail_epoch: 0,
            active_view: View::Home,
            active_nav: View::Home,
        }
    }

    pub fn config(&self) -> &KitchenConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn load_state(&self) -> LoadState {
        self.load
    }

    pub fn load_succeeded(&mut self, recipes: Vec<Recipe>) {
        self.catalog = Catalog::new(recipes);
        self.displayed = (0..self.catalog.len()).collect();
        self.load = LoadState::Ready;
        info!("Loaded {} recipes", self.catalog.len());
    }

    pub fn load_failed(&mut self, err: &LoadError) {
        error!("Error loading recipes: {}", err);
        self.catalog = Catalog::default();
        self.displayed.clear();
        self.load = LoadState::Failed;
    }

    /// Recomputes the grid's record set for `raw_query`.
    ///
    /// A failed load stays failed: searching an empty set must not swap the
    /// error message for the "no recipes" placeholder.
    pub fn apply_query(&mut self, raw_query: &str) {
        if self.load == LoadState::Failed {
            return;
        }
        self.displayed = filter_indices(self.catalog.recipes(), raw_query);
        match normalize_query(raw_query) {
            Some(q) => debug!(
                "Search {:?}: {} of {} recipes",
                q,
                self.displayed.len(),
                self.catalog.len()
            ),
            None => debug!("Search cleared: showing all {} recipes", self.catalog.len()),
        }
    }

    /// Records currently in the grid, in catalog order.
    pub fn displayed(&self) -> impl Iterator<Item = &Recipe> + '_ {
        self.displayed.iter().filter_map(|&i| self.catalog.get(i))
    }

    /// Catalog positions of the records in the grid. Together with
    /// [`Self::load_state`] this is everything the grid is projected from.
    pub fn displayed_indices(&self) -> &[usize] {
        &self.displayed
    }

    pub fn displayed_ids(&self) -> Vec<&str> {
        self.displayed().map(|r| r.id.as_str()).collect()
    }

    /// Opens the detail panel for `id`.
    ///
    /// Unknown ids leave everything untouched and return `false`. Known ids
    /// (re)start the selection with every ingredient unchecked, even when the
    /// same recipe is already open.
    pub fn select_recipe(&mut self, id: &str) -> bool {
        let Some((index, recipe)) = self.catalog.find(id) else {
            warn!("Ignoring selection of unknown recipe {:?}", id);
            return false;
        };
        let checked = vec![false; recipe.ingredients.len()];
        self.selection = Some(Selection { index, checked });
        self.detail_epoch = self.detail_epoch.wrapping_add(1);
        self.activate_view(View::Recipe);
        true
    }

    pub fn current_recipe(&self) -> Option<&Recipe> {
        self.selection
            .as_ref()
            .and_then(|s| self.catalog.get(s.index))
    }

    pub fn detail(&self) -> Option<DetailModel> {
        self.current_recipe()
            .map(|r| DetailModel::from_recipe(r, &self.config))
    }

    /// Bumped on every successful [`Self::select_recipe`]; the detail panel
    /// re-renders from scratch whenever it changes.
    pub fn detail_epoch(&self) -> u64 {
        self.detail_epoch
    }

    /// Flips the checked mark of one ingredient of the open recipe and returns
    /// the new mark. Out-of-range indices (or no open recipe) return `false`.
    pub fn toggle_ingredient(&mut self, index: usize) -> bool {
        let Some(mark) = self
            .selection
            .as_mut()
            .and_then(|s| s.checked.get_mut(index))
        else {
            return false;
        };
        *mark = !*mark;
        *mark
    }

    pub fn is_ingredient_checked(&self, index: usize) -> bool {
        self.selection
            .as_ref()
            .and_then(|s| s.checked.get(index).copied())
            .unwrap_or(false)
    }

    pub fn active_view(&self) -> View {
        self.active_view
    }

    pub fn is_active(&self, view: View) -> bool {
        self.active_view == view
    }

    /// Navigation link currently highlighted.
    pub fn active_nav(&self) -> View {
        self.active_nav
    }

    /// Makes `view` the only active view. Idempotent.
    pub fn activate_view(&mut self, view: View) {
        if self.active_view != view {
            debug!("View {} -> {}", self.active_view.key(), view.key());
        }
        self.active_view = view;
    }

    /// A navigation control was selected: highlight it and switch to its view.
    pub fn navigate(&mut self, view: View) {
        self.active_nav = view;
        self.activate_view(view);
    }

    /// Back from the detail panel to the grid.
    pub fn back(&mut self) {
        self.activate_view(View::Home);
        self.active_nav = View::Home;
    }
}
