//! What the home card grid shows.

use crate::config::KitchenConfig;
use crate::recipe::Recipe;
use crate::state::{AppState, LoadState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagChip {
    pub label: String,
    pub special: bool,
}

impl TagChip {
    pub fn class(&self) -> &'static str {
        if self.special {
            "tag special"
        } else {
            "tag"
        }
    }
}

/// Summary card for one recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardModel {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub image_src: Option<String>,
    pub tags: Vec<TagChip>,
}

impl CardModel {
    pub fn from_recipe(recipe: &Recipe, config: &KitchenConfig) -> Self {
        Self {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            subtitle: recipe.subtitle().map(str::to_string),
            description: recipe.description.clone(),
            image_src: recipe.image().map(|img| config.image_src(img)),
            tags: recipe
                .tags
                .iter()
                .map(|t| TagChip {
                    label: t.clone(),
                    special: config.is_special_tag(t),
                })
                .collect(),
        }
    }
}

/// Entire content of the grid container. Each render replaces the previous
/// content wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridContent {
    /// Recipe document not there yet.
    Loading,
    Failed(String),
    /// Loaded, but nothing to show (empty document or no search matches).
    Empty(String),
    Cards(Vec<CardModel>),
}

impl GridContent {
    pub fn project(state: &AppState) -> Self {
        let config = state.config();
        match state.load_state() {
            LoadState::Pending => GridContent::Loading,
            LoadState::Failed => GridContent::Failed(config.error_message.clone()),
            LoadState::Ready => {
                let cards: Vec<CardModel> = state
                    .displayed()
                    .map(|r| CardModel::from_recipe(r, config))
                    .collect();
                if cards.is_empty() {
                    GridContent::Empty(config.empty_message.clone())
                } else {
                    GridContent::Cards(cards)
                }
            }
        }
    }

    pub fn card_ids(&self) -> Vec<&str> {
        match self {
            GridContent::Cards(cards) => cards.iter().map(|c| c.id.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}
