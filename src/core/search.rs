//! Free-text recipe filter.
//!
//! A record matches when the lowercased query is a substring of its title,
//! description, any tag, or any ingredient. No tokenizing or ranking: matches
//! keep their catalog order.

use crate::recipe::Recipe;

/// Lowercases and trims a raw query. Returns `None` when nothing is left,
/// which means "show everything".
pub fn normalize_query(raw: &str) -> Option<String> {
    let q = raw.trim().to_lowercase();
    if q.is_empty() {
        None
    } else {
        Some(q)
    }
}

/// `needle` must already be normalized (see [`normalize_query`]).
pub fn matches(recipe: &Recipe, needle: &str) -> bool {
    contains_folded(&recipe.title, needle)
        || contains_folded(&recipe.description, needle)
        || recipe.tags.iter().any(|t| contains_folded(t, needle))
        || recipe.ingredients.iter().any(|i| contains_folded(i, needle))
}

/// Positions (into `recipes`) of the records that match `raw_query`, in order.
pub fn filter_indices(recipes: &[Recipe], raw_query: &str) -> Vec<usize> {
    let Some(needle) = normalize_query(raw_query) else {
        return (0..recipes.len()).collect();
    };

    recipes
        .iter()
        .enumerate()
        .filter(|(_, r)| matches(r, &needle))
        .map(|(i, _)| i)
        .collect()
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
