use hashbrown::HashMap;
use tracing::warn;

use crate::recipe::Recipe;

/// The full record set, in document order, with an id index.
///
/// Built once when the recipe document arrives and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        let mut by_id = HashMap::with_capacity(recipes.len());
        for (idx, recipe) in recipes.iter().enumerate() {
            if by_id.contains_key(recipe.id.as_str()) {
                warn!(
                    "Duplicate recipe id {:?} at position {}; keeping the first occurrence",
                    recipe.id, idx
                );
                continue;
            }
            by_id.insert(recipe.id.clone(), idx);
        }
        Self { recipes, by_id }
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, idx: usize) -> Option<&Recipe> {
        self.recipes.get(idx)
    }

    /// Looks a recipe up by id, returning its position and the record.
    pub fn find(&self, id: &str) -> Option<(usize, &Recipe)> {
        let idx = *self.by_id.get(id)?;
        self.recipes.get(idx).map(|r| (idx, r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str, title: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: title.to_string(),
            subtitle: None,
            description: String::new(),
            image: None,
            tags: Vec::new(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            tips: None,
        }
    }

    #[test]
    fn find_returns_position_and_record() {
        let catalog = Catalog::new(vec![recipe("a", "A"), recipe("b", "B")]);
        let (idx, r) = catalog.find("b").unwrap();
        assert_eq!(idx, 1);
        assert_eq!(r.title, "B");
        assert!(catalog.find("zzz").is_none());
    }

    #[test]
    fn duplicate_ids_resolve_to_first_occurrence() {
        let catalog = Catalog::new(vec![
            recipe("a", "First"),
            recipe("b", "B"),
            recipe("a", "Second"),
        ]);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.find("a").unwrap().1.title, "First");
    }

    #[test]
    fn default_is_empty() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.get(0).is_none());
    }
}
