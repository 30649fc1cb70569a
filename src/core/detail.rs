//! What the recipe detail panel shows.

use crate::config::KitchenConfig;
use crate::recipe::Recipe;

pub const TIPS_HEADER: &str = "Grandpa Tip";
pub const INGREDIENTS_HEADING: &str = "Ingredients";
pub const INSTRUCTIONS_HEADING: &str = "Instructions";
pub const PRINT_LABEL: &str = "Print it. Put it on the fridge.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientRow {
    /// Position in the recipe's ingredient list; keys the checkbox state.
    pub index: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionStep {
    /// 1-based.
    pub number: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailModel {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_src: Option<String>,
    pub tips: Option<Vec<String>>,
    pub ingredients: Vec<IngredientRow>,
    pub instructions: Vec<InstructionStep>,
}

impl DetailModel {
    pub fn from_recipe(recipe: &Recipe, config: &KitchenConfig) -> Self {
        Self {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            subtitle: recipe.subtitle().map(str::to_string),
            image_src: recipe.image().map(|img| config.image_src(img)),
            tips: recipe.tips().map(<[String]>::to_vec),
            ingredients: recipe
                .ingredients
                .iter()
                .enumerate()
                .map(|(index, text)| IngredientRow {
                    index,
                    text: text.clone(),
                })
                .collect(),
            instructions: recipe
                .instructions
                .iter()
                .enumerate()
                .map(|(i, text)| InstructionStep {
                    number: i + 1,
                    text: text.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::parse_recipes;

    #[test]
    fn preserves_list_order_and_numbers_steps() {
        let doc = r#"[{
            "id":"stew","title":"Stew","description":"d","image":"stew.png",
            "ingredients":["Onion","Beef","Salt"],
            "instructions":["Brown the beef.","Add onion.","Wait."],
            "tips":["Wait longer."]
        }]"#;
        let r = &parse_recipes(doc).unwrap()[0];
        let d = DetailModel::from_recipe(r, &KitchenConfig::default());

        assert_eq!(d.id, "stew");
        assert_eq!(d.image_src.as_deref(), Some("images/stew.png"));
        let ingredients: Vec<&str> = d.ingredients.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(ingredients, vec!["Onion", "Beef", "Salt"]);
        assert_eq!(d.ingredients[2].index, 2);

        let steps: Vec<(usize, &str)> = d
            .instructions
            .iter()
            .map(|s| (s.number, s.text.as_str()))
            .collect();
        assert_eq!(steps, vec![(1, "Brown the beef."), (2, "Add onion."), (3, "Wait.")]);
        assert_eq!(d.tips, Some(vec!["Wait longer.".to_string()]));
    }

    #[test]
    fn absent_optionals_stay_absent() {
        let doc = r#"[{"id":"x","title":"X","description":"d","subtitle":"","tips":[]}]"#;
        let r = &parse_recipes(doc).unwrap()[0];
        let d = DetailModel::from_recipe(r, &KitchenConfig::default());
        assert_eq!(d.subtitle, None);
        assert_eq!(d.image_src, None);
        assert_eq!(d.tips, None);
        assert!(d.ingredients.is_empty());
        assert!(d.instructions.is_empty());
    }
}
