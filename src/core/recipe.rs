use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// One recipe as it appears in the recipe document.
///
/// Records are read-only once loaded. The accessors for optional fields treat
/// empty values the same as missing ones, so callers never render an empty
/// subtitle line, a broken `images/` path, or an empty tips box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<Vec<String>>,
}

impl Recipe {
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref().filter(|s| !s.is_empty())
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref().filter(|s| !s.is_empty())
    }

    pub fn tips(&self) -> Option<&[String]> {
        self.tips.as_deref().filter(|t| !t.is_empty())
    }
}

/// Decodes the recipe document: a JSON array of records, in display order.
pub fn parse_recipes(text: &str) -> Result<Vec<Recipe>, LoadError> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_and_minimal_records() {
        let doc = r#"[
            {
                "id": "meatballs",
                "title": "Meatballs",
                "subtitle": "Sunday only",
                "description": "The good ones.",
                "image": "meatballs.jpg",
                "tags": ["Family Favorite", "Dinner"],
                "ingredients": ["500g beef", "1 egg"],
                "instructions": ["Mix.", "Roll.", "Fry."],
                "tips": ["Don't rush it."]
            },
            { "id": "toast", "title": "Toast", "description": "Bread, but hot." }
        ]"#;

        let recipes = parse_recipes(doc).unwrap();
        assert_eq!(recipes.len(), 2);

        let full = &recipes[0];
        assert_eq!(full.subtitle(), Some("Sunday only"));
        assert_eq!(full.image(), Some("meatballs.jpg"));
        assert_eq!(full.instructions, vec!["Mix.", "Roll.", "Fry."]);
        assert_eq!(full.tips().map(<[String]>::len), Some(1));

        let minimal = &recipes[1];
        assert_eq!(minimal.subtitle(), None);
        assert_eq!(minimal.image(), None);
        assert_eq!(minimal.tips(), None);
        assert!(minimal.tags.is_empty());
        assert!(minimal.ingredients.is_empty());
    }

    #[test]
    fn empty_optional_fields_count_as_absent() {
        let doc = r#"[{
            "id": "x", "title": "X", "description": "d",
            "subtitle": "", "image": "", "tips": []
        }]"#;
        let r = &parse_recipes(doc).unwrap()[0];
        assert_eq!(r.subtitle(), None);
        assert_eq!(r.image(), None);
        assert_eq!(r.tips(), None);
    }

    #[test]
    fn null_optional_fields_are_accepted() {
        let doc = r#"[{"id":"x","title":"X","description":"d","subtitle":null,"tips":null}]"#;
        let r = &parse_recipes(doc).unwrap()[0];
        assert_eq!(r.subtitle(), None);
        assert_eq!(r.tips(), None);
    }

    #[test]
    fn missing_required_field_is_a_decode_error() {
        let err = parse_recipes(r#"[{"id":"x","description":"no title"}]"#).unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }

    #[test]
    fn non_array_document_is_a_decode_error() {
        assert!(matches!(
            parse_recipes(r#"{"recipes": []}"#),
            Err(LoadError::Decode(_))
        ));
        assert!(matches!(parse_recipes("<html>404</html>"), Err(LoadError::Decode(_))));
    }

    #[test]
    fn empty_array_is_a_valid_empty_set() {
        assert!(parse_recipes("[]").unwrap().is_empty());
    }
}
