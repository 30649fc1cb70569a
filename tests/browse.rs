//! End-to-end browsing sessions over the public API.

use kitchen::prelude::*;

fn recipe(id: &str, title: &str, ingredients: &[&str]) -> Recipe {
    Recipe {
        id: id.to_string(),
        title: title.to_string(),
        subtitle: None,
        description: format!("{title}, the way he makes it."),
        image: None,
        tags: vec!["Dinner".to_string()],
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        instructions: vec!["Cook it.".to_string(), "Eat it.".to_string()],
        tips: None,
    }
}

fn session() -> AppState {
    let doc = serde_json::to_string(&vec![
        recipe("a", "Goulash", &["Beef", "Paprika"]),
        recipe("b", "Fish", &["Cod", "Lemon"]),
        recipe("c", "Dumplings", &["Flour", "Egg"]),
    ])
    .unwrap();

    let mut state = AppState::new(KitchenConfig::default());
    state.load_succeeded(parse_recipes(&doc).unwrap());
    state
}

#[test]
fn search_then_clear_restores_original_order() {
    let mut state = session();
    assert_eq!(GridContent::project(&state).card_ids(), vec!["a", "b", "c"]);

    state.apply_query("lemon");
    assert_eq!(GridContent::project(&state).card_ids(), vec!["b"]);

    state.apply_query("");
    assert_eq!(GridContent::project(&state).card_ids(), vec!["a", "b", "c"]);
}

#[test]
fn only_the_last_keystroke_is_applied() {
    let mut state = session();
    let mut debounce = Debounce::new(state.config().search_debounce_ms);

    let stale = debounce.schedule("l".to_string());
    let live = debounce.schedule("lemon".to_string());

    // The superseded timer fires late and must be dropped.
    if let Some(q) = debounce.fire(stale) {
        state.apply_query(&q);
    }
    assert_eq!(state.displayed_ids(), vec!["a", "b", "c"]);

    if let Some(q) = debounce.fire(live) {
        state.apply_query(&q);
    }
    assert_eq!(state.displayed_ids(), vec!["b"]);
}

#[test]
fn card_to_detail_and_back() {
    let mut state = session();
    state.apply_query("dumpl");

    let content = GridContent::project(&state);
    let picked = content.card_ids()[0].to_string();
    assert!(state.select_recipe(&picked));
    assert_eq!(state.active_view(), View::Recipe);

    let detail = state.detail().unwrap();
    assert_eq!(detail.title, "Dumplings");
    let ingredients: Vec<&str> = detail.ingredients.iter().map(|i| i.text.as_str()).collect();
    assert_eq!(ingredients, vec!["Flour", "Egg"]);

    state.toggle_ingredient(0);
    state.back();
    assert_eq!(state.active_view(), View::Home);
    assert_eq!(state.active_nav(), View::Home);
    // The grid still shows the filtered set.
    assert_eq!(state.displayed_ids(), vec!["c"]);

    state.select_recipe(&picked);
    assert!(!state.is_ingredient_checked(0));
}

#[test]
fn failed_fetch_shows_message_and_no_cards() {
    let mut state = AppState::new(KitchenConfig::default());
    let err = parse_recipes("<!doctype html><title>404</title>").unwrap_err();
    state.load_failed(&err);

    let content = GridContent::project(&state);
    assert!(content.card_ids().is_empty());
    match content {
        GridContent::Failed(msg) => assert_eq!(msg, state.config().error_message),
        other => panic!("expected load failure, got {other:?}"),
    }
}
