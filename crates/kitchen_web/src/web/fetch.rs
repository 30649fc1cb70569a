use kitchen::error::LoadError;
use kitchen::recipe::{parse_recipes, Recipe};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Fetches and decodes the recipe document. One attempt, no retry.
pub(super) async fn fetch_recipes(url: &str) -> Result<Vec<Recipe>, LoadError> {
    let window = web_sys::window().ok_or_else(|| LoadError::Transport("no window".to_string()))?;

    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|_| LoadError::Transport(format!("fetch({url}) rejected")))?
        .dyn_into::<web_sys::Response>()
        .map_err(|_| LoadError::Transport("fetch: expected Response".to_string()))?;

    if !resp.ok() {
        return Err(LoadError::Status(resp.status()));
    }

    let text = resp
        .text()
        .map_err(|_| LoadError::Transport("response: text() threw".to_string()))?;
    let text = JsFuture::from(text)
        .await
        .map_err(|_| LoadError::Transport("response: body read failed".to_string()))?
        .as_string()
        .ok_or_else(|| LoadError::Transport("response: body is not text".to_string()))?;

    parse_recipes(&text)
}
