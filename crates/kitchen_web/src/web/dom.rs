use kitchen::config::KitchenConfig;
use kitchen::view::View;
use wasm_bindgen::JsCast;

fn document_element() -> Option<web_sys::Element> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
}

/// Reads `data-<key>` from the `<html>` element.
pub(super) fn document_data_attribute(key: &str) -> Option<String> {
    document_element().and_then(|el| el.get_attribute(&format!("data-{key}")))
}

/// Defaults, overridden by `data-*` attributes on the `<html>` element.
pub(super) fn config_from_document() -> KitchenConfig {
    KitchenConfig::default().with_overrides(document_data_attribute)
}

/// View named by `data-view` on the element the handler of `ev` is attached to.
pub(super) fn data_view(ev: &web_sys::Event) -> Option<View> {
    let el = ev.current_target()?.dyn_into::<web_sys::Element>().ok()?;
    View::from_key(&el.get_attribute("data-view")?)
}

pub(super) fn scroll_to_top() {
    if let Some(w) = web_sys::window() {
        w.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

pub(super) fn print_page() -> Result<(), String> {
    let w = web_sys::window().ok_or("no window")?;
    w.print().map_err(|_| "print() threw".to_string())
}
