use leptos::prelude::*;

use super::timer::DebounceTimer;
use crate::ui_model::SEARCH_PLACEHOLDER;

/// Search field. Runs `on_query` with the raw text once typing pauses for
/// `delay_ms`; each keystroke cancels the previous pending run.
#[component]
pub(super) fn SearchBox(delay_ms: u32, on_query: Callback<String>) -> impl IntoView {
    let timer = StoredValue::new_local(DebounceTimer::new(delay_ms));

    on_cleanup(move || {
        timer.update_value(|t| t.cancel());
    });

    let on_input = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        let armed = timer.try_update_value(|t| {
            t.schedule(raw, move |ticket| {
                if let Some(query) = timer.try_update_value(|t| t.fire(ticket)).flatten() {
                    on_query.run(query);
                }
            })
        });
        if let Some(Err(e)) = armed {
            tracing::warn!("Search debounce failed to arm: {}", e);
        }
    };

    view! {
        <div class="search-container">
            <input
                id="search-input"
                type="search"
                autocomplete="off"
                placeholder=SEARCH_PLACEHOLDER
                on:input=on_input
            />
        </div>
    }
}
