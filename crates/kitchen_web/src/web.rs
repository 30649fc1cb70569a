use kitchen::config::KitchenConfig;
use kitchen::state::AppState;
use kitchen::view::View;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod detail;
mod dom;
mod fetch;
mod grid;
mod search;
mod shell;
mod timer;

use detail::RecipeDetail;
use grid::RecipeGrid;
use search::SearchBox;
use shell::{About, Header};

use crate::ui_model::{view_class, BACK_LABEL};

pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let config = dom::config_from_document();
    tracing::info!("Starting kitchen (recipes from {})", config.recipes_url);

    mount_to_body(move || view! { <App config=config.clone() /> });
}

#[component]
fn App(config: KitchenConfig) -> impl IntoView {
    let recipes_url = config.recipes_url.clone();
    let debounce_ms = config.search_debounce_ms;
    let state = RwSignal::new(AppState::new(config));

    // The only suspension point: everything else waits on this landing in `state`.
    spawn_local(async move {
        match fetch::fetch_recipes(&recipes_url).await {
            Ok(recipes) => state.update(|s| s.load_succeeded(recipes)),
            Err(e) => state.update(|s| s.load_failed(&e)),
        }
    });

    let on_select = Callback::new(move |id: String| {
        let opened = state.try_update(|s| s.select_recipe(&id)).unwrap_or(false);
        if opened {
            dom::scroll_to_top();
        }
    });

    let on_navigate = Callback::new(move |view: View| {
        state.update(|s| s.navigate(view));
        dom::scroll_to_top();
    });

    let on_back = move |_: leptos::ev::MouseEvent| {
        state.update(|s| s.back());
        dom::scroll_to_top();
    };

    let on_query = Callback::new(move |query: String| {
        state.update(|s| s.apply_query(&query));
    });

    let panel_class = move |view: View| view_class(state.with(|s| s.is_active(view)));

    view! {
        <Header state=state on_navigate=on_navigate />
        <main class="site-main">
            <section id=View::Home.element_id() class=move || panel_class(View::Home)>
                <SearchBox delay_ms=debounce_ms on_query=on_query />
                <RecipeGrid state=state on_select=on_select />
            </section>

            <section id=View::Recipe.element_id() class=move || panel_class(View::Recipe)>
                <button id="back-button" class="back-button" on:click=on_back>
                    {BACK_LABEL}
                </button>
                <RecipeDetail state=state />
            </section>

            <section id=View::About.element_id() class=move || panel_class(View::About)>
                <About />
            </section>
        </main>
    }
}
