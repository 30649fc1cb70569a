use kitchen::state::AppState;
use kitchen::view::View;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::dom::data_view;

use crate::ui_model::{nav_link_class, NavLink, BRAND};

#[component]
pub(super) fn Header(state: RwSignal<AppState>, on_navigate: Callback<View>) -> impl IntoView {
    view! {
        <header class="site-header">
            <h1 class="brand">{BRAND}</h1>
            <nav class="site-nav">
                {NavLink::all()
                    .iter()
                    .map(|&link| {
                        let target = link.view();
                        view! {
                            <a
                                href="#"
                                class=move || nav_link_class(state.with(|s| s.active_nav() == target))
                                attr:data-view=target.key()
                                on:click=move |ev: MouseEvent| {
                                    ev.prevent_default();
                                    match data_view(&ev) {
                                        Some(view) => on_navigate.run(view),
                                        None => tracing::warn!("Nav link without a known data-view"),
                                    }
                                }
                            >
                                {link.label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}

#[component]
pub(super) fn About() -> impl IntoView {
    view! {
        <div class="about-container">
            <h2>"About the kitchen"</h2>
            <p>
                "These are Apa's recipes, written down while he explained them. "
                "He will tell you each one is wrong the moment you make it."
            </p>
            <p>"Tick off ingredients as you go, or print a recipe and stick it on the fridge."</p>
        </div>
    }
}
