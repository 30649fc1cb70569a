use kitchen::detail::{
    DetailModel, INGREDIENTS_HEADING, INSTRUCTIONS_HEADING, PRINT_LABEL, TIPS_HEADER,
};
use kitchen::state::AppState;
use leptos::prelude::*;

use super::dom::print_page;
use crate::ui_model::ingredient_checkbox_class;

/// Detail panel for the selected recipe.
///
/// Re-rendered from scratch on every selection (tracked through the detail
/// epoch), which also drops all ingredient checkmarks. Toggling a checkbox
/// only touches that checkbox's class.
#[component]
pub(super) fn RecipeDetail(state: RwSignal<AppState>) -> impl IntoView {
    let epoch = Memo::new(move |_| state.with(|s| s.detail_epoch()));

    view! {
        <div id="recipe-detail">
            {move || {
                epoch.track();
                match state.with_untracked(|s| s.detail()) {
                    Some(detail) => view! { <DetailBody detail=detail state=state /> }.into_any(),
                    None => ().into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn DetailBody(detail: DetailModel, state: RwSignal<AppState>) -> impl IntoView {
    let DetailModel {
        id,
        title,
        subtitle,
        image_src,
        tips,
        ingredients,
        instructions,
    } = detail;

    let alt = title.clone();

    view! {
        <div class="recipe-detail-container" attr:data-recipe-id=id>
            {image_src.map(|src| view! {
                <div class="recipe-detail-image">
                    <img src=src alt=alt />
                </div>
            })}

            <div class="recipe-header">
                <h2 class="recipe-title">{title}</h2>
                {subtitle.map(|s| view! { <p class="recipe-meta">{s}</p> })}
            </div>

            {tips.map(|tips| view! {
                <div class="tips-section">
                    <div class="tips-header">{TIPS_HEADER}</div>
                    {tips
                        .into_iter()
                        .map(|tip| view! { <p class="tip-text">{tip}</p> })
                        .collect_view()}
                </div>
            })}

            <div class="recipe-content">
                <div class="ingredients-section">
                    <h3>{INGREDIENTS_HEADING}</h3>
                    <ul class="ingredients-list">
                        {ingredients
                            .into_iter()
                            .map(|row| {
                                let index = row.index;
                                view! {
                                    <li class="ingredient-item">
                                        <div
                                            class=move || {
                                                ingredient_checkbox_class(
                                                    state.with(|s| s.is_ingredient_checked(index)),
                                                )
                                            }
                                            on:click=move |_| {
                                                state.update(|s| {
                                                    s.toggle_ingredient(index);
                                                });
                                            }
                                        ></div>
                                        <span>{row.text}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div class="instructions-section">
                    <h3>{INSTRUCTIONS_HEADING}</h3>
                    <ol class="instructions-list">
                        {instructions
                            .into_iter()
                            .map(|step| view! {
                                <li class="instruction-step">
                                    <div class="step-number">{step.number}</div>
                                    <div class="step-text">{step.text}</div>
                                </li>
                            })
                            .collect_view()}
                    </ol>
                </div>
            </div>

            <button
                class="print-button"
                on:click=move |_| {
                    if let Err(e) = print_page() {
                        tracing::warn!("Print failed: {}", e);
                    }
                }
            >
                {PRINT_LABEL}
            </button>
        </div>
    }
}
