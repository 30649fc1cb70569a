use kitchen::grid::{CardModel, GridContent};
use kitchen::state::AppState;
use leptos::prelude::*;

/// Home card grid. A change of load state or of the displayed set
/// re-projects the grid and replaces its whole content, handlers included.
/// Detail and navigation changes leave it alone.
#[component]
pub(super) fn RecipeGrid(state: RwSignal<AppState>, on_select: Callback<String>) -> impl IntoView {
    let inputs = Memo::new(move |_| {
        state.with(|s| (s.load_state(), s.displayed_indices().to_vec()))
    });

    view! {
        <div id="recipe-grid" class="recipe-grid">
            {move || {
                inputs.track();
                match state.with_untracked(GridContent::project) {
                    GridContent::Loading => ().into_any(),
                    GridContent::Failed(message) => view! { <p class="error-state">{message}</p> }.into_any(),
                    GridContent::Empty(message) => view! { <p class="empty-state">{message}</p> }.into_any(),
                    GridContent::Cards(cards) => cards
                        .into_iter()
                        .map(|card| view! { <RecipeCard card=card on_select=on_select /> })
                        .collect_view()
                        .into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn RecipeCard(card: CardModel, on_select: Callback<String>) -> impl IntoView {
    let CardModel {
        id,
        title,
        subtitle,
        description,
        image_src,
        tags,
    } = card;

    let alt = title.clone();
    let data_id = id.clone();

    view! {
        <div
            class="recipe-card"
            attr:data-recipe-id=data_id
            on:click=move |_| on_select.run(id.clone())
        >
            {image_src.map(|src| view! {
                <div class="recipe-card-image">
                    <img src=src alt=alt loading="lazy" />
                </div>
            })}
            <div class="recipe-card-content">
                <h3>{title}</h3>
                {subtitle.map(|s| view! { <p class="recipe-subtitle">{s}</p> })}
                <p class="recipe-description">{description}</p>
                <div class="recipe-tags">
                    {tags
                        .into_iter()
                        .map(|tag| {
                            let class = tag.class();
                            view! { <span class=class>{tag.label}</span> }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
