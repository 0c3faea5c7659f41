//! Category tile linking to the category page.

use leptos::prelude::*;
use leptos_router::components::A;

use super::product_card::PLACEHOLDER_IMAGE;
use crate::net::types::Category;

#[component]
pub fn CategoryCard(category: Category) -> impl IntoView {
    let href = format!("/categories/{}", category.id);
    let image = category.image.clone().filter(|i| !i.is_empty()).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned());
    let description = category.description.clone().unwrap_or_default();
    let has_description = !description.is_empty();

    view! {
        <A href=href attr:class="category-card">
            <img class="category-card__image" src=image alt=category.name.clone() loading="lazy"/>
            <h3 class="category-card__name">{category.name.clone()}</h3>
            <Show when=move || has_description>
                <p class="category-card__description">{description.clone()}</p>
            </Show>
        </A>
    }
}
