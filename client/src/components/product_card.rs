//! Product tile used in catalog grids.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Product;
use crate::util::format::format_price;

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let href = format!("/product/{}", product.id);
    let image = product.image.clone().filter(|i| !i.is_empty()).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned());

    view! {
        <A href=href attr:class="product-card">
            <img class="product-card__image" src=image alt=product.name.clone() loading="lazy"/>
            <div class="product-card__body">
                <h3 class="product-card__name">{product.name.clone()}</h3>
                <span class="product-card__price">{format_price(product.price)}</span>
            </div>
        </A>
    }
}

/// Grid of product tiles with an empty-state message.
#[component]
pub fn ProductGrid(#[prop(into)] products: Signal<Vec<Product>>, #[prop(into)] empty_text: String) -> impl IntoView {
    view! {
        <Show
            when=move || !products.get().is_empty()
            fallback=move || view! { <p class="empty-state">{empty_text.clone()}</p> }
        >
            <div class="product-grid">
                <For
                    each=move || products.get()
                    key=|p| p.id
                    children=move |p| view! { <ProductCard product=p/> }
                />
            </div>
        </Show>
    }
}
