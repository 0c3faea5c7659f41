//! Product detail page.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use super::parse_route_id;
use crate::components::add_to_basket::AddToBasket;
use crate::components::product_card::PLACEHOLDER_IMAGE;
use crate::net::types::Product;
use crate::util::format::format_price;

#[derive(Clone, Debug, PartialEq)]
enum ProductView {
    Loading,
    Loaded(Product),
    Failed(String),
}

#[component]
pub fn ProductPage() -> impl IntoView {
    let params = use_params_map();
    let product_id = Memo::new(move |_| parse_route_id(params.read().get("id")));
    let state = RwSignal::new(ProductView::Loading);

    Effect::new(move || {
        let Some(id) = product_id.get() else {
            state.set(ProductView::Failed("Product not found".to_owned()));
            return;
        };
        state.set(ProductView::Loading);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_product(id).await {
                Ok(product) => state.set(ProductView::Loaded(product)),
                Err(err) => {
                    log::warn!("product {id} unavailable: {err}");
                    state.set(ProductView::Failed(err.user_message()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <div class="product-page">
            {move || match state.get() {
                ProductView::Loading => view! { <p class="page-status">"Loading..."</p> }.into_any(),
                ProductView::Failed(message) => view! { <p class="page-error">{message}</p> }.into_any(),
                ProductView::Loaded(product) => view! { <ProductDetails product=product/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ProductDetails(product: Product) -> impl IntoView {
    let image = product.image.clone().filter(|i| !i.is_empty()).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned());
    let category_link = product.category.map(|id| format!("/categories/{id}"));
    let description = product.description.clone().unwrap_or_default();

    view! {
        <article class="product-details">
            <img class="product-details__image" src=image alt=product.name.clone()/>
            <div class="product-details__info">
                <h1>{product.name.clone()}</h1>
                <p class="product-details__price">{format_price(product.price)}</p>
                <p class="product-details__description">{description}</p>
                {category_link
                    .map(|href| {
                        view! {
                            <A href=href attr:class="product-details__category">
                                "More from this category"
                            </A>
                        }
                    })}
                <AddToBasket product=product/>
            </div>
        </article>
    }
}
