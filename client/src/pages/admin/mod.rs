//! Admin back-office: staff-only CRUD screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/admin` shows one screen at a time, picked by the `tab` query parameter
//! so a reload keeps the current screen. `/admin/add-product` is a separate
//! route sharing the same gate. Every screen runs on `state::crud::CrudList`
//! and the generic calls in `net::resource`.

pub mod add_product;
pub mod categories;
pub mod methods;
pub mod orders;
pub mod product_editor;
pub mod products;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::session::{AdminAccess, SessionState, admin_access};
use crate::util::auth::install_unauth_redirect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminTab {
    Products,
    Categories,
    PaymentMethods,
    DeliveryMethods,
    Orders,
}

impl AdminTab {
    pub const ALL: [Self; 5] =
        [Self::Products, Self::Categories, Self::PaymentMethods, Self::DeliveryMethods, Self::Orders];

    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Categories => "categories",
            Self::PaymentMethods => "payment",
            Self::DeliveryMethods => "delivery",
            Self::Orders => "orders",
        }
    }

    /// Unknown or missing values open the products screen.
    #[must_use]
    pub fn from_param(raw: Option<&str>) -> Self {
        Self::ALL.into_iter().find(|tab| Some(tab.as_param()) == raw).unwrap_or(Self::Products)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Products => "Products",
            Self::Categories => "Categories",
            Self::PaymentMethods => "Payment methods",
            Self::DeliveryMethods => "Delivery methods",
            Self::Orders => "Orders",
        }
    }

    #[must_use]
    pub fn href(self) -> String {
        format!("/admin?tab={}", self.as_param())
    }
}

/// Renders `children` for staff only. Anonymous visitors are sent to `/auth`.
#[component]
pub fn AdminGate(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());
    let access = Memo::new(move |_| session.with(admin_access));

    move || match access.get() {
        AdminAccess::Pending | AdminAccess::Anonymous => {
            view! { <p class="page-status">"Loading..."</p> }.into_any()
        }
        AdminAccess::Denied => {
            view! {
                <div class="empty-state">
                    <h1>"Access denied"</h1>
                    <p>"This section is available to staff accounts only."</p>
                </div>
            }
                .into_any()
        }
        AdminAccess::Granted => children().into_any(),
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let query = use_query_map();
    let tab = Memo::new(move |_| AdminTab::from_param(query.read().get("tab").as_deref()));

    view! {
        <AdminGate>
            <div class="admin-page">
                <nav class="admin-tabs">
                    {AdminTab::ALL
                        .into_iter()
                        .map(|t| {
                            view! {
                                <A
                                    href=t.href()
                                    attr:class=move || {
                                        if tab.get() == t { "admin-tabs__tab admin-tabs__tab--active" } else { "admin-tabs__tab" }
                                    }
                                >
                                    {t.label()}
                                </A>
                            }
                        })
                        .collect_view()}
                    <A href="/admin/add-product" attr:class="btn btn--primary admin-tabs__add">
                        "Add product"
                    </A>
                </nav>
                {move || match tab.get() {
                    AdminTab::Products => view! { <products::ProductsAdmin/> }.into_any(),
                    AdminTab::Categories => view! { <categories::CategoriesAdmin/> }.into_any(),
                    AdminTab::PaymentMethods => view! { <methods::PaymentMethodsAdmin/> }.into_any(),
                    AdminTab::DeliveryMethods => view! { <methods::DeliveryMethodsAdmin/> }.into_any(),
                    AdminTab::Orders => view! { <orders::OrdersAdmin/> }.into_any(),
                }}
            </div>
        </AdminGate>
    }
}
