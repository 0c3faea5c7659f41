//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::components::toast::ToastHost;
use crate::pages::admin::{AdminPage, add_product::AddProductPage};
use crate::pages::{
    auth::AuthPage, basket::BasketPage, categories::CategoriesPage, category::CategoryPage, home::HomePage,
    product::ProductPage, profile::ProfilePage, search::SearchPage,
};
use crate::state::{basket::BasketState, notifications::NotificationState, session::SessionState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, basket and notification contexts, restores a
/// stored session in the browser, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let basket = RwSignal::new(BasketState::default());
    let notifications = RwSignal::new(NotificationState::default());

    provide_context(session);
    provide_context(basket);
    provide_context(notifications);

    // Effects only run in the browser, after hydration, so the server and
    // the first client render agree on the loading session.
    Effect::new(move || {
        session.update(|s| s.restore(crate::util::storage::load_session()));
        if session.with_untracked(SessionState::is_authenticated) {
            leptos::task::spawn_local(crate::util::auth::refresh_profile(session));
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Storefront"/>

        <Router>
            <Header/>
            <main class="site-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("categories") view=CategoriesPage/>
                    <Route path=(StaticSegment("categories"), ParamSegment("id")) view=CategoryPage/>
                    <Route path=(StaticSegment("product"), ParamSegment("id")) view=ProductPage/>
                    <Route path=StaticSegment("search") view=SearchPage/>
                    <Route path=StaticSegment("basket") view=BasketPage/>
                    <Route path=StaticSegment("auth") view=AuthPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("add-product")) view=AddProductPage/>
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
