//! Top navigation bar.
//!
//! # Design
//! - Link set comes from `AppStore::nav_items`, so the logged-in/out layout is
//!   decided in one DOM-free place.
//! - Logout clears the session first; the server call is fire-and-forget.

use crate::app::hooks::{use_api, use_bundle};
use crate::app::preferences::{log_persist_error, preferences};
use crate::components::RouteLink;
use crate::core::routes::Route;
use crate::core::store::{AppStore, NavItem};
use gloo::console;
use yew::platform::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_store;

#[function_component(NavBar)]
pub(crate) fn nav_bar() -> Html {
    let bundle = use_bundle();
    let api = use_api();
    let (store, dispatch) = use_store::<AppStore>();

    let on_logout = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        dispatch.reduce_mut(|store| {
            if let Err(err) = store.sign_out(&preferences()) {
                log_persist_error(&err);
            }
        });
        let api = api.clone();
        spawn_local(async move {
            if let Err(err) = api.logout().await {
                console::error!("logout request failed", err.to_string());
            }
        });
    });

    html! {
        <nav class="navbar navbar-expand bg-body-tertiary shadow-sm">
            <div class="container">
                <RouteLink to={Route::Home} class={classes!("navbar-brand")}>
                    {"Hoaxify"}
                </RouteLink>
                <ul class="navbar-nav">
                    {for store.nav_items().into_iter().map(|item| match item {
                        NavItem::Link { test_id, label_key, route } => html! {
                            <li class="nav-item">
                                <RouteLink
                                    to={route}
                                    class={classes!("nav-link")}
                                    test_id={AttrValue::Static(test_id)}
                                >
                                    {bundle.text(label_key)}
                                </RouteLink>
                            </li>
                        },
                        NavItem::Logout => html! {
                            <li class="nav-item">
                                <a
                                    href="/"
                                    class="nav-link"
                                    data-testid="link-logout"
                                    onclick={on_logout.clone()}
                                >
                                    {bundle.text("nav.logout")}
                                </a>
                            </li>
                        },
                    })}
                </ul>
            </div>
        </nav>
    }
}
