//! Application shell: providers, routing and boot.
//!
//! # Design
//! - The store is seeded from storage before the first render, so the nav bar
//!   and language never flash their defaults.
//! - The translation bundle is rebuilt only when the locale changes.

use crate::app::api::ApiCtx;
use crate::components::{LanguageSelector, NavBar};
use crate::core::routes::Route;
use crate::core::store::AppStore;
use crate::features::activation::view::ActivationPage;
use crate::features::login::view::LoginPage;
use crate::features::password_reset::view::{ResetRequestPage, ResetSetPage};
use crate::features::signup::view::SignUpPage;
use crate::features::users::view::{HomePage, UserPage};
use crate::i18n::TranslationBundle;
use gloo::console;
use gloo::utils::document;
use preferences::{api_base_url, browser_language, preferences};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

mod api;
pub(crate) mod hooks;
pub(crate) mod preferences;

#[function_component(HoaxifyApp)]
pub(crate) fn hoaxify_app() -> Html {
    let locale = use_selector(|store: &AppStore| store.locale);
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url()), ());
    let bundle = use_memo(|locale| TranslationBundle::new(*locale), *locale);

    use_effect_with_deps(
        |locale| {
            if let Some(root) = document().document_element() {
                if root.set_attribute("lang", locale.code()).is_err() {
                    console::warn!("could not set document language");
                }
            }
            || ()
        },
        *locale,
    );

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
                <BrowserRouter>
                    <NavBar />
                    <div class="container mt-3">
                        <Switch<Route> render={switch} />
                        <LanguageSelector />
                    </div>
                </BrowserRouter>
            </ContextProvider<TranslationBundle>>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    let page = match &route {
        Route::Home => html! { <HomePage /> },
        Route::SignUp => html! { <SignUpPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Activation { .. } => html! { <ActivationPage /> },
        Route::PasswordResetRequest => html! { <ResetRequestPage /> },
        Route::PasswordResetSet => html! { <ResetSetPage /> },
        Route::User { .. } => html! { <UserPage /> },
        Route::NotFound => html! { <NotFound /> },
    };
    html! { <div data-testid={route.page_id()}>{page}</div> }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    let bundle = hooks::use_bundle();
    html! {
        <div class="alert alert-secondary text-center">{bundle.text("notFound")}</div>
    }
}

/// Seed the store from storage and mount the app on `#root`.
pub fn run_app() {
    console_error_panic_hook::set_once();
    Dispatch::<AppStore>::new().set(AppStore::load(
        &preferences(),
        browser_language().as_deref(),
    ));
    if let Some(root) = document().get_element_by_id("root") {
        yew::Renderer::<HoaxifyApp>::with_root(root).render();
    } else {
        yew::Renderer::<HoaxifyApp>::new().render();
    }
}
