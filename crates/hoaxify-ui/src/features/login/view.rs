use crate::app::hooks::{use_api, use_bundle};
use crate::app::preferences::{log_persist_error, preferences};
use crate::components::{Alert, AlertKind, Input, RouteLink, Spinner};
use crate::core::routes::Route;
use crate::core::store::AppStore;
use crate::features::login::state::LoginForm;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::use_navigator;
use yewdux::prelude::Dispatch;

#[function_component(LoginPage)]
pub(crate) fn login_page() -> Html {
    let bundle = use_bundle();
    let t = |key: &str| bundle.text(key);
    let api = use_api();
    let navigator = use_navigator();
    let form = use_mut_ref(LoginForm::default);
    let redraw = use_force_update();

    let on_email = {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |value: String| {
            form.borrow_mut().set_email(value);
            redraw.force_update();
        })
    };
    let on_password = {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |value: String| {
            form.borrow_mut().set_password(value);
            redraw.force_update();
        })
    };

    let on_submit = {
        let form = form.clone();
        let redraw = redraw.clone();
        let generic = t("genericError");
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(credentials) = form.borrow_mut().begin_submit() else {
                return;
            };
            redraw.force_update();
            let form = form.clone();
            let redraw = redraw.clone();
            let api = api.clone();
            let navigator = navigator.clone();
            let generic = generic.clone();
            spawn_local(async move {
                let result = api.login(&credentials).await;
                let user = form.borrow_mut().finish_submit(result, &generic);
                match user {
                    Some(user) => {
                        Dispatch::<AppStore>::new().reduce_mut(|store| {
                            if let Err(err) = store.sign_in(user, &preferences()) {
                                log_persist_error(&err);
                            }
                        });
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Home);
                        }
                    }
                    None => redraw.force_update(),
                }
            });
        })
    };

    let snapshot = form.borrow().clone();

    html! {
        <div class="col-lg-6 offset-lg-3">
            <form class="card" onsubmit={on_submit}>
                <div class="card-header text-center">
                    <h1>{t("login.title")}</h1>
                </div>
                <div class="card-body">
                    <Input
                        id="email"
                        label={t("login.email")}
                        value={snapshot.email.clone()}
                        on_input={on_email}
                    />
                    <Input
                        id="password"
                        kind="password"
                        label={t("login.password")}
                        value={snapshot.password.clone()}
                        on_input={on_password}
                    />
                    {if let Some(error) = snapshot.submit.generic_error() {
                        html! { <Alert kind={AlertKind::Danger}>{error.to_string()}</Alert> }
                    } else { html! {} }}
                    <div class="text-center">
                        <button class="btn btn-primary" disabled={!snapshot.can_submit()}>
                            {if snapshot.submit.is_submitting() {
                                html! { <Spinner /> }
                            } else { html! {} }}
                            {t("login.submit")}
                        </button>
                    </div>
                </div>
                <div class="card-footer text-center">
                    <RouteLink to={Route::PasswordResetRequest}>
                        {t("login.forgotPassword")}
                    </RouteLink>
                </div>
            </form>
        </div>
    }
}
