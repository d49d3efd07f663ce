use crate::app::hooks::{use_api, use_bundle};
use crate::components::{Alert, AlertKind, Input, Spinner};
use crate::core::routes::query_param;
use crate::features::password_reset::state::{ResetField, ResetRequestForm, ResetSetForm};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::use_location;

#[function_component(ResetRequestPage)]
pub(crate) fn reset_request_page() -> Html {
    let bundle = use_bundle();
    let t = |key: &str| bundle.text(key);
    let api = use_api();
    let form = use_mut_ref(ResetRequestForm::default);
    let redraw = use_force_update();

    let on_email = {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |value: String| {
            form.borrow_mut().set_email(value);
            redraw.force_update();
        })
    };

    let on_submit = {
        let form = form.clone();
        let redraw = redraw.clone();
        let generic = t("genericError");
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(body) = form.borrow_mut().begin_submit() else {
                return;
            };
            redraw.force_update();
            let form = form.clone();
            let redraw = redraw.clone();
            let api = api.clone();
            let generic = generic.clone();
            spawn_local(async move {
                let result = api.request_password_reset(&body).await;
                form.borrow_mut().finish_submit(result, &generic);
                redraw.force_update();
            });
        })
    };

    let snapshot = form.borrow().clone();
    let email_error = snapshot
        .submit
        .field_error("email")
        .map(|msg| AttrValue::from(msg.to_string()));

    html! {
        <div class="col-lg-6 offset-lg-3">
            <form class="card" onsubmit={on_submit}>
                <div class="card-header text-center">
                    <h1>{t("passwordReset.requestTitle")}</h1>
                </div>
                <div class="card-body">
                    <Input
                        id="email"
                        label={t("passwordReset.email")}
                        value={snapshot.email.clone()}
                        help={email_error}
                        on_input={on_email}
                    />
                    {if let Some(message) = snapshot.submit.success_message() {
                        html! { <Alert kind={AlertKind::Success}>{message.to_string()}</Alert> }
                    } else { html! {} }}
                    {if let Some(error) = snapshot.submit.generic_error() {
                        html! { <Alert kind={AlertKind::Danger}>{error.to_string()}</Alert> }
                    } else { html! {} }}
                    <div class="text-center">
                        <button class="btn btn-primary" disabled={!snapshot.can_submit()}>
                            {if snapshot.submit.is_submitting() {
                                html! { <Spinner /> }
                            } else { html! {} }}
                            {t("passwordReset.submit")}
                        </button>
                    </div>
                </div>
            </form>
        </div>
    }
}

#[function_component(ResetSetPage)]
pub(crate) fn reset_set_page() -> Html {
    let bundle = use_bundle();
    let t = |key: &str| bundle.text(key);
    let api = use_api();
    let location = use_location();
    let token = location
        .as_ref()
        .and_then(|location| query_param(location.query_str(), "tk"));
    let form = use_mut_ref(move || ResetSetForm::with_token(token));
    let redraw = use_force_update();

    let on_field = |field: ResetField| {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |value: String| {
            form.borrow_mut().set_field(field, value);
            redraw.force_update();
        })
    };

    let on_submit = {
        let form = form.clone();
        let redraw = redraw.clone();
        let generic = t("genericError");
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some((token, body)) = form.borrow_mut().begin_submit() else {
                return;
            };
            redraw.force_update();
            let form = form.clone();
            let redraw = redraw.clone();
            let api = api.clone();
            let generic = generic.clone();
            spawn_local(async move {
                let result = api.set_password(&token, &body).await;
                form.borrow_mut().finish_submit(result, &generic);
                redraw.force_update();
            });
        })
    };

    let snapshot = form.borrow().clone();
    if let Some(message) = snapshot.submit.success_message() {
        return html! {
            <div class="col-lg-6 offset-lg-3">
                <Alert kind={AlertKind::Success}>{message.to_string()}</Alert>
            </div>
        };
    }
    if snapshot.token.is_none() {
        return html! {
            <div class="col-lg-6 offset-lg-3">
                <Alert kind={AlertKind::Danger}>{t("passwordReset.missingToken")}</Alert>
            </div>
        };
    }

    let password_error = snapshot
        .submit
        .field_error("password")
        .map(|msg| AttrValue::from(msg.to_string()));
    let mismatch = snapshot
        .password_mismatch()
        .then(|| AttrValue::from(t("passwordReset.passwordMismatch")));

    html! {
        <div class="col-lg-6 offset-lg-3">
            <form class="card" onsubmit={on_submit}>
                <div class="card-header text-center">
                    <h1>{t("passwordReset.setTitle")}</h1>
                </div>
                <div class="card-body">
                    <Input
                        id="password"
                        kind="password"
                        label={t("passwordReset.password")}
                        value={snapshot.password.clone()}
                        help={password_error}
                        on_input={on_field(ResetField::Password)}
                    />
                    <Input
                        id="passwordRepeat"
                        kind="password"
                        label={t("passwordReset.passwordRepeat")}
                        value={snapshot.password_repeat.clone()}
                        help={mismatch}
                        on_input={on_field(ResetField::PasswordRepeat)}
                    />
                    {if let Some(error) = snapshot.submit.generic_error() {
                        html! { <Alert kind={AlertKind::Danger}>{error.to_string()}</Alert> }
                    } else { html! {} }}
                    <div class="text-center">
                        <button class="btn btn-primary" disabled={!snapshot.can_submit()}>
                            {if snapshot.submit.is_submitting() {
                                html! { <Spinner /> }
                            } else { html! {} }}
                            {t("passwordReset.submit")}
                        </button>
                    </div>
                </div>
            </form>
        </div>
    }
}
