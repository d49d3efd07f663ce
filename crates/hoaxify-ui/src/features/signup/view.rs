use crate::app::hooks::{use_api, use_bundle};
use crate::components::{Alert, AlertKind, Input, Spinner};
use crate::features::signup::state::{SignUpField, SignUpForm};
use yew::platform::spawn_local;
use yew::prelude::*;

#[function_component(SignUpPage)]
pub(crate) fn sign_up_page() -> Html {
    let bundle = use_bundle();
    let t = |key: &str| bundle.text(key);
    let api = use_api();
    let form = use_mut_ref(SignUpForm::default);
    let redraw = use_force_update();

    let on_field = |field: SignUpField| {
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
            let Some(body) = form.borrow_mut().begin_submit() else {
                return;
            };
            redraw.force_update();
            let form = form.clone();
            let redraw = redraw.clone();
            let api = api.clone();
            let generic = generic.clone();
            spawn_local(async move {
                let result = api.sign_up(&body).await;
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

    let help = |field: SignUpField| snapshot.field_error(field).map(|msg| AttrValue::from(msg.to_string()));
    let mismatch = snapshot
        .password_mismatch()
        .then(|| AttrValue::from(t("signUp.passwordMismatch")));

    html! {
        <div class="col-lg-6 offset-lg-3">
            <form class="card" data-testid="form-sign-up" onsubmit={on_submit}>
                <div class="card-header text-center">
                    <h1>{t("signUp.title")}</h1>
                </div>
                <div class="card-body">
                    <Input
                        id="username"
                        label={t("signUp.username")}
                        value={snapshot.username.clone()}
                        help={help(SignUpField::Username)}
                        on_input={on_field(SignUpField::Username)}
                    />
                    <Input
                        id="email"
                        label={t("signUp.email")}
                        value={snapshot.email.clone()}
                        help={help(SignUpField::Email)}
                        on_input={on_field(SignUpField::Email)}
                    />
                    <Input
                        id="password"
                        kind="password"
                        label={t("signUp.password")}
                        value={snapshot.password.clone()}
                        help={help(SignUpField::Password)}
                        on_input={on_field(SignUpField::Password)}
                    />
                    <Input
                        id="passwordRepeat"
                        kind="password"
                        label={t("signUp.passwordRepeat")}
                        value={snapshot.password_repeat.clone()}
                        help={mismatch}
                        on_input={on_field(SignUpField::PasswordRepeat)}
                    />
                    {if let Some(error) = snapshot.submit.generic_error() {
                        html! { <Alert kind={AlertKind::Danger}>{error.to_string()}</Alert> }
                    } else { html! {} }}
                    <div class="text-center">
                        <button class="btn btn-primary" disabled={!snapshot.can_submit()}>
                            {if snapshot.submit.is_submitting() {
                                html! { <Spinner /> }
                            } else { html! {} }}
                            {t("signUp.submit")}
                        </button>
                    </div>
                </div>
            </form>
        </div>
    }
}
