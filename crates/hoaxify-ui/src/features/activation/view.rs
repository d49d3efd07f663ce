use crate::app::hooks::{use_api, use_bundle, use_route_param_request};
use crate::components::{Alert, AlertKind, Spinner};
use crate::core::request::RequestStatus;
use yew::prelude::*;

/// Calls the activation endpoint once per token in the URL.
#[function_component(ActivationPage)]
pub(crate) fn activation_page() -> Html {
    let bundle = use_bundle();
    let api = use_api();
    let status = use_route_param_request(
        move |token: String| async move { api.activate(&token).await },
        "token",
    );

    let body = match status {
        RequestStatus::Idle => html! {},
        RequestStatus::Loading => html! { <Spinner large={true} /> },
        RequestStatus::Success(response) => html! {
            <Alert kind={AlertKind::Success}>{response.message}</Alert>
        },
        RequestStatus::Fail(message) => html! {
            <Alert kind={AlertKind::Danger}>{message}</Alert>
        },
    };

    html! {
        <div>
            <h1 class="visually-hidden">{bundle.text("activation.title")}</h1>
            {body}
        </div>
    }
}
