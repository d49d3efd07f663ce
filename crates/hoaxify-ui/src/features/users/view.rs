use crate::app::hooks::{use_api, use_bundle, use_route_param_request, use_tracked_request};
use crate::components::{Alert, AlertKind, RouteLink, Spinner};
use crate::core::request::RequestStatus;
use crate::core::routes::Route;
use crate::features::users::state::{PAGE_SIZE, UserListState};
use yew::prelude::*;

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    html! {
        <div class="row">
            <div class="col-lg-6 offset-lg-3">
                <UserList />
            </div>
        </div>
    }
}

/// Paged directory; a newer page request always wins over an older one.
#[function_component(UserList)]
fn user_list() -> Html {
    let bundle = use_bundle();
    let api = use_api();
    let page_index = use_state(|| 0_u32);
    let status = use_tracked_request(Some(*page_index), move |page| async move {
        api.list_users(page, PAGE_SIZE).await
    });

    let go_to = |target: Option<u32>| {
        let page_index = page_index.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(target) = target {
                page_index.set(target);
            }
        })
    };

    let body = match status {
        RequestStatus::Idle => html! {},
        RequestStatus::Loading => html! {
            <div class="card-body text-center"><Spinner /></div>
        },
        RequestStatus::Fail(message) => html! {
            <div class="card-body"><Alert kind={AlertKind::Danger}>{message}</Alert></div>
        },
        RequestStatus::Success(page) => {
            let state = UserListState { page };
            if state.page.content.is_empty() {
                html! {
                    <div class="card-body">
                        <Alert kind={AlertKind::Info}>{bundle.text("userList.empty")}</Alert>
                    </div>
                }
            } else {
                html! {
                    <>
                        <ul class="list-group list-group-flush">
                            {for state.page.content.iter().map(|user| html! {
                                <li class="list-group-item list-group-item-action">
                                    <RouteLink to={Route::User { id: user.id.to_string() }}>
                                        {user.username.clone()}
                                    </RouteLink>
                                </li>
                            })}
                        </ul>
                        <div class="card-footer">
                            {if state.has_previous() {
                                html! {
                                    <button
                                        class="btn btn-outline-secondary btn-sm"
                                        onclick={go_to(state.previous_index())}
                                    >
                                        {bundle.text("userList.previous")}
                                    </button>
                                }
                            } else { html! {} }}
                            {if state.has_next() {
                                html! {
                                    <button
                                        class="btn btn-outline-secondary btn-sm float-end"
                                        onclick={go_to(state.next_index())}
                                    >
                                        {bundle.text("userList.next")}
                                    </button>
                                }
                            } else { html! {} }}
                        </div>
                    </>
                }
            }
        }
    };

    html! {
        <div class="card">
            <div class="card-header text-center">
                <h3>{bundle.text("userList.title")}</h3>
            </div>
            {body}
        </div>
    }
}

#[function_component(UserPage)]
pub(crate) fn user_page() -> Html {
    let bundle = use_bundle();
    let api = use_api();
    let status = use_route_param_request(
        move |id: String| async move { api.get_user(&id).await },
        "id",
    );

    match status {
        RequestStatus::Idle => html! {},
        RequestStatus::Loading => html! { <Spinner large={true} /> },
        RequestStatus::Fail(message) => html! {
            <Alert kind={AlertKind::Danger}>{message}</Alert>
        },
        RequestStatus::Success(user) => html! {
            <div class="card">
                <div class="card-header text-center">
                    <h3>{user.username}</h3>
                </div>
                <div class="card-body text-center">
                    <span class="text-muted">{bundle.text("user.email")}{": "}</span>
                    {user.email}
                </div>
            </div>
        },
    }
}
