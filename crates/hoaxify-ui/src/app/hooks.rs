//! Shared hooks: translations, API access and tracked requests.
//!
//! # Design
//! - Every keyed fetch runs through a [`RequestTracker`] kept in a mut-ref so
//!   all spawned futures see the same sequence counter.
//! - Results that lose the race are dropped and logged at debug level.

use crate::app::api::ApiCtx;
use crate::app::preferences::api_base_url;
use crate::core::http::ApiError;
use crate::core::request::{RequestStatus, RequestTracker, ResolveOutcome};
use crate::core::routes::Route;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::services::api::ApiClient;
use gloo::console;
use std::future::Future;
use std::rc::Rc;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::use_route;

/// Active translation bundle, English when no provider is mounted.
#[hook]
pub(crate) fn use_bundle() -> TranslationBundle {
    use_context::<TranslationBundle>().unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE))
}

/// Shared API client.
#[hook]
pub(crate) fn use_api() -> Rc<ApiClient> {
    use_context::<ApiCtx>().map_or_else(
        || Rc::new(ApiClient::new(api_base_url())),
        |ctx| ctx.client,
    )
}

/// Issue `fetch(key)` whenever `key` changes; only the newest issue is shown.
///
/// A `None` key issues nothing and leaves the status idle.
#[hook]
pub(crate) fn use_tracked_request<K, T, F, Fut>(key: Option<K>, fetch: F) -> RequestStatus<T>
where
    K: Clone + PartialEq + std::fmt::Debug + 'static,
    T: Clone + 'static,
    F: FnOnce(K) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let generic = use_bundle().text("genericError");
    let tracker = use_mut_ref(RequestTracker::<T>::default);
    let status = use_state(RequestStatus::<T>::default);
    {
        let tracker = tracker.clone();
        let status = status.clone();
        use_effect_with_deps(
            move |key: &Option<K>| {
                if let Some(key) = key.clone() {
                    let ticket = tracker.borrow_mut().begin();
                    status.set(RequestStatus::Loading);
                    let label = format!("{key:?}");
                    let pending = fetch(key);
                    spawn_local(async move {
                        let result = pending.await;
                        let outcome = tracker.borrow_mut().resolve(ticket, result, &generic);
                        match outcome {
                            ResolveOutcome::Applied => {
                                status.set(tracker.borrow().status().clone());
                            }
                            ResolveOutcome::Superseded => {
                                console::debug!(
                                    "dropped superseded response",
                                    label,
                                    ticket.seq().to_string()
                                );
                            }
                        }
                    });
                }
                || ()
            },
            key,
        );
    }
    (*status).clone()
}

/// Bind `fetch` to the named parameter of the current route.
#[hook]
pub(crate) fn use_route_param_request<T, F, Fut>(
    fetch: F,
    param: &'static str,
) -> RequestStatus<T>
where
    T: Clone + 'static,
    F: FnOnce(String) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let route = use_route::<Route>();
    let value = route
        .as_ref()
        .and_then(|route| route.param(param))
        .map(ToString::to_string);
    use_tracked_request(value, fetch)
}
