//! Language buttons shown under every page.
use crate::app::preferences::{log_persist_error, preferences};
use crate::core::store::AppStore;
use crate::i18n::LocaleCode;
use yew::prelude::*;
use yewdux::prelude::use_store;

#[function_component(LanguageSelector)]
pub(crate) fn language_selector() -> Html {
    let (store, dispatch) = use_store::<AppStore>();
    html! {
        <div class="text-center mt-3 language-selector">
            {for LocaleCode::all().into_iter().map(|locale| {
                let dispatch = dispatch.clone();
                let onclick = Callback::from(move |_: MouseEvent| {
                    dispatch.reduce_mut(|store| {
                        if let Err(err) = store.set_locale(locale, &preferences()) {
                            log_persist_error(&err);
                        }
                    });
                });
                let active = store.locale == locale;
                html! {
                    <button
                        type="button"
                        class={classes!("btn", "btn-link", active.then_some("fw-bold"))}
                        data-testid={format!("language-{}-selector", locale.code())}
                        title={locale.label()}
                        {onclick}
                    >
                        {locale.code().to_uppercase()}
                    </button>
                }
            })}
        </div>
    }
}
