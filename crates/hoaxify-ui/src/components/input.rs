//! Labelled text input with an optional validation message.
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct InputProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub kind: AttrValue,
    #[prop_or_default]
    pub help: Option<AttrValue>,
    pub on_input: Callback<String>,
}

#[function_component(Input)]
pub(crate) fn input(props: &InputProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_input.emit(input.value());
            }
        })
    };
    let invalid = props.help.is_some();
    html! {
        <div class="mb-3">
            <label for={props.id.clone()} class="form-label">{props.label.clone()}</label>
            <input
                id={props.id.clone()}
                type={props.kind.clone()}
                class={classes!("form-control", invalid.then_some("is-invalid"))}
                value={props.value.clone()}
                {oninput}
            />
            {if let Some(help) = &props.help {
                html! { <div class="invalid-feedback">{help.clone()}</div> }
            } else { html! {} }}
        </div>
    }
}
