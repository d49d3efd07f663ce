use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SpinnerProps {
    #[prop_or_default]
    pub large: bool,
}

#[function_component(Spinner)]
pub(crate) fn spinner(props: &SpinnerProps) -> Html {
    let class = if props.large {
        classes!("spinner-border")
    } else {
        classes!("spinner-border", "spinner-border-sm")
    };
    html! { <span class={class} role="status"></span> }
}
