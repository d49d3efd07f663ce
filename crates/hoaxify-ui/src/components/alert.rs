use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AlertKind {
    Success,
    Danger,
    Info,
}

impl AlertKind {
    const fn class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Danger => "alert-danger",
            Self::Info => "alert-info",
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct AlertProps {
    pub kind: AlertKind,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Alert)]
pub(crate) fn alert(props: &AlertProps) -> Html {
    html! {
        <div class={classes!("alert", props.kind.class())}>
            { for props.children.iter() }
        </div>
    }
}
