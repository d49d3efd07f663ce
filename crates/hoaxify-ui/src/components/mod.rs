//! Reusable view components.

pub(crate) mod alert;
pub(crate) mod input;
pub(crate) mod language_selector;
pub(crate) mod nav_bar;
pub(crate) mod route_link;
pub(crate) mod spinner;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use input::Input;
pub(crate) use language_selector::LanguageSelector;
pub(crate) use nav_bar::NavBar;
pub(crate) use route_link::RouteLink;
pub(crate) use spinner::Spinner;
