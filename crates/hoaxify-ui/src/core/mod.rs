//! Core, DOM-free primitives and helpers for the Web UI.
pub mod http;
pub mod persist;
pub mod request;
pub mod routes;
pub mod store;
pub mod submit;
