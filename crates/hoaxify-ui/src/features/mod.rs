//! Feature slices: one module per page, DOM-free state beside wasm-only views.

pub mod activation;
pub mod login;
pub mod password_reset;
pub mod signup;
pub mod users;
