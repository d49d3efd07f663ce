//! Account signup.
//!
//! # Design
//! - Form rules live in `state` and are tested natively.
//! - The view owns the form in a mut-ref so the single-flight check is
//!   synchronous with the click that triggers it.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
