//! User directory and profile pages.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
