//! Account activation page; request tracking lives in `core::request`.

#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
