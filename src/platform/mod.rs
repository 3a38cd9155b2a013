//! Platform abstraction layer
//!
//! Browser bindings live in `dom` (wasm32 only). Native builds drive the core
//! directly from `main.rs`.

#[cfg(target_arch = "wasm32")]
pub mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::Dom;
