#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
//! Yew bindings for the Oxygen widgets plus the demo page.
//!
//! Behaviour lives in `oxygen-core`; components here translate browser
//! events into model calls and reflect model attributes back into markup.
//! Host-testable helpers (`markup`, `styles`, `sync`, `demo`) compile everywhere; the
//! components and app shell are wasm32 only.

pub mod demo;
pub mod markup;
pub mod styles;
pub mod sync;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
