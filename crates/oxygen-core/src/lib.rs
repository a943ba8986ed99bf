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

//! DOM-free state models for the Oxygen widget set.
//!
//! Layout: `slider/` (value model, pointer tracker, drag state machine),
//! `checkbox.rs`, `button.rs`, `keyboard.rs`, `text.rs` (input + textarea),
//! `tabs.rs`, `dialog.rs`, `icons/` (process-wide icon registry), `theme.rs`
//! (CSS custom properties and overrides), `reflect.rs` (attribute reflection)
//! and `emitter.rs` (change notifications shared by every widget).
//!
//! Browser bindings live in `oxygen-ui`; everything here runs on the host.

pub mod button;
pub mod checkbox;
pub mod dialog;
pub mod emitter;
pub mod error;
pub mod icons;
pub mod keyboard;
pub mod reflect;
pub mod slider;
pub mod tabs;
pub mod text;
pub mod theme;

pub use button::Button;
pub use checkbox::Checkbox;
pub use dialog::{Dialog, DialogEvent};
pub use emitter::{ChangeEmitter, SubscriptionId};
pub use error::{IconError, IconResult, ThemeError, ThemeResult};
pub use icons::{Icon, IconRegistry, IconSet, QualifiedIconName};
pub use keyboard::{Key, KeyOutcome, KeyboardActivation};
pub use reflect::Attributes;
pub use slider::{DragMachine, DragState, Slider, SliderInput, TrackRect, ValueModel};
pub use tabs::{Orientation, TabGroup, direct_child_index};
pub use text::{InputType, Selection, TextField};
pub use theme::{ThemeConfig, ThemeMode, mode_selector};
