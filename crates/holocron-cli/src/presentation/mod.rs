//! # Presentation Layer
//!
//! Turns engine state into something printable, following a small MVVM split:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//! ```
//!
//! * `view_models/`: serializable data contracts. The JSON output is exactly
//!   these structs; no domain types leak through.
//! * `presenters/`: pure functions from the store, filters and page window to
//!   view models (name lookups, ordinals, paging hints).
//! * `views/`: `fmt::Display` layouts for plain output.
//! * `renderers/`: JSON vs text, badges and tips, color on terminals.
//! * `formatters/`: small string helpers shared by views.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};
