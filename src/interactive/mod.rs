//! Full-screen form interface

pub mod app;
mod rendering;

pub use app::{App, FieldKind, FieldState, FormField, run_tui};
