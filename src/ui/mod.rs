//! UI components for Jarvis
//!
//! The host page and the floating chat widget, built with Dioxus.

pub mod layout;
pub mod widget;

pub use layout::Layout;
