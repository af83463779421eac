//! Shared Dioxus components and state for the annotation sidebar apps.
//!
//! This crate provides:
//! - `store`: Reactive SidebarStore with Dioxus Signals
//! - `components`: Reusable RSX components (buttons, icons, error panel)

pub mod components;
pub mod store;
