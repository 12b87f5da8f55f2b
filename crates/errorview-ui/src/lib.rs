//! Dioxus components for showing an optional error with an optional retry action.

pub mod ui;
