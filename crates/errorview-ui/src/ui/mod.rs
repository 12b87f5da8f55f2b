mod app;
pub mod components;

pub use app::{App, DemoState};
