use super::components::ErrorDisplayView;
use dioxus::prelude::*;
use errorview_config::DisplayConfig;

const ERROR_VIEW_CSS: &str = include_str!("../assets/error-view.css");

/// What the demo shell shows: the current error, if any, and how often retry was pressed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemoState {
    pub error: Option<String>,
    pub retry_count: u32,
}

impl DemoState {
    pub fn simulate_failure(&mut self, message: &str) {
        log::warn!("Simulating failure: {message}");
        self.error = Some(message.to_string());
    }

    pub fn retry(&mut self) {
        self.retry_count += 1;
        log::info!("Retry #{} requested, clearing error", self.retry_count);
        self.error = None;
    }
}

/// Demo shell: simulate a failure, then clear it through the retry button.
#[component]
pub fn App(config: DisplayConfig) -> Element {
    let mut state = use_signal(DemoState::default);

    let simulated_error = config.simulated_error.clone();
    let current = state.read().clone();

    rsx! {
        style { {ERROR_VIEW_CSS} }
        div {
            class: "app-container",
            h1 { "errorview" }
            button {
                class: "simulate-button",
                onclick: move |_| state.write().simulate_failure(&simulated_error),
                "Simulate failure"
            }
            ErrorDisplayView {
                error: current.error.clone(),
                retry_label: config.retry_label.clone(),
                on_retry: Some(EventHandler::new(move |_: ()| state.write().retry())),
            }
            if current.error.is_none() {
                p { class: "status", "All good. Retries performed: {current.retry_count}" }
            }
        }
    }
}
