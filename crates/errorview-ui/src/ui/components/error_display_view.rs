use super::AlertIcon;
use dioxus::prelude::*;
use errorview_config::DEFAULT_RETRY_LABEL;

/// Shown in place of an error whose text is empty or whitespace.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// Text to show for `error`, substituting a generic message for blank input.
pub fn display_message(error: &str) -> &str {
    if error.trim().is_empty() {
        UNKNOWN_ERROR_MESSAGE
    } else {
        error
    }
}

/// Inline error indicator with an optional retry button.
///
/// Renders nothing when `error` is `None`. The retry button appears only when
/// both `error` and `on_retry` are present, and `on_retry` is called from its
/// click handler and nowhere else.
#[component]
pub fn ErrorDisplayView(
    error: Option<String>,
    #[props(default)] on_retry: Option<EventHandler<()>>,
    #[props(default = DEFAULT_RETRY_LABEL.to_string())] retry_label: String,
) -> Element {
    let Some(ref error) = error else {
        return rsx! {};
    };
    let message = display_message(error);

    rsx! {
        div {
            class: "error-display",
            "role": "alert",
            AlertIcon {}
            p { class: "error-display-message", "{message}" }
            if let Some(on_retry) = on_retry {
                button {
                    class: "retry-button",
                    onclick: move |_| {
                        log::debug!("Retry button pressed");
                        on_retry.call(());
                    },
                    "{retry_label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn render_props(props: ErrorDisplayViewProps) -> String {
        let mut dom = VirtualDom::new_with_props(ErrorDisplayView, props);
        dom.rebuild_in_place();
        render(&dom)
    }

    #[rstest]
    #[case("Network timeout occurred", "Network timeout occurred")]
    #[case("", UNKNOWN_ERROR_MESSAGE)]
    #[case("   \n\t", UNKNOWN_ERROR_MESSAGE)]
    #[case(" padded ", " padded ")]
    fn test_display_message(#[case] error: &str, #[case] expected: &str) {
        assert_eq!(display_message(error), expected);
    }

    #[test]
    fn test_renders_message_without_retry_button() {
        let html = render_props(ErrorDisplayViewProps {
            error: Some("Network timeout occurred".to_string()),
            on_retry: None,
            retry_label: DEFAULT_RETRY_LABEL.to_string(),
        });

        assert!(html.contains("error-display"));
        assert!(html.contains("Network timeout occurred"));
        assert!(html.contains("<svg"));
        assert!(!html.contains("retry-button"));
    }

    #[test]
    fn test_renders_nothing_without_error() {
        let html = render_props(ErrorDisplayViewProps {
            error: None,
            on_retry: None,
            retry_label: DEFAULT_RETRY_LABEL.to_string(),
        });

        assert!(!html.contains("error-display"));
        assert!(!html.contains("retry-button"));
    }

    #[test]
    fn test_blank_error_uses_fallback_message() {
        let html = render_props(ErrorDisplayViewProps {
            error: Some("  ".to_string()),
            on_retry: None,
            retry_label: DEFAULT_RETRY_LABEL.to_string(),
        });

        assert!(html.contains(UNKNOWN_ERROR_MESSAGE));
    }
}
