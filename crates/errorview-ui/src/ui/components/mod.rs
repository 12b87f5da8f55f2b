mod alert_icon;
mod error_display_view;

pub use alert_icon::AlertIcon;
pub use error_display_view::{
    ErrorDisplayView, ErrorDisplayViewProps, UNKNOWN_ERROR_MESSAGE, display_message,
};
