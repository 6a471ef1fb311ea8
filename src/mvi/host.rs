//! Calls from the core out to the host UI.

use super::ToastDuration;

/// A widget showing a single line of text.
pub trait TextView {
    fn set_text(&self, text: &str);
}

/// Shows transient messages.
pub trait Notifier {
    fn notify(&self, message: &str, duration: ToastDuration);
}
