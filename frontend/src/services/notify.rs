//! User notifications.
//!
//! Every failure ends up as a blocking alert. Callers go through
//! [`Notifier`] so the routing can be checked without a browser.

use crate::types::AppError;

/// Something that can show a message to the user.
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// `window.alert()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserAlert;

impl Notifier for BrowserAlert {
    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.alert_with_message(message) {
                    log::error!("Failed to show alert: {:?}", e);
                }
            }
            None => log::error!("No window to alert on: {}", message),
        }
    }
}

/// Log an error and show it to the user.
pub fn notify_error(notifier: &impl Notifier, error: &AppError) {
    log::warn!("⚠️ {}", error);
    notifier.alert(&error.to_string());
}

/// Collects alerts instead of showing them.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingNotifier(std::cell::RefCell<Vec<String>>);

#[cfg(test)]
impl RecordingNotifier {
    pub(crate) fn messages(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.0.borrow_mut().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_are_alerted_with_their_display_text() {
        let recorder = RecordingNotifier::default();

        notify_error(&recorder, &AppError::NoFile);
        notify_error(&recorder, &AppError::Server("Please upload a valid PDF file".into()));

        assert_eq!(
            recorder.messages(),
            vec![
                "Please select a PDF file first!".to_string(),
                "Error: Please upload a valid PDF file".to_string(),
            ]
        );
    }
}
