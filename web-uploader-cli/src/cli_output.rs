// ABOUTME: Centralized CLI output utilities for consistent user-facing messages
// ABOUTME: Also delivers uploader notifications to the terminal

use owo_colors::OwoColorize;
use web_uploader_sdk::{Notification, Notifier};

/// Centralized CLI output utilities for consistent formatting
#[derive(Debug, Clone, Copy)]
pub struct CliOutput {
    use_color: bool,
}

impl CliOutput {
    /// Create CLI output utility with explicit color setting
    pub fn with_color(use_color: bool) -> Self {
        Self { use_color }
    }

    pub fn error(&self, message: &str) {
        eprintln!("{}", self.render("error:", message, Level::Error));
    }

    pub fn warning(&self, message: &str) {
        eprintln!("{}", self.render("warning:", message, Level::Warning));
    }

    pub fn success(&self, message: &str) {
        eprintln!("{}", self.render("success:", message, Level::Success));
    }

    fn render(&self, label: &str, message: &str, level: Level) -> String {
        if !self.use_color {
            return format!("{} {}", label, message);
        }

        let label = match level {
            Level::Error => label.red().bold().to_string(),
            Level::Warning => label.yellow().bold().to_string(),
            Level::Success => label.green().bold().to_string(),
        };
        format!("{} {}", label, message)
    }

    /// Plain-text form of a notification, one line
    pub fn format_notification(notification: &Notification) -> String {
        format!("{}: {}", notification.title, notification.body)
    }
}

#[derive(Clone, Copy)]
enum Level {
    Error,
    Warning,
    Success,
}

impl Notifier for CliOutput {
    fn notify(&self, notification: Notification) {
        self.warning(&Self::format_notification(&notification));
    }
}
