// ABOUTME: Notification events the uploader emits to its host
// ABOUTME: Defines the payload and the host-side delivery trait

use serde::Serialize;

use crate::constants::notifications;
use crate::error::UploaderError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn parse_failed() -> Self {
        Self::new(
            notifications::PARSE_FAILED_TITLE,
            notifications::PARSE_FAILED_BODY,
        )
    }

    pub fn upload_failed(error: &UploaderError) -> Self {
        Self::new(notifications::UPLOAD_FAILED_TITLE, error.to_json())
    }
}

/// Host channel that shows notifications to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}
