// ABOUTME: Test helper utilities for mocking upload endpoints and host collaborators
// ABOUTME: Provides mockito servers, canned transports and a recording notifier

#[cfg(test)]
use async_trait::async_trait;
#[cfg(test)]
use mockito::{Server, ServerGuard};
#[cfg(test)]
use std::collections::VecDeque;
#[cfg(test)]
use std::sync::Mutex;

#[cfg(test)]
use crate::error::UploaderError;
#[cfg(test)]
use crate::notification::{Notification, Notifier};
#[cfg(test)]
use crate::request::RequestOptions;
#[cfg(test)]
use crate::transport::Transport;

#[cfg(test)]
pub async fn mock_upload_server() -> ServerGuard {
    Server::new_async().await
}

/// Transport that replays canned responses in order and records every request.
#[cfg(test)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<String, UploaderError>>>,
    pub requests: Mutex<Vec<RequestOptions>>,
}

#[cfg(test)]
impl ScriptedTransport {
    pub fn new(responses: Vec<Result<String, UploaderError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[cfg(test)]
#[async_trait]
impl Transport for ScriptedTransport {
    async fn request(&self, options: RequestOptions) -> Result<String, UploaderError> {
        self.requests.lock().unwrap().push(options);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(UploaderError::Network("no scripted response".to_string())))
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct RecordingNotifier {
    pub notifications: Mutex<Vec<Notification>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn titles(&self) -> Vec<String> {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.title.clone())
            .collect()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

#[cfg(test)]
pub fn mock_upload_config(url: &str) -> serde_json::Value {
    serde_json::json!({
        "picBed": {
            "web-uploader": {
                "url": url,
                "paramName": "file",
                "jsonPath": "data.url",
                "prefix": "https://cdn.test"
            }
        }
    })
}
