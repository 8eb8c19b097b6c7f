// ABOUTME: Error types for the web uploader with user-friendly messages
// ABOUTME: Covers configuration, custom JSON, payload and transport failure modes

use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploaderError {
    #[error("Can't find uploader config")]
    ConfigurationMissing,

    #[error("Invalid uploader config: {0}")]
    InvalidConfiguration(String),

    #[error("Malformed {field} JSON: {reason}")]
    MalformedCustomJson { field: &'static str, reason: String },

    #[error("Image {file_name} has an unreadable base64 payload: {reason}")]
    InvalidPayload { file_name: String, reason: String },

    #[error("Image {0} has no buffer or base64 payload")]
    MissingImageData(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout: Request took too long to complete")]
    Timeout,

    #[error("Upload endpoint returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },
}

impl UploaderError {
    pub fn help_text(&self) -> Option<&'static str> {
        match self {
            UploaderError::ConfigurationMissing => {
                Some("Add a [picBed.web-uploader] table with url and paramName to your config")
            }
            UploaderError::InvalidConfiguration(_) => {
                Some("Both url and paramName are required; url must be an absolute http(s) URL")
            }
            UploaderError::MalformedCustomJson { .. } => {
                Some("customHeader and customBody must be JSON objects, e.g. {\"key\":\"value\"}")
            }
            UploaderError::Network(_) => Some("Check your internet connection and try again"),
            UploaderError::Timeout => Some("Try again or raise the request timeout"),
            _ => None,
        }
    }

    /// Stable identifier used when the error is serialized for notifications
    pub fn kind(&self) -> &'static str {
        match self {
            UploaderError::ConfigurationMissing => "configuration_missing",
            UploaderError::InvalidConfiguration(_) => "invalid_configuration",
            UploaderError::MalformedCustomJson { .. } => "malformed_custom_json",
            UploaderError::InvalidPayload { .. } => "invalid_payload",
            UploaderError::MissingImageData(_) => "missing_image_data",
            UploaderError::Network(_) => "network",
            UploaderError::Timeout => "timeout",
            UploaderError::HttpStatus { .. } => "http_status",
        }
    }

    pub fn to_json(&self) -> String {
        json!({
            "kind": self.kind(),
            "message": self.to_string(),
        })
        .to_string()
    }
}

impl From<reqwest::Error> for UploaderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UploaderError::Timeout
        } else if let Some(status) = err.status() {
            UploaderError::HttpStatus {
                status: status.as_u16(),
                body: String::new(),
            }
        } else {
            UploaderError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for UploaderError {
    fn from(err: serde_json::Error) -> Self {
        UploaderError::InvalidConfiguration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            UploaderError::ConfigurationMissing.to_string(),
            "Can't find uploader config"
        );
        assert_eq!(
            UploaderError::Network("Connection refused".to_string()).to_string(),
            "Network error: Connection refused"
        );
        assert_eq!(
            UploaderError::MalformedCustomJson {
                field: "customHeader",
                reason: "expected value".to_string(),
            }
            .to_string(),
            "Malformed customHeader JSON: expected value"
        );
        assert_eq!(
            UploaderError::HttpStatus {
                status: 413,
                body: "too large".to_string(),
            }
            .to_string(),
            "Upload endpoint returned HTTP 413: too large"
        );
    }

    #[test]
    fn test_help_text() {
        assert!(
            UploaderError::ConfigurationMissing
                .help_text()
                .unwrap()
                .contains("picBed.web-uploader")
        );
        assert_eq!(
            UploaderError::Timeout.help_text(),
            Some("Try again or raise the request timeout")
        );
        assert_eq!(
            UploaderError::MissingImageData("a.png".to_string()).help_text(),
            None
        );
    }

    #[test]
    fn test_serialized_error_carries_kind_and_message() {
        let err = UploaderError::Network("reset by peer".to_string());
        let value: serde_json::Value = serde_json::from_str(&err.to_json()).unwrap();

        assert_eq!(value["kind"], "network");
        assert_eq!(value["message"], "Network error: reset by peer");
    }
}
