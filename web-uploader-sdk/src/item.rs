// ABOUTME: Image items flowing through the upload handler
// ABOUTME: Resolves raw or base64 payloads and produces stripped output records

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::UploaderError;

/// One image handed over by the host, and the record handed back after upload.
///
/// Fields the uploader doesn't know about are carried through `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageItem {
    pub file_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer: Option<Vec<u8>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base64_image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_url: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ImageItem {
    pub fn from_buffer(file_name: impl Into<String>, buffer: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            buffer: Some(buffer),
            ..Default::default()
        }
    }

    pub fn from_base64(file_name: impl Into<String>, encoded: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            base64_image: Some(encoded.into()),
            ..Default::default()
        }
    }

    /// Image bytes to upload. The raw buffer wins over the base64 field.
    pub fn image_bytes(&self) -> Result<Vec<u8>, UploaderError> {
        if let Some(buffer) = &self.buffer {
            return Ok(buffer.clone());
        }

        let encoded = self
            .base64_image
            .as_deref()
            .ok_or_else(|| UploaderError::MissingImageData(self.file_name.clone()))?;

        STANDARD
            .decode(strip_data_uri(encoded).trim())
            .map_err(|e| UploaderError::InvalidPayload {
                file_name: self.file_name.clone(),
                reason: e.to_string(),
            })
    }

    /// Output record for an item whose request has completed. The payload is
    /// dropped so results don't re-serialize the image.
    pub fn into_uploaded(self, img_url: Option<String>) -> Self {
        Self {
            buffer: None,
            base64_image: None,
            img_url,
            ..self
        }
    }
}

fn strip_data_uri(encoded: &str) -> &str {
    match encoded.split_once(";base64,") {
        Some((head, data)) if head.starts_with("data:") => data,
        _ => encoded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_buffer_preferred_over_base64() {
        let item = ImageItem {
            file_name: "a.png".to_string(),
            buffer: Some(vec![1, 2, 3]),
            base64_image: Some("BAUG".to_string()),
            ..Default::default()
        };

        assert_eq!(item.image_bytes().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_base64_fallback() {
        let item = ImageItem::from_base64("a.png", "BAUG");
        assert_eq!(item.image_bytes().unwrap(), vec![4, 5, 6]);

        let data_uri = ImageItem::from_base64("a.png", "data:image/png;base64,BAUG");
        assert_eq!(data_uri.image_bytes().unwrap(), vec![4, 5, 6]);
    }

    #[test]
    fn test_missing_and_invalid_payloads() {
        let empty = ImageItem {
            file_name: "none.png".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            empty.image_bytes(),
            Err(UploaderError::MissingImageData(name)) if name == "none.png"
        ));

        let broken = ImageItem::from_base64("bad.png", "not base64!!");
        assert!(matches!(
            broken.image_bytes(),
            Err(UploaderError::InvalidPayload { .. })
        ));
    }

    #[test]
    fn test_uploaded_record_drops_payload_and_keeps_extra_fields() {
        let mut item = ImageItem::from_buffer("x.png", vec![0; 16]);
        item.base64_image = Some("AAAA".to_string());
        item.extra.insert("width".to_string(), json!(640));

        let uploaded = item.into_uploaded(Some("https://cdn.test/x.png".to_string()));
        let value = serde_json::to_value(&uploaded).unwrap();

        assert_eq!(
            value,
            json!({
                "fileName": "x.png",
                "imgUrl": "https://cdn.test/x.png",
                "width": 640
            })
        );
    }

    #[test]
    fn test_deserialize_host_item() {
        let item: ImageItem = serde_json::from_value(json!({
            "fileName": "y.jpg",
            "base64Image": "BAUG",
            "extname": ".jpg"
        }))
        .unwrap();

        assert_eq!(item.file_name, "y.jpg");
        assert_eq!(item.base64_image.as_deref(), Some("BAUG"));
        assert_eq!(item.extra.get("extname"), Some(&json!(".jpg")));
    }
}
