// ABOUTME: Builds the multipart POST descriptor for a single image upload
// ABOUTME: Parses custom header/body JSON and merges it over the request defaults

use serde_json::{Map, Value};

use crate::constants::request;
use crate::error::UploaderError;

/// A file part of a multipart form.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    pub bytes: Vec<u8>,
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    Text(String),
    File(FilePart),
}

/// Transport-independent description of one upload request.
///
/// Headers and form fields keep insertion order; a later entry with the same
/// name replaces the earlier one in place.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    pub method: &'static str,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub form: Vec<(String, FormValue)>,
}

impl RequestOptions {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn form_value(&self, name: &str) -> Option<&FormValue> {
        self.form.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }
}

/// Builds the request for one image.
///
/// `custom_header` and `custom_body` must be JSON objects when present; any
/// other JSON, or invalid JSON, is returned as `MalformedCustomJson`.
pub fn build_request_options(
    image: Vec<u8>,
    custom_header: Option<&str>,
    custom_body: Option<&str>,
    url: &str,
    param_name: &str,
    file_name: &str,
) -> Result<RequestOptions, UploaderError> {
    let mut headers = vec![
        (
            "Content-Type".to_string(),
            request::MULTIPART_CONTENT_TYPE.to_string(),
        ),
        ("User-Agent".to_string(), request::USER_AGENT.to_string()),
    ];
    if let Some(text) = custom_header {
        for (name, value) in parse_object("customHeader", text)? {
            upsert(&mut headers, name, json_text(value), |a, b| {
                a.eq_ignore_ascii_case(b)
            });
        }
    }

    let mut form = Vec::new();
    if let Some(text) = custom_body {
        for (name, value) in parse_object("customBody", text)? {
            upsert(&mut form, name, FormValue::Text(json_text(value)), |a, b| a == b);
        }
    }
    upsert(
        &mut form,
        param_name.to_string(),
        FormValue::File(FilePart {
            bytes: image,
            file_name: file_name.to_string(),
        }),
        |a, b| a == b,
    );

    Ok(RequestOptions {
        method: request::METHOD,
        url: url.to_string(),
        headers,
        form,
    })
}

fn parse_object(field: &'static str, text: &str) -> Result<Map<String, Value>, UploaderError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| UploaderError::MalformedCustomJson {
            field,
            reason: e.to_string(),
        })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(UploaderError::MalformedCustomJson {
            field,
            reason: format!("expected a JSON object, got {}", type_name(&other)),
        }),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn json_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn upsert<V>(
    entries: &mut Vec<(String, V)>,
    name: String,
    value: V,
    same: impl Fn(&str, &str) -> bool,
) {
    match entries.iter_mut().find(|(k, _)| same(k, &name)) {
        Some(entry) => *entry = (name, value),
        None => entries.push((name, value)),
    }
}
