// ABOUTME: Dot-separated JSON path lookup over parsed response bodies
// ABOUTME: Extracts the uploaded image URL from a JSON value or the raw response text

use serde_json::{Map, Value};
use std::fmt;

/// A tokenized dot-separated path such as `data.url` or `files.0.link`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPath {
    segments: Vec<String>,
}

impl JsonPath {
    /// Splits `path` on `.`. Empty segments are kept, so `a..b` looks up the key `""`.
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path.split('.').map(str::to_string).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Walks `value` one segment at a time.
    ///
    /// Objects are indexed by key and arrays by decimal position. Reaching a
    /// scalar or `null` before the path is exhausted yields `None`.
    pub fn lookup<'a>(&self, value: &'a Value) -> Option<&'a Value> {
        self.segments
            .iter()
            .try_fold(value, |current, segment| match current {
                Value::Object(map) => map.get(segment),
                Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
                _ => None,
            })
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// Pulls the image URL out of a response body.
///
/// Without a path the whole body is the URL. With a path the body is parsed
/// as JSON, falling back to an empty object when it is not valid JSON.
pub fn extract_url(body: &str, path: Option<&JsonPath>) -> Option<String> {
    let Some(path) = path else {
        return (!body.is_empty()).then(|| body.to_string());
    };

    let parsed: Value = serde_json::from_str(body).unwrap_or_else(|e| {
        log::debug!("Response is not JSON ({}), treating it as {{}}", e);
        Value::Object(Map::new())
    });

    path.lookup(&parsed).and_then(url_from_value)
}

fn url_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
