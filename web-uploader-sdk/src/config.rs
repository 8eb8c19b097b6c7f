// ABOUTME: Uploader configuration read from the host config store, plus settings-panel descriptors
// ABOUTME: Validates required keys and exposes the ordered field list the host renders

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::constants::plugin::CONFIG_KEY;
use crate::error::UploaderError;
use crate::json_path::JsonPath;

/// Host configuration store, looked up by dotted key (e.g. `picBed.web-uploader`).
pub trait ConfigSource: Send + Sync {
    fn get_config(&self, key: &str) -> Option<Value>;
}

/// A `ConfigSource` over a fixed JSON document.
#[derive(Debug, Clone, Default)]
pub struct StaticConfig {
    root: Value,
}

impl StaticConfig {
    pub fn new(root: Value) -> Self {
        Self { root }
    }
}

impl ConfigSource for StaticConfig {
    fn get_config(&self, key: &str) -> Option<Value> {
        JsonPath::parse(key)
            .lookup(&self.root)
            .filter(|v| !v.is_null())
            .cloned()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadConfiguration {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub param_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_body: Option<String>,
}

impl UploadConfiguration {
    /// Loads and validates the uploader settings from the host store
    pub fn load(source: &dyn ConfigSource) -> Result<Self, UploaderError> {
        let value = source
            .get_config(CONFIG_KEY)
            .ok_or(UploaderError::ConfigurationMissing)?;

        let config: UploadConfiguration = serde_json::from_value(value)?;
        let config = config.normalized();
        config.validate()?;
        Ok(config)
    }

    /// Trims surrounding whitespace and treats empty optional strings as unset
    pub fn normalized(self) -> Self {
        fn non_empty(value: Option<String>) -> Option<String> {
            value
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        }

        Self {
            url: self.url.trim().to_string(),
            param_name: self.param_name.trim().to_string(),
            json_path: non_empty(self.json_path),
            prefix: non_empty(self.prefix),
            custom_header: non_empty(self.custom_header),
            custom_body: non_empty(self.custom_body),
        }
    }

    pub fn validate(&self) -> Result<(), UploaderError> {
        if self.url.trim().is_empty() {
            return Err(UploaderError::InvalidConfiguration(
                "url is required".to_string(),
            ));
        }
        if self.param_name.trim().is_empty() {
            return Err(UploaderError::InvalidConfiguration(
                "paramName is required".to_string(),
            ));
        }

        let parsed = Url::parse(&self.url).map_err(|e| {
            UploaderError::InvalidConfiguration(format!("invalid url '{}': {}", self.url, e))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(UploaderError::InvalidConfiguration(format!(
                "url must use http or https, got '{}'",
                parsed.scheme()
            )));
        }

        Ok(())
    }

    pub fn json_path(&self) -> Option<JsonPath> {
        self.json_path.as_deref().map(JsonPath::parse)
    }

    /// Overlays the fields set in `other` on top of `self`
    pub fn merge(self, other: UploadConfiguration) -> UploadConfiguration {
        fn pick(base: String, over: String) -> String {
            if over.is_empty() { base } else { over }
        }

        UploadConfiguration {
            url: pick(self.url, other.url),
            param_name: pick(self.param_name, other.param_name),
            json_path: other.json_path.or(self.json_path),
            prefix: other.prefix.or(self.prefix),
            custom_header: other.custom_header.or(self.custom_header),
            custom_body: other.custom_body.or(self.custom_body),
        }
    }
}

/// One entry of the settings panel the host renders for this uploader.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigField {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub input_type: &'static str,
    pub default: Option<String>,
    pub required: bool,
    pub message: &'static str,
    pub alias: &'static str,
}

/// Settings-panel fields in display order, pre-filled from the stored config.
pub fn config_fields(source: &dyn ConfigSource) -> Vec<ConfigField> {
    let current: UploadConfiguration = source
        .get_config(CONFIG_KEY)
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default();

    let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());

    vec![
        ConfigField {
            name: "url",
            input_type: "input",
            default: non_empty(&current.url),
            required: true,
            message: "Upload API endpoint",
            alias: "API URL",
        },
        ConfigField {
            name: "paramName",
            input_type: "input",
            default: non_empty(&current.param_name),
            required: true,
            message: "Form field name for the image",
            alias: "POST field name",
        },
        ConfigField {
            name: "jsonPath",
            input_type: "input",
            default: current.json_path,
            required: false,
            message: "JSON path to the image URL (eg: data.url)",
            alias: "JSON path",
        },
        ConfigField {
            name: "prefix",
            input_type: "input",
            default: current.prefix,
            required: false,
            message: "Prefix for relative image paths (eg: https://your-domain)",
            alias: "Path prefix",
        },
        ConfigField {
            name: "customHeader",
            input_type: "input",
            default: current.custom_header,
            required: false,
            message: "Custom request headers as a JSON object (eg: {\"key\":\"value\"})",
            alias: "Custom headers",
        },
        ConfigField {
            name: "customBody",
            input_type: "input",
            default: current.custom_body,
            required: false,
            message: "Custom form fields as a JSON object (eg: {\"key\":\"value\"})",
            alias: "Custom body",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn source(config: Value) -> StaticConfig {
        StaticConfig::new(json!({ "picBed": { "web-uploader": config } }))
    }

    #[test]
    fn test_load_full_config() {
        let store = source(json!({
            "url": "https://img.test/upload",
            "paramName": "file",
            "jsonPath": "data.url",
            "prefix": "https://cdn.test",
            "customHeader": "{\"Authorization\":\"token\"}",
            "customBody": "{\"album\":\"1\"}"
        }));

        let config = UploadConfiguration::load(&store).unwrap();
        assert_eq!(config.url, "https://img.test/upload");
        assert_eq!(config.param_name, "file");
        assert_eq!(config.json_path(), Some(JsonPath::parse("data.url")));
        assert_eq!(config.prefix.as_deref(), Some("https://cdn.test"));
        assert!(config.custom_header.is_some());
        assert!(config.custom_body.is_some());
    }

    #[test]
    fn test_missing_config() {
        let store = StaticConfig::new(json!({ "picBed": {} }));
        assert!(matches!(
            UploadConfiguration::load(&store),
            Err(UploaderError::ConfigurationMissing)
        ));

        let null_store = source(Value::Null);
        assert!(matches!(
            UploadConfiguration::load(&null_store),
            Err(UploaderError::ConfigurationMissing)
        ));
    }

    #[test]
    fn test_required_keys_are_validated() {
        let no_param = source(json!({ "url": "https://img.test" }));
        assert!(matches!(
            UploadConfiguration::load(&no_param),
            Err(UploaderError::InvalidConfiguration(msg)) if msg.contains("paramName")
        ));

        let bad_url = source(json!({ "url": "img.test/upload", "paramName": "file" }));
        assert!(matches!(
            UploadConfiguration::load(&bad_url),
            Err(UploaderError::InvalidConfiguration(msg)) if msg.contains("invalid url")
        ));

        let ftp = source(json!({ "url": "ftp://img.test", "paramName": "file" }));
        assert!(UploadConfiguration::load(&ftp).is_err());
    }

    #[test]
    fn test_empty_optional_values_are_unset() {
        let store = source(json!({
            "url": "http://up.test",
            "paramName": "file",
            "jsonPath": "",
            "prefix": "  "
        }));

        let config = UploadConfiguration::load(&store).unwrap();
        assert_eq!(config.json_path, None);
        assert_eq!(config.prefix, None);
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let store = source(json!({
            "url": " http://up.test ",
            "paramName": " file",
            "jsonPath": " data.url ",
            "prefix": "https://cdn.test\n"
        }));

        let config = UploadConfiguration::load(&store).unwrap();
        assert_eq!(config.url, "http://up.test");
        assert_eq!(config.param_name, "file");
        assert_eq!(config.json_path(), Some(JsonPath::parse("data.url")));
        assert_eq!(config.prefix.as_deref(), Some("https://cdn.test"));
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let base = UploadConfiguration {
            url: "http://base.test".to_string(),
            param_name: "file".to_string(),
            prefix: Some("https://cdn.test".to_string()),
            ..Default::default()
        };
        let overrides = UploadConfiguration {
            url: "http://other.test".to_string(),
            json_path: Some("url".to_string()),
            ..Default::default()
        };

        let merged = base.merge(overrides);
        assert_eq!(merged.url, "http://other.test");
        assert_eq!(merged.param_name, "file");
        assert_eq!(merged.json_path.as_deref(), Some("url"));
        assert_eq!(merged.prefix.as_deref(), Some("https://cdn.test"));
    }

    #[test]
    fn test_config_fields_order_and_defaults() {
        let store = source(json!({ "url": "http://up.test", "paramName": "file" }));
        let fields = config_fields(&store);

        let names: Vec<_> = fields.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            ["url", "paramName", "jsonPath", "prefix", "customHeader", "customBody"]
        );
        assert_eq!(fields[0].default.as_deref(), Some("http://up.test"));
        assert!(fields[0].required && fields[1].required);
        assert!(fields[2..].iter().all(|f| !f.required && f.default.is_none()));
        assert!(fields.iter().all(|f| f.input_type == "input"));
    }

    #[test]
    fn test_config_fields_without_stored_config() {
        let fields = config_fields(&StaticConfig::default());
        assert_eq!(fields.len(), 6);
        assert!(fields.iter().all(|f| f.default.is_none()));
    }
}
