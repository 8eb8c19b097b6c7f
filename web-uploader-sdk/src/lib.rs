// ABOUTME: Web uploader library: multipart image uploads driven by host configuration
// ABOUTME: Builds requests, extracts URLs via JSON paths and registers with a host uploader registry

pub mod config;
pub mod constants;
pub mod error;
pub mod handler;
pub mod item;
pub mod json_path;
pub mod normalize;
pub mod notification;
pub mod registry;
pub mod request;
pub mod transport;

#[cfg(test)]
pub mod test_helpers;

pub use config::{ConfigField, ConfigSource, StaticConfig, UploadConfiguration, config_fields};
pub use error::UploaderError;
pub use handler::{FailurePolicy, UploadContext, WebUploader};
pub use item::ImageItem;
pub use json_path::{JsonPath, extract_url};
pub use normalize::normalize_url;
pub use notification::{Notification, Notifier};
pub use registry::{InMemoryRegistry, UploaderDescriptor, UploaderRegistry};
pub use request::{FilePart, FormValue, RequestOptions, build_request_options};
pub use transport::{ReqwestTransport, Transport, TransportConfig};

pub type Result<T> = std::result::Result<T, UploaderError>;
