// ABOUTME: HTTP transport seam for upload requests with a reqwest-backed implementation
// ABOUTME: Provides builder-based configuration for timeouts and proxies

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use typed_builder::TypedBuilder;
use url::Url;

use crate::constants::{request, timeouts};
use crate::error::UploaderError;
use crate::request::{FilePart, FormValue, RequestOptions};

/// Sends a built upload request and returns the response body as text.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(&self, options: RequestOptions) -> Result<String, UploaderError>;
}

#[derive(Debug, TypedBuilder)]
#[builder(build_method(into = Result<ReqwestTransport, UploaderError>))]
pub struct TransportConfig {
    #[builder(default = timeouts::HTTP_REQUEST_TIMEOUT)]
    pub timeout: Duration,

    #[builder(default = None)]
    pub proxy: Option<reqwest::Proxy>,

    #[builder(default = false)]
    pub verbose: bool,
}

impl From<TransportConfig> for Result<ReqwestTransport, UploaderError> {
    fn from(config: TransportConfig) -> Self {
        ReqwestTransport::from_config(config)
    }
}

pub struct ReqwestTransport {
    client: reqwest::Client,
    verbose: bool,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, UploaderError> {
        Self::builder().build()
    }

    pub fn builder() -> TransportConfigBuilder<((), (), ())> {
        TransportConfig::builder()
    }

    pub fn from_config(config: TransportConfig) -> Result<Self, UploaderError> {
        let mut builder = reqwest::Client::builder().timeout(config.timeout);
        if let Some(proxy) = config.proxy {
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(|e| {
            UploaderError::InvalidConfiguration(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self {
            client,
            verbose: config.verbose,
        })
    }

    pub fn create_proxy(url: &str) -> Result<reqwest::Proxy, UploaderError> {
        let parsed_url = Url::parse(url)
            .map_err(|e| UploaderError::InvalidConfiguration(format!("Invalid proxy URL: {}", e)))?;

        reqwest::Proxy::all(parsed_url.as_str()).map_err(|e| {
            UploaderError::InvalidConfiguration(format!("Invalid proxy configuration: {}", e))
        })
    }

    // reqwest writes its own multipart Content-Type with the boundary, so the
    // descriptor's value is dropped here.
    fn header_map(headers: &[(String, String)]) -> Result<HeaderMap, UploaderError> {
        let mut map = HeaderMap::new();
        for (name, value) in headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                UploaderError::InvalidConfiguration(format!("Invalid header name '{}': {}", name, e))
            })?;
            if name == CONTENT_TYPE {
                continue;
            }
            let value = HeaderValue::from_str(value).map_err(|e| {
                UploaderError::InvalidConfiguration(format!("Invalid value for header {}: {}", name, e))
            })?;
            map.insert(name, value);
        }
        Ok(map)
    }

    fn multipart_form(fields: Vec<(String, FormValue)>) -> Result<Form, UploaderError> {
        let mut form = Form::new();
        for (name, value) in fields {
            form = match value {
                FormValue::Text(text) => form.text(name, text),
                FormValue::File(FilePart { bytes, file_name }) => {
                    let mime = mime_for(&file_name);
                    let part = Part::bytes(bytes)
                        .file_name(file_name)
                        .mime_str(mime)
                        .map_err(UploaderError::from)?;
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn request(&self, options: RequestOptions) -> Result<String, UploaderError> {
        let method = reqwest::Method::from_bytes(options.method.as_bytes())
            .map_err(|e| UploaderError::InvalidConfiguration(e.to_string()))?;
        let headers = Self::header_map(&options.headers)?;
        let form = Self::multipart_form(options.form)?;

        if self.verbose {
            log::debug!("{} {} ({} headers)", method, options.url, headers.len());
        }

        let response = self
            .client
            .request(method, &options.url)
            .multipart(form)
            .headers(headers)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        log::debug!("Upload endpoint answered {} with {} bytes", status, body.len());

        if !status.is_success() {
            return Err(UploaderError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

/// MIME type for an image file part, guessed from its extension
pub fn mime_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "tif" | "tiff" => "image/tiff",
        "avif" => "image/avif",
        _ => request::OCTET_STREAM,
    }
}
