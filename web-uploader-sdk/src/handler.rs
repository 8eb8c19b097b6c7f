// ABOUTME: Upload handler driving one multipart request per image, in order
// ABOUTME: Extracts and normalizes returned URLs and reports failures through the host notifier

use crate::config::{ConfigSource, UploadConfiguration};
use crate::error::UploaderError;
use crate::item::ImageItem;
use crate::json_path::{JsonPath, extract_url};
use crate::normalize::normalize_url;
use crate::notification::{Notification, Notifier};
use crate::request::build_request_options;
use crate::transport::Transport;

/// Host collaborators available during one `handle` call.
#[derive(Clone, Copy)]
pub struct UploadContext<'a> {
    pub config: &'a dyn ConfigSource,
    pub transport: &'a dyn Transport,
    pub notifier: &'a dyn Notifier,
}

/// What happens to the rest of the batch when an item fails to upload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failure; later items are returned untouched
    #[default]
    Abort,
    /// Report the failure and keep uploading the remaining items
    Continue,
}

#[derive(Debug, Clone, Default)]
pub struct WebUploader {
    policy: FailurePolicy,
}

impl WebUploader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure_policy(policy: FailurePolicy) -> Self {
        Self { policy }
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Uploads `items` one after another and returns their output records in
    /// the same order.
    ///
    /// Fails before any request when the configuration is missing or
    /// unusable. Every other failure is reported through the notifier and the
    /// affected item is returned with its payload intact.
    pub async fn handle(
        &self,
        ctx: &UploadContext<'_>,
        items: Vec<ImageItem>,
    ) -> Result<Vec<ImageItem>, UploaderError> {
        let config = UploadConfiguration::load(ctx.config)?;
        let json_path = config.json_path();

        let mut output = Vec::with_capacity(items.len());
        let mut pending = items.into_iter();

        while let Some(item) = pending.next() {
            match upload_one(ctx, &config, json_path.as_ref(), &item).await {
                Ok(Some(img_url)) => {
                    log::info!("Uploaded {} -> {}", item.file_name, img_url);
                    output.push(item.into_uploaded(Some(img_url)));
                }
                Ok(None) => {
                    log::warn!(
                        "No image URL found in the response for {} (jsonPath: {})",
                        item.file_name,
                        config.json_path.as_deref().unwrap_or("<none>")
                    );
                    ctx.notifier.notify(Notification::parse_failed());
                    output.push(item.into_uploaded(None));
                }
                Err(err) => {
                    log::warn!("Upload of {} failed: {}", item.file_name, err);
                    ctx.notifier.notify(Notification::upload_failed(&err));
                    output.push(item);

                    if self.policy == FailurePolicy::Abort {
                        output.extend(pending.by_ref());
                        break;
                    }
                }
            }
        }

        Ok(output)
    }
}

async fn upload_one(
    ctx: &UploadContext<'_>,
    config: &UploadConfiguration,
    json_path: Option<&JsonPath>,
    item: &ImageItem,
) -> Result<Option<String>, UploaderError> {
    let image = item.image_bytes()?;
    let options = build_request_options(
        image,
        config.custom_header.as_deref(),
        config.custom_body.as_deref(),
        &config.url,
        &config.param_name,
        &item.file_name,
    )?;

    log::debug!("POST {} for {}", options.url, item.file_name);
    let body = ctx.transport.request(options).await?;

    Ok(extract_url(&body, json_path).map(|url| normalize_url(&url, config.prefix.as_deref())))
}
