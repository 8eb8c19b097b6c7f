// ABOUTME: Upload command runner wiring files, config, transport and notifier into the handler
// ABOUTME: Reads image files into items and shows a spinner while the batch uploads

use anyhow::{Context, Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;
use web_uploader_sdk::{
    FailurePolicy, ImageItem, Notifier, ReqwestTransport, UploadContext, WebUploader,
};

use crate::config::Config;

const SPINNER_TICK_MS: u64 = 80;

#[derive(Debug, Clone)]
pub struct UploadOptions {
    pub files: Vec<PathBuf>,
    pub timeout: Duration,
    pub policy: FailurePolicy,
    pub verbose: bool,
    pub show_progress: bool,
}

/// Reads each file into an item named after the file
pub fn read_items(files: &[PathBuf]) -> Result<Vec<ImageItem>> {
    files.iter().map(|path| read_item(path)).collect()
}

fn read_item(path: &Path) -> Result<ImageItem> {
    let buffer =
        std::fs::read(path).with_context(|| format!("Failed to read image: {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| anyhow!("Not a file path: {}", path.display()))?;

    Ok(ImageItem::from_buffer(file_name, buffer))
}

/// Uploads every file and returns one result record per file, in order
pub async fn run_upload(
    config: &Config,
    options: &UploadOptions,
    notifier: &dyn Notifier,
) -> Result<Vec<ImageItem>> {
    let items = read_items(&options.files)?;

    let transport = ReqwestTransport::builder()
        .timeout(options.timeout)
        .verbose(options.verbose)
        .build()?;
    let ctx = UploadContext {
        config,
        transport: &transport,
        notifier,
    };

    let spinner = options.show_progress.then(|| spinner(items.len()));
    let result = WebUploader::with_failure_policy(options.policy)
        .handle(&ctx, items)
        .await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    result.map_err(|err| match err.help_text() {
        Some(help) => anyhow!("{}\n\n{}", err, help),
        None => anyhow!(err),
    })
}

fn spinner(count: usize) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(format!(
        "Uploading {} image{}",
        count,
        if count == 1 { "" } else { "s" }
    ));
    pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_items_keeps_order_and_names() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.png");
        let b = dir.path().join("b.jpg");
        std::fs::write(&a, b"AAA").unwrap();
        std::fs::write(&b, b"BB").unwrap();

        let items = read_items(&[a, b]).unwrap();
        assert_eq!(items[0].file_name, "a.png");
        assert_eq!(items[0].buffer.as_deref(), Some(&b"AAA"[..]));
        assert_eq!(items[1].file_name, "b.jpg");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = read_items(&[dir.path().join("nope.png")]).unwrap_err();
        assert!(err.to_string().contains("Failed to read image"));
    }
}
