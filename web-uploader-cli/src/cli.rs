// ABOUTME: CLI argument definitions for the web uploader
// ABOUTME: Defines the command-line interface structure using clap derive macros

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use web_uploader_sdk::UploadConfiguration;

#[derive(Parser, Debug)]
#[command(name = "web-uploader")]
#[command(about = "Upload images to a custom multipart endpoint", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose output for debugging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Read configuration from this file instead of the standard locations
    #[arg(long, short, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload one or more images
    Upload {
        /// Image files to upload, in order
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        #[command(flatten)]
        settings: UploadSettings,

        /// Request timeout in seconds
        #[arg(long, default_value = "30", value_parser = clap::value_parser!(u64).range(1..))]
        timeout: u64,

        /// Keep uploading the remaining files after a failure
        #[arg(long)]
        continue_on_error: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Pretty print JSON output
        #[arg(long, requires = "json")]
        pretty: bool,
    },
    /// Show the uploader settings fields with their current values
    Fields {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: crate::completions::Shell,
    },
}

/// Per-invocation overrides for the configured uploader settings
#[derive(Args, Debug, Default, Clone, PartialEq)]
pub struct UploadSettings {
    /// Upload API endpoint
    #[arg(long)]
    pub url: Option<String>,

    /// Form field name the image is sent under
    #[arg(long)]
    pub param_name: Option<String>,

    /// Dot-separated path to the image URL in the JSON response (e.g. data.url)
    #[arg(long)]
    pub json_path: Option<String>,

    /// Prefix joined onto relative image paths
    #[arg(long)]
    pub prefix: Option<String>,

    /// Extra request headers as a JSON object
    #[arg(long, value_name = "JSON")]
    pub custom_header: Option<String>,

    /// Extra form fields as a JSON object
    #[arg(long, value_name = "JSON")]
    pub custom_body: Option<String>,
}

impl UploadSettings {
    /// Returns `None` when no override flag was given
    pub fn into_overrides(self) -> Option<UploadConfiguration> {
        if self == Self::default() {
            return None;
        }

        Some(UploadConfiguration {
            url: self.url.unwrap_or_default(),
            param_name: self.param_name.unwrap_or_default(),
            json_path: self.json_path,
            prefix: self.prefix,
            custom_header: self.custom_header,
            custom_body: self.custom_body,
        })
    }
}
