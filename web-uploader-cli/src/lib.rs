// ABOUTME: Library exports for the web uploader CLI modules
// ABOUTME: Makes internal modules available to integration tests

pub mod cli;
pub mod cli_output;
pub mod completions;
pub mod config;
pub mod output;
pub mod upload;
