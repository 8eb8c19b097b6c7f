// ABOUTME: Main entry point for the web uploader CLI
// ABOUTME: Loads configuration, dispatches subcommands and reports results

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::io::IsTerminal;
use std::time::Duration;
use web_uploader_cli::cli::{Cli, Commands};
use web_uploader_cli::cli_output::CliOutput;
use web_uploader_cli::completions::write_completions;
use web_uploader_cli::config::Config;
use web_uploader_cli::output::{JsonFormatter, OutputFormat, TableFormatter};
use web_uploader_cli::upload::{UploadOptions, run_upload};
use web_uploader_sdk::{FailurePolicy, config_fields};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let use_color = !cli.no_color
        && std::env::var("NO_COLOR").is_err()
        && std::io::stderr().is_terminal();
    let out = CliOutput::with_color(use_color);

    match run(cli, out, use_color).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            out.error(&format!("{:#}", err));
            std::process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when the command ran but did not fully succeed
async fn run(cli: Cli, out: CliOutput, use_color: bool) -> Result<bool> {
    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Upload {
            files,
            settings,
            timeout,
            continue_on_error,
            json,
            pretty,
        } => {
            let config = config.with_overrides(settings.into_overrides());
            let options = UploadOptions {
                files,
                timeout: Duration::from_secs(timeout),
                policy: if continue_on_error {
                    FailurePolicy::Continue
                } else {
                    FailurePolicy::Abort
                },
                verbose: cli.verbose,
                show_progress: !json && std::io::stderr().is_terminal(),
            };

            let results = run_upload(&config, &options, &out).await?;
            let formatter: Box<dyn OutputFormat> = if json {
                Box::new(JsonFormatter::new(pretty))
            } else {
                Box::new(TableFormatter::new(use_color))
            };
            println!("{}", formatter.format_results(&results)?);

            let uploaded = results.iter().filter(|i| i.img_url.is_some()).count();
            if !json {
                if uploaded == results.len() {
                    out.success(&format!("Uploaded {} of {} images", uploaded, results.len()));
                } else {
                    out.warning(&format!("Uploaded {} of {} images", uploaded, results.len()));
                }
            }
            Ok(uploaded == results.len())
        }
        Commands::Fields { json } => {
            let fields = config_fields(&config);
            let output = if json {
                JsonFormatter::new(true).format_fields(&fields)?
            } else {
                TableFormatter::new(use_color).format_fields(&fields)?
            };
            println!("{}", output);
            Ok(true)
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            write_completions(shell, &mut cmd, &mut std::io::stdout());
            Ok(true)
        }
    }
}
