use anyhow::Result;
use clap::Parser;
use rmcp::{ServiceExt, transport::stdio};
use std::path::PathBuf;
use tracing_subscriber::{self, filter::EnvFilter};

use ui_kit_mcp::{config::ServiceConfig, service::UiKitService};

/// ui-kit MCP Server - component metadata, docs and sample-based code generation
#[derive(Parser, Debug)]
#[command(name = "ui-kit-mcp")]
#[command(about = "Model Context Protocol server for a React UI kit")]
#[command(version)]
struct Args {
    /// Directory containing `<Name>.sample.<ext>` playground files
    #[arg(
        short = 'd',
        long = "samples-dir",
        help = "Samples directory (default: ./playground/samples, falling back to ~/.ui-kit-mcp/samples)",
        value_name = "PATH"
    )]
    samples_directory: Option<PathBuf>,

    /// Package specifier the UI kit is imported from in sample files
    #[arg(
        long = "library-package",
        default_value = "@ui-kit/react",
        help = "Package specifier used in generated import statements"
    )]
    library_package: String,

    /// Maximum sample file size to load (in bytes)
    #[arg(
        long = "max-file-size",
        default_value = "1048576", // 1MB
        help = "Maximum sample file size to load in bytes"
    )]
    max_file_size: u64,

    /// Maximum number of concurrent sample file reads
    #[arg(
        long = "max-concurrency",
        default_value = "10",
        help = "Maximum number of concurrent sample file reads"
    )]
    max_concurrency: usize,
}

#[tokio::main]
#[tracing::instrument]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize the tracing subscriber with stderr logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting MCP server with config: {:?}", args);

    // Create a custom config from command line arguments
    let config = create_config_from_args(args)?;

    // Create an instance of our ui-kit service with custom config
    let service = UiKitService::with_config(config).serve(stdio()).await?;

    tracing::info!("Service started, waiting for connections");
    service.waiting().await?;
    Ok(())
}

/// Create a ServiceConfig from command line arguments
fn create_config_from_args(args: Args) -> Result<ServiceConfig> {
    let samples_directory = match args.samples_directory {
        Some(dir) => dir,
        None => {
            let local = std::env::current_dir()?.join("playground").join("samples");
            if local.is_dir() {
                local
            } else {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".ui-kit-mcp")
                    .join("samples")
            }
        }
    };

    Ok(ServiceConfig {
        samples_directory,
        library_package: args.library_package,
        max_file_size: args.max_file_size,
        max_concurrency: args.max_concurrency,
    })
}
