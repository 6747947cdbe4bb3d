//! Intake CLI: preview local files, upload them, list stored files, or run the
//! dev server.
//!
//! Set INTAKE_API_URL (or API_URL) to point at the file-collection service.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use intake_api_client::ApiClient;
use intake_cli::{init_tracing, preview_table, record_table, OutputFormat};
use intake_core::IntakeConfig;
use intake_processing::select_paths;
use intake_services::{ConsoleNotifier, IntakeApi, IntakeController, SubmitOutcome};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "intake", about = "File intake and preview CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build previews for local files
    Preview {
        /// Files to preview, in order
        #[arg(required = true)]
        files: Vec<PathBuf>,
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Upload files as one multipart batch
    Upload {
        /// Files to upload; none triggers the "No files selected." alert
        files: Vec<PathBuf>,
    },
    /// List files stored by the service
    List {
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Run the development server
    Serve {
        /// Overrides INTAKE_DEV_PORT
        #[arg(long)]
        port: Option<u16>,
    },
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize output")?;
    println!("{}", out);
    Ok(())
}

fn build_controller(config: &IntakeConfig, api: Arc<dyn IntakeApi>) -> IntakeController {
    IntakeController::from_config(config, api, Arc::new(ConsoleNotifier))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut config = IntakeConfig::from_env().context("Invalid intake configuration")?;
    tracing::debug!(dev_port = config.dev_port, "Dev server port configured");

    let api: Arc<dyn IntakeApi> = Arc::new(
        ApiClient::from_config(&config).context("Failed to create API client")?,
    );

    match cli.command {
        Commands::Preview { files, format } => {
            let selection = select_paths(&files).await?;
            let mut controller = build_controller(&config, api);
            let previews = controller.handle_selection(Some(selection)).await?;

            match format {
                OutputFormat::Json => print_json(&previews)?,
                _ => print!("{}", preview_table(previews)),
            }
        }
        Commands::Upload { files } => {
            let selection = select_paths(&files).await?;
            let mut controller = build_controller(&config, api);
            controller.handle_selection(Some(selection)).await?;

            tracing::info!(url = %config.upload_url(), "Submitting selection");
            if let SubmitOutcome::Uploaded(result) = controller.submit_selection().await? {
                print_json(&result)?;
            }
        }
        Commands::List { format } => {
            tracing::debug!(url = %config.records_url(), "Loading stored records");
            let mut controller = build_controller(&config, api);
            let records = controller.load_stored_records().await;

            match format {
                OutputFormat::Table => print!("{}", record_table(records)),
                OutputFormat::Json => print_json(&records)?,
                OutputFormat::Html => print!(
                    "{}",
                    intake_web::render::gallery(records).context("Render gallery")?
                ),
            }
        }
        Commands::Serve { port } => {
            if let Some(port) = port.filter(|&p| p > 0) {
                config.dev_port = port;
            }
            intake_web::serve(&config, api).await?;
        }
    }

    Ok(())
}
