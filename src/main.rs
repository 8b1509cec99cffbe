//! contact-uploader - CSV contact import pipeline
//!
//! Validates, deduplicates, and uploads contact CSV files to the
//! configured import backend.

mod cli;
mod config;
mod error;
mod services;
mod types;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command};
use crate::error::ImportError;
use crate::services::account_directory::{
    AccountDirectory, HttpAccountDirectory, StaticAccountDirectory,
};
use crate::services::notifier::LogNotifier;
use crate::services::orchestrator::{self, ImportOrchestrator};
use crate::services::permission::AllowList;
use crate::services::uploader::{HttpUploadService, LogUploadService, UploadService};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs directory - use LOGS_DIR env var or default to ./logs
    let logs_dir = std::env::var("LOGS_DIR").unwrap_or_else(|_| "./logs".to_string());
    std::fs::create_dir_all(&logs_dir).ok();

    // File appender for persistent logs (daily rotation)
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &logs_dir, "contact-uploader.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    // Initialize logging - both stdout and file
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,contact_uploader=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer()) // stdout
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking).with_ansi(false)) // file
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Validate { file, mode } => {
            let raw = tokio::fs::read_to_string(&file)
                .await
                .map_err(ImportError::FileRead)?;
            let payload = orchestrator::run_pipeline(&raw, mode)?;
            info!(rows = payload.row_count(), %mode, "Validation passed");
            println!("{}", payload.as_str());
        }
        Command::Upload { file, account, mode } => {
            let config = config::Config::from_env()?;

            let uploader: Arc<dyn UploadService> = match &config.upload_url {
                Some(url) => Arc::new(HttpUploadService::new(url)),
                None => Arc::new(LogUploadService),
            };
            let directory: Box<dyn AccountDirectory> = match &config.account_directory_url {
                Some(url) => Box::new(HttpAccountDirectory::new(url)),
                None => Box::new(StaticAccountDirectory::new(config.account_options.clone())),
            };

            let mut orchestrator = ImportOrchestrator::new(
                mode,
                AllowList::new(config.permitted_account_labels.clone()),
                uploader,
                Arc::new(LogNotifier),
            );

            orchestrator.load_account_options(directory.as_ref()).await?;
            orchestrator.load_file(&file).await?;
            orchestrator.select_account(&account)?;
            orchestrator.submit().await?;
        }
    }

    Ok(())
}
