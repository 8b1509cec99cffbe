//! CLI argument parsing for the contact-uploader binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::services::orchestrator::ValidationMode;

#[derive(Parser)]
#[command(name = "contact-uploader", about = "CSV contact import pipeline and uploader")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate and deduplicate a CSV file, printing the cleaned payload
    Validate {
        /// CSV file with a header row and firstName,lastName data rows
        file: PathBuf,
        /// Validation policy for malformed rows
        #[arg(long, value_enum, default_value_t = ValidationMode::Lenient)]
        mode: ValidationMode,
    },
    /// Validate a CSV file and upload it to the configured import backend
    Upload {
        /// CSV file with a header row and firstName,lastName data rows
        file: PathBuf,
        /// Id of the target account
        #[arg(long)]
        account: String,
        /// Validation policy for malformed rows
        #[arg(long, value_enum, default_value_t = ValidationMode::Lenient)]
        mode: ValidationMode,
    },
}
