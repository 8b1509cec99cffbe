//! Business logic services

pub mod account_directory;
pub mod csv_parser;
pub mod deduplicator;
pub mod notifier;
pub mod orchestrator;
pub mod permission;
pub mod row_validator;
pub mod uploader;
