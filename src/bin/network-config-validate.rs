// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network Config Validator
//!
//! Validates `network_config` attribute maps from a JSON document and prints
//! the normalized records.
//!
//! Run with: cargo run --bin network-config-validate -- interfaces.json
//!
//! The document is either a single attribute object or an array of them.
//! Reads stdin when no path (or `-`) is given.
//!
//! Environment (overridden by the matching flags):
//! - NETWORK_CONFIG_ERROR_POLICY: `fail_fast` (default) or `collect_all`
//! - NETWORK_CONFIG_UNKNOWN_ATTRIBUTES: `reject` (default) or `ignore`
//! - RUST_LOG: log filter (default `info`)

use anyhow::{Context, Result};
use clap::Parser;
use cim_network_config::{
    parse_document, validate_document, ConfigSchemaValidator, ErrorPolicy,
    UnknownAttributePolicy, ValidatorConfig,
};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "network-config-validate")]
#[command(about = "Validate network_config attribute documents and print normalized records")]
struct Args {
    /// JSON document to validate; stdin when omitted or `-`
    input: Option<PathBuf>,

    /// Error policy: fail_fast or collect_all
    #[arg(long)]
    error_policy: Option<ErrorPolicy>,

    /// Unknown attribute policy: reject or ignore
    #[arg(long)]
    unknown_attributes: Option<UnknownAttributePolicy>,
}

impl Args {
    /// Environment configuration with command-line overrides applied
    fn config(&self, mut config: ValidatorConfig) -> ValidatorConfig {
        if let Some(policy) = self.error_policy {
            config.error_policy = policy;
        }
        if let Some(policy) = self.unknown_attributes {
            config.unknown_attributes = policy;
        }
        config
    }
}

/// `RUST_LOG` directives when set and valid, `info` otherwise
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Read the input document from a path or stdin
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let config = ValidatorConfig::from_env().context("Invalid validator configuration")?;
    let validator = ConfigSchemaValidator::new(args.config(config));

    let input = read_input(args.input.as_deref())?;
    let raws = parse_document(&input)?;

    info!("Validating {} {} entries", raws.len(), validator.schema());

    let records = validate_document(&validator, &raws)?;

    println!("{}", serde_json::to_string_pretty(&records)?);
    info!("All {} entries valid", records.len());

    Ok(())
}
