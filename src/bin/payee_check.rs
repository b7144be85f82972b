//! Checks payee identifiers and persisted payee records from the command line.
//!
//! Usage:
//!
//! ```text
//! payee_check document <raw>
//! payee_check pix-key <type> <raw>
//! payee_check restore <records-path>
//! ```
//!
//! `document` and `pix-key` validate a single value and print its kind, raw
//! value and display form. `restore` reads a JSON array of payee records,
//! rebuilds each one through the tolerant restoration path and prints one
//! JSON summary per record. A representative record is:
//!
//! ```json
//! {
//!   "id": "0b6f9a4e-4a52-4d8e-9d57-2f4f3c1e8a10",
//!   "name": "Maria Silva",
//!   "document": "77386735081",
//!   "status": "VALID",
//!   "email": "maria@example.com",
//!   "pix_key_type": "TELEFONE",
//!   "pix_key_value": "5599987654321",
//!   "bank_account": null
//! }
//! ```
//!
//! Tempered fields are reported as `WARN` log events on stderr. The log
//! filter is read from `RUST_LOG` and defaults to `info`.

use payee_accounts::payee::{
    adapters::TracingTemperedValueSink,
    domain::{Document, PayeeDomainError, PayeeEntity, PixKey},
    services::{PayeeRecord, restore_payee},
};
use serde_json::json;
use std::env;
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error)]
enum CheckError {
    #[error("usage: payee_check <document RAW | pix-key TYPE RAW | restore PATH>")]
    Usage,
    #[error(transparent)]
    Domain(#[from] PayeeDomainError),
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse payee records: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let stdout = io::stdout();
    match run(&args, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "payee check failed");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();
}

fn run(args: &[String], out: &mut impl Write) -> Result<(), CheckError> {
    match args {
        [command, raw] if command == "document" => {
            let document = Document::new(raw)?;
            writeln!(out, "{} {} {document}", document.label(), document.value())?;
        }
        [command, key_type, raw] if command == "pix-key" => {
            let key = PixKey::new(key_type, raw)?;
            writeln!(out, "{} {} {key}", key.key_type(), key.value())?;
        }
        [command, path] if command == "restore" => restore_records(path, out)?,
        _ => return Err(CheckError::Usage),
    }
    Ok(())
}

fn restore_records(path: &str, out: &mut impl Write) -> Result<(), CheckError> {
    let contents = fs::read_to_string(path).map_err(|source| CheckError::Read {
        path: path.to_owned(),
        source,
    })?;
    let records: Vec<PayeeRecord> = serde_json::from_str(&contents)?;

    let sink = TracingTemperedValueSink::new();
    for record in records {
        let payee = restore_payee(record, &sink);
        writeln!(out, "{}", summarize(&payee))?;
    }
    Ok(())
}

fn summarize(payee: &PayeeEntity) -> serde_json::Value {
    let tempered: Vec<&str> = payee
        .tempered_fields()
        .into_iter()
        .map(|field| field.as_str())
        .collect();

    json!({
        "id": payee.id().as_str(),
        "name": payee.name().as_str(),
        "document": payee.document().to_string(),
        "status": payee.status().label(),
        "pix_key_type": payee.pix_key().key_type(),
        "pix_key": payee.pix_key().to_string(),
        "tempered": tempered,
    })
}
