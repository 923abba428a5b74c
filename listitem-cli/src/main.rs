//! `listitem`: inspect how list-item records and values go through the codec.
//!
//! Usage:
//!   listitem --schema review.json extract --record item.json [--safe]
//!   listitem --schema review.json updates --values edits.json [--original item.json] [--direct] [--validate]
//!   listitem format --type UserMulti --value '[1, 2]'

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use listitem_cli::{extract_command, format_command, load_schema, read_json, updates_command};
use listitem_model::FieldType;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "listitem")]
#[command(about = "List-item field codec driver")]
struct Args {
    /// Path to the schema JSON file
    #[arg(short, long, global = true)]
    schema: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a raw record into a typed record
    Extract {
        /// Raw record JSON, keyed by wire field name
        #[arg(short, long)]
        record: PathBuf,

        /// Report per-field errors instead of failing
        #[arg(long)]
        safe: bool,
    },
    /// Build an update batch from a values document
    Updates {
        /// Values JSON, keyed by logical field name
        #[arg(long)]
        values: PathBuf,

        /// Raw original record; unchanged values are skipped
        #[arg(long)]
        original: Option<PathBuf>,

        /// Emit the direct object update shape
        #[arg(long)]
        direct: bool,

        /// Fail when a required field is not set
        #[arg(long)]
        validate: bool,
    },
    /// Format one value for a field type
    Format {
        /// Field type name, e.g. TaxonomyFieldTypeMulti
        #[arg(long = "type")]
        field_type: FieldType,

        /// Value as JSON
        #[arg(long)]
        value: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_str().to_lowercase()));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let schema = || -> Result<_> {
        let path = args.schema.as_ref().context("--schema is required for this command")?;
        load_schema(path)
    };

    match &args.command {
        Command::Extract { record, safe } => {
            let schema = schema()?;
            let out = extract_command(&schema, &read_json(record)?, *safe)?;
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Command::Updates {
            values,
            original,
            direct,
            validate,
        } => {
            let schema = schema()?;
            let original = original.as_deref().map(read_json).transpose()?;
            let out = updates_command(
                &schema,
                &read_json(values)?,
                original.as_ref(),
                *direct,
                *validate,
            )?;
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Command::Format { field_type, value } => {
            let value = serde_json::from_str(value)
                .with_context(|| format!("--value is not valid JSON: {value}"))?;
            println!("{}", format_command(*field_type, &value)?);
        }
    }
    Ok(())
}
