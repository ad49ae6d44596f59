//! `djson` CLI: read and edit JSON documents by dotted path.
//!
//! ## Usage
//!
//! ```sh
//! # Read a nested value (stdin → stdout)
//! echo '{"a":{"b":[1,2,3]}}' | djson get a.b.1
//!
//! # Overwrite an existing value; VALUE is JSON text
//! djson set -i doc.json -o doc.json user.name '"Bea"'
//!
//! # Remove an array element (later elements shift left)
//! djson delete -i doc.json a.b.0
//!
//! # Print the kind of a value
//! djson kind -i doc.json a.b
//!
//! # Re-encode a document, optionally pretty-printed
//! djson fmt --pretty -i doc.json
//! ```
//!
//! Logging goes to stderr. `-v` enables debug output, `-vv` trace output;
//! `RUST_LOG` takes precedence when set.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use djson_core::{EncodeStyle, Value};
use std::io::{self, Read, Write};

#[derive(Parser)]
#[command(
    name = "djson",
    version,
    about = "Read and edit JSON documents by dotted path"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Args)]
struct IoArgs {
    /// Input file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value at PATH
    Get {
        /// Dotted path, e.g. `users.0.name`
        path: String,
        #[command(flatten)]
        io: IoArgs,
    },
    /// Overwrite the existing value at PATH and print the updated document
    Set {
        /// Dotted path of an existing value
        path: String,
        /// Replacement value as JSON text (quote strings: '"text"')
        value: String,
        #[command(flatten)]
        io: IoArgs,
    },
    /// Remove the value at PATH and print the updated document
    Delete {
        /// Dotted path of an existing value
        path: String,
        #[command(flatten)]
        io: IoArgs,
    },
    /// Print the kind (null, bool, number, string, array, object) of the value at PATH
    Kind {
        /// Dotted path, e.g. `users.0`
        path: String,
        #[command(flatten)]
        io: IoArgs,
    },
    /// Re-encode the whole document
    Fmt {
        #[command(flatten)]
        io: IoArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Get { path, io } => {
            let doc = read_document(io.input.as_deref())?;
            let value = doc
                .get_path(&path)
                .with_context(|| format!("Failed to get '{}'", path))?;
            write_value(&io, value)?;
        }
        Commands::Set { path, value, io } => {
            let mut doc = read_document(io.input.as_deref())?;
            let value = djson_core::decode_str(&value)
                .with_context(|| format!("Replacement value is not valid JSON: {}", value))?;
            doc.set_path(&path, value)
                .with_context(|| format!("Failed to set '{}'", path))?;
            write_value(&io, &doc)?;
        }
        Commands::Delete { path, io } => {
            let mut doc = read_document(io.input.as_deref())?;
            doc.delete_path(&path)
                .with_context(|| format!("Failed to delete '{}'", path))?;
            write_value(&io, &doc)?;
        }
        Commands::Kind { path, io } => {
            let doc = read_document(io.input.as_deref())?;
            let value = doc
                .get_path(&path)
                .with_context(|| format!("Failed to get '{}'", path))?;
            write_output(io.output.as_deref(), format!("{}\n", value.kind()).as_bytes())?;
        }
        Commands::Fmt { io } => {
            let doc = read_document(io.input.as_deref())?;
            write_value(&io, &doc)?;
        }
    }

    Ok(())
}

/// Default filter is `warn`; each `-v` raises it one level. `RUST_LOG` wins.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn read_document(path: Option<&str>) -> Result<Value> {
    let bytes = match path {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("Failed to read file: {}", path))?
        }
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
    };
    log::debug!("read {} bytes", bytes.len());
    djson_core::decode(&bytes).context("Failed to decode JSON document")
}

fn write_value(io_args: &IoArgs, value: &Value) -> Result<()> {
    let style = if io_args.pretty {
        EncodeStyle::Pretty
    } else {
        EncodeStyle::Compact
    };
    let mut out = djson_core::encode_with(value, style);
    out.push(b'\n');
    write_output(io_args.output.as_deref(), &out)
}

fn write_output(path: Option<&str>, content: &[u8]) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            io::stdout()
                .write_all(content)
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
