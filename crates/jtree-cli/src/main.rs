//! `jtree` CLI — decode, check and render JSON documents from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Decode and re-render (stdin → stdout)
//! echo '{"name":"Alice","age":30}' | jtree parse
//!
//! # Require a particular root variant
//! jtree parse --as array -i data.json -o data.out.json
//!
//! # Validate only; prints "ok" or fails with the error kind and byte offset
//! jtree check -i data.json --max-depth 64
//!
//! # Indented output through serde_json
//! jtree pretty -i data.json
//!
//! # Log decoder activity
//! jtree -vvvv check -i data.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{ErrorLevel, Verbosity};
use jtree_core::{Decoder, Node, NodeKind, DEFAULT_MAX_DEPTH, MAX_DEPTH_CEILING};
use std::io::{self, Read};

#[derive(Parser, Debug)]
#[command(
    name = "jtree",
    version,
    about = "Decode, check and render JSON documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a document and write it back out in jtree's rendering
    Parse {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        #[command(flatten)]
        decode: DecodeArgs,
    },
    /// Check that a document decodes, reporting where it fails if not
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        #[command(flatten)]
        decode: DecodeArgs,
    },
    /// Decode a document and write it as indented JSON
    Pretty {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        #[command(flatten)]
        decode: DecodeArgs,
    },
}

#[derive(clap::Args, Debug)]
struct DecodeArgs {
    /// Required root variant
    #[arg(long = "as", value_enum, default_value_t = RootKind::Any)]
    root: RootKind,
    /// Maximum nesting depth of objects and arrays
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_DEPTH as u16,
        value_parser = clap::value_parser!(u16).range(0..=MAX_DEPTH_CEILING as i64),
    )]
    max_depth: u16,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum RootKind {
    Any,
    Object,
    Array,
    String,
    Number,
    Bool,
    Null,
}

impl RootKind {
    fn node_kind(self) -> Option<NodeKind> {
        match self {
            RootKind::Any => None,
            RootKind::Object => Some(NodeKind::Object),
            RootKind::Array => Some(NodeKind::Array),
            RootKind::String => Some(NodeKind::String),
            RootKind::Number => Some(NodeKind::Number),
            RootKind::Bool => Some(NodeKind::Bool),
            RootKind::Null => Some(NodeKind::Null),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .format_timestamp(None)
        .init();

    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Parse {
            input,
            output,
            decode,
        } => {
            let root = decode_input(input.as_deref(), &decode)?;
            write_output(output.as_deref(), &root.render())?;
        }
        Commands::Check { input, decode } => {
            let root = decode_input(input.as_deref(), &decode)?;
            log::info!("{} root is valid", root.kind());
            println!("ok");
        }
        Commands::Pretty {
            input,
            output,
            decode,
        } => {
            let root = decode_input(input.as_deref(), &decode)?;
            let pretty = serde_json::to_string_pretty(&root)?;
            write_output(output.as_deref(), &pretty)?;
        }
    }

    Ok(())
}

/// Read the input and decode it with the requested depth limit and root kind.
fn decode_input(path: Option<&str>, args: &DecodeArgs) -> Result<Node> {
    let bytes = read_input(path)?;
    let decoder = Decoder::new().with_max_depth(usize::from(args.max_depth));
    let source = path.unwrap_or("<stdin>");
    let root = match args.root.node_kind() {
        Some(kind) => decoder.decode_kind(&bytes, kind),
        None => decoder.decode(&bytes),
    };
    root.with_context(|| format!("Failed to decode JSON from {}", source))
}

fn read_input(path: Option<&str>) -> Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path).with_context(|| format!("Failed to read file: {}", path)),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
