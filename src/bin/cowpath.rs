//! cowpath - path operations on JSON/YAML documents
//!
//! Reads a document, applies one operation at a path and writes the result.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path as FsPath;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use cowpath::{value, Error, Path, Result, Value};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "cowpath", version, about = "Path operations on JSON/YAML documents")]
struct Cli {
    /// Input document. Use '-' for stdin
    #[arg(short, long, default_value = "-")]
    input: String,

    /// Output location. Use '-' for stdout
    #[arg(short, long, default_value = "-")]
    output: String,

    /// Document format. Defaults to the input file extension, else json
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Pretty-print json output
    #[arg(long)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the value at PATH
    Get { path: String },
    /// Report whether a value exists at PATH
    Has { path: String },
    /// Store VALUE at PATH
    Set { path: String, value: String },
    /// Remove the entry at PATH
    Remove { path: String },
    /// Deep-merge VALUE into the value at PATH
    Merge { path: String, value: String },
    /// Append VALUE to the list at PATH, or store it there
    Add { path: String, value: String },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("COWPATH_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let format = cli.format.unwrap_or_else(|| detect_format(&cli.input));
    let document = decode(&read_input(&cli.input)?, format)?;

    let mut output: Box<dyn Write> = if cli.output == "-" {
        Box::new(io::stdout())
    } else {
        Box::new(fs::File::create(&cli.output).map_err(|e| Error::io(&cli.output, e))?)
    };

    let result = match cli.command {
        Command::Get { path } => match cowpath::get(parse_path(&path)?, &document) {
            Some(found) => found,
            None => {
                tracing::debug!(%path, "no value at path");
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Has { path } => {
            let found = cowpath::has(parse_path(&path)?, &document);
            writeln!(output, "{}", found).map_err(|e| Error::io(&cli.output, e))?;
            return Ok(if found {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            });
        }
        Command::Set { path, value } => {
            cowpath::set(parse_path(&path)?, parse_operand(&value), document)
        }
        Command::Remove { path } => cowpath::remove(parse_path(&path)?, document),
        Command::Merge { path, value } => {
            cowpath::merge(parse_path(&path)?, parse_operand(&value), document)
        }
        Command::Add { path, value } => {
            cowpath::add(parse_path(&path)?, parse_operand(&value), document)
        }
    };

    let encoded = encode(&result, format, cli.pretty)?;
    write!(output, "{}", encoded).map_err(|e| Error::io(&cli.output, e))?;
    Ok(ExitCode::SUCCESS)
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| Error::io("<stdin>", e))?;
        return Ok(content);
    }
    fs::read_to_string(input).map_err(|e| Error::io(input, e))
}

fn detect_format(input: &str) -> Format {
    match FsPath::new(input).extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => Format::Yaml,
        _ => Format::Json,
    }
}

fn parse_path(raw: &str) -> Result<Path> {
    Ok(raw.parse::<Path>()?)
}

/// Operands are JSON. Anything that does not parse is taken as a string.
fn parse_operand(raw: &str) -> Value {
    value::from_json(raw).unwrap_or_else(|_| Value::from(raw))
}

fn decode(content: &str, format: Format) -> Result<Value> {
    if content.trim().is_empty() {
        return Ok(Value::empty_map());
    }
    Ok(match format {
        Format::Json => value::from_json(content)?,
        Format::Yaml => value::from_yaml(content)?,
    })
}

fn encode(result: &Value, format: Format, pretty: bool) -> Result<String> {
    Ok(match format {
        Format::Json if pretty => value::to_json_pretty(result)? + "\n",
        Format::Json => value::to_json(result)? + "\n",
        Format::Yaml => value::to_yaml(result)?,
    })
}
