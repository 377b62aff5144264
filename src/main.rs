//! devplan-schema - Generate a detailed technical schema from a project description.
//!
//! Reads a JSON document of project attributes from a file or stdin and
//! writes the derived schema to stdout.

use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::{error, info};

use devplan_schema::config::{AppConfig, OutputFormat};
use devplan_schema::domain::catalog::validate_reference_tables;
use devplan_schema::{telemetry, GenerateSchemaCommand, GenerateSchemaHandler};

#[derive(Parser, Debug)]
#[command(name = "devplan-schema")]
#[command(about = "Derive a technical project schema from a short project description", long_about = None)]
#[command(version)]
struct Cli {
    /// Input JSON document; reads stdin when omitted or "-"
    input: Option<PathBuf>,

    /// Output format, overriding DEVPLAN__OUTPUT__FORMAT
    #[arg(short, long)]
    format: Option<FormatArg>,

    /// Emit single-line JSON
    #[arg(long)]
    compact: bool,

    /// Check the built-in reference tables and exit
    #[arg(long)]
    check_tables: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Json,
    Yaml,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Yaml => OutputFormat::Yaml,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    config.validate()?;
    telemetry::init(&config.log)?;

    if let Some(format) = cli.format {
        config.output.format = format.into();
    }
    if cli.compact {
        config.output.pretty = false;
    }

    validate_reference_tables()?;
    if cli.check_tables {
        info!("Reference tables are valid");
        return Ok(());
    }

    let text = read_input(cli.input.as_ref())?;
    let command = GenerateSchemaCommand::from_json(&text)?;

    let result = GenerateSchemaHandler::default().handle(command).map_err(|err| {
        error!(code = %err.code(), error = %err, "Schema generation failed");
        err
    })?;

    let rendered = config.output.render(&result.document)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    if !rendered.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }

    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path),
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
