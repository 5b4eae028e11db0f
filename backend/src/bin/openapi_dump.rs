//! Print the OpenAPI document as JSON or YAML.

use std::io;

use clap::{Parser, ValueEnum};
use user_registry::doc::ApiDoc;
use utoipa::OpenApi;

/// Output encodings supported by `openapi-dump`.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Format {
    #[default]
    Json,
    Yaml,
}

/// `openapi-dump` command arguments.
#[derive(Debug, Parser)]
#[command(
    name = "openapi-dump",
    about = "Print the user registry OpenAPI document",
    version
)]
struct CliArgs {
    /// Document encoding.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

fn main() -> io::Result<()> {
    let args = CliArgs::parse();
    let doc = ApiDoc::openapi();
    let rendered = match args.format {
        Format::Json => doc.to_pretty_json().map_err(io::Error::other)?,
        Format::Yaml => doc.to_yaml().map_err(io::Error::other)?,
    };
    println!("{rendered}");
    Ok(())
}
