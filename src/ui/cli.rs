use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "oas-ts-gen")]
#[command(author, version, about = "Swagger/OpenAPI to TypeScript client generator")]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Generate TypeScript client files from an OpenAPI document
  Generate(GenerateCommand),
  /// List information from an OpenAPI document
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
}

#[derive(Args, Debug)]
pub struct GenerateCommand {
  /// Path or HTTP(S) URL of the input document (YAML or JSON)
  #[arg(short, long, value_name = "FILE_OR_URL")]
  pub input: String,

  /// Directory the generated files are written into
  #[arg(short, long, value_name = "DIR")]
  pub output: PathBuf,

  /// Treat as a monolithic API and split services by OpenAPI tag (default)
  #[arg(short, long, default_value_t = false)]
  pub monolith: bool,

  /// Treat as a microservice API and generate a single service directory,
  /// ignoring tags
  #[arg(short, long, default_value_t = false, conflicts_with = "monolith")]
  pub service: bool,

  /// Service name used in single-service mode
  #[arg(short, long, value_name = "NAME")]
  pub name: Option<String>,

  /// Major version of the axios runtime the generated functions target
  #[arg(long, value_name = "VERSION", default_value_t = 0)]
  pub client_major: u32,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List all operations defined in the document
  Operations {
    /// Path or HTTP(S) URL of the input document
    #[arg(short, long, value_name = "FILE_OR_URL")]
    input: String,
  },
}
