use std::path::{Path, PathBuf};

use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  codegen,
  generator::orchestrator::{GeneratorOptions, Orchestrator, ServiceGrouping},
  ui::{Colors, GenerateCommand},
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub input: String,
  pub output: PathBuf,
  pub grouping: ServiceGrouping,
  pub client_major: u32,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> Self {
    let GenerateCommand {
      input,
      output,
      monolith: _,
      service,
      name,
      client_major,
      quiet,
    } = command;

    // Monolith is the default; `--service` is the explicit opt-out.
    let grouping = if service {
      ServiceGrouping::SingleService { name }
    } else {
      ServiceGrouping::ByTag
    };

    Self {
      input,
      output,
      grouping,
      client_major,
      quiet,
    }
  }

  fn generator_options(&self) -> GeneratorOptions {
    GeneratorOptions {
      grouping: self.grouping.clone(),
      modern_client: self.client_major >= 1,
    }
  }
}

struct GenerateLogger<'a> {
  quiet: bool,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(quiet: bool, colors: &'a Colors) -> Self {
    Self { quiet, colors }
  }

  fn info(&self, message: &str) {
    if !self.quiet {
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        message.with(self.colors.primary())
      );
    }
  }

  fn stat(&self, label: &str, value: usize) {
    if !self.quiet {
      println!(
        "            {:<22} {}",
        label.with(self.colors.label()),
        value.to_string().with(self.colors.value())
      );
    }
  }

  fn success(&self, message: &str) {
    if !self.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        message.with(self.colors.success())
      );
    }
  }
}

pub async fn generate_client(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(config.quiet, colors);

  logger.info(&format!("Loading OpenAPI document from: {}", config.input));
  let document = super::load_document(&config.input).await?;

  logger.info("Assembling generation contexts...");
  let orchestrator = Orchestrator::new(document, config.generator_options());

  // The three contexts are independent projections; build order is a
  // scheduling choice, not a correctness one.
  let services = orchestrator.service_contexts();
  let model_types = orchestrator.model_types_context()?;
  let runtime_models = orchestrator.runtime_models_context()?;

  let api_directory = config.output.join("api");
  logger.info(&format!("Writing to: {}", api_directory.display()));
  write_output(&api_directory, &services, &model_types, &runtime_models).await?;

  logger.stat("Services generated:", services.len());
  logger.stat(
    "Functions generated:",
    services.iter().map(|s| s.functions.len()).sum(),
  );
  logger.stat("Models generated:", model_types.models.len());
  logger.stat("Enums generated:", model_types.enums.len());
  logger.stat("Unions generated:", model_types.unions.len());

  logger.success("Successfully generated TypeScript client");
  Ok(())
}

async fn write_output(
  api_directory: &Path,
  services: &[crate::generator::contexts::ServiceContext],
  model_types: &crate::generator::contexts::ModelTypesContext,
  runtime_models: &crate::generator::contexts::RuntimeModelsContext,
) -> anyhow::Result<()> {
  tokio::fs::create_dir_all(api_directory).await?;

  for service in services {
    let service_directory = api_directory.join(&service.service_name);
    tokio::fs::create_dir_all(&service_directory).await?;
    tokio::fs::write(service_directory.join("index.ts"), codegen::render_service(service)).await?;
  }

  tokio::fs::write(
    api_directory.join("apiModelTypes.ts"),
    codegen::render_model_types(model_types),
  )
  .await?;
  tokio::fs::write(
    api_directory.join("apiModels.ts"),
    codegen::render_runtime_models(runtime_models),
  )
  .await?;

  Ok(())
}
