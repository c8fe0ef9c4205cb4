mod codegen;
mod generator;
mod ui;
mod utils;

use clap::Parser;
use ui::{Cli, Commands, ListCommands, commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  let colors = ui::Colors::from_modes(cli.color, cli.theme);

  match cli.command {
    Commands::Generate(command) => {
      let config = commands::GenerateConfig::from_command(command);
      commands::generate_client(config, &colors).await
    }
    Commands::List { list_command } => match list_command {
      ListCommands::Operations { input } => commands::list_operations(&input, &colors).await,
    },
  }
}
