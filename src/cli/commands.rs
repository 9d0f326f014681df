//! Command execution: resolve the brew and print it

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Generator};
use tracing::{debug, instrument};

use crate::application::services::BrewService;
use crate::cli::args::{Cli, OutputFormat};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;

/// Execute the command line.
pub fn execute(cli: &Cli) -> CliResult<()> {
    if let Some(shell) = cli.completion {
        print_completions(shell, &mut Cli::command());
        return Ok(());
    }

    let settings = Settings::load()?;
    brew(cli, &BrewService::new(settings))
}

#[instrument(level = "debug", skip_all)]
fn brew(cli: &Cli, service: &BrewService) -> CliResult<()> {
    let input = cli.brew_input();
    debug!("brew input: {:?}", input);
    let outcome = service.brew(&input)?;

    match cli.format {
        OutputFormat::Text => {
            for line in outcome.render_text() {
                output::info(&line);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&outcome)
                .map_err(|e| CliError::Output(e.to_string()))?;
            output::info(&json);
        }
    }
    Ok(())
}

fn print_completions<G: Generator>(gen: G, cmd: &mut clap::Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
