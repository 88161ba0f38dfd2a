use std::process::ExitCode;

use anyhow::Result;

use crate::{
    backend,
    cli::{Cli, Command},
    domain::{self, display_log::MessageAuthor},
    infra, ui,
    usecases::{
        self,
        ask::{ask, AskOutput},
        bootstrap,
    },
};

pub fn run(cli: Cli) -> Result<ExitCode> {
    tracing::debug!(
        ui = ui::module_name(),
        domain = domain::module_name(),
        backend = backend::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    match cli.command_or_default() {
        Command::Run => {
            let context = bootstrap::bootstrap(cli.config.as_deref())?;
            let mut shell = bootstrap::compose_shell(&context);
            ui::shell::start(
                &context,
                shell.event_source.as_mut(),
                shell.orchestrator.as_mut(),
            )?;
        }
        Command::Ask { text } => {
            let context = bootstrap::bootstrap(cli.config.as_deref())?;
            let (mut controller, completions) = bootstrap::compose_exchanges(&context);
            let output = ask(&mut controller, &completions, &text.join(" "))?;

            tracing::info!(outcome = ?output.outcome, "one-shot exchange finished");
            match answer_text(output) {
                Ok(reply) => println!("{reply}"),
                Err(error_text) => {
                    eprintln!("{error_text}");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Reply text for stdout, or the error entry text for stderr.
fn answer_text(output: AskOutput) -> Result<String, String> {
    match output.message.author {
        MessageAuthor::Error => Err(output.message.text),
        MessageAuthor::User | MessageAuthor::Assistant => Ok(output.message.text),
    }
}
