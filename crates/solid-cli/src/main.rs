//! Solid CLI - worked examples of two SOLID design principles
//!
//! Runs the scripted journal and product-filter demos from `solid-core`,
//! choosing a printer from the output mode.

mod cli;
mod constants;
mod output;
mod ui;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use solid_core::SolidError;

use crate::cli::{Cli, Commands};
use crate::constants::exit_codes;
use crate::output::{JsonPrinter, TerminalPrinter};
use crate::ui::{print_error, write_stdout, Terminal, UiContext};

fn main() {
    let cli = Cli::parse();
    cli.setup_logging();

    let ctx = UiContext::from_cli(&cli, &Terminal::detect());
    if let Err(err) = run(&cli, &ctx) {
        tracing::debug!(error = ?err, "run failed");
        print_error(&ctx, &err.to_string());
        std::process::exit(exit_code(&err));
    }
}

fn run(cli: &Cli, ctx: &UiContext) -> anyhow::Result<()> {
    if let Some(Commands::Completions(args)) = &cli.command {
        let mut command = Cli::command();
        generate(args.shell, &mut command, "solid", &mut std::io::stdout());
        return Ok(());
    }

    let demos = cli.demos().unwrap_or_default();
    if ctx.mode.is_json() {
        let mut printer = JsonPrinter::new();
        for demo in &demos {
            demo.run(&mut printer)?;
        }
        write_stdout(&serde_json::to_string_pretty(&printer.finish())?);
    } else {
        let mut printer = TerminalPrinter::new(ctx.clone(), cli.quiet);
        for demo in &demos {
            demo.run(&mut printer)?;
        }
    }
    Ok(())
}

/// Map an error to the process exit code.
fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<SolidError>() {
        Some(SolidError::OutOfRange { .. }) => exit_codes::OUT_OF_RANGE,
        Some(SolidError::EntryNotFound(_)) => exit_codes::NOT_FOUND,
        None => exit_codes::FAILURE,
    }
}
