use clap::Parser;
use quickref::{
    catalog::{LessonCatalog, Registry},
    cli::commands::{list::ListCommand, run::RunCommand, CommandHandler, CommandResult},
    cli::Cli,
    logging::initialize_tracing,
    Result,
};
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = initialize_tracing(cli.log_level, cli.quiet, cli.log_file.as_deref()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match execute(cli) {
        Ok(result) => {
            if let Some(message) = result.message() {
                eprintln!("{}", message);
            }
            ExitCode::from(result.exit_code())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> Result<CommandResult> {
    // Load phase: a duplicate example name stops here, before anything runs
    let registry = Registry::builtin()?;
    let lessons = LessonCatalog::builtin()?;
    debug!(action = cli.action(), "Catalog loaded");

    if cli.list {
        let command = ListCommand::new(&registry, &lessons, cli.json);
        debug!("Executing {} command", command.name());
        return command.execute();
    }

    let mut command = RunCommand::new(&registry, &lessons);
    command.names = cli.names;
    command.lesson = cli.lesson;
    command.config = cli.config;
    command.output_dir = cli.output_dir;
    command.show_source = !cli.no_source;
    debug!("Executing {} command", command.name());
    command.execute()
}
