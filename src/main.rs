mod config;
mod console;
mod model;

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use matcher::{MatchKind, MutationSession, Termination};

use crate::config::{ConfigError, ToolConfig};
use crate::console::{ConsolePicker, ConsoleUi};
use crate::model::ModelError;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Model(#[from] ModelError),
}

#[derive(Parser, Debug)]
#[command(name = "matchtool", about = "Pick a source element, then paste its attributes onto picked targets")]
struct Cli {
    /// Model snapshot to edit (JSON array of elements).
    #[arg(long, env = "MATCHTOOL_MODEL")]
    model: PathBuf,

    /// Where to write the edited model; omitted means a dry run.
    #[arg(long, env = "MATCHTOOL_OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Copy above/below/prefix/suffix text between dimensions.
    DimText,
    /// Match the centerline midpoint elevation of pipes, ducts, trays, and conduits.
    Elevation,
}

impl From<Command> for MatchKind {
    fn from(command: Command) -> Self {
        match command {
            Command::DimText => MatchKind::DimensionText,
            Command::Elevation => MatchKind::Elevation,
        }
    }
}

fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let config = ToolConfig::from_env()?;
    let mut doc = model::load(&cli.model)?;

    let mut picker = ConsolePicker::new(io::stdin().lock(), io::stdout(), &doc);
    let mut ui = ConsoleUi::new(io::stdout());
    let report = MutationSession::new(&mut doc, &mut picker, &mut ui, cli.command.into())
        .with_options(config.session_options())
        .run();

    match (&cli.output, report.success_count) {
        (Some(path), n) if n > 0 => model::save(path, &doc)?,
        (Some(path), _) => tracing::info!(path = %path.display(), "no changes; output not written"),
        (None, _) => {}
    }

    tracing::debug!(refreshes = ui.refreshes(), "view refreshes issued");
    if let Termination::CaptureFailed(reason) = &report.termination {
        tracing::warn!(error = %reason, code = reason.code(), "session ended without capturing a source");
    }
    Ok(())
}
