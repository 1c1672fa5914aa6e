use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use gymjudge::config::PanelSettings;
use gymjudge::error::JudgeResult;
use std::process;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Artistic gymnastics judging score engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with panel settings; explicit CLI flags still win.
    #[arg(global = true, long)]
    settings: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply edits to a record and print the score breakdown.
    Score(cmd::score::ScoreArgs),
    /// Compare a judge's E score with the panel's.
    Consistency(cmd::consistency::ConsistencyArgs),
    /// Print the consistency percentage table.
    Table,
    /// List legal element-group values for a discipline and event.
    Catalog(cmd::catalog::CatalogArgs),
}

fn resolve_settings(
    path: Option<&str>,
    cli_panel: &PanelSettings,
    sub_matches: Option<&clap::ArgMatches>,
) -> JudgeResult<PanelSettings> {
    let Some(path) = path else {
        return Ok(cli_panel.clone());
    };

    info!("Loading panel settings from: {}", path);
    let mut settings = PanelSettings::load_from_file(path)?;
    match sub_matches {
        Some(m) => settings.merge_from_cli(cli_panel, m),
        None => warn!("No subcommand matches; CLI panel overrides ignored."),
    }
    Ok(settings)
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        Commands::Score(args) => resolve_settings(
            cli.settings.as_deref(),
            &args.config.panel,
            matches.subcommand_matches("score"),
        )
        .and_then(|settings| cmd::score::run(args, &settings)),
        Commands::Consistency(args) => cmd::consistency::run(args),
        Commands::Table => {
            reports::print_percentage_table();
            Ok(())
        }
        Commands::Catalog(args) => cmd::catalog::run(args),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
