use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use mealplan::config::Config;
use mealplan::logging::init_tracing;
use mealplan::script::{read_script, run_script};
use mealplan::ui::planner::GlobalState;
use mealplan::ui::provider::{use_global_state, GlobalProvider};

#[derive(Debug, Parser)]
#[command(name = "mealplan", version, about = "Drive the meal planner state from the command line")]
struct Cli {
    /// Config file (defaults to the platform config directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter directive, overrides the config file.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply an action script to a fresh store and print the final state.
    Apply {
        /// JSON Lines script; reads stdin when omitted or "-".
        file: Option<PathBuf>,

        /// Print the state on a single line.
        #[arg(long)]
        compact: bool,
    },
    /// Print the effective configuration.
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_tracing(&config.logging);
    debug!(?config, "configuration loaded");

    match cli.command {
        Command::Apply { file, compact } => {
            let state = apply(file, config.output.pretty && !compact)?;
            debug!(
                ingredients = state.ingredients.len(),
                meals = state.meals.len(),
                "final state"
            );
        }
        Command::Config => {
            let rendered = toml::to_string_pretty(&config).context("Failed to render config")?;
            print!("{rendered}");
        }
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
        config.validate().context("Invalid --log-level")?;
    }
    Ok(config)
}

fn apply(file: Option<PathBuf>, pretty: bool) -> Result<GlobalState> {
    let lines = match script_source(file) {
        Some(path) => {
            let reader = File::open(&path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            read_script(reader)
        }
        None => read_script(io::stdin().lock()),
    }
    .context("Failed to load action script")?;

    let provider = GlobalProvider::new();
    let scope = provider.scope();
    let context = use_global_state(&scope)?;
    run_script(&context.dispatch, lines);

    let state = use_global_state(&scope)?.state;
    let rendered = if pretty {
        serde_json::to_string_pretty(&state)?
    } else {
        serde_json::to_string(&state)?
    };
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    Ok(state)
}

fn script_source(file: Option<PathBuf>) -> Option<PathBuf> {
    file.filter(|path| path.as_os_str() != "-")
}
