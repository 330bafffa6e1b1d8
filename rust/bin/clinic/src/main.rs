//! `clinic`: Smiley Dental Clinic terminal console.
//!
//! Runs the clinic shell (login, patients, module panels) in the
//! terminal and manages its config file.

mod console;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use clinic_core::ClinicConfig;

/// Smiley Dental Clinic console.
#[derive(Parser, Debug)]
#[command(name = "clinic", about = "Smiley Dental Clinic and Services")]
struct Cli {
    /// Path to config file (default: ~/.clinic/config.toml).
    #[arg(long = "config", global = true)]
    config: Option<String>,

    /// Log filter, e.g. `debug` or `clinic_bff=trace` (overrides RUST_LOG).
    #[arg(long = "log", global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the interactive console (default).
    Run,

    /// Inspect or create the config file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version.
    Version,
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the effective config as TOML.
    Show,
    /// Write a default config file.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

fn init_tracing(cli_filter: Option<&str>, config: &ClinicConfig) {
    let filter = match cli_filter {
        Some(f) => EnvFilter::new(f),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn config_init(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file {} already exists. Use --force to overwrite.",
            path.display()
        );
    }
    ClinicConfig::default()
        .save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Console history file; an empty setting disables history.
fn history_path(config: &ClinicConfig) -> Option<PathBuf> {
    if config.history_file.is_empty() {
        None
    } else {
        Some(PathBuf::from(&config.history_file))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .map(PathBuf::from)
        .unwrap_or_else(ClinicConfig::default_path);

    let config = ClinicConfig::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    init_tracing(cli.log.as_deref(), &config);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let history = history_path(&config);
            let console = console::Console::new(config).await;
            console.run(history).await?;
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                println!("# {}", config_path.display());
                print!("{}", config.to_toml()?);
            }
            ConfigAction::Init { force } => {
                config_init(&config_path, force)?;
            }
        },

        Commands::Version => {
            println!("clinic v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_to_run() {
        let cli = Cli::try_parse_from(["clinic"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn cli_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["clinic", "config", "show", "--config", "/tmp/c.toml"]).unwrap();
        assert_eq!(cli.config.as_deref(), Some("/tmp/c.toml"));
        assert!(matches!(
            cli.command,
            Some(Commands::Config { action: ConfigAction::Show })
        ));
    }

    #[test]
    fn config_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        config_init(&path, false).unwrap();
        assert_eq!(ClinicConfig::load(&path).unwrap(), ClinicConfig::default());

        assert!(config_init(&path, false).is_err());
        config_init(&path, true).unwrap();
    }

    #[test]
    fn history_disabled_when_empty() {
        let mut config = ClinicConfig::default();
        assert!(history_path(&config).is_none());
        config.history_file = "/tmp/clinic_history".into();
        assert_eq!(history_path(&config), Some(PathBuf::from("/tmp/clinic_history")));
    }
}
