use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "hours-tui")]
#[command(about = "Terminal UI for logging work hours")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run against the entries API configured in config.toml
    Run,
    /// Run in dev mode with local in-memory data
    Dev,
    /// Print config path and create default file if missing
    ConfigPath,
    /// Write all entries to a CSV file
    Export {
        /// Output file, defaults to work_hours_<today>.csv
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Export the in-memory dev entries instead of the API's
        #[arg(long)]
        dev: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_subcommands() {
        let cli = Cli::try_parse_from(["hours-tui", "dev"]).unwrap();
        assert!(matches!(cli.command, Commands::Dev));

        let cli = Cli::try_parse_from(["hours-tui", "config-path"]).unwrap();
        assert!(matches!(cli.command, Commands::ConfigPath));
    }

    #[test]
    fn parses_export_options() {
        let cli = Cli::try_parse_from(["hours-tui", "export"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Export {
                output: None,
                dev: false
            }
        ));

        let cli =
            Cli::try_parse_from(["hours-tui", "export", "--output", "out.csv", "--dev"]).unwrap();
        match cli.command {
            Commands::Export { output, dev } => {
                assert_eq!(output, Some(PathBuf::from("out.csv")));
                assert!(dev);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["hours-tui"]).is_err());
    }
}
