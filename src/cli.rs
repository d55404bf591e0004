use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "emoscore")]
#[command(about = "Simulated emotion-score generation", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a photo over the attacker categories
    Process {
        /// Path to the photo to process
        photo_path: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Seed the random source for reproducible scores
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Simulate one violent and one calm dataset response
    Simulate {
        /// Seed the random source for reproducible scores
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_process_command() {
        let args = vec![
            "emoscore",
            "process",
            "uploads/attacker.jpg",
            "--output",
            "scores.json",
            "--seed",
            "7",
        ];

        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Process {
                photo_path,
                output,
                seed,
            } => {
                assert_eq!(photo_path, PathBuf::from("uploads/attacker.jpg"));
                assert_eq!(output, Some(PathBuf::from("scores.json")));
                assert_eq!(seed, Some(7));
            }
            _ => panic!("Expected Process command"),
        }
    }

    #[test]
    fn test_cli_parsing_process_defaults_to_stdout() {
        let cli = Cli::parse_from(vec!["emoscore", "process", "photo.png"]);

        match cli.command {
            Commands::Process { output, seed, .. } => {
                assert_eq!(output, None);
                assert_eq!(seed, None);
            }
            _ => panic!("Expected Process command"),
        }
    }

    #[test]
    fn test_cli_parsing_simulate_command() {
        let cli = Cli::parse_from(vec!["emoscore", "simulate", "--seed", "42"]);

        match cli.command {
            Commands::Simulate { seed } => {
                assert_eq!(seed, Some(42));
            }
            _ => panic!("Expected Simulate command"),
        }
    }

    #[test]
    fn test_cli_parsing_init_command() {
        let cli = Cli::parse_from(vec!["emoscore", "init", "--force"]);

        match cli.command {
            Commands::Init { force } => {
                assert!(force);
            }
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_process_requires_photo_path() {
        let result = Cli::try_parse_from(vec!["emoscore", "process"]);
        assert!(result.is_err());
    }
}
