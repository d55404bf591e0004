use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use emoscore::cli::{Cli, Commands};

fn main() -> Result<()> {
    env_logger::init();

    // Argument errors exit with status 1 rather than clap's default 2;
    // downstream scripts test for 1. Help and version still exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{e}");
                std::process::exit(0);
            }
            _ => {
                eprint!("{e}");
                std::process::exit(1);
            }
        },
    };

    match cli.command {
        Commands::Process {
            photo_path,
            output,
            seed,
        } => {
            let process_config = emoscore::commands::process::ProcessConfig {
                photo_path,
                output,
                seed,
            };
            emoscore::commands::process::handle_process(process_config)
        }
        Commands::Simulate { seed } => {
            let simulate_config = emoscore::commands::simulate::SimulateConfig { seed };
            emoscore::commands::simulate::handle_simulate(simulate_config)
        }
        Commands::Init { force } => emoscore::commands::init::init_config(force),
    }
}
