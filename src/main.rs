use clap::Parser;

use pace_intervals::cli::{Cli, Commands};
use pace_intervals::commands::{run_init, run_pace, run_pacer, run_workouts};
use pace_intervals::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Workouts(args) => run_workouts(args, &cli),
        Commands::Pace(args) => run_pace(args, &cli),
        Commands::Pacer(args) => run_pacer(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}
