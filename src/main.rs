use clap::Parser;

use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

use gopro2ab::{reorganize, Args, IndicatifReporter, NoopReporter, ProgressReporter};

fn main() -> ExitCode {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let input_root = PathBuf::from(&args.input_dir);
    if !input_root.exists() {
        error!("The specified input_dir does not exist: {}", args.input_dir);
        return ExitCode::FAILURE;
    }
    let output_root = PathBuf::from(&args.output_dir);

    let reporter: Box<dyn ProgressReporter> = if args.no_progress {
        Box::new(NoopReporter)
    } else {
        Box::new(IndicatifReporter)
    };

    info!("Starting the reorganization...");

    match reorganize(&input_root, &output_root, reporter.as_ref()) {
        Ok(stats) => {
            stats.print_summary();
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to reorganize dataset: {}", e);
            ExitCode::FAILURE
        }
    }
}
