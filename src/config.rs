use clap::Parser;

/// Command-line arguments parser for reorganizing the GoPro deblurring dataset.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct Args {
    /// Directory containing the original dataset, one subfolder per split
    #[arg(short = 'i', long = "input_dir")]
    pub input_dir: String,

    /// Directory to write the flattened A/B layout into
    #[arg(short = 'o', long = "output_dir")]
    pub output_dir: String,

    /// Disable progress bars; output content is unaffected
    #[arg(long = "no_progress")]
    pub no_progress: bool,
}
