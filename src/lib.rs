//! GoPro deblurring dataset reorganizer
//!
//! This library flattens the nested GoPro dataset layout
//! (`<split>/<scene>/{blur,sharp}/<image>`) into the paired A/B layout
//! (`<split>/{A,B}/<scene>_<image>`) used by image-to-image translation training.

pub mod config;
pub mod io;
pub mod progress;
pub mod reorganize;
pub mod types;

// Re-export commonly used types and functions
pub use config::Args;
pub use io::{ensure_directory, setup_split_directories};
pub use progress::{IndicatifReporter, NoopReporter, ProgressReporter};
pub use reorganize::reorganize;
pub use types::{ReorganizeStats, SplitDirs};
