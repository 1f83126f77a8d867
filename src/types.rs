use std::path::PathBuf;

// Names of the paired image subfolders inside each scene
pub const BLUR_DIR: &str = "blur";
pub const SHARP_DIR: &str = "sharp";

// Names of the flattened output subfolders: A holds model inputs (blurred),
// B holds targets (sharp)
pub const A_DIR: &str = "A";
pub const B_DIR: &str = "B";

// Struct to hold the paths to one split's output directories
pub struct SplitDirs {
    pub blurred_dir: PathBuf,
    pub sharp_dir: PathBuf,
}

// Struct to hold run statistics
#[derive(Debug, Default, Clone)]
pub struct ReorganizeStats {
    pub splits: usize,
    pub scenes: usize,
    pub blurred_copied: usize,
    pub sharp_copied: usize,
}

impl ReorganizeStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn print_summary(&self) {
        log::info!("=== Reorganization Summary ===");
        log::info!("Splits processed: {}", self.splits);
        log::info!("Scenes processed: {}", self.scenes);
        log::info!("Blurred images copied to A: {}", self.blurred_copied);
        log::info!("Sharp images copied to B: {}", self.sharp_copied);

        if self.blurred_copied != self.sharp_copied {
            log::warn!(
                "Blurred and sharp counts differ ({} vs {}); the dataset is not fully paired",
                self.blurred_copied,
                self.sharp_copied
            );
        }
    }
}
