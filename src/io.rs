use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::types::{SplitDirs, A_DIR, B_DIR};

/// Annotate an I/O error with the operation and path that failed
pub(crate) fn annotate(err: io::Error, op: &str, path: &Path) -> io::Error {
    io::Error::new(
        err.kind(),
        format!("failed to {} {}: {}", op, path.display(), err),
    )
}

/// Create a directory (and any missing parents) if it does not already exist.
/// Existing contents are left untouched.
pub fn ensure_directory(path: &Path) -> io::Result<PathBuf> {
    fs::create_dir_all(path).map_err(|e| annotate(e, "create directory", path))?;
    Ok(path.to_path_buf())
}

/// Set up the A/B directory structure for one split under the output root
pub fn setup_split_directories(output_root: &Path, split: &str) -> io::Result<SplitDirs> {
    let split_dir = ensure_directory(&output_root.join(split))?;

    Ok(SplitDirs {
        blurred_dir: ensure_directory(&split_dir.join(A_DIR))?,
        sharp_dir: ensure_directory(&split_dir.join(B_DIR))?,
    })
}

/// List the subdirectories of `dir`, in directory-listing order (not sorted)
pub fn list_subdirectories(dir: &Path) -> io::Result<Vec<PathBuf>> {
    list_entries(dir, true)
}

/// List the plain files of `dir`, in directory-listing order (not sorted)
pub fn list_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    list_entries(dir, false)
}

fn list_entries(dir: &Path, want_dirs: bool) -> io::Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| annotate(e, "read directory", dir))? {
        let entry = entry.map_err(|e| annotate(e, "read an entry of", dir))?;
        let file_type = entry
            .file_type()
            .map_err(|e| annotate(e, "stat", &entry.path()))?;
        if file_type.is_dir() == want_dirs {
            entries.push(entry.path());
        }
    }
    Ok(entries)
}
