use log::info;
use std::fs;
use std::io;
use std::path::Path;

use crate::io::{annotate, ensure_directory, list_files, list_subdirectories, setup_split_directories};
use crate::progress::ProgressReporter;
use crate::types::{ReorganizeStats, SplitDirs, BLUR_DIR, SHARP_DIR};

/// Main reorganization pipeline.
///
/// Walks the two-level hierarchy under `input_root` (split, then scene) and
/// copies every file found in a scene's `blur` and `sharp` subfolders into the
/// split's flat `A` and `B` folders, prefixing each destination name with the
/// scene folder name. Output directories are created lazily; existing files are
/// overwritten. The first I/O failure aborts the run, leaving any output
/// produced so far in place.
pub fn reorganize(
    input_root: &Path,
    output_root: &Path,
    reporter: &dyn ProgressReporter,
) -> io::Result<ReorganizeStats> {
    let mut stats = ReorganizeStats::new();
    ensure_directory(output_root)?;

    for split_path in list_subdirectories(input_root)? {
        let split_name = directory_name(&split_path)?;
        let split_dirs = setup_split_directories(output_root, &split_name)?;

        let scenes = list_subdirectories(&split_path)?;
        info!(
            "Reorganizing split '{}' ({} scenes)...",
            split_name,
            scenes.len()
        );

        let pb = reporter.for_len(scenes.len() as u64, &split_name);
        for scene_path in &scenes {
            copy_scene(scene_path, &split_dirs, &mut stats)?;
            stats.scenes += 1;
            pb.inc();
        }
        pb.finish("done");

        stats.splits += 1;
    }

    Ok(stats)
}

/// Copy one scene's blur/sharp files into the split's A/B folders
fn copy_scene(
    scene_path: &Path,
    split_dirs: &SplitDirs,
    stats: &mut ReorganizeStats,
) -> io::Result<()> {
    let scene_name = directory_name(scene_path)?;

    stats.blurred_copied += copy_flattened(
        &scene_path.join(BLUR_DIR),
        &split_dirs.blurred_dir,
        &scene_name,
    )?;
    stats.sharp_copied += copy_flattened(
        &scene_path.join(SHARP_DIR),
        &split_dirs.sharp_dir,
        &scene_name,
    )?;

    Ok(())
}

/// Copy every file in `src_dir` into `dest_dir` as `<prefix>_<filename>`,
/// overwriting existing destinations. Returns the number of files copied.
fn copy_flattened(src_dir: &Path, dest_dir: &Path, prefix: &str) -> io::Result<usize> {
    let mut copied = 0;
    for file in list_files(src_dir)? {
        let file_name = file
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| invalid_name(&file))?;
        let dest = dest_dir.join(format!("{}_{}", prefix, file_name));
        fs::copy(&file, &dest).map_err(|e| annotate(e, "copy", &file))?;
        copied += 1;
    }
    Ok(copied)
}

fn directory_name(path: &Path) -> io::Result<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_owned)
        .ok_or_else(|| invalid_name(path))
}

fn invalid_name(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("name is not valid UTF-8: {}", path.display()),
    )
}
