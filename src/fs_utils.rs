use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use walkdir::WalkDir;

use crate::constants::{CLEAN_EXTENSIONS, INPUT_EXTENSIONS};

pub fn has_extension(path: &Path, allowed: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| allowed.iter().any(|allow| ext.eq_ignore_ascii_case(allow)))
        .unwrap_or(false)
}

/// Recursive jpg/jpeg discovery for the in-place EXIF stripper. Traversal
/// order is whatever the directory walk yields; unreadable entries are
/// skipped.
pub fn find_jpegs(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| has_extension(path, CLEAN_EXTENSIONS))
        .collect()
}

/// Non-recursive image listing for the editing pipeline, sorted by file name
/// so runs are reproducible.
pub fn collect_input_images(dir: &Path) -> Result<Vec<PathBuf>, String> {
    let entries = fs::read_dir(dir)
        .map_err(|err| format!("Unable to read directory '{}': {}", dir.display(), err))?;

    let mut images = Vec::new();
    for entry in entries {
        let entry = entry
            .map_err(|err| format!("Failed to iterate directory '{}': {}", dir.display(), err))?;
        let path = entry.path();
        if path.is_file() && has_extension(&path, INPUT_EXTENSIONS) {
            images.push(path);
        }
    }

    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(images)
}

/// `a.jpg` becomes `a-processed.jpg`; a file without an extension keeps none.
pub fn processed_file_name(file_name: &str) -> String {
    let path = Path::new(file_name);
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file_name);

    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("{stem}-processed.{ext}"),
        None => format!("{stem}-processed"),
    }
}

/// Hidden sibling name used while rewriting a file in place. The timestamp
/// avoids collisions between consecutive runs.
pub fn temp_file_name(path: &Path) -> PathBuf {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let extension = path.extension().unwrap_or_default().to_string_lossy();

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    parent.join(format!(".{}_tmp_{}.{}", stem, timestamp, extension))
}

pub fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|err| format!("Unable to create directory '{}': {}", path.display(), err))
}
