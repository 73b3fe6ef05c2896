use crate::types::config::ScanSettings;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Candidate dataset files under `root`, sorted by path.
pub fn list_files(root: &Path, settings: &ScanSettings) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_excluded(entry, settings))
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| has_extension(path, settings))
        .collect();
    files.sort();
    files
}

fn is_excluded(entry: &DirEntry, settings: &ScanSettings) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| settings.exclude.iter().any(|excluded| excluded == name))
}

pub fn has_extension(path: &Path, settings: &ScanSettings) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            settings
                .extensions
                .iter()
                .any(|wanted| wanted.eq_ignore_ascii_case(ext))
        })
}
