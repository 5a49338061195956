use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::SENTINEL_FILE;

/// Find VM state folders below `root`
///
/// The root itself counts as depth 0. A directory qualifies when it directly
/// contains [`SENTINEL_FILE`]; qualifying directories are not descended into.
/// Directories that cannot be read are skipped rather than failing the scan.
///
/// # Returns
/// Matching directories ordered by their full path string, so `a-b` sorts
/// before `a/x`.
pub fn discover(root: &Path, max_depth: usize) -> Vec<PathBuf> {
    debug!("Scanning {} (max depth {})", root.display(), max_depth);

    let mut found = Vec::new();
    let mut walker = WalkDir::new(root)
        .follow_links(false)
        .max_depth(max_depth)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        if is_vm_dir(entry.path()) {
            debug!("Found VM folder: {}", entry.path().display());
            found.push(entry.into_path());
            walker.skip_current_dir();
        }
    }

    found.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    info!("Discovered {} VM folders under {}", found.len(), root.display());
    found
}

/// Whether `dir` directly contains the sentinel
///
/// Only presence matters: any entry that does not resolve to a directory
/// counts, including dangling symlinks and special files.
pub fn is_vm_dir(dir: &Path) -> bool {
    let sentinel = dir.join(SENTINEL_FILE);
    if fs::symlink_metadata(&sentinel).is_err() {
        return false;
    }
    !fs::metadata(&sentinel).is_ok_and(|m| m.is_dir())
}
