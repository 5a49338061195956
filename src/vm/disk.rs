use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;

use super::record::read_field;
use super::{DISK_DIR_PREFIX, files};

const BYTES_PER_GIB: f64 = 1_073_741_824.0;

/// One virtual disk attached to a VM, taken from a `vdb-<device>` directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiskDescriptor {
    pub device: String,
    pub size_bytes: Option<u64>,
}

impl DiskDescriptor {
    pub fn size_gib(&self) -> Option<f64> {
        self.size_bytes.map(|bytes| bytes as f64 / BYTES_PER_GIB)
    }

    /// Read a single disk directory. `device` is the name with the prefix removed.
    pub fn load(dir: &Path, device: &str) -> Result<Self> {
        let raw = read_field(&dir.join(files::VDI_SIZE))?;
        Ok(Self {
            device: device.to_string(),
            size_bytes: parse_size(&raw),
        })
    }
}

impl fmt::Display for DiskDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.size_gib() {
            Some(gib) => write!(f, "{}({:.1}GiB)", self.device, gib),
            None => write!(f, "{}", self.device),
        }
    }
}

/// Only plain decimal digits count as a size
fn parse_size(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// List the disks of a VM folder, sorted by directory name
pub fn load_disks(vm_dir: &Path) -> Result<Vec<DiskDescriptor>> {
    let entries = fs::read_dir(vm_dir)
        .with_context(|| format!("Failed to list VM folder: {}", vm_dir.display()))?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read entry in {}", vm_dir.display()))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.starts_with(DISK_DIR_PREFIX) || !entry.path().is_dir() {
            continue;
        }
        dirs.push((name, entry.path()));
    }
    dirs.sort_by(|a, b| a.0.cmp(&b.0));

    dirs.iter()
        .map(|(name, path)| DiskDescriptor::load(path, &name[DISK_DIR_PREFIX.len()..]))
        .collect()
}

/// Comma separated display form used in the report table
pub fn join_disks(disks: &[DiskDescriptor]) -> String {
    disks
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
