use anyhow::{Context, Result};
use log::debug;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::disk::{self, DiskDescriptor};
use super::files;
use super::status;

/// Migration progress of one VM, read fresh from its state folder
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VmRecord {
    pub name: String,
    pub info: String,
    pub status: String,
    pub plan: String,
    pub xcp_host: String,
    pub incus_instance: String,
    pub primary_ip: String,
    pub disks: Vec<DiskDescriptor>,
}

impl VmRecord {
    /// Read every field of the VM folder at `dir`
    ///
    /// Missing files become empty fields. Any other I/O failure is returned.
    pub fn load(dir: &Path) -> Result<Self> {
        debug!("Loading VM record from {}", dir.display());

        let plan = read_field(&dir.join(files::PLAN))?;
        let plan = plan.lines().next().unwrap_or_default().to_string();

        Ok(Self {
            name: vm_name(dir),
            info: read_field(&dir.join(files::INFO))?,
            status: Self::read_status(dir)?,
            plan,
            xcp_host: read_field(&dir.join(files::XCP_HOST))?,
            incus_instance: read_field(&dir.join(files::INCUS_INSTANCE))?,
            primary_ip: read_field(&dir.join(files::PRIMARY_IP))?,
            disks: disk::load_disks(dir)?,
        })
    }

    /// Raw status of the VM folder at `dir`, without reading anything else
    pub fn read_status(dir: &Path) -> Result<String> {
        read_field(&dir.join(files::STATUS))
    }

    /// Status as shown in the report, see [`status::format_status`]
    pub fn display_status(&self) -> String {
        status::format_status(&self.status)
    }
}

/// Trimmed file content, or an empty string when the file does not exist
pub fn read_field(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content.trim().to_string()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
    }
}

/// Folder name of a VM directory. A bare `.` is resolved to the real name.
fn vm_name(dir: &Path) -> String {
    if let Some(name) = dir.file_name() {
        return name.to_string_lossy().into_owned();
    }

    dir.canonicalize()
        .ok()
        .and_then(|path| path.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| dir.display().to_string())
}
