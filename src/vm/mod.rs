//! Per-VM migration state folders written by the xcp2incus pipeline
//!
//! A VM state folder is any directory holding the [`SENTINEL_FILE`]. Everything
//! else in it is an optional flat text file read by [`record::VmRecord::load`].

pub mod discovery;
pub mod disk;
pub mod record;
pub mod status;

pub use discovery::discover;
pub use disk::DiskDescriptor;
pub use record::VmRecord;

/// Marker whose presence identifies a VM state folder
pub const SENTINEL_FILE: &str = "xcp2incus.env";

/// Default number of levels below the scan root that are searched
pub const DEFAULT_MAX_DEPTH: usize = 2;

/// Flat files read from a VM state folder
pub mod files {
    pub const INFO: &str = "info";
    pub const STATUS: &str = "status";
    pub const PLAN: &str = "plan";
    pub const XCP_HOST: &str = "xcp-host";
    pub const INCUS_INSTANCE: &str = "incus-instance-name";
    pub const PRIMARY_IP: &str = "primary-ip";

    /// Byte count of a virtual disk, inside a disk directory
    pub const VDI_SIZE: &str = "xcp-vdi-size";
}

/// Prefix of the per-disk child directories
pub const DISK_DIR_PREFIX: &str = "vdb-";
