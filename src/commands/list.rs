use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::cli::{Cli, OutputFormat};
use crate::config::Settings;
use crate::ui::Table;
use crate::vm::{self, VmRecord, disk};

/// Report columns, in display order
pub const HEADERS: [&str; 8] = [
    "INFO",
    "VM NAME",
    "STATUS",
    "PLAN",
    "XCP HOST",
    "INCUS INSTANCE",
    "PRIMARY IP",
    "VDBS",
];

pub const NO_VMS_MESSAGE: &str = "No VM migration folders found.";

#[derive(Debug, Clone, PartialEq)]
pub struct ListOptions {
    /// Keep VMs whose migration is complete
    pub show_all: bool,
    pub max_depth: usize,
    pub format: OutputFormat,
    /// Bold header and dimmed separator; only meaningful for tables
    pub styled: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            show_all: false,
            max_depth: vm::DEFAULT_MAX_DEPTH,
            format: OutputFormat::Table,
            styled: false,
        }
    }
}

impl ListOptions {
    /// Merge command line flags over config file settings
    pub fn resolve(cli: &Cli, settings: &Settings) -> Self {
        let styled = settings.color
            && !cli.no_color
            && cli.format == OutputFormat::Table
            && std::io::stdout().is_terminal();

        Self {
            show_all: cli.all || settings.show_all,
            max_depth: settings.max_depth,
            format: cli.format,
            styled,
        }
    }
}

/// Load the discovered VM folders that belong in the report
///
/// Unless `show_all` is set, only the status file of a completed VM is read,
/// so a broken folder that is hidden anyway cannot fail the run.
pub fn load_records(dirs: &[PathBuf], show_all: bool) -> Result<Vec<VmRecord>> {
    let mut records = Vec::with_capacity(dirs.len());

    for dir in dirs {
        if !show_all {
            let status = VmRecord::read_status(dir)
                .with_context(|| format!("Failed to load VM folder: {}", dir.display()))?;
            if vm::status::is_completed(&status) {
                debug!("Hiding completed VM: {}", dir.display());
                continue;
            }
        }

        let record = VmRecord::load(dir)
            .with_context(|| format!("Failed to load VM folder: {}", dir.display()))?;
        records.push(record);
    }

    Ok(records)
}

/// Build the report table, one row per record
pub fn build_table(records: &[VmRecord]) -> Table {
    let mut table = Table::new(HEADERS);
    for record in records {
        table.push_row(vec![
            record.info.clone(),
            record.name.clone(),
            record.display_status(),
            record.plan.clone(),
            record.xcp_host.clone(),
            record.incus_instance.clone(),
            record.primary_ip.clone(),
            disk::join_disks(&record.disks),
        ]);
    }
    table
}

/// Produce the complete output for a scan of `root`
pub fn build_report(root: &Path, options: &ListOptions) -> Result<String> {
    let dirs = vm::discover(root, options.max_depth);

    if dirs.is_empty() {
        return Ok(match options.format {
            OutputFormat::Table => format!("{}\n", NO_VMS_MESSAGE),
            OutputFormat::Json => "[]\n".to_string(),
        });
    }

    let records = load_records(&dirs, options.show_all)?;
    info!("Reporting {} of {} VMs", records.len(), dirs.len());

    match options.format {
        OutputFormat::Table => Ok(build_table(&records).render(options.styled)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&records)
                .context("Failed to serialize VM records to JSON")?;
            Ok(format!("{}\n", json))
        }
    }
}

/// List VM migrations found below the current directory
///
/// # Returns
/// * `Ok(())` - Report printed, including the "nothing found" case
/// * `Err(anyhow::Error)` - A VM folder could not be read
pub fn list_command(options: ListOptions) -> Result<()> {
    info!("Listing VM migrations");
    let report = build_report(Path::new("."), &options)?;
    print!("{}", report);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;
    use tempfile::TempDir;

    fn record(name: &str, status: &str) -> VmRecord {
        VmRecord {
            name: name.to_string(),
            status: status.to_string(),
            ..Default::default()
        }
    }

    fn vm_dir(root: &Path, name: &str, status: &str) -> PathBuf {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(vm::SENTINEL_FILE), "").unwrap();
        fs::write(dir.join(vm::files::STATUS), status).unwrap();
        dir
    }

    #[test]
    fn test_load_hides_completed_by_default() {
        let temp_dir = TempDir::new().unwrap();
        let dirs = vec![
            vm_dir(temp_dir.path(), "a", "3"),
            vm_dir(temp_dir.path(), "b", "100"),
            vm_dir(temp_dir.path(), "c", ""),
        ];

        let names: Vec<_> = load_records(&dirs, false)
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_load_keeps_everything_with_show_all() {
        let temp_dir = TempDir::new().unwrap();
        let dirs = vec![
            vm_dir(temp_dir.path(), "a", "3"),
            vm_dir(temp_dir.path(), "b", "100"),
        ];

        let records = load_records(&dirs, true).unwrap();
        assert_eq!(records, vec![record("a", "3"), record("b", "100")]);
    }

    #[test]
    fn test_hidden_vm_with_broken_field_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let done = vm_dir(temp_dir.path(), "done", "100");
        fs::create_dir(done.join(vm::files::INFO)).unwrap();
        let dirs = vec![vm_dir(temp_dir.path(), "active", "2"), done];

        let records = load_records(&dirs, false).unwrap();
        assert_eq!(records, vec![record("active", "2")]);

        // Shown VMs still have every field read
        let err = load_records(&dirs, true).unwrap_err();
        assert!(format!("{:#}", err).contains("done"));
    }

    #[test]
    fn test_table_uses_formatted_status() {
        let table = build_table(&[record("web", "7")]);
        let rendered = table.render(false);
        let row = rendered.lines().nth(2).unwrap();
        assert!(row.contains("07"));
        assert_eq!(table.column_widths()[2], "STATUS".len());
    }

    #[test]
    fn test_headers_in_order() {
        let rendered = build_table(&[]).render(false);
        let header = rendered.lines().next().unwrap();
        let columns: Vec<_> = header.split("  ").filter(|c| !c.is_empty()).collect();
        assert_eq!(columns, HEADERS.to_vec());
    }
}
