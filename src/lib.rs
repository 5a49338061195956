//! Migration progress report for XCP-to-Incus VM conversions
//!
//! Scans for per-VM state folders (marked by `xcp2incus.env`), reads the flat
//! status files the migration pipeline leaves in them and renders a table.

pub mod cli;
pub mod commands;
pub mod config;
pub mod ui;
pub mod vm;
