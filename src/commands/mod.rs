pub mod list;

pub use list::{ListOptions, list_command};
