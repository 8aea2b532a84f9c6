pub mod output;
pub mod project_file;

pub use output::{create_writer, OutputFormat, ProjectReport, ReportWriter};
pub use project_file::{load_project, parse_project, save_project};

use crate::errors::{Result, RoiError};
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| RoiError::io_with_path(e, path))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| RoiError::io_with_path(e, path))
}
