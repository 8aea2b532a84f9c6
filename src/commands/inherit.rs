use crate::io;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Reload a project, which re-derives every Post-IA record, and save it.
///
/// Returns the path written and the number of indicators refreshed.
pub fn refresh_project(project_file: &Path, output: Option<&Path>) -> Result<(PathBuf, usize)> {
    let project = io::load_project(project_file)
        .with_context(|| format!("Failed to load project {}", project_file.display()))?;

    let target = output.unwrap_or(project_file).to_path_buf();
    io::save_project(&target, &project)
        .with_context(|| format!("Failed to write project {}", target.display()))?;

    let count = project.indicators().len();
    info!(path = %target.display(), indicators = count, "Post-IA records refreshed");
    Ok((target, count))
}

pub fn inherit_project(project_file: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let (target, count) = refresh_project(&project_file, output.as_deref())?;
    println!("Refreshed {} indicator(s) in {}", count, target.display());
    Ok(())
}
