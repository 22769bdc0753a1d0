// src/file.rs

use std::{
    fs,
    io,
    path::{ Path, PathBuf },
};

use log::info;

use crate::config::options::ExportOptions;

/// Write `contents` to the path `export` resolves to, creating parent dirs.
/// Returns the final path, or `None` if `export` points at stdout.
pub fn write_export(export: &ExportOptions, contents: &str) -> io::Result<Option<PathBuf>> {
    let Some(path) = export.out_path() else {
        return Ok(None);
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    fs::write(&path, contents)?;
    info!("Export: wrote {} bytes → {}", contents.len(), path.display());
    Ok(Some(path))
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
