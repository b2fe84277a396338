//! Directory scanning for input WAV files

use std::fs;
use std::path::{Path, PathBuf};
use crate::error::{WavPadError, Result};

/// A WAV file found in the working directory, with its size on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavFile {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
}

impl WavFile {
    pub fn base_name(&self) -> &str {
        base_name(&self.name)
    }
}

/// True iff `name` has exactly one `.` and the extension is `wav`.
pub fn is_wav_file_name(name: &str) -> bool {
    let mut parts = name.split('.');
    matches!((parts.next(), parts.next(), parts.next()), (Some(_), Some("wav"), None))
}

/// Part of the name before the first `.`
pub fn base_name(name: &str) -> &str {
    name.split('.').next().unwrap_or(name)
}

/// List the regular `*.wav` files in `dir`, sorted by name.
///
/// When `skip_suffix` is set, files whose base name ends with it are left out;
/// this keeps the padded outputs of an earlier run from being padded again.
pub fn scan_directory(dir: &Path, skip_suffix: Option<&str>) -> Result<Vec<WavFile>> {
    let entries = fs::read_dir(dir).map_err(|e| {
        WavPadError::io(format!("Cannot read directory {}: {}", dir.display(), e))
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry?;
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                log::debug!("Skipping non UTF-8 file name {:?}", raw);
                continue;
            }
        };

        if !is_wav_file_name(&name) {
            continue;
        }
        if let Some(suffix) = skip_suffix {
            if base_name(&name).ends_with(suffix) {
                log::debug!("Skipping padded output {}", name);
                continue;
            }
        }

        let path = entry.path();
        // follows symlinks; a dangling link is not a file
        let metadata = match fs::metadata(&path) {
            Ok(metadata) if metadata.is_file() => metadata,
            _ => {
                log::debug!("Skipping {}: not a regular file", name);
                continue;
            }
        };

        files.push(WavFile { name, path, size: metadata.len() });
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    log::debug!("Found {} WAV files in {}", files.len(), dir.display());
    Ok(files)
}
