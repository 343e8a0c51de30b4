//! Temp-file-and-rename writes, so an interrupted export never leaves a
//! truncated file under the final name.

use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use camino::{Utf8Component, Utf8Path};
use cap_std::fs::{Dir, OpenOptions};

use crate::error::ExportError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Writes `contents` to `file_name` inside `dir`, replacing any existing file.
///
/// `file_name` must be a single normal path component.
///
/// # Errors
///
/// Returns [`ExportError::WriteError`] if the name is not a plain file name
/// or any step of the write fails. The temporary file is removed on failure.
pub(crate) fn write_atomic(
    dir: &Dir,
    file_name: &Utf8Path,
    contents: &str,
) -> Result<(), ExportError> {
    let write_error = |message: String| ExportError::WriteError {
        path: file_name.to_path_buf(),
        message,
    };

    let mut components = file_name.components();
    let (Some(Utf8Component::Normal(target)), None) = (components.next(), components.next()) else {
        return Err(write_error("export path must be a plain file name".to_owned()));
    };

    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let tmp_name = format!(".{target}.tmp.{}.{counter}", std::process::id());

    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let written = dir.open_with(&tmp_name, &options).and_then(|mut file| {
        file.write_all(contents.as_bytes())?;
        file.sync_all()
    });
    if let Err(err) = written.and_then(|()| replace_target(dir, &tmp_name, target)) {
        if dir.remove_file(&tmp_name).is_err() {
            // Nothing more to clean up.
        }
        return Err(write_error(err.to_string()));
    }

    if dir.open(".").and_then(|handle| handle.sync_all()).is_err() {
        // Directory sync is best effort.
    }
    Ok(())
}

#[cfg(windows)]
fn replace_target(dir: &Dir, tmp_name: &str, target: &str) -> std::io::Result<()> {
    // Windows rename fails if the target exists.
    match dir.remove_file(target) {
        Ok(()) => {}
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target)
}

#[cfg(not(windows))]
fn replace_target(dir: &Dir, tmp_name: &str, target: &str) -> std::io::Result<()> {
    dir.rename(tmp_name, dir, target)
}
