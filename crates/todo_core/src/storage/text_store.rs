use crate::error::AppError;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

/// Reads a list file into its lines.
///
/// A missing or unreadable file is an empty list. A single trailing newline
/// does not produce an extra empty line. Invalid UTF-8 is replaced rather
/// than dropping the whole list.
pub fn read_lines(path: &Path) -> Vec<String> {
    match std::fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_string)
            .collect(),
        Err(err) => {
            debug!(path = %path.display(), %err, "treating unreadable list as empty");
            Vec::new()
        }
    }
}

/// Appends `text` as the new last line, writing a separator only when the
/// existing content does not already end in a newline.
pub fn append_line(path: &Path, text: &str) -> Result<(), AppError> {
    let needs_separator = std::fs::read(path)
        .map(|bytes| !bytes.is_empty() && !bytes.ends_with(b"\n"))
        .unwrap_or(false);

    let data = if needs_separator {
        format!("\n{text}")
    } else {
        text.to_string()
    };
    append(path, &data)
}

/// Appends `record` followed by a newline.
pub fn append_record(path: &Path, record: &str) -> Result<(), AppError> {
    append(path, &format!("{record}\n"))
}

/// Replaces the whole file with `lines` joined by newlines.
pub fn rewrite(path: &Path, lines: &[String]) -> Result<(), AppError> {
    prepare_parent(path)?;
    debug!(path = %path.display(), count = lines.len(), "rewriting list");

    let mut file = File::create(path).map_err(|err| write_error(path, err))?;
    file.write_all(lines.join("\n").as_bytes())
        .map_err(|err| write_error(path, err))?;
    restrict_permissions(path)
}

fn append(path: &Path, data: &str) -> Result<(), AppError> {
    prepare_parent(path)?;
    debug!(path = %path.display(), bytes = data.len(), "appending to list");

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|err| write_error(path, err))?;
    file.write_all(data.as_bytes())
        .map_err(|err| write_error(path, err))?;
    restrict_permissions(path)
}

fn prepare_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|err| write_error(parent, err))?;
    }
    Ok(())
}

fn restrict_permissions(path: &Path) -> Result<(), AppError> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let permissions = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(path, permissions).map_err(|err| write_error(path, err))?;
    }

    #[cfg(not(unix))]
    let _ = path;

    Ok(())
}

fn write_error(path: &Path, err: std::io::Error) -> AppError {
    warn!(path = %path.display(), %err, "list write failed");
    AppError::io(format!("{}: {}", path.display(), err))
}
