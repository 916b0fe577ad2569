use crate::error::AppError;
use std::path::{Path, PathBuf};

pub const PENDING_FILE_NAME: &str = "todo.txt";
pub const COMPLETED_FILE_NAME: &str = "done.txt";
pub const STORE_DIR_ENV_VAR: &str = "TODO_STORE_DIR";

/// Locations of the two task lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub pending_path: PathBuf,
    pub completed_path: PathBuf,
}

impl StoreConfig {
    pub fn new(pending_path: PathBuf, completed_path: PathBuf) -> Self {
        Self {
            pending_path,
            completed_path,
        }
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(PENDING_FILE_NAME), dir.join(COMPLETED_FILE_NAME))
    }

    /// Uses `TODO_STORE_DIR` when set, otherwise the directory holding the
    /// running executable.
    pub fn resolve() -> Result<Self, AppError> {
        let dir = store_dir(std::env::var(STORE_DIR_ENV_VAR).ok())?;
        Ok(Self::in_dir(&dir))
    }
}

fn store_dir(override_dir: Option<String>) -> Result<PathBuf, AppError> {
    if let Some(dir) = override_dir
        && !dir.trim().is_empty()
    {
        return Ok(PathBuf::from(dir));
    }

    let exe = std::env::current_exe()
        .map_err(|err| AppError::io(format!("cannot locate executable: {err}")))?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| AppError::io("executable has no parent directory"))
}
