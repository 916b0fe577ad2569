use crate::config::StoreConfig;
use crate::error::AppError;
use crate::model::{CompletedRecord, Listing, Stats};
use crate::storage::text_store;
use std::path::Path;
use time::{Date, OffsetDateTime};
use tracing::debug;

/// A task removed from the pending list by `delete_task` or `complete_task`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedTask {
    pub number: usize,
    pub text: String,
}

/// Pending and completed lists addressed by position.
///
/// Every operation reads the lists from disk, applies one change and writes
/// it back. Nothing is cached between calls and no locking is done, so two
/// processes working on the same files can interleave.
#[derive(Debug, Clone)]
pub struct TaskStore {
    config: StoreConfig,
}

impl TaskStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn open() -> Result<Self, AppError> {
        Ok(Self::new(StoreConfig::resolve()?))
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn add_task(&self, description: Option<&str>) -> Result<String, AppError> {
        let description = match description {
            Some(value) if !value.trim().is_empty() => value,
            _ => return Err(AppError::invalid_input("Missing todo string. Nothing added!")),
        };
        if description.contains(['\n', '\r']) {
            return Err(AppError::invalid_input(
                "A todo must fit on one line. Nothing added!",
            ));
        }

        text_store::append_line(&self.config.pending_path, description)?;
        debug!(description, "added todo");

        Ok(description.to_string())
    }

    pub fn list_pending(&self) -> Listing {
        Listing::new(self.pending())
    }

    pub fn delete_task(&self, number: Option<&str>) -> Result<RemovedTask, AppError> {
        let raw = required_number(number, "Missing NUMBER for deleting todo.")?;
        let mut tasks = self.pending();
        let index = position(raw, tasks.len()).ok_or_else(|| {
            AppError::not_found(format!("todo #{raw} does not exist. Nothing deleted."))
        })?;

        let text = tasks.remove(index);
        text_store::rewrite(&self.config.pending_path, &tasks)?;
        debug!(number = index + 1, "deleted todo");

        Ok(RemovedTask {
            number: index + 1,
            text,
        })
    }

    pub fn complete_task(&self, number: Option<&str>) -> Result<RemovedTask, AppError> {
        self.complete_task_on(number, today())
    }

    /// Completion is two writes: the record is appended first, then the
    /// pending list is rewritten. If the rewrite fails the task ends up in
    /// both lists.
    pub fn complete_task_on(
        &self,
        number: Option<&str>,
        today: Date,
    ) -> Result<RemovedTask, AppError> {
        self.complete_with(number, today, text_store::rewrite)
    }

    fn complete_with<W>(
        &self,
        number: Option<&str>,
        today: Date,
        rewrite_pending: W,
    ) -> Result<RemovedTask, AppError>
    where
        W: FnOnce(&Path, &[String]) -> Result<(), AppError>,
    {
        let raw = required_number(number, "Missing NUMBER for marking todo as done.")?;
        let mut tasks = self.pending();
        let index = position(raw, tasks.len())
            .ok_or_else(|| AppError::not_found(format!("todo #{raw} does not exist.")))?;

        let text = tasks.remove(index);
        let record = CompletedRecord::new(today, text.as_str());
        text_store::append_record(&self.config.completed_path, &record.to_string())?;
        rewrite_pending(&self.config.pending_path, &tasks)?;
        debug!(number = index + 1, "completed todo");

        Ok(RemovedTask {
            number: index + 1,
            text,
        })
    }

    pub fn stats(&self) -> Stats {
        self.stats_on(today())
    }

    pub fn stats_on(&self, today: Date) -> Stats {
        let completed = text_store::read_lines(&self.config.completed_path)
            .iter()
            .filter(|line| !line.trim().is_empty())
            .count();

        Stats {
            date: today,
            pending: self.pending().len(),
            completed,
        }
    }

    fn pending(&self) -> Vec<String> {
        text_store::read_lines(&self.config.pending_path)
    }
}

fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

fn required_number<'a>(number: Option<&'a str>, missing: &str) -> Result<&'a str, AppError> {
    match number.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(AppError::invalid_input(missing)),
    }
}

/// Maps a 1-based task number onto an index of a list of `len` tasks.
fn position(raw: &str, len: usize) -> Option<usize> {
    let number: usize = raw.parse().ok()?;
    (1..=len).contains(&number).then(|| number - 1)
}
