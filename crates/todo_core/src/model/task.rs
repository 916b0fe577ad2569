use std::fmt;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Renders a calendar date as `YYYY-MM-DD`.
fn format_date(date: Date) -> String {
    date.format(ISO_DATE).unwrap_or_else(|_| date.to_string())
}

/// A line of the completed list: `x <date> <text>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedRecord {
    pub completed_on: Date,
    pub text: String,
}

impl CompletedRecord {
    pub fn new<T: Into<String>>(completed_on: Date, text: T) -> Self {
        Self {
            completed_on,
            text: text.into(),
        }
    }
}

impl fmt::Display for CompletedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x {} {}", format_date(self.completed_on), self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedTask {
    pub number: usize,
    pub text: String,
}

impl fmt::Display for ListedTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.number, self.text)
    }
}

/// Snapshot of the pending list, iterated newest first.
///
/// Numbers are derived from insertion position on every iteration and are
/// never stored: the newest task gets `len()`, the oldest gets `1`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    tasks: Vec<String>,
}

impl Listing {
    pub fn new(tasks: Vec<String>) -> Self {
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = ListedTask> + '_ {
        self.tasks
            .iter()
            .enumerate()
            .rev()
            .map(|(index, text)| ListedTask {
                number: index + 1,
                text: text.clone(),
            })
    }
}

impl IntoIterator for Listing {
    type Item = ListedTask;
    type IntoIter = std::iter::Rev<
        std::iter::Map<
            std::iter::Enumerate<std::vec::IntoIter<String>>,
            fn((usize, String)) -> ListedTask,
        >,
    >;

    fn into_iter(self) -> Self::IntoIter {
        let to_listed: fn((usize, String)) -> ListedTask = |(index, text)| ListedTask {
            number: index + 1,
            text,
        };
        self.tasks.into_iter().enumerate().map(to_listed).rev()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub date: Date,
    pub pending: usize,
    pub completed: usize,
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Pending : {} Completed : {}",
            format_date(self.date),
            self.pending,
            self.completed
        )
    }
}
