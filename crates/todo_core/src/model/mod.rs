mod task;

pub use task::{CompletedRecord, ListedTask, Listing, Stats};
