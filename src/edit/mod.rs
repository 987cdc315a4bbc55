pub mod buffer;
pub mod outcome;

pub use buffer::ValueEditBuffer;
pub use outcome::{CommitOutcome, CommitResult, RevertReason};
