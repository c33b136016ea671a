pub mod lazy_queue;

pub use lazy_queue::{EntryId, LazyQueue, QueueEntry};
