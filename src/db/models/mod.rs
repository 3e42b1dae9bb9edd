pub mod goal;
pub mod journal_entry;
pub mod mood_log;

pub use goal::Goal;
pub use journal_entry::JournalEntry;
pub use mood_log::MoodLog;
