mod goals;
mod journal_entries;
mod mood_logs;
