use anyhow::{Context, Result};
use chrono::{DateTime, NaiveTime, SecondsFormat, Utc};

/// Fixed-width RFC 3339 so stored timestamps sort lexically in time order.
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn parse_datetime(value: &str, field: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("failed to parse {field} '{value}'"))
}

/// UTC midnight of the day containing `value`; mood logs are keyed by it.
pub fn day_start(value: DateTime<Utc>) -> DateTime<Utc> {
    value.date_naive().and_time(NaiveTime::MIN).and_utc()
}
