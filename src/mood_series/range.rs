use std::{fmt, str::FromStr};

use anyhow::{anyhow, Error};
use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};

/// Window of mood history shown on the chart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum RangeMode {
    #[default]
    Week,
    Month,
    All,
}

impl RangeMode {
    pub const ALL: [RangeMode; 3] = [RangeMode::Week, RangeMode::Month, RangeMode::All];

    pub fn as_str(&self) -> &'static str {
        match self {
            RangeMode::Week => "week",
            RangeMode::Month => "month",
            RangeMode::All => "all",
        }
    }

    /// Inclusive lower bound of the window ending at `now`.
    ///
    /// A month back from the 31st lands on the last day of the shorter month.
    pub fn range_start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            RangeMode::Week => now - Duration::days(7),
            RangeMode::Month => now
                .checked_sub_months(Months::new(1))
                .unwrap_or_else(unix_epoch),
            RangeMode::All => unix_epoch(),
        }
    }
}

// `DateTime<Utc>` defaults to the Unix epoch.
fn unix_epoch() -> DateTime<Utc> {
    DateTime::<Utc>::default()
}

impl fmt::Display for RangeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RangeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RangeMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow!("unknown range '{s}', expected week, month or all"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn week_starts_seven_days_back() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 15, 30, 0).unwrap();
        let start = RangeMode::Week.range_start(now);
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 3, 3, 15, 30, 0).unwrap());
    }

    #[test]
    fn month_clamps_to_shorter_month() {
        let now = Utc.with_ymd_and_hms(2024, 3, 31, 9, 0, 0).unwrap();
        let start = RangeMode::Month.range_start(now);
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 2, 29, 9, 0, 0).unwrap());

        let now = Utc.with_ymd_and_hms(2023, 3, 31, 9, 0, 0).unwrap();
        let start = RangeMode::Month.range_start(now);
        assert_eq!(start, Utc.with_ymd_and_hms(2023, 2, 28, 9, 0, 0).unwrap());
    }

    #[test]
    fn all_starts_at_epoch() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
        assert_eq!(RangeMode::All.range_start(now).timestamp(), 0);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Week".parse::<RangeMode>().unwrap(), RangeMode::Week);
        assert_eq!("MONTH".parse::<RangeMode>().unwrap(), RangeMode::Month);
        assert_eq!("all".parse::<RangeMode>().unwrap(), RangeMode::All);
        assert!("year".parse::<RangeMode>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&RangeMode::Month).unwrap(), "\"month\"");
        let parsed: RangeMode = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(parsed, RangeMode::All);
        assert_eq!(RangeMode::default(), RangeMode::Week);
    }
}
