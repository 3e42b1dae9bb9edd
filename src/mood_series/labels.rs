use anyhow::{anyhow, Result};
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime};

use crate::log_warn;
use crate::mood_series::{config::SeriesConfig, range::RangeMode};

const ENABLE_LOGS: bool = true;

/// Label shown for a timestamp that cannot be parsed.
pub const INVALID_DATE_LABEL: &str = "--";

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar date of a timestamp.
///
/// Offset-bearing timestamps are converted into `offset` when one is given,
/// otherwise their own offset decides the date. Naive forms are taken as written.
fn calendar_date(timestamp: &str, offset: Option<FixedOffset>) -> Result<NaiveDate> {
    let raw = timestamp.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        let date = match offset {
            Some(target) => parsed.with_timezone(&target).date_naive(),
            None => parsed.date_naive(),
        };
        return Ok(date);
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(parsed.date());
        }
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|err| anyhow!("invalid timestamp '{raw}': {err}"))
}

/// Format a timestamp as `month/day`, failing on malformed input.
pub fn try_format_date_label(timestamp: &str, offset: Option<FixedOffset>) -> Result<String> {
    let date = calendar_date(timestamp, offset)?;
    Ok(format!("{}/{}", date.month(), date.day()))
}

/// Format a timestamp as `month/day` in its own calendar.
pub fn format_date_label(timestamp: &str) -> String {
    format_date_label_in(timestamp, None)
}

/// Format a timestamp as `month/day`, rendering [`INVALID_DATE_LABEL`] when it
/// cannot be parsed.
pub fn format_date_label_in(timestamp: &str, offset: Option<FixedOffset>) -> String {
    match try_format_date_label(timestamp, offset) {
        Ok(label) => label,
        Err(err) => {
            log_warn!("Using placeholder chart label: {err}");
            INVALID_DATE_LABEL.to_string()
        }
    }
}

/// Whether the axis label at `index` survives thinning in a series of `len` points.
pub fn is_label_visible(index: usize, len: usize, range: RangeMode, config: &SeriesConfig) -> bool {
    if len <= config.full_label_limit {
        return true;
    }

    match range {
        // First, middle and last
        RangeMode::Month => index == 0 || index == len / 2 || index + 1 == len,
        RangeMode::All => index == 0 || index + 1 == len,
        // A week window only overflows with more than one log per day; keep everything.
        RangeMode::Week => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible_positions(len: usize, range: RangeMode, config: &SeriesConfig) -> Vec<usize> {
        (0..len)
            .filter(|&index| is_label_visible(index, len, range, config))
            .collect()
    }

    #[test]
    fn formats_month_and_day_without_padding() {
        assert_eq!(format_date_label("2024-03-05T10:00:00Z"), "3/5");
        assert_eq!(format_date_label("2024-12-25T00:00:00.000Z"), "12/25");
        assert_eq!(format_date_label("2024-01-09"), "1/9");
        assert_eq!(format_date_label("2024-07-04T23:59:59"), "7/4");
        assert_eq!(format_date_label("2024-07-04 08:15:00.250"), "7/4");
        assert_eq!(format_date_label("  2024-07-04  "), "7/4");
    }

    #[test]
    fn uses_the_timestamps_own_offset_by_default() {
        assert_eq!(format_date_label("2024-03-05T23:30:00-05:00"), "3/5");
        assert_eq!(format_date_label("2024-03-06T01:00:00+09:00"), "3/6");
    }

    #[test]
    fn converts_into_configured_offset() {
        let new_york = FixedOffset::west_opt(5 * 3600);
        assert_eq!(format_date_label_in("2024-03-05T02:00:00Z", new_york), "3/4");

        let tokyo = FixedOffset::east_opt(9 * 3600);
        assert_eq!(format_date_label_in("2024-03-05T20:00:00Z", tokyo), "3/6");

        // Naive timestamps carry no offset to convert from.
        assert_eq!(format_date_label_in("2024-03-05T02:00:00", new_york), "3/5");
    }

    #[test]
    fn malformed_timestamps_degrade_to_placeholder() {
        assert_eq!(format_date_label("not a date"), INVALID_DATE_LABEL);
        assert_eq!(format_date_label(""), INVALID_DATE_LABEL);
        assert_eq!(format_date_label("2024-13-40"), INVALID_DATE_LABEL);
    }

    #[test]
    fn fail_closed_variant_reports_errors() {
        assert!(try_format_date_label("yesterday", None).is_err());
        assert_eq!(try_format_date_label("2024-02-29", None).unwrap(), "2/29");
    }

    #[test]
    fn short_series_keep_every_label_in_every_mode() {
        let config = SeriesConfig::default();
        for range in RangeMode::ALL {
            assert_eq!(visible_positions(7, range, &config), (0..7).collect::<Vec<_>>());
        }
    }

    #[test]
    fn month_keeps_first_middle_and_last() {
        let config = SeriesConfig::default();
        assert_eq!(visible_positions(30, RangeMode::Month, &config), vec![0, 15, 29]);
        assert_eq!(visible_positions(8, RangeMode::Month, &config), vec![0, 4, 7]);
    }

    #[test]
    fn all_keeps_first_and_last() {
        let config = SeriesConfig::default();
        assert_eq!(visible_positions(50, RangeMode::All, &config), vec![0, 49]);
    }

    #[test]
    fn overfull_week_keeps_every_label() {
        let config = SeriesConfig::default();
        assert_eq!(visible_positions(10, RangeMode::Week, &config), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn limit_comes_from_config() {
        let config = SeriesConfig {
            full_label_limit: 3,
            ..SeriesConfig::default()
        };
        assert_eq!(visible_positions(4, RangeMode::All, &config), vec![0, 3]);
        assert_eq!(visible_positions(3, RangeMode::All, &config), vec![0, 1, 2]);
    }
}
