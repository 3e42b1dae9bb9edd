use chrono::FixedOffset;

/// Configuration for turning mood observations into a chart series.
#[derive(Debug, Clone)]
pub struct SeriesConfig {
    /// Series with at most this many points keep every axis label
    pub full_label_limit: usize,

    /// Calendar used for axis labels; `None` keeps each timestamp's own offset
    pub label_offset: Option<FixedOffset>,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            full_label_limit: 7,
            label_offset: None,
        }
    }
}

/// Fixed offset for a signed number of minutes east of UTC, `None` outside +/-24h.
pub fn offset_from_minutes(minutes: i32) -> Option<FixedOffset> {
    minutes.checked_mul(60).and_then(FixedOffset::east_opt)
}

impl SeriesConfig {
    /// Build a config whose labels are rendered in a fixed UTC offset.
    /// Offsets outside +/-24h are ignored.
    pub fn with_offset_minutes(minutes: Option<i32>) -> Self {
        let label_offset = minutes.and_then(offset_from_minutes);

        Self {
            label_offset,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keeps_seven_labels_and_native_offset() {
        let config = SeriesConfig::default();
        assert_eq!(config.full_label_limit, 7);
        assert!(config.label_offset.is_none());
    }

    #[test]
    fn offset_minutes_are_converted_to_fixed_offset() {
        let config = SeriesConfig::with_offset_minutes(Some(-300));
        assert_eq!(config.label_offset, FixedOffset::west_opt(5 * 3600));
    }

    #[test]
    fn out_of_range_offset_is_dropped() {
        let config = SeriesConfig::with_offset_minutes(Some(24 * 60 + 1));
        assert!(config.label_offset.is_none());
        assert!(SeriesConfig::with_offset_minutes(None).label_offset.is_none());
    }

    #[test]
    fn offset_bounds_are_exclusive_of_a_full_day() {
        assert!(offset_from_minutes(24 * 60 - 1).is_some());
        assert!(offset_from_minutes(-(24 * 60 - 1)).is_some());
        assert!(offset_from_minutes(24 * 60).is_none());
        assert!(offset_from_minutes(i32::MAX).is_none());
    }
}
