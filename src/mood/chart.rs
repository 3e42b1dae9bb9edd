use serde::{Deserialize, Serialize};

use crate::db::MoodLog;
use crate::mood_series::{
    build_series_with, format_value_label, Mood, MoodObservation, RangeMode, SeriesConfig,
};

/// Y-axis tick for the chart legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueTick {
    pub value: u8,
    pub label: String,
}

/// Everything a chart view needs for one range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodChart {
    pub range: RangeMode,
    pub values: Vec<u8>,
    pub labels: Vec<String>,
    pub ticks: Vec<ValueTick>,
    /// Nothing logged in the range.
    pub empty: bool,
}

impl MoodChart {
    /// `logs` must already be limited to the range and sorted oldest first.
    pub fn from_logs(range: RangeMode, logs: &[MoodLog], config: &SeriesConfig) -> Self {
        let observations: Vec<MoodObservation> = logs.iter().map(MoodObservation::from).collect();
        let series = build_series_with(&observations, range, config);

        let mut ticks: Vec<ValueTick> = Mood::ALL
            .iter()
            .map(|mood| ValueTick {
                value: mood.value(),
                label: format_value_label(mood.value()).to_string(),
            })
            .collect();
        ticks.sort_by_key(|tick| tick.value);

        Self {
            range,
            empty: series.is_empty(),
            values: series.values,
            labels: series.labels,
            ticks,
        }
    }
}
