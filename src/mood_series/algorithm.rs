use serde::{Deserialize, Serialize};

use crate::mood_series::{
    config::SeriesConfig,
    labels::{format_date_label_in, is_label_visible},
    mapping::map_mood_to_value,
    range::RangeMode,
};

/// One recorded mood as read from storage, in caller-supplied order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodObservation {
    pub mood: String,
    pub logged_at: String,
}

impl MoodObservation {
    pub fn new(mood: impl Into<String>, logged_at: impl Into<String>) -> Self {
        Self {
            mood: mood.into(),
            logged_at: logged_at.into(),
        }
    }
}

/// Plot-ready series: one value and one axis label per observation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodSeries {
    pub values: Vec<u8>,
    pub labels: Vec<String>,
}

impl MoodSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// An empty series means there is nothing to chart for the range.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Build a chart series with the default configuration.
pub fn build_series(observations: &[MoodObservation], range: RangeMode) -> MoodSeries {
    build_series_with(observations, range, &SeriesConfig::default())
}

/// Map each observation to its plotted value and a (possibly blank) axis label.
///
/// Order and length are preserved; only label text is thinned.
pub fn build_series_with(
    observations: &[MoodObservation],
    range: RangeMode,
    config: &SeriesConfig,
) -> MoodSeries {
    let len = observations.len();

    let values = observations
        .iter()
        .map(|observation| map_mood_to_value(&observation.mood))
        .collect();

    // Hidden positions are never formatted.
    let labels = observations
        .iter()
        .enumerate()
        .map(|(index, observation)| {
            if is_label_visible(index, len, range, config) {
                format_date_label_in(&observation.logged_at, config.label_offset)
            } else {
                String::new()
            }
        })
        .collect();

    MoodSeries { values, labels }
}
