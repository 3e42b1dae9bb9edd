pub mod algorithm;
pub mod config;
pub mod labels;
pub mod mapping;
pub mod range;

pub use algorithm::{build_series, build_series_with, MoodObservation, MoodSeries};
pub use config::{offset_from_minutes, SeriesConfig};
pub use labels::{format_date_label, format_date_label_in, try_format_date_label, INVALID_DATE_LABEL};
pub use mapping::{format_value_label, map_mood_to_value, Mood};
pub use range::RangeMode;
