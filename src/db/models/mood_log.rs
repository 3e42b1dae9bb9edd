use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::mood_series::{Mood, MoodObservation};

/// A day's mood. `logged_at` is UTC midnight of that day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoodLog {
    pub id: String,
    pub mood: String,
    pub logged_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MoodLog {
    /// `None` for labels written by something other than the mood picker.
    pub fn recognized_mood(&self) -> Option<Mood> {
        Mood::from_emoji(&self.mood)
    }
}

impl From<&MoodLog> for MoodObservation {
    fn from(log: &MoodLog) -> Self {
        MoodObservation::new(log.mood.clone(), log.logged_at.to_rfc3339())
    }
}
