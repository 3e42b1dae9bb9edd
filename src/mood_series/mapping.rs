use std::{fmt, str::FromStr};

use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};

/// Value plotted for any label outside the known moods.
pub const UNRECOGNIZED_MOOD_VALUE: u8 = 0;

/// A recognized mood, ordered as the picker shows them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Neutral,
    Happy,
    Sad,
}

impl Mood {
    pub const ALL: [Mood; 3] = [Mood::Neutral, Mood::Happy, Mood::Sad];

    pub fn as_emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "🙂",
            Mood::Neutral => "😐",
            Mood::Sad => "😔",
        }
    }

    /// Exact match only; stored labels are compared as written.
    pub fn from_emoji(label: &str) -> Option<Mood> {
        match label {
            "🙂" => Some(Mood::Happy),
            "😐" => Some(Mood::Neutral),
            "😔" => Some(Mood::Sad),
            _ => None,
        }
    }

    /// Valence on the chart's y-axis: 3 positive, 2 neutral, 1 negative.
    pub fn value(&self) -> u8 {
        match self {
            Mood::Happy => 3,
            Mood::Neutral => 2,
            Mood::Sad => 1,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Neutral => "Neutral",
            Mood::Sad => "Sad",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Mood::Happy => "Feeling happy",
            Mood::Neutral => "Feeling neutral",
            Mood::Sad => "Feeling sad",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_emoji())
    }
}

/// Accepts the emoji itself or the mood name in any case.
impl FromStr for Mood {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(mood) = Mood::from_emoji(trimmed) {
            return Ok(mood);
        }

        Mood::ALL
            .into_iter()
            .find(|mood| mood.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| anyhow!("unrecognized mood '{s}'"))
    }
}

/// Map a stored mood label to its plotted value. Unknown labels map to 0.
pub fn map_mood_to_value(label: &str) -> u8 {
    Mood::from_emoji(label)
        .map(|mood| mood.value())
        .unwrap_or(UNRECOGNIZED_MOOD_VALUE)
}

/// Y-axis tick text for a plotted value.
pub fn format_value_label(value: u8) -> &'static str {
    match value {
        1 => Mood::Sad.name(),
        2 => Mood::Neutral.name(),
        3 => Mood::Happy.name(),
        _ => "",
    }
}
