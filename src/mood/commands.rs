use chrono::Utc;

use crate::{
    db::MoodLog,
    log_info,
    mood::MoodChart,
    mood_series::{Mood, RangeMode},
    AppState,
};

const ENABLE_LOGS: bool = true;

/// Record today's mood; logging again the same UTC day replaces it.
pub async fn log_mood(state: &AppState, mood: String) -> Result<MoodLog, String> {
    let mood: Mood = mood.parse().map_err(|e: anyhow::Error| e.to_string())?;
    let log = state
        .db
        .upsert_mood_log(mood, Utc::now())
        .await
        .map_err(|e| e.to_string())?;

    log_info!("Logged mood {} for {}", mood.name(), log.logged_at.date_naive());
    Ok(log)
}

pub async fn get_today_mood(state: &AppState) -> Result<Option<MoodLog>, String> {
    state
        .db
        .get_mood_log_for_day(Utc::now())
        .await
        .map_err(|e| e.to_string())
}

/// Chart data for `range`, or for the preferred range when none is given.
pub async fn get_mood_chart(
    state: &AppState,
    range: Option<RangeMode>,
) -> Result<MoodChart, String> {
    let range = range.unwrap_or_else(|| state.settings.chart().default_range);
    let from = range.range_start(Utc::now());

    let logs = state
        .db
        .list_mood_logs_since(from)
        .await
        .map_err(|e| e.to_string())?;

    Ok(MoodChart::from_logs(range, &logs, &state.settings.series_config()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ChartSettings;
    use chrono::Duration;
    use tempfile::{tempdir, TempDir};

    fn open() -> (TempDir, AppState) {
        let dir = tempdir().unwrap();
        let state = AppState::open(dir.path()).unwrap();
        (dir, state)
    }

    #[tokio::test]
    async fn logging_twice_keeps_latest() {
        let (_dir, state) = open();
        log_mood(&state, "😔".into()).await.unwrap();
        log_mood(&state, "happy".into()).await.unwrap();

        let today = get_today_mood(&state).await.unwrap().unwrap();
        assert_eq!(today.mood, "🙂");
    }

    #[tokio::test]
    async fn unknown_moods_are_rejected() {
        let (_dir, state) = open();
        let err = log_mood(&state, "🥳".into()).await.unwrap_err();
        assert!(err.contains("unrecognized mood"));
        assert!(get_today_mood(&state).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn chart_covers_only_the_range() {
        let (_dir, state) = open();
        let now = Utc::now();
        state.db.upsert_mood_log(Mood::Sad, now - Duration::days(20)).await.unwrap();
        state.db.upsert_mood_log(Mood::Neutral, now - Duration::days(2)).await.unwrap();
        state.db.upsert_mood_log(Mood::Happy, now).await.unwrap();

        let week = get_mood_chart(&state, Some(RangeMode::Week)).await.unwrap();
        assert_eq!(week.values, vec![2, 3]);

        let month = get_mood_chart(&state, Some(RangeMode::Month)).await.unwrap();
        assert_eq!(month.values, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn chart_defaults_to_preferred_range() {
        let (_dir, state) = open();
        state
            .settings
            .update_chart(ChartSettings {
                default_range: RangeMode::All,
                label_utc_offset_minutes: None,
            })
            .unwrap();

        let chart = get_mood_chart(&state, None).await.unwrap();
        assert_eq!(chart.range, RangeMode::All);
        assert!(chart.empty);
    }
}
