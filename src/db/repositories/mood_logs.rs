use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

use crate::db::{
    connection::Database,
    helpers::{day_start, format_datetime, parse_datetime},
    models::MoodLog,
};
use crate::mood_series::Mood;

fn row_to_mood_log(row: &Row) -> Result<MoodLog> {
    let logged_at: String = row.get("logged_at")?;
    let created_at: String = row.get("created_at")?;
    let updated_at: String = row.get("updated_at")?;

    Ok(MoodLog {
        id: row.get("id")?,
        mood: row.get("mood")?,
        logged_at: parse_datetime(&logged_at, "logged_at")?,
        created_at: parse_datetime(&created_at, "created_at")?,
        updated_at: parse_datetime(&updated_at, "updated_at")?,
    })
}

fn select_by_day(conn: &Connection, logged_at: &str) -> Result<Option<MoodLog>> {
    let mut stmt = conn.prepare(
        "SELECT id, mood, logged_at, created_at, updated_at
         FROM mood_logs
         WHERE logged_at = ?1",
    )?;
    let mut rows = stmt.query(params![logged_at])?;
    match rows.next()? {
        Some(row) => Ok(Some(row_to_mood_log(row)?)),
        None => Ok(None),
    }
}

impl Database {
    /// Record `mood` for the UTC day containing `day`, replacing that day's earlier mood.
    pub async fn upsert_mood_log(&self, mood: Mood, day: DateTime<Utc>) -> Result<MoodLog> {
        self.execute(move |conn| {
            let now = format_datetime(Utc::now());
            let logged_at = format_datetime(day_start(day));

            conn.execute(
                "INSERT INTO mood_logs (id, mood, logged_at, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?4)
                 ON CONFLICT(logged_at) DO UPDATE
                 SET mood = excluded.mood,
                     updated_at = excluded.updated_at",
                params![Uuid::new_v4().to_string(), mood.as_emoji(), logged_at, now],
            )
            .context("failed to upsert mood log")?;

            select_by_day(conn, &logged_at)?
                .ok_or_else(|| anyhow!("Mood log not found after upsert"))
        })
        .await
    }

    pub async fn get_mood_log_for_day(&self, day: DateTime<Utc>) -> Result<Option<MoodLog>> {
        self.execute(move |conn| select_by_day(conn, &format_datetime(day_start(day))))
            .await
    }

    /// Mood logs at or after `from`, oldest first.
    pub async fn list_mood_logs_since(&self, from: DateTime<Utc>) -> Result<Vec<MoodLog>> {
        self.execute(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, mood, logged_at, created_at, updated_at
                 FROM mood_logs
                 WHERE logged_at >= ?1
                 ORDER BY logged_at ASC",
            )?;

            let mut rows = stmt.query(params![format_datetime(from)])?;
            let mut logs = Vec::new();
            while let Some(row) = rows.next()? {
                logs.push(row_to_mood_log(row)?);
            }

            Ok(logs)
        })
        .await
    }
}
