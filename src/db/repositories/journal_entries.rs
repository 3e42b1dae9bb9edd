use anyhow::{anyhow, Result};
use chrono::{SubsecRound, Utc};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

use crate::db::{
    connection::Database,
    helpers::{format_datetime, parse_datetime},
    models::JournalEntry,
};

fn row_to_journal_entry(row: &Row) -> Result<JournalEntry> {
    let created_at: String = row.get("created_at")?;
    let updated_at: String = row.get("updated_at")?;

    Ok(JournalEntry {
        id: row.get("id")?,
        content: row.get("content")?,
        created_at: parse_datetime(&created_at, "created_at")?,
        updated_at: parse_datetime(&updated_at, "updated_at")?,
    })
}

fn select_by_id(conn: &Connection, entry_id: &str) -> Result<Option<JournalEntry>> {
    let mut stmt = conn.prepare(
        "SELECT id, content, created_at, updated_at
         FROM journal_entries
         WHERE id = ?1",
    )?;
    let mut rows = stmt.query(params![entry_id])?;
    match rows.next()? {
        Some(row) => Ok(Some(row_to_journal_entry(row)?)),
        None => Ok(None),
    }
}

impl Database {
    pub async fn insert_journal_entry(&self, content: String) -> Result<JournalEntry> {
        self.execute(move |conn| {
            // Stored with millisecond precision; keep the returned copy identical.
            let now = Utc::now().trunc_subsecs(3);
            let entry = JournalEntry {
                id: Uuid::new_v4().to_string(),
                content,
                created_at: now,
                updated_at: now,
            };

            conn.execute(
                "INSERT INTO journal_entries (id, content, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?3)",
                params![entry.id, entry.content, format_datetime(now)],
            )?;

            Ok(entry)
        })
        .await
    }

    /// All entries, newest first.
    pub async fn list_journal_entries(&self) -> Result<Vec<JournalEntry>> {
        self.execute(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, content, created_at, updated_at
                 FROM journal_entries
                 ORDER BY created_at DESC",
            )?;

            let mut rows = stmt.query([])?;
            let mut entries = Vec::new();
            while let Some(row) = rows.next()? {
                entries.push(row_to_journal_entry(row)?);
            }

            Ok(entries)
        })
        .await
    }

    pub async fn get_journal_entry(&self, entry_id: &str) -> Result<Option<JournalEntry>> {
        let entry_id = entry_id.to_string();
        self.execute(move |conn| select_by_id(conn, &entry_id)).await
    }

    pub async fn update_journal_entry_content(
        &self,
        entry_id: &str,
        content: String,
    ) -> Result<JournalEntry> {
        let entry_id = entry_id.to_string();
        self.execute(move |conn| {
            let rows_affected = conn.execute(
                "UPDATE journal_entries
                 SET content = ?1,
                     updated_at = ?2
                 WHERE id = ?3",
                params![content, format_datetime(Utc::now()), entry_id],
            )?;

            if rows_affected == 0 {
                return Err(anyhow!("Journal entry not found"));
            }

            select_by_id(conn, &entry_id)?
                .ok_or_else(|| anyhow!("Journal entry not found after update"))
        })
        .await
    }

    pub async fn delete_journal_entry(&self, entry_id: &str) -> Result<()> {
        let entry_id = entry_id.to_string();
        self.execute(move |conn| {
            let rows_affected =
                conn.execute("DELETE FROM journal_entries WHERE id = ?1", params![entry_id])?;

            if rows_affected == 0 {
                return Err(anyhow!("Journal entry not found"));
            }

            Ok(())
        })
        .await
    }
}
