use anyhow::{anyhow, Context, Result};
use chrono::{SubsecRound, Utc};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

use crate::db::{
    connection::Database,
    helpers::{format_datetime, parse_datetime},
    models::Goal,
};

const GOAL_COLUMNS: &str = "id, title, is_done, show_on_home, created_at, updated_at";

fn row_to_goal(row: &Row) -> Result<Goal> {
    let created_at: String = row.get("created_at")?;
    let updated_at: String = row.get("updated_at")?;

    Ok(Goal {
        id: row.get("id")?,
        title: row.get("title")?,
        is_done: row.get("is_done")?,
        show_on_home: row.get("show_on_home")?,
        created_at: parse_datetime(&created_at, "created_at")?,
        updated_at: parse_datetime(&updated_at, "updated_at")?,
    })
}

fn select_by_id(conn: &Connection, goal_id: &str) -> Result<Option<Goal>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {GOAL_COLUMNS} FROM daily_goals WHERE id = ?1"
    ))?;
    let mut rows = stmt.query(params![goal_id])?;
    match rows.next()? {
        Some(row) => Ok(Some(row_to_goal(row)?)),
        None => Ok(None),
    }
}

impl Database {
    pub async fn insert_goal(&self, title: String) -> Result<Goal> {
        self.execute(move |conn| {
            let now = Utc::now().trunc_subsecs(3);
            let goal = Goal {
                id: Uuid::new_v4().to_string(),
                title,
                is_done: false,
                show_on_home: false,
                created_at: now,
                updated_at: now,
            };

            conn.execute(
                "INSERT INTO daily_goals (id, title, is_done, show_on_home, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
                params![
                    goal.id,
                    goal.title,
                    goal.is_done,
                    goal.show_on_home,
                    format_datetime(now),
                ],
            )?;

            Ok(goal)
        })
        .await
    }

    /// All goals, newest first.
    pub async fn list_goals(&self) -> Result<Vec<Goal>> {
        self.execute(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {GOAL_COLUMNS} FROM daily_goals ORDER BY created_at DESC"
            ))?;

            let mut rows = stmt.query([])?;
            let mut goals = Vec::new();
            while let Some(row) = rows.next()? {
                goals.push(row_to_goal(row)?);
            }

            Ok(goals)
        })
        .await
    }

    pub async fn get_goal(&self, goal_id: &str) -> Result<Option<Goal>> {
        let goal_id = goal_id.to_string();
        self.execute(move |conn| select_by_id(conn, &goal_id)).await
    }

    pub async fn set_goal_done(&self, goal_id: &str, is_done: bool) -> Result<Goal> {
        let goal_id = goal_id.to_string();
        self.execute(move |conn| {
            let rows_affected = conn.execute(
                "UPDATE daily_goals
                 SET is_done = ?1,
                     updated_at = ?2
                 WHERE id = ?3",
                params![is_done, format_datetime(Utc::now()), goal_id],
            )?;

            if rows_affected == 0 {
                return Err(anyhow!("Goal not found"));
            }

            select_by_id(conn, &goal_id)?.ok_or_else(|| anyhow!("Goal not found after update"))
        })
        .await
    }

    /// Flag `goal_id` as the main goal and clear the flag everywhere else.
    pub async fn set_main_goal(&self, goal_id: &str) -> Result<Goal> {
        let goal_id = goal_id.to_string();
        self.execute(move |conn| {
            let now = format_datetime(Utc::now());
            let tx = conn
                .transaction()
                .context("failed to open main goal transaction")?;

            let rows_affected = tx.execute(
                "UPDATE daily_goals
                 SET show_on_home = 1,
                     updated_at = ?1
                 WHERE id = ?2",
                params![now, goal_id],
            )?;

            if rows_affected == 0 {
                return Err(anyhow!("Goal not found"));
            }

            tx.execute(
                "UPDATE daily_goals
                 SET show_on_home = 0,
                     updated_at = ?1
                 WHERE id != ?2 AND show_on_home = 1",
                params![now, goal_id],
            )?;

            tx.commit().context("failed to commit main goal change")?;

            select_by_id(conn, &goal_id)?.ok_or_else(|| anyhow!("Goal not found after update"))
        })
        .await
    }

    /// Newest goal flagged for the home screen.
    pub async fn get_main_goal(&self) -> Result<Option<Goal>> {
        self.execute(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {GOAL_COLUMNS} FROM daily_goals
                 WHERE show_on_home = 1
                 ORDER BY created_at DESC
                 LIMIT 1"
            ))?;

            let mut rows = stmt.query([])?;
            match rows.next()? {
                Some(row) => Ok(Some(row_to_goal(row)?)),
                None => Ok(None),
            }
        })
        .await
    }

    pub async fn delete_goal(&self, goal_id: &str) -> Result<()> {
        let goal_id = goal_id.to_string();
        self.execute(move |conn| {
            let rows_affected =
                conn.execute("DELETE FROM daily_goals WHERE id = ?1", params![goal_id])?;

            if rows_affected == 0 {
                return Err(anyhow!("Goal not found"));
            }

            Ok(())
        })
        .await
    }
}
