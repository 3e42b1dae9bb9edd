use chrono::Utc;

use crate::{db::Goal, goals::display::order_for_display, log_info, AppState};

const ENABLE_LOGS: bool = true;

pub async fn create_goal(state: &AppState, title: String) -> Result<Goal, String> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Goal cannot be empty.".to_string());
    }

    state
        .db
        .insert_goal(title.to_string())
        .await
        .map_err(|e| e.to_string())
}

/// Goals for the list view; today's goals only unless `show_all`.
pub async fn list_goals(state: &AppState, show_all: bool) -> Result<Vec<Goal>, String> {
    let goals = state.db.list_goals().await.map_err(|e| e.to_string())?;
    Ok(order_for_display(goals, show_all, Utc::now().date_naive()))
}

pub async fn toggle_goal(state: &AppState, goal_id: String) -> Result<Goal, String> {
    let db = &state.db;
    let goal = db
        .get_goal(&goal_id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| "Goal not found".to_string())?;

    db.set_goal_done(&goal_id, !goal.is_done)
        .await
        .map_err(|e| e.to_string())
}

pub async fn set_main_goal(state: &AppState, goal_id: String) -> Result<Goal, String> {
    let goal = state
        .db
        .set_main_goal(&goal_id)
        .await
        .map_err(|e| e.to_string())?;

    log_info!("Main goal is now {}", goal.id);
    Ok(goal)
}

/// The goal shown on the home screen, if one is flagged.
pub async fn get_main_goal(state: &AppState) -> Result<Option<Goal>, String> {
    state.db.get_main_goal().await.map_err(|e| e.to_string())
}

pub async fn delete_goal(state: &AppState, goal_id: String) -> Result<(), String> {
    state
        .db
        .delete_goal(&goal_id)
        .await
        .map_err(|e| e.to_string())
}
