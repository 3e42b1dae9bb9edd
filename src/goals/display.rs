use chrono::NaiveDate;

use crate::db::Goal;

/// Order goals for the goals list: the main goal first, the rest as given
/// (newest first from storage). Unless `show_all`, only goals created on `today`.
pub fn order_for_display(mut goals: Vec<Goal>, show_all: bool, today: NaiveDate) -> Vec<Goal> {
    if !show_all {
        goals.retain(|goal| goal.created_at.date_naive() == today);
    }

    // Stable sort keeps the newest-first order among the rest.
    goals.sort_by_key(|goal| !goal.show_on_home);
    goals
}
