use crate::{db::JournalEntry, AppState};

fn entry_text(content: &str) -> Result<String, String> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err("Journal entry cannot be empty.".to_string());
    }
    Ok(trimmed.to_string())
}

pub async fn create_journal_entry(
    state: &AppState,
    content: String,
) -> Result<JournalEntry, String> {
    let content = entry_text(&content)?;
    state
        .db
        .insert_journal_entry(content)
        .await
        .map_err(|e| e.to_string())
}

pub async fn list_journal_entries(state: &AppState) -> Result<Vec<JournalEntry>, String> {
    state
        .db
        .list_journal_entries()
        .await
        .map_err(|e| e.to_string())
}

pub async fn get_journal_entry(state: &AppState, entry_id: String) -> Result<JournalEntry, String> {
    state
        .db
        .get_journal_entry(&entry_id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| "Could not load journal entry.".to_string())
}

pub async fn update_journal_entry(
    state: &AppState,
    entry_id: String,
    content: String,
) -> Result<JournalEntry, String> {
    let content = entry_text(&content)?;
    state
        .db
        .update_journal_entry_content(&entry_id, content)
        .await
        .map_err(|e| e.to_string())
}

pub async fn delete_journal_entry(state: &AppState, entry_id: String) -> Result<(), String> {
    state
        .db
        .delete_journal_entry(&entry_id)
        .await
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    fn open() -> (TempDir, AppState) {
        let dir = tempdir().unwrap();
        let state = AppState::open(dir.path()).unwrap();
        (dir, state)
    }

    #[tokio::test]
    async fn content_is_trimmed() {
        let (_dir, state) = open();
        let entry = create_journal_entry(&state, "  slept well  \n".into())
            .await
            .unwrap();
        assert_eq!(entry.content, "slept well");
    }

    #[tokio::test]
    async fn blank_content_is_rejected() {
        let (_dir, state) = open();
        let err = create_journal_entry(&state, "   ".into()).await.unwrap_err();
        assert_eq!(err, "Journal entry cannot be empty.");

        let entry = create_journal_entry(&state, "keep".into()).await.unwrap();
        assert!(update_journal_entry(&state, entry.id.clone(), "".into())
            .await
            .is_err());
        assert_eq!(
            get_journal_entry(&state, entry.id).await.unwrap().content,
            "keep"
        );
    }

    #[tokio::test]
    async fn edit_then_delete() {
        let (_dir, state) = open();
        let entry = create_journal_entry(&state, "draft".into()).await.unwrap();

        let edited = update_journal_entry(&state, entry.id.clone(), " final ".into())
            .await
            .unwrap();
        assert_eq!(edited.content, "final");

        delete_journal_entry(&state, entry.id.clone()).await.unwrap();
        assert!(list_journal_entries(&state).await.unwrap().is_empty());
        assert_eq!(
            get_journal_entry(&state, entry.id).await.unwrap_err(),
            "Could not load journal entry."
        );
    }
}
