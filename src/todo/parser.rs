use super::models::Task;
use super::storage::KeyValueStore;
use anyhow::{Context, Result};
use log::{info, warn};

pub fn parse_tasks(content: &str) -> Result<Vec<Task>> {
    let tasks: Vec<Task> =
        serde_json::from_str(content).context("Stored task list is not a valid task array")?;
    Ok(tasks)
}

/// Reads the task list from `key`, starting empty when the slot is missing,
/// unreadable, or holds something other than a task array.
pub fn load_tasks<S: KeyValueStore>(store: &S, key: &str) -> Vec<Task> {
    let content = match store.read(key) {
        Ok(Some(content)) => content,
        Ok(None) => {
            info!("event=tasks_load status=empty key={}", key);
            return Vec::new();
        }
        Err(e) => {
            warn!("event=tasks_load status=read_failed key={} error={}", key, e);
            return Vec::new();
        }
    };

    match parse_tasks(&content) {
        Ok(tasks) => {
            info!("event=tasks_load status=ok key={} count={}", key, tasks.len());
            tasks
        }
        Err(e) => {
            warn!("event=tasks_load status=discarded key={} error={:#}", key, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::models::TaskId;
    use crate::todo::storage::MemoryStore;

    #[test]
    fn test_parse_task_array() {
        let content = r#"[
            {"id":"1a","text":"A","completed":false,"createdAt":1},
            {"id":"2b","text":"B","completed":true,"createdAt":2}
        ]"#;
        let tasks = parse_tasks(content).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, TaskId::from("1a"));
        assert_eq!(tasks[0].text, "A");
        assert!(!tasks[0].completed);
        assert_eq!(tasks[1].created_at, 2);
        assert!(tasks[1].completed);
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_tasks("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(parse_tasks("{not json").is_err());
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        assert!(parse_tasks(r#"{"id":"1","text":"A"}"#).is_err());
        assert!(parse_tasks(r#"[{"id":"1","text":"A"}]"#).is_err());
        assert!(parse_tasks(r#"[{"id":1,"text":"A","completed":false,"createdAt":1}]"#).is_err());
        assert!(parse_tasks("null").is_err());
    }

    #[test]
    fn test_load_missing_slot_is_empty() {
        let store = MemoryStore::new();
        assert!(load_tasks(&store, "todos").is_empty());
    }

    #[test]
    fn test_load_invalid_json_is_empty() {
        let store = MemoryStore::with_value("todos", "definitely not json");
        assert!(load_tasks(&store, "todos").is_empty());
    }

    #[test]
    fn test_load_valid_slot() {
        let store = MemoryStore::with_value(
            "todos",
            r#"[{"id":"1a","text":"A","completed":false,"createdAt":1}]"#,
        );
        let tasks = load_tasks(&store, "todos");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "A");
    }
}
