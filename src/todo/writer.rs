use super::models::Task;
use super::storage::KeyValueStore;
use anyhow::{Context, Result};

pub fn serialize_tasks(tasks: &[Task]) -> Result<String> {
    serde_json::to_string(tasks).context("Failed to serialize task list")
}

pub fn write_tasks<S: KeyValueStore>(store: &S, key: &str, tasks: &[Task]) -> Result<()> {
    let content = serialize_tasks(tasks)?;
    store
        .write(key, &content)
        .with_context(|| format!("Failed to write task list to slot: {}", key))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::models::TaskId;
    use crate::todo::parser;
    use crate::todo::storage::MemoryStore;
    use pretty_assertions::assert_eq;

    fn sample_tasks() -> Vec<Task> {
        let mut done = Task::new(TaskId::from("2b"), "Walk the dog".to_string(), 1_700_000_000_002);
        done.completed = true;
        vec![
            Task::new(TaskId::from("1a"), "Buy groceries".to_string(), 1_700_000_000_001),
            done,
            Task::new(TaskId::from("3c"), "Ünïcödé \"quoted\"".to_string(), 1_700_000_000_003),
        ]
    }

    #[test]
    fn test_serialize_empty_list() {
        assert_eq!(serialize_tasks(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_serialize_field_names() {
        let tasks = vec![Task::new(TaskId::from("1a"), "A".to_string(), 5)];
        assert_eq!(
            serialize_tasks(&tasks).unwrap(),
            r#"[{"id":"1a","text":"A","completed":false,"createdAt":5}]"#
        );
    }

    #[test]
    fn test_roundtrip_preserves_order_and_fields() {
        let tasks = sample_tasks();
        let parsed = parser::parse_tasks(&serialize_tasks(&tasks).unwrap()).unwrap();
        assert_eq!(parsed, tasks);
    }

    #[test]
    fn test_write_overwrites_slot() {
        let store = MemoryStore::new();
        write_tasks(&store, "todos", &sample_tasks()).unwrap();
        write_tasks(&store, "todos", &[]).unwrap();
        assert_eq!(store.get("todos").as_deref(), Some("[]"));
    }

    #[test]
    fn test_write_failure_is_reported() {
        let store = MemoryStore::new();
        store.set_fail_writes(true);
        assert!(write_tasks(&store, "todos", &sample_tasks()).is_err());
    }
}
