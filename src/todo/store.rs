use super::ids;
use super::models::{EditSession, Task, TaskId};
use super::parser;
use super::storage::KeyValueStore;
use super::writer;
use log::{debug, info, warn};

/// Slot the whole task list lives under.
pub const STORAGE_KEY: &str = "todos";

pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Owns the canonical task list and the optional edit session.
///
/// Every mutation that changes the list writes the full list back to the
/// backend. Write failures are logged and otherwise ignored; the in-memory
/// list stays authoritative for the rest of the session.
pub struct TaskStore<S: KeyValueStore> {
    tasks: Vec<Task>,
    edit: Option<EditSession>,
    backend: S,
    clock: fn() -> i64,
}

impl<S: KeyValueStore> TaskStore<S> {
    pub fn open(backend: S) -> Self {
        let tasks = parser::load_tasks(&backend, STORAGE_KEY);
        Self {
            tasks,
            edit: None,
            backend,
            clock: now_millis,
        }
    }

    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    pub fn is_editing(&self, id: &TaskId) -> bool {
        self.edit.as_ref().is_some_and(|session| &session.target == id)
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn add(&mut self, raw_text: &str) -> Option<TaskId> {
        let text = raw_text.trim();
        if text.is_empty() {
            return None;
        }

        let now = (self.clock)();
        let id = ids::generate_id(now);
        self.tasks.push(Task::new(id.clone(), text.to_string(), now));
        info!("event=task_add id={} count={}", id, self.tasks.len());
        self.persist();
        Some(id)
    }

    pub fn toggle(&mut self, id: &TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| &task.id == id) else {
            debug!("event=task_toggle status=not_found id={}", id);
            return false;
        };

        task.completed = !task.completed;
        info!("event=task_toggle id={} completed={}", id, task.completed);
        self.persist();
        true
    }

    pub fn remove(&mut self, id: &TaskId) -> bool {
        let Some(index) = self.tasks.iter().position(|task| &task.id == id) else {
            debug!("event=task_remove status=not_found id={}", id);
            return false;
        };

        self.tasks.remove(index);
        if self.is_editing(id) {
            self.edit = None;
        }
        info!("event=task_remove id={} count={}", id, self.tasks.len());
        self.persist();
        true
    }

    /// Starts editing `id` with its current text as the draft, dropping any
    /// other session unsaved.
    pub fn begin_edit(&mut self, id: &TaskId) {
        let Some(task) = self.get(id) else {
            debug!("event=edit_begin status=not_found id={}", id);
            return;
        };

        self.edit = Some(EditSession {
            target: task.id.clone(),
            draft: task.text.clone(),
        });
    }

    pub fn update_draft(&mut self, text: &str) {
        if let Some(session) = self.edit.as_mut() {
            session.draft = text.to_string();
        }
    }

    pub fn commit_edit(&mut self) -> bool {
        let Some(session) = self.edit.take() else {
            return false;
        };

        let text = session.draft.trim();
        if text.is_empty() {
            debug!("event=edit_commit status=blank id={}", session.target);
            return false;
        }

        let Some(task) = self.tasks.iter_mut().find(|task| task.id == session.target) else {
            debug!("event=edit_commit status=not_found id={}", session.target);
            return false;
        };

        task.text = text.to_string();
        info!("event=edit_commit id={}", session.target);
        self.persist();
        true
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    fn persist(&self) {
        if let Err(e) = writer::write_tasks(&self.backend, STORAGE_KEY, &self.tasks) {
            warn!("event=tasks_persist status=failed error={:#}", e);
        }
    }
}
