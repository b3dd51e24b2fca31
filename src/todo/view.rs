use super::models::{Filter, Task};

pub const EMPTY_STATE_TITLE: &str = "No todos found";

pub fn visible_tasks<'a, I>(tasks: I, filter: Filter) -> Vec<&'a Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    tasks.into_iter().filter(|task| filter.matches(task)).collect()
}

pub fn active_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|task| !task.completed).count()
}

pub fn total_count(tasks: &[Task]) -> usize {
    tasks.len()
}

pub fn completed_count(tasks: &[Task]) -> usize {
    total_count(tasks) - active_count(tasks)
}

pub fn empty_state_message(filter: Filter) -> &'static str {
    match filter {
        Filter::All => "Add a todo above to get started!",
        Filter::Active => "No active todos. Great job!",
        Filter::Completed => "No completed todos yet.",
    }
}

pub fn items_left_label(active: usize) -> String {
    if active == 1 {
        "1 item left".to_string()
    } else {
        format!("{} items left", active)
    }
}

/// Everything a front-end needs to draw one frame.
#[derive(Debug)]
pub struct Projection<'a> {
    pub filter: Filter,
    pub visible: Vec<&'a Task>,
    pub active: usize,
    pub total: usize,
}

impl<'a> Projection<'a> {
    pub fn compute(tasks: &'a [Task], filter: Filter) -> Self {
        Self {
            filter,
            visible: visible_tasks(tasks, filter),
            active: active_count(tasks),
            total: total_count(tasks),
        }
    }

    pub fn completed(&self) -> usize {
        self.total - self.active
    }

    pub fn count_for(&self, filter: Filter) -> usize {
        match filter {
            Filter::All => self.total,
            Filter::Active => self.active,
            Filter::Completed => self.completed(),
        }
    }

    pub fn filter_label(&self, filter: Filter) -> String {
        format!("{} ({})", filter.label(), self.count_for(filter))
    }

    /// `None` while there is something to show.
    pub fn empty_message(&self) -> Option<&'static str> {
        if self.visible.is_empty() {
            Some(empty_state_message(self.filter))
        } else {
            None
        }
    }

    /// `None` when the list itself is empty.
    pub fn footer(&self) -> Option<String> {
        if self.total > 0 {
            Some(items_left_label(self.active))
        } else {
            None
        }
    }
}
