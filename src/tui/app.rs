use crate::todo::models::{Filter, TaskId};
use crate::todo::storage::KeyValueStore;
use crate::todo::store::TaskStore;
use crate::todo::view::Projection;
use crate::tui::edit::LineEditor;
use crate::tui::handlers::{HelpModeAction, InputModeAction, KeyHandler, NormalModeAction};
use crate::tui::navigation::NavigationState;
use anyhow::Result;
use crossterm::event::KeyEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Typing a new task into the input line.
    Adding,
    /// Typing the draft of the store's edit session.
    Editing,
    Help,
}

pub struct App<S: KeyValueStore> {
    pub store: TaskStore<S>,
    pub filter: Filter,
    pub navigation: NavigationState,
    pub input: LineEditor,
    pub mode: Mode,
    pub should_quit: bool,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(store: TaskStore<S>) -> Self {
        Self {
            store,
            filter: Filter::default(),
            navigation: NavigationState::new(),
            input: LineEditor::new(),
            mode: Mode::Normal,
            should_quit: false,
        }
    }

    pub fn projection(&self) -> Projection<'_> {
        Projection::compute(self.store.tasks(), self.filter)
    }

    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.projection()
            .visible
            .get(self.navigation.selected_index)
            .map(|task| task.id.clone())
    }

    fn visible_len(&self) -> usize {
        self.projection().visible.len()
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        match self.mode {
            Mode::Help => self.handle_help_mode_key(key_event),
            Mode::Adding | Mode::Editing => self.handle_input_mode_key(key_event),
            Mode::Normal => self.handle_normal_mode_key(key_event),
        }
        let len = self.visible_len();
        self.navigation.clamp(len);
        Ok(())
    }

    fn handle_normal_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_normal_mode_key(key_event) {
            NormalModeAction::Quit => self.should_quit = true,
            NormalModeAction::MoveSelectionUp => self.navigation.move_selection_up(),
            NormalModeAction::MoveSelectionDown => {
                let len = self.visible_len();
                self.navigation.move_selection_down(len);
            }
            NormalModeAction::MoveSelectionFirst => self.navigation.move_to_first(),
            NormalModeAction::MoveSelectionLast => {
                let len = self.visible_len();
                self.navigation.move_to_last(len);
            }
            NormalModeAction::ToggleSelected => self.toggle_selected(),
            NormalModeAction::StartAdding => self.start_adding(),
            NormalModeAction::BeginEdit => self.begin_edit_selected(),
            NormalModeAction::RemoveSelected => self.remove_selected(),
            NormalModeAction::SetFilter(filter) => self.set_filter(filter),
            NormalModeAction::NextFilter => self.set_filter(self.filter.next()),
            NormalModeAction::PreviousFilter => self.set_filter(self.filter.previous()),
            NormalModeAction::ToggleHelpMode => self.mode = Mode::Help,
            NormalModeAction::None => {}
        }
    }

    fn handle_help_mode_key(&mut self, key_event: KeyEvent) {
        if KeyHandler::handle_help_mode_key(key_event) == HelpModeAction::ExitHelpMode {
            self.mode = Mode::Normal;
        }
    }

    fn handle_input_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_input_mode_key(key_event) {
            InputModeAction::Cancel => self.cancel_input(),
            InputModeAction::Confirm => self.confirm_input(),
            InputModeAction::Backspace => self.input.backspace(),
            InputModeAction::Delete => self.input.delete(),
            InputModeAction::MoveCursorLeft => self.input.move_cursor_left(),
            InputModeAction::MoveCursorRight => self.input.move_cursor_right(),
            InputModeAction::MoveCursorHome => self.input.move_cursor_home(),
            InputModeAction::MoveCursorEnd => self.input.move_cursor_end(),
            InputModeAction::DeleteWordBackward => self.input.delete_word_backward(),
            InputModeAction::InsertChar(c) => self.input.insert_char(c),
            InputModeAction::None => {}
        }

        if self.mode == Mode::Editing {
            self.store.update_draft(self.input.text());
        }
    }

    pub fn set_filter(&mut self, filter: Filter) {
        if self.filter != filter {
            self.filter = filter;
            self.navigation.move_to_first();
        }
    }

    fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.store.toggle(&id);
        }
    }

    fn remove_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.store.remove(&id);
        }
    }

    fn start_adding(&mut self) {
        self.input.clear();
        self.mode = Mode::Adding;
    }

    fn begin_edit_selected(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        self.store.begin_edit(&id);
        if let Some(session) = self.store.edit_session() {
            self.input.set(&session.draft);
            self.mode = Mode::Editing;
        }
    }

    fn confirm_input(&mut self) {
        match self.mode {
            Mode::Adding => {
                // The input stays open so several tasks can be entered in a row.
                if let Some(id) = self.store.add(self.input.text()) {
                    self.input.clear();
                    self.select_task(&id);
                }
            }
            Mode::Editing => {
                self.store.update_draft(self.input.text());
                self.store.commit_edit();
                self.input.clear();
                self.mode = Mode::Normal;
            }
            Mode::Normal | Mode::Help => {}
        }
    }

    fn cancel_input(&mut self) {
        if self.mode == Mode::Editing {
            self.store.cancel_edit();
        }
        self.input.clear();
        self.mode = Mode::Normal;
    }

    fn select_task(&mut self, id: &TaskId) {
        let projection = self.projection();
        let len = projection.visible.len();
        let index = projection.visible.iter().position(|task| &task.id == id);
        if let Some(index) = index {
            self.navigation.select(index, len);
        }
    }
}
