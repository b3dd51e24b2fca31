/// Cursor over the visible (filtered) rows.
pub struct NavigationState {
    pub selected_index: usize,
    pub scroll_offset: usize,
}

const VISIBLE_ROWS: usize = 20;

impl NavigationState {
    pub fn new() -> Self {
        Self {
            selected_index: 0,
            scroll_offset: 0,
        }
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.update_scroll();
        }
    }

    pub fn move_selection_down(&mut self, row_count: usize) {
        if self.selected_index < row_count.saturating_sub(1) {
            self.selected_index += 1;
            self.update_scroll();
        }
    }

    pub fn move_to_first(&mut self) {
        self.selected_index = 0;
        self.update_scroll();
    }

    pub fn move_to_last(&mut self, row_count: usize) {
        self.selected_index = row_count.saturating_sub(1);
        self.update_scroll();
    }

    pub fn select(&mut self, index: usize, row_count: usize) {
        self.selected_index = index;
        self.clamp(row_count);
    }

    /// Pulls the cursor back inside the list after rows disappear.
    pub fn clamp(&mut self, row_count: usize) {
        if self.selected_index >= row_count {
            self.selected_index = row_count.saturating_sub(1);
        }
        self.update_scroll();
    }

    fn update_scroll(&mut self) {
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + VISIBLE_ROWS {
            self.scroll_offset = self.selected_index.saturating_sub(VISIBLE_ROWS - 1);
        }
    }
}
