// File: ./src/tui/state.rs
// Manages the application state for the TUI.
use crate::model::School;
use crate::store::{Filters, SchoolStore};
use ratatui::widgets::ListState;
use std::collections::HashSet;

#[derive(PartialEq, Clone, Copy)]
pub enum InputMode {
    Normal,
    Searching,
    EditingStartFrom,
    EditingStartTo,
    EditingDeadline,
}

pub struct AppState {
    // Data
    pub store: SchoolStore,
    pub schools: Vec<School>,

    // UI State
    pub list_state: ListState,
    pub mode: InputMode,
    pub message: String,
    pub loading: bool,
    pub error: Option<String>,
    pub show_full_help: bool,

    // Filter State
    pub filters: Filters,

    // Input Buffers
    pub input_buffer: String,
    pub cursor_position: usize,

    // Links of cards with an expanded description region
    pub expanded: HashSet<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        let mut l_state = ListState::default();
        l_state.select(Some(0));

        Self {
            store: SchoolStore::default(),
            schools: vec![],
            list_state: l_state,
            mode: InputMode::Normal,
            message: "Loading schools data...".to_string(),
            loading: true,
            error: None,
            show_full_help: false,
            filters: Filters::default(),
            input_buffer: String::new(),
            cursor_position: 0,
            expanded: HashSet::new(),
        }
    }

    /// Installs the fetched collection. Happens once per session; everything
    /// shown afterwards is derived from it.
    pub fn set_collection(&mut self, schools: Vec<School>) {
        self.store = SchoolStore::new(schools);
        self.loading = false;
        self.refresh_filtered_view();
    }

    /// Replaces the whole filter state and recomputes the derived view.
    /// Callers change one field and carry the rest over unchanged.
    pub fn set_filters(&mut self, filters: Filters) {
        self.filters = filters;
        self.refresh_filtered_view();
    }

    pub fn refresh_filtered_view(&mut self) {
        // While the name filter is being typed, filter on the live buffer so
        // the list narrows with each keystroke.
        let effective = if self.mode == InputMode::Searching {
            let mut f = self.filters.clone();
            f.name = self.input_buffer.clone();
            f
        } else {
            self.filters.clone()
        };

        self.schools = self.store.filter(&effective);

        let len = self.schools.len();
        if len == 0 {
            self.list_state.select(None);
        } else {
            let current = self.list_state.selected().unwrap_or(0);
            if current >= len {
                self.list_state.select(Some(len - 1)); // Clamp
            } else {
                self.list_state.select(Some(current));
            }
        }
    }

    pub fn get_selected_school(&self) -> Option<&School> {
        if let Some(idx) = self.list_state.selected() {
            self.schools.get(idx)
        } else {
            None
        }
    }

    pub fn toggle_selected_description(&mut self) {
        let Some(link) = self
            .get_selected_school()
            .filter(|s| s.description.is_some())
            .map(|s| s.link.clone())
        else {
            return;
        };
        if !self.expanded.remove(&link) {
            self.expanded.insert(link);
        }
    }

    // --- INPUT HELPERS ---
    pub fn move_cursor_left(&mut self) {
        let cursor_moved_left = self.cursor_position.saturating_sub(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_left);
    }
    pub fn move_cursor_right(&mut self) {
        let cursor_moved_right = self.cursor_position.saturating_add(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_right);
    }
    pub fn enter_char(&mut self, new_char: char) {
        // Safe insertion for UTF-8 strings
        let byte_index = self
            .input_buffer
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor_position)
            .unwrap_or(self.input_buffer.len());

        self.input_buffer.insert(byte_index, new_char);
        self.move_cursor_right();
    }
    pub fn delete_char(&mut self) {
        if self.cursor_position != 0 {
            let current_index = self.cursor_position;
            let before = self.input_buffer.chars().take(current_index - 1);
            let after = self.input_buffer.chars().skip(current_index);
            self.input_buffer = before.chain(after).collect();
            self.move_cursor_left();
        }
    }
    pub fn reset_input(&mut self) {
        self.input_buffer.clear();
        self.cursor_position = 0;
    }
    fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        new_cursor_pos.clamp(0, self.input_buffer.chars().count())
    }

    // --- NAVIGATION ---
    pub fn next(&mut self) {
        if self.schools.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i >= self.schools.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.schools.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.schools.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn jump_forward(&mut self, step: usize) {
        if !self.schools.is_empty() {
            let current = self.list_state.selected().unwrap_or(0);
            self.list_state
                .select(Some((current + step).min(self.schools.len() - 1)));
        }
    }

    pub fn jump_backward(&mut self, step: usize) {
        if !self.schools.is_empty() {
            let current = self.list_state.selected().unwrap_or(0);
            self.list_state.select(Some(current.saturating_sub(step)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_school(name: &str) -> School {
        School {
            name: name.to_string(),
            link: format!("https://example.org/{}", name),
            venue: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            registration_status: String::new(),
            application_deadline: None,
            description: None,
        }
    }

    #[test]
    fn test_navigation_next_wraps() {
        let mut state = AppState::new();
        state.schools = vec![dummy_school("a"), dummy_school("b"), dummy_school("c")];

        state.list_state.select(Some(0));

        state.next(); // 1
        assert_eq!(state.list_state.selected(), Some(1));

        state.next(); // 2
        assert_eq!(state.list_state.selected(), Some(2));

        state.next(); // Wrap to 0
        assert_eq!(state.list_state.selected(), Some(0));
    }

    #[test]
    fn test_navigation_previous_wraps() {
        let mut state = AppState::new();
        state.schools = vec![dummy_school("a"), dummy_school("b"), dummy_school("c")];

        state.list_state.select(Some(0));

        state.previous(); // Wrap to last (2)
        assert_eq!(state.list_state.selected(), Some(2));

        state.previous(); // 1
        assert_eq!(state.list_state.selected(), Some(1));
    }

    #[test]
    fn test_navigation_empty_list_safety() {
        let mut state = AppState::new();
        state.schools = vec![];

        // Should not panic
        state.next();
        state.previous();
        state.jump_forward(10);
        state.jump_backward(10);
    }

    #[test]
    fn test_cursor_clamping() {
        let mut state = AppState::new();
        state.input_buffer = "abc".to_string(); // len 3
        state.cursor_position = 0;

        state.move_cursor_right(); // 1
        state.move_cursor_right(); // 2
        state.move_cursor_right(); // 3 (after 'c')
        state.move_cursor_right(); // Should stay 3

        assert_eq!(state.cursor_position, 3);

        state.move_cursor_left(); // 2
        state.move_cursor_left(); // 1
        state.move_cursor_left(); // 0
        state.move_cursor_left(); // Should stay 0

        assert_eq!(state.cursor_position, 0);
    }

    #[test]
    fn test_selection_clamps_when_view_shrinks() {
        let mut state = AppState::new();
        state.set_collection(vec![
            dummy_school("alpha"),
            dummy_school("beta"),
            dummy_school("gamma"),
        ]);
        state.list_state.select(Some(2));

        let mut filters = state.filters.clone();
        filters.name = "alpha".to_string();
        state.set_filters(filters);

        assert_eq!(state.schools.len(), 1);
        assert_eq!(state.list_state.selected(), Some(0));
    }
}
