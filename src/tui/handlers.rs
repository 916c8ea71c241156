// File: src/tui/handlers.rs
// Handles keyboard input and network events for the TUI.
use crate::store::Filters;
use crate::tui::action::AppEvent;
use crate::tui::state::{AppState, InputMode};
use crossterm::event::{KeyCode, KeyEvent};

pub fn handle_app_event(state: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Status(s) => state.message = s,
        AppEvent::Error(s) => {
            state.error = Some(s);
            state.loading = false;
        }
        AppEvent::SchoolsLoaded(schools) => {
            state.set_collection(schools);
        }
    }
}

/// Processes one key event. Returns `true` when the app should quit.
pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> bool {
    match state.mode {
        InputMode::Normal => handle_normal_mode(key, state),
        _ => handle_editing_mode(key, state),
    }
}

fn handle_normal_mode(key: KeyEvent, state: &mut AppState) -> bool {
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('?') => state.show_full_help = !state.show_full_help,

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => state.next(),
        KeyCode::Char('k') | KeyCode::Up => state.previous(),
        KeyCode::PageDown => state.jump_forward(10),
        KeyCode::PageUp => state.jump_backward(10),
        KeyCode::Char('g') | KeyCode::Home => {
            if !state.schools.is_empty() {
                state.list_state.select(Some(0));
            }
        }
        KeyCode::Char('G') | KeyCode::End => {
            if !state.schools.is_empty() {
                state.list_state.select(Some(state.schools.len() - 1));
            }
        }

        // Card interaction
        KeyCode::Enter | KeyCode::Char(' ') => state.toggle_selected_description(),

        // Filter edits. Each one builds a whole replacement Filters value
        // with a single field changed.
        KeyCode::Char('/') => enter_edit_mode(state, InputMode::Searching),
        KeyCode::Char('f') => enter_edit_mode(state, InputMode::EditingStartFrom),
        KeyCode::Char('t') => enter_edit_mode(state, InputMode::EditingStartTo),
        KeyCode::Char('b') => enter_edit_mode(state, InputMode::EditingDeadline),
        KeyCode::Char('s') => {
            let mut filters = state.filters.clone();
            filters.status = filters.status.next();
            state.set_filters(filters);
        }
        KeyCode::Char('o') => {
            let mut filters = state.filters.clone();
            filters.sort = filters.sort.toggled();
            state.set_filters(filters);
        }
        KeyCode::Char('c') => {
            let sort = state.filters.sort;
            state.set_filters(Filters {
                sort,
                ..Filters::default()
            });
        }
        _ => {}
    }
    false
}

fn enter_edit_mode(state: &mut AppState, mode: InputMode) {
    state.mode = mode;
    state.reset_input();
    let existing = match mode {
        InputMode::Searching => &state.filters.name,
        InputMode::EditingStartFrom => &state.filters.start_from,
        InputMode::EditingStartTo => &state.filters.start_to,
        InputMode::EditingDeadline => &state.filters.deadline_before,
        InputMode::Normal => return,
    };
    state.input_buffer = existing.clone();
    state.cursor_position = state.input_buffer.chars().count();
}

fn handle_editing_mode(key: KeyEvent, state: &mut AppState) -> bool {
    match key.code {
        KeyCode::Enter => {
            let value = state.input_buffer.clone();
            let mut filters = state.filters.clone();
            match state.mode {
                InputMode::Searching => filters.name = value,
                InputMode::EditingStartFrom => filters.start_from = value,
                InputMode::EditingStartTo => filters.start_to = value,
                InputMode::EditingDeadline => filters.deadline_before = value,
                InputMode::Normal => {}
            }
            state.mode = InputMode::Normal;
            state.reset_input();
            state.set_filters(filters);
        }
        KeyCode::Esc => {
            state.mode = InputMode::Normal;
            state.reset_input();
            state.refresh_filtered_view();
        }
        KeyCode::Char(c) => {
            state.enter_char(c);
            if state.mode == InputMode::Searching {
                state.refresh_filtered_view();
            }
        }
        KeyCode::Backspace => {
            state.delete_char();
            if state.mode == InputMode::Searching {
                state.refresh_filtered_view();
            }
        }
        KeyCode::Left => state.move_cursor_left(),
        KeyCode::Right => state.move_cursor_right(),
        _ => {}
    }
    false
}
