use super::mode::Mode;
use super::state::AppState;
use crate::clipboard::copy_to_clipboard;
use crate::format::ArrayFormat;
use crate::keybindings::Action;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Result<()> {
    match state.mode {
        Mode::Navigate => handle_navigate_mode(key, state)?,
        Mode::Insert => handle_insert_mode(key, state)?,
    }
    Ok(())
}

fn handle_navigate_mode(key: KeyEvent, state: &mut AppState) -> Result<()> {
    let Some(action) = state.keybindings.lookup_navigate(&key) else {
        return Ok(());
    };

    match action {
        Action::NextFormat => state.next_format(),
        Action::PrevFormat => state.prev_format(),
        Action::SelectSimple => state.select_format(ArrayFormat::Simple),
        Action::SelectQuoted => state.select_format(ArrayFormat::Quoted),
        Action::SelectTemplate => state.select_format(ArrayFormat::Template),
        Action::SelectMarkdown => state.select_format(ArrayFormat::Markdown),
        Action::CopyOutput => copy_output(state),
        Action::ClearInput => state.clear_input(),
        Action::EnterInsertMode => state.mode = Mode::Insert,
        Action::ToggleHelp => state.show_help = !state.show_help,
        Action::CloseHelp => state.show_help = false,
        Action::Quit => state.should_quit = true,
        _ => {}
    }

    Ok(())
}

fn handle_insert_mode(key: KeyEvent, state: &mut AppState) -> Result<()> {
    if let Some(action) = state.keybindings.lookup_insert(&key) {
        match action {
            Action::InsertCancel => state.mode = Mode::Navigate,
            Action::InsertNewline => state.insert_newline(),
            Action::InsertBackspace => state.backspace(),
            Action::InsertLeft => state.move_left(),
            Action::InsertRight => state.move_right(),
            Action::InsertUp => state.move_up(),
            Action::InsertDown => state.move_down(),
            Action::InsertHome => state.move_home(),
            Action::InsertEnd => state.move_end(),
            Action::InsertCopy => copy_output(state),
            _ => {}
        }
        return Ok(());
    }

    // Anything unbound that carries a printable char is text input.
    if let KeyCode::Char(c) = key.code {
        if !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            state.insert_char(c);
        }
    }

    Ok(())
}

/// Copy the rendered output and arm the transient indicator. A clipboard
/// failure lands in the status bar instead of tearing down the TUI.
fn copy_output(state: &mut AppState) {
    match copy_to_clipboard(&state.output()) {
        Ok(()) => state.mark_copied(),
        Err(err) => state.status_error = Some(format!("Copy failed: {err:#}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keybindings::{KeybindingCache, KeybindingsConfig};
    use crate::ui::theme::Theme;

    fn state() -> AppState {
        AppState::new(
            ArrayFormat::Quoted,
            Theme::default(),
            KeybindingCache::from_config(&KeybindingsConfig::defaults()),
        )
    }

    fn press(state: &mut AppState, code: KeyCode) {
        handle_key_event(KeyEvent::new(code, KeyModifiers::NONE), state).unwrap();
    }

    #[test]
    fn test_typing_in_insert_mode() {
        let mut state = state();
        assert_eq!(state.mode, Mode::Insert);
        press(&mut state, KeyCode::Char('a'));
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Char('b'));
        assert_eq!(state.input, "a\nb");
    }

    #[test]
    fn test_escape_leaves_insert_mode() {
        let mut state = state();
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.mode, Mode::Navigate);
    }

    #[test]
    fn test_navigate_format_selection() {
        let mut state = state();
        press(&mut state, KeyCode::Esc);

        press(&mut state, KeyCode::Char('1'));
        assert_eq!(state.format, ArrayFormat::Simple);
        press(&mut state, KeyCode::Char('4'));
        assert_eq!(state.format, ArrayFormat::Markdown);
        press(&mut state, KeyCode::Char('j'));
        assert_eq!(state.format, ArrayFormat::Simple);
        press(&mut state, KeyCode::Char('k'));
        assert_eq!(state.format, ArrayFormat::Markdown);
    }

    #[test]
    fn test_navigate_chars_do_not_edit_buffer() {
        let mut state = state();
        press(&mut state, KeyCode::Esc);
        press(&mut state, KeyCode::Char('j'));
        press(&mut state, KeyCode::Char('x'));
        assert_eq!(state.input, "");
    }

    #[test]
    fn test_ctrl_char_not_inserted() {
        let mut state = state();
        handle_key_event(
            KeyEvent::new(KeyCode::Char('p'), KeyModifiers::CONTROL),
            &mut state,
        )
        .unwrap();
        assert_eq!(state.input, "");
    }

    #[test]
    fn test_clear_input_binding() {
        let mut state = state();
        press(&mut state, KeyCode::Char('a'));
        press(&mut state, KeyCode::Esc);
        press(&mut state, KeyCode::Char('d'));
        assert_eq!(state.input, "");
    }

    #[test]
    fn test_help_toggle_and_close() {
        let mut state = state();
        press(&mut state, KeyCode::Esc);
        press(&mut state, KeyCode::Char('?'));
        assert!(state.show_help);
        press(&mut state, KeyCode::Esc);
        assert!(!state.show_help);
    }

    #[test]
    fn test_quit() {
        let mut state = state();
        press(&mut state, KeyCode::Esc);
        press(&mut state, KeyCode::Char('q'));
        assert!(state.should_quit);
    }
}
