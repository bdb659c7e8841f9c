use super::mode::Mode;
use crate::config::Config;
use crate::format::{ArrayFormat, convert, extract_lines};
use crate::keybindings::KeybindingCache;
use crate::ui::theme::Theme;
use crate::utils::unicode::{floor_boundary, next_boundary, prev_boundary};
use std::time::{Duration, Instant};

/// How long the copied indicator stays visible after a copy.
pub const COPIED_INDICATOR_TTL: Duration = Duration::from_millis(2000);

pub struct AppState {
    pub input: String,
    /// Byte offset of the cursor in `input`, always on a char boundary.
    pub cursor: usize,
    pub format: ArrayFormat,
    pub mode: Mode,
    pub should_quit: bool,
    pub show_help: bool,
    pub copied_at: Option<Instant>,
    pub status_error: Option<String>,
    pub theme: Theme,
    pub keybindings: KeybindingCache,
}

impl AppState {
    pub fn new(format: ArrayFormat, theme: Theme, keybindings: KeybindingCache) -> Self {
        Self {
            input: String::new(),
            cursor: 0,
            format,
            mode: Mode::default(),
            should_quit: false,
            show_help: false,
            copied_at: None,
            status_error: None,
            theme,
            keybindings,
        }
    }

    /// Formatted output for the current buffer and selector. Recomputed on
    /// demand; never cached.
    pub fn output(&self) -> String {
        convert(&self.input, self.format)
    }

    pub fn line_count(&self) -> usize {
        extract_lines(&self.input).len()
    }

    pub fn select_format(&mut self, format: ArrayFormat) {
        self.format = format;
    }

    pub fn next_format(&mut self) {
        self.format = self.format.next();
    }

    pub fn prev_format(&mut self) {
        self.format = self.format.prev();
    }

    pub fn mark_copied(&mut self) {
        self.copied_at = Some(Instant::now());
        self.status_error = None;
    }

    pub fn copied_indicator_active(&self) -> bool {
        self.copied_at.is_some()
    }

    /// Drop the copied indicator once it has outlived its window. Copying
    /// again before expiry overwrites the timestamp, re-arming the timer.
    pub fn clear_expired_copied_indicator(&mut self) {
        if let Some(at) = self.copied_at {
            if at.elapsed() >= COPIED_INDICATOR_TTL {
                self.copied_at = None;
            }
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let start = prev_boundary(&self.input, self.cursor);
            self.input.remove(start);
            self.cursor = start;
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = prev_boundary(&self.input, self.cursor);
    }

    pub fn move_right(&mut self) {
        self.cursor = next_boundary(&self.input, self.cursor);
    }

    pub fn move_home(&mut self) {
        self.cursor = self.line_start();
    }

    pub fn move_end(&mut self) {
        self.cursor = self.line_end();
    }

    pub fn move_up(&mut self) {
        let line_start = self.line_start();
        if line_start == 0 {
            return;
        }
        let column = self.cursor - line_start;
        let prev_start = self.input[..line_start - 1]
            .rfind('\n')
            .map_or(0, |i| i + 1);
        let prev_len = line_start - 1 - prev_start;
        self.cursor = floor_boundary(&self.input, prev_start + column.min(prev_len));
    }

    pub fn move_down(&mut self) {
        let line_end = self.line_end();
        if line_end >= self.input.len() {
            return;
        }
        let column = self.cursor - self.line_start();
        let next_start = line_end + 1;
        let next_end = self.input[next_start..]
            .find('\n')
            .map_or(self.input.len(), |i| next_start + i);
        let next_len = next_end - next_start;
        self.cursor = floor_boundary(&self.input, next_start + column.min(next_len));
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }

    /// Zero-based row the cursor is on, for rendering.
    pub fn cursor_row(&self) -> usize {
        self.input[..self.cursor].matches('\n').count()
    }

    /// Swap in a freshly loaded config without touching the buffer or the
    /// current selection. Used by the config watcher.
    pub fn apply_config(&mut self, config: &Config) {
        self.theme = Theme::from_config(config);
        self.keybindings = KeybindingCache::from_config(&config.keybindings);
    }

    fn line_start(&self) -> usize {
        self.input[..self.cursor].rfind('\n').map_or(0, |i| i + 1)
    }

    fn line_end(&self) -> usize {
        self.input[self.cursor..]
            .find('\n')
            .map_or(self.input.len(), |i| self.cursor + i)
    }
}
