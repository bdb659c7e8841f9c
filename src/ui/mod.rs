pub mod components;
pub mod theme;

use crate::app::{AppState, event::handle_key_event};
use crate::config::Config;
use crate::utils::paths::get_config_path;
use anyhow::Result;
use crossterm::{
    event::{
        self, Event, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write};
use std::sync::mpsc;
use std::time::Duration;

struct TerminalGuard {
    keyboard_enhancement: bool,
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if self.keyboard_enhancement {
            let _ = execute!(stdout, PopKeyboardEnhancementFlags);
        }
        let _ = disable_raw_mode();
        let _ = execute!(stdout, LeaveAlternateScreen);
        let _ = stdout.flush();
    }
}

pub fn run_tui(mut state: AppState) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let supports_keyboard_enhancement = execute!(
        stdout,
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
    )
    .is_ok();

    let _guard = TerminalGuard {
        keyboard_enhancement: supports_keyboard_enhancement,
    };

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (config_tx, config_rx) = mpsc::channel();
    let _watcher = setup_config_watcher(config_tx);

    let result = run_app(&mut terminal, &mut state, config_rx);
    terminal.show_cursor()?;

    result
}

/// Watch the config file so theme and keybinding edits apply without a
/// restart. Returns None when there is no config file to watch.
fn setup_config_watcher(tx: mpsc::Sender<()>) -> Option<RecommendedWatcher> {
    let config_path = match get_config_path() {
        Ok(path) if path.exists() => path,
        _ => return None,
    };

    let watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| {
            if let Ok(event) = res {
                if event.kind.is_modify() {
                    let _ = tx.send(());
                }
            }
        },
        notify::Config::default(),
    );

    match watcher {
        Ok(mut w) => {
            if w.watch(&config_path, RecursiveMode::NonRecursive).is_ok() {
                Some(w)
            } else {
                None
            }
        }
        Err(_) => None,
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    config_rx: mpsc::Receiver<()>,
) -> Result<()> {
    loop {
        state.clear_expired_copied_indicator();

        terminal.draw(|f| {
            components::render(f, state);
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key_event(key, state)?;
                }
            }
        }

        let mut should_reload = false;
        while config_rx.try_recv().is_ok() {
            should_reload = true;
        }
        if should_reload {
            if let Ok(config) = Config::load() {
                state.apply_config(&config);
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
