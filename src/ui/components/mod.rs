pub mod format_bar;
pub mod input_pane;
pub mod output_pane;
pub mod status_bar;

use crate::app::AppState;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn render(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Format selector
            Constraint::Min(3),    // Input / output panes
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    format_bar::render(f, state, chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    input_pane::render(f, state, panes[0]);
    output_pane::render(f, state, panes[1]);

    status_bar::render(f, state, chunks[2]);

    if state.show_help {
        render_help_overlay(f, state);
    }
}

fn render_help_overlay(f: &mut Frame, state: &AppState) {
    let help_text = r#"
    linefmt Help

    Navigate Mode:
      j/k or ↑/↓        Cycle format
      Tab / Shift+Tab   Cycle format
      1-4               Select format directly
      y                 Copy output to clipboard
      d                 Clear input
      i or Enter        Edit input
      ?                 Toggle help
      q                 Quit

    Insert Mode:
      Esc               Back to navigate mode
      Enter             New line
      ←/→/↑/↓           Move cursor
      Home/End          Jump to start/end of line
      Ctrl+y            Copy output to clipboard

    Rows are split on newlines and commas; blanks are dropped.
    "#;

    let area = centered_rect(60, 60, f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(state.theme.background));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .style(Style::default().fg(state.theme.foreground))
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
