use crate::app::{AppState, Mode};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

/// Read-only preview of the formatted output, recomputed every frame.
pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let border_style = if state.mode == Mode::Navigate {
        Style::default().fg(state.theme.accent)
    } else {
        Style::default().fg(state.theme.muted)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Output - {} ", state.format.label()))
        .border_style(border_style);

    let paragraph = Paragraph::new(state.output())
        .block(block)
        .style(Style::default().fg(state.theme.foreground));

    f.render_widget(paragraph, area);
}
