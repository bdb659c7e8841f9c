use crate::app::{AppState, Mode};
use crate::utils::unicode::split_first_char;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Editable input buffer. In insert mode the cursor is drawn as a block over
/// the char it sits on, or appended when at the end of a line.
pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let editing = state.mode == Mode::Insert;
    let cursor_row = state.cursor_row();
    let text_style = Style::default().fg(state.theme.foreground);

    let mut lines: Vec<Line> = Vec::new();
    let mut line_start = 0usize;

    // split('\n') yields one empty segment for an empty buffer, so the
    // cursor always has a row to land on.
    for (row, raw) in state.input.split('\n').enumerate() {
        if editing && row == cursor_row {
            lines.push(cursor_line(state, raw, line_start));
        } else {
            lines.push(Line::from(Span::styled(raw.to_string(), text_style)));
        }
        line_start += raw.len() + 1;
    }

    let border_style = if editing {
        Style::default().fg(state.theme.accent)
    } else {
        Style::default().fg(state.theme.muted)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Input (one per line or comma separated) ")
        .border_style(border_style);

    let visible_height = area.height.saturating_sub(2) as usize;
    let scroll = (cursor_row + 1).saturating_sub(visible_height.max(1)) as u16;

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(text_style)
        .scroll((scroll, 0));

    f.render_widget(paragraph, area);
}

fn cursor_line(state: &AppState, raw: &str, line_start: usize) -> Line<'static> {
    let column = (state.cursor - line_start).min(raw.len());
    let (before, rest) = raw.split_at(column);
    let (at, after) = split_first_char(rest);

    let text_style = Style::default().fg(state.theme.foreground);
    let mut spans = vec![Span::styled(before.to_string(), text_style)];

    if at.is_empty() {
        spans.push(Span::styled(
            "█",
            Style::default()
                .fg(state.theme.cursor)
                .add_modifier(Modifier::BOLD),
        ));
    } else {
        spans.push(Span::styled(
            at.to_string(),
            Style::default()
                .fg(state.theme.cursor)
                .add_modifier(Modifier::REVERSED | Modifier::BOLD),
        ));
        spans.push(Span::styled(after.to_string(), text_style));
    }

    Line::from(spans)
}
