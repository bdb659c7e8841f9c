use crate::app::{AppState, Mode};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let line_count = state.line_count();
    let plural = if line_count == 1 { "" } else { "s" };

    let left_content = format!(
        " {} | {} | {} line{}",
        state.mode,
        state.format.label(),
        line_count,
        plural
    );

    let nav_hint = match state.mode {
        Mode::Insert => "Esc formats  C-y copy",
        Mode::Navigate => "i edit  j/k format  y copy  ? help  q quit",
    };
    let version_text = format!("v{VERSION}");

    let base_style = Style::default()
        .fg(state.theme.status_bar_fg)
        .bg(state.theme.status_bar_bg);

    let mut spans = vec![Span::styled(left_content, base_style)];

    if let Some(err) = &state.status_error {
        spans.push(Span::styled(
            format!(" | {err}"),
            base_style
                .fg(state.theme.error)
                .add_modifier(Modifier::BOLD),
        ));
    } else if state.copied_indicator_active() {
        spans.push(Span::styled(
            " | Copied!",
            base_style.add_modifier(Modifier::BOLD),
        ));
    }

    let used: usize = spans.iter().map(|span| span.content.width()).sum();
    let padding = area
        .width
        .saturating_sub((used + nav_hint.width() + version_text.width() + 3) as u16);

    spans.push(Span::styled(
        format!(
            "{:>padding$} {} {} ",
            "",
            nav_hint,
            version_text,
            padding = padding as usize
        ),
        base_style,
    ));

    let status = Paragraph::new(Line::from(spans)).style(base_style);

    f.render_widget(status, area);
}
