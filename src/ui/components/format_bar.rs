use crate::app::AppState;
use crate::format::ArrayFormat;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Tabs,
};

/// One tab per output format, numbered to match the selection keys.
pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let titles: Vec<String> = ArrayFormat::ALL
        .iter()
        .enumerate()
        .map(|(idx, format)| format!(" {} {} ", idx + 1, format.label()))
        .collect();

    let selected = ArrayFormat::ALL
        .iter()
        .position(|format| *format == state.format)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(state.theme.muted))
        .highlight_style(
            Style::default()
                .fg(state.theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|");

    f.render_widget(tabs, area);
}
