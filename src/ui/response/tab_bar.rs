use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::render::ResponseView;
use crate::state::app_state::{AppState, ResponseTab};
use crate::ui::layout::BORDER_INACTIVE;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let header_count = match &state.response.view {
        Some(ResponseView::Rendered(resp)) => resp.header_rows.len(),
        _ => 0,
    };

    let mut spans: Vec<Span<'static>> = Vec::new();
    for (i, tab) in ResponseTab::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if *tab == state.response_tab {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(BORDER_INACTIVE)
        };
        let label = match tab {
            ResponseTab::Headers if header_count > 0 => format!("{} ({header_count})", tab.label()),
            _ => tab.label().to_string(),
        };
        spans.push(Span::styled(label, style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
