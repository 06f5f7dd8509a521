use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::app_state::{ActiveTab, AppState};
use crate::state::focus::Focus;
use crate::ui::layout::BORDER_INACTIVE;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let tab_focused = state.focus == Focus::TabBar;

    let mut spans: Vec<Span<'static>> = Vec::new();
    for (i, tab) in ActiveTab::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let is_active = state.active_tab == *tab;
        let style = if is_active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(BORDER_INACTIVE)
        };
        let label = if is_active && tab_focused {
            format!("[{}]", tab.label())
        } else {
            format!("{}{}", tab.label(), badge(state, *tab))
        };
        spans.push(Span::styled(label, style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Row count for the key/value tabs, e.g. `Headers (2)`.
fn badge(state: &AppState, tab: ActiveTab) -> String {
    let count = match tab {
        ActiveTab::Params => state.request.params.rows.len(),
        ActiveTab::Headers => state.request.headers.rows.len(),
        ActiveTab::Body | ActiveTab::Auth => 0,
    };
    if count == 0 { String::new() } else { format!(" ({count})") }
}
