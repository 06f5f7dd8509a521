pub mod body_viewer;
pub mod tab_bar;
pub mod table_viewer;

use humansize::{DECIMAL, format_size};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::render::{ErrorView, ResponseView, StatusClass};
use crate::state::app_state::AppState;
use super::layout::{BORDER_INACTIVE, TEXT_MUTED};

pub fn status_color(class: StatusClass) -> Color {
    match class {
        StatusClass::Success => Color::Rgb(158, 206, 106), // green
        StatusClass::Redirect => Color::Rgb(224, 175, 104), // orange
        StatusClass::Error => Color::Rgb(247, 118, 142),    // red
        StatusClass::Unclassified => Color::White,
    }
}

/// One-line summary above the response tabs: status, timing, size.
pub fn render_meta(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = match &state.response.view {
        None => Line::from(Span::styled("─", Style::default().fg(BORDER_INACTIVE))),
        Some(ResponseView::Failed(err)) => Line::from(vec![
            Span::styled(
                format!(" {}", ErrorView::STATUS_LABEL),
                Style::default()
                    .fg(status_color(err.status_class()))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  ·  {}", err.message), Style::default().fg(TEXT_MUTED)),
        ]),
        Some(ResponseView::Rendered(resp)) => {
            let size_str = format_size(resp.size_bytes, DECIMAL);
            Line::from(vec![
                Span::styled(
                    format!(" {} {}", resp.status_code, resp.status_text),
                    Style::default()
                        .fg(status_color(resp.status_class))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(
                        "  ·  {}ms  ·  {}  ·  {}",
                        resp.duration_ms.round(),
                        size_str,
                        resp.received_at.with_timezone(&chrono::Local).format("%H:%M:%S"),
                    ),
                    Style::default().fg(TEXT_MUTED),
                ),
            ])
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}
