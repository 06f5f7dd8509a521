use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::app_state::AppState;
use crate::state::mode::Mode;
use super::layout::{BORDER_INACTIVE, TEXT_MUTED};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let (mode_label, mode_color) = match state.mode {
        Mode::Normal => ("NORMAL", Color::Rgb(122, 162, 247)), // blue
        Mode::Insert => ("INSERT", Color::Rgb(158, 206, 106)), // green
    };

    let mode_span = Span::styled(
        format!(" {} ", mode_label),
        Style::default()
            .fg(Color::Black)
            .bg(mode_color)
            .add_modifier(Modifier::BOLD),
    );

    let hints = Span::styled(
        match state.mode {
            Mode::Normal => "  · Ctrl+R:send · [ ]:method · Tab:focus · i:edit · q:quit",
            Mode::Insert => "  · Esc:done · Tab:next field · Ctrl+R:send",
        },
        Style::default().fg(BORDER_INACTIVE),
    );

    let backend = format!("backend {} ", state.backend_label);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(backend.chars().count() as u16)])
        .split(area);

    frame.render_widget(Paragraph::new(Line::from(vec![mode_span, hints])), chunks[0]);
    frame.render_widget(
        Paragraph::new(Span::styled(backend, Style::default().fg(TEXT_MUTED))),
        chunks[1],
    );
}
