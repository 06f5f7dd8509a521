use ratatui::{
    Frame,
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::model::BodyType;
use crate::state::app_state::AppState;
use crate::state::focus::Focus;
use crate::state::input::line_col;
use crate::state::mode::Mode;
use crate::ui::layout::{ACCENT_BLUE, BORDER_INACTIVE, HINT_KEY, HINT_TEXT, TEXT_MUTED};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if area.width < 4 || area.height < 3 {
        return;
    }

    let focused = state.focus == Focus::Editor;
    let border_color = if focused { ACCENT_BLUE } else { BORDER_INACTIVE };
    let form = &state.request;

    let type_label = form.body_type.as_ref().map(BodyType::as_str).unwrap_or("none");
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" Body · {type_label} "));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 {
        return;
    }

    let hint_area = Rect { y: inner.y + inner.height - 1, height: 1, ..inner };
    let text_area = Rect { height: inner.height - 1, ..inner };

    let hint = Paragraph::new(Line::from(vec![
        Span::styled("t", Style::default().fg(HINT_KEY)),
        Span::styled(" type  ", Style::default().fg(HINT_TEXT)),
        Span::styled("i", Style::default().fg(HINT_KEY)),
        Span::styled(" edit  ", Style::default().fg(HINT_TEXT)),
        Span::styled("j/k", Style::default().fg(HINT_KEY)),
        Span::styled(" scroll", Style::default().fg(HINT_TEXT)),
    ]))
    .style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(hint, hint_area);

    let editing = focused && state.mode == Mode::Insert;

    if form.body.is_empty() && !editing {
        frame.render_widget(
            Paragraph::new(BodyType::placeholder(form.body_type))
                .style(Style::default().fg(TEXT_MUTED).add_modifier(Modifier::DIM))
                .alignment(Alignment::Center),
            text_area,
        );
        return;
    }

    let (row, col) = line_col(&form.body, form.body_cursor);
    // While typing, scroll so the cursor row stays visible.
    let scroll = if editing {
        (row as u16).saturating_sub(text_area.height.saturating_sub(1))
    } else {
        form.body_scroll_offset
    };

    frame.render_widget(
        Paragraph::new(form.body.as_str())
            .style(Style::default().fg(Color::Rgb(192, 202, 245)))
            .scroll((scroll, 0)),
        text_area,
    );

    if editing {
        frame.set_cursor_position(Position {
            x: text_area.x + (col as u16).min(text_area.width.saturating_sub(1)),
            y: text_area.y + (row as u16 - scroll),
        });
    }
}
