use ratatui::{
    Frame,
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::model::AuthField;
use crate::state::app_state::AppState;
use crate::state::focus::Focus;
use crate::state::mode::Mode;
use crate::ui::layout::{ACCENT_BLUE, BORDER_INACTIVE, HINT_KEY, HINT_TEXT, TEXT_MUTED};

const LABEL_W: u16 = 11;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if area.width < 4 || area.height < 3 {
        return;
    }

    let focused = state.focus == Focus::Editor;
    let border_color = if focused { ACCENT_BLUE } else { BORDER_INACTIVE };
    let form = &state.request;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" Auth · {} ", form.auth_kind.label()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 {
        return;
    }

    let hint_area = Rect { y: inner.y + inner.height - 1, height: 1, ..inner };
    let fields_area = Rect { height: inner.height - 1, ..inner };

    let hint = Paragraph::new(Line::from(vec![
        Span::styled("t", Style::default().fg(HINT_KEY)),
        Span::styled(" type  ", Style::default().fg(HINT_TEXT)),
        Span::styled("j/k", Style::default().fg(HINT_KEY)),
        Span::styled(" field  ", Style::default().fg(HINT_TEXT)),
        Span::styled("i", Style::default().fg(HINT_KEY)),
        Span::styled(" edit", Style::default().fg(HINT_TEXT)),
    ]))
    .style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(hint, hint_area);

    let fields = form.auth_kind.fields();
    if fields.is_empty() {
        frame.render_widget(
            Paragraph::new("This request does not use authorization")
                .style(Style::default().fg(TEXT_MUTED).add_modifier(Modifier::DIM))
                .alignment(Alignment::Center),
            fields_area,
        );
        return;
    }

    for (i, field) in fields.iter().enumerate() {
        if i as u16 >= fields_area.height {
            break;
        }
        let selected = i == form.auth_field;
        let label_style = if focused && selected {
            Style::default().fg(ACCENT_BLUE).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HINT_TEXT)
        };
        let row = Rect { y: fields_area.y + i as u16, height: 1, ..fields_area };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(format!("{:<w$}", field.label(), w = LABEL_W as usize), label_style),
                field_span(form.auth.get(*field), *field),
            ])),
            row,
        );
    }

    if focused && state.mode == Mode::Insert {
        if let Some(field) = form.selected_auth_field() {
            let text = form.auth.get(field).unwrap_or("");
            let col = text[..form.auth_cursor.min(text.len())].chars().count() as u16;
            frame.set_cursor_position(Position {
                x: fields_area.x + LABEL_W + col,
                y: fields_area.y + form.auth_field as u16,
            });
        }
    }
}

/// Secrets are masked one bullet per char so the cursor still lines up.
fn field_span(value: Option<&str>, field: AuthField) -> Span<'static> {
    match value {
        Some(v) if !v.is_empty() => {
            let shown = if field.is_secret() {
                "•".repeat(v.chars().count())
            } else {
                v.to_string()
            };
            Span::styled(shown, Style::default().fg(Color::Rgb(192, 202, 245)))
        }
        _ => Span::styled(
            field.placeholder(),
            Style::default().fg(TEXT_MUTED).add_modifier(Modifier::DIM),
        ),
    }
}
