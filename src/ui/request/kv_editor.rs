use ratatui::{
    Frame,
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::app_state::AppState;
use crate::state::focus::Focus;
use crate::state::mode::Mode;
use crate::state::request_state::KvTable;
use crate::ui::layout::{ACCENT_BLUE, BORDER_INACTIVE, HINT_KEY, HINT_TEXT, TEXT_MUTED};

const CELL_TEXT: Color = Color::Rgb(169, 177, 214);
const ROW_SELECTED: Color = Color::Rgb(41, 45, 62);

/// Key/value grid shared by the Params and Headers tabs.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, title: &str, table: &KvTable) {
    if area.width < 4 || area.height < 2 {
        return;
    }

    let focused = state.focus == Focus::Editor;
    let border_color = if focused { ACCENT_BLUE } else { BORDER_INACTIVE };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {title} "));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width < 4 || inner.height < 2 {
        return;
    }

    // Bottom line is the hint bar
    let hint_area = Rect { y: inner.y + inner.height - 1, height: 1, ..inner };
    let body_area = Rect { height: inner.height - 1, ..inner };

    let hint = Paragraph::new(Line::from(vec![
        Span::styled("a", Style::default().fg(HINT_KEY)),
        Span::styled(" add  ", Style::default().fg(HINT_TEXT)),
        Span::styled("x", Style::default().fg(HINT_KEY)),
        Span::styled(" del  ", Style::default().fg(HINT_TEXT)),
        Span::styled("←→", Style::default().fg(HINT_KEY)),
        Span::styled(" col  ", Style::default().fg(HINT_TEXT)),
        Span::styled("Tab", Style::default().fg(HINT_KEY)),
        Span::styled(" next cell  ", Style::default().fg(HINT_TEXT)),
        Span::styled("i", Style::default().fg(HINT_KEY)),
        Span::styled(" edit", Style::default().fg(HINT_TEXT)),
    ]))
    .style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(hint, hint_area);

    if table.rows.is_empty() {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            format!("Press a to add a {} row", title.to_lowercase()),
            Style::default().fg(TEXT_MUTED).add_modifier(Modifier::DIM),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(placeholder, body_area);
        return;
    }

    // [key=half] [sep=1] [value=rest]
    let sep_w: u16 = 1;
    let rest = body_area.width.saturating_sub(sep_w);
    let key_w = rest / 2;
    let val_w = rest - key_w;

    // Keep the selected row on screen.
    let visible = body_area.height as usize;
    let first = table.row.saturating_sub(visible.saturating_sub(1));

    for (i, pair) in table.rows.iter().enumerate().skip(first).take(visible) {
        let row_y = body_area.y + (i - first) as u16;
        let is_selected = i == table.row;
        let row_bg = if is_selected { ROW_SELECTED } else { Color::Reset };
        let row_style = Style::default().bg(row_bg);

        let cell_fg = |col: u8| {
            if focused && is_selected && table.col == col { Color::White } else { CELL_TEXT }
        };

        let key_rect = Rect { x: body_area.x, y: row_y, width: key_w, height: 1 };
        frame.render_widget(
            Paragraph::new(Span::styled(pair.key.as_str(), Style::default().fg(cell_fg(0))))
                .style(row_style),
            key_rect,
        );

        let sep_rect = Rect { x: body_area.x + key_w, y: row_y, width: sep_w, height: 1 };
        frame.render_widget(
            Paragraph::new(Span::styled("│", Style::default().fg(BORDER_INACTIVE).bg(row_bg))),
            sep_rect,
        );

        let val_rect = Rect { x: body_area.x + key_w + sep_w, y: row_y, width: val_w, height: 1 };
        frame.render_widget(
            Paragraph::new(Span::styled(pair.value.as_str(), Style::default().fg(cell_fg(1))))
                .style(row_style),
            val_rect,
        );
    }

    if focused && state.mode == Mode::Insert {
        if let Some(text) = table.cell() {
            let cell_x = if table.col == 0 { body_area.x } else { body_area.x + key_w + sep_w };
            let col_offset = text[..table.cursor.min(text.len())].chars().count() as u16;
            frame.set_cursor_position(Position {
                x: cell_x + col_offset,
                y: body_area.y + (table.row - first) as u16,
            });
        }
    }
}
