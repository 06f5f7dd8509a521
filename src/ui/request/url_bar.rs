use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::model::HttpMethod;
use crate::state::app_state::{AppState, RequestStatus};
use crate::state::focus::Focus;
use crate::state::mode::Mode;
use super::super::layout::{ACCENT_BLUE, BORDER_INACTIVE, SPINNER_FRAMES, TEXT_MUTED};

fn method_color(method: &HttpMethod) -> Color {
    match method {
        HttpMethod::Get => Color::Rgb(115, 218, 202),
        HttpMethod::Post => Color::Rgb(158, 206, 106),
        HttpMethod::Put => Color::Rgb(224, 175, 104),
        HttpMethod::Patch => Color::Rgb(187, 154, 247),
        HttpMethod::Delete => Color::Rgb(247, 118, 142),
        HttpMethod::Head => Color::Rgb(122, 162, 247),
        HttpMethod::Options => Color::Rgb(65, 72, 104),
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = matches!(state.focus, Focus::UrlBar);
    let border_color = if focused { ACCENT_BLUE } else { BORDER_INACTIVE };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let request = &state.request;

    // [method 9] [│] [url flex] [│] [send 8]
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(8),
        ])
        .split(inner);

    let mc = method_color(&request.method);
    let method_para = Paragraph::new(Line::from(Span::styled(
        request.method.as_str(),
        Style::default().fg(mc).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(method_para, chunks[0]);

    frame.render_widget(
        Paragraph::new(Span::styled("│", Style::default().fg(BORDER_INACTIVE))),
        chunks[1],
    );

    let editing = focused && state.mode == Mode::Insert;
    frame.render_widget(
        Paragraph::new(url_line(&request.url, request.url_cursor, editing)),
        chunks[2],
    );

    frame.render_widget(
        Paragraph::new(Span::styled("│", Style::default().fg(BORDER_INACTIVE))),
        chunks[3],
    );

    // The trigger reads busy for as long as a dispatch is in flight.
    match state.request_status {
        RequestStatus::Loading { spinner_tick, .. } => {
            let idx = spinner_tick as usize % SPINNER_FRAMES.len();
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    format!("{} ..", SPINNER_FRAMES[idx]),
                    Style::default().fg(Color::Yellow),
                ))),
                chunks[4],
            );
        }
        RequestStatus::Idle => {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    "Send ↵",
                    Style::default().fg(Color::Rgb(158, 206, 106)),
                ))),
                chunks[4],
            );
        }
    }
}

fn url_line(url: &str, cursor: usize, editing: bool) -> Line<'static> {
    if url.is_empty() && !editing {
        return Line::from(Span::styled("Enter URL…", Style::default().fg(TEXT_MUTED)));
    }
    if !editing {
        return Line::from(Span::raw(url.to_string()));
    }
    cursor_line(url, cursor)
}

/// `text` with a block cursor drawn over the char at byte offset `cursor`.
pub fn cursor_line(text: &str, cursor: usize) -> Line<'static> {
    let cursor = cursor.min(text.len());
    let before = text[..cursor].to_string();
    let (cursor_char, after) = match text[cursor..].chars().next() {
        Some(ch) => (ch.to_string(), text[cursor + ch.len_utf8()..].to_string()),
        None => (" ".to_string(), String::new()),
    };
    Line::from(vec![
        Span::raw(before),
        Span::styled(cursor_char, Style::default().bg(Color::White).fg(Color::Black)),
        Span::raw(after),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn cursor_at_end_adds_a_blank_cell() {
        let line = cursor_line("abc", 3);
        assert_eq!(plain(&line), "abc ");
        assert_eq!(line.spans[1].content, " ");
    }

    #[test]
    fn cursor_covers_multibyte_char() {
        let line = cursor_line("héllo", 1);
        assert_eq!(line.spans[1].content, "é");
        assert_eq!(plain(&line), "héllo");
    }

    #[test]
    fn empty_url_shows_placeholder_outside_insert() {
        assert_eq!(plain(&url_line("", 0, false)), "Enter URL…");
        assert_eq!(plain(&url_line("", 0, true)), " ");
    }
}
