use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::render::{ErrorView, RenderMode, ResponseView};
use crate::state::app_state::{AppState, RequestStatus};
use crate::state::focus::Focus;
use crate::state::response_state::ResponsePanel;
use super::super::layout::{ACCENT_BLUE, BORDER_INACTIVE, SPINNER_FRAMES, TEXT_MUTED};
use super::status_color;

pub fn viewer_block(state: &AppState, title: &str) -> Block<'static> {
    let focused = matches!(state.focus, Focus::ResponseViewer);
    let border_color = if focused { ACCENT_BLUE } else { BORDER_INACTIVE };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {title} "))
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let panel = &state.response;
    let title = match &panel.view {
        Some(ResponseView::Rendered(resp)) => format!("Body · {}", resp.body.mode.as_str()),
        _ => "Body".to_string(),
    };
    let block = viewer_block(state, &title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if let RequestStatus::Loading { spinner_tick, .. } = state.request_status {
        let idx = spinner_tick as usize % SPINNER_FRAMES.len();
        let text = Line::from(vec![
            Span::styled(
                format!("  {} ", SPINNER_FRAMES[idx]),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled("Sending request…", Style::default().fg(TEXT_MUTED)),
        ]);
        frame.render_widget(Paragraph::new(text), inner);
        return;
    }

    let para = match &panel.view {
        None => Paragraph::new(Line::from(Span::styled(
            "  Send a request to see the response",
            Style::default().fg(TEXT_MUTED),
        ))),
        Some(ResponseView::Failed(err)) => Paragraph::new(error_text(err)).wrap(Wrap { trim: false }),
        Some(ResponseView::Rendered(_)) => Paragraph::new(body_text(panel)),
    };
    frame.render_widget(para.scroll((panel.scroll_offset, 0)), inner);
}

fn error_text(err: &ErrorView) -> Text<'static> {
    Text::from(Line::from(Span::styled(
        err.body_text(),
        Style::default().fg(status_color(err.status_class())),
    )))
}

/// JSON comes pre-highlighted; the other modes are shown verbatim.
pub fn body_text(panel: &ResponsePanel) -> Text<'static> {
    let Some(ResponseView::Rendered(resp)) = &panel.view else {
        return Text::default();
    };
    match (&resp.body.mode, &panel.highlighted_body) {
        (RenderMode::Json, Some(highlighted)) => highlighted.clone(),
        _ if resp.body.text.is_empty() => Text::styled("  (empty response body)", Style::default().fg(TEXT_MUTED)),
        _ => Text::raw(resp.body.text.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ResponseDescriptor;

    fn panel_for(body: &str) -> ResponsePanel {
        let mut panel = ResponsePanel::default();
        panel.show(ResponseView::from_outcome(Ok(ResponseDescriptor {
            status_code: 200,
            duration: 1.0,
            size: body.len() as u64,
            headers: Vec::new(),
            body: body.to_string(),
        })));
        panel
    }

    fn plain(text: &Text) -> String {
        text.lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn html_body_is_shown_escaped() {
        let text = body_text(&panel_for("<b>hi</b>"));
        assert_eq!(plain(&text), "&lt;b&gt;hi&lt;/b&gt;");
    }

    #[test]
    fn json_body_uses_highlighted_lines() {
        let text = body_text(&panel_for(r#"{"a":1}"#));
        assert_eq!(plain(&text), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn empty_body_gets_a_note() {
        assert_eq!(plain(&body_text(&panel_for(""))), "  (empty response body)");
    }
}
