use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Cell, Paragraph, Row, Table},
};

use crate::render::{HeaderRow, ResponseView};
use crate::state::app_state::{AppState, ResponseTab};
use super::super::layout::TEXT_MUTED;
use super::body_viewer::viewer_block;

const NAME_COLOR: Color = Color::Rgb(122, 162, 247);
const VALUE_COLOR: Color = Color::Rgb(169, 177, 214);

/// Name/value table for the Headers and Cookies tabs.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = viewer_block(state, state.response_tab.label());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(ResponseView::Rendered(resp)) = &state.response.view else {
        frame.render_widget(
            Paragraph::new("  No response").style(Style::default().fg(TEXT_MUTED)),
            inner,
        );
        return;
    };

    let rows = match state.response_tab {
        ResponseTab::Cookies => resp.cookies.rows(),
        _ => resp.header_rows.clone(),
    };
    let skip = (state.response.scroll_offset as usize).min(rows.len().saturating_sub(1));

    let table = Table::new(
        rows.iter().skip(skip).map(table_row),
        [Constraint::Percentage(30), Constraint::Percentage(70)],
    )
    .header(
        Row::new(["Name", "Value"]).style(Style::default().fg(TEXT_MUTED).add_modifier(Modifier::BOLD)),
    )
    .column_spacing(2);
    frame.render_widget(table, inner);
}

fn table_row(row: &HeaderRow) -> Row<'static> {
    Row::new([
        Cell::from(row.name.clone()).style(Style::default().fg(NAME_COLOR)),
        Cell::from(row.value.clone()).style(Style::default().fg(VALUE_COLOR)),
    ])
}
