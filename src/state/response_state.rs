use ratatui::text::Text;

use crate::render::{RenderMode, ResponseView};
use crate::ui::highlight::highlight_text;

/// The response half of the screen: the current view plus display-only state.
#[derive(Debug, Clone, Default)]
pub struct ResponsePanel {
    pub view: Option<ResponseView>,
    /// Highlighted JSON, computed once when the view arrives.
    pub highlighted_body: Option<Text<'static>>,
    pub scroll_offset: u16,
}

impl ResponsePanel {
    /// Replace whatever was shown before with `view`.
    pub fn show(&mut self, view: ResponseView) {
        self.highlighted_body = match &view {
            ResponseView::Rendered(state) if state.body.mode == RenderMode::Json => {
                Some(highlight_text(&state.body.text, "json"))
            }
            _ => None,
        };
        self.view = Some(view);
        self.scroll_offset = 0;
    }

    pub fn scroll_by(&mut self, delta: i16) {
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta);
    }
}
