use std::sync::LazyLock;

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME: LazyLock<Option<Theme>> = LazyLock::new(|| {
    let mut themes = ThemeSet::load_defaults().themes;
    themes.remove("base16-ocean.dark")
});

/// Syntax-highlight `text` for display. Unknown languages and highlighter
/// errors degrade to unstyled lines.
pub fn highlight_text(text: &str, lang: &str) -> Text<'static> {
    let Some(theme) = THEME.as_ref() else {
        return Text::raw(text.to_string());
    };
    let syntax = SYNTAX_SET
        .find_syntax_by_extension(lang)
        .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());

    let mut h = HighlightLines::new(syntax, theme);
    let lines: Vec<Line<'static>> = LinesWithEndings::from(text)
        .map(|line| match h.highlight_line(line, &SYNTAX_SET) {
            Ok(ranges) => Line::from(
                ranges
                    .into_iter()
                    .map(|(style, content)| {
                        let fg = style.foreground;
                        Span::styled(
                            content.trim_end_matches('\n').to_string(),
                            Style::default().fg(Color::Rgb(fg.r, fg.g, fg.b)),
                        )
                    })
                    .collect::<Vec<_>>(),
            ),
            Err(_) => Line::raw(line.trim_end_matches('\n').to_string()),
        })
        .collect();

    Text::from(lines)
}
