use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Json,
    HtmlEscaped,
    Text,
}

impl RenderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::Json => "json",
            RenderMode::HtmlEscaped => "html-escaped",
            RenderMode::Text => "text",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBody {
    pub mode: RenderMode,
    pub text: String,
}

/// Deepest nesting accepted as JSON. Parsing and pretty-printing both recurse
/// once per level, so this bounds stack use on the UI thread.
pub const MAX_JSON_DEPTH: usize = 1024;

/// `Some` if `body` is a complete JSON document nested at most
/// `MAX_JSON_DEPTH` levels deep.
pub fn parse_json(body: &str) -> Option<Value> {
    if nesting_depth(body) > MAX_JSON_DEPTH {
        return None;
    }
    let mut de = serde_json::Deserializer::from_str(body);
    de.disable_recursion_limit();
    let value = Value::deserialize(&mut de).ok()?;
    de.end().ok()?;
    Some(value)
}

/// Maximum bracket depth outside string literals.
fn nesting_depth(text: &str) -> usize {
    let (mut depth, mut max) = (0usize, 0usize);
    let (mut in_string, mut escaped) = (false, false);
    for b in text.bytes() {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                max = max.max(depth);
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    max
}

/// Pick exactly one rendering for any body: pretty JSON, escaped markup, or
/// the text as-is, tried in that order.
pub fn render_body(body: &str) -> RenderedBody {
    if let Some(text) = parse_json(body).and_then(|v| serde_json::to_string_pretty(&v).ok()) {
        return RenderedBody { mode: RenderMode::Json, text };
    }
    if body.trim().starts_with('<') {
        return RenderedBody {
            mode: RenderMode::HtmlEscaped,
            text: html_escape(body),
        };
    }
    RenderedBody {
        mode: RenderMode::Text,
        text: body.to_string(),
    }
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
