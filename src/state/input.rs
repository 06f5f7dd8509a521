//! Cursor editing shared by every text field in the request editor.
//! Cursors are byte offsets and always sit on a char boundary.

use crossterm::event::KeyCode;

/// Apply a single-line editing key. Returns `false` for keys it does not handle.
pub fn edit_line(text: &mut String, cursor: &mut usize, code: KeyCode) -> bool {
    *cursor = (*cursor).min(text.len());
    match code {
        KeyCode::Char(c) => {
            text.insert(*cursor, c);
            *cursor += c.len_utf8();
        }
        KeyCode::Backspace => {
            if *cursor > 0 {
                let prev = prev_char_boundary(text, *cursor);
                text.drain(prev..*cursor);
                *cursor = prev;
            }
        }
        KeyCode::Delete => {
            if *cursor < text.len() {
                let next = next_char_boundary(text, *cursor);
                text.drain(*cursor..next);
            }
        }
        KeyCode::Left => *cursor = prev_char_boundary(text, *cursor),
        KeyCode::Right => *cursor = next_char_boundary(text, *cursor),
        KeyCode::Home => *cursor = 0,
        KeyCode::End => *cursor = text.len(),
        _ => return false,
    }
    true
}

/// Multi-line variant for the body editor: Enter inserts a newline, Up/Down
/// move between lines, Home/End stay within the current line.
pub fn edit_multiline(text: &mut String, cursor: &mut usize, code: KeyCode) -> bool {
    *cursor = (*cursor).min(text.len());
    match code {
        KeyCode::Enter => {
            text.insert(*cursor, '\n');
            *cursor += 1;
        }
        KeyCode::Up => *cursor = move_up(text, *cursor),
        KeyCode::Down => *cursor = move_down(text, *cursor),
        KeyCode::Home => {
            *cursor = text[..*cursor].rfind('\n').map(|i| i + 1).unwrap_or(0);
        }
        KeyCode::End => {
            *cursor = text[*cursor..]
                .find('\n')
                .map(|i| *cursor + i)
                .unwrap_or(text.len());
        }
        other => return edit_line(text, cursor, other),
    }
    true
}

/// (row, column in chars) of a byte cursor.
pub fn line_col(text: &str, cursor: usize) -> (usize, usize) {
    let before = &text[..cursor.min(text.len())];
    let row = before.matches('\n').count();
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    (row, before[line_start..].chars().count())
}

fn prev_char_boundary(text: &str, pos: usize) -> usize {
    if pos == 0 {
        return 0;
    }
    let mut p = pos - 1;
    while p > 0 && !text.is_char_boundary(p) {
        p -= 1;
    }
    p
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    if pos >= text.len() {
        return text.len();
    }
    let mut p = pos + 1;
    while p < text.len() && !text.is_char_boundary(p) {
        p += 1;
    }
    p
}

fn move_up(text: &str, cursor: usize) -> usize {
    let (row, col) = line_col(text, cursor);
    if row == 0 {
        return 0;
    }
    offset_of(text, row - 1, col)
}

fn move_down(text: &str, cursor: usize) -> usize {
    let (row, col) = line_col(text, cursor);
    if row + 1 > text.matches('\n').count() {
        return text.len();
    }
    offset_of(text, row + 1, col)
}

/// Byte offset of `col` chars into line `row`, clamped to the line's end.
fn offset_of(text: &str, row: usize, col: usize) -> usize {
    let rows: Vec<&str> = text.split('\n').collect();
    let line = rows.get(row).copied().unwrap_or("");
    let row_start: usize = rows[..row.min(rows.len())].iter().map(|l| l.len() + 1).sum();
    let col_bytes = line
        .char_indices()
        .nth(col)
        .map(|(i, _)| i)
        .unwrap_or(line.len());
    row_start + col_bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(text: &mut String, cursor: &mut usize, s: &str) {
        for c in s.chars() {
            edit_line(text, cursor, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_and_backspace_respect_multibyte_chars() {
        let mut text = String::new();
        let mut cursor = 0;
        type_str(&mut text, &mut cursor, "héllo");
        assert_eq!(cursor, text.len());
        edit_line(&mut text, &mut cursor, KeyCode::Left);
        edit_line(&mut text, &mut cursor, KeyCode::Left);
        edit_line(&mut text, &mut cursor, KeyCode::Left);
        edit_line(&mut text, &mut cursor, KeyCode::Backspace);
        assert_eq!(text, "hllo");
        assert_eq!(cursor, 1);
        edit_line(&mut text, &mut cursor, KeyCode::Delete);
        assert_eq!(text, "hlo");
    }

    #[test]
    fn home_end_and_unhandled_keys() {
        let mut text = String::from("abc");
        let mut cursor = 1;
        assert!(edit_line(&mut text, &mut cursor, KeyCode::End));
        assert_eq!(cursor, 3);
        assert!(edit_line(&mut text, &mut cursor, KeyCode::Home));
        assert_eq!(cursor, 0);
        assert!(!edit_line(&mut text, &mut cursor, KeyCode::Tab));
    }

    #[test]
    fn multiline_navigation_keeps_column() {
        let mut text = String::from("{\n  \"a\": 1\n}");
        let mut cursor = text.find('a').unwrap();
        assert_eq!(line_col(&text, cursor), (1, 3));

        edit_multiline(&mut text, &mut cursor, KeyCode::Up);
        assert_eq!(line_col(&text, cursor), (0, 1));
        edit_multiline(&mut text, &mut cursor, KeyCode::Down);
        assert_eq!(line_col(&text, cursor), (1, 1));
        edit_multiline(&mut text, &mut cursor, KeyCode::End);
        assert_eq!(line_col(&text, cursor), (1, 8));
        edit_multiline(&mut text, &mut cursor, KeyCode::Down);
        assert_eq!(line_col(&text, cursor), (2, 1));
        edit_multiline(&mut text, &mut cursor, KeyCode::Down);
        assert_eq!(cursor, text.len());
        edit_multiline(&mut text, &mut cursor, KeyCode::Home);
        assert_eq!(line_col(&text, cursor), (2, 0));
    }

    #[test]
    fn enter_inserts_newline() {
        let mut text = String::from("ab");
        let mut cursor = 1;
        edit_multiline(&mut text, &mut cursor, KeyCode::Enter);
        assert_eq!(text, "a\nb");
        assert_eq!(line_col(&text, cursor), (1, 0));
    }
}
