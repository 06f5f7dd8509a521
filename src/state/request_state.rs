use crossterm::event::KeyCode;

use crate::model::{AuthField, AuthFields, AuthKind, BodyType, HttpMethod};
use super::input::edit_line;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyValuePair {
    pub key: String,
    pub value: String,
}

impl KeyValuePair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Only rows with both halves filled in reach the wire.
    pub fn is_complete(&self) -> bool {
        !self.key.is_empty() && !self.value.is_empty()
    }
}

/// An editable key/value grid (query params or headers) plus its selection.
#[derive(Debug, Clone, Default)]
pub struct KvTable {
    pub rows: Vec<KeyValuePair>,
    pub row: usize,
    /// 0 = key, 1 = value.
    pub col: u8,
    /// Byte cursor within the selected cell.
    pub cursor: usize,
}

impl KvTable {
    pub fn from_rows(rows: Vec<KeyValuePair>) -> Self {
        Self { rows, ..Default::default() }
    }

    pub fn cell(&self) -> Option<&str> {
        let pair = self.rows.get(self.row)?;
        Some(if self.col == 0 { &pair.key } else { &pair.value })
    }

    pub fn cell_mut(&mut self) -> Option<&mut String> {
        let pair = self.rows.get_mut(self.row)?;
        Some(if self.col == 0 { &mut pair.key } else { &mut pair.value })
    }

    /// Append an empty row and select its key cell.
    pub fn push_row(&mut self) {
        self.rows.push(KeyValuePair::default());
        self.row = self.rows.len() - 1;
        self.col = 0;
        self.cursor = 0;
    }

    pub fn remove_selected(&mut self) {
        if self.row < self.rows.len() {
            self.rows.remove(self.row);
        }
        self.row = self.row.min(self.rows.len().saturating_sub(1));
        self.cursor_to_end();
    }

    pub fn select_row(&mut self, delta: isize) {
        if self.rows.is_empty() {
            return;
        }
        let last = self.rows.len() - 1;
        self.row = self.row.saturating_add_signed(delta).min(last);
        self.cursor_to_end();
    }

    pub fn select_col(&mut self, col: u8) {
        self.col = col.min(1);
        self.cursor_to_end();
    }

    /// Key → value → next row's key, growing the table at the end.
    pub fn advance_cell(&mut self) {
        if self.col == 0 && !self.rows.is_empty() {
            self.select_col(1);
            return;
        }
        if self.row + 1 >= self.rows.len() {
            self.push_row();
        } else {
            self.row += 1;
            self.col = 0;
            self.cursor = 0;
        }
    }

    /// Apply an editing key to the selected cell.
    pub fn edit(&mut self, code: KeyCode) -> bool {
        let Some(pair) = self.rows.get_mut(self.row) else {
            return false;
        };
        let text = if self.col == 0 { &mut pair.key } else { &mut pair.value };
        edit_line(text, &mut self.cursor, code)
    }

    fn cursor_to_end(&mut self) {
        self.cursor = self.cell().map(str::len).unwrap_or(0);
    }
}

/// Everything the user has typed into the request editor.
///
/// Read once, synchronously, at send time. The descriptor built from it owns
/// its data, so edits made while a dispatch is in flight never reach it.
#[derive(Debug, Clone, Default)]
pub struct RequestForm {
    pub method: HttpMethod,
    pub url: String,
    pub url_cursor: usize,
    pub params: KvTable,
    pub headers: KvTable,
    pub body_type: Option<BodyType>,
    pub body: String,
    pub body_cursor: usize,
    pub body_scroll_offset: u16,
    pub auth_kind: AuthKind,
    pub auth: AuthFields,
    /// Index into `auth_kind.fields()`.
    pub auth_field: usize,
    pub auth_cursor: usize,
}

impl RequestForm {
    pub fn with_url(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            url_cursor: url.len(),
            url,
            ..Default::default()
        }
    }

    /// The form a fresh session opens with.
    pub fn sample() -> Self {
        Self {
            headers: KvTable::from_rows(vec![KeyValuePair::new("User-Agent", "Litepost/1.0")]),
            ..Self::with_url("https://httpbin.org/get")
        }
    }

    pub fn selected_auth_field(&self) -> Option<AuthField> {
        self.auth_kind.fields().get(self.auth_field).copied()
    }

    pub fn cycle_auth_kind(&mut self) {
        self.auth_kind = self.auth_kind.next();
        self.auth_field = 0;
        self.auth_cursor = self.auth_cursor_end();
    }

    pub fn select_auth_field(&mut self, delta: isize) {
        let count = self.auth_kind.fields().len();
        if count == 0 {
            return;
        }
        self.auth_field = self.auth_field.saturating_add_signed(delta).min(count - 1);
        self.auth_cursor = self.auth_cursor_end();
    }

    /// Tab order inside the auth form, wrapping to the first field.
    pub fn advance_auth_field(&mut self) {
        let count = self.auth_kind.fields().len();
        if count == 0 {
            return;
        }
        self.auth_field = (self.auth_field + 1) % count;
        self.auth_cursor = self.auth_cursor_end();
    }

    /// Apply an editing key to the selected auth field.
    pub fn edit_auth(&mut self, code: KeyCode) -> bool {
        let Some(field) = self.selected_auth_field() else {
            return false;
        };
        edit_line(self.auth.get_mut(field), &mut self.auth_cursor, code)
    }

    fn auth_cursor_end(&self) -> usize {
        self.selected_auth_field()
            .and_then(|f| self.auth.get(f))
            .map(str::len)
            .unwrap_or(0)
    }
}
