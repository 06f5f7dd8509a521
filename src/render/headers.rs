pub const NO_COOKIES_NAME: &str = "No Cookies";
pub const NO_COOKIES_MESSAGE: &str = "No cookies were set in this response";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRow {
    pub name: String,
    pub value: String,
}

impl HeaderRow {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }
}

/// One row per header, in backend order.
pub fn header_rows(headers: &[(String, String)]) -> Vec<HeaderRow> {
    headers.iter().map(|(k, v)| HeaderRow::new(k, v)).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CookieListing {
    Cookies(Vec<HeaderRow>),
    NoneSet,
}

impl CookieListing {
    /// Every `Set-Cookie` header, matched case-insensitively, as its own row.
    pub fn from_headers(headers: &[(String, String)]) -> CookieListing {
        let cookies: Vec<HeaderRow> = headers
            .iter()
            .filter(|(name, _)| name.eq_ignore_ascii_case("set-cookie"))
            .map(|(k, v)| HeaderRow::new(k, v))
            .collect();
        if cookies.is_empty() {
            CookieListing::NoneSet
        } else {
            CookieListing::Cookies(cookies)
        }
    }

    /// Rows to display; never empty.
    pub fn rows(&self) -> Vec<HeaderRow> {
        match self {
            CookieListing::Cookies(rows) => rows.clone(),
            CookieListing::NoneSet => vec![HeaderRow::new(NO_COOKIES_NAME, NO_COOKIES_MESSAGE)],
        }
    }
}
