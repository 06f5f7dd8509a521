/// Coarse status bucket, used only to pick a display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    Redirect,
    Error,
    /// Outside 200–599; shown without a status color.
    Unclassified,
}

impl StatusClass {
    pub fn from_code(code: u16) -> StatusClass {
        match code {
            200..=299 => StatusClass::Success,
            300..=399 => StatusClass::Redirect,
            400..=599 => StatusClass::Error,
            _ => StatusClass::Unclassified,
        }
    }
}

/// Reason phrase for the codes the inspector knows; everything else is "Unknown".
pub fn status_text(code: u16) -> &'static str {
    match code {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}
