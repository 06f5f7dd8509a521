use serde::{Deserialize, Serialize};

pub const DEFAULT_API_KEY_HEADER: &str = "X-API-Key";

/// The auth selector shown in the editor. Closed set; `None` attaches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthKind {
    #[default]
    None,
    Basic,
    Bearer,
    ApiKey,
}

impl AuthKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthKind::None => "none",
            AuthKind::Basic => "basic",
            AuthKind::Bearer => "bearer",
            AuthKind::ApiKey => "apikey",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AuthKind::None => "No Auth",
            AuthKind::Basic => "Basic Auth",
            AuthKind::Bearer => "Bearer Token",
            AuthKind::ApiKey => "API Key",
        }
    }

    pub fn next(&self) -> AuthKind {
        match self {
            AuthKind::None => AuthKind::Basic,
            AuthKind::Basic => AuthKind::Bearer,
            AuthKind::Bearer => AuthKind::ApiKey,
            AuthKind::ApiKey => AuthKind::None,
        }
    }

    /// Editable fields for this kind, in display order.
    pub fn fields(&self) -> &'static [AuthField] {
        match self {
            AuthKind::None => &[],
            AuthKind::Basic => &[AuthField::Username, AuthField::Password],
            AuthKind::Bearer => &[AuthField::Token],
            AuthKind::ApiKey => &[AuthField::Key, AuthField::Value, AuthField::Header],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Username,
    Password,
    Token,
    Key,
    Value,
    Header,
}

impl AuthField {
    pub fn label(&self) -> &'static str {
        match self {
            AuthField::Username => "Username",
            AuthField::Password => "Password",
            AuthField::Token => "Token",
            AuthField::Key => "Key",
            AuthField::Value => "Value",
            AuthField::Header => "Header",
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, AuthField::Password)
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            AuthField::Username => "Enter username",
            AuthField::Password => "Enter password",
            AuthField::Token => "Enter bearer token",
            AuthField::Key => "Enter API key name",
            AuthField::Value => "Enter API key value",
            AuthField::Header => DEFAULT_API_KEY_HEADER,
        }
    }
}

/// Raw auth inputs. A field stays `None` until the user edits it; every
/// variant's config degrades an absent field to a default instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthFields {
    pub username: Option<String>,
    pub password: Option<String>,
    pub token: Option<String>,
    pub key: Option<String>,
    pub value: Option<String>,
    pub header: Option<String>,
}

impl AuthFields {
    pub fn get(&self, field: AuthField) -> Option<&str> {
        match field {
            AuthField::Username => self.username.as_deref(),
            AuthField::Password => self.password.as_deref(),
            AuthField::Token => self.token.as_deref(),
            AuthField::Key => self.key.as_deref(),
            AuthField::Value => self.value.as_deref(),
            AuthField::Header => self.header.as_deref(),
        }
    }

    /// Mutable access for editing; materializes the field as `""` on first use.
    pub fn get_mut(&mut self, field: AuthField) -> &mut String {
        let slot = match field {
            AuthField::Username => &mut self.username,
            AuthField::Password => &mut self.password,
            AuthField::Token => &mut self.token,
            AuthField::Key => &mut self.key,
            AuthField::Value => &mut self.value,
            AuthField::Header => &mut self.header,
        };
        slot.get_or_insert_with(String::new)
    }

    fn text(&self, field: AuthField) -> String {
        self.get(field).unwrap_or_default().to_string()
    }
}

/// Auth block sent to the backend as `{"type": ..., "config": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "config", rename_all = "lowercase")]
pub enum AuthConfig {
    Basic { username: String, password: String },
    Bearer { token: String },
    ApiKey { key: String, value: String, header: String },
}

impl AuthConfig {
    /// Shape the config for `kind`. `AuthKind::None` yields no config at all.
    pub fn from_fields(kind: AuthKind, fields: &AuthFields) -> Option<AuthConfig> {
        match kind {
            AuthKind::None => None,
            AuthKind::Basic => Some(AuthConfig::Basic {
                username: fields.text(AuthField::Username),
                password: fields.text(AuthField::Password),
            }),
            AuthKind::Bearer => Some(AuthConfig::Bearer {
                token: fields.text(AuthField::Token),
            }),
            AuthKind::ApiKey => Some(AuthConfig::ApiKey {
                key: fields.text(AuthField::Key),
                value: fields.text(AuthField::Value),
                // An emptied header field falls back the same way an unset one does.
                header: fields
                    .get(AuthField::Header)
                    .filter(|h| !h.is_empty())
                    .unwrap_or(DEFAULT_API_KEY_HEADER)
                    .to_string(),
            }),
        }
    }

    pub fn kind(&self) -> AuthKind {
        match self {
            AuthConfig::Basic { .. } => AuthKind::Basic,
            AuthConfig::Bearer { .. } => AuthKind::Bearer,
            AuthConfig::ApiKey { .. } => AuthKind::ApiKey,
        }
    }
}
