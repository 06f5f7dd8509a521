use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::auth::AuthConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }

    pub fn next(&self) -> HttpMethod {
        match self {
            HttpMethod::Get => HttpMethod::Post,
            HttpMethod::Post => HttpMethod::Put,
            HttpMethod::Put => HttpMethod::Patch,
            HttpMethod::Patch => HttpMethod::Delete,
            HttpMethod::Delete => HttpMethod::Head,
            HttpMethod::Head => HttpMethod::Options,
            HttpMethod::Options => HttpMethod::Get,
        }
    }

    pub fn prev(&self) -> HttpMethod {
        match self {
            HttpMethod::Get => HttpMethod::Options,
            HttpMethod::Post => HttpMethod::Get,
            HttpMethod::Put => HttpMethod::Post,
            HttpMethod::Patch => HttpMethod::Put,
            HttpMethod::Delete => HttpMethod::Patch,
            HttpMethod::Head => HttpMethod::Delete,
            HttpMethod::Options => HttpMethod::Head,
        }
    }
}

/// Body encodings the backend understands. "No body" is modelled as
/// `Option::None` wherever a body type is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyType {
    Json,
    Xml,
    Form,
    Raw,
}

impl BodyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyType::Json => "json",
            BodyType::Xml => "xml",
            BodyType::Form => "form",
            BodyType::Raw => "raw",
        }
    }

    /// Cycle `none → json → xml → form → raw → none`.
    pub fn cycle(current: Option<BodyType>) -> Option<BodyType> {
        match current {
            None => Some(BodyType::Json),
            Some(BodyType::Json) => Some(BodyType::Xml),
            Some(BodyType::Xml) => Some(BodyType::Form),
            Some(BodyType::Form) => Some(BodyType::Raw),
            Some(BodyType::Raw) => None,
        }
    }

    pub fn placeholder(current: Option<BodyType>) -> &'static str {
        match current {
            None => "No body. Press t to choose a body type",
            Some(BodyType::Json) => "Enter JSON body...\n{\n  \"key\": \"value\"\n}",
            Some(BodyType::Xml) => "Enter XML body...\n<root>\n  <item>value</item>\n</root>",
            Some(BodyType::Form) => "Enter form data...\nkey1=value1\nkey2=value2",
            Some(BodyType::Raw) => "Enter raw body...",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestBody {
    #[serde(rename = "type")]
    pub body_type: BodyType,
    pub content: String,
}

/// Backend-ready description of one HTTP call.
///
/// `body` and `auth` are omitted from the JSON entirely when absent; the
/// backend never sees a `null` placeholder for either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDescriptor {
    pub name: String,
    pub method: HttpMethod,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub query_params: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<RequestBody>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthConfig>,
}
