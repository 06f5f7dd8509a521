use std::path::PathBuf;

/// Everything that can end a dispatch without a response to show.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("create request failed: HTTP {0}")]
    CreateFailed(u16),
    #[error("execute request failed: HTTP {0}")]
    ExecuteFailed(u16),
    #[error("backend unreachable: {0}")]
    Network(#[source] reqwest::Error),
    #[error("backend did not answer in time")]
    Timeout,
    #[error("backend sent an unreadable reply: {0}")]
    MalformedReply(#[source] reqwest::Error),
    #[error("a request is already in flight")]
    Busy,
}

impl DispatchError {
    /// Classify a failure to get a response at all.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DispatchError::Timeout
        } else {
            DispatchError::Network(err)
        }
    }

    /// Classify a failure while reading a 2xx reply body.
    pub(crate) fn from_reply(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DispatchError::Timeout
        } else if err.is_decode() {
            DispatchError::MalformedReply(err)
        } else {
            DispatchError::Network(err)
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid backend URL {url:?}: {source}")]
    BackendUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("backend URL {0:?} must be an http(s) base URL")]
    BackendScheme(String),
    #[error("invalid timeout {value:?}: {source}")]
    Timeout {
        value: String,
        #[source]
        source: humantime::DurationError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_failures_name_the_phase_and_status() {
        assert_eq!(DispatchError::CreateFailed(500).to_string(), "create request failed: HTTP 500");
        assert_eq!(DispatchError::ExecuteFailed(404).to_string(), "execute request failed: HTTP 404");
    }
}
