use std::time::Duration;

use reqwest::Client;

/// Client used for both backend calls. The timeout bounds each call, so a hung
/// backend surfaces as an error instead of a permanently busy UI.
pub fn build_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .use_rustls_tls()
        .user_agent(concat!("litepost/", env!("CARGO_PKG_VERSION")))
        .build()
}
