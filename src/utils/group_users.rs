use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use tracing::{debug, info};

use crate::models::config::AcctConfig;
use crate::models::outcome::{excerpt, FetchError};
use crate::utils::constants::ACCEPT_XML;

pub fn group_users_url(base: &str, group_id: &str) -> String {
    format!("{}/groups/{}/users", base, group_id)
}

/// Performs the single GET against `{base}/groups/{group_id}/users`.
///
/// A 2xx response yields the body untouched. Any other status becomes
/// [`FetchError::RemoteRejection`] with a bounded excerpt of that same
/// response's body, and anything that prevents a response is a
/// [`FetchError::TransportFailure`]. The client lives only for this call.
pub fn fetch_group_users(config: &AcctConfig) -> Result<String, FetchError> {
    let url = group_users_url(&config.base_url, &config.group_id);
    debug!(url = %url, timeout = ?config.timeout, "requesting group users");

    let client = Client::builder().timeout(config.timeout).build()?;
    let response = client
        .get(&url)
        .basic_auth(&config.username, Some(&config.password))
        .header(ACCEPT, ACCEPT_XML)
        .send()
        .inspect_err(|e| {
            info!(
                timeout = e.is_timeout(),
                connect = e.is_connect(),
                "request did not complete"
            )
        })?;

    let status = response.status();
    info!(status = status.as_u16(), "group users endpoint responded");

    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(FetchError::RemoteRejection {
            status: status.as_u16(),
            body_excerpt: excerpt(&body),
        });
    }

    Ok(response.text()?)
}
