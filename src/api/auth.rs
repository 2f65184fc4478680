use reqwest::{Client, header::CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use tracing::info;
use url::Url;

use super::{ApiError, ApiResult};

/// Body of the client-credentials exchange
#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
}

/// Response from `POST /oauth/token`
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Exchange client credentials for a bearer token.
///
/// Called exactly once per run; the token is never refreshed.
pub async fn request_token(
    http: &Client,
    base: &Url,
    client_id: &str,
    client_secret: &str,
) -> ApiResult<String> {
    let url = base.join("oauth/token")?;

    info!("Requesting access token from {}", url);

    let response = http
        .post(url)
        .header(CONTENT_TYPE, "application/json")
        .json(&TokenRequest {
            client_id,
            client_secret,
        })
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status { status, body });
    }

    let token: TokenResponse = response.json().await?;

    info!("Access token obtained");
    Ok(token.access_token)
}
