use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{Client, StatusCode};

use crate::{Res, config, error::InsightError, types::Token};

/// Requests an access token via the OAuth 2.0 client-credentials flow.
///
/// Exchanges the configured client id and secret for a short-lived access
/// token. The credentials travel in an HTTP Basic authorization header
/// (base64 of `client_id:client_secret`) with the grant type in the form
/// body, as specified by the accounts service.
///
/// The token is valid for the duration of a single analysis run and is
/// never persisted; every run performs a fresh exchange.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - Access token with type and expiry metadata
/// - `Err(InsightError)` - Rejected credentials or transport failure
///
/// # Error Conditions
///
/// - `400 Bad Request` / `401 Unauthorized` from the token endpoint mean
///   the client id or secret was rejected and map to
///   [`InsightError::Authentication`] carrying the response body
/// - Other non-success statuses and network failures surface as
///   [`InsightError::Http`]
///
/// # Example
///
/// ```
/// let token = request_token().await?;
/// println!("token expires in {} seconds", token.expires_in);
/// ```
pub async fn request_token() -> Res<Token> {
    let credentials = format!(
        "{}:{}",
        config::spotify_client_id(),
        config::spotify_client_secret()
    );

    let client = Client::new();
    let response = client
        .post(&config::spotify_apitoken_url())
        .header("Authorization", format!("Basic {}", STANDARD.encode(credentials)))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    // the accounts service answers 400 invalid_client / 401 for bad credentials
    if response.status() == StatusCode::BAD_REQUEST
        || response.status() == StatusCode::UNAUTHORIZED
    {
        let body = response.text().await.unwrap_or_default();
        return Err(InsightError::Authentication(body));
    }

    let response = response.error_for_status()?;
    let token = response.json::<Token>().await?;

    Ok(token)
}
