//! Configuration management for the playlist insight CLI.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration including Spotify API credentials, the
//! completion endpoint, and server settings.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `spinsight/.env`. When no `.env` file exists,
/// configuration falls back to the process environment.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/spinsight/.env`
/// - macOS: `~/Library/Application Support/spinsight/.env`
/// - Windows: `%LOCALAPPDATA%/spinsight/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment is set up, or an error string if
/// directory creation fails.
///
/// # Example
///
/// ```
/// use spinsight::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spinsight/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    // fall back to the process environment when no .env file is present
    let _ = dotenv::from_path(path);
    Ok(())
}

/// Returns the server address for the local analysis server.
///
/// Retrieves the `SERVER_ADDRESS` environment variable which specifies
/// the address and port where the local HTTP server should bind when
/// running `spinsight serve`.
///
/// # Panics
///
/// Panics if the `SERVER_ADDRESS` environment variable is not set.
///
/// # Example
///
/// ```
/// let addr = server_addr(); // e.g., "127.0.0.1:8080"
/// ```
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable which
/// contains the client ID obtained when registering the application with
/// Spotify's developer platform.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable is not set.
///
/// # Example
///
/// ```
/// let client_id = spotify_client_id(); // e.g., "abc123..."
/// ```
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").expect("SPOTIFY_API_AUTH_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret for authentication.
///
/// Retrieves the `SPOTIFY_API_AUTH_CLIENT_SECRET` environment variable which
/// contains the client secret obtained when registering the application with
/// Spotify's developer platform. Together with the client ID it forms the
/// credentials for the client-credentials token exchange.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_SECRET` environment variable is not set.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
///
/// # Example
///
/// ```
/// let client_secret = spotify_client_secret(); // e.g., "def456..."
/// ```
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_SECRET").expect("SPOTIFY_API_AUTH_CLIENT_SECRET must be set")
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable which contains the
/// base URL for Spotify's Web API endpoints. This is used for the
/// playlist-tracks and audio-features lookups.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let api_url = spotify_apiurl(); // e.g., "https://api.spotify.com/v1"
/// ```
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").expect("SPOTIFY_API_URL must be set")
}

/// Returns the Spotify OAuth token exchange URL.
///
/// Retrieves the `SPOTIFY_API_TOKEN_URL` environment variable which contains
/// the URL used for the client-credentials token exchange. Every analysis
/// run requests a fresh token from this endpoint.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_TOKEN_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let token_url = spotify_apitoken_url(); // e.g., "https://accounts.spotify.com/api/token"
/// ```
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").expect("SPOTIFY_API_TOKEN_URL must be set")
}

/// Returns the completion endpoint URL.
///
/// Retrieves the `COMPLETION_API_URL` environment variable which contains
/// the URL of the OpenAI-compatible chat-completions endpoint used to
/// generate commentary.
///
/// # Panics
///
/// Panics if the `COMPLETION_API_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let url = completion_api_url(); // e.g., "https://api.groq.com/openai/v1/chat/completions"
/// ```
pub fn completion_api_url() -> String {
    env::var("COMPLETION_API_URL").expect("COMPLETION_API_URL must be set")
}

/// Returns the API key for the completion endpoint.
///
/// Retrieves the `COMPLETION_API_KEY` environment variable which contains
/// the bearer token sent with every completion request.
///
/// # Panics
///
/// Panics if the `COMPLETION_API_KEY` environment variable is not set.
///
/// # Security Note
///
/// The API key should be kept confidential and never exposed in logs
/// or version control.
///
/// # Example
///
/// ```
/// let key = completion_api_key(); // e.g., "gsk_..."
/// ```
pub fn completion_api_key() -> String {
    env::var("COMPLETION_API_KEY").expect("COMPLETION_API_KEY must be set")
}

/// Returns the model identifier for the completion endpoint.
///
/// Retrieves the `COMPLETION_MODEL` environment variable, falling back to
/// `mistral-saba-24b` when unset. The model selection is fixed per run.
///
/// # Example
///
/// ```
/// let model = completion_model(); // e.g., "mistral-saba-24b"
/// ```
pub fn completion_model() -> String {
    env::var("COMPLETION_MODEL").unwrap_or_else(|_| "mistral-saba-24b".to_string())
}
