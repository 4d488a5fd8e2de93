//! Configuration management for the playlist top-tracks service.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. Credentials are mandatory; the
//! bind address and the Spotify endpoint URLs fall back to sensible
//! defaults so a deployment only has to configure its API credentials.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory
//! 4. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

use crate::Res;

/// Loads environment variables from a `.env` file.
///
/// Looks for the file in the platform-specific local data directory under
/// `playtop/.env`, creating the directory structure if necessary. When no
/// file exists there, a `.env` in the current working directory is used
/// instead, if present.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/playtop/.env`
/// - macOS: `~/Library/Application Support/playtop/.env`
/// - Windows: `%LOCALAPPDATA%/playtop/.env`
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the
/// `.env` file cannot be parsed.
pub async fn load_env() -> Res<()> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("playtop/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if path.is_file() {
        dotenv::from_path(path)?;
    } else {
        dotenv::dotenv().ok();
    }

    Ok(())
}

/// Returns the address the HTTP server binds to.
///
/// Retrieves the `SERVER_ADDRESS` environment variable, defaulting to
/// `127.0.0.1:5000` when unset.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1:5000".to_string())
}

/// Returns the Spotify API client ID for authentication.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").expect("SPOTIFY_API_AUTH_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret for authentication.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_SECRET` environment variable is not set.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_SECRET").expect("SPOTIFY_API_AUTH_CLIENT_SECRET must be set")
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable, defaulting to the
/// public Web API endpoint. Overridable so tests and local mocks can point
/// the client elsewhere.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the Spotify OAuth token endpoint URL.
///
/// Retrieves the `SPOTIFY_API_TOKEN_URL` environment variable, defaulting
/// to the public accounts service. Used for the client-credentials token
/// exchange.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}
