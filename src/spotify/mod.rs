//! # Spotify Integration Module
//!
//! Interface to the Spotify Web API for the track data this service needs.
//! It handles the HTTP communication, pagination and error translation
//! between the aggregation logic and Spotify's REST endpoints.
//!
//! ## Core Modules
//!
//! [`tracks`] - Playlist track retrieval:
//! - **Paginated Fetch Loop**: Drains every page of a playlist's track
//!   listing by following the `next` cursor supplied with each page
//! - **Per-Item Validation**: Playlist entries without a track object or
//!   track id are skipped silently
//! - **Error Translation**: Maps upstream failures to a status code plus a
//!   human-readable message, extracting Spotify's own error text where the
//!   response body carries one
//!
//! ## Authentication
//!
//! All requests authenticate with a bearer token obtained through the
//! client-credentials flow by [`crate::management::TokenManager`]; this
//! module never acquires tokens itself.
//!
//! ## Error Handling
//!
//! Failures are expressed as [`SpotifyError`]. Transport failures (no
//! response at all) and upstream non-2xx responses are kept apart because
//! the caller forwards the upstream status code to its own client while a
//! transport failure is always a plain 500. Nothing is retried; a single
//! failing page aborts the whole aggregation.
//!
//! ## Dependencies
//!
//! - **reqwest** - HTTP client with JSON support and async capabilities
//! - **serde_json** - JSON serialization and deserialization
//! - **thiserror** - Error type derivation

use reqwest::StatusCode;
use thiserror::Error;

pub mod tracks;

/// Failure modes when talking to the Spotify Web API.
#[derive(Error, Debug)]
pub enum SpotifyError {
    /// The request never produced an HTTP response.
    #[error("Failed to communicate with Spotify API.")]
    Transport(#[from] reqwest::Error),

    /// Spotify answered with a non-success status code.
    #[error("{message}")]
    Api {
        status: StatusCode,
        message: String,
        details: String,
    },
}
