use std::sync::Arc;

use axum::{
    Extension, Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tokio::sync::Mutex;

use crate::{
    info,
    management::TokenManager,
    spotify::{self, SpotifyError},
    types::{ErrorResponse, TopTracksRequest, TopTracksResponse},
    utils, warning,
};

/// Number of tracks returned to the caller.
const TOP_TRACK_COUNT: usize = 5;

/// Handles `POST /get_top_5_from_playlist`.
///
/// Validates the request body, acquires an access token, drains the
/// playlist's track listing and answers with the ranked top tracks.
/// Validation failures are rejected before any network call is made.
///
/// # Responses
///
/// - `200` with `{message, top_tracks}` on success, or `{message}` alone
///   when the playlist has no valid tracks (a valid state, not an error).
/// - `400` with `{error}` when the playlist link is missing or unusable.
/// - `500` with `{error}` when no access token could be obtained.
/// - the upstream status (or `500` for transport failures) with
///   `{error, details}` when the Spotify API call fails.
pub async fn top_tracks(
    Extension(token_manager): Extension<Arc<Mutex<TokenManager>>>,
    Json(payload): Json<TopTracksRequest>,
) -> Response {
    let link = payload.playlist_link.unwrap_or_default();
    if link.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "No playlist link provided", None);
    }

    let playlist_id = utils::extract_playlist_id(&link);
    if playlist_id.is_empty() {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Invalid Spotify playlist link format",
            None,
        );
    }

    info!("Extracted playlist id: {}", playlist_id);

    let token = {
        let mut manager = token_manager.lock().await;
        match manager.get_valid_token().await {
            Ok(token) => token,
            Err(e) => {
                warning!("Token request failed: {}", e);
                return error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to authenticate with Spotify. Check your API credentials.",
                    None,
                );
            }
        }
    };

    match spotify::tracks::get_playlist_tracks(&playlist_id, &token).await {
        Ok(tracks) if tracks.is_empty() => Json(TopTracksResponse {
            message: "No tracks found in this playlist.".to_string(),
            top_tracks: None,
        })
        .into_response(),
        Ok(tracks) => {
            info!("Aggregated {} tracks from playlist {}", tracks.len(), playlist_id);
            Json(TopTracksResponse {
                message: "Successfully found top 5 tracks!".to_string(),
                top_tracks: Some(utils::rank_top_tracks(tracks, TOP_TRACK_COUNT)),
            })
            .into_response()
        }
        Err(SpotifyError::Transport(e)) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to communicate with Spotify API.",
            Some(e.to_string()),
        ),
        Err(SpotifyError::Api {
            status,
            message,
            details,
        }) => error_response(status, &message, Some(details)),
    }
}

fn error_response(status: StatusCode, error: &str, details: Option<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            details,
        }),
    )
        .into_response()
}
