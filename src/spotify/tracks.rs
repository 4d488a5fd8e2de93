use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::{
    config,
    spotify::SpotifyError,
    types::{PlaylistItem, PlaylistTracksPage, Track},
};

/// Page size requested from the playlist tracks endpoint, the maximum the
/// API accepts.
const PAGE_SIZE: u32 = 100;

/// Fallback message when the upstream error body carries no usable text.
pub const GENERIC_API_ERROR: &str = "Failed to communicate with Spotify API.";

/// Retrieves every track of a playlist from the Spotify Web API.
///
/// Starts at the playlist's tracks-listing endpoint and follows the `next`
/// URL supplied with each page until it is null, so every reachable page is
/// visited exactly once, in upstream order. Items without a track object
/// or without a track id are skipped; everything else is accumulated.
///
/// # Arguments
///
/// * `playlist_id` - Spotify ID of the playlist, as extracted from the link
/// * `token` - Valid access token for Spotify API authentication
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Track>)` - All valid tracks of the playlist, possibly empty
/// - `Err(SpotifyError)` - Transport failure or upstream non-2xx response
///
/// # Error Handling
///
/// There is no retry logic. A single failing page aborts the aggregation;
/// the upstream status code and a translated message are handed back via
/// [`SpotifyError::Api`] so the caller can forward them.
pub async fn get_playlist_tracks(
    playlist_id: &str,
    token: &str,
) -> Result<Vec<Track>, SpotifyError> {
    let client = Client::new();
    let mut all_tracks: Vec<Track> = Vec::new();
    let mut next_url = Some(format!(
        "{uri}/playlists/{id}/tracks?limit={limit}",
        uri = &config::spotify_apiurl(),
        id = playlist_id,
        limit = PAGE_SIZE
    ));

    while let Some(url) = next_url {
        let response = client.get(&url).bearer_auth(token).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SpotifyError::Api {
                status,
                message: upstream_error_message(status, &body),
                details: format!("Spotify returned {status} for {url}"),
            });
        }

        let page = response.json::<PlaylistTracksPage>().await?;
        collect_page_tracks(&mut all_tracks, page.items);
        next_url = page.next;
    }

    Ok(all_tracks)
}

/// Appends the valid tracks of one page to the accumulator.
///
/// A page item counts as valid when it carries a track object with an id.
/// Artist names are joined into a single comma-separated string; a missing
/// popularity defaults to 0.
pub fn collect_page_tracks(tracks: &mut Vec<Track>, items: Vec<PlaylistItem>) {
    for item in items {
        let Some(track) = item.track else { continue };
        let Some(id) = track.id else { continue };

        let artist = if track.artists.is_empty() {
            "Unknown Artist".to_string()
        } else {
            track
                .artists
                .iter()
                .map(|artist| artist.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };

        tracks.push(Track {
            id,
            name: track.name,
            artist,
            popularity: track.popularity.unwrap_or(0),
        });
    }
}

/// Translates an upstream error response into a human-readable message.
///
/// Attempts to extract Spotify's own error text from the response body,
/// checking the `{"error": {"message": ...}}` shape used by the Web API
/// and the `{"error_description": ...}` shape used by the accounts
/// service. Well-known status codes are prefixed with a more specific
/// hint; anything else keeps the extracted (or generic) message.
pub fn upstream_error_message(status: StatusCode, body: &str) -> String {
    let mut message = GENERIC_API_ERROR.to_string();

    if let Ok(json) = serde_json::from_str::<Value>(body) {
        if let Some(text) = json
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str)
        {
            message = format!("Spotify API Error: {}", text);
        } else if let Some(text) = json.get("error_description").and_then(Value::as_str) {
            message = format!("Spotify API Error: {}", text);
        }
    }

    match status {
        StatusCode::BAD_REQUEST => format!(
            "Invalid request to Spotify API. Check playlist link format. {}",
            message
        ),
        StatusCode::FORBIDDEN => format!(
            "Access to Spotify API forbidden. Check your Spotify app permissions or token. {}",
            message
        ),
        StatusCode::NOT_FOUND => format!(
            "Spotify resource not found. The playlist might be private, deleted, or the ID is incorrect. {}",
            message
        ),
        StatusCode::TOO_MANY_REQUESTS => format!(
            "Spotify API rate limit exceeded. Please try again later. {}",
            message
        ),
        _ => message,
    }
}
