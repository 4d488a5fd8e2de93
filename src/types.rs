use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// One page of a playlist's track listing as returned by the Web API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksPage {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<PlaylistTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrack {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
    pub popularity: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

/// A playlist entry after per-item validation, kept only for the duration
/// of one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub popularity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksRequest {
    #[serde(default, rename = "playlistLink")]
    pub playlist_link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopTrack {
    pub name: String,
    pub artist: String,
}

/// Success body. `top_tracks` is present exactly when the playlist had at
/// least one valid track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_tracks: Option<Vec<TopTrack>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
