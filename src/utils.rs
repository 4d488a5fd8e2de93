use crate::types::{TopTrack, Track};

/// Extracts a playlist id from a playlist link.
///
/// Takes the last path segment and strips any query string, mirroring the
/// share links Spotify hands out
/// (`https://open.spotify.com/playlist/<id>?si=...`). No validation beyond
/// that; an id Spotify does not know is answered by the API with a
/// not-found error. Returns an empty string for inputs ending in `/`.
pub fn extract_playlist_id(link: &str) -> String {
    let segment = link.rsplit('/').next().unwrap_or("");
    segment.split('?').next().unwrap_or("").to_string()
}

/// Ranks tracks by popularity and keeps the `count` most popular.
///
/// The sort is stable, so tracks with equal popularity keep the order in
/// which the playlist listed them. The result is projected down to name
/// and artist; id and popularity are dropped from the payload.
pub fn rank_top_tracks(mut tracks: Vec<Track>, count: usize) -> Vec<TopTrack> {
    tracks.sort_by(|a, b| b.popularity.cmp(&a.popularity));

    tracks
        .into_iter()
        .take(count)
        .map(|track| TopTrack {
            name: track.name,
            artist: track.artist,
        })
        .collect()
}
