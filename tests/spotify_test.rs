use reqwest::StatusCode;

use playtop::spotify::tracks::{GENERIC_API_ERROR, collect_page_tracks, upstream_error_message};
use playtop::types::{PlaylistTracksPage, Track};

fn parse_page(body: &str) -> PlaylistTracksPage {
    serde_json::from_str(body).expect("page body should parse")
}

#[test]
fn test_collect_page_tracks_skips_malformed_items() {
    let page = parse_page(
        r#"{
            "items": [
                {"track": {"id": "t1", "name": "One", "artists": [{"name": "A"}], "popularity": 61}},
                {"track": null},
                {"track": {"id": null, "name": "Local file", "artists": [{"name": "B"}], "popularity": 10}},
                {"track": {"id": "t2", "name": "Two", "artists": [{"name": "C"}], "popularity": 35}}
            ],
            "next": null
        }"#,
    );

    let mut tracks: Vec<Track> = Vec::new();
    collect_page_tracks(&mut tracks, page.items);

    // The null track and the id-less track are skipped without failing
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].id, "t1");
    assert_eq!(tracks[1].id, "t2");
}

#[test]
fn test_collect_page_tracks_defaults_missing_popularity_to_zero() {
    let page = parse_page(
        r#"{
            "items": [
                {"track": {"id": "t1", "name": "One", "artists": [{"name": "A"}]}}
            ],
            "next": null
        }"#,
    );

    let mut tracks = Vec::new();
    collect_page_tracks(&mut tracks, page.items);

    assert_eq!(tracks[0].popularity, 0);
}

#[test]
fn test_collect_page_tracks_joins_artist_names() {
    let page = parse_page(
        r#"{
            "items": [
                {"track": {"id": "t1", "name": "Duet", "artists": [{"name": "A"}, {"name": "B"}], "popularity": 50}},
                {"track": {"id": "t2", "name": "Orphan", "artists": [], "popularity": 50}}
            ],
            "next": null
        }"#,
    );

    let mut tracks = Vec::new();
    collect_page_tracks(&mut tracks, page.items);

    assert_eq!(tracks[0].artist, "A, B");
    assert_eq!(tracks[1].artist, "Unknown Artist");
}

#[test]
fn test_two_pages_aggregate_in_order() {
    let page1 = parse_page(
        r#"{
            "items": [
                {"track": {"id": "t1", "name": "One", "artists": [{"name": "A"}], "popularity": 10}},
                {"track": {"id": "t2", "name": "Two", "artists": [{"name": "B"}], "popularity": 20}}
            ],
            "next": "https://api.spotify.com/v1/playlists/p/tracks?offset=100&limit=100"
        }"#,
    );
    let page2 = parse_page(
        r#"{
            "items": [
                {"track": {"id": "t3", "name": "Three", "artists": [{"name": "C"}], "popularity": 30}}
            ],
            "next": null
        }"#,
    );

    // First page advertises a next cursor, second page ends the listing
    assert!(page1.next.is_some());
    assert!(page2.next.is_none());

    let mut tracks = Vec::new();
    collect_page_tracks(&mut tracks, page1.items);
    collect_page_tracks(&mut tracks, page2.items);

    let ids: Vec<&str> = tracks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["t1", "t2", "t3"]);
}

#[test]
fn test_page_parses_without_items_key() {
    let page = parse_page(r#"{"next": null}"#);
    assert!(page.items.is_empty());
}

#[test]
fn test_upstream_error_message_web_api_shape() {
    let message = upstream_error_message(
        StatusCode::NOT_FOUND,
        r#"{"error": {"status": 404, "message": "Not found."}}"#,
    );

    assert!(message.contains("Spotify resource not found"));
    assert!(message.contains("private, deleted, or the ID is incorrect"));
    assert!(message.contains("Spotify API Error: Not found."));
}

#[test]
fn test_upstream_error_message_accounts_shape() {
    let message = upstream_error_message(
        StatusCode::UNAUTHORIZED,
        r#"{"error": "invalid_client", "error_description": "Invalid client secret"}"#,
    );

    // `error` is a plain string here, so the error_description shape wins
    assert_eq!(message, "Spotify API Error: Invalid client secret");
}

#[test]
fn test_upstream_error_message_non_json_body() {
    let message = upstream_error_message(StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>");
    assert_eq!(message, GENERIC_API_ERROR);
}

#[test]
fn test_upstream_error_message_status_overrides() {
    let bad_request = upstream_error_message(StatusCode::BAD_REQUEST, "");
    assert!(bad_request.starts_with("Invalid request to Spotify API. Check playlist link format."));
    assert!(bad_request.ends_with(GENERIC_API_ERROR));

    let forbidden = upstream_error_message(StatusCode::FORBIDDEN, "{}");
    assert!(forbidden.starts_with("Access to Spotify API forbidden."));

    let rate_limited = upstream_error_message(
        StatusCode::TOO_MANY_REQUESTS,
        r#"{"error": {"status": 429, "message": "Rate limit exceeded"}}"#,
    );
    assert!(rate_limited.starts_with("Spotify API rate limit exceeded. Please try again later."));
    assert!(rate_limited.contains("Rate limit exceeded"));
}
