//! Unsplash random-photo client.
//!
//! One authenticated GET per search, constrained to landscape
//! orientation. Payload parsing is separated from the network call so
//! the expected-shape handling can be tested without a connection.

use serde::Deserialize;

use crate::state::data::{SearchResult, NO_DESCRIPTION};
use super::FetchError;

const ENDPOINT: &str = "https://api.unsplash.com/photos/random";
const ORIENTATION: &str = "landscape";

/// Demo access key shipped with the app; override with UNSPLASH_ACCESS_KEY
const DEFAULT_ACCESS_KEY: &str = "svkNBuj1LQ1FTSbWcaDdsD8QNZcivmgqI-45tqcP0kQ";

/// Resolve the Unsplash access key from the environment, falling back
/// to the built-in demo key
pub fn access_key() -> String {
    std::env::var("UNSPLASH_ACCESS_KEY").unwrap_or_else(|_| DEFAULT_ACCESS_KEY.to_string())
}

/// Expected shape of the /photos/random payload
#[derive(Debug, Deserialize)]
struct RandomPhoto {
    urls: PhotoUrls,
    user: Contributor,
    description: Option<String>,
    alt_description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    regular: String,
}

#[derive(Debug, Deserialize)]
struct Contributor {
    name: String,
}

/// Fetch one random landscape photo matching `query`.
///
/// Non-success HTTP statuses and network failures map to
/// [`FetchError::Transport`]; a payload without a usable image URL maps
/// to [`FetchError::MalformedResponse`]. No retries are attempted here.
pub async fn fetch_random_image(
    query: String,
    access_key: String,
) -> Result<SearchResult, FetchError> {
    let url = format!(
        "{}?query={}&orientation={}",
        ENDPOINT,
        urlencoding::encode(&query),
        ORIENTATION,
    );

    println!("🔍 Fetching random image for \"{}\"", query);

    let response = reqwest::Client::new()
        .get(&url)
        .header("Authorization", format!("Client-ID {}", access_key))
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    if !response.status().is_success() {
        return Err(FetchError::Transport(format!(
            "HTTP error, status {}",
            response.status()
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    parse_random_photo(&body, &query)
}

/// Turn the raw payload into a [`SearchResult`].
///
/// The description falls back from `description` to `alt_description`
/// to the fixed placeholder; empty strings count as absent.
fn parse_random_photo(body: &str, query: &str) -> Result<SearchResult, FetchError> {
    let photo: RandomPhoto =
        serde_json::from_str(body).map_err(|e| FetchError::MalformedResponse(e.to_string()))?;

    if photo.urls.regular.is_empty() {
        return Err(FetchError::MalformedResponse(
            "empty urls.regular".to_string(),
        ));
    }

    let description = photo
        .description
        .filter(|d| !d.is_empty())
        .or(photo.alt_description.filter(|d| !d.is_empty()))
        .unwrap_or_else(|| NO_DESCRIPTION.to_string());

    Ok(SearchResult {
        image_url: photo.urls.regular,
        photographer: photo.user.name,
        description,
        query: query.to_string(),
    })
}

/// Download the raw bytes of an image so it can be rendered natively.
///
/// Used for the current result, history thumbnails and favorite cards.
pub async fn download_image(url: String) -> Result<Vec<u8>, FetchError> {
    let response = reqwest::get(&url)
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    if !response.status().is_success() {
        return Err(FetchError::Transport(format!(
            "HTTP error, status {}",
            response.status()
        )));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_payload() {
        let body = r#"{
            "urls": { "regular": "https://img/1" },
            "user": { "name": "Ana" },
            "description": "A peak"
        }"#;

        let result = parse_random_photo(body, "mountains").unwrap();

        assert_eq!(result.image_url, "https://img/1");
        assert_eq!(result.photographer, "Ana");
        assert_eq!(result.description, "A peak");
        assert_eq!(result.query, "mountains");
    }

    #[test]
    fn test_description_falls_back_to_alt_description() {
        let body = r#"{
            "urls": { "regular": "https://img/1" },
            "user": { "name": "Ana" },
            "alt_description": "snow covered mountain"
        }"#;

        let result = parse_random_photo(body, "mountains").unwrap();
        assert_eq!(result.description, "snow covered mountain");
    }

    #[test]
    fn test_description_falls_back_to_placeholder() {
        let body = r#"{
            "urls": { "regular": "https://img/1" },
            "user": { "name": "Ana" },
            "description": "",
            "alt_description": null
        }"#;

        let result = parse_random_photo(body, "mountains").unwrap();
        assert_eq!(result.description, NO_DESCRIPTION);
    }

    #[test]
    fn test_missing_image_url_is_malformed() {
        let body = r#"{
            "user": { "name": "Ana" },
            "description": "A peak"
        }"#;

        let outcome = parse_random_photo(body, "mountains");
        assert!(matches!(outcome, Err(FetchError::MalformedResponse(_))));
    }

    #[test]
    fn test_empty_image_url_is_malformed() {
        let body = r#"{
            "urls": { "regular": "" },
            "user": { "name": "Ana" }
        }"#;

        let outcome = parse_random_photo(body, "mountains");
        assert!(matches!(outcome, Err(FetchError::MalformedResponse(_))));
    }

    #[test]
    fn test_non_json_body_is_malformed() {
        let outcome = parse_random_photo("<html>Rate limited</html>", "mountains");
        assert!(matches!(outcome, Err(FetchError::MalformedResponse(_))));
    }

    #[test]
    fn test_access_key_falls_back_to_builtin() {
        // The env var is not set in the test environment
        if std::env::var("UNSPLASH_ACCESS_KEY").is_err() {
            assert_eq!(access_key(), DEFAULT_ACCESS_KEY);
        }
    }
}
