//! MyMemory translation client.
//!
//! Unauthenticated GET with a fixed English → Spanish language pair.
//! Any failure, transport or payload, surfaces as
//! [`FetchError::Translation`] so the session can report it inline
//! without disturbing the displayed photo.

use serde::Deserialize;

use super::FetchError;

const ENDPOINT: &str = "https://api.mymemory.translated.net/get";
const LANGPAIR: &str = "en|es";

/// Expected shape of the /get payload
#[derive(Debug, Deserialize)]
struct TranslationPayload {
    #[serde(rename = "responseData")]
    response_data: ResponseData,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Translate `text` from English to Spanish
pub async fn fetch_translation(text: String) -> Result<String, FetchError> {
    let url = format!(
        "{}?q={}&langpair={}",
        ENDPOINT,
        urlencoding::encode(&text),
        urlencoding::encode(LANGPAIR),
    );

    println!("🌐 Translating description ({} chars)", text.len());

    let response = reqwest::get(&url)
        .await
        .map_err(|e| FetchError::Translation(e.to_string()))?;

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Translation(e.to_string()))?;

    parse_translation(&body)
}

fn parse_translation(body: &str) -> Result<String, FetchError> {
    let payload: TranslationPayload =
        serde_json::from_str(body).map_err(|e| FetchError::Translation(e.to_string()))?;

    let translated = payload.response_data.translated_text;
    if translated.is_empty() {
        return Err(FetchError::Translation("empty translatedText".to_string()));
    }

    Ok(translated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_translated_text() {
        let body = r#"{ "responseData": { "translatedText": "Un pico" } }"#;
        assert_eq!(parse_translation(body).unwrap(), "Un pico");
    }

    #[test]
    fn test_missing_response_data_fails() {
        let body = r#"{ "responseStatus": 403 }"#;
        let outcome = parse_translation(body);
        assert!(matches!(outcome, Err(FetchError::Translation(_))));
    }

    #[test]
    fn test_empty_translated_text_fails() {
        let body = r#"{ "responseData": { "translatedText": "" } }"#;
        let outcome = parse_translation(body);
        assert!(matches!(outcome, Err(FetchError::Translation(_))));
    }
}
