//! The search session state machine.
//!
//! Holds the current query, the tagged session phase and the translation
//! state, and decides which network responses are still authoritative.
//! Every fetch is tagged with a monotonically increasing request id; a
//! response whose id no longer matches the pending request is discarded,
//! so overlapping searches can never overwrite newer state.

use thiserror::Error;

use crate::api::FetchError;
use super::data::SearchResult;

/// Fixed user-facing message for any failed search fetch.
///
/// Transport and malformed-payload failures are deliberately not
/// distinguished in the UI; the detail goes to the logs.
pub const SEARCH_FAILED: &str = "Failed to generate image. Please try again.";

/// Fixed user-facing message for a failed translation request
pub const TRANSLATION_FAILED: &str = "Failed to translate description. Please try again.";

/// Rejections raised before any network call is made
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("Please enter a search term")]
    EmptyQuery,
}

/// Exactly one variant holds at any time
#[derive(Debug, Clone, PartialEq)]
pub enum SessionPhase {
    /// No search submitted yet
    Idle,
    /// A fetch is in flight
    Loading,
    /// The latest fetch produced a photo
    Success(SearchResult),
    /// The latest fetch (or validation) failed; message is user-facing
    Error(String),
}

/// Permission to run one search fetch, tagged with its request id
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTicket {
    pub id: u64,
    pub query: String,
}

/// Permission to run one translation fetch for the current result
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationTicket {
    pub id: u64,
    pub text: String,
}

/// State machine: Idle → Loading → {Success | Error}, with any submit
/// re-entering Loading.
#[derive(Debug)]
pub struct SearchSession {
    query: String,
    phase: SessionPhase,
    translation: Option<String>,
    translation_error: Option<String>,
    /// Id of the most recently issued fetch
    request_counter: u64,
    /// Id of the fetch whose response is still awaited, if any
    in_flight: Option<u64>,
}

impl SearchSession {
    pub fn new() -> Self {
        SearchSession {
            query: String::new(),
            phase: SessionPhase::Idle,
            translation: None,
            translation_error: None,
            request_counter: 0,
            in_flight: None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SessionPhase::Loading)
    }

    /// The currently displayed result, if the last fetch succeeded
    pub fn result(&self) -> Option<&SearchResult> {
        match &self.phase {
            SessionPhase::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn translation(&self) -> Option<&str> {
        self.translation.as_deref()
    }

    pub fn translation_error(&self) -> Option<&str> {
        self.translation_error.as_deref()
    }

    /// Whether `id` refers to the fetch that produced the current result
    pub fn is_current(&self, id: u64) -> bool {
        id == self.request_counter && matches!(self.phase, SessionPhase::Success(_))
    }

    /// Start a new search for the held query.
    ///
    /// A trimmed-empty query is rejected without issuing a ticket (and
    /// therefore without a network call); the rejection surfaces through
    /// the Error phase. Otherwise the previous result and translation are
    /// cleared and the session enters Loading.
    pub fn begin_search(&mut self) -> Result<SearchTicket, SessionError> {
        if self.query.trim().is_empty() {
            self.in_flight = None;
            self.phase = SessionPhase::Error(SessionError::EmptyQuery.to_string());
            return Err(SessionError::EmptyQuery);
        }

        self.translation = None;
        self.translation_error = None;
        self.request_counter += 1;
        self.in_flight = Some(self.request_counter);
        self.phase = SessionPhase::Loading;

        Ok(SearchTicket {
            id: self.request_counter,
            query: self.query.clone(),
        })
    }

    /// Apply the outcome of a search fetch.
    ///
    /// Returns `false` when the response is stale (superseded by a newer
    /// submit, or a duplicate of one already applied); stale responses
    /// leave the session untouched.
    pub fn complete_search(
        &mut self,
        id: u64,
        outcome: Result<SearchResult, FetchError>,
    ) -> bool {
        if self.in_flight != Some(id) {
            println!("🕑 Discarding stale search response (request {})", id);
            return false;
        }
        self.in_flight = None;

        match outcome {
            Ok(result) => {
                self.phase = SessionPhase::Success(result);
            }
            Err(e) => {
                eprintln!("❌ Search failed: {}", e);
                self.phase = SessionPhase::Error(SEARCH_FAILED.to_string());
            }
        }

        true
    }

    /// Request a translation of the current description.
    ///
    /// `None` (no-op) unless the session holds a result with a
    /// description. The ticket is tagged with the current request id so a
    /// translation arriving after the next search is discarded.
    pub fn begin_translation(&mut self) -> Option<TranslationTicket> {
        let result = self.result()?;
        if result.description.is_empty() {
            return None;
        }

        Some(TranslationTicket {
            id: self.request_counter,
            text: result.description.clone(),
        })
    }

    /// Apply the outcome of a translation fetch.
    ///
    /// A failure keeps the existing result and surfaces only the
    /// translation-specific message; the original description is always
    /// retained alongside a successful translation.
    pub fn apply_translation(&mut self, id: u64, outcome: Result<String, FetchError>) -> bool {
        if !self.is_current(id) {
            println!("🕑 Discarding stale translation (request {})", id);
            return false;
        }

        match outcome {
            Ok(text) => {
                self.translation = Some(text);
                self.translation_error = None;
            }
            Err(e) => {
                eprintln!("❌ Translation failed: {}", e);
                self.translation_error = Some(TRANSLATION_FAILED.to_string());
            }
        }

        true
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result(query: &str) -> SearchResult {
        SearchResult {
            image_url: "https://img/1".to_string(),
            photographer: "Ana".to_string(),
            description: "A peak".to_string(),
            query: query.to_string(),
        }
    }

    fn session_with_query(query: &str) -> SearchSession {
        let mut session = SearchSession::new();
        session.set_query(query.to_string());
        session
    }

    #[test]
    fn test_empty_query_is_rejected_without_a_ticket() {
        let mut session = session_with_query("   ");

        let outcome = session.begin_search();

        assert_eq!(outcome, Err(SessionError::EmptyQuery));
        assert_eq!(
            session.phase(),
            &SessionPhase::Error("Please enter a search term".to_string())
        );
        assert!(!session.is_loading());
    }

    #[test]
    fn test_successful_search_reaches_success() {
        let mut session = session_with_query("mountains");

        let ticket = session.begin_search().unwrap();
        assert!(session.is_loading());
        assert_eq!(ticket.query, "mountains");

        let applied = session.complete_search(ticket.id, Ok(sample_result("mountains")));

        assert!(applied);
        assert_eq!(session.result(), Some(&sample_result("mountains")));
    }

    #[test]
    fn test_failed_search_surfaces_fixed_message_and_no_partial_result() {
        let mut session = session_with_query("mountains");
        let ticket = session.begin_search().unwrap();

        let applied = session.complete_search(
            ticket.id,
            Err(FetchError::MalformedResponse("missing urls.regular".into())),
        );

        assert!(applied);
        assert_eq!(session.result(), None);
        assert_eq!(
            session.phase(),
            &SessionPhase::Error(SEARCH_FAILED.to_string())
        );
    }

    #[test]
    fn test_superseded_response_is_discarded() {
        let mut session = session_with_query("mountains");
        let first = session.begin_search().unwrap();
        let second = session.begin_search().unwrap();

        // The older fetch resolves after the newer one was issued
        let applied = session.complete_search(first.id, Ok(sample_result("stale")));
        assert!(!applied);
        assert!(session.is_loading());

        let applied = session.complete_search(second.id, Ok(sample_result("mountains")));
        assert!(applied);
        assert_eq!(session.result().unwrap().query, "mountains");
    }

    #[test]
    fn test_duplicate_response_is_discarded() {
        let mut session = session_with_query("mountains");
        let ticket = session.begin_search().unwrap();

        assert!(session.complete_search(ticket.id, Ok(sample_result("mountains"))));
        assert!(!session.complete_search(
            ticket.id,
            Err(FetchError::Transport("late failure".into()))
        ));

        // The applied success is untouched by the late duplicate
        assert!(session.result().is_some());
    }

    #[test]
    fn test_retry_reuses_the_held_query() {
        let mut session = session_with_query("mountains");
        let first = session.begin_search().unwrap();
        session.complete_search(first.id, Err(FetchError::Transport("HTTP 500".into())));

        let retry = session.begin_search().unwrap();
        assert_eq!(retry.query, "mountains");
        assert!(retry.id > first.id);
        assert!(session.is_loading());
    }

    #[test]
    fn test_new_search_clears_previous_translation() {
        let mut session = session_with_query("mountains");
        let ticket = session.begin_search().unwrap();
        session.complete_search(ticket.id, Ok(sample_result("mountains")));

        let translation = session.begin_translation().unwrap();
        session.apply_translation(translation.id, Ok("Un pico".to_string()));
        assert_eq!(session.translation(), Some("Un pico"));

        session.begin_search().unwrap();
        assert_eq!(session.translation(), None);
    }

    #[test]
    fn test_translation_requires_a_result() {
        let mut session = session_with_query("mountains");
        assert_eq!(session.begin_translation(), None);

        let ticket = session.begin_search().unwrap();
        assert_eq!(session.begin_translation(), None); // still loading

        session.complete_search(ticket.id, Ok(sample_result("mountains")));
        let translation = session.begin_translation().unwrap();
        assert_eq!(translation.text, "A peak");
    }

    #[test]
    fn test_translation_failure_keeps_the_result() {
        let mut session = session_with_query("mountains");
        let ticket = session.begin_search().unwrap();
        session.complete_search(ticket.id, Ok(sample_result("mountains")));

        let translation = session.begin_translation().unwrap();
        session.apply_translation(
            translation.id,
            Err(FetchError::Translation("missing translatedText".into())),
        );

        assert_eq!(session.result(), Some(&sample_result("mountains")));
        assert_eq!(
            session.translation_error(),
            Some(TRANSLATION_FAILED)
        );
        assert_eq!(session.translation(), None);
    }

    #[test]
    fn test_repeated_translation_of_the_same_description_is_idempotent() {
        let mut session = session_with_query("mountains");
        let ticket = session.begin_search().unwrap();
        session.complete_search(ticket.id, Ok(sample_result("mountains")));

        let first = session.begin_translation().unwrap();
        let second = session.begin_translation().unwrap();
        assert_eq!(first, second);

        session.apply_translation(first.id, Ok("Un pico".to_string()));
        session.apply_translation(second.id, Ok("Un pico".to_string()));
        assert_eq!(session.translation(), Some("Un pico"));
    }

    #[test]
    fn test_translation_for_a_superseded_search_is_discarded() {
        let mut session = session_with_query("mountains");
        let first = session.begin_search().unwrap();
        session.complete_search(first.id, Ok(sample_result("mountains")));
        let translation = session.begin_translation().unwrap();

        // A new search starts before the translation resolves
        let second = session.begin_search().unwrap();
        session.complete_search(second.id, Ok(sample_result("rivers")));

        let applied = session.apply_translation(translation.id, Ok("Un pico".to_string()));
        assert!(!applied);
        assert_eq!(session.translation(), None);
    }
}
