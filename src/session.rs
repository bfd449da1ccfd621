//! Search session state machine.
//!
//! Coordinates topic submission against the recommendation client: Idle until
//! the first query, Loading while a request is outstanding, then Success
//! (possibly with zero results) or Failed. Any resubmission restarts from
//! Loading and discards prior results immediately.
//!
//! Requests carry a monotonically increasing ticket. Only the response whose
//! ticket matches the session's current one is applied, so a stale response
//! that resolves after a newer submission is discarded rather than displayed.
//! No parallel in-flight requests exist from the session's point of view; a
//! superseded request is simply inert.
//!
//! Audience-level policy: while no query is committed, changing the level only
//! affects the next submission. Once a query is committed, changing the level
//! immediately re-enters Loading with the same topic and hands the caller a
//! fresh ticket for the refetch.

use crate::{
    gemini::{GeminiClient, RecommendError},
    types::{AudienceLevel, BookRecommendation, RecommendationSet},
    warning,
};

pub const EMPTY_TOPIC_MESSAGE: &str = "Please enter a historical topic.";
pub const FETCH_FAILED_MESSAGE: &str =
    "Failed to get recommendations. Please check your connection or API key and try again.";

/// Local rejection of a submission; no network call was made and the session
/// state is unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    Idle,
    Loading,
    Success {
        recommendations: Vec<BookRecommendation>,
        related_topics: Vec<String>,
    },
    Failed {
        message: String,
    },
}

pub struct SearchSession {
    query: Option<String>,
    level: AudienceLevel,
    state: SearchState,
    ticket: u64,
}

impl SearchSession {
    pub fn new(level: AudienceLevel) -> Self {
        Self {
            query: None,
            level,
            state: SearchState::Idle,
            ticket: 0,
        }
    }

    /// Commits a topic and enters Loading, returning the request ticket the
    /// eventual response must present. An empty or whitespace-only topic is
    /// rejected locally without any state change.
    pub fn submit(&mut self, topic: &str) -> Result<u64, ValidationError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(ValidationError {
                message: EMPTY_TOPIC_MESSAGE.to_string(),
            });
        }

        self.query = Some(topic.to_string());
        Ok(self.begin_loading())
    }

    /// Changes the audience level. With a committed query this re-enters
    /// Loading for the same topic and returns the refetch ticket; otherwise
    /// the new level simply applies to the next submission.
    pub fn set_audience_level(&mut self, level: AudienceLevel) -> Option<u64> {
        self.level = level;
        self.query.as_ref()?;
        Some(self.begin_loading())
    }

    /// Applies a successful response. Returns false (and changes nothing)
    /// when the ticket is stale, i.e. a newer submission superseded it.
    pub fn complete(&mut self, ticket: u64, set: RecommendationSet) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        self.state = SearchState::Success {
            recommendations: set.recommendations,
            related_topics: set.related_topics,
        };
        true
    }

    /// Applies a failed response with a user-facing message. Prior results
    /// were already cleared on submission. Stale tickets change nothing.
    pub fn fail(&mut self, ticket: u64, message: String) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        self.state = SearchState::Failed { message };
        true
    }

    /// Submits the topic and drives one fetch against the client, applying
    /// the outcome under the ticket guard.
    pub async fn search(
        &mut self,
        client: &GeminiClient,
        topic: &str,
    ) -> Result<(), ValidationError> {
        let ticket = self.submit(topic)?;
        let query = self.query.clone().unwrap_or_default();

        match client.fetch_recommendations(&query, self.level).await {
            Ok(set) => {
                self.complete(ticket, set);
            }
            Err(e) => {
                self.log_fetch_error(&e);
                self.fail(ticket, FETCH_FAILED_MESSAGE.to_string());
            }
        }

        Ok(())
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn level(&self) -> AudienceLevel {
        self.level
    }

    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    fn begin_loading(&mut self) -> u64 {
        self.state = SearchState::Loading;
        self.ticket += 1;
        self.ticket
    }

    fn is_current(&self, ticket: u64) -> bool {
        ticket == self.ticket && matches!(self.state, SearchState::Loading)
    }

    fn log_fetch_error(&self, err: &RecommendError) {
        warning!("Recommendation fetch failed: {:?}", err);
    }
}
