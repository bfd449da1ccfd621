use shelfcli::session::{EMPTY_TOPIC_MESSAGE, SearchSession, SearchState};
use shelfcli::types::{AudienceLevel, BookRecommendation, RecommendationSet};

// Helper function to create a test book
fn create_test_book(title: &str) -> BookRecommendation {
    BookRecommendation {
        title: title.to_string(),
        author: "An Author".to_string(),
        summary: format!("A summary of {}", title),
        purchase_link: "https://example.com/buy".to_string(),
        cover_image_url: "https://example.com/cover.jpg".to_string(),
    }
}

fn create_test_set(books: &[&str], topics: &[&str]) -> RecommendationSet {
    RecommendationSet {
        recommendations: books.iter().map(|t| create_test_book(t)).collect(),
        related_topics: topics.iter().map(|t| t.to_string()).collect(),
    }
}

#[test]
fn test_starts_idle() {
    let session = SearchSession::new(AudienceLevel::General);

    assert_eq!(*session.state(), SearchState::Idle);
    assert!(session.query().is_none());
}

#[test]
fn test_empty_topic_is_rejected_without_transition() {
    let mut session = SearchSession::new(AudienceLevel::General);

    let err = session.submit("   ").unwrap_err();
    assert_eq!(err.message, EMPTY_TOPIC_MESSAGE);

    assert_eq!(*session.state(), SearchState::Idle);
    assert!(session.query().is_none());
    assert_eq!(session.ticket(), 0);
}

#[test]
fn test_submit_enters_loading_with_trimmed_query() {
    let mut session = SearchSession::new(AudienceLevel::General);

    let ticket = session.submit("  The Silk Road  ").unwrap();

    assert_eq!(ticket, 1);
    assert_eq!(*session.state(), SearchState::Loading);
    assert_eq!(session.query(), Some("The Silk Road"));
}

#[test]
fn test_loading_to_success() {
    let mut session = SearchSession::new(AudienceLevel::General);
    let ticket = session.submit("The Silk Road").unwrap();

    let set = create_test_set(
        &["The Silk Roads", "Life Along the Silk Road", "The Golden Peaches of Samarkand"],
        &["The Mongol Empire", "Maritime trade routes", "The Sogdians", "Tang dynasty China"],
    );
    assert!(session.complete(ticket, set));

    match session.state() {
        SearchState::Success {
            recommendations,
            related_topics,
        } => {
            assert_eq!(recommendations.len(), 3);
            assert_eq!(related_topics.len(), 4);
        }
        other => panic!("expected Success, got {:?}", other),
    }
}

#[test]
fn test_loading_to_failed() {
    let mut session = SearchSession::new(AudienceLevel::General);
    let ticket = session.submit("The Silk Road").unwrap();

    assert!(session.fail(ticket, "Failed to get recommendations.".to_string()));

    assert_eq!(
        *session.state(),
        SearchState::Failed {
            message: "Failed to get recommendations.".to_string()
        }
    );
}

#[test]
fn test_empty_results_are_success_not_failure() {
    let mut session = SearchSession::new(AudienceLevel::General);
    let ticket = session.submit("An obscure topic").unwrap();

    session.complete(ticket, RecommendationSet::default());

    match session.state() {
        SearchState::Success {
            recommendations, ..
        } => assert!(recommendations.is_empty()),
        other => panic!("expected Success, got {:?}", other),
    }
}

#[test]
fn test_resubmission_clears_prior_results_immediately() {
    let mut session = SearchSession::new(AudienceLevel::General);
    let ticket = session.submit("The Silk Road").unwrap();
    session.complete(ticket, create_test_set(&["The Silk Roads"], &[]));

    session.submit("The Mongol Empire").unwrap();

    // Prior results must not linger while the new query loads
    assert_eq!(*session.state(), SearchState::Loading);
    assert_eq!(session.query(), Some("The Mongol Empire"));
}

#[test]
fn test_stale_response_is_discarded() {
    let mut session = SearchSession::new(AudienceLevel::General);

    let ticket_a = session.submit("Topic A").unwrap();
    let ticket_b = session.submit("Topic B").unwrap();

    // B resolves first
    assert!(session.complete(ticket_b, create_test_set(&["Book B"], &[])));

    // A resolves late; it must not be applied
    assert!(!session.complete(ticket_a, create_test_set(&["Book A"], &[])));

    match session.state() {
        SearchState::Success {
            recommendations, ..
        } => assert_eq!(recommendations[0].title, "Book B"),
        other => panic!("expected Success, got {:?}", other),
    }
}

#[test]
fn test_stale_failure_is_discarded() {
    let mut session = SearchSession::new(AudienceLevel::General);

    let ticket_a = session.submit("Topic A").unwrap();
    let ticket_b = session.submit("Topic B").unwrap();

    assert!(session.complete(ticket_b, create_test_set(&["Book B"], &[])));
    assert!(!session.fail(ticket_a, "too late".to_string()));

    assert!(matches!(session.state(), SearchState::Success { .. }));
}

#[test]
fn test_level_change_while_idle_only_affects_next_submission() {
    let mut session = SearchSession::new(AudienceLevel::General);

    assert!(session.set_audience_level(AudienceLevel::Graduate).is_none());
    assert_eq!(*session.state(), SearchState::Idle);
    assert_eq!(session.level(), AudienceLevel::Graduate);
}

#[test]
fn test_level_change_after_committed_query_refetches() {
    let mut session = SearchSession::new(AudienceLevel::General);
    let ticket = session.submit("The Silk Road").unwrap();
    session.complete(ticket, create_test_set(&["The Silk Roads"], &[]));

    let refetch = session.set_audience_level(AudienceLevel::Undergraduate);

    let new_ticket = refetch.expect("committed query should trigger a refetch");
    assert!(new_ticket > ticket);
    assert_eq!(*session.state(), SearchState::Loading);
    assert_eq!(session.query(), Some("The Silk Road"));
    assert_eq!(session.level(), AudienceLevel::Undergraduate);

    // The stale result for the old level can no longer land
    assert!(!session.complete(ticket, create_test_set(&["Old"], &[])));
}

#[test]
fn test_level_change_during_loading_supersedes_in_flight_request() {
    let mut session = SearchSession::new(AudienceLevel::General);
    let ticket = session.submit("The Silk Road").unwrap();

    let new_ticket = session
        .set_audience_level(AudienceLevel::Graduate)
        .expect("committed query should trigger a refetch");

    assert!(!session.complete(ticket, create_test_set(&["Old"], &[])));
    assert!(session.complete(new_ticket, create_test_set(&["New"], &[])));
}
