//! Integration tests for the search client and view state machine against a
//! mock endpoint served over real HTTP.

mod helpers;

use devsearch_core::snippet::render_plain;
use devsearch_core::{FetchError, ResultsPanel, SearchClient, SearchView};
use helpers::{closed_endpoint, MockEndpoint, CORPUS_SIZE};

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetches_and_decodes_a_page() {
    let mock = MockEndpoint::start().await;
    let client = SearchClient::new(&mock.url("/search")).unwrap();

    let resp = client.fetch_page("python", 2).await.unwrap();
    assert_eq!(resp.page, 2);
    assert_eq!(resp.total_results, CORPUS_SIZE);
    assert_eq!(resp.results.len(), 10);
    assert_eq!(resp.results[0].title, "python #10");
    assert_eq!(mock.hits(), vec![("python".to_string(), 2)]);
}

#[tokio::test]
async fn query_is_url_encoded() {
    let mock = MockEndpoint::start().await;
    let client = SearchClient::new(&mock.url("/search")).unwrap();

    let query = "c++ & node.js?page=9";
    let resp = client.fetch_page(query, 1).await.unwrap();
    assert_eq!(resp.page, 1);
    assert_eq!(mock.hits(), vec![(query.to_string(), 1)]);
}

#[tokio::test]
async fn page_zero_is_passed_through() {
    let mock = MockEndpoint::start().await;
    let client = SearchClient::new(&mock.url("/search")).unwrap();

    let resp = client.fetch_page("python", 0).await.unwrap();
    assert_eq!(resp.page, 0);
    assert_eq!(resp.results[0].title, "python #0");
    assert_eq!(mock.hits(), vec![("python".to_string(), 0)]);
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let mock = MockEndpoint::start().await;
    let client = SearchClient::new(&mock.url("/broken")).unwrap();

    let err = client.fetch_page("python", 1).await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)), "unexpected error: {err}");
    assert!(err.to_string().contains("500"), "status missing from: {err}");
}

#[tokio::test]
async fn wrong_shape_is_a_decode_error() {
    let mock = MockEndpoint::start().await;
    let client = SearchClient::new(&mock.url("/wrong-shape")).unwrap();

    let err = client.fetch_page("python", 1).await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)), "unexpected error: {err}");
}

#[tokio::test]
async fn refused_connection_is_a_request_error() {
    let client = SearchClient::new(&closed_endpoint().await).unwrap();

    let err = client.fetch_page("python", 1).await.unwrap_err();
    assert!(matches!(err, FetchError::Request(_)), "unexpected error: {err}");
}

// ---------------------------------------------------------------------------
// Full request/response/render cycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn submit_then_paginate() {
    let mock = MockEndpoint::start().await;
    let client = SearchClient::new(&mock.url("/search")).unwrap();
    let mut view = SearchView::new();

    let ticket = view.submit_query("  rust  ").unwrap();
    let outcome = client.fetch(&ticket).await;
    assert!(view.complete(&ticket, outcome));

    let bar = view.pagination().unwrap();
    assert_eq!(bar.numbered().count(), 3);
    assert!(bar.previous().unwrap().disabled);

    let ticket = view.request_page(3).unwrap();
    let outcome = client.fetch(&ticket).await;
    assert!(view.complete(&ticket, outcome));

    let bar = view.pagination().unwrap();
    assert!(bar.next().unwrap().disabled);
    assert_eq!(bar.numbered().find(|c| c.active).map(|c| c.target), Some(3));

    match view.panel() {
        Some(ResultsPanel::Cards(cards)) => {
            assert_eq!(cards.len(), 5);
            assert_eq!(cards[0].rank, 21);
            assert_eq!(render_plain(&cards[0].snippet, "[", "]"), "about [rust] number 20");
        }
        other => panic!("expected cards, got {other:?}"),
    }

    assert_eq!(mock.hits(), vec![("rust".to_string(), 1), ("rust".to_string(), 3)]);
}

#[tokio::test]
async fn empty_query_never_hits_the_endpoint() {
    let mock = MockEndpoint::start().await;
    let mut view = SearchView::new();

    assert!(view.submit_query("   ").is_none());
    assert_eq!(view.panel(), Some(&ResultsPanel::Prompt));
    assert!(mock.hits().is_empty());
}

#[tokio::test]
async fn no_results_renders_empty_state() {
    let mock = MockEndpoint::start().await;
    let client = SearchClient::new(&mock.url("/search")).unwrap();
    let mut view = SearchView::new();

    let ticket = view.submit_query("nothing").unwrap();
    let outcome = client.fetch(&ticket).await;
    view.complete(&ticket, outcome);

    assert_eq!(view.panel(), Some(&ResultsPanel::NoResults));
    assert!(view.pagination().is_none());
}

#[tokio::test]
async fn failed_fetch_renders_error_card() {
    let client = SearchClient::new(&closed_endpoint().await).unwrap();
    let mut view = SearchView::new();

    let ticket = view.submit_query("python").unwrap();
    assert!(view.is_loading());
    let outcome = client.fetch(&ticket).await;
    view.complete(&ticket, outcome);

    assert!(!view.is_loading());
    assert_eq!(view.panel(), Some(&ResultsPanel::Error));
    assert!(view.pagination().is_none());
}

#[tokio::test]
async fn slower_earlier_response_loses() {
    let mock = MockEndpoint::start().await;
    let client = SearchClient::new(&mock.url("/search")).unwrap();
    let mut view = SearchView::new();

    let first = view.submit_query("python").unwrap();
    let second = view.request_page(2).unwrap();

    // Resolve in request order reversed.
    let second_outcome = client.fetch(&second).await;
    let first_outcome = client.fetch(&first).await;
    assert!(view.complete(&second, second_outcome));
    assert!(!view.complete(&first, first_outcome));

    let bar = view.pagination().unwrap();
    assert_eq!(bar.current, 2);
}
