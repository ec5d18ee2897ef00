//! Integration tests for feed fetching and parsing against a mock server.

mod support;

use chrono::NaiveDate;
use podfetch_core::{DownloadError, FeedError, HttpClient, fetch_feed, parse_feed};
use support::{mount_bytes, mount_status, mount_three_episode_show, rss_document, rss_item};
use wiremock::MockServer;

#[tokio::test]
async fn test_fetch_and_parse_feed_preserves_document_order() {
    let mock_server = MockServer::start().await;
    mount_three_episode_show(&mock_server).await;

    let client = HttpClient::new();
    let xml = fetch_feed(&client, &format!("{}/feed.xml", mock_server.uri()))
        .await
        .expect("feed should be fetched");
    let episodes = parse_feed(&xml).expect("feed should parse");

    let dates: Vec<NaiveDate> = episodes.iter().map(|e| e.publication_date()).collect();
    assert_eq!(
        dates,
        vec![
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        ]
    );
    assert!(episodes[0].media_url().ends_with("/media/c.mp3"));
}

#[test]
fn test_incomplete_items_reduce_count_by_exactly_their_number() {
    let complete = ["Mon", "Tue", "Wed", "Thu", "Fri"]
        .iter()
        .zip(1..)
        .map(|(weekday, day)| {
            rss_item(
                &format!("{weekday}, 0{day} Jan 2024 06:00:00 +0000"),
                &format!("https://cdn.example.com/{day}.mp3"),
            )
        })
        .collect::<String>();
    let incomplete = [
        "<item><title>no date</title><content:encoded>https://cdn.example.com/x.mp3</content:encoded></item>",
        "<item><pubDate>Sat, 06 Jan 2024 06:00:00 +0000</pubDate></item>",
        "<item><title>nothing useful</title></item>",
    ]
    .concat();

    let all = parse_feed(&rss_document(&format!("{complete}{incomplete}"))).unwrap();
    let only_complete = parse_feed(&rss_document(&complete)).unwrap();

    assert_eq!(only_complete.len(), 5);
    assert_eq!(all, only_complete);
}

#[tokio::test]
async fn test_fetch_feed_http_error_is_reported() {
    let mock_server = MockServer::start().await;
    mount_status(&mock_server, "/feed.xml", 404).await;

    let client = HttpClient::new();
    let result = fetch_feed(&client, &format!("{}/feed.xml", mock_server.uri())).await;

    match result {
        Err(DownloadError::HttpStatus { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected HttpStatus error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_feed_connection_refused_is_network_error() {
    // Port 1 is reserved (tcpmux) and not listening on test hosts.
    let client = HttpClient::new();
    let result = fetch_feed(&client, "http://127.0.0.1:1/feed.xml").await;

    assert!(
        matches!(result, Err(DownloadError::Network { .. })),
        "expected Network error, got {result:?}"
    );
}

#[tokio::test]
async fn test_fetched_html_page_fails_to_parse() {
    let mock_server = MockServer::start().await;
    mount_bytes(&mock_server, "/feed.xml", b"<html><body>moved<br></body></html>").await;

    let client = HttpClient::new();
    let body = fetch_feed(&client, &format!("{}/feed.xml", mock_server.uri()))
        .await
        .unwrap();

    assert!(matches!(parse_feed(&body), Err(FeedError::Xml { .. })));
}

#[tokio::test]
async fn test_fetch_and_parse_feed_without_rss_envelope() {
    let mock_server = MockServer::start().await;
    let body = format!(
        r#"<feed xmlns:content="http://purl.org/rss/1.0/modules/content/">{}</feed>"#,
        rss_item("Mon, 01 Jan 2024 06:00:00 +0100", "https://cdn.example.com/a.mp3")
    );
    mount_bytes(&mock_server, "/feed.xml", body.as_bytes()).await;

    let client = HttpClient::new();
    let xml = fetch_feed(&client, &format!("{}/feed.xml", mock_server.uri()))
        .await
        .unwrap();
    let episodes = parse_feed(&xml).unwrap();

    assert_eq!(episodes.len(), 1);
    assert_eq!(episodes[0].media_url(), "https://cdn.example.com/a.mp3");
}
