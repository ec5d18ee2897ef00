//! Shared helpers for integration tests: RSS fixtures and mock HTTP mounts.

#![allow(dead_code)]

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Wraps `items` in an RSS 2.0 channel declaring the content namespace.
pub fn rss_document(items: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:content="http://purl.org/rss/1.0/modules/content/">
  <channel>
    <title>Test Show</title>
    <link>https://example.com</link>
    <description>Integration test feed</description>
    {items}
  </channel>
</rss>"#
    )
}

/// One complete `<item>` with a `pubDate` and a `content:encoded` URL.
pub fn rss_item(pub_date: &str, media_url: &str) -> String {
    format!(
        "<item><pubDate>{pub_date}</pubDate><content:encoded>{media_url}</content:encoded></item>"
    )
}

/// Serves `body` at `GET route`.
pub async fn mount_bytes(server: &MockServer, route: &str, body: &[u8]) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.to_vec()))
        .mount(server)
        .await;
}

/// Serves `status` with an empty body at `GET route`.
pub async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Mounts a feed at `/feed.xml` with items dated 2024-01-01, 2024-02-01
/// and 2024-03-01 pointing at `/media/{a,b,c}.mp3`, plus the media files.
pub async fn mount_three_episode_show(server: &MockServer) {
    let base = server.uri();
    let items = [
        rss_item("Fri, 01 Mar 2024 06:00:00 +0100", &format!("{base}/media/c.mp3")),
        rss_item("Thu, 01 Feb 2024 06:00:00 +0100", &format!("{base}/media/b.mp3")),
        rss_item("Mon, 01 Jan 2024 06:00:00 +0100", &format!("{base}/media/a.mp3")),
    ]
    .concat();

    mount_bytes(server, "/feed.xml", rss_document(&items).as_bytes()).await;
    mount_bytes(server, "/media/a.mp3", b"audio-a").await;
    mount_bytes(server, "/media/b.mp3", b"audio-b").await;
    mount_bytes(server, "/media/c.mp3", b"audio-c").await;
}
