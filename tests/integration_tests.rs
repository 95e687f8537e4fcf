//! End-to-end tests against a mock GroupMe server
//!
//! Exercises the whole stack — typed bindings, HTTP client, envelope
//! decoding, and history pagination — over real HTTP via wiremock.

use futures::{StreamExt, TryStreamExt};
use groupme_client::{Error, GroupMe};
use groupme_client::http::{HttpClientConfig, ACCESS_TOKEN_HEADER};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn group_message(id: &str, text: &str) -> Value {
    json!({
        "id": id,
        "source_guid": format!("guid-{id}"),
        "created_at": 1_302_623_328,
        "user_id": "1000",
        "group_id": "55",
        "name": "Jane",
        "avatar_url": null,
        "text": text,
        "system": false,
        "favorited_by": [],
        "attachments": []
    })
}

fn direct_message(id: &str, text: &str) -> Value {
    json!({
        "id": id,
        "source_guid": format!("guid-{id}"),
        "created_at": 1_302_623_328,
        "user_id": "1000",
        "recipient_id": "2000",
        "name": "Jane",
        "avatar_url": null,
        "text": text,
        "system": false,
        "favorited_by": [],
        "attachments": []
    })
}

fn messages_page(ids_and_texts: &[(&str, &str)], total: u64) -> Value {
    json!({
        "response": {
            "count": total,
            "messages": ids_and_texts
                .iter()
                .map(|(id, text)| group_message(id, text))
                .collect::<Vec<_>>()
        },
        "meta": { "code": 200 }
    })
}

async fn client_for(server: &MockServer) -> GroupMe {
    let config = HttpClientConfig::builder()
        .base_url(server.uri())
        .build();
    GroupMe::with_config(config, "test-token").unwrap()
}

#[tokio::test]
async fn history_walks_all_pages_in_order() {
    let server = MockServer::start().await;

    // Specific cursors first, the cursorless opening fetch as the fallback.
    Mock::given(method("GET"))
        .and(path("/groups/55/messages"))
        .and(query_param("before_id", "m4"))
        .and(query_param("limit", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(messages_page(&[("m3", "three"), ("m2", "two")], 4)),
        )
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/groups/55/messages"))
        .and(query_param("before_id", "m2"))
        .respond_with(ResponseTemplate::new(304))
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/groups/55/messages"))
        .and(header(ACCESS_TOKEN_HEADER, "test-token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(messages_page(&[("m5", "five"), ("m4", "four")], 4)),
        )
        .with_priority(5)
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let group = client.group_messages("55");

    let texts: Vec<String> = group
        .history(None, Some(2))
        .map_ok(|m| m.text.unwrap_or_default())
        .try_collect()
        .await
        .unwrap();

    assert_eq!(texts, vec!["five", "four", "three", "two"]);
}

#[tokio::test]
async fn history_aborts_on_api_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/groups/55/messages"))
        .and(query_param("before_id", "m4"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "meta": { "code": 500, "errors": ["rate limited"] }
        })))
        .with_priority(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/groups/55/messages"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(messages_page(&[("m5", "five"), ("m4", "four")], 10)),
        )
        .with_priority(5)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let group = client.group_messages("55");

    let results: Vec<_> = group.history(None, None).collect().await;

    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(results[1].is_ok());
    match results[2].as_ref().unwrap_err() {
        Error::Api { status, errors } => {
            assert_eq!(*status, 500);
            assert_eq!(errors, &vec!["rate limited".to_string()]);
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn history_honors_starting_cursor() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/groups/55/messages"))
        .and(query_param("before_id", "m10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(messages_page(&[("m9", "nine")], 9)))
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/groups/55/messages"))
        .and(query_param("before_id", "m9"))
        .respond_with(ResponseTemplate::new(304))
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let group = client.group_messages("55");

    let ids: Vec<String> = group
        .history(Some("m10".to_string()), None)
        .map_ok(|m| m.id)
        .try_collect()
        .await
        .unwrap();

    assert_eq!(ids, vec!["m9"]);
}

#[tokio::test]
async fn group_index_returns_typed_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/groups/55/messages"))
        .and(query_param("since_id", "m1"))
        .and(query_param("limit", "20"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(messages_page(&[("m2", "newest")], 2)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;

    let envelope = client
        .group_messages("55")
        .index(None, Some("m1"), Some(20))
        .await
        .unwrap();

    assert_eq!(envelope.meta.code, 200);
    let index = envelope.response.unwrap();
    assert_eq!(index.count, 2);
    assert_eq!(index.messages[0].id, "m2");
}

#[tokio::test]
async fn direct_message_history_pages_by_cursor() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/direct_messages"))
        .and(query_param("other_user_id", "2000"))
        .and(query_param("before_id", "d1"))
        .respond_with(ResponseTemplate::new(304))
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/direct_messages"))
        .and(query_param("other_user_id", "2000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {
                "count": 2,
                "direct_messages": [direct_message("d2", "hi"), direct_message("d1", "hello")]
            },
            "meta": { "code": 200 }
        })))
        .with_priority(5)
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let conversation = client.direct_messages("2000");

    let ids: Vec<String> = conversation
        .history(None)
        .map_ok(|m| m.id)
        .try_collect()
        .await
        .unwrap();

    assert_eq!(ids, vec!["d2", "d1"]);
}
