use std::sync::Arc;

use httpmock::prelude::*;
use httpmock::Method::HEAD;
use pony_github::comment_event::CommentEvent;
use pony_plugin::{
    GithubApiClient, HeadRequestSizePolicy, PonyApiImageSource, PonyCommandHandler,
    PonyHandlerError, DEFAULT_MAX_IMAGE_BYTES, NO_MATCHING_PONY_MESSAGE, PONY_FETCH_MAX_ATTEMPTS,
};
use serde_json::json;

fn webhook_event(body: &str) -> CommentEvent {
    let payload = json!({
        "action": "created",
        "comment": {
            "body": body,
            "html_url": "https://github.com/octo/herd/pull/7#issuecomment-70",
            "user": { "login": "bob" }
        },
        "issue": { "number": 7 },
        "repository": { "name": "herd", "owner": { "login": "octo" } }
    });
    CommentEvent::from_webhook_payload(&payload.to_string()).expect("event")
}

fn wired_handler(server: &MockServer) -> PonyCommandHandler {
    let http = reqwest::Client::new();
    let size_policy = Arc::new(HeadRequestSizePolicy::new(
        http.clone(),
        DEFAULT_MAX_IMAGE_BYTES,
    ));
    let source = Arc::new(PonyApiImageSource::new(
        http,
        server.url("/api/v1/pony/random"),
        size_policy,
    ));
    let github =
        GithubApiClient::new(server.base_url(), "token".to_string(), 2_000).expect("github client");
    PonyCommandHandler::new(source, Arc::new(github)).with_service_label(server.base_url())
}

#[tokio::test]
async fn integration_pony_comment_posts_linked_thumbnails_for_each_tag() {
    let server = MockServer::start();
    let applejack = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/pony/random")
            .query_param("q", "Applejack");
        then.status(200).json_body(json!({
            "pony": { "representations": {
                "full": "https://img.example/applejack-full.png",
                "small": server.url("/img/applejack-small.png")
            } }
        }));
    });
    let rarity = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/pony/random")
            .query_param("q", "Rarity");
        then.status(200).json_body(json!({
            "pony": { "representations": {
                "full": "https://img.example/rarity-full.png",
                "small": server.url("/img/rarity-small.png")
            } }
        }));
    });
    let applejack_thumbnail = server.mock(|when, then| {
        when.method(HEAD).path("/img/applejack-small.png");
        then.status(200);
    });
    let rarity_thumbnail = server.mock(|when, then| {
        when.method(HEAD).path("/img/rarity-small.png");
        then.status(200);
    });
    let reply = server.mock(|when, then| {
        when.method(POST)
            .path("/repos/octo/herd/issues/7/comments")
            .body_includes("@bob: [![pony image](")
            .body_includes("applejack-small.png)](https://img.example/applejack-full.png)")
            .body_includes("rarity-small.png)](https://img.example/rarity-full.png)");
        then.status(201).json_body(json!({ "id": 1, "html_url": null }));
    });

    let report = wired_handler(&server)
        .handle(&webhook_event(
            "Nice work!\n/pony Applejack\n/pony Rarity",
        ))
        .await
        .expect("handled")
        .expect("report");

    assert_eq!(report.invocations, 2);
    assert_eq!(report.images_posted, 2);
    applejack.assert_calls(1);
    rarity.assert_calls(1);
    applejack_thumbnail.assert_calls(1);
    rarity_thumbnail.assert_calls(1);
    reply.assert_calls(1);
}

#[tokio::test]
async fn regression_pony_comment_falls_back_when_thumbnail_check_fails() {
    let server = MockServer::start();
    let lookup = server.mock(|when, then| {
        when.method(GET).path("/api/v1/pony/random");
        then.status(200).json_body(json!({
            "pony": { "representations": {
                "full": "https://img.example/full.png",
                "small": server.url("/img/gone.png")
            } }
        }));
    });
    let thumbnail = server.mock(|when, then| {
        when.method(HEAD).path("/img/gone.png");
        then.status(410);
    });
    let reply = server.mock(|when, then| {
        when.method(POST)
            .path("/repos/octo/herd/issues/7/comments")
            .body_includes(NO_MATCHING_PONY_MESSAGE);
        then.status(201).json_body(json!({ "id": 2 }));
    });

    let error = wired_handler(&server)
        .handle(&webhook_event("/pony Derpy"))
        .await
        .expect_err("no pony");

    assert!(matches!(error, PonyHandlerError::NoImageFound));
    lookup.assert_calls(PONY_FETCH_MAX_ATTEMPTS);
    thumbnail.assert_calls(PONY_FETCH_MAX_ATTEMPTS);
    reply.assert_calls(1);
}
