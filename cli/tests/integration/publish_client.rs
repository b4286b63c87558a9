//! Integration tests for the HTTP publisher against a local mock server.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use httpmock::prelude::*;
use serde_json::json;

use lavadocs_cli::domain::{DocumentPayload, LavadocsConfig, PublishError};
use lavadocs_cli::infra::publisher::UreqPublisher;

fn payload() -> DocumentPayload {
    DocumentPayload {
        title: "My Note".to_string(),
        content: "# Hello\n\nBody".to_string(),
        identifier: "my-note".to_string(),
    }
}

fn config_for(server: &MockServer) -> LavadocsConfig {
    LavadocsConfig {
        credential: "secret-key".to_string(),
        service_address: server.base_url(),
        open_after_publish: false,
    }
}

#[test]
fn test_publish_sends_document_and_credential() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/documents")
            .header("Authorization", "secret-key")
            .header("Content-Type", "application/json")
            .json_body(json!({
                "document": {
                    "title": "My Note",
                    "content": "# Hello\n\nBody",
                    "slug": "my-note"
                }
            }));
        then.status(200)
            .json_body(json!({ "username": "alice", "slug": "my-note" }));
    });

    let doc = UreqPublisher::new()
        .publish_blocking(&payload(), &config_for(&server))
        .unwrap();

    mock.assert();
    assert_eq!(doc.username, "alice");
    assert_eq!(doc.slug, "my-note");
}

#[test]
fn test_publish_to_address_with_trailing_slash() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/documents");
        then.status(200)
            .json_body(json!({ "username": "bob", "slug": "my-note" }));
    });
    let config = LavadocsConfig {
        service_address: format!("{}/", server.base_url()),
        ..config_for(&server)
    };

    UreqPublisher::new()
        .publish_blocking(&payload(), &config)
        .unwrap();
    mock.assert();
}

#[test]
fn test_status_401_is_unauthorized() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/documents");
        then.status(401).json_body(json!({ "error": "Unauthorized" }));
    });

    let err = UreqPublisher::new()
        .publish_blocking(&payload(), &config_for(&server))
        .unwrap_err();

    mock.assert_hits(1);
    assert_eq!(err, PublishError::Unauthorized);
}

#[test]
fn test_unauthorized_error_in_ok_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/documents");
        then.status(200).json_body(json!({ "error": "Unauthorized" }));
    });

    let err = UreqPublisher::new()
        .publish_blocking(&payload(), &config_for(&server))
        .unwrap_err();
    assert_eq!(err, PublishError::Unauthorized);
}

#[test]
fn test_status_404_is_service_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/documents");
        then.status(404).body("Not Found");
    });

    let err = UreqPublisher::new()
        .publish_blocking(&payload(), &config_for(&server))
        .unwrap_err();
    assert_eq!(
        err,
        PublishError::ServiceNotFound {
            address: server.base_url()
        }
    );
}

#[test]
fn test_status_500_is_remote_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/documents");
        then.status(500).body("boom");
    });

    let err = UreqPublisher::new()
        .publish_blocking(&payload(), &config_for(&server))
        .unwrap_err();
    assert_eq!(err, PublishError::Remote("HTTP 500".to_string()));
}

#[test]
fn test_status_422_carries_service_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/documents");
        then.status(422)
            .json_body(json!({ "error": "Slug has already been taken" }));
    });

    let err = UreqPublisher::new()
        .publish_blocking(&payload(), &config_for(&server))
        .unwrap_err();
    assert_eq!(
        err,
        PublishError::Remote("HTTP 422: Slug has already been taken".to_string())
    );
}

#[test]
fn test_unparseable_success_body_is_remote_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/documents");
        then.status(200).body("<html>welcome</html>");
    });

    let err = UreqPublisher::new()
        .publish_blocking(&payload(), &config_for(&server))
        .unwrap_err();
    assert!(
        matches!(&err, PublishError::Remote(msg) if msg.starts_with("invalid response")),
        "got: {err:?}"
    );
}

#[test]
fn test_unknown_scheme_is_transport_or_tls() {
    let config = LavadocsConfig {
        credential: "secret-key".to_string(),
        service_address: "ftp://docs.example.com".to_string(),
        open_after_publish: false,
    };

    let err = UreqPublisher::new()
        .publish_blocking(&payload(), &config)
        .unwrap_err();
    assert!(
        matches!(&err, PublishError::TransportOrTls { address, .. } if address == "ftp://docs.example.com"),
        "got: {err:?}"
    );
}

#[test]
fn test_connection_refused_is_remote_error() {
    let config = LavadocsConfig {
        credential: "secret-key".to_string(),
        service_address: "http://127.0.0.1:1".to_string(),
        open_after_publish: false,
    };

    let err = UreqPublisher::new()
        .publish_blocking(&payload(), &config)
        .unwrap_err();
    assert!(matches!(err, PublishError::Remote(_)), "got: {err:?}");
}

#[test]
fn test_unresolvable_host_named_like_tls_is_remote_error() {
    let config = LavadocsConfig {
        credential: "secret-key".to_string(),
        service_address: "https://ssl.nonexistent-host.invalid".to_string(),
        open_after_publish: false,
    };

    let err = UreqPublisher::new()
        .publish_blocking(&payload(), &config)
        .unwrap_err();
    assert!(matches!(err, PublishError::Remote(_)), "got: {err:?}");
}

#[test]
fn test_null_username_still_counts_as_published() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/documents");
        then.status(200)
            .json_body(json!({ "username": null, "slug": "my-note", "error": null }));
    });

    let doc = UreqPublisher::new()
        .publish_blocking(&payload(), &config_for(&server))
        .unwrap();

    mock.assert_hits(1);
    assert_eq!(doc.username, "");
    assert_eq!(doc.slug, "my-note");
}
