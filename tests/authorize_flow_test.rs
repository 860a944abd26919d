//! Integration tests for the ensure-domain flow against a mock
//! Identity Platform server.

use authdomains::{
    AccessToken, AuthorizeError, DomainAuthorizer, EnsureOutcome, IdentityApiError,
    IdentityPlatformClient, IdentityPlatformClientConfig,
};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_token() -> AccessToken {
    serde_json::from_value(serde_json::json!({
        "access_token": "test-token",
        "expires_in": 3599
    }))
    .unwrap()
}

fn client_for(mock_server: &MockServer) -> IdentityPlatformClient {
    IdentityPlatformClient::new(
        IdentityPlatformClientConfig {
            base_url: mock_server.uri(),
            timeout_secs: 5,
        },
        &test_token(),
    )
    .unwrap()
}

#[tokio::test]
async fn test_absent_domain_is_appended_and_committed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/projects/demo-project/config"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "projects/demo-project/config",
            "authorizedDomains": ["a.com"]
        })))
        .mount(&mock_server)
        .await;

    // The write must name only authorizedDomains in the update mask and
    // carry the appended list in order
    Mock::given(method("PATCH"))
        .and(path("/v2/projects/demo-project/config"))
        .and(query_param("updateMask", "authorizedDomains"))
        .and(body_json(serde_json::json!({
            "authorizedDomains": ["a.com", "b.com"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "projects/demo-project/config",
            "authorizedDomains": ["a.com", "b.com"]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let authorizer = DomainAuthorizer::new(client_for(&mock_server));
    let outcome = authorizer
        .ensure_domain_authorized("demo-project", "b.com")
        .await
        .unwrap();

    assert_eq!(
        outcome,
        EnsureOutcome::Added {
            domains: vec!["a.com".to_string(), "b.com".to_string()]
        }
    );
}

#[tokio::test]
async fn test_present_domain_issues_no_write() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/projects/demo-project/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "authorizedDomains": ["a.com", "b.com"]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let authorizer = DomainAuthorizer::new(client_for(&mock_server));
    let outcome = authorizer
        .ensure_domain_authorized("demo-project", "b.com")
        .await
        .unwrap();

    assert_eq!(
        outcome,
        EnsureOutcome::AlreadyPresent {
            domains: vec!["a.com".to_string(), "b.com".to_string()]
        }
    );
}

#[tokio::test]
async fn test_failed_fetch_issues_no_write() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/projects/demo-project/config"))
        .respond_with(
            ResponseTemplate::new(403).set_body_string(r#"{"error": "PERMISSION_DENIED"}"#),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let authorizer = DomainAuthorizer::new(client_for(&mock_server));
    let err = authorizer
        .ensure_domain_authorized("demo-project", "b.com")
        .await
        .unwrap_err();

    match err {
        AuthorizeError::Api(IdentityApiError::Fetch { status, body }) => {
            assert_eq!(status.as_u16(), 403);
            assert!(body.contains("PERMISSION_DENIED"));
        }
        other => panic!("expected fetch error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_domains_field_is_unsupported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/projects/demo-project/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "projects/demo-project/config"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let authorizer = DomainAuthorizer::new(client_for(&mock_server));
    let err = authorizer
        .ensure_domain_authorized("demo-project", "b.com")
        .await
        .unwrap_err();

    assert!(matches!(err, AuthorizeError::UnsupportedConfig));
}

#[tokio::test]
async fn test_failed_update_surfaces_diagnostics() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/projects/demo-project/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "authorizedDomains": ["a.com"]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/v2/projects/demo-project/config"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string(r#"{"error": "INVALID_ARGUMENT"}"#),
        )
        .mount(&mock_server)
        .await;

    let authorizer = DomainAuthorizer::new(client_for(&mock_server));
    let err = authorizer
        .ensure_domain_authorized("demo-project", "b.com")
        .await
        .unwrap_err();

    match err {
        AuthorizeError::Api(IdentityApiError::Update { status, body }) => {
            assert_eq!(status.as_u16(), 400);
            assert!(body.contains("INVALID_ARGUMENT"));
        }
        other => panic!("expected update error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_existing_order_preserved_on_append() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/projects/demo-project/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "authorizedDomains": ["localhost", "z.com", "a.com"]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("PATCH"))
        .and(body_json(serde_json::json!({
            "authorizedDomains": ["localhost", "z.com", "a.com", "m.com"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "authorizedDomains": ["localhost", "z.com", "a.com", "m.com"]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let authorizer = DomainAuthorizer::new(client_for(&mock_server));
    let outcome = authorizer
        .ensure_domain_authorized("demo-project", "m.com")
        .await
        .unwrap();

    match outcome {
        EnsureOutcome::Added { domains } => {
            assert_eq!(domains.last().map(String::as_str), Some("m.com"));
            assert_eq!(&domains[..3], ["localhost", "z.com", "a.com"]);
        }
        EnsureOutcome::AlreadyPresent { .. } => panic!("expected Added"),
    }
}
