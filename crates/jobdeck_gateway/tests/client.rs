use std::time::{Duration, Instant};

use jobdeck_gateway::{
    ApiSettings, Gateway, GatewayError, JobsFilter, ProfileDetails, ReqwestGateway,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_settings(server: &MockServer) -> ApiSettings {
    let mut settings = ApiSettings::with_base_url(&server.uri()).expect("mock uri");
    settings.profile_publish_delay = Duration::ZERO;
    settings
}

fn profile_body() -> serde_json::Value {
    json!({
        "profile_details": {
            "name": "Rahul Attuluri",
            "profile_image_url": "https://assets.example.com/profile.png",
            "short_bio": "Lead Software Developer",
        }
    })
}

#[tokio::test]
async fn profile_success_maps_wire_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .and(header("Authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body()))
        .mount(&server)
        .await;

    let gateway = ReqwestGateway::new(test_settings(&server)).expect("client");
    let details = gateway.fetch_profile("secret-token").await.expect("profile");

    assert_eq!(
        details,
        ProfileDetails {
            name: "Rahul Attuluri".to_string(),
            avatar_url: "https://assets.example.com/profile.png".to_string(),
            short_bio: "Lead Software Developer".to_string(),
        }
    );
}

#[tokio::test]
async fn profile_success_holds_for_publish_delay() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body()))
        .mount(&server)
        .await;

    let mut settings = test_settings(&server);
    settings.profile_publish_delay = Duration::from_millis(100);
    let gateway = ReqwestGateway::new(settings).expect("client");

    let started = Instant::now();
    gateway.fetch_profile("t").await.expect("profile");
    assert!(started.elapsed() >= Duration::from_millis(100));
}

#[tokio::test]
async fn profile_failure_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error_msg": "Invalid JWT Token"
        })))
        .mount(&server)
        .await;

    let gateway = ReqwestGateway::new(test_settings(&server)).expect("client");
    let err = gateway.fetch_profile("bad-token").await.unwrap_err();

    assert_eq!(err, GatewayError::HttpStatus(401));
}

#[tokio::test]
async fn jobs_request_carries_all_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .and(header("Authorization", "Bearer secret-token"))
        .and(query_param("employment_type", "FULLTIME,PARTTIME"))
        .and(query_param("minimum_package", "1000000"))
        .and(query_param("search", "engineer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jobs": [{
                "id": "1",
                "company_logo_url": "https://logos.example.com/1.png",
                "employment_type": "FULLTIME",
                "title": "Engineer",
                "rating": 4,
                "location": "Hyderabad",
                "package_per_annum": "10 LPA",
                "job_description": "Build and run services.",
            }]
        })))
        .mount(&server)
        .await;

    let gateway = ReqwestGateway::new(test_settings(&server)).expect("client");
    let filter = JobsFilter {
        search: "engineer".to_string(),
        minimum_package: "1000000".to_string(),
        employment_types: vec!["FULLTIME".to_string(), "PARTTIME".to_string()],
    };
    let jobs = gateway.fetch_jobs("secret-token", &filter).await.expect("jobs");

    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].id, "1");
    assert_eq!(jobs[0].description, "Build and run services.");
    assert_eq!(jobs[0].rating, 4.0);
}

#[tokio::test]
async fn jobs_unset_filters_send_empty_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .and(query_param("employment_type", ""))
        .and(query_param("minimum_package", ""))
        .and(query_param("search", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "jobs": [] })))
        .mount(&server)
        .await;

    let gateway = ReqwestGateway::new(test_settings(&server)).expect("client");
    let jobs = gateway
        .fetch_jobs("t", &JobsFilter::default())
        .await
        .expect("jobs");

    assert!(jobs.is_empty());
}

#[tokio::test]
async fn jobs_empty_upstream_list_is_a_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "jobs": [] })))
        .mount(&server)
        .await;

    let gateway = ReqwestGateway::new(test_settings(&server)).expect("client");
    let jobs = gateway
        .fetch_jobs("t", &JobsFilter::default())
        .await
        .expect("jobs");

    assert!(jobs.is_empty());
}

#[tokio::test]
async fn jobs_failure_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let gateway = ReqwestGateway::new(test_settings(&server)).expect("client");
    let err = gateway
        .fetch_jobs("t", &JobsFilter::default())
        .await
        .unwrap_err();

    assert_eq!(err, GatewayError::HttpStatus(502));
}

#[tokio::test]
async fn jobs_malformed_success_body_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("not json", "application/json"),
        )
        .mount(&server)
        .await;

    let gateway = ReqwestGateway::new(test_settings(&server)).expect("client");
    let err = gateway
        .fetch_jobs("t", &JobsFilter::default())
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::Parse(_)), "got {err:?}");
}

#[tokio::test]
async fn profile_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(profile_body()),
        )
        .mount(&server)
        .await;

    let mut settings = test_settings(&server);
    settings.request_timeout = Duration::from_millis(50);
    let gateway = ReqwestGateway::new(settings).expect("client");

    let err = gateway.fetch_profile("t").await.unwrap_err();
    assert_eq!(err, GatewayError::Timeout);
}
