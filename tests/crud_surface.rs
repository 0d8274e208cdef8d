//! Single-request CRUD surface: query construction, body validation order,
//! and remote error mapping.

use calwire::{
    CalendarListParams, CalendarView, Calendars, ClientOptions, Error, SchedulingPages,
};
use mockito::Matcher;
use serde_json::json;

fn options_for(server: &mockito::Server) -> ClientOptions {
    ClientOptions::new("test-token").with_base_url(server.url())
}

#[tokio::test]
async fn calendar_list_sends_validated_query_params() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/calendars")
        .match_header("authorization", "Bearer test-token")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("view".into(), "ids".into()),
            Matcher::UrlEncoded("limit".into(), "5".into()),
            Matcher::UrlEncoded("offset".into(), "10".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"["cal_1","cal_2"]"#)
        .create_async()
        .await;

    let calendars = Calendars::new(options_for(&server)).unwrap();
    let params = CalendarListParams::new()
        .view(CalendarView::Ids)
        .limit(5)
        .offset(10);
    let payload = calendars.list(params).await.unwrap();

    assert_eq!(payload, json!(["cal_1", "cal_2"]));
    mock.assert_async().await;
}

#[tokio::test]
async fn invalid_list_params_never_reach_the_network() {
    let mut server = mockito::Server::new_async().await;
    let any = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let calendars = Calendars::new(options_for(&server)).unwrap();
    let err = calendars
        .list(CalendarListParams::new().limit(0))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validation { .. }));
    any.assert_async().await;
}

#[tokio::test]
async fn create_posts_the_validated_body() {
    let mut server = mockito::Server::new_async().await;

    let body = json!({
        "name": "Intro call",
        "slug": "intro-call",
        "config": {
            "timezone": "Europe/Amsterdam",
            "appearance": {"show_branding": false}
        }
    });

    let mock = server
        .mock("POST", "/manage/pages")
        .match_header("authorization", "Bearer test-token")
        .match_body(Matcher::Json(body.clone()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"pg_1","slug":"intro-call"}"#)
        .create_async()
        .await;

    let pages = SchedulingPages::new(options_for(&server)).unwrap();
    let created = pages.create(body).await.unwrap();

    assert_eq!(created["id"], "pg_1");
    mock.assert_async().await;
}

#[tokio::test]
async fn create_with_invalid_body_fails_before_any_request() {
    let mut server = mockito::Server::new_async().await;
    let any = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let pages = SchedulingPages::new(options_for(&server)).unwrap();
    let err = pages
        .create(json!({"name": "ok", "unexpected": 1}))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validation { .. }));
    assert_eq!(
        err.context().and_then(|c| c.field_path.as_deref()),
        Some("params.unexpected")
    );
    any.assert_async().await;
}

#[tokio::test]
async fn update_puts_to_the_addressed_page() {
    let mut server = mockito::Server::new_async().await;

    let body = json!({"name": "Renamed call"});
    let mock = server
        .mock("PUT", "/manage/pages/pg_1")
        .match_body(Matcher::Json(body.clone()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"pg_1","name":"Renamed call"}"#)
        .create_async()
        .await;

    let pages = SchedulingPages::new(options_for(&server)).unwrap();
    let updated = pages.update("pg_1", body).await.unwrap();

    assert_eq!(updated["name"], "Renamed call");
    mock.assert_async().await;
}

#[tokio::test]
async fn update_with_empty_id_is_rejected() {
    let mut server = mockito::Server::new_async().await;
    let any = server
        .mock("PUT", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let pages = SchedulingPages::new(options_for(&server)).unwrap();
    let err = pages.update("", json!({"name": "ok"})).await.unwrap_err();

    assert!(matches!(err, Error::Validation { .. }));
    any.assert_async().await;
}

#[tokio::test]
async fn scheduling_page_list_passes_query_through() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/manage/pages")
        .match_query(Matcher::UrlEncoded("limit".into(), "3".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":"pg_1"}]"#)
        .create_async()
        .await;

    let pages = SchedulingPages::new(options_for(&server)).unwrap();
    let payload = pages
        .list(vec![("limit".to_string(), "3".to_string())])
        .await
        .unwrap();

    assert_eq!(payload[0]["id"], "pg_1");
    mock.assert_async().await;
}

#[tokio::test]
async fn non_success_status_maps_to_a_remote_error() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/calendars")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"type":"server_error","message":"boom"}"#)
        .create_async()
        .await;

    let calendars = Calendars::new(options_for(&server)).unwrap();
    let err = calendars.list(CalendarListParams::new()).await.unwrap_err();

    match err {
        Error::Remote {
            status,
            code,
            message,
        } => {
            assert_eq!(status, 500);
            assert_eq!(code, "server_error");
            assert_eq!(message, "boom");
        }
        other => panic!("expected remote error, got {other:?}"),
    }
}
