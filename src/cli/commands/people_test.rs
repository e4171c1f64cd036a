use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;

use crate::cli::api_client::HttpPeopleApi;
use crate::cli::commands::people::*;
use crate::cli::error::CliError;
use crate::notify::{ChannelNotifier, NotificationKind};
use crate::table::{Color, Person, TableConfig, TableController, TableError};

// =============================================================================
// Integration Tests - run commands against an in-process people API
// =============================================================================

#[derive(Clone)]
struct FakeApi {
    people: Arc<Mutex<Vec<Person>>>,
    create_status: StatusCode,
}

async fn list_handler(
    State(api): State<FakeApi>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Vec<Person>> {
    let people = api.people.lock().unwrap().clone();
    let people = match params.get("color") {
        Some(color) => people
            .into_iter()
            .filter(|p| p.color.as_str() == color)
            .collect(),
        None => people,
    };
    Json(people)
}

async fn create_handler(State(api): State<FakeApi>, Json(person): Json<Person>) -> StatusCode {
    if api.create_status == StatusCode::OK {
        api.people.lock().unwrap().push(person);
    }
    api.create_status
}

async fn colors_handler(State(api): State<FakeApi>) -> Json<Vec<Color>> {
    let mut colors: Vec<Color> = api
        .people
        .lock()
        .unwrap()
        .iter()
        .map(|p| p.color.clone())
        .collect();
    colors.sort();
    colors.dedup();
    Json(colors)
}

fn seed(count: usize) -> Vec<Person> {
    (0..count)
        .map(|i| {
            Person::new(
                format!("person-{:02}", i),
                if i % 3 == 0 { "green" } else { "red" },
            )
            .with_attribute("age", 20 + i as u64)
        })
        .collect()
}

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Spawn a fake people API seeded with `count` people
async fn spawn_test_server(count: usize, create_status: StatusCode) -> (String, FakeApi) {
    let api = FakeApi {
        people: Arc::new(Mutex::new(seed(count))),
        create_status,
    };
    let app = Router::new()
        .route("/people", get(list_handler).post(create_handler))
        .route("/colors", get(colors_handler))
        .with_state(api.clone());

    (serve(app).await, api)
}

/// Spawn an API that never has data: 500 for people, `null` for colors
async fn spawn_broken_server() -> String {
    let app = Router::new()
        .route(
            "/people",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route("/colors", get(|| async { Json(serde_json::Value::Null) }));

    serve(app).await
}

fn table_for(url: String) -> (TableController<HttpPeopleApi, ChannelNotifier>, ChannelNotifier) {
    let client = HttpPeopleApi::new(Some(url), None).unwrap();
    let notifier = ChannelNotifier::new();
    (TableController::new(client, notifier.clone()), notifier)
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_people_first_page_table() {
    let (url, _api) = spawn_test_server(25, StatusCode::OK).await;
    let (table, _notifier) = table_for(url);

    let output = list_people(&table, None, None, "table").await.unwrap();

    assert!(output.contains("person-00"));
    assert!(output.contains("person-09"));
    assert!(!output.contains("person-10"));
    assert!(output.contains("age=20"));
    assert!(output.contains("Page 1 of 3 (25 people)"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_people_requested_page_json() {
    let (url, _api) = spawn_test_server(25, StatusCode::OK).await;
    let (table, _notifier) = table_for(url);

    let output = list_people(&table, None, Some(3), "json").await.unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["page"], 3);
    assert_eq!(json["page_size"], 10);
    assert_eq!(json["total_pages"], 3);
    assert_eq!(json["total_items"], 25);
    assert_eq!(json["people"].as_array().unwrap().len(), 5);
    assert_eq!(json["people"][0]["name"], "person-20");
    assert_eq!(json["people"][0]["age"], 40);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_people_page_size_from_config() {
    let (url, _api) = spawn_test_server(25, StatusCode::OK).await;
    let client = HttpPeopleApi::new(Some(url), None).unwrap();
    let config = TableConfig {
        page_size: 4,
        ..TableConfig::default()
    };
    let table = TableController::with_config(client, ChannelNotifier::new(), config).unwrap();

    let output = list_people(&table, None, Some(7), "json").await.unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["total_pages"], 7);
    assert_eq!(json["people"].as_array().unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_people_filtered_by_color() {
    let (url, _api) = spawn_test_server(12, StatusCode::OK).await;
    let (table, _notifier) = table_for(url);

    let output = list_people(&table, Some("green"), None, "json").await.unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    let people = json["people"].as_array().unwrap();
    assert_eq!(json["total_items"], 4);
    assert!(people.iter().all(|p| p["color"] == "green"));
    assert_eq!(
        table.state().filter.selected_color,
        Some(Color::from("green"))
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_colors() {
    let (url, _api) = spawn_test_server(6, StatusCode::OK).await;
    let (table, _notifier) = table_for(url);

    let output = list_colors(&table, "json").await.unwrap();
    let colors: Vec<String> = serde_json::from_str(&output).unwrap();

    assert_eq!(colors, vec!["green".to_string(), "red".to_string()]);

    let table_output = list_colors(&table, "table").await.unwrap();
    assert!(table_output.contains("Color"));
    assert!(table_output.contains("green"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_person_refreshes_listing_and_colors() {
    let (url, api) = spawn_test_server(3, StatusCode::OK).await;
    let (table, _notifier) = table_for(url);
    table.set_can_filter(true);
    table.select_color(Some(Color::from("red")));

    let attrs = vec!["age=36".to_string(), "city=London".to_string()];
    let output = add_person(&table, "Ada", "violet", &attrs, "table")
        .await
        .unwrap();

    assert!(output.starts_with("✓ Added Ada (violet)"));
    assert!(output.contains("Ada"));
    assert!(output.contains("Page 1 of 1 (4 people)"));

    let stored = api.people.lock().unwrap().clone();
    let ada = stored.iter().find(|p| p.name == "Ada").unwrap();
    assert_eq!(ada.attributes["age"], 36);
    assert_eq!(ada.attributes["city"], "London");

    let state = table.state();
    assert!(state.filter.selected_color.is_none());
    assert!(!state.filter.can_filter);
    assert!(state.filter.color_options.contains(&Color::from("violet")));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_person_rejected_status_notifies() {
    let (url, api) = spawn_test_server(3, StatusCode::CREATED).await;
    let (table, notifier) = table_for(url);
    let mut rx = notifier.subscribe();

    let err = add_person(&table, "Ada", "red", &[], "table")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CliError::Table(TableError::NonSuccessStatus { status: 201, .. })
    ));
    let notification = rx.try_recv().unwrap();
    assert_eq!(notification.subtitle, "Unable to add a person.");
    assert_eq!(notification.kind, NotificationKind::Error);
    assert!(rx.try_recv().is_err());
    assert_eq!(api.people.lock().unwrap().len(), 3);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_person_invalid_attribute_never_calls_api() {
    let (url, api) = spawn_test_server(1, StatusCode::OK).await;
    let (table, _notifier) = table_for(url);

    let err = add_person(&table, "Ada", "red", &["age".to_string()], "table")
        .await
        .unwrap_err();

    assert!(matches!(err, CliError::InvalidArgument { .. }));
    assert_eq!(api.people.lock().unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_error_is_empty_response() {
    let url = spawn_broken_server().await;
    let (table, notifier) = table_for(url);
    let mut rx = notifier.subscribe();

    let err = list_people(&table, None, None, "table").await.unwrap_err();

    assert!(matches!(
        err,
        CliError::Table(TableError::EmptyResponse { .. })
    ));
    assert_eq!(rx.try_recv().unwrap().subtitle, "Unable to retrieve data.");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_null_colors_is_empty_response() {
    let url = spawn_broken_server().await;
    let (table, notifier) = table_for(url);
    let mut rx = notifier.subscribe();

    let err = list_colors(&table, "json").await.unwrap_err();

    assert!(matches!(
        err,
        CliError::Table(TableError::EmptyResponse { .. })
    ));
    assert_eq!(
        rx.try_recv().unwrap().subtitle,
        "Unable to retrieve color options."
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unreachable_server_is_transport_error() {
    // Bind then drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let (table, notifier) = table_for(url);
    let mut rx = notifier.subscribe();

    let err = list_people(&table, None, None, "table").await.unwrap_err();

    assert!(matches!(err, CliError::Table(TableError::Transport { .. })));
    assert_eq!(rx.try_recv().unwrap().subtitle, "Unable to retrieve data.");
    assert!(!table.state().is_loading);
}

// =============================================================================
// Formatting
// =============================================================================

#[test]
fn test_format_table_empty() {
    assert_eq!(format_table(&[]), "No people found.");
}

#[test]
fn test_format_table_has_headers() {
    let output = format_table(&[Person::new("Grace", "blue")]);
    assert!(output.contains("Name"));
    assert!(output.contains("Color"));
    assert!(output.contains("Attributes"));
    assert!(output.contains("Grace"));
}

#[test]
fn test_format_colors_empty() {
    assert_eq!(format_colors(&[]), "No colors found.");
}
