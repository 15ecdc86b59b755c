//! HTTP client and controllers against an in-process mock of the cafe backend.

use axum::{
    Form, Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use cafe_directory::clients::CafeClient;
use cafe_directory::config::ApiConfig;
use cafe_directory::models::{Listing, SearchMode, SearchQuery, Viewer};
use cafe_directory::page::SearchBox;
use cafe_directory::services::{CafeDraft, ListingController, SubmissionController, SubmitOutcome};
use cafe_directory::ClientError;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

const EMAIL: &str = "ada@example.com";
const PASSWORD: &str = "secret";
const SESSION_COOKIE: &str = "session=ok";

#[derive(Clone, Default)]
struct Backend {
    searches: Arc<Mutex<Vec<String>>>,
    posted: Arc<Mutex<Vec<Vec<(String, String)>>>>,
    closed: Arc<Mutex<Vec<i32>>>,
    edited: Arc<Mutex<Vec<(i32, Vec<(String, String)>)>>>,
}

fn cafe(id: i32, name: &str, location: &str, author_id: i32) -> Value {
    json!({
        "id": id,
        "name": name,
        "location": location,
        "map_url": format!("https://maps.example.com/{id}"),
        "seats": "20-30",
        "coffee_price": "2.80 £",
        "has_wifi": true,
        "has_sockets": true,
        "has_toilet": false,
        "can_take_calls": true,
        "img_url": format!("https://img.example.com/{id}.jpg"),
        "author_name": "Ada",
        "author_id": author_id,
    })
}

fn cafes() -> Vec<Value> {
    vec![
        cafe(2, "Latte Lab", "East London", 5),
        cafe(1, "Bean There", "Shoreditch", 9),
        cafe(3, "Lattice", "Eastbourne", 1),
    ]
}

fn has_session(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .any(|value| value.contains(SESSION_COOKIE))
}

async fn all() -> Json<Value> {
    Json(json!({ "cafes": cafes() }))
}

fn search_reply(field: &str, term: &str, not_found: &str) -> Response {
    if term == "broken" {
        return (StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>").into_response();
    }

    let matches: Vec<Value> = cafes()
        .into_iter()
        .filter(|cafe| {
            cafe[field]
                .as_str()
                .is_some_and(|value| value.to_lowercase().contains(term))
        })
        .collect();

    if matches.is_empty() {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "cafes": { "error": { "Not Found": not_found } } })),
        )
            .into_response()
    } else {
        Json(json!({ "cafes": matches })).into_response()
    }
}

async fn search_name(
    State(backend): State<Backend>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let term = params.get("name").cloned().unwrap_or_default();
    backend.searches.lock().unwrap().push(format!("name={term}"));
    search_reply("name", &term, "Sorry, we don't have a cafe with that name.")
}

async fn search_loc(
    State(backend): State<Backend>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let term = params.get("loc").cloned().unwrap_or_default();
    backend.searches.lock().unwrap().push(format!("loc={term}"));
    search_reply("location", &term, "Sorry, we don't have a cafe in that location.")
}

async fn login(Form(fields): Form<HashMap<String, String>>) -> Response {
    let email = fields.get("InputEmail").map(String::as_str);
    let password = fields.get("InputPassword").map(String::as_str);

    if email == Some(EMAIL) && password == Some(PASSWORD) {
        (
            [(header::SET_COOKIE, format!("{SESSION_COOKIE}; Path=/"))],
            Redirect::to("/"),
        )
            .into_response()
    } else {
        Redirect::to("/login").into_response()
    }
}

async fn add(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response {
    if !has_session(&headers) {
        return StatusCode::FORBIDDEN.into_response();
    }

    let taken = fields
        .iter()
        .any(|(name, value)| name == "name" && value == "Latte Lab");
    backend.posted.lock().unwrap().push(fields);

    if taken {
        Redirect::to("/add-cafe").into_response()
    } else {
        Redirect::to("/").into_response()
    }
}

async fn report_closed(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Path(cafe_id): Path<i32>,
) -> Response {
    if !has_session(&headers) {
        return StatusCode::FORBIDDEN.into_response();
    }

    backend.closed.lock().unwrap().push(cafe_id);
    Redirect::to("/").into_response()
}

async fn random() -> Json<Value> {
    Json(json!({ "cafe": cafes()[1] }))
}

/// Cafe 99 belongs to someone else. A taken name re-renders the edit page.
async fn edit_cafe(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Path(cafe_id): Path<i32>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response {
    if !has_session(&headers) || cafe_id == 99 {
        return StatusCode::FORBIDDEN.into_response();
    }

    let taken = fields
        .iter()
        .any(|(name, value)| name == "name" && value == "Latte Lab");
    if taken {
        return "<html>edit</html>".into_response();
    }

    backend.edited.lock().unwrap().push((cafe_id, fields));
    Redirect::to("/").into_response()
}

async fn page() -> &'static str {
    "<html></html>"
}

async fn spawn_backend() -> (ApiConfig, Backend) {
    let backend = Backend::default();

    let app = Router::new()
        .route("/", get(page))
        .route("/login", get(page).post(login))
        .route("/add-cafe", get(page))
        .route("/all", get(all))
        .route("/search_name", get(search_name))
        .route("/search_loc", get(search_loc))
        .route("/add", post(add))
        .route("/report-closed/{id}", post(report_closed))
        .route("/edit-cafe/{id}", post(edit_cafe))
        .route("/random", get(random))
        .with_state(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind mock backend");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = ApiConfig {
        base_url: format!("http://{addr}"),
        request_timeout_seconds: Some(5),
        ..ApiConfig::default()
    };
    (config, backend)
}

fn names(listing: &Listing) -> Vec<String> {
    match listing {
        Listing::Cafes(cafes) => cafes.iter().map(|cafe| cafe.name.clone()).collect(),
        Listing::NotFound(message) => panic!("unexpected not-found: {message}"),
    }
}

#[tokio::test]
async fn test_fetch_all_keeps_server_order() {
    let (config, _) = spawn_backend().await;
    let client = CafeClient::new(&config).unwrap();

    let listing = client.fetch_all().await.unwrap();

    assert_eq!(names(&listing), vec!["Latte Lab", "Bean There", "Lattice"]);
}

#[tokio::test]
async fn test_search_by_name_sends_lowercased_term() {
    let (config, backend) = spawn_backend().await;
    let client = CafeClient::new(&config).unwrap();

    let listing = client
        .search(&SearchQuery::from_input(" LATTE ", true))
        .await
        .unwrap();

    assert_eq!(names(&listing), vec!["Latte Lab"]);
    assert_eq!(*backend.searches.lock().unwrap(), vec!["name=latte".to_string()]);
}

#[tokio::test]
async fn test_search_by_location_not_found_comes_back_as_listing() {
    let (config, backend) = spawn_backend().await;
    let client = CafeClient::new(&config).unwrap();

    let listing = client
        .search(&SearchQuery::new(SearchMode::Loc, "north"))
        .await
        .unwrap();

    assert_eq!(
        listing,
        Listing::NotFound("Sorry, we don't have a cafe in that location.".to_string())
    );
    assert_eq!(*backend.searches.lock().unwrap(), vec!["loc=north".to_string()]);
}

#[tokio::test]
async fn test_undecodable_body_is_a_decode_error() {
    let (config, _) = spawn_backend().await;
    let client = CafeClient::new(&config).unwrap();

    let result = client
        .search(&SearchQuery::new(SearchMode::Loc, "broken"))
        .await;

    assert!(matches!(result, Err(ClientError::Decode(_))));
}

#[tokio::test]
async fn test_unreachable_backend_is_a_transport_error() {
    let config = ApiConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        request_timeout_seconds: Some(2),
        ..ApiConfig::default()
    };
    let client = CafeClient::new(&config).unwrap();

    assert!(matches!(
        client.fetch_all().await,
        Err(ClientError::Transport(_))
    ));
}

#[tokio::test]
async fn test_login_with_wrong_password_is_refused() {
    let (config, _) = spawn_backend().await;
    let client = CafeClient::new(&config).unwrap();

    let result = client.login(EMAIL, "wrong").await;

    assert!(matches!(result, Err(ClientError::LoginRefused { .. })));
}

#[tokio::test]
async fn test_submit_add_cafe_form_after_login() {
    let (config, backend) = spawn_backend().await;
    let client = CafeClient::new(&config).unwrap();
    client.login(EMAIL, PASSWORD).await.unwrap();

    let draft = CafeDraft {
        name: "Lighthaus".to_string(),
        map_url: "https://g.page/lighthaus".to_string(),
        img_url: "https://img.example.com/l.jpg".to_string(),
        location: "Islington".to_string(),
        seats: "30-40".to_string(),
        price: "2.80".to_string(),
        currency: "£".to_string(),
        has_wifi: true,
        ..CafeDraft::default()
    };
    let mut form = draft.to_form();

    let outcome = SubmissionController::new(client).submit(&mut form).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Posted);

    let posted = backend.posted.lock().unwrap();
    assert_eq!(posted.len(), 1);
    let fields = &posted[0];
    assert!(fields.contains(&("coffee_price".to_string(), "2.80 £".to_string())));
    assert!(fields.contains(&("loc".to_string(), "Islington".to_string())));
    assert!(fields.contains(&("wifi".to_string(), "on".to_string())));
    assert!(fields.iter().all(|(name, _)| name != "sockets"));
    assert!(fields.iter().all(|(name, _)| name != "coffee_price_number"));
}

#[tokio::test]
async fn test_duplicate_cafe_bounces_back_to_form() {
    let (config, _) = spawn_backend().await;
    let client = CafeClient::new(&config).unwrap();
    client.login(EMAIL, PASSWORD).await.unwrap();

    let mut form = CafeDraft {
        name: "Latte Lab".to_string(),
        ..CafeDraft::default()
    }
    .to_form();

    let outcome = SubmissionController::new(client).submit(&mut form).await.unwrap();

    assert_eq!(
        outcome,
        SubmitOutcome::Bounced {
            landed_on: "/add-cafe".to_string()
        }
    );
}

#[tokio::test]
async fn test_submit_without_session_is_rejected() {
    let (config, backend) = spawn_backend().await;
    let client = CafeClient::new(&config).unwrap();

    let mut form = CafeDraft::default().to_form();
    let result = SubmissionController::new(client).submit(&mut form).await;

    match result {
        Err(ClientError::Rejected { status, path }) => {
            assert_eq!(status, reqwest::StatusCode::FORBIDDEN);
            assert_eq!(path, "/add");
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    assert!(backend.posted.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_report_closed() {
    let (config, backend) = spawn_backend().await;
    let client = CafeClient::new(&config).unwrap();
    client.login(EMAIL, PASSWORD).await.unwrap();

    let reply = client.report_closed(3).await.unwrap();

    assert!(reply.landed_home());
    assert_eq!(*backend.closed.lock().unwrap(), vec![3]);
}

#[tokio::test]
async fn test_listing_controller_end_to_end() {
    let (config, backend) = spawn_backend().await;
    let client = CafeClient::new(&config).unwrap();
    let controller = ListingController::with_debounce(
        Arc::new(client),
        Viewer::user(5),
        Duration::from_millis(50),
    );
    let mut renders = controller.subscribe();

    assert!(controller.load_all().await);
    let container = controller.container().await;
    assert_eq!(container.children().len(), 3);
    renders.recv().await.unwrap();

    // Only the author's cafe carries an edit action, nobody gets delete.
    let own = container.child_by_id("cafe-2").unwrap();
    assert_eq!(own.find_all("form").len(), 1);
    assert!(container.child_by_id("cafe-1").unwrap().find_all("form").is_empty());

    for partial in ["e", "ea", "eas", "East"] {
        controller.on_search_input(&SearchBox::new(partial, false));
    }

    let event = tokio::time::timeout(Duration::from_secs(5), renders.recv())
        .await
        .expect("no render after search")
        .unwrap();
    assert!(matches!(
        event.outcome,
        cafe_directory::services::RenderOutcome::Cafes(2)
    ));
    assert_eq!(*backend.searches.lock().unwrap(), vec!["loc=east".to_string()]);

    let container = controller.container().await;
    assert!(container.child_by_id("cafe-2").is_some());
    assert!(container.child_by_id("cafe-3").is_some());
    assert!(container.child_by_id("cafe-1").is_none());
}

fn edited_draft(name: &str) -> CafeDraft {
    CafeDraft {
        name: name.to_string(),
        map_url: "https://g.page/lighthaus".to_string(),
        img_url: "https://img.example.com/l.jpg".to_string(),
        location: "Angel".to_string(),
        seats: "30-40".to_string(),
        price: "3.10".to_string(),
        currency: "£".to_string(),
        has_sockets: true,
        ..CafeDraft::default()
    }
}

#[tokio::test]
async fn test_edit_cafe_posts_edit_route_fields() {
    let (config, backend) = spawn_backend().await;
    let client = CafeClient::new(&config).unwrap();
    client.login(EMAIL, PASSWORD).await.unwrap();

    let reply = client.edit_cafe(2, &edited_draft("Lighthaus")).await.unwrap();
    assert!(reply.landed_home());

    let edited = backend.edited.lock().unwrap();
    assert_eq!(edited.len(), 1);
    let (cafe_id, fields) = &edited[0];
    assert_eq!(*cafe_id, 2);
    assert!(fields.contains(&("location".to_string(), "Angel".to_string())));
    assert!(fields.contains(&("coffee_price".to_string(), "3.10".to_string())));
    assert!(fields.contains(&("currency_symbol".to_string(), "£".to_string())));
    assert!(fields.contains(&("sockets".to_string(), "on".to_string())));
    assert!(fields.iter().all(|(name, _)| name != "loc"));
}

#[tokio::test]
async fn test_edit_cafe_with_taken_name_stays_on_edit_page() {
    let (config, backend) = spawn_backend().await;
    let client = CafeClient::new(&config).unwrap();
    client.login(EMAIL, PASSWORD).await.unwrap();

    let reply = client.edit_cafe(2, &edited_draft("Latte Lab")).await.unwrap();

    assert!(!reply.landed_home());
    assert_eq!(reply.landed_on, "/edit-cafe/2");
    assert!(backend.edited.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_edit_someone_elses_cafe_is_rejected() {
    let (config, _) = spawn_backend().await;
    let client = CafeClient::new(&config).unwrap();
    client.login(EMAIL, PASSWORD).await.unwrap();

    let result = client.edit_cafe(99, &edited_draft("Lighthaus")).await;

    assert!(matches!(
        result,
        Err(ClientError::Rejected { status, .. }) if status == reqwest::StatusCode::FORBIDDEN
    ));
}

#[tokio::test]
async fn test_random_cafe() {
    let (config, _) = spawn_backend().await;
    let client = CafeClient::new(&config).unwrap();

    let cafe = client.random().await.unwrap();

    assert_eq!(cafe.id, 1);
    assert_eq!(cafe.name, "Bean There");
    assert_eq!(cafe.author_id, Some(9));
}
