use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use serde_json::{json, Value};
use warp::http::StatusCode;
use warp::Filter;
use arcdesk::enums::api_error::ApiError;
use arcdesk::enums::transaction_status::TransactionStatus;
use arcdesk::enums::transaction_type::TransactionType;
use arcdesk::services::session_list::SessionListController;
use arcdesk::services::slot_fetcher::SlotFetcher;
use arcdesk::structs::transaction::TransactionFilters;
use arcdesk::traits::backend::Backend;
use crate::support::{client, reply, serve, session_json, slot_json, TOKEN};

fn slot_routes() -> impl Filter<Extract = (warp::reply::WithStatus<warp::reply::Json>,), Error = warp::Rejection> + Clone {
    warp::path!("api" / "slots" / "available")
        .and(warp::get())
        .and(warp::query::<HashMap<String, String>>())
        .map(|query: HashMap<String, String>| {
            let slots = json!([slot_json("SLOT-A"), slot_json("SLOT-B")]);
            let body = match query.get("date").map(String::as_str) {
                Some("nested") => json!({ "data": { "slots": slots } }),
                Some("top") => json!({ "slots": slots, "count": 2 }),
                Some("data") => json!({ "data": slots }),
                Some("bare") => slots,
                _ => json!({ "items": slots }),
            };
            reply(body, StatusCode::OK)
        })
}

#[tokio::test]
async fn every_slot_envelope_decodes_to_the_same_list() {
    let api = client(&serve(slot_routes()), Some(TOKEN));

    let expected = api.available_slots("bare").await.unwrap();
    assert_eq!(expected.len(), 2);

    for shape in ["nested", "top", "data"] {
        assert_eq!(api.available_slots(shape).await.unwrap(), expected, "shape {shape}");
    }
}

#[tokio::test]
async fn unknown_slot_envelope_is_typed_error_but_empty_for_fetcher() {
    let api = client(&serve(slot_routes()), Some(TOKEN));

    assert!(matches!(api.available_slots("other").await, Err(ApiError::Decode(_))));
    assert!(SlotFetcher::fetch_available_slots(&api, "other").await.is_empty());
}

#[tokio::test]
async fn slot_date_is_url_encoded() {
    let seen = Arc::new(Mutex::new(None));
    let record = Arc::clone(&seen);
    let routes = warp::path!("api" / "slots" / "available")
        .and(warp::query::<HashMap<String, String>>())
        .map(move |query: HashMap<String, String>| {
            *record.lock().unwrap() = query.get("date").cloned();
            reply(json!([]), StatusCode::OK)
        });

    let api = client(&serve(routes), Some(TOKEN));
    assert!(api.available_slots("1/9/2025").await.unwrap().is_empty());
    assert_eq!(seen.lock().unwrap().as_deref(), Some("1/9/2025"));
}

#[tokio::test]
async fn requests_carry_bearer_token() {
    let routes = warp::path!("api" / "sessions")
        .and(warp::get())
        .and(warp::header::optional::<String>("authorization"))
        .map(|auth: Option<String>| {
            if auth.as_deref() == Some("Bearer test-token") {
                reply(json!({ "data": [session_json("SES-1", "ana@example.com", "scheduled")] }), StatusCode::OK)
            } else {
                reply(json!({ "message": "Unauthorized" }), StatusCode::UNAUTHORIZED)
            }
        });
    let base = serve(routes);

    let sessions = client(&base, Some(TOKEN)).list_sessions().await.unwrap();
    assert_eq!(sessions[0].session_code, "SES-1");

    let wrong = client(&base, Some("stale")).list_sessions().await.unwrap_err();
    assert_eq!(
        wrong,
        ApiError::Status { status: 401, status_text: "Unauthorized".to_string(), message: Some("Unauthorized".to_string()) }
    );

    assert_eq!(client(&base, None).list_sessions().await.unwrap_err(), ApiError::MissingToken);
}

#[tokio::test]
async fn bare_session_array_is_accepted() {
    let routes = warp::path!("api" / "sessions")
        .map(|| reply(json!([session_json("SES-1", "ana@example.com", "on-going")]), StatusCode::OK));

    let sessions = client(&serve(routes), Some(TOKEN)).list_sessions().await.unwrap();
    assert_eq!(sessions.len(), 1);
}

#[tokio::test]
async fn not_found_becomes_status_text_banner() {
    let routes = warp::path!("api" / "sessions")
        .map(|| warp::reply::with_status(warp::reply(), StatusCode::NOT_FOUND));

    let api = client(&serve(routes), Some(TOKEN));
    let mut sessions = SessionListController::new();
    assert!(sessions.load(&api).await.is_err());
    assert_eq!(sessions.error(), Some("Failed to fetch sessions: Not Found"));
    assert!(sessions.sessions().is_empty());
}

#[tokio::test]
async fn transaction_filters_become_query_parameters() {
    let seen: Arc<Mutex<Vec<HashMap<String, String>>>> = Arc::default();
    let record = Arc::clone(&seen);
    let routes = warp::path!("api" / "transactions")
        .and(warp::query::<HashMap<String, String>>())
        .map(move |query: HashMap<String, String>| {
            record.lock().unwrap().push(query);
            reply(
                json!({
                    "transactions": [{ "transaction_code": "TX-1", "type": "EXPENSE", "status": "PENDING" }],
                    "page": 2,
                    "pages": 4,
                    "total": 31
                }),
                StatusCode::OK,
            )
        });

    let api = client(&serve(routes), Some(TOKEN));
    let filters = TransactionFilters {
        kind: Some(TransactionType::Expense),
        channel: None,
        status: Some(TransactionStatus::Pending),
    };
    let page = api.list_transactions(2, &filters).await.unwrap();

    assert_eq!(page.pages, 4);
    assert_eq!(page.transactions[0].kind, Some(TransactionType::Expense));

    let queries = seen.lock().unwrap();
    let query = &queries[0];
    assert_eq!(query.get("page").map(String::as_str), Some("2"));
    assert_eq!(query.get("type").map(String::as_str), Some("EXPENSE"));
    assert_eq!(query.get("status").map(String::as_str), Some("PENDING"));
    assert!(!query.contains_key("channel"));
}

#[tokio::test]
async fn lead_status_update_puts_status_body() {
    let seen: Arc<Mutex<Option<(String, Value)>>> = Arc::default();
    let record = Arc::clone(&seen);
    let routes = warp::path!("api" / "leads" / String)
        .and(warp::put())
        .and(warp::body::json())
        .map(move |id: String, body: Value| {
            *record.lock().unwrap() = Some((id, body));
            reply(json!({ "message": "updated" }), StatusCode::OK)
        });

    let api = client(&serve(routes), Some(TOKEN));
    api.update_lead_status("lead-7", arcdesk::enums::lead_status::LeadStatus::FollowUp)
        .await
        .unwrap();

    let (id, body) = seen.lock().unwrap().clone().unwrap();
    assert_eq!(id, "lead-7");
    assert_eq!(body, json!({ "status": "follow-up" }));
}

#[tokio::test]
async fn public_catalog_needs_no_token() {
    let routes = warp::path!("api" / "courses")
        .and(warp::header::optional::<String>("authorization"))
        .map(|auth: Option<String>| {
            assert!(auth.is_none());
            reply(json!({ "data": [{ "_id": "c1", "title": "Rust" }] }), StatusCode::OK)
        });

    let courses = client(&serve(routes), None).list_courses().await.unwrap();
    assert_eq!(courses[0].title.as_deref(), Some("Rust"));
}
