use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use chrono::NaiveDate;
use serde_json::{json, Value};
use warp::http::StatusCode;
use warp::Filter;
use arcdesk::enums::reschedule_state::RescheduleState;
use arcdesk::enums::session_status::SessionStatus;
use arcdesk::services::reschedule_flow::RescheduleFlow;
use arcdesk::services::session_list::SessionListController;
use crate::support::{client, reply, serve, session_json, slot_json, TOKEN};

type Posts = Arc<Mutex<Vec<(String, Value)>>>;

fn backend(posts: Posts, fail: bool) -> String {
    let list = warp::path!("api" / "sessions").and(warp::get()).map(|| {
        reply(
            json!({ "data": [
                session_json("SES-1", "ana@example.com", "scheduled"),
                session_json("SES-2", "bob@example.com", "scheduled"),
                session_json("SES-3", "cleo@example.org", "completed")
            ]}),
            StatusCode::OK,
        )
    });

    let slots = warp::path!("api" / "slots" / "available")
        .and(warp::query::<HashMap<String, String>>())
        .map(|_| reply(json!({ "data": { "slots": [slot_json("SLOT-A"), slot_json("SLOT-B")] } }), StatusCode::OK));

    let reschedule = warp::path!("api" / "sessions" / String / "reschedule")
        .and(warp::post())
        .and(warp::body::json())
        .map(move |code: String, body: Value| {
            posts.lock().unwrap().push((code.clone(), body));
            if fail {
                return reply(json!({ "message": "Slot already taken" }), StatusCode::CONFLICT);
            }
            let mut moved = session_json(&code, "bob@example.com", "rescheduled");
            moved["date"] = json!("2025-01-11");
            moved["time"] = json!("10:00-11:00");
            reply(json!({ "data": moved }), StatusCode::OK)
        });

    serve(list.or(slots).unify().or(reschedule).unify())
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 9).unwrap()
}

#[tokio::test]
async fn reschedule_round_trip_updates_only_the_moved_row() {
    let posts = Posts::default();
    let api = client(&backend(Arc::clone(&posts), false), Some(TOKEN));

    let mut sessions = SessionListController::new();
    sessions.load(&api).await.unwrap();
    sessions.search("example.com");
    assert_eq!(sessions.filtered().len(), 2);
    let untouched = sessions.sessions()[0].clone();

    let mut flow = RescheduleFlow::new();
    let target = sessions.find("SES-2").cloned().unwrap();
    assert_eq!(flow.open_and_load(&api, target, None, today()).await.len(), 2);

    flow.select_slot("SLOT-B").unwrap();
    let updated = flow.submit(&api, &mut sessions).await.unwrap();

    assert_eq!(updated.status, SessionStatus::Rescheduled);
    assert_eq!(flow.state(), RescheduleState::Closed);
    assert_eq!(sessions.find("SES-2"), Some(&updated));
    assert_eq!(sessions.filtered()[1], updated);
    assert_eq!(sessions.sessions()[0], untouched);

    let posts = posts.lock().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0], ("SES-2".to_string(), json!({ "new_slot_code": "SLOT-B" })));
}

#[tokio::test]
async fn no_selection_means_no_post() {
    let posts = Posts::default();
    let api = client(&backend(Arc::clone(&posts), false), Some(TOKEN));

    let mut sessions = SessionListController::new();
    sessions.load(&api).await.unwrap();

    let mut flow = RescheduleFlow::new();
    flow.open_and_load(&api, sessions.sessions()[0].clone(), None, today()).await;

    let error = flow.submit(&api, &mut sessions).await.unwrap_err();
    assert_eq!(error.banner(), "Please select a new slot");
    assert!(posts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn rejected_reschedule_keeps_flow_open() {
    let posts = Posts::default();
    let api = client(&backend(Arc::clone(&posts), true), Some(TOKEN));

    let mut sessions = SessionListController::new();
    sessions.load(&api).await.unwrap();
    let before = sessions.sessions().to_vec();

    let mut flow = RescheduleFlow::new();
    flow.open_and_load(&api, before[0].clone(), None, today()).await;
    flow.select_slot("SLOT-A").unwrap();

    let error = flow.submit(&api, &mut sessions).await.unwrap_err();
    assert_eq!(error.banner(), "Failed to reschedule session: Slot already taken");
    assert_eq!(flow.state(), RescheduleState::Ready);
    assert_eq!(sessions.sessions(), before.as_slice());
}
