use serde_json::{json, Value};
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};
use arcdesk::services::api_client::ApiClient;
use arcdesk::services::auth_context::AuthContext;
use arcdesk::structs::config::api_config::ApiConfig;

pub const TOKEN: &str = "test-token";

/// Serves `routes` on an ephemeral local port and returns the `/api` base URL.
pub fn serve<F, R>(routes: F) -> String
where
    F: Filter<Extract = (R,), Error = Rejection> + Clone + Send + Sync + 'static,
    R: Reply,
{
    let (addr, server) = warp::serve(routes).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    format!("http://{addr}/api")
}

pub fn client(base_url: &str, token: Option<&str>) -> ApiClient {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        public_base_url: base_url.to_string(),
        ..ApiConfig::default()
    };
    ApiClient::new(&config, &AuthContext::in_memory(token.map(ToString::to_string))).unwrap()
}

pub fn reply(body: Value, status: StatusCode) -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(warp::reply::json(&body), status)
}

pub fn session_json(code: &str, email: &str, status: &str) -> Value {
    json!({
        "_id": format!("id-{code}"),
        "session_code": code,
        "email": email,
        "date": "2025-01-10",
        "time": "09:00-10:00",
        "runtime": 60,
        "status": status,
        "joining_link": null
    })
}

pub fn slot_json(code: &str) -> Value {
    json!({
        "_id": format!("id-{code}"),
        "slot_code": code,
        "date": "2025-01-11",
        "time": "10:00-11:00",
        "runtime": 60,
        "status": "Free"
    })
}
