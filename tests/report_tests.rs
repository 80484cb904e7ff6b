use std::fs;
use chrono::NaiveDate;
use serde_json::json;
use warp::http::StatusCode;
use warp::Filter;
use arcdesk::services::report_exporter::{sessions_report, ReportExporter};
use arcdesk::services::session_list::SessionListController;
use crate::support::{client, reply, serve, session_json, TOKEN};

#[tokio::test]
async fn exported_rows_match_filtered_sessions() {
    let routes = warp::path!("api" / "sessions").map(|| {
        reply(
            json!({ "data": [
                session_json("SES-1", "ana@example.com", "scheduled"),
                session_json("SES-2", "bob@example.com", "cancelled"),
                session_json("SES-3", "ana.b@example.org", "completed"),
                session_json("SES-4", "<b>eve</b>@example.net", "scheduled")
            ]}),
            StatusCode::OK,
        )
    });
    let api = client(&serve(routes), Some(TOKEN));

    let mut sessions = SessionListController::new();
    sessions.load(&api).await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let exporter = ReportExporter::new(dir.path(), false);
    let generated = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap().and_hms_opt(8, 0, 0).unwrap();

    for query in ["", "ana", "SCHEDULED", "nobody"] {
        sessions.search(query);
        let report = sessions_report(sessions.filtered(), sessions.query());
        assert_eq!(report.row_count(), sessions.filtered().len());

        let path = exporter.export(&format!("sessions-{}", query.len()), &report, generated).unwrap();
        let html = fs::read_to_string(path).unwrap();
        assert_eq!(html.matches("<tr class=\"row\">").count(), sessions.filtered().len(), "query {query:?}");
        assert!(!html.contains("<b>eve</b>"));
    }
}
