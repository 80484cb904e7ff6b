use chrono::NaiveDateTime;
use crate::config::constants::MEETING_LINK_UNAVAILABLE;
use crate::enums::api_error::ApiError;
use crate::errors::{ArcdeskError, ArcdeskResult};
use crate::services::starting_soon::StartingSoon;
use crate::structs::filtered_list::FilteredList;
use crate::structs::session::Session;
use crate::traits::backend::Backend;

/// Operator view over every booked session.
#[derive(Debug, Default)]
pub struct SessionListController {
    list: FilteredList<Session>,
    error: Option<String>,
    loading: bool,
    generation: u64,
}

impl SessionListController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a load and returns the generation its response must carry.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    /// Applies a load response unless a newer load has started since. Returns whether
    /// the response was applied.
    pub fn finish_load(&mut self, generation: u64, result: Result<Vec<Session>, ApiError>) -> ArcdeskResult<bool> {
        if generation != self.generation {
            log::debug!("Dropping stale session list response (generation {} < {})", generation, self.generation);
            return Ok(false);
        }

        self.loading = false;
        match result {
            Ok(sessions) => {
                self.list.set_items(sessions);
                Ok(true)
            }
            Err(e) => {
                let error = ArcdeskError::from_api("Failed to fetch sessions", e.without_message());
                self.error = Some(error.banner());
                Err(error)
            }
        }
    }

    /// Fetches every session and reapplies the current search.
    pub async fn load(&mut self, backend: &dyn Backend) -> ArcdeskResult<()> {
        let generation = self.begin_load();
        let result = backend.list_sessions().await;
        self.finish_load(generation, result)?;
        log::debug!("Loaded {} session(s)", self.list.items().len());
        Ok(())
    }

    /// Filters by code, email, slot code or status. A blank query shows everything.
    pub fn search(&mut self, query: &str) -> &[Session] {
        self.list.search(query)
    }

    /// All loaded sessions.
    pub fn sessions(&self) -> &[Session] {
        self.list.items()
    }

    /// Sessions matching the current search.
    pub fn filtered(&self) -> &[Session] {
        self.list.filtered()
    }

    pub fn query(&self) -> &str {
        self.list.query()
    }

    /// Page-level error banner from the last load.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Looks a session up by its code.
    pub fn find(&self, session_code: &str) -> Option<&Session> {
        self.list.items().iter().find(|s| s.session_code == session_code)
    }

    /// Replaces the row with the same `session_code` in both lists with the server's copy.
    pub fn apply_server_update(&mut self, updated: &Session) -> usize {
        let code = updated.session_code.clone();
        self.list.replace_where(|s| s.session_code == code, updated)
    }

    /// Earliest scheduled session still ahead of `now`.
    pub fn next_session(&self, now: NaiveDateTime) -> Option<&Session> {
        StartingSoon::next_session(self.list.items(), now)
    }

    pub fn is_starting_soon(&self, session: &Session, now: NaiveDateTime) -> bool {
        StartingSoon::is_starting_soon(session, self.list.items(), now)
    }

    /// Link to open for the "join" action on a row.
    pub fn join_link(&self, session_code: &str) -> ArcdeskResult<String> {
        let session = self
            .find(session_code)
            .ok_or_else(|| ArcdeskError::not_found("Session", session_code))?;

        if !session.status.is_actionable() {
            return Err(ArcdeskError::validation_error(
                "status",
                session.status.as_str(),
                "Cancelled or completed sessions cannot be joined",
                None,
            ));
        }

        session
            .joining_link
            .clone()
            .filter(|link| !link.trim().is_empty())
            .ok_or_else(|| ArcdeskError::validation_error("joining_link", "", MEETING_LINK_UNAVAILABLE, None))
    }

    /// One-line count for the table footer.
    pub fn summary(&self) -> String {
        if self.filtered().is_empty() {
            if self.query().trim().is_empty() {
                "No sessions found.".to_string()
            } else {
                "No sessions found matching your search.".to_string()
            }
        } else {
            format!("Showing {} of {} sessions", self.filtered().len(), self.sessions().len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::backend::MockBackend;
    use serde_json::json;

    fn session(code: &str, email: &str, status: &str) -> Session {
        serde_json::from_value(json!({
            "session_code": code,
            "email": email,
            "date": "2025-01-10",
            "time": "09:00-10:00",
            "runtime": 60,
            "status": status,
            "joining_link": format!("https://meet.example.com/{code}")
        }))
        .unwrap()
    }

    fn sessions() -> Vec<Session> {
        vec![
            session("SES-001", "ana@example.com", "scheduled"),
            session("SES-002", "bob@example.com", "completed"),
            session("SES-003", "cleo@example.org", "cancelled"),
        ]
    }

    #[tokio::test]
    async fn load_stores_full_and_filtered_lists() {
        let mut backend = MockBackend::new();
        backend.expect_list_sessions().times(1).returning(|| Ok(sessions()));

        let mut controller = SessionListController::new();
        controller.load(&backend).await.unwrap();

        assert_eq!(controller.sessions().len(), 3);
        assert_eq!(controller.filtered().len(), 3);
        assert!(controller.error().is_none());
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    async fn missing_token_sets_login_banner() {
        let mut backend = MockBackend::new();
        backend.expect_list_sessions().returning(|| Err(ApiError::MissingToken));

        let mut controller = SessionListController::new();
        assert!(controller.load(&backend).await.is_err());
        assert_eq!(controller.error(), Some("No authentication token found. Please log in."));
    }

    #[tokio::test]
    async fn http_failure_sets_status_text_banner() {
        let mut backend = MockBackend::new();
        backend.expect_list_sessions().returning(|| {
            Err(ApiError::Status { status: 500, status_text: "Internal Server Error".to_string(), message: None })
        });

        let mut controller = SessionListController::new();
        assert!(controller.load(&backend).await.is_err());
        assert_eq!(controller.error(), Some("Failed to fetch sessions: Internal Server Error"));
    }

    #[tokio::test]
    async fn load_banner_ignores_backend_message() {
        let mut backend = MockBackend::new();
        backend.expect_list_sessions().returning(|| {
            Err(ApiError::Status {
                status: 503,
                status_text: "Service Unavailable".to_string(),
                message: Some("mongo connection refused".to_string()),
            })
        });

        let mut controller = SessionListController::new();
        assert!(controller.load(&backend).await.is_err());
        assert_eq!(controller.error(), Some("Failed to fetch sessions: Service Unavailable"));
    }

    #[test]
    fn search_covers_code_email_and_status() {
        let mut controller = SessionListController::new();
        let generation = controller.begin_load();
        controller.finish_load(generation, Ok(sessions())).unwrap();

        assert_eq!(controller.search("ses-00").len(), 3);
        assert_eq!(controller.search("EXAMPLE.ORG").len(), 1);
        assert_eq!(controller.search("complete").len(), 1);
        assert_eq!(controller.search("").len(), 3);
        assert_eq!(controller.search("zzz").len(), 0);
        assert_eq!(controller.summary(), "No sessions found matching your search.");
    }

    #[test]
    fn search_matches_slot_code_when_backend_sends_it() {
        let mut with_slot = session("SES-009", "dan@example.com", "scheduled");
        with_slot.slot_code = Some("SLOT-42".to_string());

        let mut controller = SessionListController::new();
        let generation = controller.begin_load();
        controller.finish_load(generation, Ok(vec![with_slot, session("SES-010", "eve@example.com", "scheduled")])).unwrap();

        assert_eq!(controller.search("slot-42").len(), 1);
    }

    #[test]
    fn stale_load_is_discarded() {
        let mut controller = SessionListController::new();
        let first = controller.begin_load();
        let second = controller.begin_load();

        assert!(!controller.finish_load(first, Ok(sessions())).unwrap());
        assert!(controller.sessions().is_empty());
        assert!(controller.finish_load(second, Ok(vec![session("SES-100", "x@example.com", "scheduled")])).unwrap());
        assert_eq!(controller.sessions().len(), 1);
    }

    #[test]
    fn join_link_respects_status_and_missing_link() {
        let mut no_link = session("SES-004", "dee@example.com", "on-going");
        no_link.joining_link = None;

        let mut controller = SessionListController::new();
        let generation = controller.begin_load();
        let mut rows = sessions();
        rows.push(no_link);
        controller.finish_load(generation, Ok(rows)).unwrap();

        assert_eq!(controller.join_link("SES-001").unwrap(), "https://meet.example.com/SES-001");
        assert!(controller.join_link("SES-002").is_err());
        assert_eq!(controller.join_link("SES-004").unwrap_err().banner(), MEETING_LINK_UNAVAILABLE);
        assert!(matches!(controller.join_link("nope"), Err(ArcdeskError::NotFound { .. })));
    }
}
