use chrono::{NaiveDate, NaiveDateTime};
use crate::enums::session_status::SessionStatus;
use crate::errors::{ArcdeskError, ArcdeskResult};
use crate::helpers::date_helper::DateHelper;
use crate::services::slot_fetcher::SlotFetcher;
use crate::structs::appointment_stats::AppointmentStats;
use crate::structs::session::Session;
use crate::structs::slot::Slot;
use crate::traits::backend::Backend;

/// The signed-in student's own sessions plus booking.
#[derive(Debug, Default)]
pub struct Appointments {
    email: Option<String>,
    sessions: Vec<Session>,
}

impl Appointments {
    /// Empty view; call `load` to fill it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Email of the signed-in user, once loaded.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// The user's sessions, newest first.
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// Resolves the profile, then loads that email's sessions, newest date first.
    pub async fn load(&mut self, backend: &dyn Backend) -> ArcdeskResult<()> {
        let user = backend
            .current_user()
            .await
            .map_err(|e| ArcdeskError::from_api("Failed to load your profile", e))?;

        let mut sessions = backend
            .sessions_for_email(&user.email)
            .await
            .map_err(|e| ArcdeskError::from_api("Failed to fetch appointments", e.without_message()))?;

        sort_newest_first(&mut sessions);
        log::debug!("Loaded {} appointment(s) for {}", sessions.len(), user.email);

        self.email = Some(user.email);
        self.sessions = sessions;
        Ok(())
    }

    /// Totals for the header: all, upcoming and completed.
    pub fn stats(&self, now: NaiveDateTime) -> AppointmentStats {
        let count = |status: SessionStatus| self.sessions.iter().filter(|s| s.status == status).count();

        let upcoming = self
            .sessions
            .iter()
            .filter(|s| s.status == SessionStatus::Scheduled)
            .filter(|s| {
                DateHelper::start_of_range(&s.date, &s.time)
                    .or_else(|| DateHelper::parse_date(&s.date).and_then(|d| d.and_hms_opt(23, 59, 59)))
                    .is_some_and(|start| start > now)
            })
            .count();

        AppointmentStats {
            total: self.sessions.len(),
            completed: count(SessionStatus::Completed),
            upcoming,
            cancelled: count(SessionStatus::Cancelled),
        }
    }

    /// Booking queries slots by ISO date rather than `M/D/YYYY`.
    pub async fn available_slots(backend: &dyn Backend, date: NaiveDate) -> Vec<Slot> {
        SlotFetcher::fetch_available_slots(backend, &DateHelper::iso_date(date)).await
    }

    /// Books `slot` for `email`, falling back to the loaded profile's email.
    pub async fn book(&self, backend: &dyn Backend, slot: Option<&str>, email: Option<&str>) -> ArcdeskResult<()> {
        let Some(slot) = slot.map(str::trim).filter(|s| !s.is_empty()) else {
            return Err(ArcdeskError::validation_error("slot_code", "", "Please select a slot", None));
        };

        let Some(email) = email.or(self.email.as_deref()).map(str::trim).filter(|e| !e.is_empty()) else {
            return Err(ArcdeskError::validation_error("email", "", "Email is required", None));
        };

        backend
            .book_session(slot, email)
            .await
            .map_err(|e| ArcdeskError::from_api("Failed to book appointment", e))?;

        log::info!("✅ Booked slot {} for {}", slot, email);
        Ok(())
    }
}

/// Unparsable dates sink to the bottom; equal dates keep their order.
fn sort_newest_first(sessions: &mut [Session]) {
    sessions.sort_by(|a, b| {
        let a = DateHelper::parse_date(&a.date);
        let b = DateHelper::parse_date(&b.date);
        b.cmp(&a)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::api_error::ApiError;
    use crate::structs::user::User;
    use crate::traits::backend::MockBackend;
    use mockall::predicate::eq;
    use serde_json::json;

    fn appointment(code: &str, date: &str, status: &str) -> Session {
        serde_json::from_value(json!({
            "session_code": code,
            "email": "ana@example.com",
            "date": date,
            "time": "09:00-10:00",
            "status": status
        }))
        .unwrap()
    }

    fn backend_with_history() -> MockBackend {
        let mut backend = MockBackend::new();
        backend.expect_current_user().returning(|| {
            Ok(User { id: None, email: "ana@example.com".to_string(), full_name: None, user_type: None })
        });
        backend
            .expect_sessions_for_email()
            .with(eq("ana@example.com"))
            .returning(|_| {
                Ok(vec![
                    appointment("A", "2025-01-05", "completed"),
                    appointment("B", "not a date", "scheduled"),
                    appointment("C", "2025-02-01", "scheduled"),
                    appointment("D", "2025-01-20", "cancelled"),
                    appointment("E", "2024-12-01", "scheduled"),
                ])
            });
        backend
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn load_sorts_newest_first() {
        let mut appointments = Appointments::new();
        appointments.load(&backend_with_history()).await.unwrap();

        let codes: Vec<_> = appointments.sessions().iter().map(|s| s.session_code.as_str()).collect();
        assert_eq!(codes, vec!["C", "D", "A", "E", "B"]);
        assert_eq!(appointments.email(), Some("ana@example.com"));
    }

    #[tokio::test]
    async fn stats_count_only_future_scheduled_as_upcoming() {
        let mut appointments = Appointments::new();
        appointments.load(&backend_with_history()).await.unwrap();

        let stats = appointments.stats(now());
        assert_eq!(stats, AppointmentStats { total: 5, completed: 1, upcoming: 1, cancelled: 1 });
    }

    #[tokio::test]
    async fn booking_validates_before_calling_backend() {
        let mut backend = MockBackend::new();
        backend.expect_book_session().never();
        let appointments = Appointments::new();

        let error = appointments.book(&backend, None, Some("ana@example.com")).await.unwrap_err();
        assert_eq!(error.banner(), "Please select a slot");

        let error = appointments.book(&backend, Some("SLOT-1"), Some("  ")).await.unwrap_err();
        assert_eq!(error.banner(), "Email is required");
    }

    #[tokio::test]
    async fn booking_defaults_to_profile_email() {
        let mut backend = backend_with_history();
        backend
            .expect_book_session()
            .with(eq("SLOT-1"), eq("ana@example.com"))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut appointments = Appointments::new();
        appointments.load(&backend).await.unwrap();
        appointments.book(&backend, Some("SLOT-1"), None).await.unwrap();
    }

    #[tokio::test]
    async fn slots_are_queried_by_iso_date() {
        let mut backend = MockBackend::new();
        backend
            .expect_available_slots()
            .with(eq("2025-03-07"))
            .times(1)
            .returning(|_| Err(ApiError::Decode("unexpected shape".to_string())));

        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert!(Appointments::available_slots(&backend, date).await.is_empty());
    }
}
