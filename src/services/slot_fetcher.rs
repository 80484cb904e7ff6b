use chrono::NaiveDate;
use crate::helpers::date_helper::DateHelper;
use crate::structs::session::Session;
use crate::structs::slot::Slot;
use crate::traits::backend::Backend;

pub struct SlotFetcher;

impl SlotFetcher {
    /// Explicit date first, then the session's own date, then today as `M/D/YYYY`.
    pub fn resolve_date(explicit: Option<&str>, session: Option<&Session>, today: NaiveDate) -> String {
        explicit
            .map(str::trim)
            .filter(|date| !date.is_empty())
            .or_else(|| session.map(|s| s.date.trim()).filter(|date| !date.is_empty()))
            .map_or_else(|| DateHelper::slot_query_date(today), ToString::to_string)
    }

    /// Never fails: any error is logged and reported as "no slots".
    pub async fn fetch_available_slots(backend: &dyn Backend, date: &str) -> Vec<Slot> {
        match backend.available_slots(date).await {
            Ok(slots) => {
                log::debug!("📅 {} slot(s) available on {}", slots.len(), date);
                slots
            }
            Err(e) => {
                log::warn!("Error fetching slots for {}: {}", date, e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::api_error::ApiError;
    use crate::traits::backend::MockBackend;
    use mockall::predicate::eq;

    fn session(date: &str) -> Session {
        serde_json::from_value(serde_json::json!({ "session_code": "SES-1", "date": date })).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 3).unwrap()
    }

    #[test]
    fn date_priority_is_explicit_then_session_then_today() {
        let s = session("2025-01-10");
        assert_eq!(SlotFetcher::resolve_date(Some("2025-03-01"), Some(&s), today()), "2025-03-01");
        assert_eq!(SlotFetcher::resolve_date(None, Some(&s), today()), "2025-01-10");
        assert_eq!(SlotFetcher::resolve_date(Some("  "), Some(&session("")), today()), "2/3/2025");
        assert_eq!(SlotFetcher::resolve_date(None, None, today()), "2/3/2025");
    }

    #[tokio::test]
    async fn decode_failures_degrade_to_empty() {
        let mut backend = MockBackend::new();
        backend
            .expect_available_slots()
            .with(eq("2/3/2025"))
            .times(1)
            .returning(|_| Err(ApiError::Decode("unrecognized slot envelope".to_string())));

        assert!(SlotFetcher::fetch_available_slots(&backend, "2/3/2025").await.is_empty());
    }

    #[tokio::test]
    async fn transport_failures_degrade_to_empty() {
        let mut backend = MockBackend::new();
        backend
            .expect_available_slots()
            .returning(|_| Err(ApiError::Network("connection refused".to_string())));

        assert!(SlotFetcher::fetch_available_slots(&backend, "2025-01-10").await.is_empty());
    }
}
