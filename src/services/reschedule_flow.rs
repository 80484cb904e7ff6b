use chrono::NaiveDate;
use crate::config::constants::SELECT_SLOT_MESSAGE;
use crate::enums::api_error::ApiError;
use crate::enums::reschedule_state::RescheduleState;
use crate::errors::{ArcdeskError, ArcdeskResult};
use crate::services::session_list::SessionListController;
use crate::services::slot_fetcher::SlotFetcher;
use crate::structs::session::Session;
use crate::structs::slot::Slot;
use crate::traits::backend::Backend;

/// Slot lookup the flow is waiting on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRequest {
    pub generation: u64,
    pub date: String,
}

/// Reschedule call the flow is waiting on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RescheduleSubmission {
    pub generation: u64,
    pub session_code: String,
    pub new_slot_code: String,
}

/// Moves one session to a different slot.
///
/// `Closed -> LoadingSlots -> Ready -> Submitting -> Closed`. A failed submit drops
/// back to `Ready` so the operator can retry. Every open/close bumps the generation
/// and responses tagged with an older generation are ignored.
#[derive(Debug)]
pub struct RescheduleFlow {
    state: RescheduleState,
    session: Option<Session>,
    slots: Vec<Slot>,
    selected_slot: Option<String>,
    generation: u64,
}

impl Default for RescheduleFlow {
    fn default() -> Self {
        Self {
            state: RescheduleState::Closed,
            session: None,
            slots: Vec::new(),
            selected_slot: None,
            generation: 0,
        }
    }
}

impl RescheduleFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn state(&self) -> RescheduleState {
        self.state
    }

    /// Session being rescheduled, while the flow is open.
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn selected_slot(&self) -> Option<&str> {
        self.selected_slot.as_deref()
    }

    /// Confirmation is only possible from `Ready` with a slot picked.
    pub const fn can_confirm(&self) -> bool {
        matches!(self.state, RescheduleState::Ready) && self.selected_slot.is_some()
    }

    /// Starts a new flow for `session` and returns the slot lookup to run.
    pub fn open(&mut self, session: Session, explicit_date: Option<&str>, today: NaiveDate) -> SlotRequest {
        self.generation += 1;
        let date = SlotFetcher::resolve_date(explicit_date, Some(&session), today);

        log::debug!("Opening reschedule for {} (slots on {})", session.session_code, date);
        self.state = RescheduleState::LoadingSlots;
        self.session = Some(session);
        self.slots.clear();
        self.selected_slot = None;

        SlotRequest { generation: self.generation, date }
    }

    /// Returns whether the slots were taken; stale or closed-flow responses are dropped.
    pub fn apply_slots(&mut self, generation: u64, slots: Vec<Slot>) -> bool {
        if generation != self.generation || self.state != RescheduleState::LoadingSlots {
            log::debug!("Dropping stale slot response (generation {})", generation);
            return false;
        }
        self.slots = slots;
        self.state = RescheduleState::Ready;
        true
    }

    /// No-op (returns `false`) when there is nothing to pick from.
    pub fn select_slot(&mut self, slot_code: &str) -> ArcdeskResult<bool> {
        if self.slots.is_empty() {
            return Ok(false);
        }
        if !self.slots.iter().any(|slot| slot.slot_code == slot_code) {
            return Err(ArcdeskError::validation_error(
                "new_slot_code",
                slot_code,
                "Selected slot is not available",
                Some("Pick one of the listed slots"),
            ));
        }
        self.selected_slot = Some(slot_code.to_string());
        Ok(true)
    }

    /// Validates and moves to `Submitting`. No request may be issued if this fails.
    pub fn begin_submit(&mut self) -> ArcdeskResult<RescheduleSubmission> {
        let Some(session_code) = self.session.as_ref().map(|s| s.session_code.clone()) else {
            return Err(ArcdeskError::validation_error("session", "", "No session is being rescheduled", None));
        };

        let Some(new_slot_code) = self.selected_slot.clone() else {
            return Err(ArcdeskError::validation_error("new_slot_code", "", SELECT_SLOT_MESSAGE, None));
        };

        if self.state != RescheduleState::Ready {
            return Err(ArcdeskError::validation_error(
                "state",
                &format!("{:?}", self.state),
                "Reschedule is not ready to submit",
                None,
            ));
        }

        self.state = RescheduleState::Submitting;
        Ok(RescheduleSubmission {
            generation: self.generation,
            session_code,
            new_slot_code,
        })
    }

    /// Applies the reschedule response. The server's copy of the session always lands
    /// in the list since the move has been committed; the flow itself only closes when
    /// the response belongs to the current generation.
    pub fn complete(
        &mut self,
        submission: &RescheduleSubmission,
        result: Result<Session, ApiError>,
        sessions: &mut SessionListController,
    ) -> ArcdeskResult<Session> {
        let current = submission.generation == self.generation;

        match result {
            Ok(updated) => {
                sessions.apply_server_update(&updated);
                if current {
                    self.close();
                }
                log::info!("✅ Session {} moved to slot {}", submission.session_code, submission.new_slot_code);
                Ok(updated)
            }
            Err(e) => {
                if current {
                    self.state = RescheduleState::Ready;
                }
                Err(ArcdeskError::from_api("Failed to reschedule session", e))
            }
        }
    }

    /// Drops the flow; responses still in flight are ignored.
    pub fn close(&mut self) {
        self.generation += 1;
        self.state = RescheduleState::Closed;
        self.session = None;
        self.slots.clear();
        self.selected_slot = None;
    }

    /// `open` followed by the slot fetch it asks for.
    pub async fn open_and_load(
        &mut self,
        backend: &dyn Backend,
        session: Session,
        explicit_date: Option<&str>,
        today: NaiveDate,
    ) -> &[Slot] {
        let request = self.open(session, explicit_date, today);
        let slots = SlotFetcher::fetch_available_slots(backend, &request.date).await;
        self.apply_slots(request.generation, slots);
        &self.slots
    }

    /// Sends the selected slot and, on success, replaces the session in `sessions`.
    pub async fn submit(&mut self, backend: &dyn Backend, sessions: &mut SessionListController) -> ArcdeskResult<Session> {
        let submission = self.begin_submit()?;
        let result = backend
            .reschedule_session(&submission.session_code, &submission.new_slot_code)
            .await;
        self.complete(&submission, result, sessions)
    }
}
