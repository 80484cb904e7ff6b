use async_trait::async_trait;
use crate::enums::api_error::ApiError;
use crate::enums::lead_status::LeadStatus;
use crate::structs::auth::{AuthResponse, LoginRequest, RegisterRequest};
use crate::structs::course::{Course, Lesson};
use crate::structs::lead::Lead;
use crate::structs::session::Session;
use crate::structs::slot::Slot;
use crate::structs::transaction::{TransactionFilters, TransactionPage};
use crate::structs::user::User;

/// Every remote call the desk makes. Implemented over HTTP by `ApiClient`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Backend: Send + Sync {

    async fn login(&self, request: LoginRequest) -> Result<AuthResponse, ApiError>;

    async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, ApiError>;

    async fn logout(&self) -> Result<(), ApiError>;

    async fn current_user(&self) -> Result<User, ApiError>;

    async fn list_sessions(&self) -> Result<Vec<Session>, ApiError>;

    async fn sessions_for_email(&self, email: &str) -> Result<Vec<Session>, ApiError>;

    /// Open slots for `date`, already normalized from whichever envelope the backend used.
    async fn available_slots(&self, date: &str) -> Result<Vec<Slot>, ApiError>;

    async fn book_session(&self, slot_code: &str, email: &str) -> Result<(), ApiError>;

    async fn reschedule_session(&self, session_code: &str, new_slot_code: &str) -> Result<Session, ApiError>;

    async fn list_leads(&self) -> Result<Vec<Lead>, ApiError>;

    async fn update_lead_status(&self, lead_id: &str, status: LeadStatus) -> Result<(), ApiError>;

    async fn list_transactions(&self, page: u32, filters: &TransactionFilters) -> Result<TransactionPage, ApiError>;

    async fn list_courses(&self) -> Result<Vec<Course>, ApiError>;

    async fn get_course(&self, course_id: &str) -> Result<Course, ApiError>;

    async fn list_lessons(&self, course_id: &str) -> Result<Vec<Lesson>, ApiError>;
}
