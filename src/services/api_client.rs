use std::sync::Arc;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tokio::sync::watch;
use crate::config::constants::timeout_duration_secs;
use crate::enums::api_error::ApiError;
use crate::enums::lead_status::LeadStatus;
use crate::services::auth_context::AuthContext;
use crate::services::rate_limiter::ApiRateLimiter;
use crate::services::slot_decoder::SlotDecoder;
use crate::structs::api_envelope::{ApiEnvelope, ApiMessage};
use crate::structs::auth::{AuthResponse, LoginRequest, RegisterRequest};
use crate::structs::config::api_config::ApiConfig;
use crate::structs::course::{Course, Lesson};
use crate::structs::lead::Lead;
use crate::structs::session::Session;
use crate::structs::slot::Slot;
use crate::structs::transaction::{TransactionFilters, TransactionPage};
use crate::structs::user::User;
use crate::traits::backend::Backend;

/// Which of the two backend hosts a request goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Host {
    Api,
    Public,
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    public_base_url: String,
    token: watch::Receiver<Option<String>>,
    rate_limiter: Arc<ApiRateLimiter>,
}

impl ApiClient {
    /// Follows `auth`, so a login or logout after construction applies to the next request.
    pub fn new(config: &ApiConfig, auth: &AuthContext) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout_duration_secs(config.timeout_secs))
            .user_agent(concat!("arcdesk/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
            token: auth.subscribe(),
            rate_limiter: Arc::new(ApiRateLimiter::new(config.rate_limit_per_minute, config.rate_limit_burst)),
        })
    }

    fn url(&self, host: Host, path: &str) -> String {
        let base = match host {
            Host::Api => &self.base_url,
            Host::Public => &self.public_base_url,
        };
        format!("{}/{}", base, path.trim_start_matches('/'))
    }

    /// Throttles, attaches the bearer token when `authed`, sends, and turns non-2xx
    /// answers into `ApiError::Status`. A missing token fails before anything is sent.
    async fn send(&self, request: RequestBuilder, authed: bool) -> Result<Response, ApiError> {
        let request = if authed {
            let token = self.token.borrow().clone().ok_or(ApiError::MissingToken)?;
            request.bearer_auth(token)
        } else {
            request
        };

        self.rate_limiter.acquire().await;

        let response = request
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiMessage>(&body).ok().and_then(|m| m.message);
        log::debug!("HTTP {} from backend: {}", status, body);

        Err(ApiError::Status {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown error").to_string(),
            message,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, host: Host, path: &str, authed: bool) -> Result<T, ApiError> {
        let response = self.send(self.client.get(self.url(host, path)), authed).await?;
        Ok(response.json::<T>().await?)
    }

    async fn get_data<T: DeserializeOwned>(&self, host: Host, path: &str, authed: bool) -> Result<T, ApiError> {
        let envelope: ApiEnvelope<T> = self.get_json(host, path, authed).await?;
        Ok(envelope.into_inner())
    }
}

#[async_trait]
impl Backend for ApiClient {

    async fn login(&self, request: LoginRequest) -> Result<AuthResponse, ApiError> {
        let builder = self.client.post(self.url(Host::Public, "auth/login")).json(&request);
        Ok(self.send(builder, false).await?.json().await?)
    }

    async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, ApiError> {
        let builder = self.client.post(self.url(Host::Public, "auth/register")).json(&request);
        Ok(self.send(builder, false).await?.json().await?)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let builder = self.client.post(self.url(Host::Api, "auth/logout"));
        self.send(builder, true).await?;
        Ok(())
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.get_data(Host::Api, "users/me", true).await
    }

    async fn list_sessions(&self) -> Result<Vec<Session>, ApiError> {
        self.get_data(Host::Api, "sessions", true).await
    }

    async fn sessions_for_email(&self, email: &str) -> Result<Vec<Session>, ApiError> {
        let builder = self.client.get(self.url(Host::Api, "sessions/email/"));
        let builder = append_path_segment(builder, email)?;
        let envelope: ApiEnvelope<Vec<Session>> = self.send(builder, true).await?.json().await?;
        Ok(envelope.into_inner())
    }

    async fn available_slots(&self, date: &str) -> Result<Vec<Slot>, ApiError> {
        let builder = self
            .client
            .get(self.url(Host::Api, "slots/available"))
            .query(&[("date", date)]);
        let body: Value = self.send(builder, true).await?.json().await?;
        SlotDecoder::decode(body)
    }

    async fn book_session(&self, slot_code: &str, email: &str) -> Result<(), ApiError> {
        let builder = self
            .client
            .post(self.url(Host::Api, "sessions"))
            .json(&json!({ "slot_code": slot_code, "email": email }));
        self.send(builder, true).await?;
        Ok(())
    }

    async fn reschedule_session(&self, session_code: &str, new_slot_code: &str) -> Result<Session, ApiError> {
        let builder = self.client.post(self.url(Host::Api, "sessions/"));
        let builder = append_path_segments(builder, &[session_code, "reschedule"])?;
        let builder = builder.json(&json!({ "new_slot_code": new_slot_code }));
        let envelope: ApiEnvelope<Session> = self.send(builder, true).await?.json().await?;
        Ok(envelope.into_inner())
    }

    async fn list_leads(&self) -> Result<Vec<Lead>, ApiError> {
        self.get_data(Host::Api, "leads", true).await
    }

    async fn update_lead_status(&self, lead_id: &str, status: LeadStatus) -> Result<(), ApiError> {
        let builder = self.client.put(self.url(Host::Api, "leads/"));
        let builder = append_path_segment(builder, lead_id)?.json(&json!({ "status": status }));
        self.send(builder, true).await?;
        Ok(())
    }

    async fn list_transactions(&self, page: u32, filters: &TransactionFilters) -> Result<TransactionPage, ApiError> {
        let builder = self
            .client
            .get(self.url(Host::Api, "transactions"))
            .query(&filters.query_pairs(page));
        Ok(self.send(builder, true).await?.json().await?)
    }

    async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.get_data(Host::Public, "courses", false).await
    }

    async fn get_course(&self, course_id: &str) -> Result<Course, ApiError> {
        let builder = append_path_segment(self.client.get(self.url(Host::Public, "courses/")), course_id)?;
        let envelope: ApiEnvelope<Course> = self.send(builder, false).await?.json().await?;
        Ok(envelope.into_inner())
    }

    async fn list_lessons(&self, course_id: &str) -> Result<Vec<Lesson>, ApiError> {
        let builder = self
            .client
            .get(self.url(Host::Public, "lessons"))
            .query(&[("course_id", course_id)]);
        let envelope: ApiEnvelope<Vec<Lesson>> = self.send(builder, false).await?.json().await?;
        Ok(envelope.into_inner())
    }
}

fn append_path_segment(builder: RequestBuilder, segment: &str) -> Result<RequestBuilder, ApiError> {
    append_path_segments(builder, &[segment])
}

/// Percent-encodes caller-supplied ids (emails, codes) as path segments.
fn append_path_segments(builder: RequestBuilder, segments: &[&str]) -> Result<RequestBuilder, ApiError> {
    let (client, request) = builder.build_split();
    let mut request = request.map_err(|e| ApiError::Network(e.to_string()))?;
    request
        .url_mut()
        .path_segments_mut()
        .map_err(|()| ApiError::Network("base URL cannot take path segments".to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(RequestBuilder::from_parts(client, request))
}
