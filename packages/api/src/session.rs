//! # `Session`: the account API over HTTP
//!
//! A [`Session`] is the credential every page threads through its requests. On
//! native targets it owns a cookie store, so the cookie set by `POST /user/login`
//! rides along on every later call. In the browser the cookie jar belongs to the
//! page, and each request is sent with `credentials: include` instead.
//!
//! ## Status handling
//!
//! - 2xx: the body is decoded where the endpoint has one. For endpoints whose
//!   success body only carries a `message`, an unreadable body is treated as
//!   "no message" since the status already said yes.
//! - non-2xx: [`ServiceError::Rejected`] with the body's `message` when the
//!   body is JSON and carries one.
//! - no response at all: [`ServiceError::Transport`].

use account::{
    AccountService, ActivityRecord, LoginRequest, PasswordChangeRequest, RegistrationRequest,
    ServiceError, UserProfile,
};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::wire::{self, ActivityBody, DetailsBody, MessageBody};

#[derive(Clone, Debug)]
pub struct Session {
    config: ApiConfig,
    http: reqwest::Client,
}

impl Session {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = build_client(&config)?;
        Ok(Self { config, http })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!("{method} {path}");
        let builder = self.http.request(method, self.config.endpoint(path));
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }
}

/// Two sessions are the same if they talk to the same backend.
impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client(config: &ApiConfig) -> Result<reqwest::Client, reqwest::Error> {
    let mut builder = reqwest::Client::builder().cookie_store(true);
    if config.request_timeout_secs > 0 {
        builder = builder.timeout(std::time::Duration::from_secs(config.request_timeout_secs));
    }
    builder.build()
}

#[cfg(target_arch = "wasm32")]
fn build_client(_config: &ApiConfig) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().build()
}

/// Send a request, turning non-2xx answers into [`ServiceError::Rejected`].
async fn send(builder: RequestBuilder) -> Result<Response, ServiceError> {
    let response = builder
        .send()
        .await
        .map_err(|e| ServiceError::Transport(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .json::<MessageBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    Err(ServiceError::rejected(status.as_u16(), message))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
    let body = response
        .text()
        .await
        .map_err(|e| ServiceError::Transport(e.to_string()))?;
    serde_json::from_str(&body).map_err(|e| {
        error!("unexpected response body: {e}");
        ServiceError::Decode(e.to_string())
    })
}

async fn success_message(response: Response) -> Option<String> {
    response
        .json::<MessageBody>()
        .await
        .ok()
        .and_then(|body| body.message)
}

impl AccountService for Session {
    async fn details(&self) -> Result<UserProfile, ServiceError> {
        let response = send(self.request(Method::GET, wire::DETAILS)).await?;
        let body: DetailsBody = decode(response).await?;
        Ok(body.user)
    }

    async fn update_profile(&self, profile: &UserProfile) -> Result<Option<String>, ServiceError> {
        let response = send(self.request(Method::PUT, wire::UPDATE).json(profile)).await?;
        Ok(success_message(response).await)
    }

    async fn change_password(
        &self,
        request: &PasswordChangeRequest,
    ) -> Result<Option<String>, ServiceError> {
        let response =
            send(self.request(Method::PUT, wire::CHANGE_PASSWORD).json(request)).await?;
        Ok(success_message(response).await)
    }

    async fn register(&self, request: &RegistrationRequest) -> Result<(), ServiceError> {
        send(self.request(Method::POST, wire::REGISTER).json(request)).await?;
        Ok(())
    }

    async fn login(&self, request: &LoginRequest) -> Result<(), ServiceError> {
        send(self.request(Method::POST, wire::LOGIN).json(request)).await?;
        Ok(())
    }

    async fn logout(&self) -> Result<(), ServiceError> {
        send(self.request(Method::POST, wire::LOGOUT)).await?;
        Ok(())
    }

    async fn activity(&self) -> Result<Vec<ActivityRecord>, ServiceError> {
        let response = send(self.request(Method::GET, wire::ACTIVITY)).await?;
        let body: ActivityBody = decode(response).await?;
        Ok(body.activity_log)
    }
}
