//! # The account API seam
//!
//! Every view-model in this crate talks to the backend through [`AccountService`].
//! The HTTP implementation lives in the `api` crate (`api::Session`). The
//! in-memory [`MemoryAccount`](crate::MemoryAccount) backs the tests.
//!
//! An implementation *is* the session: it owns whatever credential identifies the
//! signed-in user (a cookie jar for HTTP) and attaches it to every request. Pages
//! hold one instance in context and pass it to each operation explicitly.
//!
//! | Method | Endpoint |
//! |--------|----------|
//! | [`details`](AccountService::details) | `GET /user/details` |
//! | [`update_profile`](AccountService::update_profile) | `PUT /user/update` |
//! | [`change_password`](AccountService::change_password) | `PUT /user/change-password` |
//! | [`register`](AccountService::register) | `POST /user/register` |
//! | [`login`](AccountService::login) | `POST /user/login` |
//! | [`logout`](AccountService::logout) | `POST /user/logout` |
//! | [`activity`](AccountService::activity) | `GET /user/activity` |

use crate::error::ServiceError;
use crate::models::{
    ActivityRecord, LoginRequest, PasswordChangeRequest, RegistrationRequest, UserProfile,
};

/// Async interface to the account API.
///
/// Methods returning `Option<String>` yield the `message` of the success body.
pub trait AccountService {
    fn details(&self) -> impl std::future::Future<Output = Result<UserProfile, ServiceError>>;
    fn update_profile(
        &self,
        profile: &UserProfile,
    ) -> impl std::future::Future<Output = Result<Option<String>, ServiceError>>;
    fn change_password(
        &self,
        request: &PasswordChangeRequest,
    ) -> impl std::future::Future<Output = Result<Option<String>, ServiceError>>;
    fn register(
        &self,
        request: &RegistrationRequest,
    ) -> impl std::future::Future<Output = Result<(), ServiceError>>;
    fn login(
        &self,
        request: &LoginRequest,
    ) -> impl std::future::Future<Output = Result<(), ServiceError>>;
    fn logout(&self) -> impl std::future::Future<Output = Result<(), ServiceError>>;
    fn activity(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<ActivityRecord>, ServiceError>>;
}
