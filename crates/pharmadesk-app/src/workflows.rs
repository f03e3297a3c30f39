//! Elevated mutations end to end: prompt, then mutate.
//!
//! Each workflow asks the [`ElevationGate`] for a credential first and only
//! builds the mutation request once one is in hand. A cancelled prompt
//! aborts before any network traffic is generated.

use std::sync::Arc;

use pharmadesk_api::{ApiClient, ApiResult, NewUser};

use crate::elevation::{ElevationGate, ElevationOutcome};

/// How an elevated mutation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationStatus {
    /// The backend accepted the mutation.
    Completed,
    /// The user declined elevation; nothing was sent.
    Aborted,
}

/// The elevated account-management flows.
pub struct UserAdministration {
    api: Arc<ApiClient>,
    gate: ElevationGate,
}

impl UserAdministration {
    /// Build the flows over the given client and gate.
    #[must_use]
    pub const fn new(api: Arc<ApiClient>, gate: ElevationGate) -> Self {
        Self { api, gate }
    }

    /// Register a new account after elevation.
    ///
    /// # Errors
    /// Returns the backend's rejection or the transport failure when the
    /// mutation itself fails; a declined prompt is not an error.
    pub async fn register_user(&self, new_data: &NewUser) -> ApiResult<MutationStatus> {
        let action = format!("register user {}", new_data.name);
        match self.gate.request(action).await {
            ElevationOutcome::Submitted(password) => {
                self.api.register_user(new_data, password).await?;
                Ok(MutationStatus::Completed)
            }
            ElevationOutcome::Cancelled => Ok(MutationStatus::Aborted),
        }
    }

    /// Rewrite an account after elevation.
    ///
    /// # Errors
    /// Returns the backend's rejection or the transport failure when the
    /// mutation itself fails; a declined prompt is not an error.
    pub async fn modify_user(&self, id: i64, new_data: &NewUser) -> ApiResult<MutationStatus> {
        let action = format!("modify user {id}");
        match self.gate.request(action).await {
            ElevationOutcome::Submitted(password) => {
                self.api.modify_user(id, new_data, password).await?;
                Ok(MutationStatus::Completed)
            }
            ElevationOutcome::Cancelled => Ok(MutationStatus::Aborted),
        }
    }

    /// Delete an account after elevation.
    ///
    /// # Errors
    /// Returns the backend's rejection or the transport failure when the
    /// mutation itself fails; a declined prompt is not an error.
    pub async fn delete_user(&self, id: i64) -> ApiResult<MutationStatus> {
        let action = format!("delete user {id}");
        match self.gate.request(action).await {
            ElevationOutcome::Submitted(password) => {
                self.api.delete_user(id, password).await?;
                Ok(MutationStatus::Completed)
            }
            ElevationOutcome::Cancelled => {
                tracing::info!(id, "user deletion aborted at the prompt");
                Ok(MutationStatus::Aborted)
            }
        }
    }

    /// Grant or revoke admin privilege after elevation.
    ///
    /// # Errors
    /// Returns the backend's rejection or the transport failure when the
    /// mutation itself fails; a declined prompt is not an error.
    pub async fn set_admin_status(&self, id: i64, admin: bool) -> ApiResult<MutationStatus> {
        let action = format!("set admin={admin} for user {id}");
        match self.gate.request(action).await {
            ElevationOutcome::Submitted(password) => {
                self.api.set_admin_status(id, admin, password).await?;
                Ok(MutationStatus::Completed)
            }
            ElevationOutcome::Cancelled => {
                tracing::info!(id, "admin change aborted at the prompt");
                Ok(MutationStatus::Aborted)
            }
        }
    }
}
