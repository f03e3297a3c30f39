//! `/user` routes: account management.
//!
//! Register, delete, and admin-status changes are elevated mutations: the
//! backend re-checks a second admin password carried in the payload. That
//! password comes from the elevation gate and moves through here by value,
//! so nothing retains it once the request is built.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pharmadesk_session::AdminPassword;

use crate::client::{ApiClient, SearchFilter};
use crate::error::ApiResult;

/// A user account as the backend reports it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Numeric account id.
    pub id: i64,
    /// Login name.
    pub name: String,
    /// Whether the account holds admin privilege.
    pub admin: bool,
    /// Contact phone number.
    pub phone_number: String,
    /// Last successful login.
    pub last_logged_in: DateTime<Utc>,
    /// Account creation time.
    pub created_at: DateTime<Utc>,
}

/// Fields for creating or rewriting an account.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    /// Login name.
    pub name: String,
    /// Initial password.
    pub password: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Grant admin privilege.
    pub admin: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterUserPayload<'a> {
    admin_password: AdminPassword,
    #[serde(flatten)]
    new_data: &'a NewUser,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ModifyUserPayload<'a> {
    id: i64,
    new_data: RegisterUserPayload<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RemoveUserPayload {
    id: i64,
    admin_password: AdminPassword,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChangeAdminStatusPayload {
    id: i64,
    admin: bool,
    admin_password: AdminPassword,
}

#[derive(Serialize)]
struct UserDetailPayload {
    id: i64,
}

impl ApiClient {
    /// `GET /user/{params}/{val}`.
    pub async fn search_users(&self, filter: &SearchFilter) -> ApiResult<Vec<User>> {
        let response = self.get(&format!("user/{}", filter.path_suffix())).await?;
        Self::expect_json(&response)
    }

    /// `GET /user/current`: the account behind the current session.
    pub async fn current_user(&self) -> ApiResult<User> {
        let response = self.get("user/current").await?;
        Self::expect_json(&response)
    }

    /// `POST /user/detail`: one account by id.
    pub async fn user_detail(&self, id: i64) -> ApiResult<User> {
        let response = self.post("user/detail", &UserDetailPayload { id }).await?;
        Self::expect_json(&response)
    }

    /// `POST /user/register` (elevated).
    pub async fn register_user(
        &self,
        new_data: &NewUser,
        admin_password: AdminPassword,
    ) -> ApiResult<()> {
        let response = self
            .post(
                "user/register",
                &RegisterUserPayload {
                    admin_password,
                    new_data,
                },
            )
            .await?;
        Self::expect_ok(&response)
    }

    /// `PATCH /user/modify` (elevated).
    pub async fn modify_user(
        &self,
        id: i64,
        new_data: &NewUser,
        admin_password: AdminPassword,
    ) -> ApiResult<()> {
        let response = self
            .patch(
                "user/modify",
                &ModifyUserPayload {
                    id,
                    new_data: RegisterUserPayload {
                        admin_password,
                        new_data,
                    },
                },
            )
            .await?;
        Self::expect_ok(&response)
    }

    /// `DELETE /user` (elevated).
    pub async fn delete_user(&self, id: i64, admin_password: AdminPassword) -> ApiResult<()> {
        let response = self
            .delete("user", &RemoveUserPayload { id, admin_password })
            .await?;
        Self::expect_ok(&response)
    }

    /// `PATCH /user/admin` (elevated): grant or revoke admin privilege.
    pub async fn set_admin_status(
        &self,
        id: i64,
        admin: bool,
        admin_password: AdminPassword,
    ) -> ApiResult<()> {
        let response = self
            .patch(
                "user/admin",
                &ChangeAdminStatusPayload {
                    id,
                    admin,
                    admin_password,
                },
            )
            .await?;
        Self::expect_ok(&response)
    }
}
