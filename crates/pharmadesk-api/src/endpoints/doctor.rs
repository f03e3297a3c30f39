//! `/doctor` routes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, NameFilter};
use crate::error::ApiResult;

/// A prescribing doctor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    /// Numeric record id.
    pub id: i64,
    /// Doctor name.
    pub name: String,
    /// Record creation time.
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize)]
struct RegisterDoctorPayload<'a> {
    name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ModifyDoctorPayload<'a> {
    id: i64,
    new_data: RegisterDoctorPayload<'a>,
}

#[derive(Serialize)]
struct DeleteDoctorPayload<'a> {
    id: i64,
    name: &'a str,
}

#[derive(Serialize)]
struct DoctorDetailPayload {
    id: i64,
}

impl ApiClient {
    /// `GET /doctor/{val}`.
    pub async fn search_doctors(&self, filter: &NameFilter) -> ApiResult<Vec<Doctor>> {
        let response = self
            .get(&format!("doctor/{}", filter.path_segment()))
            .await?;
        Self::expect_json(&response)
    }

    /// `POST /doctor/detail`.
    pub async fn doctor_detail(&self, id: i64) -> ApiResult<Doctor> {
        let response = self
            .post("doctor/detail", &DoctorDetailPayload { id })
            .await?;
        Self::expect_json(&response)
    }

    /// `POST /doctor`.
    pub async fn create_doctor(&self, name: &str) -> ApiResult<()> {
        let response = self
            .post("doctor", &RegisterDoctorPayload { name })
            .await?;
        Self::expect_ok(&response)
    }

    /// `PATCH /doctor`.
    pub async fn modify_doctor(&self, id: i64, name: &str) -> ApiResult<()> {
        let response = self
            .patch(
                "doctor",
                &ModifyDoctorPayload {
                    id,
                    new_data: RegisterDoctorPayload { name },
                },
            )
            .await?;
        Self::expect_ok(&response)
    }

    /// `DELETE /doctor`.
    pub async fn delete_doctor(&self, id: i64, name: &str) -> ApiResult<()> {
        let response = self
            .delete("doctor", &DeleteDoctorPayload { id, name })
            .await?;
        Self::expect_ok(&response)
    }
}
