//! `/patient` routes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, NameFilter};
use crate::error::ApiResult;

/// A patient a prescription can be issued for.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Numeric record id.
    pub id: i64,
    /// Patient name.
    pub name: String,
    /// Age in years.
    pub age: i32,
    /// Record creation time.
    pub created_at: DateTime<Utc>,
}

/// Fields for creating or rewriting a patient record.
#[derive(Debug, Clone, Serialize)]
pub struct NewPatient {
    /// Patient name.
    pub name: String,
    /// Age in years.
    pub age: i32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ModifyPatientPayload<'a> {
    id: i64,
    new_data: &'a NewPatient,
}

#[derive(Serialize)]
struct DeletePatientPayload<'a> {
    id: i64,
    name: &'a str,
}

#[derive(Serialize)]
struct PatientDetailPayload {
    id: i64,
}

impl ApiClient {
    /// `GET /patient/{val}`.
    pub async fn search_patients(&self, filter: &NameFilter) -> ApiResult<Vec<Patient>> {
        let response = self
            .get(&format!("patient/{}", filter.path_segment()))
            .await?;
        Self::expect_json(&response)
    }

    /// `POST /patient/detail`.
    pub async fn patient_detail(&self, id: i64) -> ApiResult<Patient> {
        let response = self
            .post("patient/detail", &PatientDetailPayload { id })
            .await?;
        Self::expect_json(&response)
    }

    /// `POST /patient`.
    pub async fn create_patient(&self, new_data: &NewPatient) -> ApiResult<()> {
        let response = self.post("patient", new_data).await?;
        Self::expect_ok(&response)
    }

    /// `PATCH /patient`.
    pub async fn modify_patient(&self, id: i64, new_data: &NewPatient) -> ApiResult<()> {
        let response = self
            .patch("patient", &ModifyPatientPayload { id, new_data })
            .await?;
        Self::expect_ok(&response)
    }

    /// `DELETE /patient`.
    pub async fn delete_patient(&self, id: i64, name: &str) -> ApiResult<()> {
        let response = self
            .delete("patient", &DeletePatientPayload { id, name })
            .await?;
        Self::expect_ok(&response)
    }
}
