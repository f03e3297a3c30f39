//! `/company-profile` routes: pharmacy identity shown on printed documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiResult;

/// The pharmacy's own profile. All routes on this surface require an
/// admin session token.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    /// Numeric record id.
    pub id: i64,
    /// Registered business name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Government business registration number.
    pub business_number: String,
    /// Responsible pharmacist.
    pub pharmacist: String,
    /// The pharmacist's license number.
    pub pharmacist_license_number: String,
    /// Record creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub last_modified: DateTime<Utc>,
}

/// Fields for creating or rewriting the company profile.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCompanyProfile {
    /// Registered business name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Government business registration number.
    pub business_number: String,
    /// Responsible pharmacist.
    pub pharmacist: String,
    /// The pharmacist's license number.
    pub pharmacist_license_number: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ModifyCompanyProfilePayload<'a> {
    id: i64,
    new_data: &'a NewCompanyProfile,
}

#[derive(Serialize)]
struct DeleteCompanyProfilePayload<'a> {
    id: i64,
    name: &'a str,
}

impl ApiClient {
    /// `GET /company-profile`.
    pub async fn company_profiles(&self) -> ApiResult<Vec<CompanyProfile>> {
        let response = self.get("company-profile").await?;
        Self::expect_json(&response)
    }

    /// `POST /company-profile`.
    pub async fn create_company_profile(&self, new_data: &NewCompanyProfile) -> ApiResult<()> {
        let response = self.post("company-profile", new_data).await?;
        Self::expect_ok(&response)
    }

    /// `PATCH /company-profile`.
    pub async fn modify_company_profile(
        &self,
        id: i64,
        new_data: &NewCompanyProfile,
    ) -> ApiResult<()> {
        let response = self
            .patch("company-profile", &ModifyCompanyProfilePayload { id, new_data })
            .await?;
        Self::expect_ok(&response)
    }

    /// `DELETE /company-profile`.
    pub async fn delete_company_profile(&self, id: i64, name: &str) -> ApiResult<()> {
        let response = self
            .delete("company-profile", &DeleteCompanyProfilePayload { id, name })
            .await?;
        Self::expect_ok(&response)
    }
}
