//! `/supplier` routes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, SearchFilter};
use crate::error::ApiResult;

/// A supplier as the backend reports it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    /// Numeric record id.
    pub id: i64,
    /// Company name.
    pub name: String,
    /// Mailing address.
    pub address: String,
    /// Switchboard number.
    pub company_phone_number: String,
    /// Name of the contact person.
    pub contact_person_name: String,
    /// Direct number of the contact person.
    pub contact_person_number: String,
    /// Payment terms, free-form.
    pub terms: String,
    /// Whether the vendor is taxable.
    pub vendor_is_taxable: bool,
    /// Record creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub last_modified: DateTime<Utc>,
    /// Name of the user who last modified the record.
    pub last_modified_by_user_name: String,
}

/// Fields for creating or rewriting a supplier.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSupplier {
    /// Company name.
    pub name: String,
    /// Mailing address.
    pub address: String,
    /// Switchboard number.
    pub company_phone_number: String,
    /// Name of the contact person.
    pub contact_person_name: String,
    /// Direct number of the contact person.
    pub contact_person_number: String,
    /// Payment terms, free-form.
    pub terms: String,
    /// Whether the vendor is taxable.
    pub vendor_is_taxable: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ModifySupplierPayload<'a> {
    id: i64,
    new_data: &'a NewSupplier,
}

#[derive(Serialize)]
struct DeleteSupplierPayload<'a> {
    id: i64,
    name: &'a str,
}

#[derive(Serialize)]
struct SupplierDetailPayload {
    id: i64,
}

impl ApiClient {
    /// `GET /supplier/{params}/{val}`.
    pub async fn search_suppliers(&self, filter: &SearchFilter) -> ApiResult<Vec<Supplier>> {
        let response = self
            .get(&format!("supplier/{}", filter.path_suffix()))
            .await?;
        Self::expect_json(&response)
    }

    /// `POST /supplier/detail`.
    pub async fn supplier_detail(&self, id: i64) -> ApiResult<Supplier> {
        let response = self
            .post("supplier/detail", &SupplierDetailPayload { id })
            .await?;
        Self::expect_json(&response)
    }

    /// `POST /supplier`.
    pub async fn create_supplier(&self, new_data: &NewSupplier) -> ApiResult<()> {
        let response = self.post("supplier", new_data).await?;
        Self::expect_ok(&response)
    }

    /// `PATCH /supplier`.
    pub async fn modify_supplier(&self, id: i64, new_data: &NewSupplier) -> ApiResult<()> {
        let response = self
            .patch("supplier", &ModifySupplierPayload { id, new_data })
            .await?;
        Self::expect_ok(&response)
    }

    /// `DELETE /supplier`.
    pub async fn delete_supplier(&self, id: i64, name: &str) -> ApiResult<()> {
        let response = self
            .delete("supplier", &DeleteSupplierPayload { id, name })
            .await?;
        Self::expect_ok(&response)
    }
}
