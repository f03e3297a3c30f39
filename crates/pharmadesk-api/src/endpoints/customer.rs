//! `/customer` routes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, NameFilter};
use crate::error::ApiResult;

/// A walk-in customer record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Numeric record id.
    pub id: i64,
    /// Customer name.
    pub name: String,
    /// Record creation time.
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize)]
struct RegisterCustomerPayload<'a> {
    name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ModifyCustomerPayload<'a> {
    id: i64,
    new_data: RegisterCustomerPayload<'a>,
}

#[derive(Serialize)]
struct DeleteCustomerPayload<'a> {
    id: i64,
    name: &'a str,
}

#[derive(Serialize)]
struct CustomerDetailPayload {
    id: i64,
}

impl ApiClient {
    /// `GET /customer/{val}`.
    pub async fn search_customers(&self, filter: &NameFilter) -> ApiResult<Vec<Customer>> {
        let response = self
            .get(&format!("customer/{}", filter.path_segment()))
            .await?;
        Self::expect_json(&response)
    }

    /// `POST /customer/detail`.
    pub async fn customer_detail(&self, id: i64) -> ApiResult<Customer> {
        let response = self
            .post("customer/detail", &CustomerDetailPayload { id })
            .await?;
        Self::expect_json(&response)
    }

    /// `POST /customer`.
    pub async fn create_customer(&self, name: &str) -> ApiResult<()> {
        let response = self
            .post("customer", &RegisterCustomerPayload { name })
            .await?;
        Self::expect_ok(&response)
    }

    /// `PATCH /customer`.
    pub async fn modify_customer(&self, id: i64, name: &str) -> ApiResult<()> {
        let response = self
            .patch(
                "customer",
                &ModifyCustomerPayload {
                    id,
                    new_data: RegisterCustomerPayload { name },
                },
            )
            .await?;
        Self::expect_ok(&response)
    }

    /// `DELETE /customer`.
    pub async fn delete_customer(&self, id: i64, name: &str) -> ApiResult<()> {
        let response = self
            .delete("customer", &DeleteCustomerPayload { id, name })
            .await?;
        Self::expect_ok(&response)
    }
}
