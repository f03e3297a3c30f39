//! `/medicine` routes: the inventory surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, SearchFilter};
use crate::error::ApiResult;

/// An inventory item. Prices are tracked per sales unit, up to three units
/// per item (e.g. tablet / strip / box).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medicine {
    /// Numeric record id.
    pub id: i64,
    /// Barcode as printed on the packaging.
    pub barcode: String,
    /// Item name.
    pub name: String,
    /// Quantity on hand, in first units.
    pub qty: f64,
    /// Smallest sales unit.
    pub first_unit: String,
    /// Price per first unit.
    pub first_price: f64,
    /// Middle sales unit, empty when unused.
    #[serde(default)]
    pub second_unit: String,
    /// Price per second unit.
    #[serde(default)]
    pub second_price: f64,
    /// Largest sales unit, empty when unused.
    #[serde(default)]
    pub third_unit: String,
    /// Price per third unit.
    #[serde(default)]
    pub third_price: f64,
    /// Record creation time.
    pub created_at: DateTime<Utc>,
}

/// Fields for creating or rewriting an inventory item.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMedicine {
    /// Barcode as printed on the packaging.
    pub barcode: String,
    /// Item name.
    pub name: String,
    /// Quantity on hand, in first units.
    pub qty: f64,
    /// Smallest sales unit.
    pub first_unit: String,
    /// Price per first unit.
    pub first_price: f64,
    /// Middle sales unit, empty when unused.
    pub second_unit: String,
    /// Price per second unit.
    pub second_price: f64,
    /// Largest sales unit, empty when unused.
    pub third_unit: String,
    /// Price per third unit.
    pub third_price: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ModifyMedicinePayload<'a> {
    id: i64,
    new_data: &'a NewMedicine,
}

#[derive(Serialize)]
struct DeleteMedicinePayload<'a> {
    id: i64,
    name: &'a str,
}

#[derive(Serialize)]
struct MedicineDetailPayload {
    id: i64,
}

impl ApiClient {
    /// `GET /medicine/{params}/{val}`.
    pub async fn search_medicines(&self, filter: &SearchFilter) -> ApiResult<Vec<Medicine>> {
        let response = self
            .get(&format!("medicine/{}", filter.path_suffix()))
            .await?;
        Self::expect_json(&response)
    }

    /// `POST /medicine/detail`.
    pub async fn medicine_detail(&self, id: i64) -> ApiResult<Medicine> {
        let response = self
            .post("medicine/detail", &MedicineDetailPayload { id })
            .await?;
        Self::expect_json(&response)
    }

    /// `POST /medicine`.
    pub async fn create_medicine(&self, new_data: &NewMedicine) -> ApiResult<()> {
        let response = self.post("medicine", new_data).await?;
        Self::expect_ok(&response)
    }

    /// `PATCH /medicine`.
    pub async fn modify_medicine(&self, id: i64, new_data: &NewMedicine) -> ApiResult<()> {
        let response = self
            .patch("medicine", &ModifyMedicinePayload { id, new_data })
            .await?;
        Self::expect_ok(&response)
    }

    /// `DELETE /medicine`.
    pub async fn delete_medicine(&self, id: i64, name: &str) -> ApiResult<()> {
        let response = self
            .delete("medicine", &DeleteMedicinePayload { id, name })
            .await?;
        Self::expect_ok(&response)
    }
}
