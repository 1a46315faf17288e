use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{PoolId, SaleId};
use crate::mapper::Model;
use crate::schema::{FieldKind, FieldSpec, ModelSchema};

pub const SALE_DETAIL_SCHEMA: ModelSchema = ModelSchema::new(
    "SaleDetailModel",
    &[
        FieldSpec::required("saleId", "Venta", FieldKind::Integer),
        FieldSpec::required("poolId", "Sede", FieldKind::Integer),
        FieldSpec::required("productName", "Producto", FieldKind::Text),
        FieldSpec::required("quantity", "Cantidad", FieldKind::Integer),
        FieldSpec::required("unitPrice", "Precio unitario", FieldKind::Number),
        FieldSpec::required("total", "Total", FieldKind::Number),
        FieldSpec::required("saleDate", "Fecha de venta", FieldKind::Date),
        FieldSpec::optional("paymentMethod", "Forma de pago", FieldKind::Text),
    ],
);

/// One sold line item (membership, class package, product).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaleDetail {
    pub sale_id: SaleId,
    pub pool_id: PoolId,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub total: f64,
    pub sale_date: NaiveDate,
    pub payment_method: Option<String>,
}

impl Model for SaleDetail {
    const SCHEMA: &'static ModelSchema = &SALE_DETAIL_SCHEMA;
}
