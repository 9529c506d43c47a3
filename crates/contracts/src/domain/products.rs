use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::EntityTimestamps;
use crate::enums::ProductCategory;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub sku: String,
    pub category: ProductCategory,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i64,
    /// Percent off the list price, present only while a promotion runs.
    pub discount_percent: Option<f64>,
    pub is_active: bool,
    #[serde(flatten)]
    pub timestamps: EntityTimestamps,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductDto {
    pub id: Option<Uuid>,
    pub name: String,
    pub sku: String,
    pub category: ProductCategory,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i64,
    pub discount_percent: Option<f64>,
    #[serde(default)]
    pub is_active: bool,
}
