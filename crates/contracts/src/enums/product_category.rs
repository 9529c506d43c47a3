use serde::{Deserialize, Serialize};

/// Top-level product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    #[default]
    Electronics,
    Furniture,
    Stationery,
    Apparel,
    Services,
}

impl ProductCategory {
    pub fn code(&self) -> &'static str {
        match self {
            ProductCategory::Electronics => "electronics",
            ProductCategory::Furniture => "furniture",
            ProductCategory::Stationery => "stationery",
            ProductCategory::Apparel => "apparel",
            ProductCategory::Services => "services",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductCategory::Electronics => "Electronics",
            ProductCategory::Furniture => "Furniture",
            ProductCategory::Stationery => "Stationery",
            ProductCategory::Apparel => "Apparel",
            ProductCategory::Services => "Services",
        }
    }

    pub fn all() -> Vec<ProductCategory> {
        vec![
            ProductCategory::Electronics,
            ProductCategory::Furniture,
            ProductCategory::Stationery,
            ProductCategory::Apparel,
            ProductCategory::Services,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "electronics" => Some(ProductCategory::Electronics),
            "furniture" => Some(ProductCategory::Furniture),
            "stationery" => Some(ProductCategory::Stationery),
            "apparel" => Some(ProductCategory::Apparel),
            "services" => Some(ProductCategory::Services),
            _ => None,
        }
    }
}
