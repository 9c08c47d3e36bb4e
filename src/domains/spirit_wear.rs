//! Spirit wear catalogue (`spirit-wear.json`)

use serde::{Deserialize, Serialize};

use super::{ContentDomain, Domain};
use crate::schema::{ArraySchema, EnumSchema, NumberSchema, ObjectSchema, StringSchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Apparel,
    Accessories,
    Headwear,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpiritWearProduct {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Dollars, normalized to a float when serialized
    pub price: f64,
    pub image_url: String,
    pub category: ProductCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
}

impl SpiritWearProduct {
    /// Where the buy button points: the product page if known, else the store
    pub fn purchase_url<'a>(&'a self, store_url: &'a str) -> &'a str {
        self.external_url.as_deref().unwrap_or(store_url)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpiritWearData {
    pub store_url: String,
    pub products: Vec<SpiritWearProduct>,
}

impl SpiritWearData {
    pub fn in_category(&self, category: ProductCategory) -> impl Iterator<Item = &SpiritWearProduct> {
        self.products.iter().filter(move |p| p.category == category)
    }
}

fn product_schema() -> ObjectSchema {
    ObjectSchema::new()
        .field("id", StringSchema::required("Product ID is required"))
        .field("name", StringSchema::required("Product name is required"))
        .field("description", StringSchema::required("Product description is required"))
        .field(
            "price",
            NumberSchema::new().positive("Product price must be a positive number"),
        )
        .field("imageUrl", StringSchema::required("Product image URL is required"))
        .field(
            "category",
            EnumSchema::new(
                &["apparel", "accessories", "headwear"],
                "Product category must be one of: apparel, accessories, headwear",
            ),
        )
        .optional("sizes", ArraySchema::of(StringSchema::new()))
        .optional("externalUrl", StringSchema::new())
}

impl ContentDomain for SpiritWearData {
    const DOMAIN: Domain = Domain::SpiritWear;

    fn schema() -> ObjectSchema {
        ObjectSchema::new()
            .field("storeUrl", StringSchema::new().url("Store URL must be a valid URL"))
            .field("products", ArraySchema::of(product_schema()))
            .unique_by("products", "id", "Each product must have a unique ID")
    }
}
