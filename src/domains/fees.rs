//! Season fees, key dates and FAQ (`fees.json`)

use serde::{Deserialize, Serialize};

use super::{ContentDomain, Domain};
use crate::schema::{ArraySchema, EnumSchema, NumberSchema, ObjectSchema, StringSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeLine {
    pub label: String,
    /// Dollars. Whole amounts serialize back as floats (`150` becomes `150.0`).
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeFee {
    pub age_group: String,
    pub breakdown: Vec<FeeLine>,
    pub total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyDateCategory {
    Tryout,
    Registration,
    Season,
    Tournament,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyDate {
    pub id: String,
    pub label: String,
    /// Free text, e.g. "March 15, 2026" or "Late May"
    pub date: String,
    pub category: KeyDateCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaqCategory {
    Fees,
    Tryouts,
    Season,
    General,
}

impl FaqCategory {
    /// Order the FAQ section lists categories in
    pub const ORDER: [FaqCategory; 4] = [
        FaqCategory::Fees,
        FaqCategory::Tryouts,
        FaqCategory::Season,
        FaqCategory::General,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            FaqCategory::Fees => "Fees & Payments",
            FaqCategory::Tryouts => "Tryouts",
            FaqCategory::Season => "Season & Schedule",
            FaqCategory::General => "General",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: FaqCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeesData {
    pub age_fees: Vec<AgeFee>,
    pub key_dates: Vec<KeyDate>,
    pub faq_items: Vec<FaqItem>,
}

impl FeesData {
    /// Non-empty FAQ groups in display order
    pub fn faq_groups(&self) -> Vec<(FaqCategory, Vec<&FaqItem>)> {
        FaqCategory::ORDER
            .into_iter()
            .map(|category| {
                let items: Vec<&FaqItem> =
                    self.faq_items.iter().filter(|i| i.category == category).collect();
                (category, items)
            })
            .filter(|(_, items)| !items.is_empty())
            .collect()
    }

    pub fn fee_for(&self, age_group: &str) -> Option<&AgeFee> {
        self.age_fees.iter().find(|f| f.age_group == age_group)
    }
}

fn age_fee_schema() -> ObjectSchema {
    ObjectSchema::new()
        .field("ageGroup", StringSchema::required("Age group is required"))
        .field(
            "breakdown",
            ArraySchema::of(
                ObjectSchema::new()
                    .field("label", StringSchema::required("Fee breakdown label is required"))
                    .field(
                        "amount",
                        NumberSchema::new().positive("Fee amount must be a positive number"),
                    ),
            ),
        )
        .field(
            "total",
            NumberSchema::new().positive("Total fee must be a positive number"),
        )
        .optional("description", StringSchema::new())
}

fn key_date_schema() -> ObjectSchema {
    ObjectSchema::new()
        .field("id", StringSchema::required("Key date ID is required"))
        .field("label", StringSchema::required("Key date label is required"))
        .field("date", StringSchema::required("Key date is required"))
        .field(
            "category",
            EnumSchema::new(
                &["tryout", "registration", "season", "tournament"],
                "Key date category must be one of: tryout, registration, season, tournament",
            ),
        )
        .optional("description", StringSchema::new())
}

fn faq_item_schema() -> ObjectSchema {
    ObjectSchema::new()
        .field("id", StringSchema::required("FAQ ID is required"))
        .field("question", StringSchema::required("FAQ question is required"))
        .field("answer", StringSchema::required("FAQ answer is required"))
        .field(
            "category",
            EnumSchema::new(
                &["fees", "tryouts", "season", "general"],
                "FAQ category must be one of: fees, tryouts, season, general",
            ),
        )
}

impl ContentDomain for FeesData {
    const DOMAIN: Domain = Domain::Fees;

    fn schema() -> ObjectSchema {
        ObjectSchema::new()
            .field("ageFees", ArraySchema::of(age_fee_schema()))
            .field("keyDates", ArraySchema::of(key_date_schema()))
            .field("faqItems", ArraySchema::of(faq_item_schema()))
            .unique_by("keyDates", "id", "Each key date must have a unique ID")
            .unique_by("faqItems", "id", "Each FAQ item must have a unique ID")
    }
}
