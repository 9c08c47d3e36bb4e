//! Local business sponsors (`sponsors.json`)

use serde::{Deserialize, Serialize};

use super::{ContentDomain, Domain};
use crate::schema::{formats, ArraySchema, ObjectSchema, StringSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sponsor {
    pub id: String,
    pub name: String,
    pub logo_url: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SponsorsData {
    pub sponsors: Vec<Sponsor>,
}

fn sponsor_schema() -> ObjectSchema {
    ObjectSchema::new()
        .field(
            "id",
            StringSchema::new().pattern(
                formats::slug(),
                r#"Sponsor ID must be in kebab-case format (e.g., "hometown-sports")"#,
            ),
        )
        .field("name", StringSchema::required("Sponsor name is required"))
        .field("logoUrl", StringSchema::required("Sponsor logo URL is required"))
        .field("description", StringSchema::required("Sponsor description is required"))
        .optional(
            "websiteUrl",
            StringSchema::new().url("Website URL must be a valid URL"),
        )
}

impl ContentDomain for SponsorsData {
    const DOMAIN: Domain = Domain::Sponsors;

    fn schema() -> ObjectSchema {
        ObjectSchema::new()
            .field("sponsors", ArraySchema::of(sponsor_schema()))
            .unique_by("sponsors", "id", "Each sponsor must have a unique ID")
    }
}
