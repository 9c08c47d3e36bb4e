//! Landing page: hero, quick links and upcoming dates (`home.json`)

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ContentDomain, Domain};
use crate::schema::{ArraySchema, ObjectSchema, StringSchema};

/// Name of a presentational icon (e.g. `"Users"`).
///
/// Only checked for being non-empty here; the rendering layer owns the
/// lookup from key to an actual icon.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconKey(String);

impl IconKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickLink {
    pub icon_name: IconKey,
    pub title: String,
    pub description: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeKeyDate {
    pub label: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallToAction {
    pub text: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub headline: String,
    pub tagline: String,
    pub primary_cta: CallToAction,
    pub secondary_cta: CallToAction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeData {
    pub quick_links: Vec<QuickLink>,
    pub key_dates: Vec<HomeKeyDate>,
    pub hero_content: HeroContent,
}

pub(crate) fn icon_key_schema() -> StringSchema {
    StringSchema::required("Icon name is required")
}

fn quick_link_schema() -> ObjectSchema {
    ObjectSchema::new()
        .field("iconName", icon_key_schema())
        .field("title", StringSchema::required("Quick link title is required"))
        .field("description", StringSchema::required("Quick link description is required"))
        .field("href", StringSchema::required("Quick link href is required"))
}

fn cta_schema(which: &str) -> ObjectSchema {
    ObjectSchema::new()
        .field("text", StringSchema::required(format!("{} CTA text is required", which)))
        .field("href", StringSchema::required(format!("{} CTA href is required", which)))
}

fn hero_schema() -> ObjectSchema {
    ObjectSchema::new()
        .field("headline", StringSchema::required("Hero headline is required"))
        .field("tagline", StringSchema::required("Hero tagline is required"))
        .field("primaryCta", cta_schema("Primary"))
        .field("secondaryCta", cta_schema("Secondary"))
}

impl ContentDomain for HomeData {
    const DOMAIN: Domain = Domain::Home;

    fn schema() -> ObjectSchema {
        ObjectSchema::new()
            .field("quickLinks", ArraySchema::of(quick_link_schema()))
            .field(
                "keyDates",
                ArraySchema::of(
                    ObjectSchema::new()
                        .field("label", StringSchema::required("Key date label is required"))
                        .field("date", StringSchema::required("Key date is required")),
                ),
            )
            .field("heroContent", hero_schema())
    }
}
