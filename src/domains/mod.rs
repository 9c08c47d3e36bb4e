//! Content domains
//!
//! Each page family of the site is backed by one JSON document. This module
//! names those documents and ties each one to its root schema and to the
//! typed record the rendering layer consumes.

pub mod conduct;
pub mod contact;
pub mod fees;
pub mod home;
pub mod organization;
pub mod spirit_wear;
pub mod sponsors;
pub mod teams;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::{ContentError, Result, SchemaValidationError};
use crate::schema::ObjectSchema;

pub use conduct::ConductData;
pub use contact::ContactData;
pub use fees::FeesData;
pub use home::HomeData;
pub use organization::OrganizationData;
pub use spirit_wear::SpiritWearData;
pub use sponsors::SponsorsData;
pub use teams::TeamsData;

/// One content document of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Domain {
    Teams,
    Fees,
    Organization,
    Sponsors,
    Home,
    SpiritWear,
    Contact,
    Conduct,
}

impl Domain {
    /// Every domain, in the order validation reports list them
    pub const ALL: [Domain; 8] = [
        Domain::Teams,
        Domain::Fees,
        Domain::Organization,
        Domain::Sponsors,
        Domain::Home,
        Domain::SpiritWear,
        Domain::Contact,
        Domain::Conduct,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Domain::Teams => "teams",
            Domain::Fees => "fees",
            Domain::Organization => "organization",
            Domain::Sponsors => "sponsors",
            Domain::Home => "home",
            Domain::SpiritWear => "spirit-wear",
            Domain::Contact => "contact",
            Domain::Conduct => "conduct",
        }
    }

    /// File name of the document in the content store
    pub fn file_name(&self) -> String {
        format!("{}.json", self.name())
    }

    pub fn from_name(name: &str) -> Option<Domain> {
        let name = name.strip_suffix(".json").unwrap_or(name);
        Self::ALL.into_iter().find(|d| d.name() == name)
    }

    /// Root schema of the document
    pub fn schema(&self) -> ObjectSchema {
        match self {
            Domain::Teams => TeamsData::schema(),
            Domain::Fees => FeesData::schema(),
            Domain::Organization => OrganizationData::schema(),
            Domain::Sponsors => SponsorsData::schema(),
            Domain::Home => HomeData::schema(),
            Domain::SpiritWear => SpiritWearData::schema(),
            Domain::Contact => ContactData::schema(),
            Domain::Conduct => ConductData::schema(),
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A typed root document that can only be built from content passing its schema
pub trait ContentDomain: Serialize + DeserializeOwned {
    const DOMAIN: Domain;

    fn schema() -> ObjectSchema;

    /// Validate then decode. Nothing reaches the typed record unless the
    /// whole document passed.
    fn from_value(value: Value) -> Result<Self> {
        if let Err(issues) = Self::schema().validate(&value) {
            return Err(SchemaValidationError {
                domain: Self::DOMAIN.file_name(),
                issues,
            }
            .into());
        }

        serde_json::from_value(value).map_err(|source| ContentError::Decode {
            domain: Self::DOMAIN.file_name(),
            source,
        })
    }
}
