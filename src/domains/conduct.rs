//! Code of conduct (`conduct.json`)

use serde::{Deserialize, Serialize};

use super::{ContentDomain, Domain};
use crate::schema::{ArraySchema, ObjectSchema, StringSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConductSection {
    pub id: String,
    pub title: String,
    pub rules: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConductData {
    pub conduct_sections: Vec<ConductSection>,
}

impl ContentDomain for ConductData {
    const DOMAIN: Domain = Domain::Conduct;

    fn schema() -> ObjectSchema {
        let section = ObjectSchema::new()
            .field("id", StringSchema::required("Conduct section ID is required"))
            .field("title", StringSchema::required("Conduct section title is required"))
            .field(
                "rules",
                ArraySchema::of(StringSchema::required("Rule text is required"))
                    .min_items(1, "Each conduct section must have at least one rule"),
            );

        ObjectSchema::new()
            .field("conductSections", ArraySchema::of(section))
            .unique_by("conductSections", "id", "Each conduct section must have a unique ID")
    }
}
