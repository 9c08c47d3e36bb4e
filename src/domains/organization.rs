//! Board members and staff (`organization.json`)

use serde::{Deserialize, Serialize};

use super::{ContentDomain, Domain};
use crate::schema::{ArraySchema, ObjectSchema, StringSchema};

/// A person on the board or staff page. Both lists share this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardMember {
    pub name: String,
    pub title: String,
    pub photo_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationData {
    pub board_members: Vec<BoardMember>,
    pub staff: Vec<BoardMember>,
}

fn board_member_schema() -> ObjectSchema {
    ObjectSchema::new()
        .field("name", StringSchema::required("Name is required"))
        .field("title", StringSchema::required("Title is required"))
        .field("photoUrl", StringSchema::required("Photo URL is required"))
        .optional("bio", StringSchema::new())
}

impl ContentDomain for OrganizationData {
    const DOMAIN: Domain = Domain::Organization;

    fn schema() -> ObjectSchema {
        ObjectSchema::new()
            .field("boardMembers", ArraySchema::of(board_member_schema()))
            .field("staff", ArraySchema::of(board_member_schema()))
    }
}
