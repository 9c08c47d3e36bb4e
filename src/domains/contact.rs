//! Contact page details and social links (`contact.json`)

use serde::{Deserialize, Serialize};

use super::home::{icon_key_schema, IconKey};
use super::{ContentDomain, Domain};
use crate::schema::{ArraySchema, ObjectSchema, StringSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon_name: IconKey,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactData {
    pub social_links: Vec<SocialLink>,
    pub contact_email: String,
    pub donation_url: String,
}

impl ContactData {
    pub fn social_link(&self, name: &str) -> Option<&SocialLink> {
        self.social_links.iter().find(|l| l.name == name)
    }
}

fn social_link_schema() -> ObjectSchema {
    ObjectSchema::new()
        .field("name", StringSchema::required("Social link name is required"))
        .field("url", StringSchema::new().url("Social link URL must be a valid URL"))
        .field("iconName", icon_key_schema())
}

impl ContentDomain for ContactData {
    const DOMAIN: Domain = Domain::Contact;

    fn schema() -> ObjectSchema {
        ObjectSchema::new()
            .field("socialLinks", ArraySchema::of(social_link_schema()))
            .field(
                "contactEmail",
                StringSchema::new().email("Contact email must be a valid email address"),
            )
            .field(
                "donationUrl",
                StringSchema::new().url("Donation URL must be a valid URL"),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_contact_details() {
        let doc = json!({
            "socialLinks": [
                { "name": "Facebook", "url": "https://facebook.com/ofallonbombers", "iconName": "Facebook" },
                { "name": "Instagram", "url": "instagram", "iconName": "Instagram" }
            ],
            "contactEmail": "ofallonbombers@gmail",
            "donationUrl": "https://paypal.me/ofallonbombers"
        });
        let issues = ContactData::schema().validate(&doc).unwrap_err();
        let paths: Vec<String> = issues.iter().map(|i| i.path.to_string()).collect();
        assert_eq!(paths, vec!["socialLinks.1.url", "contactEmail"]);
    }

    #[test]
    fn test_social_link_lookup() {
        let data = ContactData::from_value(json!({
            "socialLinks": [
                { "name": "Facebook", "url": "https://facebook.com/ofallonbombers", "iconName": "Facebook" }
            ],
            "contactEmail": "ofallonbombers@gmail.com",
            "donationUrl": "https://paypal.me/ofallonbombers"
        }))
        .unwrap();
        assert_eq!(data.social_link("Facebook").unwrap().icon_name.as_str(), "Facebook");
        assert!(data.social_link("Instagram").is_none());
    }
}
