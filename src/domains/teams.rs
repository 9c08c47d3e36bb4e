//! Teams, rosters and coaching staff (`teams.json`)

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::{ContentDomain, Domain};
use crate::schema::{formats, ArraySchema, EnumSchema, NumberSchema, ObjectSchema, StringSchema};

/// Age divisions the club fields teams in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "7U")]
    U7,
    #[serde(rename = "8U")]
    U8,
    #[serde(rename = "9U")]
    U9,
    #[serde(rename = "10U")]
    U10,
    #[serde(rename = "11U")]
    U11,
    #[serde(rename = "12U")]
    U12,
    #[serde(rename = "13U")]
    U13,
    #[serde(rename = "14U")]
    U14,
    #[serde(rename = "15U")]
    U15,
}

impl AgeGroup {
    pub const LABELS: [&'static str; 9] = ["7U", "8U", "9U", "10U", "11U", "12U", "13U", "14U", "15U"];

    pub fn label(&self) -> &'static str {
        Self::LABELS[self.max_age() as usize - 7]
    }

    /// Oldest player age allowed in the division
    pub fn max_age(&self) -> u8 {
        match self {
            AgeGroup::U7 => 7,
            AgeGroup::U8 => 8,
            AgeGroup::U9 => 9,
            AgeGroup::U10 => 10,
            AgeGroup::U11 => 11,
            AgeGroup::U12 => 12,
            AgeGroup::U13 => 13,
            AgeGroup::U14 => 14,
            AgeGroup::U15 => 15,
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoachRole {
    #[serde(rename = "Head Coach")]
    HeadCoach,
    #[serde(rename = "Assistant Coach")]
    AssistantCoach,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    #[serde(deserialize_with = "whole_number")]
    pub jersey_number: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coach {
    pub name: String,
    pub role: CoachRole,
    pub photo_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    pub age_group: AgeGroup,
    pub head_coach_name: String,
    pub season: String,
    pub players: Vec<Player>,
    pub coaches: Vec<Coach>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_photo_url: Option<String>,
}

impl Team {
    /// Players ordered by jersey number, as the roster table shows them
    pub fn roster(&self) -> Vec<&Player> {
        let mut players: Vec<&Player> = self.players.iter().collect();
        players.sort_by_key(|p| p.jersey_number);
        players
    }

    pub fn head_coach(&self) -> Option<&Coach> {
        self.coaches.iter().find(|c| c.role == CoachRole::HeadCoach)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamsData {
    pub current_season: String,
    pub teams: Vec<Team>,
}

impl TeamsData {
    pub fn find(&self, id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Teams grouped by division, youngest division first. Teams keep their
    /// document order within a division.
    pub fn by_age_group(&self) -> Vec<(AgeGroup, Vec<&Team>)> {
        let mut groups: BTreeMap<AgeGroup, Vec<&Team>> = BTreeMap::new();
        for team in &self.teams {
            groups.entry(team.age_group).or_default().push(team);
        }
        groups.into_iter().collect()
    }
}

fn whole_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let n = f64::deserialize(deserializer)?;
    if n.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(&n) {
        Ok(n as u8)
    } else {
        Err(D::Error::custom(format!("{} is not a valid jersey number", n)))
    }
}

fn player_schema() -> ObjectSchema {
    ObjectSchema::new()
        .field("name", StringSchema::required("Player name is required"))
        .field(
            "jerseyNumber",
            NumberSchema::new()
                .integer("Jersey number must be a whole number")
                .min(0.0, "Jersey number must be between 0 and 99")
                .max(99.0, "Jersey number must be between 0 and 99"),
        )
}

fn coach_schema() -> ObjectSchema {
    ObjectSchema::new()
        .field("name", StringSchema::required("Coach name is required"))
        .field(
            "role",
            EnumSchema::new(
                &["Head Coach", "Assistant Coach"],
                r#"Coach role must be "Head Coach" or "Assistant Coach""#,
            ),
        )
        .field("photoUrl", StringSchema::required("Coach photo URL is required"))
        .optional("bio", StringSchema::new())
}

pub fn team_schema() -> ObjectSchema {
    ObjectSchema::new()
        .field(
            "id",
            StringSchema::new().pattern(
                formats::slug(),
                r#"Team ID must be in kebab-case format (e.g., "10u-cook")"#,
            ),
        )
        .field("name", StringSchema::required("Team name is required"))
        .field(
            "ageGroup",
            EnumSchema::new(
                &AgeGroup::LABELS,
                r#"Age group must be in format "7U", "8U", ..., "15U""#,
            ),
        )
        .field("headCoachName", StringSchema::required("Head coach name is required"))
        .field(
            "season",
            StringSchema::required("Season is required").pattern(
                formats::season(),
                r#"Season must be in format "Season YYYY" (e.g., "Spring 2026")"#,
            ),
        )
        .field("players", ArraySchema::of(player_schema()))
        .field(
            "coaches",
            ArraySchema::of(coach_schema()).min_items(1, "Each team must have at least one coach"),
        )
        .optional("teamPhotoUrl", StringSchema::new())
        .unique_by(
            "players",
            "jerseyNumber",
            "Each player on a team must have a unique jersey number",
        )
}

impl ContentDomain for TeamsData {
    const DOMAIN: Domain = Domain::Teams;

    fn schema() -> ObjectSchema {
        ObjectSchema::new()
            .field(
                "currentSeason",
                StringSchema::new().pattern(
                    formats::season(),
                    r#"Current season must be in format "Season YYYY" (e.g., "Spring 2026")"#,
                ),
            )
            .field("teams", ArraySchema::of(team_schema()))
            .unique_by("teams", "id", "Each team must have a unique ID")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn team(id: &str, jerseys: &[u64]) -> Value {
        json!({
            "id": id,
            "name": "7U Adams",
            "ageGroup": "7U",
            "headCoachName": "Mike Adams",
            "season": "Spring 2026",
            "players": jerseys
                .iter()
                .map(|n| json!({ "name": format!("Player {}", n), "jerseyNumber": n }))
                .collect::<Vec<_>>(),
            "coaches": [{
                "name": "Mike Adams",
                "role": "Head Coach",
                "photoUrl": "/images/coaches/placeholder.jpg"
            }]
        })
    }

    fn paths(doc: &Value) -> Vec<String> {
        match TeamsData::schema().validate(doc) {
            Ok(_) => Vec::new(),
            Err(issues) => issues.iter().map(|i| i.path.to_string()).collect(),
        }
    }

    #[test]
    fn test_valid_teams_round_trip() {
        let doc = json!({
            "currentSeason": "Spring 2026",
            "teams": [team("7u-adams", &[5, 8, 12]), team("9u-johnson", &[1, 13])]
        });
        let data = TeamsData::from_value(doc.clone()).unwrap();
        assert_eq!(data.teams.len(), 2);
        assert_eq!(serde_json::to_value(&data).unwrap(), doc);
    }

    #[test]
    fn test_duplicate_jersey_numbers() {
        let doc = json!({ "currentSeason": "Spring 2026", "teams": [team("7u-adams", &[7, 3, 7])] });
        assert_eq!(paths(&doc), vec!["teams.0.players"]);
    }

    #[test]
    fn test_duplicate_team_ids() {
        let doc = json!({
            "currentSeason": "Spring 2026",
            "teams": [team("7u-adams", &[1]), team("7u-adams", &[2])]
        });
        let issues = TeamsData::schema().validate(&doc).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues.as_slice()[0].path.to_string(), "teams");
        assert_eq!(issues.as_slice()[0].message, "Each team must have a unique ID");
    }

    #[test]
    fn test_duplicate_jersey_and_team_id_both_reported() {
        let doc = json!({
            "currentSeason": "Spring 2026",
            "teams": [team("7u-adams", &[7, 7]), team("7u-adams", &[1])]
        });
        let issues = TeamsData::schema().validate(&doc).unwrap_err();
        let found: Vec<(String, String)> = issues
            .iter()
            .map(|i| (i.path.to_string(), i.message.clone()))
            .collect();
        assert_eq!(
            found,
            vec![
                (
                    "teams.0.players".to_string(),
                    "Each player on a team must have a unique jersey number".to_string()
                ),
                ("teams".to_string(), "Each team must have a unique ID".to_string()),
            ]
        );
    }

    #[test]
    fn test_team_season_format() {
        let mut t = team("7u-adams", &[1]);
        t["season"] = json!("Spring");
        let doc = json!({ "currentSeason": "Spring 2026", "teams": [t] });
        let issues = TeamsData::schema().validate(&doc).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues.as_slice()[0].path.to_string(), "teams.0.season");
        assert_eq!(
            issues.as_slice()[0].message,
            r#"Season must be in format "Season YYYY" (e.g., "Spring 2026")"#
        );
    }

    #[test]
    fn test_jersey_number_bounds() {
        for bad in [json!(-1), json!(100), json!(4.5)] {
            let mut t = team("7u-adams", &[1]);
            t["players"][0]["jerseyNumber"] = bad;
            let doc = json!({ "currentSeason": "Spring 2026", "teams": [t] });
            assert_eq!(paths(&doc), vec!["teams.0.players.0.jerseyNumber"]);
        }
        for good in [0, 99] {
            let doc = json!({ "currentSeason": "Spring 2026", "teams": [team("7u-adams", &[good])] });
            assert!(paths(&doc).is_empty());
        }
    }

    #[test]
    fn test_team_id_must_be_slug() {
        let doc = json!({ "currentSeason": "Spring 2026", "teams": [team("7U_Adams", &[1])] });
        assert_eq!(paths(&doc), vec!["teams.0.id"]);
    }

    #[test]
    fn test_age_group_enum() {
        let mut t = team("16u-old", &[1]);
        t["ageGroup"] = json!("16U");
        let doc = json!({ "currentSeason": "Spring 2026", "teams": [t] });
        assert_eq!(paths(&doc), vec!["teams.0.ageGroup"]);
    }

    #[test]
    fn test_coaches_required() {
        let mut t = team("7u-adams", &[1]);
        t["coaches"] = json!([]);
        let doc = json!({ "currentSeason": "Spring 2026", "teams": [t] });
        let issues = TeamsData::schema().validate(&doc).unwrap_err();
        assert_eq!(issues.as_slice()[0].message, "Each team must have at least one coach");
    }

    #[test]
    fn test_current_season_format() {
        let doc = json!({ "currentSeason": "Spring", "teams": [] });
        assert_eq!(paths(&doc), vec!["currentSeason"]);
    }

    #[test]
    fn test_grouping_and_roster_order() {
        let mut older = team("10u-cook", &[27, 3, 11]);
        older["ageGroup"] = json!("10U");
        let doc = json!({
            "currentSeason": "Spring 2026",
            "teams": [older, team("7u-adams", &[5]), team("7u-miller", &[4])]
        });
        let data = TeamsData::from_value(doc).unwrap();

        let groups = data.by_age_group();
        assert_eq!(groups[0].0, AgeGroup::U7);
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, AgeGroup::U10);

        let cook = data.find("10u-cook").unwrap();
        let numbers: Vec<u8> = cook.roster().iter().map(|p| p.jersey_number).collect();
        assert_eq!(numbers, vec![3, 11, 27]);
        assert_eq!(cook.head_coach().unwrap().name, "Mike Adams");
        assert_eq!(AgeGroup::U10.label(), "10U");
    }
}
