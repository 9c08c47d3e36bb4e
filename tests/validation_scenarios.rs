//! End-to-end validation tests
//!
//! Runs realistic documents through the same paths CI and the site use: the
//! lenient runner and the fail-fast accessors.

use std::fs;

use bombers_content::domains::{FeesData, SponsorsData, TeamsData};
use bombers_content::{
    load_domain, require_domain, ContentDomain, ContentError, ContentLoader, Domain, Issues,
    Outcome, SiteContent, ValidationRunner, ValidationTarget,
};
use serde_json::Value;
use tempfile::TempDir;

fn fixture(json: &str) -> Value {
    serde_json::from_str(json).unwrap()
}

fn issues_of(schema_result: Result<&Value, Issues>) -> Vec<(String, String)> {
    match schema_result {
        Ok(_) => Vec::new(),
        Err(issues) => issues
            .iter()
            .map(|i| (i.path.to_string(), i.message.clone()))
            .collect(),
    }
}

/// A content directory holding the embedded store, ready to be broken
fn content_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    let embedded = ContentLoader::embedded();
    for domain in Domain::ALL {
        let value = embedded.load_domain(domain).unwrap();
        fs::write(
            dir.path().join(domain.file_name()),
            serde_json::to_string_pretty(&value).unwrap(),
        )
        .unwrap();
    }
    dir
}

// =============================================================================
// Relational rules
// =============================================================================

#[test]
fn test_duplicate_jersey_in_one_team() {
    let doc = fixture(include_str!("fixtures/duplicate_jersey.json"));
    let schema = TeamsData::schema();

    let found = issues_of(schema.validate(&doc));
    assert_eq!(
        found,
        vec![(
            "teams.0.players".to_string(),
            "Each player on a team must have a unique jersey number".to_string()
        )]
    );
}

#[test]
fn test_duplicate_team_ids() {
    let doc = fixture(include_str!("fixtures/duplicate_team_ids.json"));

    // Each team is fine on its own
    for team in doc["teams"].as_array().unwrap() {
        assert!(bombers_content::domains::teams::team_schema()
            .validate(team)
            .is_ok());
    }

    let found = issues_of(TeamsData::schema().validate(&doc));
    assert_eq!(
        found,
        vec![(
            "teams".to_string(),
            "Each team must have a unique ID".to_string()
        )]
    );
}

#[test]
fn test_sponsor_website_is_optional() {
    let doc = fixture(include_str!("fixtures/sponsor_without_website.json"));
    let sponsors = SponsorsData::from_value(doc).unwrap();
    assert_eq!(sponsors.sponsors.len(), 2);
    assert!(sponsors.sponsors[1].website_url.is_none());
}

#[test]
fn test_unknown_faq_category_names_allowed_values() {
    let doc = fixture(include_str!("fixtures/fees_unknown_faq_category.json"));

    let found = issues_of(FeesData::schema().validate(&doc));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].0, "faqItems.0.category");
    for allowed in ["fees", "tryouts", "season", "general"] {
        assert!(found[0].1.contains(allowed), "message should list {}", allowed);
    }
}

// =============================================================================
// Runner
// =============================================================================

#[test]
fn test_embedded_store_is_valid() {
    let report = ValidationRunner::for_all_domains(&ContentLoader::embedded()).run();
    assert!(report.is_success(), "{}", report);
    assert_eq!(report.summary.total, Domain::ALL.len());
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn test_runner_reports_every_broken_file() {
    let dir = content_dir();
    fs::write(
        dir.path().join("teams.json"),
        include_str!("fixtures/duplicate_jersey.json"),
    )
    .unwrap();
    fs::write(
        dir.path().join("fees.json"),
        include_str!("fixtures/fees_unknown_faq_category.json"),
    )
    .unwrap();
    fs::write(dir.path().join("conduct.json"), "{ \"conductSections\": [").unwrap();

    let report = ValidationRunner::for_all_domains(&ContentLoader::from_dir(dir.path())).run();

    assert!(!report.is_success());
    assert_eq!(report.exit_code(), 1);
    assert_eq!(report.summary.total, 8);
    assert_eq!(report.summary.failed, 3);
    assert_eq!(report.summary.passed, 5);

    let names: Vec<&str> = report.results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "teams.json",
            "fees.json",
            "organization.json",
            "sponsors.json",
            "home.json",
            "spirit-wear.json",
            "contact.json",
            "conduct.json"
        ]
    );

    assert!(matches!(
        report.get("teams.json").unwrap().outcome,
        Outcome::Fail { .. }
    ));
    assert!(matches!(
        report.get("conduct.json").unwrap().outcome,
        Outcome::LoadFailed { .. }
    ));

    let text = report.to_string();
    assert!(text.contains("  ✗ [FAIL] teams.json"));
    assert!(text.contains("    teams.0.players — Each player on a team must have a unique jersey number"));
    assert!(text.contains("  ✓ [PASS] sponsors.json"));
    assert!(text.ends_with("❌ Validation failed. Please fix the errors above."));
}

#[test]
fn test_load_error_is_not_a_schema_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("sponsors.json"), "{ not json").unwrap();
    let loader = ContentLoader::from_dir(dir.path());

    let report = ValidationRunner::for_domains(&loader, &[Domain::Sponsors, Domain::Home]).run();
    match &report.results[0].outcome {
        Outcome::LoadFailed { reason } => assert!(reason.contains("sponsors.json")),
        other => panic!("Expected LoadFailed, got {:?}", other),
    }
    match &report.results[1].outcome {
        Outcome::LoadFailed { reason } => assert!(reason.contains("home.json")),
        other => panic!("Expected LoadFailed, got {:?}", other),
    }

    let err = load_domain::<SponsorsData>(&loader).unwrap_err();
    assert!(err.is_load_error());
    assert!(err.issues().is_none());
}

#[test]
fn test_repeated_runs_are_identical() {
    let dir = content_dir();
    fs::write(
        dir.path().join("teams.json"),
        include_str!("fixtures/duplicate_team_ids.json"),
    )
    .unwrap();
    let loader = ContentLoader::from_dir(dir.path());

    let first = ValidationRunner::for_all_domains(&loader).run();
    let second = ValidationRunner::for_all_domains(&loader).run();
    assert_eq!(first, second);
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}

#[test]
fn test_json_report_shape() {
    let doc = fixture(include_str!("fixtures/duplicate_jersey.json"));
    let report = ValidationRunner::new()
        .with_target(ValidationTarget::new("teams.json", TeamsData::schema(), Ok(doc)))
        .run();

    let json: Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["summary"]["failed"], 1);
    assert_eq!(json["results"][0]["name"], "teams.json");
    assert_eq!(json["results"][0]["status"], "fail");
    assert_eq!(json["results"][0]["issues"][0]["path"], "teams.0.players");
}

// =============================================================================
// Accessors
// =============================================================================

#[test]
fn test_accessors_refuse_invalid_content() {
    let dir = content_dir();
    fs::write(
        dir.path().join("teams.json"),
        include_str!("fixtures/duplicate_team_ids.json"),
    )
    .unwrap();
    let loader = ContentLoader::from_dir(dir.path());

    let err = require_domain::<TeamsData>(&loader).unwrap_err();
    match &err {
        ContentError::FatalStartup { domain, .. } => assert_eq!(domain, "teams.json"),
        other => panic!("Expected FatalStartup, got {:?}", other),
    }
    assert_eq!(err.issues().map(|i| i.len()), Some(1));

    assert!(SiteContent::load(&loader).is_err());
}

#[test]
fn test_accessors_hand_out_typed_content() {
    let dir = content_dir();
    let site = SiteContent::load(&ContentLoader::from_dir(dir.path())).unwrap();
    assert_eq!(site, SiteContent::embedded().unwrap());

    let fees = &site.fees;
    assert!(fees.faq_groups().iter().all(|(_, items)| !items.is_empty()));
    assert!(site.organization.board_members.len() >= 1);
}
