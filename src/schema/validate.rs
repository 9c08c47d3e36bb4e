//! The schema interpreter

use serde_json::{Map, Value};
use std::collections::HashSet;

use super::{
    formats, ArraySchema, EnumSchema, Issue, IssuePath, Issues, NumberRule, NumberSchema,
    ObjectSchema, Refinement, Schema, StringRule, StringSchema,
};

/// Check `value` and push every issue found.
///
/// Returns how many of the pushed issues came from refinements, so callers
/// can tell single-field failures apart from relational ones.
pub(crate) fn check(
    schema: &Schema,
    value: &Value,
    path: &IssuePath,
    issues: &mut Issues,
) -> usize {
    match schema {
        Schema::String(s) => {
            check_string(s, value, path, issues);
            0
        }
        Schema::Number(n) => {
            check_number(n, value, path, issues);
            0
        }
        Schema::Enum(e) => {
            check_enum(e, value, path, issues);
            0
        }
        Schema::Array(a) => check_array(a, value, path, issues),
        Schema::Object(o) => check_object(o, value, path, issues),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn type_mismatch(expected: &str, value: &Value, path: &IssuePath) -> Issue {
    Issue::new(
        path.clone(),
        format!("Expected {}, received {}", expected, json_type(value)),
    )
}

fn check_string(schema: &StringSchema, value: &Value, path: &IssuePath, issues: &mut Issues) {
    let Some(s) = value.as_str() else {
        issues.push(type_mismatch("string", value, path));
        return;
    };

    for rule in &schema.rules {
        let (ok, message) = match rule {
            StringRule::MinLength { min, message } => (s.chars().count() >= *min, message),
            StringRule::Pattern { regex, message } => (regex.is_match(s), message),
            StringRule::Url { message } => (formats::is_url(s), message),
            StringRule::Email { message } => (formats::is_email(s), message),
        };
        if !ok {
            issues.push(Issue::new(path.clone(), message.clone()));
        }
    }
}

fn check_number(schema: &NumberSchema, value: &Value, path: &IssuePath, issues: &mut Issues) {
    let Some(n) = value.as_f64() else {
        issues.push(type_mismatch("number", value, path));
        return;
    };

    for rule in &schema.rules {
        let (ok, message) = match rule {
            NumberRule::Integer { message } => (n.fract() == 0.0, message),
            NumberRule::Positive { message } => (n > 0.0, message),
            NumberRule::Min { min, message } => (n >= *min, message),
            NumberRule::Max { max, message } => (n <= *max, message),
        };
        if !ok {
            issues.push(Issue::new(path.clone(), message.clone()));
        }
    }
}

fn check_enum(schema: &EnumSchema, value: &Value, path: &IssuePath, issues: &mut Issues) {
    match value.as_str() {
        Some(s) if schema.allows(s) => {}
        _ => issues.push(Issue::new(path.clone(), schema.message.clone())),
    }
}

fn check_array(
    schema: &ArraySchema,
    value: &Value,
    path: &IssuePath,
    issues: &mut Issues,
) -> usize {
    let Some(items) = value.as_array() else {
        issues.push(type_mismatch("array", value, path));
        return 0;
    };

    if let Some((min, message)) = &schema.min_items {
        if items.len() < *min {
            issues.push(Issue::new(path.clone(), message.clone()));
        }
    }

    items
        .iter()
        .enumerate()
        .map(|(i, item)| check(&schema.items, item, &path.index(i), issues))
        .sum()
}

pub(crate) fn check_object(
    schema: &ObjectSchema,
    value: &Value,
    path: &IssuePath,
    issues: &mut Issues,
) -> usize {
    let Some(object) = value.as_object() else {
        issues.push(type_mismatch("object", value, path));
        return 0;
    };

    let mut dirty: HashSet<&str> = HashSet::new();
    let mut relational = 0;

    for field in &schema.fields {
        let field_path = path.key(field.name.as_str());
        let before = issues.len();

        let nested = match object.get(&field.name) {
            None if field.optional => 0,
            None => {
                issues.push(Issue::new(field_path, "Required"));
                0
            }
            Some(field_value) => check(&field.schema, field_value, &field_path, issues),
        };
        relational += nested;

        // Nested refinement issues leave the field's own values intact.
        if issues.len() - before > nested {
            dirty.insert(field.name.as_str());
        }
    }

    // Relational rules only judge collections whose elements are individually valid.
    for refinement in &schema.refinements {
        if dirty.contains(refinement.field()) {
            continue;
        }
        if let Some(issue) = check_refinement(refinement, object, path) {
            issues.push(issue);
            relational += 1;
        }
    }

    relational
}

fn check_refinement(
    refinement: &Refinement,
    object: &Map<String, Value>,
    path: &IssuePath,
) -> Option<Issue> {
    match refinement {
        Refinement::UniqueBy {
            field,
            key,
            message,
        } => {
            let items = object.get(field)?.as_array()?;
            let mut seen = HashSet::with_capacity(items.len());
            let duplicate = items
                .iter()
                .filter_map(|item| item.get(key))
                .any(|k| !seen.insert(identity_key(k)));

            duplicate.then(|| Issue::new(path.key(field.as_str()), message.clone()))
        }
    }
}

/// Equality key where `7` and `7.0` collide, as they do for content authors
fn identity_key(value: &Value) -> String {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(f) => format!("n:{}", f),
            None => format!("n:{}", n),
        },
        Value::String(s) => format!("s:{}", s),
        other => format!("j:{}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::super::*;
    use serde_json::json;

    fn messages(issues: &Issues) -> Vec<(String, String)> {
        issues
            .iter()
            .map(|i| (i.path.to_string(), i.message.clone()))
            .collect()
    }

    #[test]
    fn test_missing_required_field() {
        let schema = ObjectSchema::new().field("name", StringSchema::required("Name is required"));
        let issues = schema.validate(&json!({})).unwrap_err();
        assert_eq!(messages(&issues), vec![("name".into(), "Required".into())]);
    }

    #[test]
    fn test_optional_field_absent_passes_but_null_fails() {
        let schema = ObjectSchema::new().optional("bio", StringSchema::new());
        assert!(schema.validate(&json!({})).is_ok());

        let issues = schema.validate(&json!({ "bio": null })).unwrap_err();
        assert_eq!(
            messages(&issues),
            vec![("bio".into(), "Expected string, received null".into())]
        );
    }

    #[test]
    fn test_root_type_mismatch() {
        let schema = ObjectSchema::new();
        let issues = schema.validate(&json!([1, 2])).unwrap_err();
        assert_eq!(
            messages(&issues),
            vec![("root".into(), "Expected object, received array".into())]
        );
    }

    #[test]
    fn test_number_rules_all_reported() {
        let schema = ObjectSchema::new().field(
            "n",
            NumberSchema::new()
                .integer("whole")
                .min(0.0, "range")
                .max(99.0, "range"),
        );
        let issues = schema.validate(&json!({ "n": 150.5 })).unwrap_err();
        assert_eq!(
            messages(&issues),
            vec![("n".into(), "whole".into()), ("n".into(), "range".into())]
        );
    }

    #[test]
    fn test_array_items_carry_index() {
        let schema = ObjectSchema::new().field(
            "rules",
            ArraySchema::of(StringSchema::required("Rule text is required"))
                .min_items(1, "at least one"),
        );
        let issues = schema.validate(&json!({ "rules": ["ok", ""] })).unwrap_err();
        assert_eq!(
            messages(&issues),
            vec![("rules.1".into(), "Rule text is required".into())]
        );

        let issues = schema.validate(&json!({ "rules": [] })).unwrap_err();
        assert_eq!(messages(&issues), vec![("rules".into(), "at least one".into())]);
    }

    #[test]
    fn test_enum_rejects_unknown_and_non_string() {
        let schema = ObjectSchema::new().field("c", EnumSchema::new(&["a", "b"], "must be a or b"));
        assert!(schema.validate(&json!({ "c": "a" })).is_ok());
        assert_eq!(schema.validate(&json!({ "c": "z" })).unwrap_err().len(), 1);
        assert_eq!(schema.validate(&json!({ "c": 3 })).unwrap_err().len(), 1);
    }

    #[test]
    fn test_unique_by_attaches_to_collection() {
        let schema = ObjectSchema::new()
            .field(
                "items",
                ArraySchema::of(ObjectSchema::new().field("id", StringSchema::new())),
            )
            .unique_by("items", "id", "ids must be unique");

        let issues = schema
            .validate(&json!({ "items": [{ "id": "a" }, { "id": "b" }, { "id": "a" }] }))
            .unwrap_err();
        assert_eq!(messages(&issues), vec![("items".into(), "ids must be unique".into())]);
    }

    #[test]
    fn test_unique_by_treats_integral_floats_as_equal() {
        let schema = ObjectSchema::new()
            .field(
                "players",
                ArraySchema::of(ObjectSchema::new().field("n", NumberSchema::new())),
            )
            .unique_by("players", "n", "dup");
        assert!(schema
            .validate(&json!({ "players": [{ "n": 7 }, { "n": 7.0 }] }))
            .is_err());
    }

    #[test]
    fn test_unique_by_skipped_when_collection_has_field_issues() {
        let schema = ObjectSchema::new()
            .field(
                "items",
                ArraySchema::of(ObjectSchema::new().field("id", StringSchema::required("id required"))),
            )
            .unique_by("items", "id", "dup");

        let issues = schema
            .validate(&json!({ "items": [{ "id": "" }, { "id": "" }] }))
            .unwrap_err();
        assert_eq!(
            messages(&issues),
            vec![
                ("items.0.id".into(), "id required".into()),
                ("items.1.id".into(), "id required".into()),
            ]
        );
    }

    #[test]
    fn test_nested_refinement_does_not_hide_outer_one() {
        let group = ObjectSchema::new()
            .field("id", StringSchema::new())
            .field(
                "members",
                ArraySchema::of(ObjectSchema::new().field("n", NumberSchema::new())),
            )
            .unique_by("members", "n", "member dup");
        let schema = ObjectSchema::new()
            .field("groups", ArraySchema::of(group))
            .unique_by("groups", "id", "group dup");

        let issues = schema
            .validate(&json!({
                "groups": [
                    { "id": "a", "members": [{ "n": 1 }, { "n": 1 }] },
                    { "id": "a", "members": [] }
                ]
            }))
            .unwrap_err();
        assert_eq!(
            messages(&issues),
            vec![
                ("groups.0.members".into(), "member dup".into()),
                ("groups".into(), "group dup".into()),
            ]
        );
    }

    #[test]
    fn test_valid_document_returned_unchanged() {
        let schema = ObjectSchema::new().field("name", StringSchema::required("req"));
        let doc = json!({ "name": "Bombers", "extra": true });
        assert_eq!(schema.validate(&doc).unwrap(), &doc);
    }
}
