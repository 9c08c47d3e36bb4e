//! Declarative content schemas
//!
//! A schema is a plain value describing the shape a JSON document must have:
//! which fields exist, which are optional, and which constraints each value
//! must satisfy. Every constraint carries the human-readable message reported
//! when it is violated. A single interpreter in [`validate`] walks a schema
//! and a document side by side and collects [`Issue`]s.
//!
//! ```
//! use bombers_content::schema::{ArraySchema, NumberSchema, ObjectSchema, StringSchema};
//!
//! let player = ObjectSchema::new()
//!     .field("name", StringSchema::new().min_len(1, "Player name is required"))
//!     .field("jerseyNumber", NumberSchema::new().integer("Jersey number must be a whole number"));
//!
//! let roster = ObjectSchema::new()
//!     .field("players", ArraySchema::of(player))
//!     .unique_by("players", "jerseyNumber", "Each player on a team must have a unique jersey number");
//!
//! let doc = serde_json::json!({ "players": [
//!     { "name": "Noah", "jerseyNumber": 7 },
//!     { "name": "Liam", "jerseyNumber": 7 },
//! ]});
//! let issues = roster.validate(&doc).unwrap_err();
//! assert_eq!(issues.as_slice()[0].path.to_string(), "players");
//! ```

pub mod formats;
pub mod issue;
mod validate;

pub use issue::{Issue, IssuePath, Issues, PathSegment};

use regex::Regex;
use serde_json::Value;

/// Any schema node
#[derive(Debug, Clone)]
pub enum Schema {
    String(StringSchema),
    Number(NumberSchema),
    Enum(EnumSchema),
    Array(Box<ArraySchema>),
    Object(ObjectSchema),
}

impl Schema {
    /// Validate a document against this schema.
    ///
    /// Conforming documents are returned untouched; otherwise every violated
    /// constraint is reported in document order.
    pub fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, Issues> {
        let mut issues = Issues::default();
        validate::check(self, value, &IssuePath::root(), &mut issues);
        if issues.is_empty() {
            Ok(value)
        } else {
            Err(issues)
        }
    }

    /// JSON type name this schema expects, as used in type mismatch messages
    pub fn expected_type(&self) -> &'static str {
        match self {
            Schema::String(_) | Schema::Enum(_) => "string",
            Schema::Number(_) => "number",
            Schema::Array(_) => "array",
            Schema::Object(_) => "object",
        }
    }
}

/// Constraint on a string value
#[derive(Debug, Clone)]
pub enum StringRule {
    MinLength { min: usize, message: String },
    Pattern { regex: Regex, message: String },
    Url { message: String },
    Email { message: String },
}

#[derive(Debug, Clone, Default)]
pub struct StringSchema {
    pub rules: Vec<StringRule>,
}

impl StringSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require at least `min` characters
    pub fn min_len(mut self, min: usize, message: impl Into<String>) -> Self {
        self.rules.push(StringRule::MinLength {
            min,
            message: message.into(),
        });
        self
    }

    pub fn pattern(mut self, regex: &Regex, message: impl Into<String>) -> Self {
        self.rules.push(StringRule::Pattern {
            regex: regex.clone(),
            message: message.into(),
        });
        self
    }

    pub fn url(mut self, message: impl Into<String>) -> Self {
        self.rules.push(StringRule::Url {
            message: message.into(),
        });
        self
    }

    pub fn email(mut self, message: impl Into<String>) -> Self {
        self.rules.push(StringRule::Email {
            message: message.into(),
        });
        self
    }

    /// Shorthand for a required, non-empty text field
    pub fn required(message: impl Into<String>) -> Self {
        Self::new().min_len(1, message)
    }
}

/// Constraint on a numeric value
#[derive(Debug, Clone)]
pub enum NumberRule {
    Integer { message: String },
    Positive { message: String },
    Min { min: f64, message: String },
    Max { max: f64, message: String },
}

#[derive(Debug, Clone, Default)]
pub struct NumberSchema {
    pub rules: Vec<NumberRule>,
}

impl NumberSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn integer(mut self, message: impl Into<String>) -> Self {
        self.rules.push(NumberRule::Integer {
            message: message.into(),
        });
        self
    }

    /// Strictly greater than zero
    pub fn positive(mut self, message: impl Into<String>) -> Self {
        self.rules.push(NumberRule::Positive {
            message: message.into(),
        });
        self
    }

    /// Inclusive lower bound
    pub fn min(mut self, min: f64, message: impl Into<String>) -> Self {
        self.rules.push(NumberRule::Min {
            min,
            message: message.into(),
        });
        self
    }

    /// Inclusive upper bound
    pub fn max(mut self, max: f64, message: impl Into<String>) -> Self {
        self.rules.push(NumberRule::Max {
            max,
            message: message.into(),
        });
        self
    }
}

/// A string restricted to a closed set of values
#[derive(Debug, Clone)]
pub struct EnumSchema {
    pub values: Vec<String>,
    pub message: String,
}

impl EnumSchema {
    pub fn new<S: AsRef<str>>(values: &[S], message: impl Into<String>) -> Self {
        Self {
            values: values.iter().map(|v| v.as_ref().to_string()).collect(),
            message: message.into(),
        }
    }

    pub fn allows(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }
}

#[derive(Debug, Clone)]
pub struct ArraySchema {
    pub items: Schema,
    pub min_items: Option<(usize, String)>,
}

impl ArraySchema {
    pub fn of(items: impl Into<Schema>) -> Self {
        Self {
            items: items.into(),
            min_items: None,
        }
    }

    pub fn min_items(mut self, min: usize, message: impl Into<String>) -> Self {
        self.min_items = Some((min, message.into()));
        self
    }
}

/// A named member of an object schema
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub schema: Schema,
    pub optional: bool,
}

/// Whole-object rules that relate several values to each other.
///
/// Issues raised by a refinement attach to the collection field it inspects,
/// never to an individual element.
#[derive(Debug, Clone)]
pub enum Refinement {
    /// Every element of the array in `field` must have a distinct `key`
    UniqueBy {
        field: String,
        key: String,
        message: String,
    },
}

impl Refinement {
    /// Field whose clean validation is a precondition for this rule
    pub fn field(&self) -> &str {
        match self {
            Refinement::UniqueBy { field, .. } => field,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ObjectSchema {
    pub fields: Vec<Field>,
    pub refinements: Vec<Refinement>,
}

impl ObjectSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a required field
    pub fn field(mut self, name: impl Into<String>, schema: impl Into<Schema>) -> Self {
        self.fields.push(Field {
            name: name.into(),
            schema: schema.into(),
            optional: false,
        });
        self
    }

    /// Add a field that may be absent (but not null)
    pub fn optional(mut self, name: impl Into<String>, schema: impl Into<Schema>) -> Self {
        self.fields.push(Field {
            name: name.into(),
            schema: schema.into(),
            optional: true,
        });
        self
    }

    pub fn unique_by(
        mut self,
        field: impl Into<String>,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.refinements.push(Refinement::UniqueBy {
            field: field.into(),
            key: key.into(),
            message: message.into(),
        });
        self
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// See [`Schema::validate`]
    pub fn validate<'v>(&self, value: &'v Value) -> Result<&'v Value, Issues> {
        let mut issues = Issues::default();
        validate::check_object(self, value, &IssuePath::root(), &mut issues);
        if issues.is_empty() {
            Ok(value)
        } else {
            Err(issues)
        }
    }
}

impl From<StringSchema> for Schema {
    fn from(schema: StringSchema) -> Self {
        Schema::String(schema)
    }
}

impl From<NumberSchema> for Schema {
    fn from(schema: NumberSchema) -> Self {
        Schema::Number(schema)
    }
}

impl From<EnumSchema> for Schema {
    fn from(schema: EnumSchema) -> Self {
        Schema::Enum(schema)
    }
}

impl From<ArraySchema> for Schema {
    fn from(schema: ArraySchema) -> Self {
        Schema::Array(Box::new(schema))
    }
}

impl From<ObjectSchema> for Schema {
    fn from(schema: ObjectSchema) -> Self {
        Schema::Object(schema)
    }
}
