//! Bombers Content
//!
//! Data contracts for the O'Fallon Bombers website. Every page family is
//! rendered from one JSON document in the content store; this crate decides
//! whether those documents may be rendered at all.
//!
//! ## Features
//!
//! - **Declarative Schemas**: Each document's shape is a plain [`schema::ObjectSchema`] value
//! - **Relational Rules**: Unique team IDs, unique jersey numbers per team, unique item IDs
//! - **Lenient Runner**: [`ValidationRunner`] checks every document and reports all failures
//! - **Fail-Fast Accessors**: [`SiteContent::load`] refuses to hand out invalid content
//! - **Contact Relay**: Validated contact form submissions are relayed to the club's inbox
//!
//! ## Architecture
//!
//! ```text
//! content/*.json ──► ContentLoader ──► Value ──┬─► ValidationRunner ──► ValidationReport (CI)
//!                                              │
//!                                              └─► ContentDomain::from_value ──► SiteContent (rendering)
//! ```

pub mod accessors;
pub mod config;
pub mod contact_form;
pub mod domains;
pub mod error;
pub mod loader;
pub mod report;
pub mod runner;
pub mod schema;

pub use accessors::{load_domain, require_domain, SiteContent};
pub use config::{ReportFormat, SiteConfig};
pub use domains::{ContentDomain, Domain};
pub use error::{ContentError, LoadError, Result, SchemaValidationError};
pub use loader::{ContentLoader, ContentSource};
pub use report::{FileResult, Outcome, Summary, ValidationReport};
pub use runner::{ValidationRunner, ValidationTarget};
pub use schema::{Issue, IssuePath, Issues, Schema};
