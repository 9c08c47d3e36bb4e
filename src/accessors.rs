//! Typed Accessors
//!
//! The fail-fast path. Content is loaded and validated once, before anything
//! is rendered, and only data that passed its schema is handed onward. The
//! first failing domain aborts the load with [`ContentError::FatalStartup`].

use tracing::{error, info};

use crate::domains::{
    ConductData, ContactData, ContentDomain, FeesData, HomeData, OrganizationData,
    SpiritWearData, SponsorsData, TeamsData,
};
use crate::error::{ContentError, Result};
use crate::loader::ContentLoader;

/// Load, validate and decode a single domain
pub fn load_domain<D: ContentDomain>(loader: &ContentLoader) -> Result<D> {
    let value = loader.load_domain(D::DOMAIN)?;
    D::from_value(value)
}

/// Like [`load_domain`], but any failure is a startup failure
pub fn require_domain<D: ContentDomain>(loader: &ContentLoader) -> Result<D> {
    load_domain(loader).map_err(|e| {
        error!(domain = %D::DOMAIN, error = %e, "Refusing to continue with invalid content");
        ContentError::FatalStartup {
            domain: D::DOMAIN.file_name(),
            source: Box::new(e),
        }
    })
}

/// Every content document of the site, all validated
#[derive(Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub teams: TeamsData,
    pub fees: FeesData,
    pub organization: OrganizationData,
    pub sponsors: SponsorsData,
    pub home: HomeData,
    pub spirit_wear: SpiritWearData,
    pub contact: ContactData,
    pub conduct: ConductData,
}

impl SiteContent {
    /// Load all domains, stopping at the first one that fails
    pub fn load(loader: &ContentLoader) -> Result<Self> {
        let content = Self {
            teams: require_domain(loader)?,
            fees: require_domain(loader)?,
            organization: require_domain(loader)?,
            sponsors: require_domain(loader)?,
            home: require_domain(loader)?,
            spirit_wear: require_domain(loader)?,
            contact: require_domain(loader)?,
            conduct: require_domain(loader)?,
        };

        info!(
            teams = content.teams.teams.len(),
            sponsors = content.sponsors.sponsors.len(),
            products = content.spirit_wear.products.len(),
            "Site content loaded"
        );
        Ok(content)
    }

    /// The content store compiled into this binary
    pub fn embedded() -> Result<Self> {
        Self::load(&ContentLoader::embedded())
    }
}
