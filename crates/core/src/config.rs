use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the optional configuration file inside a site directory
pub const SITE_TOML: &str = "site.toml";

/// Environment variable that overrides `[site].url`
pub const SITE_URL_ENV: &str = "SITE_URL";

/// The site.toml file structure.
///
/// Every section is optional. `[[location]]` and `[[service]]` entries are
/// appended to the built-in catalog.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteFile {
    pub site: SiteConfig,
    pub business: BusinessProfile,
    #[serde(rename = "location", skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<Location>,
    #[serde(rename = "service", skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<Service>,
}

/// Load a site from a directory.
///
/// A missing site.toml yields the built-in catalog with default settings.
/// `SITE_URL` from the process environment wins over the file.
pub fn load_site<P: AsRef<Path>>(dir: P) -> Result<Site> {
    load_site_with(dir, process_env)
}

/// Look a variable up in the process environment
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// [`load_site`] with overrides read through `lookup` instead of the
/// process environment
pub fn load_site_with<P, F>(dir: P, lookup: F) -> Result<Site>
where
    P: AsRef<Path>,
    F: Fn(&str) -> Option<String>,
{
    let path = dir.as_ref().join(SITE_TOML);
    let site = if path.exists() {
        tracing::debug!(path = %path.display(), "loading site configuration");
        let content = fs::read_to_string(&path)?;
        parse_site_toml_str(&content)?
    } else {
        tracing::debug!(path = %path.display(), "no site configuration, using defaults");
        Site::builtin()
    };

    Ok(apply_env_overrides(site, lookup))
}

/// Parse site.toml from a string (useful for testing)
pub fn parse_site_toml_str(content: &str) -> Result<Site> {
    let raw: SiteFile = toml::from_str(content)?;

    for location in &raw.locations {
        validate_slug(&location.slug, "location.slug")?;
        validate_not_empty(&location.name, "location.name")?;
    }
    for service in &raw.services {
        validate_slug(&service.slug, "service.slug")?;
        validate_not_empty(&service.name, "service.name")?;
    }
    validate_not_empty(&raw.site.url, "site.url")?;

    let catalog = Catalog::builtin().extended(raw.locations, raw.services)?;

    Ok(Site {
        config: raw.site,
        business: raw.business,
        catalog,
    })
}

/// Apply environment overrides using the given lookup
pub fn apply_env_overrides<F>(mut site: Site, lookup: F) -> Site
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(SITE_URL_ENV).filter(|u| !u.trim().is_empty()) {
        tracing::debug!(%url, "site url overridden from environment");
        site.config.url = url;
    }
    site
}

/// Validate a slug used in URLs.
///
/// Slugs must be non-empty, made of lowercase ASCII letters, digits and
/// `-`, and must not start or end with `-`.
pub fn validate_slug(slug: &str, field_name: &str) -> Result<()> {
    if slug.is_empty() {
        return Err(Error::ConfigParse(format!(
            "Empty slug in '{}' field",
            field_name
        )));
    }

    if !is_url_safe_slug(slug) {
        return Err(Error::ConfigParse(format!(
            "Slug in '{}' must use lowercase letters, digits and '-': '{}'",
            field_name, slug
        )));
    }

    Ok(())
}

pub fn is_url_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn validate_not_empty(value: &str, field_name: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::ConfigParse(format!(
            "Empty value in '{}' field",
            field_name
        )));
    }
    Ok(())
}
