//! Pre-build checks for a site directory.
//!
//! Nothing here fails fast: every problem is collected into a
//! [`ValidationReport`] so `validate` can print all of them at once.

use std::path::Path;

use jcb_site_core::config::is_url_safe_slug;
use jcb_site_core::{LocationKind, Site};
use jcb_site_generator::detail::ServiceKind;
use jcb_site_generator::matrix;
use walkdir::WalkDir;

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.info.extend(other.info);
    }
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

/// Check the catalog and business profile of a loaded site
pub fn validate_catalog(site: &Site) -> ValidationReport {
    let mut report = ValidationReport::default();
    let catalog = &site.catalog;

    for location in catalog.locations() {
        if !is_url_safe_slug(&location.slug) {
            report.errors.push(format!(
                "Location '{}' has slug '{}' which is not URL-safe",
                location.name, location.slug
            ));
        }
        if location.keywords.is_empty() {
            report
                .warnings
                .push(format!("Location '{}' has no keywords", location.slug));
        }
        if location.kind == LocationKind::Area && location.parent.is_none() {
            report.warnings.push(format!(
                "Area '{}' has no parent city, it will be shown under the home city",
                location.slug
            ));
        }
        if location.pincodes.is_empty() {
            report
                .warnings
                .push(format!("Location '{}' has no pincodes", location.slug));
        }
    }

    for service in catalog.services() {
        if !is_url_safe_slug(&service.slug) {
            report.errors.push(format!(
                "Service '{}' has slug '{}' which is not URL-safe",
                service.name, service.slug
            ));
        }
        if !ServiceKind::from_slug(&service.slug).is_known() {
            report.warnings.push(format!(
                "Service '{}' has no dedicated content, pages will use the excavation details",
                service.slug
            ));
        }
    }

    let url = &site.config.url;
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        report
            .errors
            .push(format!("site.url '{}' must start with http:// or https://", url));
    }

    let business = &site.business;
    for (field, value) in [
        ("business.phone_dial", &business.phone_dial),
        ("business.whatsapp", &business.whatsapp),
    ] {
        if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
            report
                .errors
                .push(format!("{} must contain digits only, got '{}'", field, value));
        }
    }
    if !(-90.0..=90.0).contains(&business.latitude)
        || !(-180.0..=180.0).contains(&business.longitude)
    {
        report.errors.push(format!(
            "business coordinates ({}, {}) are out of range",
            business.latitude, business.longitude
        ));
    }

    report.info.push(format!(
        "{} locations ({} areas, {} districts), {} services",
        catalog.locations().len(),
        catalog.areas().len(),
        catalog.districts().len(),
        catalog.services().len()
    ));
    report.info.push(format!(
        "{} service-location pages",
        matrix::service_location_params(catalog).len()
    ));
    report.info.push(format!(
        "{} sitemap entries",
        matrix::all_routes(catalog).len()
    ));

    report
}

/// Check the static files under `public_dir` and the images pages link to.
///
/// `referenced` holds site paths such as `/jcb-real-1.jpg`.
pub fn validate_assets(public_dir: &Path, referenced: &[&str]) -> ValidationReport {
    let mut report = ValidationReport::default();

    if !public_dir.is_dir() {
        report.warnings.push(format!(
            "No static directory at {}, referenced images will be missing",
            public_dir.display()
        ));
        return report;
    }

    let mut files = 0usize;
    let mut images = 0usize;
    for entry in WalkDir::new(public_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        files += 1;
        let path = entry.path();
        let is_image = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
            .unwrap_or(false);
        if !is_image {
            continue;
        }

        match image::image_dimensions(path) {
            Ok((width, height)) => {
                images += 1;
                tracing::debug!(path = %path.display(), width, height, "image ok");
            }
            Err(e) => report
                .errors
                .push(format!("Unreadable image {}: {}", path.display(), e)),
        }
    }

    for src in referenced {
        let path = public_dir.join(src.trim_start_matches('/'));
        if !path.is_file() {
            report
                .warnings
                .push(format!("Referenced image {} not found in {}", src, public_dir.display()));
        }
    }

    report
        .info
        .push(format!("{} static files ({} images)", files, images));
    report
}
