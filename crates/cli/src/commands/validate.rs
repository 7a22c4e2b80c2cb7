use anyhow::{Context, Result};
use jcb_site_core::config::SITE_TOML;
use jcb_site_core::{load_site_with, process_env};
use jcb_site_generator::assets::referenced_images;
use jcb_site_validator::{ValidationReport, validate_assets, validate_catalog};
use std::path::{Path, PathBuf};

fn print_report(report: &ValidationReport) {
    for line in &report.info {
        println!("  {}", line);
    }
    for warning in &report.warnings {
        println!("  ⚠ {}", warning);
    }
    for error in &report.errors {
        println!("  ✗ {}", error);
    }
}

pub async fn run(path: PathBuf) -> Result<()> {
    validate_dir(&path, process_env)
}

fn validate_dir<F>(path: &Path, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    println!("Validating site at: {}", path.display());

    if !path.exists() {
        anyhow::bail!("Site directory does not exist: {}", path.display());
    }

    let site = load_site_with(path, lookup).with_context(|| format!("Failed to load {}", SITE_TOML))?;
    if path.join(SITE_TOML).exists() {
        println!("✓ {} valid", SITE_TOML);
    } else {
        println!("✓ No {}, using built-in defaults", SITE_TOML);
    }
    println!("  Business: {}", site.business.name);
    println!("  Site URL: {}", site.config.url);

    let mut report = validate_catalog(&site);
    report.merge(validate_assets(&path.join("public"), &referenced_images()));
    print_report(&report);

    if !report.is_ok() {
        anyhow::bail!("Validation failed with {} error(s)", report.errors.len());
    }

    println!(
        "\n✅ Site is valid ({} warning(s))",
        report.warnings.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_defaults() {
        let temp = TempDir::new().unwrap();
        validate_dir(temp.path(), |_| None).unwrap();
    }

    #[test]
    fn test_validate_rejects_bad_config() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(SITE_TOML),
            "[[service]]\nname = \"Excavation\"\nslug = \"excavation\"\n",
        )
        .unwrap();

        let err = validate_dir(temp.path(), |_| None).unwrap_err();
        assert!(format!("{:#}", err).contains("Duplicate service slug 'excavation'"));
    }

    #[test]
    fn test_validate_rejects_duplicate_location() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(SITE_TOML),
            "[[location]]\nname = \"Naini\"\nslug = \"naini\"\nkind = \"area\"\ndescription = \"Again\"\n",
        )
        .unwrap();

        let err = validate_dir(temp.path(), |_| None).unwrap_err();
        assert!(format!("{:#}", err).contains("Duplicate location slug 'naini'"));
    }

    #[test]
    fn test_validate_reports_bad_url_from_lookup() {
        let temp = TempDir::new().unwrap();
        let err = validate_dir(temp.path(), |_| Some("jcbbooking.com".to_string())).unwrap_err();
        assert!(err.to_string().contains("Validation failed"));
    }

    #[tokio::test]
    async fn test_validate_missing_directory() {
        let temp = TempDir::new().unwrap();
        let err = run(temp.path().join("nope")).await.unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
