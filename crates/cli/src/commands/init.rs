use anyhow::{Context, Result};
use jcb_site_core::config::{SITE_TOML, SITE_URL_ENV, SiteFile};
use std::fs;
use std::path::{Path, PathBuf};

const PUBLIC_DIR: &str = "public";

const HEADER: &str = "\
# JCB booking site configuration
#
# Every section is optional; missing values fall back to the built-in
# business profile. The SITE_URL environment variable overrides [site].url.
";

const CATALOG_EXAMPLE: &str = "
# Extra catalog entries are appended to the built-in locations and services.
#
# [[location]]
# name = \"Phaphamau\"
# slug = \"phaphamau\"
# kind = \"area\"
# parent = \"Prayagraj\"
# pincodes = [\"211013\"]
# description = \"Growing residential area on the Lucknow road\"
# keywords = [\"phaphamau prayagraj\", \"jcb rental phaphamau\"]
#
# [[service]]
# name = \"Drainage Work\"
# slug = \"drainage\"
# keywords = [\"drainage\", \"nala cleaning\"]
";

/// Render a commented site.toml holding the default settings
fn generate_site_toml() -> Result<String> {
    let body = toml::to_string_pretty(&SiteFile::default())
        .context("Failed to serialize default configuration")?;
    Ok(format!("{}\n{}{}", HEADER, body, CATALOG_EXAMPLE))
}

fn create_directory_structure(base: &Path) -> Result<()> {
    fs::create_dir_all(base.join(PUBLIC_DIR)).context("Failed to create public directory")?;
    Ok(())
}

/// Initialize a site directory with a default site.toml and an empty public/.
///
/// Refuses to overwrite an existing site.toml.
pub async fn run(path: PathBuf) -> Result<()> {
    println!("Initializing site directory: {}", path.display());

    let config_path = path.join(SITE_TOML);
    if config_path.exists() {
        anyhow::bail!(
            "{} already exists in {}\nEdit it directly or remove it first",
            SITE_TOML,
            path.display()
        );
    }

    fs::create_dir_all(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    create_directory_structure(&path)?;

    let content = generate_site_toml()?;
    fs::write(&config_path, content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::debug!(path = %config_path.display(), "wrote default configuration");

    println!("\n✓ Initialization complete!");
    println!("\nGenerated structure:");
    println!("  {}/", path.display());
    println!("  ├── {}            ← Business profile and extra locations", SITE_TOML);
    println!("  └── {}/              ← Images such as /jcb-real-1.jpg", PUBLIC_DIR);

    println!("\nNext steps:");
    println!("  1. Edit {} (phone numbers, address, site URL)", SITE_TOML);
    println!("  2. Copy gallery images into {}/", PUBLIC_DIR);
    println!("  3. Preview: jcb-site preview {}", path.display());
    println!(
        "  4. Build:   {}=https://example.com jcb-site build {} -o dist",
        SITE_URL_ENV,
        path.display()
    );

    Ok(())
}
