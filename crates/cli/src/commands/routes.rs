use anyhow::{Context, Result};
use chrono::Utc;
use jcb_site_core::load_site;
use jcb_site_generator::matrix::{SitemapEntry, sitemap_entries};
use std::path::PathBuf;

fn format_table(entries: &[SitemapEntry]) -> String {
    let width = entries
        .iter()
        .map(|e| e.route.path().len())
        .max()
        .unwrap_or(0);

    entries
        .iter()
        .map(|e| {
            format!(
                "{:<width$}  {:>3.1}  {}\n",
                e.route.path(),
                e.priority,
                e.change_frequency.as_str(),
                width = width
            )
        })
        .collect()
}

/// Print every scheduled route in sitemap order
pub async fn run(path: PathBuf, json: bool) -> Result<()> {
    let site = load_site(&path).context("Failed to load site configuration")?;
    let entries = sitemap_entries(&site.catalog, &site.config, Utc::now());

    if json {
        let out = serde_json::to_string_pretty(&entries).context("Failed to serialize routes")?;
        println!("{}", out);
    } else {
        print!("{}", format_table(&entries));
        println!("\n{} routes", entries.len());
    }

    Ok(())
}
