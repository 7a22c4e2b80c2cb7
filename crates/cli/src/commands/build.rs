use anyhow::{Context, Result};
use chrono::Utc;
use jcb_site_core::config::SITE_TOML;
use jcb_site_core::{load_site_with, process_env};
use jcb_site_generator::generate_site;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

fn write_file(output: &Path, relative: &str, contents: &[u8]) -> Result<()> {
    let dst = output.join(relative);
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&dst, contents).with_context(|| format!("Failed to write {}", dst.display()))
}

/// Copy everything under `src` into `dst`, keeping relative paths
fn copy_dir(src: &Path, dst: &Path) -> Result<usize> {
    let mut copied = 0;
    for entry in WalkDir::new(src).into_iter() {
        let entry = entry.with_context(|| format!("Failed to read {}", src.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(src)
            .context("Walked outside the public directory")?;
        let target = dst.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &target)
            .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
        copied += 1;
    }
    Ok(copied)
}

/// Build static site for deployment
pub async fn run(path: PathBuf, output: PathBuf) -> Result<()> {
    build_site(&path, &output, process_env)
}

fn build_site<F>(path: &Path, output: &Path, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    println!("🔨 Building static site...");
    println!("   Source: {}", path.display());
    println!("   Output: {}", output.display());
    println!();

    if !path.exists() {
        anyhow::bail!("Site directory does not exist: {}", path.display());
    }

    let site = load_site_with(path, lookup).with_context(|| format!("Failed to load {}", SITE_TOML))?;

    println!("✓ Loaded: {}", site.config.name);
    println!("  URL: {}", site.config.url);
    println!(
        "  Catalog: {} locations, {} services",
        site.catalog.locations().len(),
        site.catalog.services().len()
    );
    println!();

    println!("📁 Creating output directory...");
    fs::create_dir_all(output).context("Failed to create output directory")?;

    println!("📄 Rendering pages...");
    let generated = generate_site(&site, Utc::now()).context("Failed to render site")?;
    for (file, html) in &generated.pages {
        write_file(output, file, html.as_bytes())?;
    }
    println!("   ✓ Rendered {} pages", generated.pages.len());

    println!("🗺️  Writing sitemap, robots.txt and assets...");
    for (file, data) in &generated.assets {
        write_file(output, file, data)?;
        tracing::debug!(file = %file, bytes = data.len(), "wrote asset");
    }
    println!("   ✓ Wrote {} files", generated.assets.len());

    println!("🖼️  Copying static files...");
    let public = path.join("public");
    let copied = if public.is_dir() {
        copy_dir(&public, output)?
    } else {
        eprintln!("   ⚠ Warning: No public/ directory in {}", path.display());
        0
    };
    println!("   ✓ Copied {} files", copied);

    println!();
    println!("✅ Build complete!");
    println!("   Output: {}", output.display());
    println!();
    println!("To test locally:");
    println!("   cd {} && python3 -m http.server 8000", output.display());
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_build_writes_site() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("site");
        let out = temp.path().join("dist");
        fs::create_dir_all(src.join("public/img")).unwrap();
        fs::write(src.join("public/img/logo.png"), b"png").unwrap();

        build_site(&src, &out, |_| None).unwrap();

        assert!(out.join("index.html").is_file());
        assert!(out.join("location/naini/index.html").is_file());
        assert!(out.join("services/excavation/naini/index.html").is_file());
        assert!(out.join("blog/jcb-excavation-guide-prayagraj/index.html").is_file());
        assert!(!out.join("blog/choosing-right-jcb-project").exists());
        assert!(out.join("404.html").is_file());
        assert!(out.join("img/logo.png").is_file());

        let sitemap = fs::read_to_string(out.join("sitemap.xml")).unwrap();
        assert_eq!(sitemap.matches("<url>").count(), 135);
        let robots = fs::read_to_string(out.join("robots.txt")).unwrap();
        assert!(robots.contains("Sitemap: http://localhost:3000/sitemap.xml"));
    }

    #[test]
    fn test_build_uses_site_url_from_lookup() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("site");
        let out = temp.path().join("dist");
        fs::create_dir_all(&src).unwrap();

        build_site(&src, &out, |key| {
            (key == "SITE_URL").then(|| "https://jcbbooking.com".to_string())
        })
        .unwrap();

        let robots = fs::read_to_string(out.join("robots.txt")).unwrap();
        assert!(robots.contains("Sitemap: https://jcbbooking.com/sitemap.xml"));
    }

    #[test]
    fn test_copy_dir_keeps_relative_paths() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dst = temp.path().join("dst");
        fs::create_dir_all(src.join("a/b")).unwrap();
        fs::write(src.join("top.txt"), b"1").unwrap();
        fs::write(src.join("a/b/deep.txt"), b"2").unwrap();

        assert_eq!(copy_dir(&src, &dst).unwrap(), 2);
        assert_eq!(fs::read(dst.join("a/b/deep.txt")).unwrap(), b"2");
    }
}
