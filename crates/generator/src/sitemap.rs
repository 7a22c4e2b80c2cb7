use chrono::SecondsFormat;

use crate::matrix::SitemapEntry;

/// Escape text for XML element content. The result is also safe as HTML
/// text.
pub fn xml_escape(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&apos;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

/// Render entries as a sitemaps.org 0.9 `urlset`
pub fn render_sitemap(entries: &[SitemapEntry]) -> String {
    let urls: String = entries
        .iter()
        .map(|entry| {
            format!(
                "<url>\n<loc>{}</loc>\n<lastmod>{}</lastmod>\n<changefreq>{}</changefreq>\n<priority>{:.1}</priority>\n</url>\n",
                xml_escape(&entry.url),
                entry.last_modified.to_rfc3339_opts(SecondsFormat::Millis, true),
                entry.change_frequency.as_str(),
                entry.priority
            )
        })
        .collect();

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{}</urlset>\n",
        urls
    )
}
