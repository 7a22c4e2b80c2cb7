//! Server-side rendered HTML documents.
//!
//! Views are plain leptos SSR templates; nothing is hydrated. Every page goes
//! through [`document`], which adds the head metadata, the site-wide
//! structured data and, in preview mode, the live-reload hook.

pub mod blog;
pub mod home;
pub mod info;
pub mod location;
pub mod service;

use chrono::{DateTime, Utc};
use jcb_site_core::Site;
use leptos::attr::custom::custom_attribute;
use leptos::prelude::*;

use crate::contact::ContactLinks;
use crate::page::PageMeta;
use crate::schema::{SchemaInput, SchemaType, StructuredData};

/// How a page is being rendered
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Adds the live-reload script and a preview banner
    pub preview: bool,
    /// Timestamp used where a page needs "now"
    pub now: DateTime<Utc>,
}

impl RenderOptions {
    pub fn build(now: DateTime<Utc>) -> Self {
        Self {
            preview: false,
            now,
        }
    }

    pub fn preview(now: DateTime<Utc>) -> Self {
        Self { preview: true, now }
    }
}

const RELOAD_SCRIPT: &str = r#"
const eventSource = new EventSource('/_reload');
eventSource.onmessage = () => { location.reload(); };
eventSource.onerror = () => { eventSource.close(); };
"#;

/// Page-level structured data on top of the site-wide payloads
pub(crate) struct PageSchema {
    pub kind: SchemaType,
    pub input: SchemaInput,
}

/// Wrap a page body in the full HTML document
pub(crate) fn document(
    site: &Site,
    meta: &PageMeta,
    page_schema: Option<PageSchema>,
    opts: &RenderOptions,
    body: impl IntoView + 'static,
) -> String {
    let mut schemas = vec![
        StructuredData::build(
            SchemaType::Organization,
            &site.business,
            &SchemaInput::default(),
            opts.now,
        ),
        StructuredData::build(
            SchemaType::LocalBusiness,
            &site.business,
            &SchemaInput::default(),
            opts.now,
        ),
    ];
    if let Some(page) = page_schema {
        schemas.push(StructuredData::build(page.kind, &site.business, &page.input, opts.now));
    }

    let scripts = schemas
        .iter()
        .map(|schema| {
            let json = schema.to_json_ld();
            view! { <script type="application/ld+json" inner_html=json></script> }
        })
        .collect_view();

    let title = format!("{} | {}", meta.title, site.config.name);
    let description = meta.description.clone();
    let keywords = meta.keywords_joined();
    let canonical = meta.canonical.clone();
    let og_title = meta.title.clone();
    let og_description = meta.description.clone();
    let twitter_title = meta.title.clone();
    let twitter_description = meta.description.clone();
    let site_name = site.config.name.clone();

    let banner = opts.preview.then(|| {
        view! { <div class="preview-badge">"PREVIEW MODE - Live Reload Active"</div> }
    });
    let reload = opts
        .preview
        .then(|| view! { <script inner_html=RELOAD_SCRIPT></script> });

    let header = site_header(site);
    let footer = site_footer(site);

    let html = view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1.0"/>
                <title>{title}</title>
                <meta name="description" content=description/>
                <meta name="keywords" content=keywords/>
                <meta name="robots" content="index, follow"/>
                <link rel="canonical" href=canonical/>
                <meta {..custom_attribute("property", "og:type")} content="website"/>
                <meta {..custom_attribute("property", "og:locale")} content="en_IN"/>
                <meta {..custom_attribute("property", "og:site_name")} content=site_name/>
                <meta {..custom_attribute("property", "og:title")} content=og_title/>
                <meta {..custom_attribute("property", "og:description")} content=og_description/>
                <meta name="twitter:card" content="summary_large_image"/>
                <meta name="twitter:title" content=twitter_title/>
                <meta name="twitter:description" content=twitter_description/>
                <link rel="icon" href="/favicon.ico"/>
                <link rel="stylesheet" href="/styles.css"/>
                {scripts}
            </head>
            <body>
                {banner}
                {header}
                <main>{body}</main>
                {footer}
                {reload}
            </body>
        </html>
    }
    .to_html();

    format!("<!DOCTYPE html>\n{}", html)
}

fn site_header(site: &Site) -> impl IntoView + use<> {
    let brand = site.config.name.clone();
    let contact = ContactLinks::general(&site.business);
    let call = format!("📞 {}", contact.phone_display);
    let tel = contact.tel;

    view! {
        <header class="site-header">
            <a class="brand" href="/">{brand}</a>
            <nav>
                <a href="/services">"Services"</a>
                <a href="/blog">"Blog"</a>
                <a href="/about">"About"</a>
                <a href="/contact">"Contact"</a>
            </nav>
            <a class="btn btn-call" href=tel>{call}</a>
        </header>
    }
}

fn site_footer(site: &Site) -> impl IntoView + use<> {
    let business = &site.business;
    let name = business.name.clone();
    let address = format!(
        "{}, {}, {} {}",
        business.street_address, business.locality, business.region, business.postal_code
    );
    let hours = format!("Open every day {} - {}", business.opens, business.closes);
    let phone = business.telephone.clone();
    let tel = format!("tel:{}", business.phone_dial);

    let areas = site
        .catalog
        .areas()
        .iter()
        .map(|l| {
            let href = format!("/location/{}", l.slug);
            let name = l.name.clone();
            view! { <li><a href=href>{name}</a></li> }
        })
        .collect_view();
    let districts = site
        .catalog
        .districts()
        .iter()
        .map(|l| {
            let href = format!("/location/{}", l.slug);
            let name = l.name.clone();
            view! { <li><a href=href>{name}</a></li> }
        })
        .collect_view();

    view! {
        <footer class="site-footer">
            <div class="footer-col">
                <h3>{name}</h3>
                <p>{address}</p>
                <p>{hours}</p>
                <p><a href=tel>{phone}</a></p>
            </div>
            <div class="footer-col">
                <h3>"Prayagraj Areas"</h3>
                <ul>{areas}</ul>
            </div>
            <div class="footer-col">
                <h3>"Uttar Pradesh"</h3>
                <ul>{districts}</ul>
            </div>
        </footer>
    }
}

/// Call and WhatsApp buttons
pub(crate) fn contact_buttons(contact: &ContactLinks) -> impl IntoView + use<> {
    let tel = contact.tel.clone();
    let whatsapp = contact.whatsapp.clone();
    let call = format!("📞 Call Now: {}", contact.phone_display);

    view! {
        <div class="cta-buttons">
            <a class="btn btn-call" href=tel>{call}</a>
            <a class="btn btn-whatsapp" href=whatsapp>"💬 WhatsApp Now"</a>
        </div>
    }
}

/// Closing call-to-action band
pub(crate) fn contact_section(
    heading: String,
    text: String,
    contact: &ContactLinks,
) -> impl IntoView + use<> {
    view! {
        <section class="contact-band">
            <h2>{heading}</h2>
            <p>{text}</p>
            {contact_buttons(contact)}
        </section>
    }
}

/// `<ul>` of plain text items
pub(crate) fn text_list(class: &'static str, items: &[&'static str]) -> impl IntoView + use<> {
    let items = items
        .iter()
        .map(|item| view! { <li>{*item}</li> })
        .collect_view();
    view! { <ul class=class>{items}</ul> }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-02-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn meta() -> PageMeta {
        PageMeta {
            title: "Test Page".to_string(),
            description: "A page used in tests".to_string(),
            keywords: vec!["one".to_string(), "two".to_string()],
            canonical: "https://jcbbooking.com/test".to_string(),
        }
    }

    #[test]
    fn test_document_head() {
        let site = Site::builtin();
        let html = document(&site, &meta(), None, &RenderOptions::build(now()), view! { <p>"body"</p> });

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Test Page | JCB Booking Prayagraj"));
        assert!(html.contains("https://jcbbooking.com/test"));
        assert!(html.contains("one, two"));
        assert_eq!(html.matches("application/ld+json").count(), 2);
        assert!(html.contains(r#""@type":"Organization""#));
        assert!(!html.contains("/_reload"));
    }

    #[test]
    fn test_document_open_graph_tags() {
        let site = Site::builtin();
        let html = document(&site, &meta(), None, &RenderOptions::build(now()), view! { <p>"body"</p> });

        assert!(html.contains(r#"<meta property="og:title" content="Test Page""#));
        assert!(html.contains(r#"<meta property="og:description" content="A page used in tests""#));
        assert!(html.contains(r#"<meta property="og:site_name" content="JCB Booking Prayagraj""#));
        assert!(html.contains(r#"<meta property="og:type" content="website""#));
        assert!(html.contains(r#"<meta name="twitter:card""#));
    }

    #[test]
    fn test_document_page_schema_and_preview() {
        let site = Site::builtin();
        let schema = PageSchema {
            kind: SchemaType::Service,
            input: SchemaInput::default(),
        };
        let html = document(
            &site,
            &meta(),
            Some(schema),
            &RenderOptions::preview(now()),
            view! { <p>"body"</p> },
        );

        assert_eq!(html.matches("application/ld+json").count(), 3);
        assert!(html.contains(r#""@type":"Service""#));
        assert!(html.contains("/_reload"));
        assert!(html.contains("PREVIEW MODE"));
    }

    #[test]
    fn test_footer_links_every_location() {
        let site = Site::builtin();
        let html = document(&site, &meta(), None, &RenderOptions::build(now()), view! { <p>"body"</p> });
        for location in site.catalog.locations() {
            assert!(html.contains(&format!("/location/{}", location.slug)));
        }
    }
}
