//! Page generation for the JCB booking site.
//!
//! Routes are derived from the catalog ([`matrix`]), resolved into page
//! models ([`page`]) and rendered with leptos SSR ([`html`]). The same
//! [`render_route`] entry point backs both the static build and the preview
//! server.

pub mod assets;
pub mod contact;
pub mod detail;
pub mod html;
pub mod matrix;
pub mod page;
pub mod robots;
pub mod route;
pub mod schema;
pub mod sitemap;

use chrono::{DateTime, Utc};
use jcb_site_core::Site;

pub use html::RenderOptions;
pub use page::NotFound;
pub use route::Route;

pub const SITEMAP_FILE: &str = "sitemap.xml";
pub const ROBOTS_FILE: &str = "robots.txt";
pub const STYLES_FILE: &str = "styles.css";
pub const GALLERY_JS_FILE: &str = "gallery.js";
pub const NOT_FOUND_FILE: &str = "404.html";

/// Render one route to a complete HTML document
pub fn render_route(site: &Site, route: &Route, opts: &RenderOptions) -> Result<String, NotFound> {
    let html = match route {
        Route::Home => html::home::render_home(site, opts),
        Route::About => html::info::render_about(site, opts),
        Route::Contact => html::info::render_contact(site, opts),
        Route::Services => html::service::render_services_index(site, opts),
        Route::Service(slug) => {
            let page = page::ServicePage::resolve(site, slug)?;
            html::service::render_service(site, &page, opts)
        }
        Route::Location(slug) => {
            let page = page::LocationPage::resolve(site, slug)?;
            html::location::render_location(site, &page, opts)
        }
        Route::ServiceLocation { service, location } => {
            let page = page::ServiceLocationPage::resolve(site, service, location)?;
            html::service::render_service_location(site, &page, opts)
        }
        Route::Blog => html::blog::render_blog_index(site, opts),
        Route::BlogPost(slug) => {
            let page = page::BlogPostPage::resolve(site, slug)?;
            html::blog::render_blog_post(site, &page, opts)
        }
    };
    Ok(html)
}

/// Render a request path, falling back to the not-found page
pub fn render_path(site: &Site, path: &str, opts: &RenderOptions) -> Result<String, NotFound> {
    let route = Route::parse(path).ok_or_else(|| NotFound {
        path: path.to_string(),
    })?;
    render_route(site, &route, opts)
}

pub fn render_not_found(site: &Site, path: &str, opts: &RenderOptions) -> String {
    html::info::render_not_found(site, path, opts)
}

pub fn render_sitemap_xml(site: &Site, now: DateTime<Utc>) -> String {
    let entries = matrix::sitemap_entries(&site.catalog, &site.config, now);
    sitemap::render_sitemap(&entries)
}

pub fn render_robots_txt(site: &Site) -> String {
    robots::RobotsPolicy::for_site(&site.config).render()
}

/// Everything a static build writes, keyed by output-relative path
pub struct GeneratedSite {
    pub pages: Vec<(String, String)>,
    pub assets: Vec<(String, Vec<u8>)>,
}

impl GeneratedSite {
    pub fn page(&self, file: &str) -> Option<&str> {
        self.pages
            .iter()
            .find(|(path, _)| path == file)
            .map(|(_, html)| html.as_str())
    }
}

/// Render every scheduled route plus the generated assets
pub fn generate_site(site: &Site, now: DateTime<Utc>) -> Result<GeneratedSite, NotFound> {
    let opts = RenderOptions::build(now);
    let routes = matrix::all_routes(&site.catalog);
    tracing::debug!(routes = routes.len(), "rendering pages");

    let mut pages = Vec::with_capacity(routes.len() + 1);
    for route in &routes {
        let html = render_route(site, route, &opts)?;
        pages.push((route.output_file(), html));
    }
    pages.push((NOT_FOUND_FILE.to_string(), render_not_found(site, "/404", &opts)));

    let assets = vec![
        (SITEMAP_FILE.to_string(), render_sitemap_xml(site, now).into_bytes()),
        (ROBOTS_FILE.to_string(), render_robots_txt(site).into_bytes()),
        (STYLES_FILE.to_string(), assets::styles_css().as_bytes().to_vec()),
        (GALLERY_JS_FILE.to_string(), assets::gallery_js().into_bytes()),
    ];

    Ok(GeneratedSite { pages, assets })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_site_renders_every_route() {
        let site = Site::builtin();
        let generated = generate_site(&site, Utc::now()).unwrap();

        let routes = matrix::all_routes(&site.catalog);
        assert_eq!(generated.pages.len(), routes.len() + 1);
        assert_eq!(generated.assets.len(), 4);

        let page = generated
            .page("services/excavation/naini/index.html")
            .expect("service location page");
        assert!(page.contains("\"addressLocality\""));
        assert!(generated.page("index.html").is_some());
        assert!(generated.page(NOT_FOUND_FILE).is_some());
    }

    #[test]
    fn test_render_path_not_found() {
        let site = Site::builtin();
        let opts = RenderOptions::build(Utc::now());

        let err = render_path(&site, "/location/nonexistent-slug", &opts).unwrap_err();
        assert_eq!(err.path, "/location/nonexistent-slug");
        assert!(render_path(&site, "/nope/a/b/c", &opts).is_err());
        assert!(render_path(&site, "/services/drainage/naini", &opts).is_err());
        assert!(render_path(&site, "/location/naini", &opts).is_ok());
    }

    #[test]
    fn test_unpublished_post_has_no_page() {
        let site = Site::builtin();
        let opts = RenderOptions::build(Utc::now());
        assert!(render_path(&site, "/blog/choosing-right-jcb-project", &opts).is_err());
    }
}
