//! Enumeration of every page the site can render.
//!
//! Everything here is a pure function of the catalog: one page per
//! location, one per service, and one per (service, location) pair, plus the
//! discovery feed that lists all of them for crawlers.

use chrono::{DateTime, Utc};
use jcb_site_core::blog::published_posts;
use jcb_site_core::{Catalog, SiteConfig};
use serde::Serialize;

use crate::route::Route;

/// Parameters for one service + location page
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ServiceLocationParams {
    pub service: String,
    pub location: String,
}

/// How often crawlers should expect a page to change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

/// One entry of the discovery feed
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    #[serde(skip)]
    pub route: Route,
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

pub const PRIORITY_HOME: f32 = 1.0;
pub const PRIORITY_SERVICES_INDEX: f32 = 0.9;
pub const PRIORITY_PAGE: f32 = 0.8;
pub const PRIORITY_SERVICE_LOCATION: f32 = 0.7;
pub const PRIORITY_ARTICLE: f32 = 0.6;

/// Every location slug, areas first
pub fn location_slugs(catalog: &Catalog) -> Vec<String> {
    catalog.locations().iter().map(|l| l.slug.clone()).collect()
}

pub fn service_slugs(catalog: &Catalog) -> Vec<String> {
    catalog.services().iter().map(|s| s.slug.clone()).collect()
}

/// Full cross product, services outer and locations inner
pub fn service_location_params(catalog: &Catalog) -> Vec<ServiceLocationParams> {
    catalog
        .services()
        .iter()
        .flat_map(|service| {
            catalog
                .locations()
                .iter()
                .map(move |location| ServiceLocationParams {
                    service: service.slug.clone(),
                    location: location.slug.clone(),
                })
        })
        .collect()
}

fn static_routes() -> [(Route, ChangeFrequency, f32); 4] {
    [
        (Route::Home, ChangeFrequency::Daily, PRIORITY_HOME),
        (Route::About, ChangeFrequency::Monthly, PRIORITY_PAGE),
        (Route::Contact, ChangeFrequency::Monthly, PRIORITY_PAGE),
        (Route::Services, ChangeFrequency::Weekly, PRIORITY_SERVICES_INDEX),
    ]
}

/// Routes of the discovery feed in feed order, with their scheduling hints
fn scheduled_routes(catalog: &Catalog) -> Vec<(Route, ChangeFrequency, f32)> {
    let mut routes: Vec<_> = static_routes().into_iter().collect();

    routes.extend(
        location_slugs(catalog)
            .into_iter()
            .map(|slug| (Route::Location(slug), ChangeFrequency::Weekly, PRIORITY_PAGE)),
    );

    routes.extend(
        service_slugs(catalog)
            .into_iter()
            .map(|slug| (Route::Service(slug), ChangeFrequency::Weekly, PRIORITY_PAGE)),
    );

    routes.extend(service_location_params(catalog).into_iter().map(|p| {
        (
            Route::ServiceLocation {
                service: p.service,
                location: p.location,
            },
            ChangeFrequency::Weekly,
            PRIORITY_SERVICE_LOCATION,
        )
    }));

    routes.push((Route::Blog, ChangeFrequency::Daily, PRIORITY_PAGE));
    routes.extend(published_posts().map(|post| {
        (
            Route::BlogPost(post.slug.to_string()),
            ChangeFrequency::Monthly,
            PRIORITY_ARTICLE,
        )
    }));

    routes
}

/// Every route a static build writes
pub fn all_routes(catalog: &Catalog) -> Vec<Route> {
    scheduled_routes(catalog)
        .into_iter()
        .map(|(route, _, _)| route)
        .collect()
}

/// The discovery feed, stamped with `now`
pub fn sitemap_entries(catalog: &Catalog, config: &SiteConfig, now: DateTime<Utc>) -> Vec<SitemapEntry> {
    scheduled_routes(catalog)
        .into_iter()
        .map(|(route, change_frequency, priority)| SitemapEntry {
            url: config.absolute(&route.path()),
            route,
            last_modified: now,
            change_frequency,
            priority,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jcb_site_core::blog::BLOG_POSTS;
    use std::collections::HashSet;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-02-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_location_slugs_cover_catalog_once() {
        let catalog = Catalog::builtin();
        let slugs = location_slugs(&catalog);

        assert_eq!(slugs.len(), catalog.areas().len() + catalog.districts().len());
        for location in catalog.locations() {
            assert_eq!(slugs.iter().filter(|s| **s == location.slug).count(), 1);
        }
    }

    #[test]
    fn test_cross_product_size_and_uniqueness() {
        let catalog = Catalog::builtin();
        let params = service_location_params(&catalog);

        assert_eq!(params.len(), catalog.services().len() * catalog.locations().len());
        let unique: HashSet<_> = params.iter().collect();
        assert_eq!(unique.len(), params.len());
        assert_eq!(params[0].service, "excavation");
        assert_eq!(params[0].location, "civil-lines");
        assert_eq!(params[20].service, "road-construction");
    }

    #[test]
    fn test_cross_product_grows_with_extra_service() {
        let catalog = Catalog::builtin()
            .extended(
                vec![],
                vec![jcb_site_core::Service {
                    name: "Drainage Work".into(),
                    slug: "drainage".into(),
                    keywords: vec![],
                }],
            )
            .unwrap();
        assert_eq!(service_location_params(&catalog).len(), 6 * 20);
    }

    #[test]
    fn test_sitemap_size() {
        let catalog = Catalog::builtin();
        let entries = sitemap_entries(&catalog, &SiteConfig::default(), now());

        let l = catalog.locations().len();
        let s = catalog.services().len();
        assert_eq!(entries.len(), 4 + l + s + s * l + 6);
        assert_eq!(entries.len(), 135);
    }

    #[test]
    fn test_sitemap_priorities_in_range() {
        let entries = sitemap_entries(&Catalog::builtin(), &SiteConfig::default(), now());
        assert!(entries.iter().all(|e| (0.0..=1.0).contains(&e.priority)));
    }

    #[test]
    fn test_sitemap_priority_policy() {
        let entries = sitemap_entries(&Catalog::builtin(), &SiteConfig::default(), now());
        let priority_of = |route: &Route| {
            entries
                .iter()
                .find(|e| &e.route == route)
                .map(|e| e.priority)
                .unwrap()
        };

        assert_eq!(priority_of(&Route::Home), 1.0);
        assert_eq!(priority_of(&Route::Location("naini".into())), 0.8);
        assert_eq!(priority_of(&Route::Service("demolition".into())), 0.8);
        assert_eq!(
            priority_of(&Route::ServiceLocation {
                service: "demolition".into(),
                location: "agra".into()
            }),
            0.7
        );
        assert_eq!(priority_of(&Route::BlogPost(BLOG_POSTS[0].slug.into())), 0.6);
    }

    #[test]
    fn test_sitemap_urls_and_timestamps() {
        let config = SiteConfig {
            url: "https://jcbbooking.com/".into(),
            ..SiteConfig::default()
        };
        let entries = sitemap_entries(&Catalog::builtin(), &config, now());

        assert_eq!(entries[0].url, "https://jcbbooking.com/");
        assert_eq!(entries[4].url, "https://jcbbooking.com/location/civil-lines");
        assert!(entries.iter().all(|e| e.last_modified == now()));
        assert_eq!(entries[0].change_frequency, ChangeFrequency::Daily);
    }

    #[test]
    fn test_draft_posts_left_out() {
        let routes = all_routes(&Catalog::builtin());
        assert!(!routes.contains(&Route::BlogPost("choosing-right-jcb-project".into())));
        assert!(routes.contains(&Route::Blog));
    }
}
