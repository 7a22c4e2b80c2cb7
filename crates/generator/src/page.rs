//! Resolution of routes against the catalog into page models.
//!
//! Every resolver is a pure function of its slugs and the site. A slug that
//! does not resolve is a terminal [`NotFound`]; a catalog service without
//! dedicated content renders with the excavation content instead of failing.

use jcb_site_core::blog::{self, BlogPost};
use jcb_site_core::{Location, Service, Site};
use thiserror::Error;

use crate::contact::ContactLinks;
use crate::detail::{PRICING, PriceTier, ServiceDetail, ServiceKind};
use crate::route::Route;
use crate::schema::{SchemaInput, SchemaType};

/// The route does not resolve against the catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("No page at {path}")]
pub struct NotFound {
    pub path: String,
}

impl NotFound {
    fn at(route: &Route) -> Self {
        Self { path: route.path() }
    }
}

/// Head metadata shared by every page
#[derive(Debug, Clone, PartialEq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub canonical: String,
}

impl PageMeta {
    pub fn keywords_joined(&self) -> String {
        self.keywords.join(", ")
    }
}

/// Resolved `/location/{slug}` page
#[derive(Debug, Clone)]
pub struct LocationPage<'a> {
    pub location: &'a Location,
    pub display_name: String,
    pub meta: PageMeta,
    pub schema: SchemaInput,
    pub contact: ContactLinks,
    /// Up to eight other locations to link to
    pub related: Vec<&'a Location>,
}

const RELATED_LOCATIONS: usize = 8;

impl<'a> LocationPage<'a> {
    pub fn resolve(site: &'a Site, slug: &str) -> Result<Self, NotFound> {
        let location = site
            .catalog
            .location(slug)
            .ok_or_else(|| NotFound::at(&Route::Location(slug.to_string())))?;

        let display_name = location.display_name();
        let name_lc = location.name.to_lowercase();

        let mut keywords = location.keywords.clone();
        keywords.extend([
            format!("jcb rental {}", name_lc),
            format!("construction equipment {}", name_lc),
            format!("excavator hire {}", name_lc),
            "jcb booking".to_string(),
            "earthmoving services".to_string(),
            "demolition services".to_string(),
        ]);

        let meta = PageMeta {
            title: format!(
                "JCB Rental Services in {} | Professional Construction Equipment",
                display_name
            ),
            description: format!(
                "Professional JCB rental and construction equipment services in {}. {}. Call {} for immediate booking.",
                display_name, location.description, site.business.phone_display
            ),
            keywords,
            canonical: format!("{}/location/{}", site.business.url, location.slug),
        };

        let related = site
            .catalog
            .locations()
            .iter()
            .filter(|l| l.slug != location.slug)
            .take(RELATED_LOCATIONS)
            .collect();

        Ok(Self {
            location,
            schema: SchemaInput {
                location: Some(display_name.clone()),
                ..SchemaInput::default()
            },
            contact: ContactLinks::for_location(&site.business, &display_name),
            display_name,
            meta,
            related,
        })
    }

    pub fn schema_type(&self) -> SchemaType {
        SchemaType::LocalBusiness
    }
}

/// Resolved `/services/{service}/{location}` page
#[derive(Debug, Clone)]
pub struct ServiceLocationPage<'a> {
    pub service: &'a Service,
    pub location: &'a Location,
    pub kind: ServiceKind,
    pub detail: &'static ServiceDetail,
    pub display_name: String,
    pub meta: PageMeta,
    pub schema: SchemaInput,
    pub contact: ContactLinks,
    pub pricing: &'static [PriceTier; 3],
    /// The other services offered in the same location
    pub related: Vec<&'a Service>,
}

impl<'a> ServiceLocationPage<'a> {
    pub fn resolve(site: &'a Site, service_slug: &str, location_slug: &str) -> Result<Self, NotFound> {
        let route = Route::ServiceLocation {
            service: service_slug.to_string(),
            location: location_slug.to_string(),
        };
        let service = site
            .catalog
            .service(service_slug)
            .ok_or_else(|| NotFound::at(&route))?;
        let location = site
            .catalog
            .location(location_slug)
            .ok_or_else(|| NotFound::at(&route))?;

        let kind = ServiceKind::from_slug(&service.slug);
        if !kind.is_known() {
            tracing::debug!(service = %service.slug, "no dedicated content, using excavation details");
        }

        let display_name = location.display_name();
        let name_lc = location.name.to_lowercase();
        let service_lc = service.name.to_lowercase();

        let mut keywords: Vec<String> = service
            .keywords
            .iter()
            .map(|k| format!("{} {}", k, name_lc))
            .collect();
        keywords.extend(location.keywords.iter().cloned());
        keywords.extend([
            format!("{} {}", service_lc, name_lc),
            "jcb rental".to_string(),
            "construction equipment".to_string(),
            "professional services".to_string(),
        ]);

        let meta = PageMeta {
            title: format!("{} in {} | Professional JCB Services", service.name, display_name),
            description: format!(
                "Professional {} in {}. Expert JCB operators, modern equipment, competitive rates. Call {} for immediate booking.",
                service_lc, display_name, site.business.phone_display
            ),
            keywords,
            canonical: format!(
                "{}/services/{}/{}",
                site.business.url, service.slug, location.slug
            ),
        };

        let related = site
            .catalog
            .services()
            .iter()
            .filter(|s| s.slug != service.slug)
            .collect();

        Ok(Self {
            service,
            location,
            kind,
            detail: kind.detail(),
            schema: SchemaInput {
                location: Some(display_name.clone()),
                service: Some(service.name.clone()),
                article: None,
            },
            contact: ContactLinks::for_service(&site.business, &service.name, &display_name),
            display_name,
            meta,
            pricing: &PRICING,
            related,
        })
    }

    pub fn schema_type(&self) -> SchemaType {
        SchemaType::Service
    }
}

/// Resolved `/services/{service}` page
#[derive(Debug, Clone)]
pub struct ServicePage<'a> {
    pub service: &'a Service,
    pub detail: &'static ServiceDetail,
    pub meta: PageMeta,
    pub schema: SchemaInput,
    pub contact: ContactLinks,
    pub locations: &'a [Location],
}

impl<'a> ServicePage<'a> {
    pub fn resolve(site: &'a Site, slug: &str) -> Result<Self, NotFound> {
        let service = site
            .catalog
            .service(slug)
            .ok_or_else(|| NotFound::at(&Route::Service(slug.to_string())))?;
        let home = &site.business.locality;

        let meta = PageMeta {
            title: format!("{} in {} and Uttar Pradesh", service.name, home),
            description: format!(
                "{} across {} and {} districts. Call {} for immediate booking.",
                service.name,
                home,
                site.business.region,
                site.business.phone_display
            ),
            keywords: service.keywords.clone(),
            canonical: format!("{}/services/{}", site.business.url, service.slug),
        };

        Ok(Self {
            service,
            detail: ServiceKind::from_slug(&service.slug).detail(),
            meta,
            schema: SchemaInput {
                service: Some(service.name.clone()),
                ..SchemaInput::default()
            },
            contact: ContactLinks::for_service(&site.business, &service.name, home),
            locations: site.catalog.locations(),
        })
    }
}

/// Resolved `/blog/{slug}` page
#[derive(Debug, Clone)]
pub struct BlogPostPage {
    pub post: &'static BlogPost,
    pub meta: PageMeta,
}

impl BlogPostPage {
    pub fn resolve(site: &Site, slug: &str) -> Result<Self, NotFound> {
        let post = blog::find_published(slug)
            .ok_or_else(|| NotFound::at(&Route::BlogPost(slug.to_string())))?;

        Ok(Self {
            post,
            meta: PageMeta {
                title: post.title.to_string(),
                description: post.excerpt.to_string(),
                keywords: post.keywords.iter().map(|k| k.to_string()).collect(),
                canonical: format!("{}{}", site.business.url, post.path()),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jcb_site_core::Catalog;

    fn site_with_drainage() -> Site {
        let mut site = Site::builtin();
        site.catalog = Catalog::builtin()
            .extended(
                vec![],
                vec![Service {
                    name: "Drainage Work".to_string(),
                    slug: "drainage".to_string(),
                    keywords: vec!["drainage".to_string()],
                }],
            )
            .unwrap();
        site
    }

    #[test]
    fn test_location_page_unknown_slug_is_not_found() {
        let site = Site::builtin();
        let err = LocationPage::resolve(&site, "nonexistent-slug").unwrap_err();
        assert_eq!(err.path, "/location/nonexistent-slug");
    }

    #[test]
    fn test_location_page_area_display_name_and_meta() {
        let site = Site::builtin();
        let page = LocationPage::resolve(&site, "civil-lines").unwrap();

        assert_eq!(page.display_name, "Civil Lines, Prayagraj");
        assert_eq!(
            page.meta.title,
            "JCB Rental Services in Civil Lines, Prayagraj | Professional Construction Equipment"
        );
        assert!(page.meta.description.contains("Premium residential and commercial area"));
        assert!(page.meta.description.ends_with("Call 95593 94527 for immediate booking."));
        assert_eq!(page.meta.canonical, "https://jcbbooking.com/location/civil-lines");
        assert_eq!(page.schema.location.as_deref(), Some("Civil Lines, Prayagraj"));
        assert_eq!(page.schema_type(), SchemaType::LocalBusiness);
    }

    #[test]
    fn test_location_page_keywords_own_first() {
        let site = Site::builtin();
        let page = LocationPage::resolve(&site, "civil-lines").unwrap();

        assert_eq!(page.meta.keywords.len(), 3 + 6);
        assert_eq!(page.meta.keywords[0], "civil lines prayagraj");
        assert_eq!(page.meta.keywords[3], "jcb rental civil lines");
        assert_eq!(page.meta.keywords[8], "demolition services");
    }

    #[test]
    fn test_location_page_district_and_related() {
        let site = Site::builtin();
        let page = LocationPage::resolve(&site, "lucknow").unwrap();

        assert_eq!(page.display_name, "Lucknow");
        assert_eq!(page.related.len(), 8);
        assert!(page.related.iter().all(|l| l.slug != "lucknow"));
    }

    #[test]
    fn test_service_location_excavation_naini() {
        let site = Site::builtin();
        let page = ServiceLocationPage::resolve(&site, "excavation", "naini").unwrap();

        assert_eq!(page.kind, ServiceKind::Excavation);
        assert_eq!(page.detail.features.len(), 6);
        assert_eq!(page.detail.features, crate::detail::EXCAVATION.features);
        assert_eq!(page.pricing[0].range(), "₹800-1200");
        assert_eq!(page.display_name, "Naini, Prayagraj");
        assert_eq!(
            page.meta.title,
            "Excavation Services in Naini, Prayagraj | Professional JCB Services"
        );
        assert_eq!(page.related.len(), 4);
    }

    #[test]
    fn test_service_location_keywords() {
        let site = Site::builtin();
        let page = ServiceLocationPage::resolve(&site, "demolition", "agra").unwrap();
        let kw = &page.meta.keywords;

        assert_eq!(kw[0], "demolition agra");
        assert_eq!(kw[4], "agra jcb services");
        assert!(kw.contains(&"demolition services agra".to_string()));
        assert_eq!(kw.last().map(String::as_str), Some("professional services"));
    }

    #[test]
    fn test_service_location_missing_either_slug() {
        let site = Site::builtin();
        assert!(ServiceLocationPage::resolve(&site, "excavation", "atlantis").is_err());
        assert!(ServiceLocationPage::resolve(&site, "drainage", "naini").is_err());
    }

    #[test]
    fn test_service_location_unknown_detail_falls_back() {
        let site = site_with_drainage();
        let page = ServiceLocationPage::resolve(&site, "drainage", "naini").unwrap();

        assert_eq!(page.kind, ServiceKind::Unknown);
        assert_eq!(page.detail, &crate::detail::EXCAVATION);
        assert_eq!(page.meta.title, "Drainage Work in Naini, Prayagraj | Professional JCB Services");
    }

    #[test]
    fn test_service_page_lists_every_location() {
        let site = Site::builtin();
        let page = ServicePage::resolve(&site, "earthmoving").unwrap();
        assert_eq!(page.locations.len(), 20);
        assert_eq!(page.detail.icon, "⛰️");
        assert!(ServicePage::resolve(&site, "nope").is_err());
    }

    #[test]
    fn test_blog_post_page() {
        let site = Site::builtin();
        let page = BlogPostPage::resolve(&site, "demolition-services-safety-guide").unwrap();
        assert_eq!(
            page.meta.canonical,
            "https://jcbbooking.com/blog/demolition-services-safety-guide"
        );
        assert!(BlogPostPage::resolve(&site, "choosing-right-jcb-project").is_err());
    }
}
