//! schema.org JSON-LD payloads.
//!
//! Each variant is its own record so the shape of every payload is fixed at
//! compile time. `#[serde(tag = "@type")]` writes the schema.org type name
//! from the struct name (or its `rename`).

use chrono::{DateTime, Utc};
use jcb_site_core::BusinessProfile;
use serde::Serialize;

use crate::detail::hourly_rate;

const CONTEXT: &str = "https://schema.org";

/// Which payload a page embeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemaType {
    Organization,
    #[default]
    LocalBusiness,
    Service,
    Article,
}

/// Page-specific inputs to the payload builders
#[derive(Debug, Clone, Default)]
pub struct SchemaInput {
    /// Display name of the location, e.g. "Civil Lines, Prayagraj"
    pub location: Option<String>,
    /// Service display name, e.g. "Demolition Services"
    pub service: Option<String>,
    pub article: Option<ArticleInput>,
}

#[derive(Debug, Clone, Default)]
pub struct ArticleInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub date_published: Option<DateTime<Utc>>,
    pub date_modified: Option<DateTime<Utc>>,
}

/// A built payload, ready to serialize
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum StructuredData {
    Organization(Organization),
    LocalBusiness(Box<LocalBusiness>),
    Service(ServiceSchema),
    Article(Article),
}

impl StructuredData {
    /// Build the payload selected by `kind`
    pub fn build(
        kind: SchemaType,
        business: &BusinessProfile,
        input: &SchemaInput,
        now: DateTime<Utc>,
    ) -> Self {
        match kind {
            SchemaType::Organization => StructuredData::Organization(Organization::new(business)),
            SchemaType::LocalBusiness => StructuredData::LocalBusiness(Box::new(LocalBusiness::new(
                business,
                input.location.as_deref(),
            ))),
            SchemaType::Service => StructuredData::Service(ServiceSchema::new(
                business,
                input.service.as_deref(),
                input.location.as_deref(),
            )),
            SchemaType::Article => StructuredData::Article(Article::new(
                business,
                input.article.as_ref().cloned().unwrap_or_default(),
                now,
            )),
        }
    }

    /// Compact JSON safe to place inside a `<script>` element
    pub fn to_json_ld(&self) -> String {
        serde_json::to_string(self)
            .map(|json| json.replace("</", "<\\/"))
            .unwrap_or_else(|_| "{}".to_string())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "@type", rename_all = "camelCase")]
pub struct Organization {
    #[serde(rename = "@context")]
    pub context: &'static str,
    pub name: String,
    pub alternate_name: String,
    pub url: String,
    pub logo: String,
    pub contact_point: ContactPoint,
    pub address: PostalAddress,
    pub geo: GeoCoordinates,
    pub same_as: Vec<String>,
}

impl Organization {
    pub fn new(business: &BusinessProfile) -> Self {
        Self {
            context: CONTEXT,
            name: business.name.clone(),
            alternate_name: business.alternate_name.clone(),
            url: business.url.clone(),
            logo: business.logo.clone(),
            contact_point: ContactPoint {
                telephone: business.telephone.clone(),
                contact_type: "customer service",
                area_served: vec![
                    business.locality.clone(),
                    business.region.clone(),
                    "India".to_string(),
                ],
                available_language: business.languages.clone(),
            },
            address: PostalAddress::full(business, None),
            geo: GeoCoordinates::of(business),
            same_as: business.same_as.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "@type", rename_all = "camelCase")]
pub struct ContactPoint {
    pub telephone: String,
    pub contact_type: &'static str,
    pub area_served: Vec<String>,
    pub available_language: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "@type", rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    pub address_locality: String,
    pub address_region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    pub address_country: String,
}

impl PostalAddress {
    /// Business address with the locality optionally overridden
    fn full(business: &BusinessProfile, locality: Option<&str>) -> Self {
        Self {
            street_address: Some(business.street_address.clone()),
            address_locality: locality.unwrap_or(&business.locality).to_string(),
            address_region: business.region.clone(),
            postal_code: Some(business.postal_code.clone()),
            address_country: business.country.clone(),
        }
    }

    fn locality_only(business: &BusinessProfile, locality: Option<&str>) -> Self {
        Self {
            street_address: None,
            postal_code: None,
            ..Self::full(business, locality)
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "@type")]
pub struct GeoCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinates {
    fn of(business: &BusinessProfile) -> Self {
        Self {
            latitude: business.latitude,
            longitude: business.longitude,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "@type", rename_all = "camelCase")]
pub struct LocalBusiness {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub image: String,
    pub description: &'static str,
    pub url: String,
    pub telephone: String,
    pub price_range: String,
    pub address: PostalAddress,
    pub geo: GeoCoordinates,
    pub opening_hours_specification: OpeningHoursSpecification,
    pub service_area: GeoCircle,
    pub has_offer_catalog: OfferCatalog<Offer>,
    pub aggregate_rating: AggregateRating,
    pub review: Vec<Review>,
}

const BUSINESS_DESCRIPTION: &str = "Professional JCB rental and construction equipment services in Prayagraj and Uttar Pradesh. Expert excavation, road construction, demolition, and earthmoving services.";

const WEEK: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const OFFERED_SERVICES: [(&str, &str); 5] = [
    (
        "JCB Excavation Services",
        "Professional excavation services using modern JCB excavators",
    ),
    (
        "Road Construction Services",
        "Expert road construction and repair services",
    ),
    ("Demolition Services", "Safe and efficient demolition services"),
    (
        "Earthmoving Services",
        "Comprehensive earthmoving and landscaping services",
    ),
    (
        "Equipment Rental",
        "JCB equipment rental with professional operators",
    ),
];

const REVIEWS: [(&str, &str); 2] = [
    (
        "Rajesh Kumar",
        "Excellent JCB services in Prayagraj. Professional team and modern equipment. Highly recommended for construction work.",
    ),
    (
        "Priya Sharma",
        "Best JCB rental service in Uttar Pradesh. Quick response and competitive pricing. Great for excavation work.",
    ),
];

impl LocalBusiness {
    /// `location` overrides the address locality
    pub fn new(business: &BusinessProfile, location: Option<&str>) -> Self {
        Self {
            context: CONTEXT,
            id: business.url.clone(),
            name: business.name.clone(),
            image: business.logo.clone(),
            description: BUSINESS_DESCRIPTION,
            url: business.url.clone(),
            telephone: business.telephone.clone(),
            price_range: business.price_range.clone(),
            address: PostalAddress::full(business, location),
            geo: GeoCoordinates::of(business),
            opening_hours_specification: OpeningHoursSpecification {
                day_of_week: WEEK.to_vec(),
                opens: business.opens.clone(),
                closes: business.closes.clone(),
            },
            service_area: GeoCircle {
                geo_midpoint: GeoCoordinates::of(business),
                geo_radius: business.service_radius_m.to_string(),
            },
            has_offer_catalog: OfferCatalog {
                name: "JCB Services".to_string(),
                item_list_element: OFFERED_SERVICES
                    .iter()
                    .map(|&(name, description)| Offer {
                        item_offered: OfferedService {
                            name,
                            description,
                        },
                    })
                    .collect(),
            },
            aggregate_rating: AggregateRating {
                rating_value: "4.8",
                review_count: "127",
                best_rating: "5",
                worst_rating: "1",
            },
            review: REVIEWS
                .iter()
                .map(|&(author, body)| Review {
                    author: Person { name: author },
                    review_rating: Rating {
                        rating_value: "5",
                        best_rating: "5",
                    },
                    review_body: body,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "@type", rename_all = "camelCase")]
pub struct OpeningHoursSpecification {
    pub day_of_week: Vec<&'static str>,
    pub opens: String,
    pub closes: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "@type", rename_all = "camelCase")]
pub struct GeoCircle {
    pub geo_midpoint: GeoCoordinates,
    pub geo_radius: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "@type", rename_all = "camelCase")]
pub struct OfferCatalog<T> {
    pub name: String,
    pub item_list_element: Vec<T>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "@type", rename_all = "camelCase")]
pub struct Offer {
    pub item_offered: OfferedService,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "@type", rename = "Service")]
pub struct OfferedService {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "@type", rename_all = "camelCase")]
pub struct AggregateRating {
    pub rating_value: &'static str,
    pub review_count: &'static str,
    pub best_rating: &'static str,
    pub worst_rating: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "@type", rename_all = "camelCase")]
pub struct Review {
    pub author: Person,
    pub review_rating: Rating,
    pub review_body: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "@type")]
pub struct Person {
    pub name: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "@type", rename_all = "camelCase")]
pub struct Rating {
    pub rating_value: &'static str,
    pub best_rating: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "@type", rename = "Service", rename_all = "camelCase")]
pub struct ServiceSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    pub name: String,
    pub description: String,
    pub provider: ServiceProvider,
    pub area_served: Place,
    pub has_offer_catalog: OfferCatalog<PricedOffer>,
}

impl ServiceSchema {
    pub fn new(business: &BusinessProfile, service: Option<&str>, location: Option<&str>) -> Self {
        let place = location.unwrap_or(&business.locality);
        let name = match service {
            Some(service) => format!("{} in {}", service, place),
            None => "JCB Services".to_string(),
        };
        let description = format!(
            "Professional {} services in {}, {}",
            service.map(str::to_lowercase).unwrap_or_else(|| "JCB".to_string()),
            place,
            business.region
        );
        let hourly = hourly_rate();

        Self {
            context: CONTEXT,
            name,
            description,
            provider: ServiceProvider {
                name: business.name.clone(),
                telephone: business.telephone.clone(),
                address: PostalAddress::locality_only(business, location),
            },
            area_served: Place {
                name: location
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{}, {}", business.locality, business.region)),
            },
            has_offer_catalog: OfferCatalog {
                name: service.unwrap_or("JCB Services").to_string(),
                item_list_element: vec![PricedOffer {
                    price: hourly.plain_range(),
                    price_currency: "INR",
                    price_specification: UnitPriceSpecification {
                        price: hourly.plain_range(),
                        price_currency: "INR",
                        unit_text: hourly.unit,
                    },
                }],
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "@type", rename = "LocalBusiness")]
pub struct ServiceProvider {
    pub name: String,
    pub telephone: String,
    pub address: PostalAddress,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "@type")]
pub struct Place {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "@type", rename = "Offer", rename_all = "camelCase")]
pub struct PricedOffer {
    pub price: String,
    pub price_currency: &'static str,
    pub price_specification: UnitPriceSpecification,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "@type", rename_all = "camelCase")]
pub struct UnitPriceSpecification {
    pub price: String,
    pub price_currency: &'static str,
    pub unit_text: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "@type", rename_all = "camelCase")]
pub struct Article {
    #[serde(rename = "@context")]
    pub context: &'static str,
    pub headline: String,
    pub description: String,
    pub author: OrganizationRef,
    pub publisher: Publisher,
    pub date_published: DateTime<Utc>,
    pub date_modified: DateTime<Utc>,
    pub main_entity_of_page: WebPage,
}

impl Article {
    pub fn new(business: &BusinessProfile, input: ArticleInput, now: DateTime<Utc>) -> Self {
        Self {
            context: CONTEXT,
            headline: input
                .title
                .unwrap_or_else(|| "JCB Services Guide".to_string()),
            description: input
                .description
                .unwrap_or_else(|| "Comprehensive guide to JCB services".to_string()),
            author: OrganizationRef {
                name: business.name.clone(),
            },
            publisher: Publisher {
                name: business.name.clone(),
                logo: ImageObject {
                    url: business.logo.clone(),
                },
            },
            date_published: input.date_published.unwrap_or(now),
            date_modified: input.date_modified.unwrap_or(now),
            main_entity_of_page: WebPage {
                id: input.url.unwrap_or_else(|| business.url.clone()),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "@type", rename = "Organization")]
pub struct OrganizationRef {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "@type", rename = "Organization")]
pub struct Publisher {
    pub name: String,
    pub logo: ImageObject,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "@type")]
pub struct ImageObject {
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "@type")]
pub struct WebPage {
    #[serde(rename = "@id")]
    pub id: String,
}
