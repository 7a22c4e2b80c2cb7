use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// City that every `area` belongs to unless it names another parent
pub const HOME_CITY: &str = "Prayagraj";

/// How a location relates to the home city
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    /// Locality inside a city; displayed with the city name appended
    Area,
    District,
    City,
}

/// A place the business serves
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub slug: String,
    pub kind: LocationKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pincodes: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub landmarks: Vec<String>,
}

impl Location {
    pub fn is_area(&self) -> bool {
        self.kind == LocationKind::Area
    }

    /// Name shown in headings and structured data.
    ///
    /// Areas are qualified with their parent city ("Civil Lines, Prayagraj");
    /// districts and cities stand alone.
    pub fn display_name(&self) -> String {
        if self.is_area() {
            let city = self.parent.as_deref().unwrap_or(HOME_CITY);
            format!("{}, {}", self.name, city)
        } else {
            self.name.clone()
        }
    }
}

/// A service line offered in every location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Site-wide settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base URL used for the sitemap and robots.txt
    pub url: String,
    /// Brand used in the `<title>` suffix and Open Graph site name
    pub name: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:3000".to_string(),
            name: "JCB Booking Prayagraj".to_string(),
        }
    }
}

impl SiteConfig {
    /// Absolute URL for a site path
    pub fn absolute(&self, path: &str) -> String {
        format!("{}{}", self.url.trim_end_matches('/'), path)
    }
}

/// Identity of the business as published in structured data and contact links
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessProfile {
    pub name: String,
    pub alternate_name: String,
    /// Canonical public origin, e.g. "https://jcbbooking.com"
    pub url: String,
    pub logo: String,
    /// International form used in schema.org, e.g. "+91-95593-94527"
    pub telephone: String,
    /// Human form shown on call buttons
    pub phone_display: String,
    /// Digits dialed by `tel:` links
    pub phone_dial: String,
    /// Digits used by wa.me deep links (country code included)
    pub whatsapp: String,
    pub street_address: String,
    pub locality: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Service area radius in meters
    pub service_radius_m: u32,
    pub opens: String,
    pub closes: String,
    pub price_range: String,
    pub languages: Vec<String>,
    pub same_as: Vec<String>,
}

impl Default for BusinessProfile {
    fn default() -> Self {
        Self {
            name: "JCB Booking Services".to_string(),
            alternate_name: "JCB Rental Prayagraj".to_string(),
            url: "https://jcbbooking.com".to_string(),
            logo: "https://jcbbooking.com/logo.png".to_string(),
            telephone: "+91-95593-94527".to_string(),
            phone_display: "95593 94527".to_string(),
            phone_dial: "9559394527".to_string(),
            whatsapp: "919559394527".to_string(),
            street_address: "Civil Lines".to_string(),
            locality: HOME_CITY.to_string(),
            region: "Uttar Pradesh".to_string(),
            postal_code: "211001".to_string(),
            country: "IN".to_string(),
            latitude: 25.4358,
            longitude: 81.8463,
            service_radius_m: 100_000,
            opens: "06:00".to_string(),
            closes: "20:00".to_string(),
            price_range: "₹₹".to_string(),
            languages: vec!["Hindi".to_string(), "English".to_string()],
            same_as: vec![
                "https://www.facebook.com/jcbbookingservices".to_string(),
                "https://www.instagram.com/jcbbookingservices".to_string(),
                "https://wa.me/919559394527".to_string(),
            ],
        }
    }
}

/// Everything a render needs: the immutable catalog plus site settings
#[derive(Debug, Clone)]
pub struct Site {
    pub config: SiteConfig,
    pub business: BusinessProfile,
    pub catalog: Catalog,
}

impl Site {
    /// Built-in catalog with default settings
    pub fn builtin() -> Self {
        Self {
            config: SiteConfig::default(),
            business: BusinessProfile::default(),
            catalog: Catalog::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(name: &str, kind: LocationKind, parent: Option<&str>) -> Location {
        Location {
            name: name.to_string(),
            slug: name.to_lowercase().replace(' ', "-"),
            kind,
            parent: parent.map(str::to_string),
            pincodes: vec![],
            description: String::new(),
            keywords: vec![],
            population: None,
            landmarks: vec![],
        }
    }

    #[test]
    fn test_display_name_area_gets_city_suffix() {
        let civil_lines = location("Civil Lines", LocationKind::Area, Some("Prayagraj"));
        assert_eq!(civil_lines.display_name(), "Civil Lines, Prayagraj");
    }

    #[test]
    fn test_display_name_area_without_parent_uses_home_city() {
        let naini = location("Naini", LocationKind::Area, None);
        assert_eq!(naini.display_name(), "Naini, Prayagraj");
    }

    #[test]
    fn test_display_name_district_and_city_stand_alone() {
        let lucknow = location("Lucknow", LocationKind::District, None);
        assert_eq!(lucknow.display_name(), "Lucknow");

        let city = location("Prayagraj", LocationKind::City, Some("Ignored"));
        assert_eq!(city.display_name(), "Prayagraj");
    }

    #[test]
    fn test_site_config_absolute_trims_trailing_slash() {
        let config = SiteConfig {
            url: "https://jcbbooking.com/".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(config.absolute("/blog"), "https://jcbbooking.com/blog");
    }
}
