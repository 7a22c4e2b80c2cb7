use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::types::{HOME_CITY, Location, LocationKind, Service};

/// Read-only tables of locations and services.
///
/// Locations keep their insertion order with all areas first, then all
/// districts and cities. Slugs are unique within each table.
#[derive(Debug, Clone)]
pub struct Catalog {
    locations: Vec<Location>,
    area_count: usize,
    services: Vec<Service>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate slugs.
    ///
    /// Locations are grouped by their kind, not by the argument they came
    /// in: every `Area` ends up in [`Catalog::areas`] and everything else in
    /// [`Catalog::districts`], each group keeping its input order.
    pub fn new(areas: Vec<Location>, districts: Vec<Location>, services: Vec<Service>) -> Result<Self> {
        let (mut locations, others): (Vec<_>, Vec<_>) = areas
            .into_iter()
            .chain(districts)
            .partition(Location::is_area);
        let area_count = locations.len();
        locations.extend(others);

        ensure_unique("location", locations.iter().map(|l| l.slug.as_str()))?;
        ensure_unique("service", services.iter().map(|s| s.slug.as_str()))?;

        Ok(Self {
            locations,
            area_count,
            services,
        })
    }

    /// The built-in Prayagraj / Uttar Pradesh catalog
    pub fn builtin() -> Self {
        let areas = prayagraj_areas();
        let area_count = areas.len();
        let mut locations = areas;
        locations.extend(up_districts());

        Self {
            locations,
            area_count,
            services: builtin_services(),
        }
    }

    /// Return a new catalog with extra entries appended.
    ///
    /// Extra areas are placed after the existing areas, everything else
    /// after the existing districts.
    pub fn extended(&self, locations: Vec<Location>, services: Vec<Service>) -> Result<Self> {
        let (extra_areas, extra_districts): (Vec<_>, Vec<_>) =
            locations.into_iter().partition(Location::is_area);

        let mut areas = self.areas().to_vec();
        areas.extend(extra_areas);
        let mut districts = self.districts().to_vec();
        districts.extend(extra_districts);
        let mut all_services = self.services.clone();
        all_services.extend(services);

        Self::new(areas, districts, all_services)
    }

    /// All locations, areas first
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn areas(&self) -> &[Location] {
        &self.locations[..self.area_count]
    }

    pub fn districts(&self) -> &[Location] {
        &self.locations[self.area_count..]
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn location(&self, slug: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.slug == slug)
    }

    pub fn service(&self, slug: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.slug == slug)
    }
}

fn ensure_unique<'a>(kind: &'static str, slugs: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for slug in slugs {
        if !seen.insert(slug) {
            return Err(Error::DuplicateSlug {
                kind,
                slug: slug.to_string(),
            });
        }
    }
    Ok(())
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn area(
    name: &str,
    slug: &str,
    pincode: &str,
    description: &str,
    keywords: &[&str],
    landmarks: &[&str],
) -> Location {
    Location {
        name: name.to_string(),
        slug: slug.to_string(),
        kind: LocationKind::Area,
        parent: Some(HOME_CITY.to_string()),
        pincodes: vec![pincode.to_string()],
        description: description.to_string(),
        keywords: strings(keywords),
        population: None,
        landmarks: strings(landmarks),
    }
}

fn district(
    name: &str,
    slug: &str,
    pincodes: &[&str],
    description: &str,
    keywords: &[&str],
    population: &str,
    landmarks: &[&str],
) -> Location {
    Location {
        name: name.to_string(),
        slug: slug.to_string(),
        kind: LocationKind::District,
        parent: None,
        pincodes: strings(pincodes),
        description: description.to_string(),
        keywords: strings(keywords),
        population: Some(population.to_string()),
        landmarks: strings(landmarks),
    }
}

fn service(name: &str, slug: &str, keywords: &[&str]) -> Service {
    Service {
        name: name.to_string(),
        slug: slug.to_string(),
        keywords: strings(keywords),
    }
}

fn prayagraj_areas() -> Vec<Location> {
    vec![
        area(
            "Civil Lines",
            "civil-lines",
            "211001",
            "Premium residential and commercial area in Prayagraj with excellent connectivity",
            &["civil lines prayagraj", "jcb rental civil lines", "excavator hire civil lines"],
            &["High Court", "University of Allahabad", "All Saints Cathedral"],
        ),
        area(
            "Katra",
            "katra",
            "211002",
            "Historic commercial hub in old Prayagraj city",
            &["katra prayagraj", "jcb services katra", "construction equipment katra"],
            &["Katra Market", "Hanuman Temple", "Patalpuri Temple"],
        ),
        area(
            "Chowk",
            "chowk",
            "211003",
            "Central business district of Prayagraj",
            &["chowk prayagraj", "jcb rental chowk", "earthmoving equipment chowk"],
            &["Company Bagh", "Public Library", "GPO"],
        ),
        area(
            "Georgetown",
            "georgetown",
            "211004",
            "Well-planned residential area with modern amenities",
            &["georgetown prayagraj", "jcb hire georgetown", "construction services georgetown"],
            &["Georgetown Market", "St. Joseph's College", "Thornhill Mayne Memorial"],
        ),
        area(
            "Kareli",
            "kareli",
            "211016",
            "Rapidly developing suburban area in Prayagraj",
            &["kareli prayagraj", "jcb services kareli", "excavation work kareli"],
            &["Kareli Railway Station", "Industrial Area", "Residential Colonies"],
        ),
        area(
            "Naini",
            "naini",
            "211008",
            "Industrial and residential area across Yamuna river",
            &["naini prayagraj", "jcb rental naini", "industrial construction naini"],
            &["Naini Bridge", "IFFCO Plant", "Naini Railway Station"],
        ),
        area(
            "Jhunsi",
            "jhunsi",
            "211019",
            "Historic area known for Akshayavat and religious significance",
            &["jhunsi prayagraj", "jcb services jhunsi", "construction equipment jhunsi"],
            &["Akshayavat", "Patalpuri Temple", "Saraswati Ghat"],
        ),
        area(
            "Mumfordganj",
            "mumfordganj",
            "211002",
            "Central area with good connectivity and commercial establishments",
            &["mumfordganj prayagraj", "jcb hire mumfordganj", "earthmoving mumfordganj"],
            &["Leader Road", "Mumford Ganj Market", "Medical College"],
        ),
        area(
            "Allenpur",
            "allenpur",
            "211006",
            "Residential area with educational institutions",
            &["allenpur prayagraj", "jcb rental allenpur", "construction services allenpur"],
            &["Ewing Christian College", "Allenpur Market", "Residential Colonies"],
        ),
        area(
            "Daraganj",
            "daraganj",
            "211006",
            "Historic area near the confluence of rivers",
            &["daraganj prayagraj", "jcb services daraganj", "excavation daraganj"],
            &["Sangam", "Daraganj Ghat", "Akbar Fort"],
        ),
        area(
            "Tagore Town",
            "tagore-town",
            "211002",
            "Well-developed residential area with modern facilities",
            &["tagore town prayagraj", "jcb hire tagore town", "construction tagore town"],
            &["Tagore Town Market", "Schools", "Parks"],
        ),
        area(
            "Ashok Nagar",
            "ashok-nagar",
            "211001",
            "Popular residential locality with good infrastructure",
            &["ashok nagar prayagraj", "jcb rental ashok nagar", "earthmoving ashok nagar"],
            &["Ashok Nagar Market", "Community Center", "Schools"],
        ),
    ]
}

fn up_districts() -> Vec<Location> {
    vec![
        district(
            "Lucknow",
            "lucknow",
            &["226001", "226002", "226003"],
            "Capital city of Uttar Pradesh with major construction projects",
            &["lucknow jcb rental", "excavator hire lucknow", "construction equipment lucknow"],
            "28 lakh",
            &["Bara Imambara", "Chota Imambara", "Rumi Darwaza"],
        ),
        district(
            "Kanpur",
            "kanpur",
            &["208001", "208002", "208003"],
            "Industrial hub of UP requiring heavy construction equipment",
            &["kanpur jcb services", "jcb rental kanpur", "industrial construction kanpur"],
            "27 lakh",
            &["Kanpur Central", "IIT Kanpur", "Green Park Stadium"],
        ),
        district(
            "Varanasi",
            "varanasi",
            &["221001", "221002", "221003"],
            "Holy city with ongoing infrastructure development projects",
            &["varanasi jcb rental", "construction equipment varanasi", "excavation varanasi"],
            "12 lakh",
            &["Kashi Vishwanath Temple", "Sarnath", "BHU"],
        ),
        district(
            "Agra",
            "agra",
            &["282001", "282002", "282003"],
            "Tourist city with continuous construction and development work",
            &["agra jcb services", "jcb hire agra", "construction agra"],
            "16 lakh",
            &["Taj Mahal", "Agra Fort", "Fatehpur Sikri"],
        ),
        district(
            "Meerut",
            "meerut",
            &["250001", "250002", "250003"],
            "Major commercial center in western UP",
            &["meerut jcb rental", "excavator meerut", "construction equipment meerut"],
            "13 lakh",
            &["Suraj Kund", "Gandhi Bagh", "Meerut Cantonment"],
        ),
        district(
            "Ghaziabad",
            "ghaziabad",
            &["201001", "201002", "201003"],
            "NCR city with rapid urbanization and construction boom",
            &["ghaziabad jcb services", "jcb rental ghaziabad", "construction ghaziabad"],
            "17 lakh",
            &["Indirapuram", "Vasundhara", "Raj Nagar"],
        ),
        district(
            "Bareilly",
            "bareilly",
            &["243001", "243002", "243003"],
            "Commercial hub in northern UP with growing infrastructure",
            &["bareilly jcb rental", "construction equipment bareilly", "excavation bareilly"],
            "9 lakh",
            &["Alakhnath Temple", "Fun City", "Phoenix Mall"],
        ),
        district(
            "Moradabad",
            "moradabad",
            &["244001", "244002", "244003"],
            "Brass city with industrial and residential development",
            &["moradabad jcb services", "jcb hire moradabad", "construction moradabad"],
            "9 lakh",
            &["Jama Masjid", "Raza Library", "Sai Temple"],
        ),
    ]
}

fn builtin_services() -> Vec<Service> {
    vec![
        service(
            "Excavation Services",
            "excavation",
            &["excavation", "digging", "foundation work", "site preparation"],
        ),
        service(
            "Road Construction",
            "road-construction",
            &["road construction", "road building", "highway construction", "road repair"],
        ),
        service(
            "Demolition Services",
            "demolition",
            &["demolition", "building demolition", "structure removal", "site clearance"],
        ),
        service(
            "Earthmoving",
            "earthmoving",
            &["earthmoving", "soil moving", "land leveling", "grading"],
        ),
        service(
            "Construction Equipment Rental",
            "equipment-rental",
            &["equipment rental", "machinery hire", "construction tools", "heavy equipment"],
        ),
    ]
}
