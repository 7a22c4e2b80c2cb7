use jcb_site_core::Site;
use leptos::prelude::*;

use super::{PageSchema, RenderOptions, contact_buttons, contact_section, document, text_list};
use crate::page::LocationPage;

/// Service card on a location page
struct LocationCard {
    title: &'static str,
    icon: &'static str,
    /// Sentence ending right before the location name
    lead: &'static str,
    tail: &'static str,
    features: &'static [&'static str],
}

const CARDS: [LocationCard; 6] = [
    LocationCard {
        title: "Excavation Services",
        icon: "🏗️",
        lead: "Professional excavation and digging services in",
        tail: "for foundations, basements, and site preparation.",
        features: &["Foundation Digging", "Site Preparation", "Basement Excavation", "Trenching"],
    },
    LocationCard {
        title: "Road Construction",
        icon: "🛣️",
        lead: "Expert road construction and repair services in",
        tail: "using modern JCB equipment.",
        features: &["Road Building", "Surface Repair", "Highway Construction", "Path Creation"],
    },
    LocationCard {
        title: "Demolition Work",
        icon: "🏚️",
        lead: "Safe and efficient demolition services in",
        tail: "for buildings and structures.",
        features: &["Building Demolition", "Structure Removal", "Site Clearance", "Debris Removal"],
    },
    LocationCard {
        title: "Earthmoving",
        icon: "⛰️",
        lead: "Comprehensive earthmoving and land preparation services in",
        tail: "",
        features: &["Land Leveling", "Soil Moving", "Grading", "Landscaping"],
    },
    LocationCard {
        title: "Construction Support",
        icon: "🏢",
        lead: "Complete construction support services in",
        tail: "with reliable JCB equipment.",
        features: &["Material Handling", "Site Support", "Equipment Rental", "Project Assistance"],
    },
    LocationCard {
        title: "Emergency Services",
        icon: "🚨",
        lead: "24/7 emergency JCB services in",
        tail: "for urgent construction needs.",
        features: &["24/7 Availability", "Emergency Response", "Urgent Repairs", "Quick Deployment"],
    },
];

const BENEFITS: [(&str, &str, &str); 4] = [
    ("⚡", "Quick Response", "Fast deployment within 30 minutes"),
    ("🔧", "Expert Operators", "Skilled and experienced JCB operators"),
    ("💰", "Competitive Rates", "Best prices in the market"),
    ("🛡️", "Fully Insured", "Complete insurance coverage"),
];

fn card_text(card: &LocationCard, place: &str) -> String {
    if card.tail.is_empty() {
        format!("{} {}.", card.lead, place)
    } else {
        format!("{} {} {}", card.lead, place, card.tail)
    }
}

pub fn render_location(site: &Site, page: &LocationPage<'_>, opts: &RenderOptions) -> String {
    let location = page.location;
    let place = page.display_name.clone();

    let cards = CARDS
        .iter()
        .map(|card| {
            let text = card_text(card, &place);
            view! {
                <div class="card">
                    <div class="card-icon">{card.icon}</div>
                    <h3>{card.title}</h3>
                    <p>{text}</p>
                    {text_list("checks", card.features)}
                </div>
            }
        })
        .collect_view();

    let service_links = site
        .catalog
        .services()
        .iter()
        .map(|service| {
            let href = format!("/services/{}/{}", service.slug, location.slug);
            let label = format!("{} in {}", service.name, location.name);
            view! { <a class="chip" href=href>{label}</a> }
        })
        .collect_view();

    let landmarks = (!location.landmarks.is_empty()).then(|| {
        let heading = format!("We Serve Near These Landmarks in {}", place);
        let items = location
            .landmarks
            .iter()
            .map(|landmark| {
                let landmark = landmark.clone();
                view! { <div class="card landmark">"📍 " {landmark}</div> }
            })
            .collect_view();
        view! {
            <section class="section alt">
                <h2>{heading}</h2>
                <div class="grid">{items}</div>
            </section>
        }
    });

    let facts = location_facts(location.population.as_deref(), &location.pincodes);

    let benefits = BENEFITS
        .iter()
        .map(|&(icon, title, text)| {
            view! {
                <div class="benefit">
                    <div class="card-icon">{icon}</div>
                    <h3>{title}</h3>
                    <p>{text}</p>
                </div>
            }
        })
        .collect_view();

    let related = page
        .related
        .iter()
        .map(|other| {
            let href = format!("/location/{}", other.slug);
            let name = other.name.clone();
            view! {
                <a class="card related" href=href>
                    <h3>{name}</h3>
                    <p>"JCB Services Available"</p>
                </a>
            }
        })
        .collect_view();

    let heading = format!("JCB Rental Services in {}", place);
    let description = location.description.clone();
    let services_heading = format!("Our JCB Services in {}", place);
    let links_heading = format!("Book a Service in {}", location.name);
    let why_heading = format!("Why Choose Our JCB Services in {}?", place);

    let body = view! {
        <section class="hero">
            <h1>{heading}</h1>
            <p class="lead">{description}</p>
            {facts}
            {contact_buttons(&page.contact)}
        </section>
        <section class="section">
            <h2>{services_heading}</h2>
            <div class="grid">{cards}</div>
        </section>
        <section class="section">
            <h2>{links_heading}</h2>
            <div class="chips">{service_links}</div>
        </section>
        {landmarks}
        <section class="section">
            <h2>{why_heading}</h2>
            <div class="grid">{benefits}</div>
        </section>
        {contact_section(
            format!("Ready to Book JCB Services in {}?", place),
            "Contact us now for immediate JCB rental and construction equipment services".to_string(),
            &page.contact,
        )}
        <section class="section alt">
            <h2>"Other Areas We Serve"</h2>
            <div class="grid">{related}</div>
        </section>
    };

    let schema = PageSchema {
        kind: page.schema_type(),
        input: page.schema.clone(),
    };
    document(site, &page.meta, Some(schema), opts, body)
}

fn location_facts(population: Option<&str>, pincodes: &[String]) -> impl IntoView + use<> {
    let population = population.map(|p| {
        let text = format!("Population: {}", p);
        view! { <p class="fact">{text}</p> }
    });
    let pincodes = (!pincodes.is_empty()).then(|| {
        let text = format!("PIN: {}", pincodes.join(", "));
        view! { <p class="fact">{text}</p> }
    });

    view! { <div class="facts">{population}{pincodes}</div> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn render(slug: &str) -> String {
        let site = Site::builtin();
        let page = LocationPage::resolve(&site, slug).unwrap();
        render_location(&site, &page, &RenderOptions::build(Utc::now()))
    }

    #[test]
    fn test_card_text() {
        assert_eq!(
            card_text(&CARDS[3], "Agra"),
            "Comprehensive earthmoving and land preparation services in Agra."
        );
        assert_eq!(
            card_text(&CARDS[0], "Agra"),
            "Professional excavation and digging services in Agra for foundations, basements, and site preparation."
        );
    }

    #[test]
    fn test_location_page_html() {
        let html = render("civil-lines");

        assert!(html.contains("JCB Rental Services in Civil Lines, Prayagraj"));
        assert!(html.contains(r#""addressLocality":"Civil Lines, Prayagraj""#));
        assert!(html.contains("https://jcbbooking.com/location/civil-lines"));
        assert!(html.contains("High Court"));
        assert!(html.contains("href=\"/services/demolition/civil-lines\""));
        assert!(html.contains("PIN: 211001"));
        assert!(html.contains("tel:9559394527"));
    }

    #[test]
    fn test_district_page_shows_population() {
        let html = render("kanpur");
        assert!(html.contains(r#"<p class="fact">Population: 27 lakh</p>"#));
        assert!(html.contains(r#"<p class="fact">PIN: 208001, 208002, 208003</p>"#));
        assert!(!html.contains("lakhPIN"));
        assert!(html.contains("JCB Rental Services in Kanpur"));
        assert!(!html.contains("Kanpur, Prayagraj"));
    }
}
