use jcb_site_core::Site;
use leptos::prelude::*;

use super::{PageSchema, RenderOptions, contact_buttons, contact_section, document, text_list};
use crate::contact::ContactLinks;
use crate::detail::{PriceTier, ServiceKind};
use crate::page::{PageMeta, ServiceLocationPage, ServicePage};
use crate::schema::{SchemaInput, SchemaType};

const PROCESS: [(&str, &str); 4] = [
    ("Contact Us", "Call or WhatsApp for immediate response"),
    ("Site Assessment", "Free site visit and requirement analysis"),
    ("Equipment Deployment", "Quick deployment of appropriate JCB equipment"),
    ("Professional Execution", "Expert completion with quality assurance"),
];

pub fn render_service_location(
    site: &Site,
    page: &ServiceLocationPage<'_>,
    opts: &RenderOptions,
) -> String {
    let service = page.service;
    let detail = page.detail;
    let place = page.display_name.clone();
    let name = service.name.clone();

    let features = detail
        .features
        .iter()
        .map(|feature| {
            let text = format!(
                "Professional {} services in {} with modern JCB equipment and expert operators.",
                feature.to_lowercase(),
                place
            );
            view! {
                <div class="card">
                    <h3>"✓ " {*feature}</h3>
                    <p>{text}</p>
                </div>
            }
        })
        .collect_view();

    let equipment = detail
        .equipment
        .iter()
        .map(|item| view! { <div class="card">"🚜 " {*item}</div> })
        .collect_view();
    let applications = detail
        .applications
        .iter()
        .map(|item| view! { <div class="card">"🏗️ " {*item}</div> })
        .collect_view();

    let steps = PROCESS
        .iter()
        .enumerate()
        .map(|(i, &(title, text))| {
            let number = (i + 1).to_string();
            view! {
                <li class="step">
                    <span class="step-number">{number}</span>
                    <h3>{title}</h3>
                    <p>{text}</p>
                </li>
            }
        })
        .collect_view();

    let related = page
        .related
        .iter()
        .map(|other| {
            let href = format!("/services/{}/{}", other.slug, page.location.slug);
            let other_name = other.name.clone();
            let available = format!("Available in {}", place);
            view! {
                <a class="card related" href=href>
                    <h3>{other_name}</h3>
                    <p>{available}</p>
                </a>
            }
        })
        .collect_view();

    let heading = format!("{} in {}", name, place);
    let features_heading = format!("Our {} Features in {}", name, place);
    let equipment_heading = format!("Equipment We Use for {} in {}", name, place);
    let applications_heading = format!("Applications of {} in {}", name, place);
    let process_heading = format!("Our {} Process in {}", name, place);
    let pricing_heading = format!("Competitive Pricing for {} in {}", name, place);
    let related_heading = format!("Other Services in {}", place);

    let body = view! {
        <section class="hero">
            <div class="card-icon">{detail.icon}</div>
            <h1>{heading}</h1>
            <p class="lead">{detail.full_description}</p>
            {contact_buttons(&page.contact)}
        </section>
        <section class="section">
            <h2>{features_heading}</h2>
            <div class="grid">{features}</div>
        </section>
        <section class="section alt">
            <h2>{equipment_heading}</h2>
            <div class="grid">{equipment}</div>
        </section>
        <section class="section">
            <h2>{applications_heading}</h2>
            <div class="grid">{applications}</div>
        </section>
        <section class="section alt">
            <h2>{process_heading}</h2>
            <ol class="steps grid">{steps}</ol>
        </section>
        <section class="section">
            <h2>{pricing_heading}</h2>
            {pricing_table(page.pricing)}
            <p class="post-meta">"*Prices may vary based on project requirements and equipment type"</p>
        </section>
        {contact_section(
            format!("Ready for {} in {}?", name, place),
            format!("Contact us now for professional {} services", name.to_lowercase()),
            &page.contact,
        )}
        <section class="section alt">
            <h2>{related_heading}</h2>
            <div class="grid">{related}</div>
        </section>
    };

    let schema = PageSchema {
        kind: page.schema_type(),
        input: page.schema.clone(),
    };
    document(site, &page.meta, Some(schema), opts, body)
}

fn pricing_table(tiers: &[PriceTier]) -> impl IntoView + use<> {
    let rows = tiers
        .iter()
        .map(|tier| {
            let range = tier.range();
            view! {
                <tr>
                    <th>{tier.label}</th>
                    <td class="price">{range}</td>
                    <td>{tier.note}</td>
                </tr>
            }
        })
        .collect_view();

    view! { <table class="pricing"><tbody>{rows}</tbody></table> }
}

/// `/services/{service}`: one service across every location
pub fn render_service(site: &Site, page: &ServicePage<'_>, opts: &RenderOptions) -> String {
    let service = page.service;
    let detail = page.detail;

    let links = page
        .locations
        .iter()
        .map(|location| {
            let href = format!("/services/{}/{}", service.slug, location.slug);
            let label = location.display_name();
            view! { <a class="chip" href=href>{label}</a> }
        })
        .collect_view();

    let heading = service.name.clone();
    let locations_heading = format!("{} Across Our Service Area", service.name);

    let body = view! {
        <section class="hero">
            <div class="card-icon">{detail.icon}</div>
            <h1>{heading}</h1>
            <p class="lead">{detail.full_description}</p>
            {contact_buttons(&page.contact)}
        </section>
        <section class="section">
            <h2>"What We Offer"</h2>
            {text_list("checks", detail.features)}
        </section>
        <section class="section alt">
            <h2>"Equipment"</h2>
            {text_list("checks", detail.equipment)}
        </section>
        <section class="section">
            <h2>{locations_heading}</h2>
            <div class="chips">{links}</div>
        </section>
        <section class="section alt">
            <h2>"Rates"</h2>
            {pricing_table(&crate::detail::PRICING)}
        </section>
    };

    let schema = PageSchema {
        kind: SchemaType::Service,
        input: page.schema.clone(),
    };
    document(site, &page.meta, Some(schema), opts, body)
}

/// `/services`: every catalog service
pub fn render_services_index(site: &Site, opts: &RenderOptions) -> String {
    let business = &site.business;
    let meta = PageMeta {
        title: format!("JCB Services in {}", business.locality),
        description: format!(
            "Excavation, road construction, demolition, earthmoving and equipment rental across {} and {}. Call {} for immediate booking.",
            business.locality, business.region, business.phone_display
        ),
        keywords: site
            .catalog
            .services()
            .iter()
            .flat_map(|s| s.keywords.iter().cloned())
            .collect(),
        canonical: format!("{}/services", business.url),
    };
    let contact = ContactLinks::general(business);

    let cards = site
        .catalog
        .services()
        .iter()
        .map(|service| {
            let detail = ServiceKind::from_slug(&service.slug).detail();
            let href = format!("/services/{}", service.slug);
            let name = service.name.clone();
            view! {
                <a class="card service-card" href=href>
                    <div class="card-icon">{detail.icon}</div>
                    <h3>{name}</h3>
                    <p>{detail.full_description}</p>
                    {text_list("checks", &detail.features[..3])}
                </a>
            }
        })
        .collect_view();

    let heading = format!("Our JCB Services in {}", business.locality);

    let body = view! {
        <section class="hero">
            <h1>{heading}</h1>
            <p class="lead">"Modern equipment and experienced operators for every kind of site work"</p>
            {contact_buttons(&contact)}
        </section>
        <section class="section">
            <div class="grid">{cards}</div>
        </section>
    };

    let schema = PageSchema {
        kind: SchemaType::Service,
        input: SchemaInput::default(),
    };
    document(site, &meta, Some(schema), opts, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn opts() -> RenderOptions {
        RenderOptions::build(Utc::now())
    }

    #[test]
    fn test_service_location_page_html() {
        let site = Site::builtin();
        let page = ServiceLocationPage::resolve(&site, "excavation", "naini").unwrap();
        let html = render_service_location(&site, &page, &opts());

        assert!(html.contains("Excavation Services in Naini, Prayagraj"));
        assert!(html.contains("Foundation Excavation"));
        assert!(html.contains("JCB 3DX"));
        assert!(html.contains("₹800-1200"));
        assert!(html.contains("₹1.5L-2L"));
        assert!(html.contains(r#""@type":"Service""#));
        assert!(html.contains(r#""price":"800-1200""#));
        assert!(html.contains("href=\"/services/demolition/naini\""));
        assert!(!html.contains("href=\"/services/excavation/naini\""));
        assert_eq!(html.matches("class=\"step\"").count(), 4);
    }

    #[test]
    fn test_service_page_links_every_location() {
        let site = Site::builtin();
        let page = ServicePage::resolve(&site, "demolition").unwrap();
        let html = render_service(&site, &page, &opts());

        for location in site.catalog.locations() {
            assert!(html.contains(&format!("/services/demolition/{}", location.slug)));
        }
        assert!(html.contains("Hydraulic Breaker"));
    }

    #[test]
    fn test_services_index_lists_every_service() {
        let site = Site::builtin();
        let html = render_services_index(&site, &opts());

        for service in site.catalog.services() {
            assert!(html.contains(&format!("href=\"/services/{}\"", service.slug)));
        }
        assert!(html.contains("https://jcbbooking.com/services"));
    }
}
