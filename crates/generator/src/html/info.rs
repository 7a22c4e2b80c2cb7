use jcb_site_core::Site;
use leptos::prelude::*;

use super::{RenderOptions, contact_buttons, contact_section, document};
use crate::contact::ContactLinks;
use crate::page::PageMeta;

pub fn render_about(site: &Site, opts: &RenderOptions) -> String {
    let business = &site.business;
    let meta = PageMeta {
        title: format!("About {}", business.name),
        description: format!(
            "{} provides JCB and excavator hire with experienced operators across {} and {}.",
            business.name, business.locality, business.region
        ),
        keywords: vec![
            format!("about {}", business.name.to_lowercase()),
            format!("jcb contractor {}", business.locality.to_lowercase()),
            "earthmoving company".to_string(),
        ],
        canonical: format!("{}/about", business.url),
    };
    let contact = ContactLinks::general(business);

    let heading = format!("About {}", business.name);
    let intro = format!(
        "We are a {}-based equipment hire business serving {} areas of the city and {} districts of {}.",
        business.locality,
        site.catalog.areas().len(),
        site.catalog.districts().len(),
        business.region
    );
    let hours = format!(
        "Our team is available every day from {} to {}, with emergency call-outs around the clock.",
        business.opens, business.closes
    );
    let fleet = site
        .catalog
        .services()
        .iter()
        .map(|service| {
            let name = service.name.clone();
            view! { <li>{name}</li> }
        })
        .collect_view();

    let body = view! {
        <section class="hero">
            <h1>{heading}</h1>
            <p class="lead">{intro}</p>
        </section>
        <section class="section">
            <h2>"What We Do"</h2>
            <ul class="checks">{fleet}</ul>
            <p>{hours}</p>
        </section>
        {contact_section(
            "Work With Us".to_string(),
            "Tell us about your site and we will recommend the right machine.".to_string(),
            &contact,
        )}
    };

    document(site, &meta, None, opts, body)
}

pub fn render_contact(site: &Site, opts: &RenderOptions) -> String {
    let business = &site.business;
    let meta = PageMeta {
        title: format!("Contact {} | Call {}", business.name, business.phone_display),
        description: format!(
            "Call or WhatsApp {} on {} to book JCB services in {}.",
            business.name, business.phone_display, business.locality
        ),
        keywords: vec![
            format!("jcb booking number {}", business.locality.to_lowercase()),
            "jcb contact".to_string(),
            "jcb on rent phone number".to_string(),
        ],
        canonical: format!("{}/contact", business.url),
    };
    let contact = ContactLinks::general(business);

    let address = format!(
        "{}, {}, {} {}",
        business.street_address, business.locality, business.region, business.postal_code
    );
    let hours = format!("Every day, {} - {}", business.opens, business.closes);
    let phone = business.telephone.clone();
    let tel = contact.tel.clone();

    let body = view! {
        <section class="hero">
            <h1>"Contact Us"</h1>
            <p class="lead">"Call or WhatsApp for immediate booking and free site assessment"</p>
            {contact_buttons(&contact)}
        </section>
        <section class="section grid">
            <div class="card">
                <h3>"📞 Phone"</h3>
                <p><a href=tel>{phone}</a></p>
            </div>
            <div class="card">
                <h3>"📍 Address"</h3>
                <p>{address}</p>
            </div>
            <div class="card">
                <h3>"🕒 Hours"</h3>
                <p>{hours}</p>
            </div>
        </section>
    };

    document(site, &meta, None, opts, body)
}

/// Page served for any path that does not resolve
pub fn render_not_found(site: &Site, path: &str, opts: &RenderOptions) -> String {
    let meta = PageMeta {
        title: "Page Not Found".to_string(),
        description: "The page you are looking for does not exist.".to_string(),
        keywords: Vec::new(),
        canonical: format!("{}{}", site.business.url, path),
    };
    let message = format!("Nothing lives at {}.", path);

    let body = view! {
        <section class="hero">
            <h1>"Page Not Found"</h1>
            <p class="lead">{message}</p>
            <p>
                <a class="chip" href="/">"Home"</a>
                " "
                <a class="chip" href="/services">"Services"</a>
            </p>
        </section>
    };

    document(site, &meta, None, opts, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_about_counts_catalog() {
        let site = Site::builtin();
        let html = render_about(&site, &RenderOptions::build(Utc::now()));
        assert!(html.contains("serving 12 areas of the city and 8 districts of Uttar Pradesh"));
        assert!(html.contains("https://jcbbooking.com/about"));
    }

    #[test]
    fn test_contact_page() {
        let site = Site::builtin();
        let html = render_contact(&site, &RenderOptions::build(Utc::now()));
        assert!(html.contains("+91-95593-94527"));
        assert!(html.contains("Civil Lines, Prayagraj, Uttar Pradesh 211001"));
        assert!(html.contains("https://wa.me/919559394527"));
    }

    #[test]
    fn test_not_found_mentions_path() {
        let site = Site::builtin();
        let html = render_not_found(&site, "/nowhere", &RenderOptions::build(Utc::now()));
        assert!(html.contains("Nothing lives at /nowhere."));
    }
}
