use jcb_site_core::Site;
use leptos::prelude::*;

use super::{RenderOptions, contact_buttons, contact_section, document};
use crate::assets::GALLERY;
use crate::contact::ContactLinks;
use crate::detail::ServiceKind;
use crate::page::PageMeta;

pub fn render_home(site: &Site, opts: &RenderOptions) -> String {
    let business = &site.business;
    let city = business.locality.clone();
    let meta = PageMeta {
        title: format!("JCB Hire, Excavator Rental & Earthmoving in {}", city),
        description: format!(
            "Book JCB and excavator services in {} for earthmoving, demolition, road construction, and land levelling. Fast response and reliable service.",
            city
        ),
        keywords: vec![
            format!("JCB Booking {}", city),
            "JCB Hire Allahabad".to_string(),
            format!("Excavator rental {}", city),
            "Earthmoving services".to_string(),
            "Poclain on rent".to_string(),
            "Road construction".to_string(),
            "Demolition services".to_string(),
        ],
        canonical: format!("{}/", business.url),
    };
    let contact = ContactLinks::general(business);

    let services = site
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
                </a>
            }
        })
        .collect_view();

    let slides = GALLERY
        .iter()
        .enumerate()
        .map(|(i, slide)| {
            let class = if i == 0 { "slide active" } else { "slide" };
            let index = i.to_string();
            let src = slide.src;
            let alt = slide.alt;
            view! {
                <figure class=class data-index=index>
                    <img src=src alt=alt loading="lazy"/>
                    <figcaption>
                        <h3>{slide.title}</h3>
                        <p>{slide.description}</p>
                    </figcaption>
                </figure>
            }
        })
        .collect_view();

    let areas = site
        .catalog
        .locations()
        .iter()
        .map(|location| {
            let href = format!("/location/{}", location.slug);
            let name = location.name.clone();
            view! { <a class="chip" href=href>{name}</a> }
        })
        .collect_view();

    let heading = format!("JCB Booking in {}", city);
    let areas_heading = format!("Serving {} and Uttar Pradesh", city);
    let contact_heading = format!("Book a JCB in {} Today", city);

    let body = view! {
        <section class="hero">
            <h1>{heading}</h1>
            <p class="lead">"Professional Excavator & Earthmoving Services"</p>
            <p>
                "Fast and reliable JCB hire for construction, demolition, road work, and land levelling. "
                "Available 24/7 with experienced operators."
            </p>
            {contact_buttons(&contact)}
        </section>
        <section class="section">
            <h2>"Our Services"</h2>
            <div class="grid">{services}</div>
        </section>
        <section class="section gallery" data-gallery="">
            <h2>"Our Equipment at Work"</h2>
            <div class="slides">{slides}</div>
            <button class="gallery-prev" type="button" aria-label="Previous slide">"‹"</button>
            <button class="gallery-next" type="button" aria-label="Next slide">"›"</button>
        </section>
        <section class="section">
            <h2>{areas_heading}</h2>
            <div class="chips">{areas}</div>
        </section>
        {contact_section(
            contact_heading,
            "Call or WhatsApp for immediate booking.".to_string(),
            &contact,
        )}
        <script src="/gallery.js"></script>
    };

    document(site, &meta, None, opts, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_home_links_services_and_locations() {
        let site = Site::builtin();
        let html = render_home(&site, &RenderOptions::build(Utc::now()));

        assert!(html.contains("JCB Booking in Prayagraj"));
        for service in site.catalog.services() {
            assert!(html.contains(&format!("href=\"/services/{}\"", service.slug)));
        }
        assert!(html.contains("href=\"/location/moradabad\""));
        assert!(html.contains("/gallery.js"));
        assert_eq!(html.matches("<figure").count(), GALLERY.len());
    }
}
