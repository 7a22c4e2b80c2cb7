use jcb_site_core::BusinessProfile;
use url::Url;

/// Call and chat links for one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLinks {
    pub tel: String,
    pub whatsapp: String,
    pub phone_display: String,
}

impl ContactLinks {
    pub fn new(business: &BusinessProfile, message: &str) -> Self {
        Self {
            tel: format!("tel:{}", business.phone_dial),
            whatsapp: whatsapp_link(&business.whatsapp, message),
            phone_display: business.phone_display.clone(),
        }
    }

    pub fn for_location(business: &BusinessProfile, display_name: &str) -> Self {
        Self::new(
            business,
            &format!("Hi, I need JCB rental services in {}", display_name),
        )
    }

    pub fn for_service(business: &BusinessProfile, service_name: &str, display_name: &str) -> Self {
        Self::new(
            business,
            &format!(
                "Hi, I need {} services in {}",
                service_name.to_lowercase(),
                display_name
            ),
        )
    }

    pub fn general(business: &BusinessProfile) -> Self {
        Self::new(
            business,
            &format!("Hi, I need JCB service in {}", business.locality),
        )
    }
}

/// wa.me deep link with a pre-filled, URL-encoded message
pub fn whatsapp_link(number: &str, message: &str) -> String {
    let base = format!("https://wa.me/{}", number);
    match Url::parse_with_params(&base, &[("text", message)]) {
        Ok(url) => url.to_string(),
        Err(_) => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tel_link_uses_dial_digits() {
        let links = ContactLinks::general(&BusinessProfile::default());
        assert_eq!(links.tel, "tel:9559394527");
        assert_eq!(links.phone_display, "95593 94527");
    }

    #[test]
    fn test_whatsapp_message_is_encoded() {
        let links = ContactLinks::for_location(&BusinessProfile::default(), "Civil Lines, Prayagraj");
        assert!(links.whatsapp.starts_with("https://wa.me/919559394527?text="));
        assert!(!links.whatsapp.contains(' '));
        assert!(links.whatsapp.contains("Civil+Lines%2C+Prayagraj"));
    }

    #[test]
    fn test_service_message_lowercases_service() {
        let links = ContactLinks::for_service(&BusinessProfile::default(), "Demolition Services", "Agra");
        assert!(links.whatsapp.contains("demolition+services+services+in+Agra"));
    }
}
