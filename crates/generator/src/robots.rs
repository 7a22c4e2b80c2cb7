use jcb_site_core::SiteConfig;

/// One `User-agent` group
#[derive(Debug, Clone)]
pub struct RobotsRule {
    pub user_agent: &'static str,
    pub allow: &'static [&'static str],
    pub disallow: &'static [&'static str],
}

/// Crawler policy served at `/robots.txt`
#[derive(Debug, Clone)]
pub struct RobotsPolicy {
    pub rules: Vec<RobotsRule>,
    pub sitemap: String,
    pub host: String,
}

impl RobotsPolicy {
    /// Allow everything except private paths; Googlebot gets a shorter list
    pub fn for_site(config: &SiteConfig) -> Self {
        Self {
            rules: vec![
                RobotsRule {
                    user_agent: "*",
                    allow: &["/"],
                    disallow: &[
                        "/api/",
                        "/admin/",
                        "/_next/",
                        "/private/",
                        "/*.json$",
                        "/temp/",
                    ],
                },
                RobotsRule {
                    user_agent: "Googlebot",
                    allow: &["/"],
                    disallow: &["/api/", "/admin/", "/private/"],
                },
            ],
            sitemap: config.absolute("/sitemap.xml"),
            host: config.url.trim_end_matches('/').to_string(),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for rule in &self.rules {
            out.push_str(&format!("User-Agent: {}\n", rule.user_agent));
            for path in rule.allow {
                out.push_str(&format!("Allow: {}\n", path));
            }
            for path in rule.disallow {
                out.push_str(&format!("Disallow: {}\n", path));
            }
            out.push('\n');
        }
        out.push_str(&format!("Host: {}\n", self.host));
        out.push_str(&format!("Sitemap: {}\n", self.sitemap));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_robots() {
        let config = SiteConfig {
            url: "https://jcbbooking.com".to_string(),
            ..SiteConfig::default()
        };
        let text = RobotsPolicy::for_site(&config).render();

        assert!(text.starts_with("User-Agent: *\nAllow: /\nDisallow: /api/\n"));
        assert!(text.contains("Disallow: /*.json$\n"));
        assert!(text.contains("User-Agent: Googlebot\nAllow: /\nDisallow: /api/\nDisallow: /admin/\nDisallow: /private/\n\n"));
        assert!(text.contains("Sitemap: https://jcbbooking.com/sitemap.xml\n"));
        assert!(text.contains("Host: https://jcbbooking.com\n"));
    }

    #[test]
    fn test_googlebot_does_not_block_next_assets() {
        let policy = RobotsPolicy::for_site(&SiteConfig::default());
        let googlebot = policy.rules.iter().find(|r| r.user_agent == "Googlebot").unwrap();
        assert!(!googlebot.disallow.contains(&"/_next/"));
        assert_eq!(policy.rules[0].disallow.len(), 6);
    }
}
