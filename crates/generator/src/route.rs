use std::fmt;

/// Addressable page of the site
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Contact,
    Services,
    Service(String),
    Location(String),
    ServiceLocation { service: String, location: String },
    Blog,
    BlogPost(String),
}

impl Route {
    /// URL path, always starting with `/`
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::Services => "/services".to_string(),
            Route::Service(slug) => format!("/services/{}", slug),
            Route::Location(slug) => format!("/location/{}", slug),
            Route::ServiceLocation { service, location } => {
                format!("/services/{}/{}", service, location)
            }
            Route::Blog => "/blog".to_string(),
            Route::BlogPost(slug) => format!("/blog/{}", slug),
        }
    }

    /// File the route is written to in a static build
    pub fn output_file(&self) -> String {
        match self {
            Route::Home => "index.html".to_string(),
            other => format!("{}/index.html", other.path().trim_start_matches('/')),
        }
    }

    /// Parse a URL path back into a route.
    ///
    /// Slugs are not checked against the catalog here.
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim_matches('/');
        let segments: Vec<&str> = if trimmed.is_empty() {
            vec![]
        } else {
            trimmed.split('/').collect()
        };

        if segments.iter().any(|s| s.is_empty()) {
            return None;
        }

        let route = match segments.as_slice() {
            [] => Route::Home,
            ["about"] => Route::About,
            ["contact"] => Route::Contact,
            ["services"] => Route::Services,
            ["services", service] => Route::Service(service.to_string()),
            ["services", service, location] => Route::ServiceLocation {
                service: service.to_string(),
                location: location.to_string(),
            },
            ["location", slug] => Route::Location(slug.to_string()),
            ["blog"] => Route::Blog,
            ["blog", slug] => Route::BlogPost(slug.to_string()),
            _ => return None,
        };

        Some(route)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::Location("naini".into()).path(), "/location/naini");
        assert_eq!(
            Route::ServiceLocation {
                service: "excavation".into(),
                location: "naini".into()
            }
            .path(),
            "/services/excavation/naini"
        );
    }

    #[test]
    fn test_output_files() {
        assert_eq!(Route::Home.output_file(), "index.html");
        assert_eq!(Route::Blog.output_file(), "blog/index.html");
        assert_eq!(
            Route::Service("demolition".into()).output_file(),
            "services/demolition/index.html"
        );
    }

    #[test]
    fn test_parse_known_shapes() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse(""), Some(Route::Home));
        assert_eq!(Route::parse("/about/"), Some(Route::About));
        assert_eq!(
            Route::parse("/location/civil-lines"),
            Some(Route::Location("civil-lines".into()))
        );
        assert_eq!(
            Route::parse("/services/road-construction/lucknow"),
            Some(Route::ServiceLocation {
                service: "road-construction".into(),
                location: "lucknow".into()
            })
        );
    }

    #[test]
    fn test_parse_rejects_unknown_shapes() {
        assert_eq!(Route::parse("/location"), None);
        assert_eq!(Route::parse("/location/a/b"), None);
        assert_eq!(Route::parse("/services//naini"), None);
        assert_eq!(Route::parse("/admin"), None);
    }
}
