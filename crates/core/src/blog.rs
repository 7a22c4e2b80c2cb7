use chrono::NaiveDate;

/// A blog article listed on `/blog`
#[derive(Debug, Clone, Copy)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub image: &'static str,
    /// ISO date, `YYYY-MM-DD`
    pub date: &'static str,
    pub category: &'static str,
    pub read_minutes: u32,
    pub keywords: &'static [&'static str],
    /// Markdown body of the article page
    pub body: &'static str,
    /// Unpublished posts are listed on the index without an article page
    pub published: bool,
}

impl BlogPost {
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d").ok()
    }

    pub fn path(&self) -> String {
        format!("/blog/{}", self.slug)
    }
}

pub const BLOG_CATEGORIES: &[&str] = &[
    "Excavation",
    "Road Construction",
    "Demolition",
    "Equipment Rental",
    "Maintenance",
    "Equipment Selection",
];

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "jcb-excavation-guide-prayagraj",
        title: "Complete Guide to JCB Excavation Services in Prayagraj",
        excerpt: "Everything you need to know about professional excavation services, equipment types, and choosing the right JCB for your project in Prayagraj.",
        image: "/jcb-real-1.jpg",
        date: "2024-01-15",
        category: "Excavation",
        read_minutes: 8,
        keywords: &[
            "JCB excavation Prayagraj",
            "excavation services",
            "foundation digging",
            "site preparation",
        ],
        body: "## Planning the dig\n\nMark utilities, check soil type and agree on depth before the machine arrives.\n\n## Choosing the machine\n\n- **JCB 3DX** for residential foundations\n- **JCB 4DX** for deeper trenches and heavier loads\n- **Mini excavators** for tight plots in old city lanes\n",
        published: true,
    },
    BlogPost {
        slug: "road-construction-uttar-pradesh",
        title: "Road Construction Best Practices in Uttar Pradesh",
        excerpt: "Learn about modern road construction techniques, equipment requirements, and quality standards for building durable roads in UP.",
        image: "/jcb-real-2.jpg",
        date: "2024-01-12",
        category: "Road Construction",
        read_minutes: 10,
        keywords: &[
            "road construction UP",
            "highway construction",
            "road building techniques",
            "infrastructure development",
        ],
        body: "## Sub-base first\n\nMost road failures start below the surface. Grade, compact and drain the sub-base before any asphalt or concrete work.\n\n## Equipment\n\nA grader, a loader and a roller cover most village and city road jobs.\n",
        published: true,
    },
    BlogPost {
        slug: "demolition-services-safety-guide",
        title: "Safe Demolition Practices: A Comprehensive Safety Guide",
        excerpt: "Essential safety protocols, equipment requirements, and best practices for safe and efficient demolition projects.",
        image: "/jcb-real-3.jpg",
        date: "2024-01-10",
        category: "Demolition",
        read_minutes: 6,
        keywords: &[
            "demolition safety",
            "building demolition",
            "safe demolition practices",
            "demolition equipment",
        ],
        body: "## Before demolition\n\nDisconnect utilities, fence the site and survey neighbouring structures.\n\n## During demolition\n\nWork top-down, keep an exclusion zone around the breaker and clear debris continuously.\n",
        published: true,
    },
    BlogPost {
        slug: "earthmoving-equipment-rental-tips",
        title: "Earthmoving Equipment Rental: Tips for Success",
        excerpt: "How to choose the right earthmoving equipment for your project, rental considerations, and cost optimization strategies.",
        image: "/jcb-real-4.jpg",
        date: "2024-01-08",
        category: "Equipment Rental",
        read_minutes: 7,
        keywords: &[
            "earthmoving equipment rental",
            "JCB rental tips",
            "equipment selection",
            "cost optimization",
        ],
        body: "## Hourly or daily?\n\nJobs under six hours are usually cheaper on the hourly rate. Multi-day grading work should be booked daily or monthly.\n\n## Ask what is included\n\nConfirm operator, fuel and transport charges up front.\n",
        published: true,
    },
    BlogPost {
        slug: "construction-equipment-maintenance",
        title: "Construction Equipment Maintenance: Maximizing Efficiency",
        excerpt: "Essential maintenance practices for construction equipment to ensure optimal performance, longevity, and cost-effectiveness.",
        image: "/jcb-real-5.jpg",
        date: "2024-01-05",
        category: "Maintenance",
        read_minutes: 9,
        keywords: &[
            "equipment maintenance",
            "JCB maintenance",
            "construction equipment care",
            "preventive maintenance",
        ],
        body: "## Daily checks\n\n1. Engine oil and coolant\n2. Hydraulic hoses for leaks\n3. Bucket teeth and pins\n\n## Monsoon care\n\nGrease pivot points more often and keep electrical connectors dry.\n",
        published: true,
    },
    BlogPost {
        slug: "choosing-right-jcb-project",
        title: "How to Choose the Right JCB for Your Construction Project",
        excerpt: "Comprehensive guide to selecting the appropriate JCB model based on project requirements, site conditions, and budget considerations.",
        image: "/jcb-real-6.jpg",
        date: "2024-01-03",
        category: "Equipment Selection",
        read_minutes: 8,
        keywords: &[
            "JCB selection guide",
            "construction equipment choice",
            "project planning",
            "equipment specifications",
        ],
        body: "",
        published: false,
    },
];

pub fn published_posts() -> impl Iterator<Item = &'static BlogPost> {
    BLOG_POSTS.iter().filter(|p| p.published)
}

pub fn find_published(slug: &str) -> Option<&'static BlogPost> {
    published_posts().find(|p| p.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_post_dates_parse() {
        for post in BLOG_POSTS {
            assert!(post.published_on().is_some(), "bad date on {}", post.slug);
        }
    }

    #[test]
    fn test_five_published_posts() {
        assert_eq!(BLOG_POSTS.len(), 6);
        assert_eq!(published_posts().count(), 5);
    }

    #[test]
    fn test_find_published_skips_drafts() {
        assert!(find_published("jcb-excavation-guide-prayagraj").is_some());
        assert!(find_published("choosing-right-jcb-project").is_none());
        assert!(find_published("missing").is_none());
    }

    #[test]
    fn test_every_post_category_is_listed() {
        for post in BLOG_POSTS {
            assert!(BLOG_CATEGORIES.contains(&post.category));
        }
    }
}
