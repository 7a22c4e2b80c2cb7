use chrono::{DateTime, NaiveDate, Utc};
use jcb_site_core::Site;
use jcb_site_core::blog::{BLOG_CATEGORIES, BLOG_POSTS, BlogPost};
use leptos::prelude::*;
use pulldown_cmark::{Options, Parser, html};

use super::{PageSchema, RenderOptions, contact_buttons, contact_section, document};
use crate::contact::ContactLinks;
use crate::page::{BlogPostPage, PageMeta};
use crate::schema::{ArticleInput, SchemaInput, SchemaType};

fn midnight(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0).map(|d| d.and_utc())
}

/// Render an article body from markdown
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

fn post_meta_line(post: &BlogPost) -> String {
    format!("{} · {} · {} min read", post.category, post.date, post.read_minutes)
}

/// Card for the listing grid. Drafts are shown without a link.
fn post_card(post: &BlogPost) -> AnyView {
    let title = post.title;
    let excerpt = post.excerpt;
    let image = post.image;
    let meta = post_meta_line(post);

    if post.published {
        let href = post.path();
        view! {
            <a class="card post-card" href=href>
                <img src=image alt=title loading="lazy"/>
                <p class="post-meta">{meta}</p>
                <h3>{title}</h3>
                <p>{excerpt}</p>
                <span class="read-more">"Read More →"</span>
            </a>
        }
        .into_any()
    } else {
        view! {
            <div class="card post-card draft">
                <img src=image alt=title loading="lazy"/>
                <p class="post-meta">{meta}</p>
                <h3>{title}</h3>
                <p>{excerpt}</p>
                <span class="read-more">"Coming Soon"</span>
            </div>
        }
        .into_any()
    }
}

pub fn render_blog_index(site: &Site, opts: &RenderOptions) -> String {
    let business = &site.business;
    let meta = PageMeta {
        title: "JCB Services Blog | Construction Equipment Tips & Guides".to_string(),
        description: format!(
            "Expert insights on JCB services, construction equipment, excavation tips, and industry best practices in {} and {}.",
            business.locality, business.region
        ),
        keywords: [
            "JCB services blog",
            "construction equipment tips",
            "excavation guide",
            "road construction tips",
            "demolition safety",
            "earthmoving techniques",
            "JCB maintenance",
            "equipment rental guide",
            "construction best practices",
        ]
        .iter()
        .map(|k| k.to_string())
        .chain([format!("construction industry {}", business.locality)])
        .collect(),
        canonical: format!("{}/blog", business.url),
    };

    let (featured, rest) = match BLOG_POSTS.split_first() {
        Some((first, rest)) => (Some(post_card(first)), rest),
        None => (None, BLOG_POSTS),
    };
    let grid = rest.iter().map(post_card).collect_view();

    let categories = BLOG_CATEGORIES
        .iter()
        .map(|category| {
            let count = BLOG_POSTS.iter().filter(|p| p.category == *category).count();
            let label = format!("{} articles", count);
            view! {
                <div class="card category">
                    <h3>{*category}</h3>
                    <p>{label}</p>
                </div>
            }
        })
        .collect_view();

    let contact = ContactLinks::new(business, "Hi, I need JCB services information");

    let body = view! {
        <section class="hero">
            <h1>"JCB Services Blog"</h1>
            <p class="lead">"Expert insights, tips, and guides for construction equipment and JCB services"</p>
        </section>
        <section class="section">
            <h2>"Featured Article"</h2>
            {featured}
        </section>
        <section class="section alt">
            <h2>"Latest Articles"</h2>
            <div class="grid">{grid}</div>
        </section>
        <section class="section">
            <h2>"Browse by Category"</h2>
            <div class="grid">{categories}</div>
        </section>
        {contact_section(
            "Need JCB Services?".to_string(),
            "Talk to our team about equipment for your project".to_string(),
            &contact,
        )}
    };

    let schema = PageSchema {
        kind: SchemaType::Article,
        input: SchemaInput {
            article: Some(ArticleInput {
                title: Some("JCB Services Blog".to_string()),
                description: Some(
                    "Expert insights on JCB services and construction equipment".to_string(),
                ),
                url: Some(format!("{}/blog", business.url)),
                ..ArticleInput::default()
            }),
            ..SchemaInput::default()
        },
    };
    document(site, &meta, Some(schema), opts, body)
}

pub fn render_blog_post(site: &Site, page: &BlogPostPage, opts: &RenderOptions) -> String {
    let post = page.post;
    let published = post.published_on().and_then(midnight);
    let article_html = markdown_to_html(post.body);
    let contact = ContactLinks::general(&site.business);

    let title = post.title;
    let image = post.image;
    let meta_line = post_meta_line(post);

    let body = view! {
        <article class="article">
            <p class="post-meta">{meta_line}</p>
            <h1>{title}</h1>
            <img src=image alt=title/>
            <p class="lead">{post.excerpt}</p>
            <div class="article-body" inner_html=article_html></div>
        </article>
        <section class="section">
            <a class="chip" href="/blog">"← All Articles"</a>
        </section>
        <section class="contact-band">
            <h2>"Book a JCB for Your Project"</h2>
            {contact_buttons(&contact)}
        </section>
    };

    let schema = PageSchema {
        kind: SchemaType::Article,
        input: SchemaInput {
            article: Some(ArticleInput {
                title: Some(post.title.to_string()),
                description: Some(post.excerpt.to_string()),
                url: Some(page.meta.canonical.clone()),
                date_published: published,
                date_modified: published,
            }),
            ..SchemaInput::default()
        },
    };
    document(site, &page.meta, Some(schema), opts, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> RenderOptions {
        RenderOptions::build(Utc::now())
    }

    #[test]
    fn test_markdown_to_html() {
        let out = markdown_to_html("## Heading\n\n- **bold** item\n");
        assert!(out.contains("<h2>Heading</h2>"));
        assert!(out.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_blog_index_links_only_published_posts() {
        let site = Site::builtin();
        let html = render_blog_index(&site, &opts());

        for post in BLOG_POSTS {
            assert!(html.contains(post.title));
            let link = format!("href=\"{}\"", post.path());
            assert_eq!(html.contains(&link), post.published, "{}", post.slug);
        }
        assert!(html.contains("Coming Soon"));
        assert!(html.contains("https://jcbbooking.com/blog"));
        assert!(html.contains(r#""@type":"Article""#));
    }

    #[test]
    fn test_blog_post_page() {
        let site = Site::builtin();
        let page = BlogPostPage::resolve(&site, "jcb-excavation-guide-prayagraj").unwrap();
        let html = render_blog_post(&site, &page, &opts());

        assert!(html.contains("<h2>Planning the dig</h2>"));
        assert!(html.contains("<strong>JCB 3DX</strong>"));
        assert!(html.contains(r#""datePublished":"2024-01-15T00:00:00Z""#));
        assert!(html.contains("https://jcbbooking.com/blog/jcb-excavation-guide-prayagraj"));
    }
}
