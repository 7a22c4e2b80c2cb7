//! Static assets emitted next to the pages.

/// One slide of the home page gallery
#[derive(Debug, Clone, Copy)]
pub struct GallerySlide {
    pub src: &'static str,
    pub alt: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const GALLERY: [GallerySlide; 6] = [
    GallerySlide {
        src: "/jcb-real-1.jpg",
        alt: "JCB Excavator in Action",
        title: "Heavy Excavation Work",
        description: "Professional JCB excavator performing heavy-duty construction and excavation tasks",
    },
    GallerySlide {
        src: "/jcb-real-2.jpg",
        alt: "JCB Construction Equipment",
        title: "Construction Site Operations",
        description: "JCB machinery working efficiently on large-scale construction projects",
    },
    GallerySlide {
        src: "/jcb-real-3.jpg",
        alt: "JCB Earthmoving Equipment",
        title: "Earthmoving & Site Preparation",
        description: "Advanced JCB equipment for comprehensive earthmoving and site development",
    },
    GallerySlide {
        src: "/jcb-real-4.jpg",
        alt: "JCB Machine Construction Site India",
        title: "Soil Handling & Loading",
        description: "JCB loader efficiently handling soil filling and material transportation",
    },
    GallerySlide {
        src: "/jcb-real-5.jpg",
        alt: "JCB Equipment in Operation",
        title: "Professional JCB Services",
        description: "Reliable JCB equipment providing professional construction and excavation services",
    },
    GallerySlide {
        src: "/jcb-real-6.jpg",
        alt: "JCB Crane Working Near Sand Quarry",
        title: "Quarry & Mining Operations",
        description: "JCB crane equipment working efficiently in sand quarry and mining operations",
    },
];

/// Images the rendered pages link to under `public/`
pub fn referenced_images() -> Vec<&'static str> {
    GALLERY.iter().map(|slide| slide.src).collect()
}

/// Gallery slide timer in milliseconds
pub const GALLERY_INTERVAL_MS: u32 = 5000;

/// Home page gallery behaviour: auto-advance plus prev/next with wraparound
pub fn gallery_js() -> String {
    format!(
        r#"// Gallery slideshow
(function () {{
    const gallery = document.querySelector('[data-gallery]');
    if (!gallery) return;

    const slides = Array.from(gallery.querySelectorAll('.slide'));
    const total = slides.length;
    if (total === 0) return;

    let current = 0;
    let timer = null;

    function show(index) {{
        slides[current].classList.remove('active');
        current = index;
        slides[current].classList.add('active');
    }}

    function next() {{
        show((current + 1) % total);
    }}

    function previous() {{
        show((current - 1 + total) % total);
    }}

    function restart() {{
        if (timer) clearInterval(timer);
        timer = setInterval(next, {interval});
    }}

    const nextButton = gallery.querySelector('.gallery-next');
    const prevButton = gallery.querySelector('.gallery-prev');
    if (nextButton) nextButton.addEventListener('click', () => {{ next(); restart(); }});
    if (prevButton) prevButton.addEventListener('click', () => {{ previous(); restart(); }});

    restart();
}})();
"#,
        interval = GALLERY_INTERVAL_MS
    )
}

pub fn styles_css() -> &'static str {
    r#":root {
    --brand: #f59e0b;
    --brand-dark: #d97706;
    --ink: #1f2937;
    --muted: #6b7280;
    --surface: #ffffff;
    --surface-alt: #f9fafb;
    --call: #2563eb;
    --whatsapp: #16a34a;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
    color: var(--ink);
    background: var(--surface);
    line-height: 1.6;
}

a { color: inherit; }

.preview-badge {
    position: fixed;
    top: 10px;
    right: 10px;
    background: #ff6b6b;
    color: white;
    padding: 6px 12px;
    border-radius: 4px;
    font-size: 12px;
    font-weight: bold;
    z-index: 1000;
}

.site-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
    padding: 1rem 2rem;
    background: var(--ink);
    color: white;
}

.site-header nav { display: flex; gap: 1.5rem; }
.site-header nav a { text-decoration: none; }
.brand { font-weight: 700; font-size: 1.25rem; text-decoration: none; color: var(--brand); }

main { max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; }

.hero {
    padding: 4rem 0 3rem;
    text-align: center;
}

.hero h1 { font-size: 2.5rem; margin-bottom: 0.5rem; }
.lead { font-size: 1.25rem; color: var(--muted); }
.facts { display: flex; justify-content: center; gap: 1rem; color: var(--muted); }

.section { padding: 3rem 0; }
.section.alt { background: var(--surface-alt); }
.section h2 { text-align: center; font-size: 2rem; }

.grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
    gap: 1.5rem;
}

.card {
    display: block;
    padding: 1.5rem;
    border-radius: 12px;
    background: var(--surface);
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
    text-decoration: none;
}

.card-icon { font-size: 2.5rem; }

.chips { display: flex; flex-wrap: wrap; justify-content: center; gap: 0.75rem; }

.chip {
    padding: 0.4rem 1rem;
    border-radius: 999px;
    background: var(--surface-alt);
    border: 1px solid #e5e7eb;
    text-decoration: none;
}

.checks { padding-left: 1.2rem; }
.checks li::marker { content: "✓ "; color: var(--whatsapp); }

.cta-buttons { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; margin: 1.5rem 0; }

.btn {
    display: inline-block;
    padding: 0.8rem 1.6rem;
    border-radius: 8px;
    font-weight: 600;
    color: white;
    text-decoration: none;
}

.btn-call { background: var(--call); }
.btn-whatsapp { background: var(--whatsapp); }

.contact-band {
    margin: 3rem 0;
    padding: 3rem 1.5rem;
    border-radius: 16px;
    text-align: center;
    background: linear-gradient(135deg, var(--brand), var(--brand-dark));
    color: white;
}

.pricing { width: 100%; border-collapse: collapse; }
.pricing th, .pricing td { padding: 0.75rem; border-bottom: 1px solid #e5e7eb; text-align: left; }
.price { font-size: 1.5rem; font-weight: 700; color: var(--brand-dark); }

.steps { counter-reset: step; }
.steps li { margin-bottom: 0.75rem; }

.gallery { position: relative; }
.slides { position: relative; overflow: hidden; border-radius: 16px; }
.slide { display: none; margin: 0; }
.slide.active { display: block; }
.slide img { width: 100%; height: 480px; object-fit: cover; }
.slide figcaption { padding: 1rem 0; }

.gallery-prev, .gallery-next {
    position: absolute;
    top: 50%;
    border: none;
    border-radius: 50%;
    width: 3rem;
    height: 3rem;
    font-size: 2rem;
    background: rgba(255, 255, 255, 0.85);
    cursor: pointer;
}

.gallery-prev { left: 1rem; }
.gallery-next { right: 1rem; }

.post-meta { color: var(--muted); font-size: 0.9rem; }
.article { max-width: 760px; margin: 0 auto; }
.article img { max-width: 100%; }
.draft { opacity: 0.7; }

.site-footer {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
    gap: 2rem;
    padding: 3rem 2rem;
    background: var(--ink);
    color: #d1d5db;
}

.site-footer ul { list-style: none; padding: 0; }
.site-footer a { text-decoration: none; }

@media (max-width: 640px) {
    .site-header { flex-direction: column; }
    .hero h1 { font-size: 1.8rem; }
    .slide img { height: 260px; }
}
"#
}
