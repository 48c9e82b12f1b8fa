use yew::prelude::*;

use crate::components::before_after::BeforeAfter;
use crate::components::brand_story::BrandStory;
use crate::components::final_cta::FinalCta;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::ingredients::Ingredients;
use crate::components::products::ProductHighlights;
use crate::components::sustainability::Sustainability;
use crate::components::testimonials::Testimonials;

const META_DESCRIPTION: &str = "Discover LUMORA SKIN - luxury skincare formulations crafted \
with rare botanicals and cutting-edge science. Transform your daily ritual into pure luxury.";

fn set_meta_description() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Ok(Some(meta)) = document.query_selector("meta[name=\"description\"]") {
        let _ = meta.set_attribute("content", META_DESCRIPTION);
    } else if let (Ok(meta), Some(head)) = (document.create_element("meta"), document.head()) {
        let _ = meta.set_attribute("name", "description");
        let _ = meta.set_attribute("content", META_DESCRIPTION);
        let _ = head.append_child(&meta);
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top and refresh SEO tags once on mount.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
                if let Some(document) = window.document() {
                    document.set_title("LUMORA SKIN | Luxury Skincare Rituals");
                }
            }
            set_meta_description();
            || ()
        },
        (),
    );

    html! {
        <main class="landing-page">
            <Hero />
            <BrandStory />
            <ProductHighlights />
            <Ingredients />
            <BeforeAfter />
            <Testimonials />
            <Sustainability />
            <FinalCta />
            <Footer />
            <style>
                {r#"
                :root {
                    --background: #faf7f2;
                    --foreground: #2b2420;
                    --muted: #efe9e0;
                    --muted-foreground: #8a7f72;
                    --card: #fffdf9;
                    --secondary: #f3ece2;
                    --border: rgba(43, 36, 32, 0.12);
                    --champagne: #f0e2cc;
                    --rose-gold: #c9927a;
                    --rose-gold-light: #e3b8a4;
                    --rose-gold-glow: rgba(227, 184, 164, 0.15);
                    --emerald-soft: #6f9c82;
                    --font-serif: 'Cormorant Garamond', Georgia, serif;
                    --font-sans: 'Inter', -apple-system, sans-serif;
                }

                .dark {
                    --background: #171310;
                    --foreground: #f0e9e1;
                    --muted: #241f1a;
                    --muted-foreground: #9d9185;
                    --card: #1e1914;
                    --secondary: #292219;
                    --border: rgba(240, 233, 225, 0.12);
                    --champagne: #3a3021;
                    --rose-gold-glow: rgba(201, 146, 122, 0.1);
                }

                * {
                    margin: 0;
                    padding: 0;
                    box-sizing: border-box;
                }

                html {
                    scroll-behavior: smooth;
                }

                body {
                    font-family: var(--font-sans);
                    background: var(--background);
                    color: var(--foreground);
                    transition: background 0.7s ease, color 0.7s ease;
                }

                .container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                /* Reveal-on-scroll: sections gate the animation with .in-view,
                   the CSS carries the motion. */
                .reveal {
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }
                .in-view .reveal {
                    opacity: 1;
                    transform: none;
                }

                section {
                    position: relative;
                    padding: 5rem 0;
                    overflow: hidden;
                }

                .section-head {
                    text-align: center;
                    margin-bottom: 3.5rem;
                }
                .section-eyebrow {
                    display: inline-block;
                    font-size: 0.7rem;
                    letter-spacing: 0.4em;
                    color: var(--muted-foreground);
                    margin-bottom: 1.5rem;
                }
                .section-eyebrow.green {
                    color: var(--emerald-soft);
                }
                .section-title {
                    font-family: var(--font-serif);
                    font-weight: 400;
                    font-size: clamp(2.5rem, 6vw, 3.75rem);
                    line-height: 1.1;
                }
                .section-title em {
                    font-weight: 300;
                }
                .section-lead {
                    font-size: 1rem;
                    color: var(--muted-foreground);
                    line-height: 1.7;
                    max-width: 36rem;
                    margin: 1.5rem auto 0;
                }
                .section-lead.left {
                    margin: 1.5rem 0 3rem;
                }
                .luxury-divider {
                    width: 4rem;
                    height: 1px;
                    margin: 2rem auto 0;
                    background: linear-gradient(to right, transparent, var(--rose-gold), transparent);
                }
                .luxury-divider.left {
                    width: 3rem;
                    margin: 1.5rem 0;
                    background: var(--rose-gold);
                }
                .luxury-link {
                    display: inline-block;
                    font-size: 0.85rem;
                    letter-spacing: 0.1em;
                    color: var(--foreground);
                    text-decoration: none;
                    border-bottom: 1px solid var(--border);
                    padding-bottom: 0.25rem;
                    transition: border-color 0.5s ease;
                }
                .luxury-link:hover {
                    border-color: var(--foreground);
                }
                .section-rule {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    right: 0;
                    height: 1px;
                    background: linear-gradient(to right, transparent, var(--border), transparent);
                }

                /* Navigation */
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: color-mix(in srgb, var(--background) 80%, transparent);
                    backdrop-filter: blur(8px);
                    transition: background 0.7s ease, border-color 0.7s ease;
                    border-bottom: 1px solid transparent;
                }
                .top-nav.scrolled {
                    background: color-mix(in srgb, var(--background) 95%, transparent);
                    border-bottom-color: var(--border);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    height: 5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    text-decoration: none;
                    color: var(--foreground);
                }
                .nav-logo-main {
                    display: block;
                    font-family: var(--font-serif);
                    font-size: 1.3rem;
                    letter-spacing: 0.3em;
                }
                .nav-logo-sub {
                    display: block;
                    font-size: 0.55rem;
                    letter-spacing: 0.5em;
                    color: var(--muted-foreground);
                    margin-top: 2px;
                }
                .nav-links {
                    display: flex;
                    gap: 3rem;
                }
                .nav-link {
                    font-size: 0.85rem;
                    letter-spacing: 0.1em;
                    color: var(--muted-foreground);
                    text-decoration: none;
                    transition: color 0.5s ease;
                }
                .nav-link:hover {
                    color: var(--foreground);
                }
                .nav-actions {
                    display: flex;
                    align-items: center;
                    gap: 1.25rem;
                }
                .theme-toggle {
                    background: none;
                    border: none;
                    font-size: 1.1rem;
                    padding: 0.5rem;
                    border-radius: 50%;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }
                .theme-toggle:hover {
                    background: var(--muted);
                }
                .nav-cta {
                    font-size: 0.85rem;
                    letter-spacing: 0.1em;
                    color: var(--foreground);
                    text-decoration: none;
                    border-bottom: 1px solid var(--border);
                    padding-bottom: 0.25rem;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    padding: 0.5rem;
                    cursor: pointer;
                }
                .burger-menu span {
                    display: block;
                    width: 22px;
                    height: 1.5px;
                    background: var(--foreground);
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }
                .burger-menu.open span:nth-child(1) {
                    transform: translateY(6.5px) rotate(45deg);
                }
                .burger-menu.open span:nth-child(2) {
                    opacity: 0;
                }
                .burger-menu.open span:nth-child(3) {
                    transform: translateY(-6.5px) rotate(-45deg);
                }
                .mobile-menu {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                    padding: 2rem 0;
                    background: var(--background);
                    border-top: 1px solid var(--border);
                }
                .mobile-menu-link {
                    font-family: var(--font-serif);
                    font-size: 1.5rem;
                    letter-spacing: 0.1em;
                    color: var(--foreground);
                    text-decoration: none;
                }
                .mobile-menu-cta {
                    margin-top: 1rem;
                    padding: 0.75rem 2rem;
                    background: var(--foreground);
                    color: var(--background);
                    font-size: 0.85rem;
                    letter-spacing: 0.1em;
                    text-decoration: none;
                }

                /* Hero */
                .hero {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    background: linear-gradient(160deg, var(--background) 0%, var(--champagne) 60%, var(--secondary) 100%);
                    padding-top: 5rem;
                }
                .hero-spotlight {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    opacity: 0.4;
                }
                .hero-particles {
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                    pointer-events: none;
                }
                .particle {
                    position: absolute;
                    bottom: -5%;
                    border-radius: 50%;
                    background: var(--rose-gold);
                    opacity: 0;
                    animation-name: float-up;
                    animation-timing-function: linear;
                    animation-iteration-count: infinite;
                }
                @keyframes float-up {
                    0% { transform: translateY(0); opacity: 0; }
                    10% { opacity: var(--particle-opacity); }
                    80% { opacity: var(--particle-opacity); }
                    100% { transform: translateY(-110vh); opacity: 0; }
                }
                .hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    gap: 4rem;
                }
                .hero-text {
                    flex: 1;
                    max-width: 40rem;
                }
                .hero-title {
                    font-family: var(--font-serif);
                    font-weight: 400;
                    font-size: clamp(3rem, 8vw, 5.5rem);
                    line-height: 1.1;
                    letter-spacing: -0.01em;
                }
                .hero-title em {
                    font-weight: 300;
                }
                .hero-lead {
                    margin-top: 2rem;
                    font-size: 1.05rem;
                    line-height: 1.7;
                    color: var(--muted-foreground);
                    max-width: 30rem;
                }
                .hero-cta-group {
                    margin-top: 2.5rem;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }
                .cta-primary {
                    padding: 1rem 2.5rem;
                    background: var(--foreground);
                    color: var(--background);
                    font-size: 0.85rem;
                    letter-spacing: 0.1em;
                    text-decoration: none;
                    transition: box-shadow 0.5s ease;
                }
                .cta-primary:hover {
                    box-shadow: 0 0 40px var(--rose-gold-glow);
                }
                .cta-secondary {
                    padding: 1rem 2.5rem;
                    border: 1px solid var(--border);
                    color: var(--foreground);
                    font-size: 0.85rem;
                    letter-spacing: 0.1em;
                    text-decoration: none;
                    transition: border-color 0.5s ease;
                }
                .cta-secondary:hover {
                    border-color: var(--foreground);
                }
                .hero-visual {
                    flex: 1;
                    position: relative;
                    display: flex;
                    justify-content: center;
                }
                .hero-glow {
                    position: absolute;
                    inset: -20%;
                    background: radial-gradient(circle, var(--rose-gold-glow), transparent 70%);
                    filter: blur(40px);
                }
                .bottle {
                    position: relative;
                    width: 10rem;
                    height: 22rem;
                    animation: bottle-float 6s ease-in-out infinite;
                }
                @keyframes bottle-float {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-15px); }
                }
                .bottle-body {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, var(--secondary), var(--card), var(--secondary));
                    border-radius: 50% 50% 10px 10px / 30% 30% 10px 10px;
                    box-shadow: 0 30px 60px rgba(43, 36, 32, 0.15);
                }
                .bottle-cap {
                    position: absolute;
                    top: -1.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 2rem;
                    height: 2.5rem;
                    background: linear-gradient(to bottom, var(--rose-gold), var(--rose-gold-light));
                    border-radius: 4px 4px 0 0;
                }
                .bottle-label {
                    position: absolute;
                    top: 33%;
                    left: 50%;
                    transform: translateX(-50%);
                    text-align: center;
                }
                .bottle-mark {
                    display: block;
                    font-family: var(--font-serif);
                    font-size: 1.5rem;
                    letter-spacing: 0.2em;
                    color: color-mix(in srgb, var(--foreground) 70%, transparent);
                }
                .bottle-brand {
                    display: block;
                    font-size: 0.5rem;
                    letter-spacing: 0.3em;
                    color: var(--muted-foreground);
                    margin-top: 0.25rem;
                }
                .scroll-indicator {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.75rem;
                    font-size: 0.65rem;
                    letter-spacing: 0.2em;
                    color: var(--muted-foreground);
                }
                .scroll-line {
                    width: 1px;
                    height: 2.5rem;
                    background: linear-gradient(to bottom, var(--muted-foreground), transparent);
                    animation: scroll-bob 1.5s ease-in-out infinite;
                }
                @keyframes scroll-bob {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(8px); }
                }

                /* Brand story */
                .story-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .story-paragraph {
                    font-size: 1rem;
                    line-height: 1.8;
                    color: var(--muted-foreground);
                    margin-bottom: 1.5rem;
                }
                .story-text .luxury-link {
                    margin-top: 1.5rem;
                }
                .story-image {
                    position: relative;
                    aspect-ratio: 3 / 4;
                    background: linear-gradient(to bottom, var(--champagne), var(--secondary), var(--rose-gold-glow));
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .story-image::after {
                    content: '';
                    position: absolute;
                    inset: -1rem;
                    border: 1px solid var(--border);
                    pointer-events: none;
                }
                .story-image-frame {
                    width: 75%;
                    height: 75%;
                    border: 1px solid var(--border);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                }
                .story-mark {
                    font-family: var(--font-serif);
                    font-size: 4rem;
                    color: color-mix(in srgb, var(--foreground) 20%, transparent);
                }
                .story-since {
                    font-size: 0.7rem;
                    letter-spacing: 0.4em;
                    color: color-mix(in srgb, var(--foreground) 40%, transparent);
                }

                /* Products */
                .products-section {
                    background: linear-gradient(to bottom, var(--background), var(--champagne));
                }
                .products-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2.5rem;
                }
                .product-card {
                    background: var(--card);
                    box-shadow: 0 10px 40px rgba(43, 36, 32, 0.06);
                    transition-property: opacity, transform, box-shadow;
                }
                .product-card:hover {
                    box-shadow: 0 20px 60px rgba(43, 36, 32, 0.12);
                }
                .product-visual {
                    aspect-ratio: 3 / 4;
                    background: linear-gradient(to bottom, var(--secondary), var(--card));
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .product-bottle {
                    width: 4.5rem;
                    height: 13rem;
                    background: linear-gradient(to bottom, var(--background), var(--card));
                    border-radius: 50% 50% 8px 8px / 25% 25% 8px 8px;
                    box-shadow: 0 20px 40px rgba(43, 36, 32, 0.1);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transition: transform 0.6s ease;
                }
                .product-card:hover .product-bottle {
                    transform: translateY(-8px);
                }
                .product-number {
                    font-family: var(--font-serif);
                    color: color-mix(in srgb, var(--foreground) 60%, transparent);
                }
                .product-info {
                    padding: 2.5rem;
                }
                .product-subtitle {
                    font-size: 0.7rem;
                    letter-spacing: 0.3em;
                    color: var(--muted-foreground);
                }
                .product-name {
                    font-family: var(--font-serif);
                    font-weight: 400;
                    font-size: 1.75rem;
                    margin: 0.5rem 0 1rem;
                }
                .product-description {
                    font-size: 0.9rem;
                    line-height: 1.7;
                    color: var(--muted-foreground);
                    margin-bottom: 1.5rem;
                }
                .product-ingredients-label {
                    display: block;
                    font-size: 0.7rem;
                    letter-spacing: 0.1em;
                    color: color-mix(in srgb, var(--foreground) 60%, transparent);
                    margin-bottom: 0.75rem;
                }
                .product-ingredients ul {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    list-style: none;
                }
                .product-ingredients li {
                    font-size: 0.7rem;
                    letter-spacing: 0.05em;
                    color: var(--muted-foreground);
                    padding: 0.25rem 0.75rem;
                    border: 1px solid var(--border);
                }
                .product-footer {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    margin-top: 1.5rem;
                    padding-top: 1.5rem;
                    border-top: 1px solid var(--border);
                }
                .product-price {
                    font-family: var(--font-serif);
                    font-size: 1.25rem;
                }

                /* Ingredients */
                .ingredients-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .ingredient-card {
                    padding: 2.5rem;
                    background: color-mix(in srgb, var(--card) 50%, transparent);
                    border: 1px solid var(--border);
                    transition-property: opacity, transform, border-color, background;
                    cursor: default;
                }
                .ingredient-card.hovered {
                    border-color: var(--rose-gold);
                    background: var(--card);
                }
                .ingredient-icon {
                    font-size: 2rem;
                    margin-bottom: 1.5rem;
                    opacity: 0.8;
                }
                .ingredient-name {
                    font-family: var(--font-serif);
                    font-weight: 400;
                    font-size: 1.5rem;
                    margin-bottom: 0.25rem;
                }
                .ingredient-scientific {
                    font-size: 0.75rem;
                    letter-spacing: 0.05em;
                    font-style: italic;
                    color: var(--muted-foreground);
                }
                .ingredient-description {
                    font-size: 0.85rem;
                    line-height: 1.7;
                    color: var(--muted-foreground);
                    margin-top: 1rem;
                    padding-top: 1rem;
                    border-top: 1px solid var(--border);
                }

                /* Before / after slider */
                .compare-wrap {
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .compare-frame {
                    position: relative;
                    aspect-ratio: 16 / 10;
                    cursor: ew-resize;
                    user-select: none;
                    -webkit-user-select: none;
                    touch-action: pan-y;
                    overflow: hidden;
                    box-shadow: 0 20px 60px rgba(43, 36, 32, 0.12);
                }
                .compare-before {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(135deg, var(--muted), var(--secondary), var(--muted));
                }
                .compare-after {
                    position: absolute;
                    inset: 0;
                    z-index: 1;
                    background: linear-gradient(135deg, var(--champagne), var(--rose-gold-light), var(--secondary));
                }
                .compare-caption {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                }
                .compare-word {
                    font-family: var(--font-serif);
                    font-size: 3.5rem;
                    color: color-mix(in srgb, var(--foreground) 25%, transparent);
                }
                .compare-caption p {
                    font-size: 0.85rem;
                    color: var(--muted-foreground);
                }
                .compare-handle {
                    position: absolute;
                    top: 0;
                    bottom: 0;
                    width: 1px;
                    z-index: 2;
                    background: color-mix(in srgb, var(--foreground) 80%, transparent);
                    transition: left 75ms linear;
                }
                .compare-grip {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: var(--background);
                    border: 1px solid var(--border);
                    box-shadow: 0 4px 16px rgba(43, 36, 32, 0.15);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 4px;
                }
                .compare-grip span {
                    width: 2px;
                    height: 1rem;
                    border-radius: 2px;
                    background: color-mix(in srgb, var(--foreground) 40%, transparent);
                }
                .compare-label {
                    position: absolute;
                    bottom: 1.5rem;
                    z-index: 3;
                    font-size: 0.7rem;
                    letter-spacing: 0.15em;
                    color: color-mix(in srgb, var(--foreground) 60%, transparent);
                }
                .compare-label.left { left: 1.5rem; }
                .compare-label.right { right: 1.5rem; }
                .compare-footnote {
                    text-align: center;
                    font-size: 0.85rem;
                    color: var(--muted-foreground);
                    margin-top: 2rem;
                }

                /* Testimonials */
                .testimonials-section {
                    background: linear-gradient(to bottom, var(--background), var(--rose-gold-glow));
                }
                .carousel {
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .carousel-slide {
                    min-height: 20rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 0 2rem;
                    animation: slide-in 0.6s cubic-bezier(0.25, 0.1, 0.25, 1);
                }
                @keyframes slide-in {
                    from { opacity: 0; transform: translateX(50px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                .carousel-quote-mark {
                    font-family: var(--font-serif);
                    font-size: 5rem;
                    line-height: 0.5;
                    color: color-mix(in srgb, var(--rose-gold) 30%, transparent);
                    margin-bottom: 1.5rem;
                }
                .carousel-quote {
                    font-family: var(--font-serif);
                    font-style: italic;
                    font-size: clamp(1.25rem, 3vw, 1.75rem);
                    line-height: 1.6;
                    margin-bottom: 2rem;
                }
                .carousel-stars {
                    display: flex;
                    gap: 0.25rem;
                    margin-bottom: 1.5rem;
                }
                .star {
                    color: var(--rose-gold);
                    font-size: 0.9rem;
                }
                .carousel-name {
                    font-family: var(--font-serif);
                    font-size: 1.1rem;
                }
                .carousel-title {
                    font-size: 0.8rem;
                    letter-spacing: 0.1em;
                    color: var(--muted-foreground);
                    margin-top: 0.25rem;
                }
                .carousel-nav {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 2rem;
                    margin-top: 3rem;
                }
                .carousel-arrow {
                    padding: 0.5rem 1.1rem;
                    font-size: 1.25rem;
                    background: none;
                    color: var(--foreground);
                    border: 1px solid var(--border);
                    cursor: pointer;
                    transition: border-color 0.5s ease;
                }
                .carousel-arrow:hover {
                    border-color: color-mix(in srgb, var(--foreground) 30%, transparent);
                }
                .carousel-dots {
                    display: flex;
                    gap: 0.5rem;
                }
                .carousel-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 999px;
                    border: none;
                    background: color-mix(in srgb, var(--foreground) 20%, transparent);
                    cursor: pointer;
                    transition: width 0.5s ease, background 0.5s ease;
                }
                .carousel-dot:hover {
                    background: color-mix(in srgb, var(--foreground) 40%, transparent);
                }
                .carousel-dot.active {
                    width: 1.5rem;
                    background: var(--foreground);
                }

                /* Sustainability */
                .sustainability-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .eco-circle {
                    position: relative;
                    aspect-ratio: 1;
                    max-width: 26rem;
                    margin: 0 auto;
                    border-radius: 50%;
                    background: radial-gradient(circle, var(--rose-gold-glow), transparent 70%);
                }
                .eco-ring {
                    position: absolute;
                    border-radius: 50%;
                    border: 1px solid color-mix(in srgb, var(--emerald-soft) 20%, transparent);
                }
                .eco-ring.outer {
                    inset: 2rem;
                    animation: spin 60s linear infinite;
                }
                .eco-ring.inner {
                    inset: 4rem;
                    animation: spin-reverse 45s linear infinite;
                }
                @keyframes spin {
                    to { transform: rotate(360deg); }
                }
                @keyframes spin-reverse {
                    to { transform: rotate(-360deg); }
                }
                .eco-center {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                }
                .eco-icon {
                    font-size: 3rem;
                    opacity: 0.7;
                }
                .eco-caption {
                    font-size: 0.7rem;
                    letter-spacing: 0.3em;
                    color: var(--emerald-soft);
                }
                .values-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                }
                .value-icon {
                    display: inline-block;
                    font-size: 1.4rem;
                    margin-bottom: 1rem;
                    transition: transform 0.5s ease;
                }
                .value-card:hover .value-icon {
                    transform: scale(1.1);
                }
                .value-title {
                    font-family: var(--font-serif);
                    font-weight: 400;
                    font-size: 1.15rem;
                    margin-bottom: 0.5rem;
                }
                .value-description {
                    font-size: 0.85rem;
                    line-height: 1.7;
                    color: var(--muted-foreground);
                }

                /* Final CTA */
                .cta-section {
                    background: linear-gradient(to bottom, var(--background), var(--champagne));
                }
                .cta-shape {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    width: 150%;
                    height: 150%;
                    transform: translate(-50%, -50%);
                    border-radius: 50%;
                    background: radial-gradient(circle, var(--rose-gold-glow), transparent 60%);
                    filter: blur(60px);
                    animation: breathe 20s ease-in-out infinite;
                    pointer-events: none;
                }
                @keyframes breathe {
                    0%, 100% { transform: translate(-50%, -50%) scale(1) rotate(0deg); }
                    50% { transform: translate(-50%, -50%) scale(1.1) rotate(5deg); }
                }
                .cta-content {
                    position: relative;
                    z-index: 1;
                    max-width: 48rem;
                    text-align: center;
                }
                .cta-title {
                    font-family: var(--font-serif);
                    font-weight: 400;
                    font-size: clamp(3rem, 7vw, 4.5rem);
                    line-height: 1.1;
                    margin-bottom: 1.5rem;
                }
                .cta-title em {
                    font-weight: 300;
                }
                .cta-content .section-lead {
                    margin-bottom: 2.5rem;
                }
                .trust-badges {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 2rem 4rem;
                    margin-top: 4rem;
                    padding-top: 4rem;
                    border-top: 1px solid var(--border);
                }
                .trust-badge {
                    font-size: 0.75rem;
                    letter-spacing: 0.1em;
                    color: var(--muted-foreground);
                }

                /* Footer */
                .site-footer {
                    background: var(--foreground);
                    color: var(--background);
                    padding: 5rem 0 2rem;
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr 1fr;
                    gap: 3rem;
                }
                .footer-logo-main {
                    display: block;
                    font-family: var(--font-serif);
                    font-size: 1.5rem;
                    letter-spacing: 0.3em;
                }
                .footer-logo-sub {
                    display: block;
                    font-size: 0.55rem;
                    letter-spacing: 0.5em;
                    opacity: 0.6;
                    margin-top: 2px;
                }
                .footer-tagline {
                    font-size: 0.85rem;
                    line-height: 1.7;
                    opacity: 0.7;
                    max-width: 18rem;
                    margin-top: 1.5rem;
                }
                .footer-heading {
                    display: block;
                    font-size: 0.7rem;
                    letter-spacing: 0.1em;
                    opacity: 0.6;
                    margin-bottom: 1.5rem;
                }
                .footer-newsletter {
                    margin-top: 2rem;
                }
                .newsletter-row {
                    display: flex;
                    max-width: 18rem;
                }
                .newsletter-row input {
                    flex: 1;
                    background: transparent;
                    border: none;
                    border-bottom: 1px solid color-mix(in srgb, var(--background) 30%, transparent);
                    color: var(--background);
                    padding: 0.5rem 0;
                    font-size: 0.85rem;
                }
                .newsletter-row input:focus {
                    outline: none;
                    border-bottom-color: color-mix(in srgb, var(--background) 60%, transparent);
                }
                .newsletter-row button {
                    background: none;
                    border: none;
                    color: var(--background);
                    padding: 0 1rem;
                    cursor: pointer;
                    opacity: 0.8;
                }
                .footer-column ul {
                    list-style: none;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .footer-column a {
                    font-size: 0.85rem;
                    color: var(--background);
                    opacity: 0.8;
                    text-decoration: none;
                    transition: opacity 0.3s ease;
                }
                .footer-column a:hover {
                    opacity: 1;
                }
                .footer-bottom {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    flex-wrap: wrap;
                    gap: 1rem;
                    margin-top: 4rem;
                    padding-top: 2rem;
                    border-top: 1px solid color-mix(in srgb, var(--background) 10%, transparent);
                    font-size: 0.7rem;
                    opacity: 0.6;
                }
                .footer-legal {
                    display: flex;
                    gap: 1.5rem;
                }
                .footer-legal a {
                    color: var(--background);
                    text-decoration: none;
                }

                @media (max-width: 1024px) {
                    .nav-links,
                    .nav-cta {
                        display: none;
                    }
                    .burger-menu {
                        display: flex;
                    }
                    .hero-content {
                        flex-direction: column;
                        text-align: center;
                        padding-top: 3rem;
                    }
                    .hero-lead,
                    .hero-cta-group {
                        margin-left: auto;
                        margin-right: auto;
                        justify-content: center;
                    }
                    .story-grid,
                    .sustainability-grid {
                        grid-template-columns: 1fr;
                    }
                    .products-grid,
                    .ingredients-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                    .footer-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }

                @media (max-width: 640px) {
                    .products-grid,
                    .ingredients-grid,
                    .values-grid,
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </main>
    }
}
