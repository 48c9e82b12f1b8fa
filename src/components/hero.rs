use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::particles;

const PARTICLE_SEED: u64 = 0x4c55_4d4f_5241; // "LUMORA"
const PARTICLE_COUNT: usize = 30;

#[function_component(Hero)]
pub fn hero() -> Html {
    let container = use_node_ref();
    // Cursor spotlight center, in percent of the hero rect.
    let spotlight = use_state(|| (50.0_f64, 50.0_f64));

    {
        let spotlight = spotlight.clone();
        use_effect_with_deps(
            move |container: &NodeRef| {
                let container = container.clone();
                let listener = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(
                    move |e: web_sys::MouseEvent| {
                        if let Some(element) = container.cast::<Element>() {
                            let rect = element.get_bounding_client_rect();
                            if rect.width() > 0.0 && rect.height() > 0.0 {
                                let x = (e.client_x() as f64 - rect.left()) / rect.width() * 100.0;
                                let y = (e.client_y() as f64 - rect.top()) / rect.height() * 100.0;
                                spotlight.set((x, y));
                            }
                        }
                    },
                );

                let window = web_sys::window();
                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "mousemove",
                        listener.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "mousemove",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            container.clone(),
        );
    }

    let (spot_x, spot_y) = *spotlight;
    let spotlight_style = format!(
        "background: radial-gradient(600px circle at {spot_x:.1}% {spot_y:.1}%, \
         var(--rose-gold-glow), transparent 40%);"
    );

    html! {
        <section ref={container} class="hero">
            <div class="hero-spotlight" style={spotlight_style}></div>

            <div class="hero-particles">
                {
                    particles::field(PARTICLE_SEED, PARTICLE_COUNT)
                        .into_iter()
                        .enumerate()
                        .map(|(i, p)| {
                            let style = format!(
                                "width: {size:.1}px; height: {size:.1}px; left: {left:.1}%; \
                                 animation-delay: {delay:.2}s; animation-duration: {duration:.2}s; \
                                 --particle-opacity: {opacity:.2};",
                                size = p.size,
                                left = p.left,
                                delay = p.delay,
                                duration = p.duration,
                                opacity = p.opacity,
                            );
                            html! { <span key={i} class="particle" {style}></span> }
                        })
                        .collect::<Html>()
                }
            </div>

            <div class="hero-content">
                <div class="hero-text">
                    <span class="section-eyebrow">{"LUXURY SKINCARE RITUALS"}</span>
                    <h1 class="hero-title">
                        {"The Art of"}
                        <br />
                        <em>{"Radiance"}</em>
                    </h1>
                    <p class="hero-lead">
                        {"Discover formulations crafted with rare botanicals and \
                          cutting-edge science. Transform your daily ritual into \
                          a moment of pure luxury."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#products" class="cta-primary">{"Discover Lumora"}</a>
                        <a href="#products" class="cta-secondary">{"Shop Collection"}</a>
                    </div>
                </div>

                <div class="hero-visual">
                    <div class="hero-glow"></div>
                    <div class="bottle">
                        <div class="bottle-body"></div>
                        <div class="bottle-cap"></div>
                        <div class="bottle-label">
                            <span class="bottle-mark">{"L"}</span>
                            <span class="bottle-brand">{"LUMORA"}</span>
                        </div>
                    </div>
                </div>
            </div>

            <div class="scroll-indicator">
                <span>{"SCROLL"}</span>
                <div class="scroll-line"></div>
            </div>
        </section>
    }
}
