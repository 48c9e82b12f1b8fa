use yew::prelude::*;

use crate::content::TRUST_BADGES;
use crate::reveal::use_reveal;

#[function_component(FinalCta)]
pub fn final_cta() -> Html {
    let section = use_node_ref();
    let in_view = use_reveal(&section);

    html! {
        <section ref={section} class={classes!("cta-section", in_view.then_some("in-view"))}>
            <div class="cta-shape"></div>
            <div class="container cta-content">
                <span class="section-eyebrow reveal">{"BEGIN YOUR JOURNEY"}</span>
                <h2 class="cta-title reveal">
                    {"Elevate Your"}
                    <br />
                    <em>{"Ritual"}</em>
                </h2>
                <p class="section-lead reveal">
                    {"Join those who have transformed their skincare into \
                      a daily act of self-reverence. Your radiance awaits."}
                </p>
                <div class="reveal">
                    <a href="#products" class="cta-primary">{"Explore the Collection"}</a>
                </div>

                <div class="trust-badges reveal">
                    {
                        TRUST_BADGES.iter().map(|badge| html! {
                            <span key={*badge} class="trust-badge">{badge}</span>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
