use yew::prelude::*;

use crate::content::VALUES;
use crate::reveal::use_reveal;

#[function_component(Sustainability)]
pub fn sustainability() -> Html {
    let section = use_node_ref();
    let in_view = use_reveal(&section);

    html! {
        <section ref={section} class={classes!("sustainability-section", in_view.then_some("in-view"))}>
            <div class="container sustainability-grid">
                <div class="sustainability-visual reveal">
                    <div class="eco-circle">
                        <div class="eco-ring outer"></div>
                        <div class="eco-ring inner"></div>
                        <div class="eco-center">
                            <span class="eco-icon">{"🌿"}</span>
                            <span class="eco-caption">{"ECO CONSCIOUS"}</span>
                        </div>
                    </div>
                </div>

                <div class="sustainability-text">
                    <span class="section-eyebrow green reveal">{"OUR COMMITMENT"}</span>
                    <h2 class="section-title reveal">
                        {"Beauty That"}
                        <br />
                        <em>{"Gives Back"}</em>
                    </h2>
                    <p class="section-lead left reveal">
                        {"Luxury and responsibility are not mutually exclusive. \
                          Our commitment to the planet is woven into every \
                          aspect of what we create."}
                    </p>

                    <div class="values-grid">
                        {
                            VALUES.iter().enumerate().map(|(i, value)| {
                                let stagger = format!("transition-delay: {:.2}s;", 0.5 + i as f64 * 0.1);
                                html! {
                                    <div key={value.title} class="value-card reveal" style={stagger}>
                                        <span class="value-icon">{value.icon}</span>
                                        <h3 class="value-title">{value.title}</h3>
                                        <p class="value-description">{value.description}</p>
                                    </div>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>
            <div class="section-rule"></div>
        </section>
    }
}
