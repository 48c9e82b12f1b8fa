use yew::prelude::*;

use crate::reveal::use_reveal;

#[function_component(BrandStory)]
pub fn brand_story() -> Html {
    let section = use_node_ref();
    let in_view = use_reveal(&section);

    html! {
        <section ref={section} id="story" class={classes!("story-section", in_view.then_some("in-view"))}>
            <div class="container story-grid">
                <div class="story-text">
                    <span class="section-eyebrow reveal">{"OUR PHILOSOPHY"}</span>
                    <h2 class="section-title reveal">
                        {"Where Science"}
                        <br />
                        <em>{"Meets Ritual"}</em>
                    </h2>
                    <div class="luxury-divider left reveal"></div>
                    <p class="story-paragraph reveal">
                        {"At Lumora, we believe skincare transcends mere application. \
                          It is a sacred pause in your day, a moment to honor the \
                          vessel that carries you through life."}
                    </p>
                    <p class="story-paragraph reveal">
                        {"Our formulations marry ancient botanical wisdom with \
                          breakthrough biotechnology, creating elixirs that don't \
                          just treat. They transform."}
                    </p>
                    <p class="story-paragraph reveal">
                        {"Each ingredient is selected with intention, each formula \
                          perfected through years of research. This is skincare \
                          elevated to its purest form."}
                    </p>
                    <a href="#ingredients" class="luxury-link reveal">{"Explore Our Ingredients"}</a>
                </div>

                <div class="story-visual reveal">
                    <div class="story-image">
                        <div class="story-image-frame">
                            <span class="story-mark">{"L"}</span>
                            <span class="story-since">{"SINCE 2024"}</span>
                        </div>
                    </div>
                </div>
            </div>
            <div class="section-rule"></div>
        </section>
    }
}
