use yew::prelude::*;

use crate::content::INGREDIENTS;
use crate::reveal::use_reveal;

#[function_component(Ingredients)]
pub fn ingredients() -> Html {
    let section = use_node_ref();
    let in_view = use_reveal(&section);
    let hovered_id = use_state(|| None::<u32>);

    html! {
        <section ref={section} id="ingredients" class={classes!("ingredients-section", in_view.then_some("in-view"))}>
            <div class="container">
                <div class="section-head">
                    <span class="section-eyebrow reveal">{"THE SCIENCE"}</span>
                    <h2 class="section-title reveal">{"Key Ingredients"}</h2>
                    <p class="section-lead reveal">
                        {"Every ingredient is selected for its proven efficacy and purity. \
                          Nature and science in perfect harmony."}
                    </p>
                    <div class="luxury-divider reveal"></div>
                </div>

                <div class="ingredients-grid">
                    {
                        INGREDIENTS.iter().enumerate().map(|(i, ingredient)| {
                            let id = ingredient.id;
                            let is_hovered = *hovered_id == Some(id);
                            let stagger = format!("transition-delay: {:.2}s;", 0.3 + i as f64 * 0.1);

                            let on_enter = {
                                let hovered_id = hovered_id.clone();
                                Callback::from(move |_: MouseEvent| hovered_id.set(Some(id)))
                            };
                            let on_leave = {
                                let hovered_id = hovered_id.clone();
                                Callback::from(move |_: MouseEvent| hovered_id.set(None))
                            };

                            html! {
                                <div
                                    key={id}
                                    class={classes!("ingredient-card", "reveal", is_hovered.then_some("hovered"))}
                                    style={stagger}
                                    onmouseenter={on_enter}
                                    onmouseleave={on_leave}
                                >
                                    <div class="ingredient-icon">{ingredient.icon}</div>
                                    <h3 class="ingredient-name">{ingredient.name}</h3>
                                    <span class="ingredient-scientific">{ingredient.scientific}</span>
                                    {
                                        if is_hovered {
                                            html! {
                                                <p class="ingredient-description">{ingredient.description}</p>
                                            }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
