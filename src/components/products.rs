use yew::prelude::*;

use crate::content::PRODUCTS;
use crate::reveal::use_reveal;

#[function_component(ProductHighlights)]
pub fn product_highlights() -> Html {
    let section = use_node_ref();
    let in_view = use_reveal(&section);

    html! {
        <section ref={section} id="products" class={classes!("products-section", in_view.then_some("in-view"))}>
            <div class="container">
                <div class="section-head">
                    <span class="section-eyebrow reveal">{"THE COLLECTION"}</span>
                    <h2 class="section-title reveal">{"Hero Formulations"}</h2>
                    <div class="luxury-divider reveal"></div>
                </div>

                <div class="products-grid">
                    {
                        PRODUCTS.iter().enumerate().map(|(i, product)| {
                            let stagger = format!("transition-delay: {:.2}s;", 0.3 + i as f64 * 0.15);
                            html! {
                                <article key={product.id} class="product-card reveal" style={stagger}>
                                    <div class="product-visual">
                                        <div class="product-bottle">
                                            <span class="product-number">{product.id}</span>
                                        </div>
                                    </div>
                                    <div class="product-info">
                                        <span class="product-subtitle">{product.subtitle}</span>
                                        <h3 class="product-name">{product.name}</h3>
                                        <p class="product-description">{product.description}</p>
                                        <div class="product-ingredients">
                                            <span class="product-ingredients-label">{"KEY INGREDIENTS"}</span>
                                            <ul>
                                                {
                                                    product.ingredients.iter().map(|ingredient| html! {
                                                        <li key={*ingredient}>{ingredient}</li>
                                                    }).collect::<Html>()
                                                }
                                            </ul>
                                        </div>
                                        <div class="product-footer">
                                            <span class="product-price">{product.price}</span>
                                            <a href="#" class="luxury-link">{"Learn More"}</a>
                                        </div>
                                    </div>
                                </article>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
