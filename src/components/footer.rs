use yew::prelude::*;

use crate::content::FOOTER_COLUMNS;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="footer-logo">
                            <span class="footer-logo-main">{"LUMORA"}</span>
                            <span class="footer-logo-sub">{"SKIN"}</span>
                        </div>
                        <p class="footer-tagline">
                            {"Luxury skincare rituals crafted with intention. \
                              Where science meets the art of self-care."}
                        </p>
                        <div class="footer-newsletter">
                            <span class="footer-heading">{"JOIN THE RITUAL"}</span>
                            <div class="newsletter-row">
                                <input type="email" placeholder="Your email" />
                                <button aria-label="Subscribe">{"→"}</button>
                            </div>
                        </div>
                    </div>

                    {
                        FOOTER_COLUMNS.iter().map(|(heading, links)| html! {
                            <div key={*heading} class="footer-column">
                                <span class="footer-heading">{heading}</span>
                                <ul>
                                    {
                                        links.iter().map(|link| html! {
                                            <li key={*link}><a href="#">{link}</a></li>
                                        }).collect::<Html>()
                                    }
                                </ul>
                            </div>
                        }).collect::<Html>()
                    }
                </div>

                <div class="footer-bottom">
                    <p>{"© 2024 Lumora Skin. All rights reserved."}</p>
                    <div class="footer-legal">
                        <a href="#">{"Privacy Policy"}</a>
                        <a href="#">{"Terms of Service"}</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
