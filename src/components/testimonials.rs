use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{Testimonial, TESTIMONIALS};
use crate::controllers::carousel::Carousel;
use crate::reveal::use_reveal;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let section = use_node_ref();
    let in_view = use_reveal(&section);
    let carousel = use_state(|| Carousel::<'static, Testimonial>::new(TESTIMONIALS));

    let on_previous = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            let mut state = (*carousel).clone();
            state.previous();
            carousel.set(state);
        })
    };

    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            let mut state = (*carousel).clone();
            state.next();
            carousel.set(state);
        })
    };

    let current = carousel.current();

    html! {
        <section ref={section} class={classes!("testimonials-section", in_view.then_some("in-view"))}>
            <div class="container">
                <div class="section-head">
                    <span class="section-eyebrow reveal">{"TESTIMONIALS"}</span>
                    <h2 class="section-title reveal">{"In Their Words"}</h2>
                    <div class="luxury-divider reveal"></div>
                </div>

                <div class="carousel reveal">
                    // Keyed on the index so the slide transition restarts on
                    // every navigation.
                    <div key={carousel.index()} class="carousel-slide">
                        <span class="carousel-quote-mark">{"\u{201c}"}</span>
                        <blockquote class="carousel-quote">{current.quote}</blockquote>
                        <div class="carousel-stars">
                            {
                                (0..current.rating).map(|i| html! {
                                    <span key={i} class="star">{"★"}</span>
                                }).collect::<Html>()
                            }
                        </div>
                        <p class="carousel-name">{current.name}</p>
                        <p class="carousel-title">{current.title}</p>
                    </div>

                    <div class="carousel-nav">
                        <button
                            class="carousel-arrow"
                            onclick={on_previous}
                            aria-label="Previous testimonial"
                        >
                            {"‹"}
                        </button>

                        <div class="carousel-dots">
                            {
                                (0..carousel.len()).map(|i| {
                                    let on_dot = {
                                        let carousel = carousel.clone();
                                        Callback::from(move |_: MouseEvent| {
                                            let mut state = (*carousel).clone();
                                            state.go_to(i);
                                            carousel.set(state);
                                        })
                                    };
                                    html! {
                                        <button
                                            key={i}
                                            class={classes!("carousel-dot", (i == carousel.index()).then_some("active"))}
                                            onclick={on_dot}
                                            aria-label={format!("Go to testimonial {}", i + 1)}
                                        ></button>
                                    }
                                }).collect::<Html>()
                            }
                        </div>

                        <button
                            class="carousel-arrow"
                            onclick={on_next}
                            aria-label="Next testimonial"
                        >
                            {"›"}
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
