use web_sys::{Element, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::controllers::geom::HBounds;
use crate::controllers::slider::SliderState;
use crate::reveal::use_reveal;

fn bounds_of(container: &NodeRef) -> Option<HBounds> {
    let element = container.cast::<Element>()?;
    let rect = element.get_bounding_client_rect();
    Some(HBounds { left: rect.left(), width: rect.width() })
}

#[function_component(BeforeAfter)]
pub fn before_after() -> Html {
    let section = use_node_ref();
    let in_view = use_reveal(&section);
    let container = use_node_ref();
    let slider = use_state(SliderState::default);

    let on_mouse_down = {
        let slider = slider.clone();
        Callback::from(move |_: MouseEvent| {
            let mut state = *slider;
            state.begin_drag();
            slider.set(state);
        })
    };

    // Leaving the region ends the drag so the divider stops tracking the
    // pointer outside the image.
    let on_mouse_up = {
        let slider = slider.clone();
        Callback::from(move |_: MouseEvent| {
            let mut state = *slider;
            state.end_drag();
            slider.set(state);
        })
    };
    let on_mouse_leave = on_mouse_up.clone();

    let on_mouse_move = {
        let slider = slider.clone();
        let container = container.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(bounds) = bounds_of(&container) {
                let mut state = *slider;
                state.update_from_pointer(e.client_x() as f64, bounds);
                if state != *slider {
                    slider.set(state);
                }
            }
        })
    };

    let on_touch_move = {
        let slider = slider.clone();
        let container = container.clone();
        Callback::from(move |e: TouchEvent| {
            if let (Some(touch), Some(bounds)) = (e.touches().get(0), bounds_of(&container)) {
                let mut state = *slider;
                state.update_from_touch(touch.client_x() as f64, bounds);
                if state != *slider {
                    slider.set(state);
                }
            }
        })
    };

    let position = slider.position();
    let after_clip = format!("clip-path: inset(0 {:.2}% 0 0);", 100.0 - position);
    let handle_left = format!("left: {position:.2}%;");

    html! {
        <section ref={section} id="results" class={classes!("results-section", in_view.then_some("in-view"))}>
            <div class="container">
                <div class="section-head">
                    <span class="section-eyebrow reveal">{"TRANSFORMATIONS"}</span>
                    <h2 class="section-title reveal">
                        {"Visible Results"}
                        <br />
                        <em>{"in Weeks"}</em>
                    </h2>
                    <div class="luxury-divider reveal"></div>
                </div>

                <div class="compare-wrap reveal">
                    <div
                        ref={container}
                        class="compare-frame"
                        onmousedown={on_mouse_down}
                        onmouseup={on_mouse_up}
                        onmouseleave={on_mouse_leave}
                        onmousemove={on_mouse_move}
                        ontouchmove={on_touch_move}
                    >
                        <div class="compare-before">
                            <div class="compare-caption">
                                <span class="compare-word">{"Before"}</span>
                                <p>{"Day 1"}</p>
                            </div>
                        </div>

                        <div class="compare-after" style={after_clip}>
                            <div class="compare-caption">
                                <span class="compare-word">{"After"}</span>
                                <p>{"Week 8"}</p>
                            </div>
                        </div>

                        <div class="compare-handle" style={handle_left}>
                            <div class="compare-grip">
                                <span></span>
                                <span></span>
                            </div>
                        </div>

                        <span class="compare-label left">{"BEFORE"}</span>
                        <span class="compare-label right">{"AFTER"}</span>
                    </div>

                    <p class="compare-footnote reveal">
                        {"Results after 8 weeks of consistent use. Individual results may vary."}
                    </p>
                </div>
            </div>
        </section>
    }
}
