//! One-shot viewport visibility gate for reveal-on-scroll sections.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Margin pulled in from the viewport edge so sections reveal slightly after
/// they start entering, matching the page's animation timing.
const ROOT_MARGIN: &str = "-100px";

/// Returns `true` once the referenced element has intersected the viewport,
/// and stays `true` for the life of the component. The observer disconnects
/// after the first hit and on unmount.
#[hook]
pub fn use_reveal(node: &NodeRef) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut observer = None;
                let mut callback = None;

                if let Some(element) = node.cast::<Element>() {
                    let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                        move |entries: Array, obs: IntersectionObserver| {
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                if entry.is_intersecting() {
                                    visible.set(true);
                                    obs.disconnect();
                                    break;
                                }
                            }
                        },
                    );

                    let mut options = IntersectionObserverInit::new();
                    options.root_margin(ROOT_MARGIN);

                    if let Ok(obs) = IntersectionObserver::new_with_options(
                        on_intersect.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        obs.observe(&element);
                        observer = Some(obs);
                    }
                    callback = Some(on_intersect);
                }

                move || {
                    if let Some(obs) = observer {
                        obs.disconnect();
                    }
                    drop(callback);
                }
            },
            node.clone(),
        );
    }

    *visible
}
