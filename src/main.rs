use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

mod content;
mod particles;
mod reveal;
mod theme;

mod controllers {
    pub mod carousel;
    pub mod geom;
    pub mod slider;
}

mod components {
    pub mod before_after;
    pub mod brand_story;
    pub mod final_cta;
    pub mod footer;
    pub mod hero;
    pub mod ingredients;
    pub mod navigation;
    pub mod products;
    pub mod sustainability;
    pub mod testimonials;
}

mod pages {
    pub mod home;
}

use components::navigation::Navigation;
use pages::home::Home;

/// Navigation restyles once the page has scrolled past this point.
const NAV_SCROLL_THRESHOLD: f64 = 50.0;

#[function_component]
fn App() -> Html {
    let theme = use_state(theme::load);
    let scrolled = use_state(|| false);

    // Keep the `dark` class on <html> in sync with the flag (runs on mount
    // and after every toggle).
    {
        let theme = theme.clone();
        use_effect_with_deps(
            move |current: &theme::Theme| {
                theme::apply(*current);
                || ()
            },
            *theme,
        );
    }

    // Window scroll listener, removed on unmount.
    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = Closure::<dyn FnMut()>::new(move || {
                    if let Some(win) = web_sys::window() {
                        if let Ok(scroll_y) = win.scroll_y() {
                            scrolled.set(scroll_y > NAV_SCROLL_THRESHOLD);
                        }
                    }
                });

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = theme.toggled();
            info!("Switching theme to {}", next.as_str());
            theme::store(next);
            theme.set(next);
        })
    };

    html! {
        <>
            <Navigation scrolled={*scrolled} theme={*theme} on_toggle_theme={toggle_theme} />
            <Home />
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
