use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::NAV_LINKS;
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    /// True once the page has scrolled past the top band; the shell owns the
    /// scroll listener and passes the flag down read-only.
    pub scrolled: bool,
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let toggle_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| {
            on_toggle_theme.emit(());
        })
    };

    let theme_icon = match props.theme {
        Theme::Dark => "🌙",
        Theme::Light => "☀️",
    };

    html! {
        <header class={classes!("top-nav", props.scrolled.then_some("scrolled"))}>
            <nav class="nav-content">
                <a href="/" class="nav-logo">
                    <span class="nav-logo-main">{"LUMORA"}</span>
                    <span class="nav-logo-sub">{"SKIN"}</span>
                </a>

                <div class="nav-links">
                    {
                        NAV_LINKS.iter().map(|(name, href)| html! {
                            <a key={*name} href={*href} class="nav-link">{name}</a>
                        }).collect::<Html>()
                    }
                </div>

                <div class="nav-actions">
                    <button
                        class="theme-toggle"
                        onclick={toggle_theme.clone()}
                        aria-label="Toggle dark mode"
                    >
                        { theme_icon }
                    </button>
                    <a href="#products" class="nav-cta">{"Shop Now"}</a>
                    <button
                        class={classes!("burger-menu", menu_open.then_some("open"))}
                        onclick={toggle_menu}
                        aria-label="Toggle menu"
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </nav>

            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            {
                                NAV_LINKS.iter().map(|(name, href)| html! {
                                    <a
                                        key={*name}
                                        href={*href}
                                        class="mobile-menu-link"
                                        onclick={close_menu.clone()}
                                    >
                                        {name}
                                    </a>
                                }).collect::<Html>()
                            }
                            <a
                                href="#products"
                                class="mobile-menu-cta"
                                onclick={close_menu}
                            >
                                {"Shop Collection"}
                            </a>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </header>
    }
}
