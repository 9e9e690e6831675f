use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod analytics;
mod config;
mod content;
mod scroll;
mod session;
mod termsprivacy;
mod contact {
    pub mod client;
    pub mod fields;
    pub mod form;
    pub mod form_state;
    pub mod submission;
    pub mod validation;
}
mod components {
    pub mod faq;
    pub mod modal;
    pub mod pricing;
}
mod hooks {
    pub mod use_page_analytics;
    pub mod use_scroll_reveal;
}
mod pages {
    pub mod landing;
}

use analytics::Analytics;
use pages::landing::Landing;
use scroll::{NavbarAppearance, NavbarScroll};
use termsprivacy::TermsAndConditions;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/terms")]
    Terms,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsAndConditions /> }
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

const NAV_LINKS: &[(&str, &str)] = &[
    ("#curriculum", "Curriculum"),
    ("#pricing", "Pricing"),
    ("#faq", "FAQ"),
    ("#contact", "Contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let appearance = use_state(NavbarAppearance::default);
    let on_landing = use_route::<Route>() == Some(Route::Home);

    {
        let appearance = appearance.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let listener = window.map(|window| {
                let initial = window.scroll_y().unwrap_or(0.0);
                let tracker = Rc::new(RefCell::new(NavbarScroll::new(initial)));
                let target = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = target.scroll_y().unwrap_or(0.0);
                    appearance.set(tracker.borrow_mut().on_scroll(scroll_y));
                }) as Box<dyn FnMut()>);

                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                (window, scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

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

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav
            id="navbar"
            class={classes!(
                "top-nav",
                appearance.elevated.then(|| "scrolled"),
                appearance.hidden.then(|| "nav-hidden"),
            )}
        >
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"pythonwebcourse"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    if on_landing {
                        { for NAV_LINKS.iter().map(|(href, label)| html! {
                            <a href={*href} class="nav-link" onclick={close_menu.clone()}>{ *label }</a>
                        }) }
                    } else {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={Route::Home} classes="nav-link">
                                {"Back to the course"}
                            </Link<Route>>
                        </div>
                    }
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 900;
                    background: rgba(252, 252, 249, 0.95);
                    transition: transform 0.3s ease, box-shadow 0.3s ease, background 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(252, 252, 249, 0.98);
                    box-shadow: var(--shadow-md);
                }
                .top-nav.nav-hidden {
                    transform: translateY(-100%);
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let analytics = use_state(Analytics::console);

    html! {
        <ContextProvider<Analytics> context={(*analytics).clone()}>
            <BrowserRouter>
                <Nav />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Analytics>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(Level::Info) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
