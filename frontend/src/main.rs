use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

mod config;
mod content;
mod contact {
    pub mod flow;
    pub mod form;
    pub mod sink;
    pub mod status;
}
mod components {
    pub mod contact;
    pub mod footer;
    pub mod notification;
}
mod pages {
    pub mod book_call;
    pub mod home;
    pub mod showcase;
}

use pages::{
    book_call::BookCall,
    home::Home,
    showcase::{CaseStudyPage, NotFound, ServicePage},
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/book")]
    BookCall,
    #[at("/case-studies/:slug")]
    CaseStudy { slug: String },
    #[at("/services/:slug")]
    Service { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::BookCall => {
            info!("Rendering Book a Call page");
            html! { <BookCall /> }
        },
        Route::CaseStudy { slug } => {
            info!("Rendering case study {}", slug);
            html! { <CaseStudyPage {slug} /> }
        },
        Route::Service { slug } => {
            info!("Rendering service {}", slug);
            html! { <ServicePage {slug} /> }
        },
        Route::NotFound => {
            info!("Rendering 404 page");
            html! { <NotFound /> }
        },
    }
}

const NAV_LINKS: [(&str, &str); 4] = [
    ("About", "/#about"),
    ("Services", "/#services"),
    ("Work", "/#work"),
    ("Contact", "/#contact"),
];

/// The bar is see-through only at the top of the home page.
fn nav_is_transparent(route: Option<&Route>, scrolled: bool) -> bool {
    matches!(route, Some(Route::Home)) && !scrolled
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let route = use_route::<Route>();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let scroll_y = window
                        .as_ref()
                        .and_then(|w| w.scroll_y().ok())
                        .unwrap_or(0.0);
                    is_scrolled.set(scroll_y > 50.0);
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = &window {
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
        <nav class={classes!("top-nav", (!nav_is_transparent(route.as_ref(), *is_scrolled)).then(|| "solid"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"GrowthLayer"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|(label, href)| html! {
                        <a href={*href} class="nav-link" onclick={close_menu.clone()}>{*label}</a>
                    }) }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::BookCall} classes="nav-cta">
                            {"Book a call"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
