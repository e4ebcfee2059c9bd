use log::debug;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::content::{CASE_STUDIES, SERVICES};
use crate::Route;

/// Scrolls the element with the given id into view, if it is on the page.
pub fn scroll_to_section(id: &str) -> bool {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match element {
        Some(element) => {
            element.scroll_into_view();
            true
        }
        None => {
            debug!("No section #{} to scroll to", id);
            false
        }
    }
}

/// Section id from a location hash like `#contact`.
pub fn section_from_hash(hash: &str) -> Option<&str> {
    let id = hash.strip_prefix('#').unwrap_or(hash).trim();
    (!id.is_empty()).then_some(id)
}

const PRINCIPLES: [(&str, &str, &str); 3] = [
    (
        "01",
        "Strategic Thinking",
        "Every project starts with a sharp strategy, so your brand moves with intention and not just motion.",
    ),
    (
        "02",
        "Design That Speaks",
        "We craft visuals and experiences that don't just look good. They leave a lasting impression.",
    ),
    (
        "03",
        "Systems That Scale",
        "Our automation-first approach lets your brand grow without adding chaos or manual work.",
    ),
];

#[function_component(Home)]
pub fn home() -> Html {
    // Arriving from another page via `/#section`.
    use_effect_with_deps(
        |_| {
            let hash = web_sys::window()
                .and_then(|w| w.location().hash().ok())
                .unwrap_or_default();
            if let Some(id) = section_from_hash(&hash) {
                scroll_to_section(id);
            }
            || ()
        },
        (),
    );

    html! {
        <main class="home">
            <section class="hero">
                <h1>{"Engineering Brands"}</h1>
                <p>{"Creatives, websites and automations for businesses that want to grow on purpose."}</p>
                <a href="#contact" class="cta-button">{"Get in Touch"}</a>
            </section>

            <section id="about" class="about">
                <p>{"We build with clarity and intention."}</p>
                <p>{"We tell stories that leave an impression."}</p>
                <p>{"We automate what matters to scale brands."}</p>
            </section>

            <section id="services" class="services">
                <h2>{"What we do"}</h2>
                <div class="card-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <Link<Route> to={Route::Service { slug: service.slug.to_string() }} classes="service-card">
                            <h3>{service.title}</h3>
                            <p>{service.summary}</p>
                        </Link<Route>>
                    }) }
                </div>
            </section>

            <section id="work" class="work">
                <h2>{"Selected work"}</h2>
                <div class="card-grid">
                    { for CASE_STUDIES.iter().map(|study| html! {
                        <div class="case-card">
                            <h3>{study.title}</h3>
                            <p>{study.summary}</p>
                            <div class="tags">
                                { for study.tags.iter().map(|tag| html! { <span class="tag">{*tag}</span> }) }
                            </div>
                            <Link<Route> to={Route::CaseStudy { slug: study.slug.to_string() }} classes="case-link">
                                {"View case study →"}
                            </Link<Route>>
                        </div>
                    }) }
                </div>
            </section>

            <section class="why-different">
                <h2>{"Why we're different"}</h2>
                { for PRINCIPLES.iter().map(|(number, title, description)| html! {
                    <div class="principle">
                        <span class="principle-number">{*number}</span>
                        <h3>{*title}</h3>
                        <p>{*description}</p>
                    </div>
                }) }
            </section>

            <Contact />
            <Footer />
        </main>
    }
}
