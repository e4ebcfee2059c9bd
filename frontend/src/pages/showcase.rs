use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::content::{self, Offering};
use crate::pages::home::scroll_to_section;
use crate::Route;

// Gives the home page time to mount before looking for the contact section.
const SCROLL_AFTER_NAV_MS: u32 = 400;

#[derive(Properties, PartialEq)]
pub struct SlugProps {
    pub slug: String,
}

#[hook]
fn use_contact_cta() -> Callback<MouseEvent> {
    let navigator = use_navigator();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Home);
        }
        Timeout::new(SCROLL_AFTER_NAV_MS, || {
            scroll_to_section("contact");
        })
        .forget();
    })
}

fn offering_list(offerings: &[Offering]) -> Html {
    html! {
        <div class="offerings">
            { for offerings.iter().enumerate().map(|(i, offering)| html! {
                <div class="offering">
                    <span class="offering-number">{format!("{:02}", i + 1)}</span>
                    <h3>{offering.title}</h3>
                    <p>{offering.description}</p>
                </div>
            }) }
        </div>
    }
}

#[function_component(ServicePage)]
pub fn service_page(props: &SlugProps) -> Html {
    let start_project = use_contact_cta();
    let Some(service) = content::find_service(&props.slug) else {
        return html! { <Redirect<Route> to={Route::NotFound} /> };
    };

    html! {
        <main class="service-page">
            <section class="page-hero">
                <h1>{format!("GrowthLayer {}", service.title)}</h1>
                <p>{service.summary}</p>
            </section>
            {offering_list(service.offerings)}
            <button class="cta-button" onclick={start_project}>{"Start a project"}</button>
            <Footer />
        </main>
    }
}

#[function_component(CaseStudyPage)]
pub fn case_study_page(props: &SlugProps) -> Html {
    let start_project = use_contact_cta();
    let Some(study) = content::find_case_study(&props.slug) else {
        return html! { <Redirect<Route> to={Route::NotFound} /> };
    };

    html! {
        <main class="case-study-page">
            <section class="page-hero">
                <span class="eyebrow">{study.client}</span>
                <h1>{study.title}</h1>
                <p>{study.summary}</p>
                <div class="tags">
                    { for study.tags.iter().map(|tag| html! { <span class="tag">{*tag}</span> }) }
                </div>
            </section>
            {offering_list(study.chapters)}
            <button class="cta-button" onclick={start_project}>{"Want results like this? Let's talk"}</button>
            <Footer />
        </main>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page wandered off."}</p>
            <Link<Route> to={Route::Home} classes="cta-button">{"Back home"}</Link<Route>>
        </main>
    }
}
