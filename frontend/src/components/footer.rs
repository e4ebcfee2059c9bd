use chrono::Datelike;
use yew::prelude::*;

use crate::config;

const SECTION_LINKS: [(&str, &str); 5] = [
    ("Home", "/"),
    ("About", "/#about"),
    ("Services", "/#services"),
    ("Work", "/#work"),
    ("Contact", "/#contact"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-top">
                <div class="footer-brand">
                    <h3><span class="accent">{"GrowthLayer"}</span>{" Studio"}</h3>
                    <p>{"Engineering brands for the digital age"}</p>
                </div>
                <nav class="footer-links">
                    { for SECTION_LINKS.iter().map(|(label, href)| html! {
                        <a href={*href}>{*label}</a>
                    }) }
                </nav>
                <div class="footer-socials">
                    <a href={config::INSTAGRAM_LINK} target="_blank" rel="noopener noreferrer" aria-label="Instagram">{"Instagram"}</a>
                    <a href={config::LINKEDIN_LINK} target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">{"LinkedIn"}</a>
                    <a href={config::WHATSAPP_LINK} target="_blank" rel="noopener noreferrer" aria-label="WhatsApp">{"WhatsApp"}</a>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} GrowthLayer Studio. All rights reserved.", year)}</p>
            </div>
        </footer>
    }
}
