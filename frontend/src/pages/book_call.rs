use yew::prelude::*;

use crate::components::footer::Footer;
use crate::config;

#[function_component(BookCall)]
pub fn book_call() -> Html {
    html! {
        <main class="book-call">
            <h1>{"Book a Call"}</h1>
            <p>{"Pick a slot that works for you. You'll instantly get a confirmation + calendar invite."}</p>

            <div class="booking-frame">
                <iframe
                    title="Book a call"
                    src={config::BOOKING_EMBED_URL}
                    frameborder="0"
                    sandbox={config::BOOKING_FRAME_SANDBOX}
                    allow="clipboard-write; fullscreen"
                />
            </div>

            <p class="booking-fallback">
                {"If this doesn't load, "}
                <a href={config::BOOKING_DIRECT_URL} target="_blank" rel="noreferrer">{"open booking in a new tab"}</a>
                {"."}
            </p>
            <Footer />
        </main>
    }
}
