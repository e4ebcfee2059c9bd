use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::SubmissionNotice;
use crate::config::{self, SinkConfig};
use crate::contact::flow::{AutoDismiss, ContactSubmissionFlow, Outcome};
use crate::contact::form::Field;
use crate::contact::sink::{LeadSink, SheetWebhookSink};

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    #[prop_or_else(SinkConfig::from_build_env)]
    pub config: SinkConfig,
}

pub enum ContactMsg {
    Edit(Field, String),
    Submit,
    Settled(u64, Outcome),
    Expire(u64),
    Dismiss,
}

pub struct Contact {
    flow: ContactSubmissionFlow,
    sink: Rc<dyn LeadSink>,
    // Dropping the handle cancels the pending auto-dismiss.
    dismiss_timer: Option<Timeout>,
    hint: Option<&'static str>,
}

impl Component for Contact {
    type Message = ContactMsg;
    type Properties = ContactProps;

    fn create(ctx: &Context<Self>) -> Self {
        let config = ctx.props().config.clone();
        if let Err(missing) = config.credentials() {
            log::warn!("Contact form has no sink configured ({} unset)", missing);
        }
        let sink: Rc<dyn LeadSink> = Rc::new(SheetWebhookSink::new(config.request_timeout_ms));

        Self {
            flow: ContactSubmissionFlow::new(config),
            sink,
            dismiss_timer: None,
            hint: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::Edit(field, value) => {
                self.flow.update_field(field, value);
                self.hint = None;
                true
            }
            ContactMsg::Submit => {
                let Some(submission) = self.flow.begin_submit() else {
                    if self.flow.is_submitting() {
                        return false;
                    }
                    // The browser let it through, so the name is only whitespace.
                    self.hint = Some("Please enter your name.");
                    return true;
                };
                self.hint = None;
                self.dismiss_timer = None;

                let generation = submission.generation;
                let config = self.flow.config().clone();
                let sink = Rc::clone(&self.sink);
                ctx.link().send_future(async move {
                    let outcome = ContactSubmissionFlow::deliver(&config, &*sink, submission).await;
                    ContactMsg::Settled(generation, outcome)
                });
                true
            }
            ContactMsg::Settled(generation, outcome) => {
                if let Some(AutoDismiss { generation, after_ms }) = self.flow.settle(generation, &outcome) {
                    let link = ctx.link().clone();
                    self.dismiss_timer = Some(Timeout::new(after_ms, move || {
                        link.send_message(ContactMsg::Expire(generation));
                    }));
                }
                true
            }
            ContactMsg::Expire(generation) => {
                self.dismiss_timer = None;
                self.flow.expire(generation)
            }
            ContactMsg::Dismiss => {
                if self.flow.dismiss_notification() {
                    self.dismiss_timer = None;
                    true
                } else {
                    false
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let form = self.flow.form();
        let submitting = self.flow.is_submitting();

        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactMsg::Submit
        });
        let on_close = ctx.link().callback(|_: ()| ContactMsg::Dismiss);

        html! {
            <section id="contact" class="contact">
                <h2>{"Let's build something sharp"}<span class="accent">{"."}</span></h2>
                <p class="contact-lead">{"Drop the details. We'll take it from \"idea\" to \"done\"."}</p>

                <div class="contact-grid">
                    <form class="contact-form" {onsubmit}>
                        // honeypot
                        <input
                            type="text"
                            name={Field::Company.input_name()}
                            class="hidden"
                            tabindex="-1"
                            autocomplete="off"
                            value={form.value(Field::Company).to_string()}
                            oninput={Self::on_input(ctx, Field::Company)}
                        />
                        <input
                            type="text"
                            name={Field::Name.input_name()}
                            placeholder="Name"
                            required=true
                            value={form.value(Field::Name).to_string()}
                            oninput={Self::on_input(ctx, Field::Name)}
                        />
                        <input
                            type="email"
                            name={Field::Email.input_name()}
                            placeholder="Email"
                            required=true
                            value={form.value(Field::Email).to_string()}
                            oninput={Self::on_input(ctx, Field::Email)}
                        />
                        <input
                            type="tel"
                            name={Field::Phone.input_name()}
                            placeholder="Phone"
                            required=true
                            value={form.value(Field::Phone).to_string()}
                            oninput={Self::on_input(ctx, Field::Phone)}
                        />
                        <textarea
                            name={Field::Message.input_name()}
                            placeholder="What do you want to improve (website, leads, retention… or all of it)?"
                            required=true
                            rows="5"
                            value={form.value(Field::Message).to_string()}
                            oninput={Self::on_textarea_input(ctx, Field::Message)}
                        />

                        if let Some(hint) = self.hint {
                            <p class="contact-hint" role="alert">{hint}</p>
                        }
                        <button type="submit" class="contact-submit" disabled={submitting}>
                            { if submitting { "Submitting..." } else { "Send details" } }
                        </button>
                        <a href={config::BOOK_CALL_PATH} target="_blank" rel="noopener noreferrer" class="contact-book">
                            {"Schedule a call now"}
                        </a>

                        <div class="contact-socials">
                            <a href={config::WHATSAPP_LINK} target="_blank" rel="noopener noreferrer" aria-label="Chat on WhatsApp" title="WhatsApp">{"WhatsApp"}</a>
                            <a href={config::INSTAGRAM_LINK} target="_blank" rel="noopener noreferrer" aria-label="Instagram" title="Instagram">{"Instagram"}</a>
                            <a href={config::LINKEDIN_LINK} target="_blank" rel="noopener noreferrer" aria-label="LinkedIn" title="LinkedIn">{"LinkedIn"}</a>
                        </div>
                    </form>

                    <div class="contact-brief">
                        <h3>{"What to send (so we don't play 20 questions)"}</h3>
                        <p>{"Three bullets and we're locked in. Keep it short. Keep it real."}</p>
                        { for BRIEF.iter().map(|(label, example)| html! {
                            <div class="brief-item">
                                <p class="brief-label">{*label}</p>
                                <p class="brief-example">{*example}</p>
                            </div>
                        }) }
                    </div>
                </div>

                <SubmissionNotice status={self.flow.status()} {on_close} />
            </section>
        }
    }
}

const BRIEF: [(&str, &str); 3] = [
    ("Goal", "More leads / more bookings / cleaner brand"),
    ("Current setup", "Website / Instagram / WhatsApp / \"nothing yet\""),
    ("Timeline", "This week / this month / \"ASAP but sane\""),
];

impl Contact {
    fn on_input(ctx: &Context<Self>, field: Field) -> Callback<InputEvent> {
        ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactMsg::Edit(field, input.value())
        })
    }

    fn on_textarea_input(ctx: &Context<Self>, field: Field) -> Callback<InputEvent> {
        ctx.link().callback(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            ContactMsg::Edit(field, input.value())
        })
    }
}
