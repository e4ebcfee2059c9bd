use yew::prelude::*;

use crate::config;
use crate::contact::status::SubmissionStatus;

#[derive(Properties, PartialEq)]
pub struct SubmissionNoticeProps {
    pub status: SubmissionStatus,
    pub on_close: Callback<()>,
}

/// Modal shown over the contact section while a lead is being sent and
/// briefly after it settles.
#[function_component(SubmissionNotice)]
pub fn submission_notice(props: &SubmissionNoticeProps) -> Html {
    let status = props.status;
    if !status.is_visible() {
        return html! {};
    }

    let sending = status == SubmissionStatus::Sending;
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            if !sending {
                on_close.emit(());
            }
        })
    };

    let footer = match status {
        SubmissionStatus::Success => html! {
            <div class="notice-actions">
                <a href={config::BOOK_CALL_PATH} target="_blank" rel="noopener noreferrer" class="notice-cta">
                    {"Book a call now"}
                </a>
                <div class="notice-progress"><div class="notice-progress-bar full"></div></div>
            </div>
        },
        SubmissionStatus::Error => html! {
            <div class="notice-actions split">
                <a href={config::WHATSAPP_LINK} target="_blank" rel="noopener noreferrer" class="notice-whatsapp" aria-label="Chat on WhatsApp">
                    {"WhatsApp"}
                </a>
                <button class="notice-secondary" onclick={close.clone()}>{"Close"}</button>
            </div>
        },
        _ => html! {
            <div class="notice-progress"><div class="notice-progress-bar pulsing"></div></div>
        },
    };

    html! {
        <div class="notice-overlay" role="dialog" aria-modal="true">
            <div class="notice-backdrop" onclick={close.clone()}></div>
            <div class="notice-card">
                <div class="notice-header">
                    <div>
                        <h4>{status.title()}</h4>
                        <p>{status.body()}</p>
                    </div>
                    <button class="notice-close" onclick={close} disabled={sending} aria-label="Close">
                        {"✕"}
                    </button>
                </div>
                {footer}
            </div>
        </div>
    }
}
