use crate::config::DismissDelays;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn is_settled(self) -> bool {
        matches!(self, SubmissionStatus::Success | SubmissionStatus::Error)
    }

    /// The notification is on screen for every state except `Idle`.
    pub fn is_visible(self) -> bool {
        self != SubmissionStatus::Idle
    }

    pub fn title(self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "",
            SubmissionStatus::Sending => "Sending",
            SubmissionStatus::Success => "Sent",
            SubmissionStatus::Error => "Didn't go through",
        }
    }

    pub fn body(self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "",
            SubmissionStatus::Sending => "Saving this to our sheet.",
            SubmissionStatus::Success => "We've got it. You'll hear back soon.",
            SubmissionStatus::Error => "Try again or message us on WhatsApp.",
        }
    }

    pub fn dismiss_after(self, delays: &DismissDelays) -> Option<u32> {
        match self {
            SubmissionStatus::Success => Some(delays.success_ms),
            SubmissionStatus::Error => Some(delays.error_ms),
            SubmissionStatus::Idle | SubmissionStatus::Sending => None,
        }
    }
}
