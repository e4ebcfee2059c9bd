use log::{debug, info, warn};
use thiserror::Error;

use super::form::{ContactFormInput, Field};
use super::sink::{LeadRequest, LeadSink, SinkError};
use super::status::SubmissionStatus;
use crate::config::{HoneypotPolicy, SinkConfig};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("lead sink is not configured: {0} is missing")]
    MissingConfig(&'static str),
    #[error(transparent)]
    Sink(#[from] SinkError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    /// Honeypot was filled; nothing left the browser.
    Suppressed,
}

pub type Outcome = Result<Delivery, SubmitError>;

/// A lead captured at submit time, detached from the live form.
#[derive(Debug)]
pub struct Submission {
    pub generation: u64,
    lead: ContactFormInput,
}

/// Returned once a submission settles; the caller arms a timer with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoDismiss {
    pub generation: u64,
    pub after_ms: u32,
}

/// Form state plus the pending/success/error notification for the contact
/// section. The network call itself happens in [`ContactSubmissionFlow::deliver`]
/// so the UI can await it without holding a borrow on the flow.
#[derive(Debug)]
pub struct ContactSubmissionFlow {
    config: SinkConfig,
    form: ContactFormInput,
    status: SubmissionStatus,
    in_flight: bool,
    generation: u64,
}

impl ContactSubmissionFlow {
    pub fn new(config: SinkConfig) -> Self {
        Self {
            config,
            form: ContactFormInput::default(),
            status: SubmissionStatus::Idle,
            in_flight: false,
            generation: 0,
        }
    }

    pub fn config(&self) -> &SinkConfig {
        &self.config
    }

    pub fn form(&self) -> &ContactFormInput {
        &self.form
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    pub fn update_field(&mut self, field: Field, value: String) {
        self.form.update_field(field, value);
    }

    /// Opens the notification in `Sending`, clears the live form and hands back
    /// the captured lead. `None` means nothing happened: either the form is
    /// incomplete or an earlier submission has not settled yet.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.in_flight {
            debug!("Submit ignored, submission #{} still in flight", self.generation);
            return None;
        }
        if !self.form.is_complete() {
            debug!("Submit ignored, required fields missing");
            return None;
        }

        self.generation += 1;
        self.in_flight = true;
        self.status = SubmissionStatus::Sending;
        let lead = self.form.take_snapshot();

        info!(
            "Submission #{} started ({} chars of message)",
            self.generation,
            lead.message.len()
        );
        Some(Submission {
            generation: self.generation,
            lead,
        })
    }

    /// Sends a captured lead at most once.
    pub async fn deliver<S>(config: &SinkConfig, sink: &S, submission: Submission) -> Outcome
    where
        S: LeadSink + ?Sized,
    {
        let Submission { generation, lead } = submission;

        if lead.is_spam() && config.honeypot == HoneypotPolicy::Suppress {
            info!("Submission #{} tripped the honeypot, not sending", generation);
            return Ok(Delivery::Suppressed);
        }

        let (endpoint, token) = config.credentials().map_err(SubmitError::MissingConfig)?;
        let request = LeadRequest::new(endpoint, token, &config.page, lead);
        sink.send(&request).await?;
        Ok(Delivery::Sent)
    }

    /// Records the outcome of the submission identified by `generation`.
    pub fn settle(&mut self, generation: u64, outcome: &Outcome) -> Option<AutoDismiss> {
        if generation != self.generation || self.status != SubmissionStatus::Sending {
            debug!("Dropping stale outcome for submission #{}", generation);
            return None;
        }

        self.in_flight = false;
        self.status = match outcome {
            Ok(delivery) => {
                info!("Submission #{} settled: {:?}", generation, delivery);
                SubmissionStatus::Success
            }
            Err(e) => {
                warn!("Submission #{} failed: {}", generation, e);
                SubmissionStatus::Error
            }
        };

        self.status
            .dismiss_after(&self.config.dismiss)
            .map(|after_ms| AutoDismiss { generation, after_ms })
    }

    /// Auto-dismiss timer fired. Only closes the notice it was armed for.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.status.is_settled() {
            return false;
        }
        self.status = SubmissionStatus::Idle;
        true
    }

    /// User closed the notice. Not allowed while the outcome is still unknown.
    pub fn dismiss_notification(&mut self) -> bool {
        if self.status == SubmissionStatus::Sending || self.status == SubmissionStatus::Idle {
            return false;
        }
        self.status = SubmissionStatus::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct RecordingSink {
        reply: Result<(), SinkError>,
        seen: RefCell<Vec<LeadRequest>>,
    }

    impl RecordingSink {
        fn healthy() -> Self {
            Self {
                reply: Ok(()),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn failing(error: SinkError) -> Self {
            Self {
                reply: Err(error),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.seen.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl LeadSink for RecordingSink {
        async fn send(&self, lead: &LeadRequest) -> Result<(), SinkError> {
            self.seen.borrow_mut().push(lead.clone());
            self.reply.clone()
        }
    }

    fn configured() -> SinkConfig {
        SinkConfig::new("https://script.example/exec", "s3cret")
    }

    fn fill(flow: &mut ContactSubmissionFlow) {
        flow.update_field(Field::Name, "Ana".to_string());
        flow.update_field(Field::Email, "ana@x.com".to_string());
        flow.update_field(Field::Phone, "555-0100".to_string());
        flow.update_field(Field::Message, "Need a site".to_string());
    }

    /// Runs one submission to completion, including the auto-dismiss timer,
    /// and returns every status observed along the way.
    fn run(flow: &mut ContactSubmissionFlow, sink: &RecordingSink) -> Vec<SubmissionStatus> {
        let mut seen = vec![flow.status()];
        let submission = flow.begin_submit().expect("form should be submittable");
        let generation = submission.generation;
        seen.push(flow.status());

        let outcome = block_on(ContactSubmissionFlow::deliver(flow.config(), sink, submission));
        let timer = flow.settle(generation, &outcome).expect("settled state arms a timer");
        seen.push(flow.status());

        assert!(flow.expire(timer.generation));
        seen.push(flow.status());
        seen
    }

    #[test]
    fn healthy_sink_goes_idle_sending_success_idle() {
        let mut flow = ContactSubmissionFlow::new(configured());
        let sink = RecordingSink::healthy();
        fill(&mut flow);

        let statuses = run(&mut flow, &sink);

        use SubmissionStatus::*;
        assert_eq!(statuses, vec![Idle, Sending, Success, Idle]);
        assert_eq!(sink.calls(), 1);

        let sent = &sink.seen.borrow()[0];
        assert_eq!(sent.name, "Ana");
        assert_eq!(sent.email, "ana@x.com");
        assert_eq!(sent.phone, "555-0100");
        assert_eq!(sent.message, "Need a site");
        assert_eq!(sent.token, "s3cret");
        assert_eq!(sent.page, "contact");
    }

    #[test]
    fn failing_sink_goes_through_error_with_longer_delay() {
        let mut flow = ContactSubmissionFlow::new(configured());
        let sink = RecordingSink::failing(SinkError::Status(502));
        fill(&mut flow);

        let submission = flow.begin_submit().unwrap();
        let generation = submission.generation;
        let outcome = block_on(ContactSubmissionFlow::deliver(flow.config(), &sink, submission));
        assert_eq!(outcome, Err(SubmitError::Sink(SinkError::Status(502))));

        let timer = flow.settle(generation, &outcome).unwrap();
        assert_eq!(flow.status(), SubmissionStatus::Error);
        assert_eq!(timer.after_ms, 3_200);
        assert!(!flow.is_submitting());

        assert!(flow.expire(generation));
        assert_eq!(flow.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn form_is_cleared_as_soon_as_submit_starts() {
        let mut flow = ContactSubmissionFlow::new(configured());
        fill(&mut flow);

        let submission = flow.begin_submit().unwrap();

        assert_eq!(*flow.form(), ContactFormInput::default());
        assert_eq!(flow.status(), SubmissionStatus::Sending);
        assert!(flow.is_submitting());
        assert_eq!(submission.lead.name, "Ana");
    }

    #[test]
    fn incomplete_form_does_nothing() {
        let mut flow = ContactSubmissionFlow::new(configured());
        flow.update_field(Field::Name, "Ana".to_string());

        assert!(flow.begin_submit().is_none());
        assert_eq!(flow.status(), SubmissionStatus::Idle);
        assert_eq!(flow.form().name, "Ana");
        assert!(!flow.is_submitting());
    }

    #[test]
    fn second_submit_while_sending_is_ignored() {
        let mut flow = ContactSubmissionFlow::new(configured());
        let sink = RecordingSink::healthy();
        fill(&mut flow);

        let first = flow.begin_submit().unwrap();
        let generation = first.generation;

        fill(&mut flow);
        flow.update_field(Field::Name, "Someone else".to_string());
        assert!(flow.begin_submit().is_none());
        // the retyped values stay in the live form, untouched
        assert_eq!(flow.form().name, "Someone else");

        let outcome = block_on(ContactSubmissionFlow::deliver(flow.config(), &sink, first));
        flow.settle(generation, &outcome);

        assert_eq!(sink.calls(), 1);
        assert_eq!(sink.seen.borrow()[0].name, "Ana");
    }

    #[test]
    fn edits_during_flight_do_not_touch_the_snapshot() {
        let mut flow = ContactSubmissionFlow::new(configured());
        let sink = RecordingSink::healthy();
        fill(&mut flow);

        let submission = flow.begin_submit().unwrap();
        flow.update_field(Field::Message, "changed my mind".to_string());
        block_on(ContactSubmissionFlow::deliver(flow.config(), &sink, submission)).unwrap();

        assert_eq!(sink.seen.borrow()[0].message, "Need a site");
    }

    #[test]
    fn honeypot_submission_never_reaches_the_sink() {
        let mut flow = ContactSubmissionFlow::new(configured());
        let sink = RecordingSink::healthy();
        fill(&mut flow);
        flow.update_field(Field::Company, "Spam Inc".to_string());

        let statuses = run(&mut flow, &sink);

        use SubmissionStatus::*;
        assert_eq!(statuses, vec![Idle, Sending, Success, Idle]);
        assert_eq!(sink.calls(), 0);
    }

    #[test]
    fn whitespace_honeypot_is_still_suppressed() {
        let mut flow = ContactSubmissionFlow::new(configured());
        let sink = RecordingSink::healthy();
        fill(&mut flow);
        flow.update_field(Field::Company, " ".to_string());

        let submission = flow.begin_submit().unwrap();
        let outcome = block_on(ContactSubmissionFlow::deliver(flow.config(), &sink, submission));

        assert_eq!(outcome, Ok(Delivery::Suppressed));
        assert_eq!(sink.calls(), 0);
    }

    #[test]
    fn blank_message_is_submitted_like_the_browser_allows() {
        let mut flow = ContactSubmissionFlow::new(configured());
        let sink = RecordingSink::healthy();
        fill(&mut flow);
        flow.update_field(Field::Message, "   ".to_string());

        let statuses = run(&mut flow, &sink);

        use SubmissionStatus::*;
        assert_eq!(statuses, vec![Idle, Sending, Success, Idle]);
        assert_eq!(sink.calls(), 1);
    }

    #[test]
    fn honeypot_is_suppressed_even_without_config() {
        let mut flow = ContactSubmissionFlow::new(SinkConfig::default());
        fill(&mut flow);
        flow.update_field(Field::Company, "bot".to_string());

        let submission = flow.begin_submit().unwrap();
        let outcome = block_on(ContactSubmissionFlow::deliver(
            flow.config(),
            &RecordingSink::healthy(),
            submission,
        ));
        assert_eq!(outcome, Ok(Delivery::Suppressed));
    }

    #[test]
    fn forward_policy_sends_honeypot_value_along() {
        let config = configured().with_honeypot(HoneypotPolicy::Forward);
        let mut flow = ContactSubmissionFlow::new(config);
        let sink = RecordingSink::healthy();
        fill(&mut flow);
        flow.update_field(Field::Company, "Spam Inc".to_string());

        run(&mut flow, &sink);

        assert_eq!(sink.calls(), 1);
        assert_eq!(sink.seen.borrow()[0].company, "Spam Inc");
    }

    #[test]
    fn missing_config_errors_without_network() {
        let sink = RecordingSink::healthy();

        for config in [
            SinkConfig::default(),
            SinkConfig::new("https://script.example/exec", ""),
            SinkConfig::new("", "s3cret"),
        ] {
            let mut flow = ContactSubmissionFlow::new(config);
            fill(&mut flow);

            let statuses = run(&mut flow, &sink);

            use SubmissionStatus::*;
            assert_eq!(statuses, vec![Idle, Sending, Error, Idle]);
        }
        assert_eq!(sink.calls(), 0);
    }

    #[test]
    fn dismiss_is_ignored_while_sending() {
        let mut flow = ContactSubmissionFlow::new(configured());
        fill(&mut flow);
        let submission = flow.begin_submit().unwrap();

        assert!(!flow.dismiss_notification());
        assert_eq!(flow.status(), SubmissionStatus::Sending);

        let outcome = block_on(ContactSubmissionFlow::deliver(
            flow.config(),
            &RecordingSink::healthy(),
            submission,
        ));
        flow.settle(1, &outcome);

        assert!(flow.dismiss_notification());
        assert_eq!(flow.status(), SubmissionStatus::Idle);
        assert!(!flow.dismiss_notification());
    }

    #[test]
    fn stale_timer_does_not_close_a_newer_submission() {
        let mut flow = ContactSubmissionFlow::new(configured());
        let sink = RecordingSink::healthy();

        fill(&mut flow);
        let first = flow.begin_submit().unwrap();
        let outcome = block_on(ContactSubmissionFlow::deliver(flow.config(), &sink, first));
        let old_timer = flow.settle(1, &outcome).unwrap();
        flow.dismiss_notification();

        fill(&mut flow);
        let second = flow.begin_submit().unwrap();
        assert_eq!(second.generation, 2);

        assert!(!flow.expire(old_timer.generation));
        assert_eq!(flow.status(), SubmissionStatus::Sending);

        // an outcome tagged with the old generation is ignored as well
        assert_eq!(flow.settle(1, &Ok(Delivery::Sent)), None);
        assert!(flow.is_submitting());
    }

    #[test]
    fn flow_is_reusable_across_submissions() {
        let mut flow = ContactSubmissionFlow::new(configured());
        let sink = RecordingSink::healthy();

        for _ in 0..3 {
            fill(&mut flow);
            let statuses = run(&mut flow, &sink);
            assert_eq!(statuses.last(), Some(&SubmissionStatus::Idle));
        }
        assert_eq!(sink.calls(), 3);
    }
}
