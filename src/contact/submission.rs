//! Submission controller for the contact form.
//!
//! The controller owns the form state and the submit phase. It never touches
//! the network itself: `begin` hands back the payload to post, and `finish`
//! takes whatever came back.

use log::{error, info};
use serde::Deserialize;
use thiserror::Error;

use super::fields::{INTEREST, PHONE};
use super::form_state::FormState;
use super::validation::FieldAnnotations;
use crate::analytics::{AnalyticsEvent, AnalyticsSink};
use crate::config::FALLBACK_CONTACT_EMAIL;

pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to send message";
pub const SUBMIT_LABEL: &str = "Send Message";
pub const SUBMITTING_LABEL: &str = "Sending...";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("{0}")]
    Network(String),
    #[error("{0}")]
    Rejected(String),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

pub type SubmissionResult = Result<(), SubmissionError>;

#[derive(Debug, Default, Deserialize)]
struct CollectorReply {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    error: Option<String>,
}

/// Maps the collector's HTTP status and body to a submission result.
///
/// Only a 2xx reply whose body says `"success": true` counts as delivered.
pub fn interpret_response(ok: bool, body: &str) -> SubmissionResult {
    let parsed = serde_json::from_str::<CollectorReply>(body);
    if !ok {
        let reply = parsed.unwrap_or_default();
        return Err(SubmissionError::Rejected(
            reply.error.unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
        ));
    }
    let reply = parsed.map_err(|e| SubmissionError::MalformedResponse(e.to_string()))?;
    match reply.success {
        Some(true) => Ok(()),
        _ => Err(SubmissionError::Rejected(
            reply.error.unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
        )),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed,
}

/// What the form should do with a submit event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// A request is already in flight; the event is ignored.
    Busy,
    /// Validation failed; nothing is sent.
    Invalid(FieldAnnotations),
    /// Post these fields to the collector.
    Send(Vec<(&'static str, String)>),
}

/// Presentation of the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerState {
    pub label: &'static str,
    pub disabled: bool,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct InFlight {
    plan: String,
    interest_level: String,
    has_phone: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionController {
    form: FormState,
    phase: SubmitPhase,
    in_flight: Option<InFlight>,
    form_error: Option<String>,
}

impl Default for SubmissionController {
    fn default() -> Self {
        Self::new(FormState::default())
    }
}

impl SubmissionController {
    pub fn new(form: FormState) -> Self {
        Self {
            form,
            phase: SubmitPhase::Idle,
            in_flight: None,
            form_error: None,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    #[cfg(test)]
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Form-level error text, without the fallback contact line.
    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    pub fn trigger(&self) -> TriggerState {
        match self.phase {
            SubmitPhase::Idle => TriggerState {
                label: SUBMIT_LABEL,
                disabled: false,
                loading: false,
            },
            SubmitPhase::Submitting => TriggerState {
                label: SUBMITTING_LABEL,
                disabled: true,
                loading: true,
            },
        }
    }

    /// Handles a submit event. `plan` is the plan selected at this moment; it
    /// is remembered for the analytics record of this attempt.
    pub fn begin(&mut self, plan: &str) -> SubmitAttempt {
        if self.phase == SubmitPhase::Submitting {
            return SubmitAttempt::Busy;
        }
        if !self.form.validate() {
            return SubmitAttempt::Invalid(self.form.annotations());
        }

        self.phase = SubmitPhase::Submitting;
        self.in_flight = Some(InFlight {
            plan: plan.to_string(),
            interest_level: self.form.value(INTEREST).to_string(),
            has_phone: !self.form.value(PHONE).trim().is_empty(),
        });
        SubmitAttempt::Send(self.form.entries())
    }

    /// Settles the in-flight request and returns to `Idle`. A result with no
    /// request in flight is ignored.
    pub fn finish(&mut self, result: SubmissionResult, sink: &dyn AnalyticsSink) -> Option<Outcome> {
        let in_flight = self.in_flight.take()?;
        self.phase = SubmitPhase::Idle;

        let outcome = match result {
            Ok(()) => {
                info!("Contact form delivered");
                self.form.reset();
                self.form_error = None;
                sink.record(
                    AnalyticsEvent::new("contact_form_submitted")
                        .with("plan", in_flight.plan)
                        .with("interest_level", in_flight.interest_level)
                        .with("has_phone", in_flight.has_phone)
                        .with("success", true),
                );
                Outcome::Succeeded
            }
            Err(e) => {
                error!("Form submission error: {}", e);
                self.form_error = Some(failure_notice());
                sink.record(
                    AnalyticsEvent::new("contact_form_error")
                        .with("plan", in_flight.plan)
                        .with("error", e.to_string()),
                );
                Outcome::Failed
            }
        };
        Some(outcome)
    }

    pub fn dismiss_error(&mut self) {
        self.form_error = None;
    }
}

pub fn failure_notice() -> String {
    format!(
        "Something went wrong. Please try again or email us directly at {}.",
        FALLBACK_CONTACT_EMAIL
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::testing::RecordingSink;
    use crate::contact::fields::{EMAIL, MESSAGE, NAME};
    use crate::contact::validation::REQUIRED_MESSAGE;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn ready_controller() -> SubmissionController {
        let mut form = FormState::default();
        form.input(NAME, "Ada".into());
        form.input(EMAIL, "ada@example.com".into());
        form.input(INTEREST, "ready".into());
        form.input(MESSAGE, "Hi".into());
        SubmissionController::new(form)
    }

    mod responses {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn ok_with_success_is_delivered() {
            assert_eq!(interpret_response(true, r#"{"success":true}"#), Ok(()));
        }

        #[test]
        fn not_ok_without_body_uses_default_message() {
            assert_eq!(
                interpret_response(false, ""),
                Err(SubmissionError::Rejected(DEFAULT_FAILURE_MESSAGE.into()))
            );
        }

        #[test]
        fn not_ok_carries_collector_error() {
            assert_eq!(
                interpret_response(false, r#"{"success":false,"error":"Rate limited"}"#),
                Err(SubmissionError::Rejected("Rate limited".into()))
            );
        }

        #[test]
        fn success_false_carries_collector_error() {
            assert_eq!(
                interpret_response(true, r#"{"success":false,"error":"X"}"#),
                Err(SubmissionError::Rejected("X".into()))
            );
        }

        #[test]
        fn missing_success_key_is_a_failure() {
            assert_eq!(
                interpret_response(true, r#"{"ok":true}"#),
                Err(SubmissionError::Rejected(DEFAULT_FAILURE_MESSAGE.into()))
            );
        }

        #[test]
        fn unparseable_body_is_a_failure() {
            assert!(matches!(
                interpret_response(true, "<html>oops</html>"),
                Err(SubmissionError::MalformedResponse(_))
            ));
        }
    }

    #[test]
    fn empty_required_fields_never_send() {
        let mut controller = SubmissionController::default();
        match controller.begin("") {
            SubmitAttempt::Invalid(annotations) => {
                assert_eq!(annotations.message_for(NAME), Some(REQUIRED_MESSAGE));
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
        assert_eq!(controller.phase(), SubmitPhase::Idle);
        assert_eq!(controller.form().error(NAME), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut controller = ready_controller();
        assert!(matches!(controller.begin("Cohort"), SubmitAttempt::Send(_)));
        assert_eq!(controller.phase(), SubmitPhase::Submitting);
        assert_eq!(controller.begin("Cohort"), SubmitAttempt::Busy);
        assert_eq!(controller.phase(), SubmitPhase::Submitting);
    }

    #[test]
    fn send_carries_every_field() {
        let mut controller = ready_controller();
        let SubmitAttempt::Send(entries) = controller.begin("") else {
            panic!("expected to send");
        };
        assert_eq!(
            entries,
            vec![
                ("name", "Ada".to_string()),
                ("email", "ada@example.com".to_string()),
                ("phone", String::new()),
                ("interest", "ready".to_string()),
                ("message", "Hi".to_string()),
            ]
        );
    }

    #[test]
    fn trigger_is_disabled_only_while_submitting() {
        let mut controller = ready_controller();
        let idle = controller.trigger();
        assert_eq!(idle.label, SUBMIT_LABEL);
        assert!(!idle.disabled && !idle.loading);

        controller.begin("");
        let busy = controller.trigger();
        assert_eq!(busy.label, SUBMITTING_LABEL);
        assert!(busy.disabled && busy.loading);
    }

    #[test]
    fn success_clears_form_and_records_once() {
        let sink = RecordingSink::default();
        let mut controller = ready_controller();
        controller.begin("Cohort Pro");

        let outcome = controller.finish(interpret_response(true, r#"{"success":true}"#), &sink);

        assert_eq!(outcome, Some(Outcome::Succeeded));
        assert_eq!(controller.form(), &FormState::default());
        assert_eq!(controller.form_error(), None);

        let events = sink.events.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event, "contact_form_submitted");
        assert_eq!(events[0].get("plan"), Some(&json!("Cohort Pro")));
        assert_eq!(events[0].get("interest_level"), Some(&json!("ready")));
        assert_eq!(events[0].get("has_phone"), Some(&json!(false)));
        assert_eq!(events[0].get("success"), Some(&json!(true)));
    }

    #[test]
    fn rejected_keeps_fields_and_records_error() {
        let sink = RecordingSink::default();
        let mut controller = ready_controller();
        let before = controller.form().clone();
        controller.begin("Starter");

        let outcome = controller.finish(
            interpret_response(true, r#"{"success":false,"error":"X"}"#),
            &sink,
        );

        assert_eq!(outcome, Some(Outcome::Failed));
        assert_eq!(controller.form(), &before);
        assert_eq!(controller.form_error(), Some(failure_notice().as_str()));
        assert!(controller.form_error().unwrap().contains(FALLBACK_CONTACT_EMAIL));

        let errors = sink.named("contact_form_error");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].get("error"), Some(&json!("X")));
        assert_eq!(errors[0].get("plan"), Some(&json!("Starter")));
        assert!(sink.named("contact_form_submitted").is_empty());
    }

    #[test]
    fn http_failure_records_default_message() {
        let sink = RecordingSink::default();
        let mut controller = ready_controller();
        controller.begin("");
        controller.finish(interpret_response(false, ""), &sink);

        let errors = sink.named("contact_form_error");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].get("error"), Some(&json!(DEFAULT_FAILURE_MESSAGE)));
    }

    #[test]
    fn network_failure_is_a_failed_outcome() {
        let sink = RecordingSink::default();
        let mut controller = ready_controller();
        controller.begin("");
        let outcome = controller.finish(
            Err(SubmissionError::Network("Failed to fetch".into())),
            &sink,
        );
        assert_eq!(outcome, Some(Outcome::Failed));
        assert_eq!(sink.named("contact_form_error")[0].get("error"), Some(&json!("Failed to fetch")));
    }

    #[test]
    fn trigger_restored_after_either_outcome() {
        let sink = RecordingSink::default();
        for result in [Ok(()), Err(SubmissionError::Rejected("nope".into()))] {
            let mut controller = ready_controller();
            let before = controller.trigger();
            controller.begin("");
            controller.finish(result, &sink);
            assert_eq!(controller.phase(), SubmitPhase::Idle);
            assert_eq!(controller.trigger(), before);
        }
    }

    #[test]
    fn resubmitting_after_failure_is_allowed() {
        let sink = RecordingSink::default();
        let mut controller = ready_controller();
        controller.begin("");
        controller.finish(Err(SubmissionError::Rejected("nope".into())), &sink);
        assert!(matches!(controller.begin(""), SubmitAttempt::Send(_)));
    }

    #[test]
    fn finish_without_request_is_ignored() {
        let sink = RecordingSink::default();
        let mut controller = ready_controller();
        assert_eq!(controller.finish(Ok(()), &sink), None);
        assert!(sink.events.borrow().is_empty());
        assert_eq!(controller.form().value(NAME), "Ada");
    }
}
