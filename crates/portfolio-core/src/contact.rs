//! Contact form state machine and controller.
//!
//! ```text
//!            submit (valid)              Ok
//!   Idle ───────────────────► Submitting ────► Submitted ──(5s)──► Idle
//!    │  ▲                          │
//!    │  └──────── submit ──────┐   │ Err
//!    │ submit (missing field)  │   ▼
//!    └───────────────────────► Error
//! ```
//!
//! [`ContactForm`] is the synchronous machine. [`ContactController`] wires
//! it to an injected [`ContactSubmitter`] on tokio, owns the auto-dismiss
//! timer, and publishes every change on a watch channel for the view.

use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use parking_lot::Mutex;
use tokio::sync::watch;

use crate::error::SubmitError;
use crate::timer::TimerGuard;

/// Shown when a required field is blank.
pub const VALIDATION_MESSAGE: &str = "Please fill in all required fields.";
/// Shown after a successful submission.
pub const SUCCESS_MESSAGE: &str = "Thanks for your message! I'll get back to you soon.";
/// Shown when the submitter reports a failure.
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again later.";

/// The four form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    /// Required fields (name, email, message) that are empty.
    pub fn missing_required(&self) -> Vec<ContactField> {
        ContactField::all()
            .iter()
            .copied()
            .filter(|f| f.is_required() && self.get(*f).is_empty())
            .collect()
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        ContactField::all().iter().all(|f| self.get(*f).is_empty())
    }
}

/// Identifies one input of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn all() -> &'static [ContactField] {
        &[
            ContactField::Name,
            ContactField::Email,
            ContactField::Subject,
            ContactField::Message,
        ]
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, ContactField::Subject)
    }

    /// Form control `name`/`id` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    /// Floating label text; required fields carry an asterisk.
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Your Name*",
            ContactField::Email => "Your Email*",
            ContactField::Subject => "Subject",
            ContactField::Message => "Your Message*",
        }
    }
}

/// Submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Error,
}

/// Result of asking the form to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAction {
    /// A submission is already in flight
    Ignored,
    /// Validation failed; the form is now in [`FormStatus::Error`]
    Rejected,
    /// Hand these fields to the submitter
    Dispatch(ContactFields),
}

/// Pure contact-form state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    status: FormStatus,
    message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Inline status message; empty when there is nothing to show.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        self.status != FormStatus::Submitting
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        *self.fields.get_mut(field) = value.into();
    }

    /// Validate and move to `Submitting`, or to `Error` when a required
    /// field is empty. No-op while a submission is in flight.
    pub fn submit(&mut self) -> SubmitAction {
        if self.status == FormStatus::Submitting {
            return SubmitAction::Ignored;
        }

        if !self.fields.missing_required().is_empty() {
            self.status = FormStatus::Error;
            self.message = VALIDATION_MESSAGE.to_string();
            return SubmitAction::Rejected;
        }

        self.status = FormStatus::Submitting;
        self.message.clear();
        SubmitAction::Dispatch(self.fields.clone())
    }

    /// Apply the submitter's outcome. Ignored unless a submission is in
    /// flight.
    pub fn resolve(&mut self, outcome: Result<(), SubmitError>) {
        if self.status != FormStatus::Submitting {
            return;
        }
        match outcome {
            Ok(()) => {
                self.status = FormStatus::Submitted;
                self.message = SUCCESS_MESSAGE.to_string();
                self.fields = ContactFields::default();
            }
            Err(_) => {
                self.status = FormStatus::Error;
                self.message = FAILURE_MESSAGE.to_string();
            }
        }
    }

    /// Clear a success notice and return to `Idle`.
    pub fn dismiss(&mut self) {
        if self.status == FormStatus::Submitted {
            self.status = FormStatus::Idle;
            self.message.clear();
        }
    }
}

/// The external collaborator that actually delivers a message.
pub trait ContactSubmitter: Send + Sync {
    fn submit(&self, fields: ContactFields) -> BoxFuture<'static, Result<(), SubmitError>>;
}

/// Stand-in submitter: waits a fixed delay and reports success.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Duration::from_millis(800))
    }
}

impl ContactSubmitter for SimulatedSubmitter {
    fn submit(&self, fields: ContactFields) -> BoxFuture<'static, Result<(), SubmitError>> {
        let delay = self.delay;
        Box::pin(async move {
            tokio::time::sleep(delay).await;
            tracing::info!(
                from = %fields.email,
                subject = %fields.subject,
                "Simulated contact submission accepted"
            );
            Ok(())
        })
    }
}

struct Shared {
    form: Mutex<ContactForm>,
    updates: watch::Sender<ContactForm>,
    dismiss: Mutex<TimerGuard>,
}

impl Shared {
    fn publish(&self, form: &ContactForm) {
        self.updates.send_replace(form.clone());
    }
}

/// Drives a [`ContactForm`] against an injected submitter.
///
/// Dropping the controller cancels the in-flight submission and any
/// pending auto-dismiss.
pub struct ContactController {
    shared: Arc<Shared>,
    submitter: Arc<dyn ContactSubmitter>,
    dismiss_after: Duration,
    inflight: Mutex<TimerGuard>,
}

impl ContactController {
    pub fn new(submitter: Arc<dyn ContactSubmitter>, dismiss_after: Duration) -> Self {
        let form = ContactForm::new();
        let (updates, _) = watch::channel(form.clone());
        Self {
            shared: Arc::new(Shared {
                form: Mutex::new(form),
                updates,
                dismiss: Mutex::new(TimerGuard::idle()),
            }),
            submitter,
            dismiss_after,
            inflight: Mutex::new(TimerGuard::idle()),
        }
    }

    /// Receive a snapshot after every change.
    pub fn subscribe(&self) -> watch::Receiver<ContactForm> {
        self.shared.updates.subscribe()
    }

    /// Current state.
    pub fn snapshot(&self) -> ContactForm {
        self.shared.form.lock().clone()
    }

    pub fn set_field(&self, field: ContactField, value: impl Into<String>) {
        let mut form = self.shared.form.lock();
        form.set_field(field, value);
        self.shared.publish(&form);
    }

    /// Submit the current fields. Must be called inside a tokio runtime.
    pub fn submit(&self) -> SubmitAction {
        let action = {
            let mut form = self.shared.form.lock();
            let action = form.submit();
            if action != SubmitAction::Ignored {
                self.shared.publish(&form);
            }
            action
        };

        match &action {
            SubmitAction::Ignored => {
                tracing::debug!("Submit ignored while a submission is in flight");
            }
            SubmitAction::Rejected => {
                tracing::debug!("Contact form rejected: required field missing");
            }
            SubmitAction::Dispatch(fields) => {
                self.shared.dismiss.lock().cancel();

                let pending = self.submitter.submit(fields.clone());
                let shared = self.shared.clone();
                let dismiss_after = self.dismiss_after;

                *self.inflight.lock() = TimerGuard::spawn(async move {
                    let outcome = pending.await;
                    if let Err(ref e) = outcome {
                        tracing::warn!(error = %e, "Contact submission failed");
                    }

                    let mut form = shared.form.lock();
                    form.resolve(outcome);
                    shared.publish(&form);

                    // Scheduled under the form lock so a racing submit
                    // always sees (and cancels) this timer.
                    if form.status() == FormStatus::Submitted {
                        let timer_shared = shared.clone();
                        *shared.dismiss.lock() = TimerGuard::spawn(async move {
                            tokio::time::sleep(dismiss_after).await;
                            let mut form = timer_shared.form.lock();
                            form.dismiss();
                            timer_shared.publish(&form);
                        });
                    }
                });
            }
        }

        action
    }

    /// Cancel everything this controller has scheduled.
    pub fn teardown(&self) {
        self.inflight.lock().cancel();
        self.shared.dismiss.lock().cancel();
    }
}

impl Drop for ContactController {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(ContactField::Name, "Jane");
        form.set_field(ContactField::Email, "jane@x.com");
        form.set_field(ContactField::Message, "Hello");
        form
    }

    #[test]
    fn missing_required_field_goes_straight_to_error() {
        let mut form = ContactForm::new();
        form.set_field(ContactField::Email, "a@b.com");
        form.set_field(ContactField::Message, "hi");

        assert_eq!(form.submit(), SubmitAction::Rejected);
        assert_eq!(form.status(), FormStatus::Error);
        assert_eq!(form.message(), VALIDATION_MESSAGE);
    }

    #[test]
    fn whitespace_only_field_is_filled() {
        let mut form = filled();
        form.set_field(ContactField::Name, " ");
        assert!(form.fields().missing_required().is_empty());
        assert!(matches!(form.submit(), SubmitAction::Dispatch(_)));
        assert_eq!(form.status(), FormStatus::Submitting);
    }

    #[test]
    fn editing_keeps_error_until_next_submit() {
        let mut form = ContactForm::new();
        assert_eq!(form.submit(), SubmitAction::Rejected);

        form.set_field(ContactField::Name, "A");
        assert_eq!(form.status(), FormStatus::Error);
        assert_eq!(form.message(), VALIDATION_MESSAGE);

        form.set_field(ContactField::Email, "a@b.com");
        form.set_field(ContactField::Message, "hi");
        assert!(matches!(form.submit(), SubmitAction::Dispatch(_)));
        assert_eq!(form.status(), FormStatus::Submitting);
    }

    #[test]
    fn subject_is_optional() {
        let mut form = filled();
        assert!(matches!(form.submit(), SubmitAction::Dispatch(_)));
        assert_eq!(form.status(), FormStatus::Submitting);
        assert!(!form.can_submit());
    }

    #[test]
    fn second_submit_while_submitting_is_ignored() {
        let mut form = filled();
        form.submit();
        let before = form.clone();
        assert_eq!(form.submit(), SubmitAction::Ignored);
        assert_eq!(form, before);
    }

    #[test]
    fn success_clears_fields_then_dismisses() {
        let mut form = filled();
        form.submit();
        form.resolve(Ok(()));
        assert_eq!(form.status(), FormStatus::Submitted);
        assert_eq!(form.message(), SUCCESS_MESSAGE);
        assert!(form.fields().is_empty());

        form.dismiss();
        assert_eq!(form.status(), FormStatus::Idle);
        assert_eq!(form.message(), "");
    }

    #[test]
    fn failure_keeps_fields() {
        let mut form = filled();
        form.submit();
        form.resolve(Err(SubmitError::Rejected("nope".into())));
        assert_eq!(form.status(), FormStatus::Error);
        assert_eq!(form.message(), FAILURE_MESSAGE);
        assert_eq!(form.fields().name, "Jane");
        assert!(form.can_submit());
    }

    #[test]
    fn stray_resolve_is_ignored() {
        let mut form = filled();
        form.resolve(Ok(()));
        assert_eq!(form.status(), FormStatus::Idle);
        assert_eq!(form.fields().name, "Jane");
    }

    #[test]
    fn dismiss_only_clears_success() {
        let mut form = ContactForm::new();
        form.submit();
        form.dismiss();
        assert_eq!(form.status(), FormStatus::Error);
    }

    #[test]
    fn field_labels_mark_required() {
        for field in ContactField::all() {
            assert_eq!(field.label().ends_with('*'), field.is_required());
        }
    }
}
