//! Contact controller lifecycle on a paused tokio clock.
//!
//! Time only moves when every task is idle, so sleeping in the test body
//! lets the controller's own timers fire in deadline order.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use portfolio_core::contact::{FAILURE_MESSAGE, SUCCESS_MESSAGE, VALIDATION_MESSAGE};
use portfolio_core::{
    ContactController, ContactField, ContactFields, ContactSubmitter, FormStatus,
    SimulatedSubmitter, SubmitAction, SubmitError,
};
use tokio::time::sleep;

const DISMISS: Duration = Duration::from_millis(5000);

/// Submitter that counts calls and answers with a fixed outcome.
struct ScriptedSubmitter {
    calls: AtomicUsize,
    delay: Duration,
    fail: bool,
}

impl ScriptedSubmitter {
    fn new(delay_ms: u64, fail: bool) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            delay: Duration::from_millis(delay_ms),
            fail,
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ContactSubmitter for ScriptedSubmitter {
    fn submit(&self, _fields: ContactFields) -> BoxFuture<'static, Result<(), SubmitError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let delay = self.delay;
        let fail = self.fail;
        Box::pin(async move {
            sleep(delay).await;
            if fail {
                Err(SubmitError::Unavailable("mail relay down".to_string()))
            } else {
                Ok(())
            }
        })
    }
}

fn fill(controller: &ContactController) {
    controller.set_field(ContactField::Name, "A");
    controller.set_field(ContactField::Email, "a@b.c");
    controller.set_field(ContactField::Message, "Hi");
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[tokio::test(start_paused = true)]
async fn test_success_then_auto_dismiss() {
    let controller = ContactController::new(Arc::new(SimulatedSubmitter::default()), DISMISS);
    fill(&controller);

    assert!(matches!(controller.submit(), SubmitAction::Dispatch(_)));
    let form = controller.snapshot();
    assert_eq!(form.status(), FormStatus::Submitting);
    assert!(!form.can_submit());

    sleep(ms(801)).await;
    let form = controller.snapshot();
    assert_eq!(form.status(), FormStatus::Submitted);
    assert_eq!(form.message(), SUCCESS_MESSAGE);
    assert!(form.fields().is_empty());

    // Dismiss is due 5000ms after the success, at 5800ms.
    sleep(ms(4900)).await;
    assert_eq!(controller.snapshot().status(), FormStatus::Submitted);

    sleep(ms(200)).await;
    let form = controller.snapshot();
    assert_eq!(form.status(), FormStatus::Idle);
    assert_eq!(form.message(), "");
}

#[tokio::test(start_paused = true)]
async fn test_missing_required_field_never_reaches_submitter() {
    let submitter = ScriptedSubmitter::new(100, false);
    let controller = ContactController::new(submitter.clone(), DISMISS);
    controller.set_field(ContactField::Name, "A");
    controller.set_field(ContactField::Message, "Hi");

    assert_eq!(controller.submit(), SubmitAction::Rejected);
    let form = controller.snapshot();
    assert_eq!(form.status(), FormStatus::Error);
    assert_eq!(form.message(), VALIDATION_MESSAGE);

    sleep(ms(1000)).await;
    assert_eq!(submitter.calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_whitespace_only_field_is_dispatched() {
    let submitter = ScriptedSubmitter::new(100, false);
    let controller = ContactController::new(submitter.clone(), DISMISS);
    controller.set_field(ContactField::Name, "  ");
    controller.set_field(ContactField::Email, "a@b.c");
    controller.set_field(ContactField::Message, "\n");

    assert!(matches!(controller.submit(), SubmitAction::Dispatch(_)));
    assert_eq!(controller.snapshot().status(), FormStatus::Submitting);

    sleep(ms(150)).await;
    assert_eq!(submitter.calls(), 1);
    assert_eq!(controller.snapshot().status(), FormStatus::Submitted);
}

#[tokio::test(start_paused = true)]
async fn test_failure_keeps_fields_and_message() {
    let submitter = ScriptedSubmitter::new(300, true);
    let controller = ContactController::new(submitter.clone(), DISMISS);
    fill(&controller);
    controller.set_field(ContactField::Subject, "Hello");

    controller.submit();
    sleep(ms(301)).await;

    let form = controller.snapshot();
    assert_eq!(form.status(), FormStatus::Error);
    assert_eq!(form.message(), FAILURE_MESSAGE);
    assert_eq!(form.fields().get(ContactField::Subject), "Hello");
    assert_eq!(form.fields().get(ContactField::Email), "a@b.c");

    // Errors are not auto-dismissed.
    sleep(ms(10_000)).await;
    assert_eq!(controller.snapshot().status(), FormStatus::Error);
}

#[tokio::test(start_paused = true)]
async fn test_second_submit_while_in_flight_is_ignored() {
    let submitter = ScriptedSubmitter::new(800, false);
    let controller = ContactController::new(submitter.clone(), DISMISS);
    fill(&controller);

    assert!(matches!(controller.submit(), SubmitAction::Dispatch(_)));
    sleep(ms(100)).await;
    assert_eq!(controller.submit(), SubmitAction::Ignored);

    sleep(ms(1000)).await;
    assert_eq!(submitter.calls(), 1);
    assert_eq!(controller.snapshot().status(), FormStatus::Submitted);
}

#[tokio::test(start_paused = true)]
async fn test_resubmit_cancels_pending_dismiss() {
    let submitter = ScriptedSubmitter::new(800, false);
    let controller = ContactController::new(submitter.clone(), DISMISS);

    fill(&controller);
    controller.submit();
    sleep(ms(1000)).await;
    assert_eq!(controller.snapshot().status(), FormStatus::Submitted);

    // Second message at 1000ms resolves at 1800ms; the first dismiss
    // (due at 5800ms) must not cut its notice short.
    fill(&controller);
    controller.submit();
    sleep(ms(4900)).await;
    assert_eq!(controller.snapshot().status(), FormStatus::Submitted);

    sleep(ms(1000)).await;
    assert_eq!(controller.snapshot().status(), FormStatus::Idle);
    assert_eq!(submitter.calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_teardown_cancels_in_flight_submission() {
    let controller = ContactController::new(Arc::new(SimulatedSubmitter::default()), DISMISS);
    fill(&controller);
    controller.submit();

    sleep(ms(100)).await;
    controller.teardown();
    sleep(ms(2000)).await;

    // The outcome never lands.
    assert_eq!(controller.snapshot().status(), FormStatus::Submitting);
}

#[tokio::test(start_paused = true)]
async fn test_drop_cancels_pending_dismiss() {
    let controller = ContactController::new(Arc::new(SimulatedSubmitter::default()), DISMISS);
    let rx = controller.subscribe();
    fill(&controller);
    controller.submit();
    sleep(ms(900)).await;
    assert_eq!(rx.borrow().status(), FormStatus::Submitted);

    drop(controller);
    sleep(ms(10_000)).await;
    assert_eq!(rx.borrow().status(), FormStatus::Submitted);
}

#[tokio::test(start_paused = true)]
async fn test_subscribers_see_every_stage() {
    let controller = ContactController::new(Arc::new(SimulatedSubmitter::default()), DISMISS);
    let mut rx = controller.subscribe();
    fill(&controller);
    rx.borrow_and_update();

    controller.submit();
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().status(), FormStatus::Submitting);

    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().status(), FormStatus::Submitted);

    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().status(), FormStatus::Idle);
}
