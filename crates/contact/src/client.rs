//! Headless client-side submission controller.
//!
//! The browser glue (reading inputs, painting helper text) lives behind
//! the [`FormPresenter`] port and the network behind [`SubmitTransport`],
//! so the whole submit flow is testable without a rendered page.
//!
//! The controller takes `&self` and is meant to be shared (e.g. behind an
//! `Arc`) between the submit trigger and the per-field input handlers;
//! submissions are serialized by an in-flight guard, so a second trigger
//! while a request is pending is ignored rather than overlapped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::validate::Field;
use crate::ContactSubmission;

/// Lifecycle of one submission attempt. `Invalid`, `Sent` and `Failed`
/// are terminal; every retry is a fresh user-initiated `submit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Validating,
    Invalid,
    Submitting,
    Sent,
    Failed,
}

/// Visual state pushed to a single field after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldState {
    /// No marker either way (optional field left empty).
    Cleared,
    Valid,
    Invalid(String),
}

/// Page-level status region content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Pending,
    FixHighlighted,
    Sent(String),
    Failed(String),
}

/// Client-observed failure to reach the server.
#[derive(Debug, thiserror::Error)]
#[error("network error: {0}")]
pub struct TransportError(pub String);

/// Decoded `{success, message}` response body.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub success: bool,
    pub message: String,
}

/// Network port: POST the submission and decode the response envelope.
#[async_trait]
pub trait SubmitTransport {
    async fn post(&self, submission: &ContactSubmission) -> Result<SubmitOutcome, TransportError>;
}

/// UI port. Implementations mutate the page; tests record calls.
pub trait FormPresenter {
    fn field_state(&mut self, field: Field, state: FieldState);
    fn status(&mut self, status: FormStatus);
    /// Enable or disable the submit trigger. The controller disables it
    /// for the duration of an in-flight request so submissions are
    /// serialized.
    fn submit_enabled(&mut self, enabled: bool);
    /// Clear every field value and validity marker.
    fn reset_form(&mut self);
    /// Transient success visual; the presenter clears it after a short
    /// delay.
    fn flash_success(&mut self);
}

/// Raw field values as currently entered.
#[derive(Debug, Clone, Default)]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
        }
    }
}

pub struct SubmissionController<T, P> {
    transport: T,
    presenter: Mutex<P>,
    values: Mutex<FormValues>,
    phase: Mutex<Phase>,
    in_flight: AtomicBool,
}

impl<T: SubmitTransport, P: FormPresenter> SubmissionController<T, P> {
    pub fn new(transport: T, presenter: P) -> Self {
        Self {
            transport,
            presenter: Mutex::new(presenter),
            values: Mutex::new(FormValues::default()),
            phase: Mutex::new(Phase::Idle),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn phase(&self) -> Phase {
        *self.phase.lock().unwrap()
    }

    pub fn presenter(&self) -> MutexGuard<'_, P> {
        self.presenter.lock().unwrap()
    }

    /// Live validation: re-run the single validator on every input
    /// change. Idempotent; revalidating an already-valid field just
    /// repaints the same state.
    pub fn field_changed(&self, field: Field, value: impl Into<String>) {
        let state = {
            let mut values = self.values.lock().unwrap();
            values.set(field, value);
            field_state(&values, field)
        };
        self.presenter.lock().unwrap().field_state(field, state);
    }

    /// Intercepts the form submit. Runs all five validators
    /// unconditionally so every field's marker is refreshed, then either
    /// stops on the invalid path or posts the payload and reflects the
    /// outcome.
    ///
    /// While a request is in flight the submit trigger is disabled and a
    /// re-entrant call returns the current phase without posting.
    pub async fn submit(&self) -> Phase {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return self.phase();
        }

        let phase = self.run_submit().await;
        self.in_flight.store(false, Ordering::SeqCst);
        phase
    }

    async fn run_submit(&self) -> Phase {
        self.set_phase(Phase::Validating);

        let (all_valid, submission) = {
            let values = self.values.lock().unwrap();
            let mut presenter = self.presenter.lock().unwrap();
            let mut all_valid = true;
            for field in Field::ALL {
                let state = field_state(&values, field);
                if matches!(state, FieldState::Invalid(_)) {
                    all_valid = false;
                }
                presenter.field_state(field, state);
            }
            (all_valid, build_submission(&values))
        };

        if !all_valid {
            self.presenter
                .lock()
                .unwrap()
                .status(FormStatus::FixHighlighted);
            return self.set_phase(Phase::Invalid);
        }

        self.set_phase(Phase::Submitting);
        {
            let mut presenter = self.presenter.lock().unwrap();
            presenter.submit_enabled(false);
            presenter.status(FormStatus::Pending);
        }

        // No lock is held across the suspension point.
        let result = self.transport.post(&submission).await;

        let phase = {
            let mut presenter = self.presenter.lock().unwrap();
            presenter.submit_enabled(true);

            match result {
                Err(err) => {
                    tracing::warn!(error = %err, "contact submission failed to reach the server");
                    presenter.status(FormStatus::Failed(
                        "Something went wrong. Please try again later.".to_string(),
                    ));
                    Phase::Failed
                }
                Ok(outcome) if !outcome.success => {
                    let message = if outcome.message.is_empty() {
                        "Something went wrong. Please try again later.".to_string()
                    } else {
                        outcome.message
                    };
                    presenter.status(FormStatus::Failed(message));
                    Phase::Failed
                }
                Ok(outcome) => {
                    presenter.status(FormStatus::Sent(outcome.message));
                    presenter.reset_form();
                    presenter.flash_success();
                    Phase::Sent
                }
            }
        };

        if phase == Phase::Sent {
            *self.values.lock().unwrap() = FormValues::default();
        }

        self.set_phase(phase)
    }

    fn set_phase(&self, phase: Phase) -> Phase {
        *self.phase.lock().unwrap() = phase;
        phase
    }
}

fn field_state(values: &FormValues, field: Field) -> FieldState {
    let value = values.get(field);
    match field.validate(value) {
        // An optional field left empty shows no marker at all.
        Ok(()) if field == Field::Phone && value.trim().is_empty() => FieldState::Cleared,
        Ok(()) => FieldState::Valid,
        Err(err) => FieldState::Invalid(err.message(field)),
    }
}

fn build_submission(values: &FormValues) -> ContactSubmission {
    let phone = values.phone.trim();
    ContactSubmission {
        first_name: values.first_name.trim().to_string(),
        last_name: values.last_name.trim().to_string(),
        email: values.email.trim().to_string(),
        phone: (!phone.is_empty()).then(|| phone.to_string()),
        message: values.message.trim().to_string(),
    }
}
