//! State of the contact form between the inputs and the relay endpoint.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex, MutexGuard, PoisonError,
};

use landing_models::phone::format_phone;
use tracing::warn;

use crate::{
    api::ContactApi,
    schema::{self, ContactForm, FieldErrors},
};

pub const SUBMIT_LABEL: &str = "Enviar mensagem";
pub const SENDING_LABEL: &str = "Enviando...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Sending,
    Settled(Settled),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    Ok,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form did not pass validation, nothing was sent.
    Invalid(FieldErrors),
    /// Another submission is still in flight.
    Busy,
    Sent,
    Failed,
}

/// Holds the form inputs and submits them to a [`ContactApi`].
///
/// At most one submission is in flight at a time. Successful submissions
/// clear the form, failed ones keep it so the visitor can try again.
#[derive(Debug)]
pub struct SubmissionClient<Api> {
    api: Api,
    state: Mutex<FormState>,
    sending: AtomicBool,
}

#[derive(Debug, Default)]
struct FormState {
    form: ContactForm,
    errors: FieldErrors,
    settled: Option<Settled>,
}

impl<Api> SubmissionClient<Api>
where
    Api: ContactApi,
{
    pub fn new(api: Api) -> Self {
        Self {
            api,
            state: Default::default(),
            sending: AtomicBool::new(false),
        }
    }

    pub fn form(&self) -> ContactForm {
        self.lock().form.clone()
    }

    /// Field errors of the last rejected submit.
    pub fn errors(&self) -> FieldErrors {
        self.lock().errors.clone()
    }

    pub fn set_name(&self, name: impl Into<String>) {
        self.lock().form.name = name.into();
    }

    pub fn set_email(&self, email: impl Into<String>) {
        self.lock().form.email = email.into();
    }

    /// Stores the masked representation of `raw`.
    pub fn set_phone(&self, raw: &str) {
        self.lock().form.phone = format_phone(raw);
    }

    pub fn set_message(&self, message: impl Into<String>) {
        self.lock().form.message = message.into();
    }

    pub fn state(&self) -> SubmissionState {
        if self.is_sending() {
            return SubmissionState::Sending;
        }
        match self.lock().settled {
            Some(settled) => SubmissionState::Settled(settled),
            None => SubmissionState::Idle,
        }
    }

    pub fn is_submit_enabled(&self) -> bool {
        !self.is_sending()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_sending() {
            SENDING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub async fn submit(&self) -> SubmitOutcome {
        if self.is_sending() {
            return SubmitOutcome::Busy;
        }

        let submission = {
            let mut state = self.lock();
            match schema::validate(&state.form) {
                Ok(submission) => {
                    state.errors = FieldErrors::default();
                    submission
                }
                Err(errors) => {
                    state.errors = errors.clone();
                    state.settled = None;
                    return SubmitOutcome::Invalid(errors);
                }
            }
        };

        if self
            .sending
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return SubmitOutcome::Busy;
        }
        let _sending = scopeguard::guard(&self.sending, |sending| {
            sending.store(false, Ordering::Release)
        });

        let sent = match self.api.submit(submission).await {
            Ok(sent) => sent,
            Err(err) => {
                warn!("failed to submit contact form: {err:#}");
                false
            }
        };

        let mut state = self.lock();
        if sent {
            state.form = ContactForm::default();
            state.settled = Some(Settled::Ok);
            SubmitOutcome::Sent
        } else {
            state.settled = Some(Settled::Failed);
            SubmitOutcome::Failed
        }
    }

    fn is_sending(&self) -> bool {
        self.sending.load(Ordering::Acquire)
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
