//! Contact form fields and the submission state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! The contact section edits `ContactFormData` field by field and submits it
//! to the external endpoint through a `ContactClient`. `SubmissionState`
//! drives the button label and the status banner.
//!
//! DESIGN
//! ======
//! Submission is split into `begin_submit` (guard, move to `Submitting`,
//! snapshot the payload) and `complete` (the single completion path). The
//! reactive UI runs the request between the two; `submit` composes them for
//! plain async callers. While `Submitting`, a new submission is refused
//! regardless of whether any button is disabled, so at most one request is in
//! flight and the completing response is always the outstanding one.
//!
//! Rejections and transport failures keep the typed fields so the user can
//! correct and resend. There is no automatic retry.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::str::FromStr;

use serde::Serialize;

use crate::net::api::{ContactClient, TransportError};
use crate::net::types::ContactReply;

pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";
pub const REJECTED_MESSAGE: &str = "Failed to send message. Please try again.";
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Failed to send message. Please try again later.";

/// Errors from driving the form itself (not from the endpoint).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    /// A submission is already in flight.
    #[error("a submission is already in progress")]
    AlreadySubmitting,

    /// The input name does not correspond to a form field.
    #[error("unknown contact field: {0}")]
    UnknownField(String),
}

/// Editable form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    /// Input `name` attribute for this field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl FromStr for ContactField {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "message" => Ok(Self::Message),
            other => Err(ContactError::UnknownField(other.to_owned())),
        }
    }
}

/// Form contents, also the request body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormData {
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }
}

/// Lifecycle of the most recent submission attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

impl SubmissionState {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    /// User-visible status text, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Succeeded(text) | Self::Failed(text) => Some(text),
            Self::Idle | Self::Submitting => None,
        }
    }
}

/// Contact form controller: owns the fields and the submission state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    data: ContactFormData,
    state: SubmissionState,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn data(&self) -> &ContactFormData {
        &self.data
    }

    #[must_use]
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Overwrite one field. Edits are accepted in every state.
    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) {
        *self.data.slot(field) = value.into();
    }

    /// Overwrite the field named by an input's `name` attribute.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::UnknownField` for names other than `name`,
    /// `email` and `message`; the form is left unchanged.
    pub fn update_field_named(&mut self, name: &str, value: impl Into<String>) -> Result<(), ContactError> {
        let field = name.parse::<ContactField>()?;
        self.update_field(field, value);
        Ok(())
    }

    /// Enter `Submitting` and return the payload to send.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::AlreadySubmitting` if a submission is in flight;
    /// nothing changes in that case.
    pub fn begin_submit(&mut self) -> Result<ContactFormData, ContactError> {
        if self.state.is_submitting() {
            log::warn!("contact submission rejected: already submitting");
            return Err(ContactError::AlreadySubmitting);
        }
        self.state = SubmissionState::Submitting;
        log::info!("contact submission started");
        Ok(self.data.clone())
    }

    /// Apply the outcome of the in-flight request.
    pub fn complete(&mut self, result: Result<ContactReply, TransportError>) {
        self.state = match result {
            Ok(ContactReply::Accepted) => {
                log::info!("contact submission accepted");
                self.data = ContactFormData::default();
                SubmissionState::Succeeded(SUCCESS_MESSAGE.to_owned())
            }
            Ok(ContactReply::Rejected { error }) => {
                log::warn!("contact submission rejected by server: {error:?}");
                SubmissionState::Failed(error.unwrap_or_else(|| REJECTED_MESSAGE.to_owned()))
            }
            Err(e) => {
                log::warn!("contact submission transport failure: {e}");
                SubmissionState::Failed(TRANSPORT_FAILURE_MESSAGE.to_owned())
            }
        };
    }

    /// Run one full submission through `client`: exactly one request, no
    /// retries.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::AlreadySubmitting` without contacting `client`
    /// if a submission is already in flight. Endpoint failures are not errors
    /// here; they end in `SubmissionState::Failed`.
    pub async fn submit<C: ContactClient + ?Sized>(&mut self, client: &C) -> Result<&SubmissionState, ContactError> {
        let payload = self.begin_submit()?;
        let result = client.send(&payload).await;
        self.complete(result);
        Ok(&self.state)
    }
}
