use serde::Serialize;

use super::transport::SubmitError;
use super::validator::{FieldKind, FieldState};

pub const SUCCESS_TEXT: &str = "Thank you! Your message has been sent successfully.";
pub const FAILURE_TEXT: &str = "Sorry, there was an error. Please try again.";

/// Field values captured when the form is submitted. Also the JSON body sent
/// to the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormSnapshot {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Validating,
    Sending,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; hand the snapshot to the transport.
    Accepted(FormSnapshot),
    /// At least one field failed; focus this one.
    Rejected { focus: FieldKind },
    /// A previous submission is still in flight.
    Busy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Failure,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

/// Identifies the banner a hide timer was armed for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BannerTicket(u64);

#[derive(Clone, Debug, Default)]
struct FieldSlot {
    value: String,
    error: Option<String>,
}

/// State behind the contact form: current values, the per-field validity
/// cache and the confirmation banner.
#[derive(Clone, Debug)]
pub struct ContactForm {
    fields: [FieldSlot; 3],
    phase: SubmitPhase,
    banner: Option<Banner>,
    banner_seq: u64,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: Default::default(),
            phase: SubmitPhase::Idle,
            banner: None,
            banner_seq: 0,
        }
    }

    pub fn value(&self, field: FieldKind) -> &str {
        &self.fields[field.index()].value
    }

    pub fn set_value(&mut self, field: FieldKind, value: impl Into<String>) {
        self.fields[field.index()].value = value.into();
    }

    pub fn error(&self, field: FieldKind) -> Option<&str> {
        self.fields[field.index()].error.as_deref()
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Re-checks one field and updates its cached error.
    pub fn validate(&mut self, field: FieldKind) -> FieldState {
        let slot = &mut self.fields[field.index()];
        let state = FieldState::evaluate(field, &slot.value);
        slot.error = state.error_message.clone();
        state
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.phase == SubmitPhase::Sending {
            return SubmitOutcome::Busy;
        }
        self.phase = SubmitPhase::Validating;

        // All three are evaluated so every error slot refreshes together.
        let results = FieldKind::ALL.map(|field| (field, self.validate(field).is_valid));

        match results.iter().find(|(_, valid)| !valid) {
            Some((field, _)) => {
                self.phase = SubmitPhase::Idle;
                SubmitOutcome::Rejected { focus: *field }
            }
            None => {
                self.phase = SubmitPhase::Sending;
                SubmitOutcome::Accepted(self.snapshot())
            }
        }
    }

    /// Applies the transport's answer and returns the ticket the hide timer
    /// must present.
    pub fn finish(&mut self, result: Result<(), SubmitError>) -> BannerTicket {
        self.banner = Some(match result {
            Ok(()) => {
                self.reset();
                Banner {
                    kind: BannerKind::Success,
                    text: SUCCESS_TEXT.to_string(),
                }
            }
            Err(_) => Banner {
                kind: BannerKind::Failure,
                text: FAILURE_TEXT.to_string(),
            },
        });
        self.phase = SubmitPhase::Idle;
        self.banner_seq += 1;
        BannerTicket(self.banner_seq)
    }

    /// Hides the banner if `ticket` still refers to it.
    pub fn hide_banner(&mut self, ticket: BannerTicket) -> bool {
        if ticket.0 != self.banner_seq || self.banner.is_none() {
            return false;
        }
        self.banner = None;
        true
    }

    pub fn reset(&mut self) {
        self.fields = Default::default();
    }

    fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            name: self.value(FieldKind::Name).to_string(),
            email: self.value(FieldKind::Email).to_string(),
            message: self.value(FieldKind::Message).to_string(),
        }
    }
}
