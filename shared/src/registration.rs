//! Registration and join-request submission.
//!
//! The form is checked locally first, then sent as exactly one POST per user
//! action. A duplicate answer from the register endpoint parks the flow until
//! the user either forces the submission or goes back to review the form.

use log::{debug, error, warn};

use crate::api::ClubApi;
use validator::Validate;

use crate::dto::registration::{JoinRequest, RegisterOutcome, RegistrationRequest};
use crate::error::{ApiError, FormError};
use crate::models::player::PLAYER_ROLES;

pub const JOIN_ROLES: [&str; 5] = ["Batsman", "Bowler", "All Rounder", "Wicket Keeper", "Supporter / Fan"];
pub const EXPERIENCE_LEVELS: [&str; 3] = ["Amateur", "Intermediate", "Professional"];

pub const REGISTER_SUCCESS: &str = "Registration successful! We will contact you soon.";
pub const REGISTER_FAILED: &str = "Error submitting registration.";
pub const JOIN_FAILED: &str = "Failed to submit request. Please try again.";
pub const CONNECTION_FAILED: &str = "Server connection failed. Please check your internet.";

/// Which endpoint a form posts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormVariant {
    /// Homepage section, `POST /api/register`.
    Register,
    /// Standalone page, `POST /api/join`.
    Join,
}

impl FormVariant {
    pub fn roles(&self) -> &'static [&'static str] {
        match self {
            FormVariant::Register => &PLAYER_ROLES,
            FormVariant::Join => &JOIN_ROLES,
        }
    }

    /// Join collects a free-text message instead of a level.
    pub fn experience_levels(&self) -> &'static [&'static str] {
        match self {
            FormVariant::Register => &EXPERIENCE_LEVELS,
            FormVariant::Join => &[],
        }
    }

    pub fn failure_message(&self, error: &ApiError) -> &'static str {
        match self {
            FormVariant::Register => REGISTER_FAILED,
            FormVariant::Join if error.is_network() => CONNECTION_FAILED,
            FormVariant::Join => JOIN_FAILED,
        }
    }
}

/// Raw field values as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    pub variant: FormVariant,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub experience: String,
    pub legal_consent: bool,
    /// Hidden from people; only bots fill it in.
    pub website: String,
}

impl RegistrationForm {
    pub fn new(variant: FormVariant) -> Self {
        let experience = match variant {
            FormVariant::Register => EXPERIENCE_LEVELS[0].to_string(),
            FormVariant::Join => String::new(),
        };
        Self {
            variant,
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            role: PLAYER_ROLES[0].to_string(),
            experience,
            legal_consent: false,
            website: String::new(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.variant);
    }

    pub fn is_bot(&self) -> bool {
        !self.website.trim().is_empty()
    }

    /// First failing rule wins: name, email, phone, consent.
    ///
    /// Field rules come from the request's `Validate` derive; this only picks
    /// the message to show.
    pub fn validate(&self) -> Result<(), FormError> {
        let (result, name_field) = match self.variant {
            FormVariant::Register => (self.to_registration().validate(), "full_name"),
            FormVariant::Join => (self.to_join().validate(), "name"),
        };
        if let Err(errors) = result {
            let failed = |field: &str| errors.field_errors().contains_key(field);
            if failed(name_field) {
                return Err(FormError::MissingName);
            }
            if failed("email") {
                return Err(FormError::MissingEmail);
            }
            if failed("phone") {
                return Err(if self.phone.trim().is_empty() {
                    FormError::MissingPhone
                } else {
                    FormError::InvalidPhone
                });
            }
            // A rule without a dedicated message
            return Err(errors.into());
        }
        if !self.legal_consent {
            return Err(FormError::ConsentRequired);
        }
        Ok(())
    }

    pub fn check(&self) -> FormCheck {
        if self.is_bot() {
            return FormCheck::Honeypot;
        }
        match self.validate() {
            Ok(()) => FormCheck::Ready,
            Err(e) => FormCheck::Invalid(e),
        }
    }

    pub fn to_registration(&self) -> RegistrationRequest {
        RegistrationRequest {
            full_name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone_number: self.phone.trim().to_string(),
            preferred_role: self.role.clone(),
            experience_level: self.experience.clone(),
            legal_consent: self.legal_consent,
        }
    }

    pub fn to_join(&self) -> JoinRequest {
        JoinRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            role: self.role.clone(),
            experience: self.experience.clone(),
            legal_consent: self.legal_consent,
            website: self.website.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCheck {
    Ready,
    Invalid(FormError),
    Honeypot,
}

/// A request that is about to go out.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingSubmission {
    Register { request: RegistrationRequest, force: bool },
    Join(JoinRequest),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Accepted,
    Duplicate { count: u64 },
    Rejected(ApiError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    Editing,
    Submitting,
    Duplicate { count: u64 },
    Succeeded,
    Failed(String),
}

/// Result of asking the flow to start a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Begin {
    /// Send this, then feed the answer to `apply_outcome`.
    Send(PendingSubmission),
    /// Show this message; nothing is sent.
    Rejected(FormError),
    /// Nothing to send and nothing to say.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationFlow {
    pub form: RegistrationForm,
    state: FlowState,
}

impl RegistrationFlow {
    pub fn new(variant: FormVariant) -> Self {
        Self {
            form: RegistrationForm::new(variant),
            state: FlowState::Editing,
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FlowState::Submitting
    }

    /// Checks the form and, when it is ready, moves to `Submitting`.
    ///
    /// While a request is in flight further calls are ignored, so a double
    /// click never produces a second POST.
    pub fn begin_submit(&mut self, force: bool) -> Begin {
        if self.is_submitting() {
            return Begin::Ignored;
        }
        match self.form.check() {
            FormCheck::Honeypot => {
                warn!("Honeypot field filled, dropping submission");
                Begin::Ignored
            }
            FormCheck::Invalid(e) => {
                debug!("Form rejected locally: {}", e);
                Begin::Rejected(e)
            }
            FormCheck::Ready => {
                self.state = FlowState::Submitting;
                let pending = match self.form.variant {
                    FormVariant::Register => PendingSubmission::Register {
                        request: self.form.to_registration(),
                        force,
                    },
                    FormVariant::Join => PendingSubmission::Join(self.form.to_join()),
                };
                Begin::Send(pending)
            }
        }
    }

    pub fn apply_outcome(&mut self, outcome: SubmitOutcome) {
        self.state = match outcome {
            SubmitOutcome::Accepted => {
                // Join keeps the data for its success screen.
                if self.form.variant == FormVariant::Register {
                    self.form.reset();
                }
                FlowState::Succeeded
            }
            SubmitOutcome::Duplicate { count } => FlowState::Duplicate { count },
            SubmitOutcome::Rejected(e) => {
                error!("Submission failed: {}", e);
                FlowState::Failed(self.form.variant.failure_message(&e).to_string())
            }
        };
    }

    /// Back to editing from a duplicate warning, keeping every field.
    pub fn review(&mut self) {
        if matches!(self.state, FlowState::Duplicate { .. }) {
            self.state = FlowState::Editing;
        }
    }

    /// Clears a success or failure notice.
    pub fn dismiss_notice(&mut self) {
        if matches!(self.state, FlowState::Succeeded | FlowState::Failed(_)) {
            self.state = FlowState::Editing;
        }
    }

    /// Runs one full submission against `api`.
    pub async fn submit(&mut self, api: &dyn ClubApi, force: bool) -> Result<(), FormError> {
        match self.begin_submit(force) {
            Begin::Send(pending) => {
                let outcome = dispatch(api, &pending).await;
                self.apply_outcome(outcome);
                Ok(())
            }
            Begin::Rejected(e) => Err(e),
            Begin::Ignored => Ok(()),
        }
    }
}

/// Sends one pending submission.
pub async fn dispatch(api: &dyn ClubApi, pending: &PendingSubmission) -> SubmitOutcome {
    match pending {
        PendingSubmission::Register { request, force } => match api.register(request, *force).await {
            Ok(RegisterOutcome::Created) => SubmitOutcome::Accepted,
            Ok(RegisterOutcome::Duplicate { count }) => SubmitOutcome::Duplicate { count },
            Err(e) => SubmitOutcome::Rejected(e),
        },
        PendingSubmission::Join(request) => match api.join(request).await {
            Ok(()) => SubmitOutcome::Accepted,
            Err(e) => SubmitOutcome::Rejected(e),
        },
    }
}
