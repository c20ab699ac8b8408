//! State for one waitlist form session.
//!
//! All transitions live in the pure [`Reducible`] impl so they can be
//! exercised without a browser. I/O (the actual POST, alerts, timers)
//! happens in `form.rs`.

use std::rc::Rc;

use yew::Reducible;

use super::fields::{validate, FIELDS};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormFields {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub country: String,
}

impl FormFields {
    pub fn value(&self, name: &str) -> &str {
        match name {
            "fullName" => &self.full_name,
            "email" => &self.email,
            "phoneNumber" => &self.phone_number,
            "country" => &self.country,
            _ => "",
        }
    }

    fn set_value(&mut self, name: &str, value: String) {
        match name {
            "fullName" => self.full_name = value,
            "email" => self.email = value,
            "phoneNumber" => self.phone_number = value,
            "country" => self.country = value,
            _ => {}
        }
    }
}

/// Per-field error messages; an empty string means valid. phoneNumber is
/// optional and carries no entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    pub full_name: String,
    pub email: String,
    pub country: String,
}

impl FieldErrors {
    pub fn get(&self, name: &str) -> &str {
        match name {
            "fullName" => &self.full_name,
            "email" => &self.email,
            "country" => &self.country,
            _ => "",
        }
    }

    fn set(&mut self, name: &str, error: String) {
        match name {
            "fullName" => self.full_name = error,
            "email" => self.email = error,
            "country" => self.country = error,
            _ => {}
        }
    }

    /// One full validation pass over every field.
    pub fn compute(fields: &FormFields) -> Self {
        let mut errors = Self::default();
        for field in FIELDS.iter() {
            errors.set(field.name, validate(field.name, fields.value(field.name)));
        }
        errors
    }

    pub fn is_clean(&self) -> bool {
        self.full_name.is_empty() && self.email.is_empty() && self.country.is_empty()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Which screen the waitlist flow shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Step {
    #[default]
    Form,
    Success,
}

pub enum WaitlistAction {
    FieldChanged { name: String, value: String },
    SubmitRequested,
    SubmissionSucceeded,
    SubmissionFailed,
    Reset,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WaitlistSession {
    pub fields: FormFields,
    pub errors: FieldErrors,
    pub submission: SubmissionState,
    pub step: Step,
}

impl WaitlistSession {
    /// The submit trigger is live outside of an in-flight attempt.
    pub fn can_submit(&self) -> bool {
        matches!(
            self.submission,
            SubmissionState::Idle | SubmissionState::Failed
        )
    }
}

impl Reducible for WaitlistSession {
    type Action = WaitlistAction;

    fn reduce(self: Rc<Self>, action: WaitlistAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            WaitlistAction::FieldChanged { name, value } => {
                // Only the edited field is revalidated; the others keep
                // their last result.
                next.errors.set(&name, validate(&name, &value));
                next.fields.set_value(&name, value);
            }
            WaitlistAction::SubmitRequested => {
                // One synchronous pass over every field, including ones
                // that were never touched. The stored error map is not
                // consulted for the gate.
                let errors = FieldErrors::compute(&next.fields);
                let clean = errors.is_clean();
                next.errors = errors;
                if clean && next.can_submit() {
                    next.submission = SubmissionState::Submitting;
                }
            }
            WaitlistAction::SubmissionSucceeded => {
                if next.submission == SubmissionState::Submitting {
                    next.submission = SubmissionState::Succeeded;
                    next.step = Step::Success;
                }
            }
            WaitlistAction::SubmissionFailed => {
                // The form stays editable; the user may resubmit.
                if next.submission == SubmissionState::Submitting {
                    next.submission = SubmissionState::Failed;
                }
            }
            WaitlistAction::Reset => {
                next = WaitlistSession::default();
            }
        }
        Rc::new(next)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    WaitlistForm,
    VideoShowcase,
    JoinSelector,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UserType {
    #[default]
    Host,
    Guest,
    Associate,
}

impl UserType {
    pub fn join_heading(self) -> &'static str {
        match self {
            UserType::Host => "Become a Host",
            UserType::Guest => "Join as a Guest",
            UserType::Associate => "Become an Associate",
        }
    }

    pub fn join_blurb(self) -> &'static str {
        match self {
            UserType::Host => {
                "Tell us about yourself and we will reach out as hosting opens in your city."
            }
            UserType::Guest => {
                "Leave your details and be among the first to book a stay on Karibu."
            }
            UserType::Associate => {
                "Apply your local know-how. We will contact you as the associate program rolls out."
            }
        }
    }
}

/// Visibility flags for the page modals, plus the user type last chosen
/// in the how-to-join section. The flags are independent: opening one
/// modal never closes another.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalController {
    form_open: bool,
    video_open: bool,
    join_open: bool,
    pub selected_user_type: UserType,
}

impl ModalController {
    pub fn is_open(&self, kind: ModalKind) -> bool {
        match kind {
            ModalKind::WaitlistForm => self.form_open,
            ModalKind::VideoShowcase => self.video_open,
            ModalKind::JoinSelector => self.join_open,
        }
    }

    pub fn open(&mut self, kind: ModalKind) {
        self.set(kind, true);
    }

    pub fn close(&mut self, kind: ModalKind) {
        self.set(kind, false);
    }

    /// Records the chosen variant, overwriting the previous one, and
    /// opens the join-selector modal.
    pub fn select_user_type(&mut self, user_type: UserType) {
        self.selected_user_type = user_type;
        self.open(ModalKind::JoinSelector);
    }

    fn set(&mut self, kind: ModalKind, open: bool) {
        match kind {
            ModalKind::WaitlistForm => self.form_open = open,
            ModalKind::VideoShowcase => self.video_open = open,
            ModalKind::JoinSelector => self.join_open = open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> WaitlistSession {
        let mut session = WaitlistSession::default();
        session.fields.full_name = "Ada Lovelace".to_string();
        session.fields.email = "ada@lovelace.io".to_string();
        session.fields.country = "UK".to_string();
        session
    }

    fn dispatch(session: WaitlistSession, action: WaitlistAction) -> WaitlistSession {
        (*Rc::new(session).reduce(action)).clone()
    }

    #[test]
    fn field_change_revalidates_only_that_field() {
        let session = dispatch(
            WaitlistSession::default(),
            WaitlistAction::FieldChanged {
                name: "email".to_string(),
                value: "bad-email".to_string(),
            },
        );
        assert_eq!(session.fields.email, "bad-email");
        assert_eq!(session.errors.email, "Please enter a valid email address");
        // Untouched fields keep their (empty) last result.
        assert_eq!(session.errors.full_name, "");
        assert_eq!(session.errors.country, "");
    }

    #[test]
    fn field_change_clears_a_stale_error() {
        let mut session = WaitlistSession::default();
        session.errors.email = "Please enter a valid email address".to_string();
        let session = dispatch(
            session,
            WaitlistAction::FieldChanged {
                name: "email".to_string(),
                value: "ada@lovelace.io".to_string(),
            },
        );
        assert_eq!(session.errors.email, "");
    }

    #[test]
    fn phone_number_change_never_errors() {
        let session = dispatch(
            WaitlistSession::default(),
            WaitlistAction::FieldChanged {
                name: "phoneNumber".to_string(),
                value: String::new(),
            },
        );
        assert!(session.errors.is_clean());
    }

    #[test]
    fn submit_with_blank_required_field_stays_idle() {
        let mut session = filled();
        session.fields.full_name = String::new();
        let session = dispatch(session, WaitlistAction::SubmitRequested);
        assert_eq!(session.submission, SubmissionState::Idle);
        assert_eq!(session.errors.full_name, "full Name is required");
        assert_eq!(session.step, Step::Form);
    }

    #[test]
    fn submit_revalidates_untouched_fields() {
        // country was never edited, so its stored error is empty; the
        // submit pass must still catch it.
        let mut session = filled();
        session.fields.country = String::new();
        assert_eq!(session.errors.country, "");
        let session = dispatch(session, WaitlistAction::SubmitRequested);
        assert_eq!(session.errors.country, "country is required");
        assert_eq!(session.submission, SubmissionState::Idle);
    }

    #[test]
    fn valid_submit_enters_submitting() {
        let session = dispatch(filled(), WaitlistAction::SubmitRequested);
        assert_eq!(session.submission, SubmissionState::Submitting);
        assert!(session.errors.is_clean());
        assert!(!session.can_submit());
    }

    #[test]
    fn submit_while_submitting_is_a_no_op() {
        let session = dispatch(filled(), WaitlistAction::SubmitRequested);
        let again = dispatch(session.clone(), WaitlistAction::SubmitRequested);
        assert_eq!(again, session);
    }

    #[test]
    fn success_advances_the_step_once() {
        let session = dispatch(filled(), WaitlistAction::SubmitRequested);
        let session = dispatch(session, WaitlistAction::SubmissionSucceeded);
        assert_eq!(session.submission, SubmissionState::Succeeded);
        assert_eq!(session.step, Step::Success);
        assert_eq!(session.fields.full_name, "Ada Lovelace");
        // A stray duplicate completion changes nothing.
        let session = dispatch(session, WaitlistAction::SubmissionSucceeded);
        assert_eq!(session.submission, SubmissionState::Succeeded);
    }

    #[test]
    fn success_out_of_submitting_is_ignored() {
        let session = dispatch(filled(), WaitlistAction::SubmissionSucceeded);
        assert_eq!(session.submission, SubmissionState::Idle);
        assert_eq!(session.step, Step::Form);
    }

    #[test]
    fn failure_keeps_the_form_editable() {
        let before = dispatch(filled(), WaitlistAction::SubmitRequested);
        let session = dispatch(before.clone(), WaitlistAction::SubmissionFailed);
        assert_eq!(session.submission, SubmissionState::Failed);
        assert_eq!(session.step, Step::Form);
        assert_eq!(session.fields, before.fields);
        assert!(session.can_submit());
    }

    #[test]
    fn resubmit_after_failure_is_allowed() {
        let session = dispatch(filled(), WaitlistAction::SubmitRequested);
        let session = dispatch(session, WaitlistAction::SubmissionFailed);
        let session = dispatch(session, WaitlistAction::SubmitRequested);
        assert_eq!(session.submission, SubmissionState::Submitting);
    }

    #[test]
    fn reset_restores_the_pristine_session() {
        let session = dispatch(filled(), WaitlistAction::SubmitRequested);
        let session = dispatch(session, WaitlistAction::SubmissionSucceeded);
        let session = dispatch(session, WaitlistAction::Reset);
        assert_eq!(session, WaitlistSession::default());
    }

    #[test]
    fn modal_flags_are_independent() {
        let mut modals = ModalController::default();
        assert!(!modals.is_open(ModalKind::WaitlistForm));

        modals.open(ModalKind::WaitlistForm);
        modals.open(ModalKind::VideoShowcase);
        assert!(modals.is_open(ModalKind::WaitlistForm));
        assert!(modals.is_open(ModalKind::VideoShowcase));
        assert!(!modals.is_open(ModalKind::JoinSelector));

        modals.close(ModalKind::WaitlistForm);
        assert!(!modals.is_open(ModalKind::WaitlistForm));
        assert!(modals.is_open(ModalKind::VideoShowcase));
    }

    #[test]
    fn selecting_a_user_type_overwrites_and_opens_the_selector() {
        let mut modals = ModalController::default();
        assert_eq!(modals.selected_user_type, UserType::Host);

        modals.select_user_type(UserType::Guest);
        assert_eq!(modals.selected_user_type, UserType::Guest);
        assert!(modals.is_open(ModalKind::JoinSelector));

        modals.select_user_type(UserType::Associate);
        assert_eq!(modals.selected_user_type, UserType::Associate);
    }
}
