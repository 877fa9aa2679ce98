//! Newsletter signup form: the email field and its submit status.
//!
//! The form never performs I/O.  `begin_submit` hands out the address to
//! send and `finish` records how the request went.

/// Where the current (or last) submission stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmitState {
    /// Line shown under the field, if any.
    pub fn message(self) -> Option<&'static str> {
        match self {
            SubmitState::Idle => None,
            SubmitState::Submitting => Some("Subscribing..."),
            SubmitState::Success => Some("Thank you for subscribing!"),
            SubmitState::Error => Some("Something went wrong. Please try again."),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterForm {
    email: String,
    state: SubmitState,
}

impl NewsletterForm {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    /// The button is live only with something typed and nothing in flight.
    pub fn can_submit(&self) -> bool {
        !self.email.is_empty() && !self.is_submitting()
    }

    /// Append a character.  Editing clears a previous outcome.
    pub fn push(&mut self, c: char) {
        if self.is_submitting() {
            return;
        }
        self.email.push(c);
        self.state = SubmitState::Idle;
    }

    pub fn backspace(&mut self) {
        if self.is_submitting() {
            return;
        }
        self.email.pop();
        self.state = SubmitState::Idle;
    }

    /// Start a submission.  Returns the address to post, or `None` when
    /// the field is empty or a request is already in flight.
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.state = SubmitState::Submitting;
        Some(self.email.clone())
    }

    /// Record the outcome of the in-flight request.  A success clears the
    /// field; a failure keeps it for another try.
    pub fn finish(&mut self, accepted: bool) {
        if !self.is_submitting() {
            return;
        }
        if accepted {
            self.email.clear();
            self.state = SubmitState::Success;
        } else {
            self.state = SubmitState::Error;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> NewsletterForm {
        let mut form = NewsletterForm::default();
        text.chars().for_each(|c| form.push(c));
        form
    }

    #[test]
    fn empty_field_refuses_to_submit() {
        let mut form = NewsletterForm::default();
        assert!(!form.can_submit());
        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.state(), SubmitState::Idle);
    }

    #[test]
    fn submit_moves_to_submitting_with_the_typed_address() {
        let mut form = typed("ada@example.com");
        assert_eq!(form.begin_submit().as_deref(), Some("ada@example.com"));
        assert_eq!(form.state(), SubmitState::Submitting);
        assert_eq!(form.state().message(), Some("Subscribing..."));
    }

    #[test]
    fn in_flight_request_blocks_a_second_submit_and_edits() {
        let mut form = typed("ada@example.com");
        form.begin_submit();
        assert_eq!(form.begin_submit(), None);
        form.push('x');
        form.backspace();
        assert_eq!(form.email(), "ada@example.com");
        assert!(form.is_submitting());
    }

    #[test]
    fn success_clears_the_field() {
        let mut form = typed("ada@example.com");
        form.begin_submit();
        form.finish(true);
        assert_eq!(form.state(), SubmitState::Success);
        assert_eq!(form.email(), "");
        assert!(!form.can_submit());
    }

    #[test]
    fn failure_keeps_the_field_for_a_retry() {
        let mut form = typed("ada@example.com");
        form.begin_submit();
        form.finish(false);
        assert_eq!(form.state(), SubmitState::Error);
        assert_eq!(form.email(), "ada@example.com");
        assert_eq!(form.begin_submit().as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn editing_after_an_outcome_returns_to_idle() {
        let mut form = typed("ada@example");
        form.begin_submit();
        form.finish(false);
        form.push('.');
        assert_eq!(form.state(), SubmitState::Idle);
        assert_eq!(form.state().message(), None);
    }

    #[test]
    fn stray_completion_is_ignored() {
        let mut form = typed("ada@example.com");
        form.finish(true);
        assert_eq!(form.state(), SubmitState::Idle);
        assert_eq!(form.email(), "ada@example.com");
    }
}
