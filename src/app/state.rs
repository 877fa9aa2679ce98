//! Central preview state.
//!
//! All mutable state lives here so rendering can be a pure function over
//! `&PreviewState` and event handling a mutation of `&mut PreviewState`.

use std::time::Duration;

use crate::api::client::SubmitError;
use crate::config::PreviewConfig;
use crate::core::page::Page;
use crate::ui::layout::PX_PER_ROW;
use crate::ui::smooth_scroll::SmoothScroll;

pub struct PreviewState {
    pub page: Page,
    /// Eases the page's scroll offset toward the requested position.
    pub scroll: SmoothScroll,
    /// Distance of one arrow key or wheel notch, px.
    pub scroll_step: f64,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional message shown in the status bar.
    pub status_message: Option<String>,
    /// Keys go to the footer's email field instead of the bindings.
    pub editing_email: bool,
    /// Address waiting for the main loop to post it.
    pending_signup: Option<String>,
}

impl PreviewState {
    pub fn new(page: Page, config: &PreviewConfig) -> Self {
        let mut scroll = SmoothScroll::new(config.smooth_scroll_speed);
        scroll.jump(page.viewport().scroll_y);
        Self {
            page,
            scroll,
            scroll_step: f64::from(config.scroll_step) * PX_PER_ROW,
            should_quit: false,
            status_message: None,
            editing_email: false,
            pending_signup: None,
        }
    }

    pub fn reduced_motion(&self) -> bool {
        self.page.settings().reduced_motion
    }

    /// Request an absolute scroll position.  Reduced motion jumps there;
    /// otherwise the next ticks ease toward it.
    pub fn scroll_to(&mut self, y: f64) {
        let y = y.clamp(0.0, self.page.max_scroll());
        if self.reduced_motion() {
            self.scroll.jump(y);
            self.page.scroll_to(y);
        } else {
            self.scroll.set_target(y);
        }
    }

    pub fn scroll_by(&mut self, dy: f64) {
        self.scroll_to(self.scroll.target() + dy);
    }

    /// One frame of host time.
    pub fn tick(&mut self, dt: Duration) {
        self.scroll.tick();
        self.page.scroll_to(self.scroll.position());
        self.page.tick(dt);
    }

    /// Focus the footer's email field, scrolling it into view.
    pub fn focus_newsletter(&mut self) {
        self.editing_email = true;
        self.scroll_to(self.page.max_scroll());
        self.status_message = Some("Type your email · Enter subscribe · Esc done".into());
    }

    /// Queue the typed address for posting.  Refused while empty or while
    /// a request is in flight.
    pub fn submit_newsletter(&mut self) {
        if let Some(email) = self.page.newsletter_mut().begin_submit() {
            tracing::debug!(%email, "newsletter signup queued");
            self.pending_signup = Some(email);
        }
    }

    pub fn take_pending_signup(&mut self) -> Option<String> {
        self.pending_signup.take()
    }

    /// Outcome of a posted signup.
    pub fn finish_signup(&mut self, result: Result<(), SubmitError>) {
        match &result {
            Ok(()) => tracing::info!("newsletter signup accepted"),
            Err(err) => tracing::warn!(%err, "newsletter signup failed"),
        }
        self.page.newsletter_mut().finish(result.is_ok());
    }

    /// The page pane changed size, in document px.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.page.resize(width, height);
        let y = self.page.viewport().scroll_y;
        self.scroll.jump(y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sections::MotionSettings;
    use crate::core::signup::SubmitState;

    fn state(reduced_motion: bool) -> PreviewState {
        let settings = MotionSettings {
            reduced_motion,
            ..MotionSettings::default()
        };
        PreviewState::new(Page::new(settings, 640.0, 400.0).unwrap(), &PreviewConfig::default())
    }

    #[test]
    fn scroll_eases_over_ticks() {
        let mut s = state(false);
        s.scroll_by(160.0);
        assert_eq!(s.page.viewport().scroll_y, 0.0);
        s.tick(Duration::from_millis(50));
        let first = s.page.viewport().scroll_y;
        assert!(first > 0.0 && first < 160.0);
        for _ in 0..60 {
            s.tick(Duration::from_millis(50));
        }
        assert_eq!(s.page.viewport().scroll_y, 160.0);
    }

    #[test]
    fn reduced_motion_scrolls_immediately() {
        let mut s = state(true);
        s.scroll_by(160.0);
        assert_eq!(s.page.viewport().scroll_y, 160.0);
    }

    #[test]
    fn targets_are_clamped_to_the_document() {
        let mut s = state(true);
        s.scroll_by(-500.0);
        assert_eq!(s.scroll.target(), 0.0);
        s.scroll_to(f64::MAX);
        assert_eq!(s.page.viewport().scroll_y, s.page.max_scroll());
    }

    #[test]
    fn resize_resyncs_the_scroll_animation() {
        let mut s = state(true);
        s.scroll_to(s.page.max_scroll());
        s.resize(640.0, 800.0);
        assert_eq!(s.scroll.position(), s.page.viewport().scroll_y);
        assert_eq!(s.scroll.position(), s.scroll.target());
    }

    fn type_email(s: &mut PreviewState, email: &str) {
        email.chars().for_each(|c| s.page.newsletter_mut().push(c));
    }

    #[test]
    fn focusing_the_field_scrolls_to_the_footer() {
        let mut s = state(true);
        s.focus_newsletter();
        assert!(s.editing_email);
        assert_eq!(s.page.viewport().scroll_y, s.page.max_scroll());
    }

    #[test]
    fn submit_queues_one_request() {
        let mut s = state(true);
        s.submit_newsletter();
        assert_eq!(s.take_pending_signup(), None);

        type_email(&mut s, "ada@example.com");
        s.submit_newsletter();
        s.submit_newsletter();
        assert_eq!(s.take_pending_signup().as_deref(), Some("ada@example.com"));
        assert_eq!(s.take_pending_signup(), None);
        assert_eq!(s.page.footer().newsletter.state(), SubmitState::Submitting);
    }

    #[test]
    fn finished_signup_updates_the_form() {
        let mut s = state(true);
        type_email(&mut s, "ada@example.com");
        s.submit_newsletter();
        s.finish_signup(Err(SubmitError::Rejected {
            status: 400,
            message: "Invalid email address".into(),
        }));
        assert_eq!(s.page.footer().newsletter.state(), SubmitState::Error);

        s.submit_newsletter();
        s.finish_signup(Ok(()));
        let form = s.page.footer().newsletter;
        assert_eq!(form.state(), SubmitState::Success);
        assert_eq!(form.email(), "");
    }
}
