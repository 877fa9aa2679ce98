//! Footer: newsletter signup and static chrome, revealed once.

use std::time::Duration;

use crate::core::geometry::{Rect, Viewport};
use crate::core::reveal::{Reveal, RevealParams};
use crate::core::signup::NewsletterForm;
use crate::core::visibility::Margin;

use super::{Section, SectionError};

#[derive(Debug, Clone, PartialEq)]
pub struct FooterParams {
    pub heading: RevealParams,
    /// Social links and copyright row.
    pub links: RevealParams,
    pub newsletter: NewsletterForm,
}

#[derive(Debug)]
pub struct FooterSection {
    region: Rect,
    heading: Reveal,
    links: Reveal,
    newsletter: NewsletterForm,
    reduced_motion: bool,
}

impl FooterSection {
    pub fn new(reduced_motion: bool) -> Result<Self, SectionError> {
        Ok(Self {
            region: Rect::default(),
            heading: Reveal::new(Margin::ZERO, Duration::ZERO, Duration::from_millis(800), 50.0)?,
            links: Reveal::new(
                Margin::ZERO,
                Duration::from_millis(500),
                Duration::from_millis(500),
                0.0,
            )?,
            newsletter: NewsletterForm::default(),
            reduced_motion,
        })
    }

    pub fn params(&self) -> FooterParams {
        FooterParams {
            heading: self.heading.params(self.reduced_motion),
            links: self.links.params(self.reduced_motion),
            newsletter: self.newsletter.clone(),
        }
    }

    pub fn newsletter_mut(&mut self) -> &mut NewsletterForm {
        &mut self.newsletter
    }
}

impl Section for FooterSection {
    fn name(&self) -> &'static str {
        "footer"
    }

    fn height_vh(&self) -> f64 {
        1.0
    }

    fn layout(&mut self, region: Rect, viewport: &Viewport) {
        self.region = region;
        self.on_scroll(viewport);
    }

    fn region(&self) -> Rect {
        self.region
    }

    fn on_scroll(&mut self, viewport: &Viewport) {
        let r = self.region;
        self.heading
            .update(&Rect::new(r.x, r.y, r.width, r.height * 0.4), viewport);
        self.links
            .update(&Rect::new(r.x, r.y + r.height * 0.7, r.width, r.height * 0.3), viewport);
    }

    fn on_tick(&mut self, dt: Duration) {
        self.heading.advance(dt);
        self.links.advance(dt);
    }

    fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    fn teardown(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_reveal_after_heading() {
        let vp = Viewport::new(0.0, 1280.0, 800.0);
        let mut f = FooterSection::new(false).unwrap();
        f.layout(Rect::new(0.0, 0.0, 1280.0, 800.0), &vp);
        f.on_tick(Duration::from_millis(400));
        let p = f.params();
        assert!(p.heading.opacity > 0.0);
        assert_eq!(p.links.opacity, 0.0);
        f.on_tick(Duration::from_secs(2));
        assert_eq!(f.params().links, RevealParams::SHOWN);
    }

    #[test]
    fn params_carry_the_form() {
        let mut f = FooterSection::new(true).unwrap();
        "a@b.co".chars().for_each(|c| f.newsletter_mut().push(c));
        f.newsletter_mut().begin_submit();
        let form = f.params().newsletter;
        assert_eq!(form.email(), "a@b.co");
        assert!(form.is_submitting());
    }
}
