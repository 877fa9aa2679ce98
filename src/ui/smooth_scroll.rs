//! Smooth scroll with exponential ease-out.
//!
//! Input moves a target offset; each tick the rendered offset covers a
//! fixed fraction of the remaining distance, so long jumps decelerate
//! visibly before they settle.

/// Distance below which the animation snaps onto the target, px.
const SETTLE_PX: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct SmoothScroll {
    position: f64,
    target: f64,
    /// Fraction of the remaining distance covered per tick.
    speed: f64,
}

impl SmoothScroll {
    pub fn new(speed: f64) -> Self {
        Self {
            position: 0.0,
            target: 0.0,
            speed: speed.clamp(0.05, 0.95),
        }
    }

    /// Aim at `target`.  The rendered position catches up over later ticks.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Move both position and target, skipping the animation.
    pub fn jump(&mut self, y: f64) {
        self.position = y;
        self.target = y;
    }

    /// Advance one frame.
    pub fn tick(&mut self) {
        let remaining = self.target - self.position;
        if remaining.abs() < SETTLE_PX {
            self.position = self.target;
        } else {
            self.position += remaining * self.speed;
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn target(&self) -> f64 {
        self.target
    }
}
