use std::time::Duration;

use crate::{config::TooltipConfig, data::AttainmentRecord};

/// Opacity transition started by the last show/hide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    pub from: f64,
    pub to: f64,
    pub duration: Duration,
}

impl Fade {
    /// Opacity `elapsed` after the fade started, with cubic in-out easing.
    pub fn opacity_at(&self, elapsed: Duration) -> f64 {
        let t = if self.duration.is_zero() { 1.0 } else { (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0) };
        let eased = { let t2 = t * 2.0; if t2 <= 1.0 { t2 * t2 * t2 / 2.0 } else { ((t2 - 2.0).powi(3) + 2.0) / 2.0 } };
        self.from + (self.to - self.from) * eased
    }
}

/// The single floating label shown while hovering a county.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipState {
    text: Option<String>,
    education: Option<f64>,
    position: (f64, f64),
    fade: Fade,
    /// Time since `fade` started, if the host has reported it. `None` means
    /// the fade is treated as finished.
    elapsed: Option<Duration>,
}

impl Default for TooltipState {
    fn default() -> Self {
        Self { text: None, education: None, position: (0.0, 0.0), fade: Fade { from: 0.0, to: 0.0, duration: Duration::ZERO }, elapsed: None }
    }
}

impl TooltipState {
    /// Show a record near the pointer. With `bounds` (displayed surface size),
    /// the tooltip box is kept inside the surface.
    pub fn show(&mut self, record: &AttainmentRecord, page: (f64, f64), config: &TooltipConfig, bounds: Option<(f64, f64)>) {
        let mut left = page.0 + config.offset.0;
        let mut top = page.1 + config.offset.1;
        if let Some((width, height)) = bounds {
            left = left.min(width - config.box_size.0).max(0.0);
            top = top.min(height - config.box_size.1).max(0.0);
        }

        self.fade = Fade { from: self.opacity(), to: config.visible_opacity, duration: config.fade_in };
        self.elapsed = None;
        self.text = Some(record.label());
        self.education = Some(record.bachelors_or_higher);
        self.position = (left, top);
    }

    /// Fade out. Content is left in place and replaced by the next show.
    pub fn hide(&mut self, config: &TooltipConfig) {
        self.fade = Fade { from: self.opacity(), to: 0.0, duration: config.fade_out };
        self.elapsed = None;
    }

    /// Record how long the current fade has been running, so the next show
    /// or hide starts from the opacity actually on screen.
    pub fn advance(&mut self, elapsed: Duration) {
        self.elapsed = Some(elapsed);
    }

    /// Opacity at the last reported time, or the fade target if none was reported.
    pub fn opacity(&self) -> f64 {
        self.elapsed.map_or(self.fade.to, |elapsed| self.fade.opacity_at(elapsed))
    }

    /// Whether the tooltip is showing or fading in.
    #[inline] pub fn is_visible(&self) -> bool { self.fade.to > 0.0 }

    /// Current label text, only while visible.
    pub fn text(&self) -> Option<&str> {
        if self.is_visible() { self.text.as_deref() } else { None }
    }

    /// `data-education` value of the last shown record.
    #[inline] pub fn education(&self) -> Option<f64> { self.education }

    /// Top-left corner in page pixels.
    #[inline] pub fn position(&self) -> (f64, f64) { self.position }

    #[inline] pub fn fade(&self) -> Fade { self.fade }
}
