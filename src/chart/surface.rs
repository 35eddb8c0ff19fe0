use crate::config::Variant;

/// The drawing surface: a fixed logical size and the size it is displayed at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
    pub variant: Variant,
    displayed: (f64, f64),
}

impl Surface {
    pub fn new(width: f64, height: f64, variant: Variant) -> Self {
        Self { width, height, variant, displayed: (width, height) }
    }

    /// Displayed (width, height) in page pixels.
    #[inline] pub fn displayed(&self) -> (f64, f64) { self.displayed }

    /// Page pixels per logical unit.
    #[inline] pub fn display_scale(&self) -> f64 { self.displayed.0 / self.width }

    /// Fit the surface to a new viewport width, keeping the logical aspect
    /// ratio. Only the responsive variant resizes.
    pub fn resize(&mut self, viewport_width: f64) {
        if self.variant != Variant::Responsive || !(viewport_width > 0.0) { return }
        self.displayed = (viewport_width, viewport_width * self.height / self.width);
    }

    /// Convert a page-relative point into logical surface coordinates.
    #[inline]
    pub fn to_logical(&self, x: f64, y: f64) -> (f64, f64) {
        let scale = self.display_scale();
        (x / scale, y / scale)
    }
}
