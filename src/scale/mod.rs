//! Color scale, palette, and axis ticks.

mod color;
mod quantize;
mod ticks;

pub use color::{Rgb, BLUES_9, MISSING_COLOR};
pub use quantize::QuantizeScale;
pub use ticks::{percent_label, ticks};
