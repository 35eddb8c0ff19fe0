//! Join-and-render pipeline and the interaction model of the rendered map.

mod chart;
mod events;
mod legend;
mod marks;
mod surface;
mod tooltip;

pub use chart::Chart;
pub use events::{ChartContext, ChartEvent, EventKind, Handler};
pub use legend::{Legend, Swatch, Tick};
pub use marks::CountyMark;
pub use surface::Surface;
pub use tooltip::{Fade, TooltipState};
