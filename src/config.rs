//! Chart configuration with the defaults of the county attainment map.

use std::time::Duration;

use crate::{geom::Projection, scale::{Rgb, BLUES_9, MISSING_COLOR}};

/// Layout variant of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Fixed 960x600 pixel surface; the tooltip may overflow it.
    #[default]
    Fixed,
    /// Scales with the viewport, keeps aspect ratio, clamps the tooltip.
    Responsive,
}

/// Legend placement and axis parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendConfig {
    /// Distance of the legend origin from the right edge of the surface.
    pub right_offset: f64,
    pub top: f64,
    /// Axis length in pixels; the domain `[0, max]` maps onto `[0, axis_length]`.
    pub axis_length: f64,
    pub swatch_height: f64,
    pub tick_count: usize,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self { right_offset: 300.0, top: 40.0, axis_length: 200.0, swatch_height: 10.0, tick_count: 3 }
    }
}

/// Tooltip placement and fade timings.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipConfig {
    /// Offset from the pointer to the tooltip's top-left corner.
    pub offset: (f64, f64),
    pub visible_opacity: f64,
    pub fade_in: Duration,
    pub fade_out: Duration,
    /// Assumed tooltip box size, used when clamping inside the surface.
    pub box_size: (f64, f64),
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            offset: (20.0, -28.0),
            visible_opacity: 0.9,
            fade_in: Duration::from_millis(200),
            fade_out: Duration::from_millis(500),
            box_size: (200.0, 40.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub variant: Variant,
    pub projection: Projection,
    /// Name of the topology object holding the regions.
    pub object: String,
    pub palette: Vec<Rgb>,
    pub missing_color: Rgb,
    /// Draw shared borders between regions as one stroke path.
    pub mesh: bool,
    pub title: String,
    pub description: String,
    pub legend: LegendConfig,
    pub tooltip: TooltipConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 600.0,
            variant: Variant::Fixed,
            projection: Projection::Identity,
            object: "counties".to_string(),
            palette: BLUES_9.to_vec(),
            missing_color: MISSING_COLOR,
            mesh: false,
            title: "United States Educational Attainment".to_string(),
            description: "Percentage of adults age 25 and older with a bachelor's degree or higher (2010-2014)".to_string(),
            legend: LegendConfig::default(),
            tooltip: TooltipConfig::default(),
        }
    }
}

impl ChartConfig {
    /// Height / width of the logical surface.
    #[inline] pub fn aspect_ratio(&self) -> f64 { self.height / self.width }
}
