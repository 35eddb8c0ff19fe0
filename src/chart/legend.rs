use crate::{
    config::LegendConfig,
    scale::{percent_label, ticks, QuantizeScale, Rgb},
};

/// One palette color drawn along the legend axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    pub x: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Position along the axis, in pixels from the legend origin.
    pub position: f64,
    pub label: String,
}

/// Legend: palette swatches over a linear percentage axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    /// Legend origin in surface coordinates.
    pub origin: (f64, f64),
    pub domain: (f64, f64),
    pub axis_length: f64,
    pub swatch_height: f64,
    pub swatches: Vec<Swatch>,
    pub ticks: Vec<Tick>,
}

impl Legend {
    /// Lay out one swatch per palette color, each spanning the axis
    /// positions of its bucket, and nicely rounded axis ticks.
    pub fn new(scale: &QuantizeScale, config: &LegendConfig, surface_width: f64) -> Self {
        let domain = scale.domain();
        let axis_length = config.axis_length;
        let position = |value: f64| axis_position(domain, axis_length, value);

        let swatches = scale.range().iter().enumerate()
            .filter_map(|(i, &fill)| {
                let (lo, hi) = scale.invert_extent(i)?;
                Some(Swatch { x: position(lo), width: position(hi) - position(lo), height: config.swatch_height, fill })
            })
            .collect();

        let ticks = ticks(domain.0, domain.1, config.tick_count).into_iter()
            .map(|value| Tick { value, position: position(value), label: percent_label(value) })
            .collect();

        Self {
            origin: (surface_width - config.right_offset, config.top),
            domain,
            axis_length,
            swatch_height: config.swatch_height,
            swatches,
            ticks,
        }
    }
}

/// Linear map of `[d0, d1]` onto `[0, length]`; a degenerate domain maps to the middle.
fn axis_position((d0, d1): (f64, f64), length: f64, value: f64) -> f64 {
    let span = d1 - d0;
    if span == 0.0 { return length / 2.0 }
    (value - d0) / span * length
}
