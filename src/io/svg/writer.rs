//! SVG writing operations.

use std::io::Write;

use crate::{
    chart::{Chart, Legend},
    config::Variant,
    error::{EdumapError, Result},
};

use super::{escape, path::{lines_to_path, multipolygon_to_path}};

/// Height of axis tick lines below the axis.
const TICK_SIZE: f64 = 6.0;

/// Write a complete standalone SVG document for the chart.
pub fn write_svg<W: Write>(writer: &mut W, chart: &Chart) -> Result<()> {
    writeln!(writer, r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"##)?;
    write_svg_element(writer, chart)
}

/// Render the chart as an SVG string.
pub fn to_svg_string(chart: &Chart) -> Result<String> {
    let mut buffer = Vec::new();
    write_svg(&mut buffer, chart)?;
    String::from_utf8(buffer)
        .map_err(|e| EdumapError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Write the `<svg>` element alone, for inlining in HTML.
pub(crate) fn write_svg_element<W: Write>(writer: &mut W, chart: &Chart) -> Result<()> {
    write_svg_header(writer, chart)?;
    write_svg_styles(writer)?;
    draw_counties(writer, chart)?;
    if let Some(mesh) = chart.mesh() {
        writeln!(writer, r#"<path class="borders" d="{}"/>"#, lines_to_path(mesh))?;
    }
    draw_legend(writer, chart.legend())?;
    write_svg_footer(writer)
}

/// Write the opening <svg> tag and accessible title.
fn write_svg_header<W: Write>(writer: &mut W, chart: &Chart) -> Result<()> {
    let config = chart.config();
    let (width, height) = (config.width, config.height);
    match config.variant {
        Variant::Fixed => writeln!(writer,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#,
        )?,
        Variant::Responsive => writeln!(writer,
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="responsive" viewBox="0 0 {width} {height}" preserveAspectRatio="xMidYMid meet">"#,
        )?,
    }
    writeln!(writer, "<title>{}</title>", escape(&config.title))?;
    writeln!(writer, "<desc>{}</desc>", escape(&config.description))?;
    Ok(())
}

/// Write SVG styles for map features.
fn write_svg_styles<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, r##"<defs>
<style>
    .county {{ stroke: none; }}
    .county:hover {{ stroke: #111827; stroke-width: 1; }}
    .borders {{ fill: none; stroke: #ffffff; stroke-width: 0.5; stroke-linejoin: round; }}
    #legend text {{ font: 10px sans-serif; fill: #111827; }}
    #legend .domain, #legend line {{ stroke: #111827; fill: none; }}
</style>
</defs>"##)?;
    Ok(())
}

/// Write the closing </svg> tag.
fn write_svg_footer<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "</svg>")?;
    Ok(())
}

/// One path per county, annotated for tooltips and automated checks.
fn draw_counties<W: Write>(writer: &mut W, chart: &Chart) -> Result<()> {
    writeln!(writer, r#"<g class="counties">"#)?;
    for (i, mark) in chart.marks().iter().enumerate() {
        write!(writer,
            r#"<path class="county" data-fips="{}" data-education="{}" fill="{}" d="{}">"#,
            mark.fips, mark.education, mark.fill, multipolygon_to_path(&mark.shape),
        )?;
        if let Some(record) = chart.record_for(i) {
            write!(writer, "<title>{}</title>", escape(&record.label()))?;
        }
        writeln!(writer, "</path>")?;
    }
    writeln!(writer, "</g>")?;
    Ok(())
}

/// Swatches on top of a bottom axis with labeled ticks.
fn draw_legend<W: Write>(writer: &mut W, legend: &Legend) -> Result<()> {
    let (x, y) = legend.origin;
    writeln!(writer, r#"<g id="legend" transform="translate({x},{y})">"#)?;
    for swatch in &legend.swatches {
        writeln!(writer,
            r#"<rect x="{:.3}" y="0" width="{:.3}" height="{}" fill="{}"/>"#,
            swatch.x, swatch.width, swatch.height, swatch.fill,
        )?;
    }

    writeln!(writer, r#"<g class="axis" transform="translate(0,{})">"#, legend.swatch_height)?;
    writeln!(writer, r#"<path class="domain" d="M0,{TICK_SIZE}V0H{}V{TICK_SIZE}"/>"#, legend.axis_length)?;
    for tick in &legend.ticks {
        writeln!(writer,
            r#"<g class="tick" transform="translate({:.3},0)"><line y2="{TICK_SIZE}"/><text y="{}" dy="0.71em" text-anchor="middle">{}</text></g>"#,
            tick.position, TICK_SIZE + 3.0, escape(&tick.label),
        )?;
    }
    writeln!(writer, "</g>")?;
    writeln!(writer, "</g>")?;
    Ok(())
}
