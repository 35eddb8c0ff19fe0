//! Standalone HTML page wrapping the SVG map and the tooltip element.

use std::io::Write;

use crate::{chart::Chart, config::Variant, error::{EdumapError, Result}};

use super::svg::{escape, write_svg_element};

/// Write a complete HTML page: title, description, inline SVG, a hidden
/// `#tooltip` element, and the script that shows it on hover.
pub fn write_html<W: Write>(writer: &mut W, chart: &Chart) -> Result<()> {
    let config = chart.config();
    let tooltip = &config.tooltip;
    let container = match config.variant {
        // Padding-bottom keeps the container at the surface's aspect ratio.
        Variant::Responsive => format!(
            ".chart {{ position: relative; width: 100%; padding-bottom: {:.4}%; }}\n    \
             .chart svg {{ position: absolute; top: 0; left: 0; width: 100%; height: 100%; }}",
            config.aspect_ratio() * 100.0,
        ),
        Variant::Fixed => format!(".chart {{ width: {}px; height: {}px; }}", config.width, config.height),
    };

    writeln!(writer, r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
    body {{ font-family: sans-serif; margin: 1rem; }}
    {container}
    #tooltip {{ position: absolute; opacity: 0; pointer-events: none; padding: 6px 8px;
        max-width: {box_width}px; background: rgba(255, 255, 255, {opacity}); border: 1px solid #111827;
        font-size: 12px; }}
</style>
</head>
<body>
<h1 id="title">{title}</h1>
<div id="description">{description}</div>
<div class="chart">"#,
        title = escape(&config.title),
        description = escape(&config.description),
        box_width = tooltip.box_size.0,
        opacity = tooltip.visible_opacity,
    )?;
    write_svg_element(writer, chart)?;
    writeln!(writer, r#"</div>
<div id="tooltip" style="opacity: 0"></div>"#)?;
    write_tooltip_script(writer, chart)?;
    writeln!(writer, "</body>\n</html>")?;
    Ok(())
}

/// Hover behavior for the page: each county's `<title>` text and
/// `data-education` go into `#tooltip`, placed at the configured offset from
/// the pointer and faded in and out. The responsive layout keeps the box
/// inside the map.
fn write_tooltip_script<W: Write>(writer: &mut W, chart: &Chart) -> Result<()> {
    let config = chart.config();
    let tooltip = &config.tooltip;
    writeln!(writer, r#"<script>
(function () {{
  var tooltip = document.getElementById("tooltip");
  var svg = document.querySelector(".chart svg");
  var offset = [{dx}, {dy}], box = [{bw}, {bh}], clamp = {clamp};
  function place(event) {{
    var left = event.pageX + offset[0], top = event.pageY + offset[1];
    if (clamp) {{
      var rect = svg.getBoundingClientRect();
      var x0 = rect.left + window.scrollX, y0 = rect.top + window.scrollY;
      left = Math.max(x0, Math.min(left, x0 + rect.width - box[0]));
      top = Math.max(y0, Math.min(top, y0 + rect.height - box[1]));
    }}
    tooltip.style.left = left + "px";
    tooltip.style.top = top + "px";
  }}
  document.querySelectorAll(".chart path.county").forEach(function (path) {{
    var title = path.querySelector("title");
    if (!title) return;
    path.addEventListener("mouseover", function (event) {{
      tooltip.textContent = title.textContent;
      tooltip.setAttribute("data-education", path.getAttribute("data-education"));
      place(event);
      tooltip.style.transition = "opacity {fade_in}ms ease-in-out";
      tooltip.style.opacity = {opacity};
    }});
    path.addEventListener("mouseout", function () {{
      tooltip.style.transition = "opacity {fade_out}ms ease-in-out";
      tooltip.style.opacity = 0;
    }});
  }});
}})();
</script>"#,
        dx = tooltip.offset.0,
        dy = tooltip.offset.1,
        bw = tooltip.box_size.0,
        bh = tooltip.box_size.1,
        clamp = config.variant == Variant::Responsive,
        fade_in = tooltip.fade_in.as_millis(),
        fade_out = tooltip.fade_out.as_millis(),
        opacity = tooltip.visible_opacity,
    )?;
    Ok(())
}

/// Render the page as a string.
pub fn to_html_string(chart: &Chart) -> Result<String> {
    let mut buffer = Vec::new();
    write_html(&mut buffer, chart)?;
    String::from_utf8(buffer)
        .map_err(|e| EdumapError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
