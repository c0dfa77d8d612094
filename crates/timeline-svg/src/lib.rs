//! SVG output generation.
//!
//! Serializes a rendered [`Scene`] into a standalone SVG document. Each
//! marker carries its tooltip as a `<title>` child, so plain SVG viewers
//! show the grouped records on hover. The writer is stateless; every call
//! produces a complete document that replaces prior output.

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use timeline_render::scene::{Line, Marker, Scene, Tick};

/// Tick stub length below the baseline.
const TICK_LENGTH: f64 = 6.0;
/// Distance from the baseline to the tick label baseline.
const TICK_LABEL_OFFSET: f64 = 20.0;
const AXIS_COLOR: &str = "#000000";
const LABEL_FONT_FAMILY: &str = "sans-serif";
const LABEL_FONT_SIZE: f64 = 11.0;

/// Writes a scene as an SVG document string.
pub fn write_svg(scene: &Scene) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .context("write xml declaration")?;

    let width = format_length(scene.viewport.width);
    let height = format_length(scene.viewport.height);
    let mut svg = BytesStart::new("svg");
    svg.push_attribute(("xmlns", "http://www.w3.org/2000/svg"));
    svg.push_attribute(("width", width.as_str()));
    svg.push_attribute(("height", height.as_str()));
    svg.push_attribute(("viewBox", format!("0 0 {width} {height}").as_str()));
    writer
        .write_event(Event::Start(svg))
        .context("open svg element")?;

    write_line(&mut writer, &scene.baseline).context("write baseline")?;
    for tick in &scene.ticks {
        write_tick(&mut writer, tick, scene.baseline.y1).context("write tick")?;
    }
    for marker in &scene.markers {
        write_marker(&mut writer, marker).context("write marker")?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("svg")))
        .context("close svg element")?;

    String::from_utf8(writer.into_inner()).context("svg output is not valid utf-8")
}

fn write_line(writer: &mut Writer<Vec<u8>>, line: &Line) -> Result<()> {
    let mut element = BytesStart::new("line");
    element.push_attribute(("x1", format_length(line.x1).as_str()));
    element.push_attribute(("y1", format_length(line.y1).as_str()));
    element.push_attribute(("x2", format_length(line.x2).as_str()));
    element.push_attribute(("y2", format_length(line.y2).as_str()));
    element.push_attribute(("stroke", AXIS_COLOR));
    element.push_attribute(("stroke-width", format_length(line.width).as_str()));
    writer.write_event(Event::Empty(element))?;
    Ok(())
}

fn write_tick(writer: &mut Writer<Vec<u8>>, tick: &Tick, baseline_y: f64) -> Result<()> {
    let mut stub = BytesStart::new("line");
    stub.push_attribute(("x1", format_length(tick.x).as_str()));
    stub.push_attribute(("y1", format_length(baseline_y).as_str()));
    stub.push_attribute(("x2", format_length(tick.x).as_str()));
    stub.push_attribute(("y2", format_length(baseline_y + TICK_LENGTH).as_str()));
    stub.push_attribute(("stroke", AXIS_COLOR));
    stub.push_attribute(("stroke-width", "1"));
    writer.write_event(Event::Empty(stub))?;

    let mut label = BytesStart::new("text");
    label.push_attribute(("x", format_length(tick.x).as_str()));
    label.push_attribute(("y", format_length(baseline_y + TICK_LABEL_OFFSET).as_str()));
    label.push_attribute(("text-anchor", "middle"));
    label.push_attribute(("font-family", LABEL_FONT_FAMILY));
    label.push_attribute(("font-size", format_length(LABEL_FONT_SIZE).as_str()));
    writer.write_event(Event::Start(label))?;
    writer.write_event(Event::Text(BytesText::new(&tick.label)))?;
    writer.write_event(Event::End(BytesEnd::new("text")))?;
    Ok(())
}

fn write_marker(writer: &mut Writer<Vec<u8>>, marker: &Marker) -> Result<()> {
    let mut circle = BytesStart::new("circle");
    circle.push_attribute(("cx", format_length(marker.x).as_str()));
    circle.push_attribute(("cy", format_length(marker.y).as_str()));
    circle.push_attribute(("r", format_length(marker.visual.radius).as_str()));
    circle.push_attribute(("fill", marker.visual.fill.as_str()));
    circle.push_attribute(("stroke", marker.visual.stroke.as_str()));
    circle.push_attribute((
        "stroke-width",
        format_length(marker.visual.stroke_width).as_str(),
    ));
    writer.write_event(Event::Start(circle))?;
    writer.write_event(Event::Start(BytesStart::new("title")))?;
    writer.write_event(Event::Text(BytesText::new(&marker.tooltip)))?;
    writer.write_event(Event::End(BytesEnd::new("title")))?;
    writer.write_event(Event::End(BytesEnd::new("circle")))?;
    Ok(())
}

/// Integral lengths print without a fractional part.
fn format_length(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
