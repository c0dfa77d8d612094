use timeline_model::{Record, Viewport, VisualSettings};
use timeline_render::render;
use timeline_svg::write_svg;

fn record(date: &str, event: &str, description: &str) -> Record {
    Record {
        date: date.to_string(),
        date_display: date.to_string(),
        event: event.to_string(),
        event_display: event.to_string(),
        description: description.to_string(),
        ..Record::default()
    }
}

#[test]
fn document_contains_baseline_markers_and_tooltips() {
    let records = vec![
        record("2024-01-01", "Kickoff", "Project start"),
        record("2024-06-01", "Launch", "Ship it"),
    ];
    let scene = render(&records, Viewport::new(800.0, 400.0), &VisualSettings::default());
    let svg = write_svg(&scene).expect("svg output");

    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains(r#"<svg xmlns="http://www.w3.org/2000/svg" width="800" height="400""#));
    assert!(svg.contains(r#"<line x1="50" y1="200" x2="750" y2="200""#));
    assert_eq!(svg.matches("<circle").count(), 2);
    assert!(svg.contains("<title>"));
    assert!(svg.contains("Project start"));
    assert!(svg.contains("Ship it"));
}

#[test]
fn empty_scene_has_no_markers() {
    let scene = render(&[], Viewport::new(640.0, 200.0), &VisualSettings::default());
    let svg = write_svg(&scene).expect("svg output");

    assert!(svg.contains("<line"));
    assert!(!svg.contains("<circle"));
    assert!(!svg.contains("<text"));
}

#[test]
fn marker_glyph_uses_resting_visuals() {
    let records = vec![record("2024-01-01", "Kickoff", "")];
    let scene = render(&records, Viewport::new(800.0, 400.0), &VisualSettings::default());
    let svg = write_svg(&scene).expect("svg output");

    assert!(svg.contains(r#"r="5""#));
    assert!(svg.contains(r##"fill="#000000""##));
    assert!(svg.contains(r#"stroke-width="2""#));
}

#[test]
fn tooltip_text_is_escaped() {
    let records = vec![record("2024-01-01", "Kickoff", "Fish & chips <today>")];
    let scene = render(&records, Viewport::new(800.0, 400.0), &VisualSettings::default());
    let svg = write_svg(&scene).expect("svg output");

    assert!(svg.contains("Fish &amp; chips &lt;today&gt;"));
    assert!(!svg.contains("<today>"));
}
