use std::fs;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use timeline_cli::ingest::{RoleAssignments, load_csv_table};
use timeline_cli::summary::{RenderOutcome, print_records};
use timeline_map::{EncodingState, map_records};
use timeline_model::{Record, Role, Viewport, VisualSettings};
use timeline_render::{group_by_date, render};
use timeline_svg::write_svg;

use crate::cli::{DataArgs, InspectArgs, RenderArgs};

pub fn run_render(args: &RenderArgs) -> Result<RenderOutcome> {
    let span = info_span!("render", input = %args.data.input.display());
    let _guard = span.enter();

    let records = load_records(&args.data)?;
    let viewport = Viewport::new(args.width, args.height);
    let scene = render(&records, viewport, &VisualSettings::default());
    let svg = write_svg(&scene).context("serialize svg")?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.data.input.with_extension("svg"));
    fs::write(&output, svg).with_context(|| format!("write {}", output.display()))?;

    let distinct_dates = group_by_date(&records).len();
    info!(
        records = records.len(),
        markers = scene.markers.len(),
        "timeline written"
    );
    Ok(RenderOutcome {
        output,
        records: records.len(),
        markers: scene.markers.len(),
        undrawn_dates: distinct_dates - scene.markers.len(),
    })
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let records = load_records(&args.data)?;
    print_records(&records);
    Ok(())
}

pub fn run_settings() -> Result<()> {
    let descriptor = VisualSettings::default().formatting_model();
    let json = serde_json::to_string_pretty(&descriptor).context("serialize formatting model")?;
    println!("{json}");
    Ok(())
}

/// Ingests the CSV input and maps it to records.
///
/// Each invocation starts from a fresh encoding state, so color/symbol
/// assignment is deterministic per run.
fn load_records(args: &DataArgs) -> Result<Vec<Record>> {
    let roles = role_assignments(args);
    let table = load_csv_table(&args.input, &roles)?;
    let mut encoding = EncodingState::new();
    Ok(map_records(&table, &mut encoding))
}

fn role_assignments(args: &DataArgs) -> RoleAssignments {
    let mut roles = RoleAssignments::new();
    let flags = [
        (Role::Date, &args.date_column),
        (Role::Event, &args.event_column),
        (Role::Description, &args.description_column),
        (Role::Color, &args.color_column),
        (Role::Symbol, &args.symbol_column),
    ];
    for (role, header) in flags {
        if let Some(header) = header {
            roles.assign(role, header);
        }
    }
    roles
}
