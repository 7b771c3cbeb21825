use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use roadwatch::api::Evaluation;
use roadwatch::catalog::{DistressTemplate, SurfaceType};
use roadwatch::classify::ConditionBand;
use roadwatch::roads::{Page, RoadUpdate, ROAD_COLUMNS};
use roadwatch::vci::{DistressEntry, VciResult};

fn band_color(band: ConditionBand) -> Color {
    let (r, g, b) = band.rgb();
    Color::Rgb { r, g, b }
}

fn band_cell(band: Option<ConditionBand>) -> Cell {
    match band {
        Some(b) => Cell::new(b.to_string())
            .fg(band_color(b))
            .add_attribute(Attribute::Bold),
        None => Cell::new("-").fg(Color::Blue),
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn print_catalog(surface: SurfaceType, rows: &[DistressTemplate]) {
    println!("\nSurface: {} ({} distress types)", surface, rows.len());
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Distress Type").add_attribute(Attribute::Bold),
        Cell::new("Weight Factor").add_attribute(Attribute::Bold),
    ]);
    for r in rows {
        table.add_row(vec![Cell::new(r.name), Cell::new(r.weight)]);
    }
    align_right(&mut table, 1..=1);
    println!("{}", table);
}

pub fn print_evaluation(
    surface: SurfaceType,
    rows: &[DistressEntry],
    result: &VciResult,
    band: Option<ConditionBand>,
    vci_decimals: usize,
) {
    println!("\nVCI Distress Evaluation ({})", surface);
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Distress Type").add_attribute(Attribute::Bold),
        Cell::new("Observed Value"),
        Cell::new("Weight Factor"),
        Cell::new("Weighted Value").fg(Color::Cyan),
    ]);
    for r in rows {
        let observed = if r.observed().is_empty() {
            "-".to_string()
        } else {
            r.observed().to_string()
        };
        table.add_row(vec![
            Cell::new(r.distress()),
            Cell::new(observed),
            Cell::new(r.weight()),
            Cell::new(format!("{:.2}", r.weighted())).fg(Color::Cyan),
        ]);
    }
    align_right(&mut table, 1..=3);
    println!("{}", table);

    let mut summary = new_table();
    summary.add_row(vec![
        Cell::new("Total SDWF").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.2}", result.total_sdwf)),
    ]);
    summary.add_row(vec![
        Cell::new("VCI").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.*}", vci_decimals, result.vci)).fg(Color::Cyan),
    ]);
    summary.add_row(vec![
        Cell::new("Condition").add_attribute(Attribute::Bold),
        band_cell(band),
    ]);
    align_right(&mut summary, 1..=1);
    println!("{}", summary);
}

pub fn print_update(update: &RoadUpdate) {
    println!(
        "\nRoad update for '{}': vci = {}, surface_type = {}",
        update.road_id, update.vci, update.surface_type
    );
}

pub fn print_batch_summary(evaluations: &[Evaluation], vci_decimals: usize) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Road").add_attribute(Attribute::Bold),
        Cell::new("Surface"),
        Cell::new("Total SDWF"),
        Cell::new("VCI").fg(Color::Cyan),
        Cell::new("Condition"),
    ]);
    for e in evaluations {
        table.add_row(vec![
            Cell::new(&e.road_id).add_attribute(Attribute::Bold),
            Cell::new(e.surface),
            Cell::new(format!("{:.2}", e.result.total_sdwf)),
            Cell::new(format!("{:.*}", vci_decimals, e.result.vci)).fg(Color::Cyan),
            band_cell(e.band),
        ]);
    }
    align_right(&mut table, 2..=3);
    println!("\n{}", table);
}

pub fn print_classifications(rows: &[(String, Option<ConditionBand>)]) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Input").add_attribute(Attribute::Bold),
        Cell::new("Band"),
        Cell::new("Color"),
    ]);
    for (input, band) in rows {
        let color = match band {
            Some(b) => format!("{} {}", b.color_name(), b.color()),
            None => format!("neutral {}", roadwatch::consts::NEUTRAL_COLOR),
        };
        table.add_row(vec![Cell::new(input), band_cell(*band), Cell::new(color)]);
    }
    println!("{}", table);
}

pub fn print_roads_page(page: &Page) {
    if page.total_matches == 0 {
        println!("No roads found.");
        return;
    }

    let mut table = new_table();
    table.set_header(
        ROAD_COLUMNS
            .iter()
            .map(|c| Cell::new(c.header).add_attribute(Attribute::Bold)),
    );
    for road in &page.items {
        let cells = ROAD_COLUMNS.iter().map(|c| {
            if c.key == "status" {
                band_cell(road.band())
            } else {
                Cell::new(road.cell(c.key))
            }
        });
        table.add_row(cells);
    }
    println!("{}", table);
    println!(
        "Showing {} of {} road{} (page {}/{})",
        page.items.len(),
        page.total_matches,
        if page.total_matches != 1 { "s" } else { "" },
        page.page,
        page.total_pages
    );
}
