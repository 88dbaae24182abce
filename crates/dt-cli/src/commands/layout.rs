use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use dt_engine::{AreaSize, EngineConfig, compute_layout};

pub fn run(
    config: &EngineConfig,
    width: u32,
    height: u32,
    count: usize,
    die: &str,
) -> Result<(), String> {
    let die = super::parse_die(die)?;
    let plan = compute_layout(
        AreaSize::new(width, height),
        count,
        die.sides(),
        &config.layout,
    );

    println!(
        "  {} {count} x {die} in {width}x{height}",
        "Layout".bold()
    );
    println!(
        "  tile {}px, {} columns x {} rows (padding {}px)",
        plan.tile_size, plan.columns, plan.rows, plan.padding
    );
    if plan.overflow {
        println!(
            "  {} grid is taller than the area at the minimum tile size",
            "WARN".yellow().bold()
        );
    }

    if count == 0 {
        return Ok(());
    }

    println!();
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Tile", "Row", "Column", "X", "Y"]);
    for cell in plan.cells() {
        let (x, y) = plan.tile_origin(cell, width);
        table.add_row(vec![
            (cell.index + 1).to_string(),
            cell.row.to_string(),
            cell.column.to_string(),
            format!("{x:.0}"),
            format!("{y:.0}"),
        ]);
    }
    println!("{table}");

    Ok(())
}
