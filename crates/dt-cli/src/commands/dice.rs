use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use dt_engine::DieKind;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Die", "Sides", "Sprite vertices", "Color"]);

    for die in DieKind::STANDARD {
        let color = die.color();
        let swatch = "■■".truecolor(color.r, color.g, color.b);
        table.add_row(vec![
            die.to_string(),
            die.sides().to_string(),
            die.sprite_sides().to_string(),
            format!("{swatch} {}", color.hex()),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {}",
        "Other dN dice use a white 12-gon.".dimmed()
    );
    Ok(())
}
