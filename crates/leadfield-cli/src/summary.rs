use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use leadfield_model::{FieldKind, PartnerField, rendered_fields};

use crate::commands::FieldsResult;

pub fn print_fields(result: &FieldsResult, expanded: bool) {
    println!("Lead: {}", result.lead_id);
    let partition = &result.partition;
    if partition.is_empty() {
        println!("No partner fields to display.");
        if result.skipped > 0 {
            println!("Skipped {} malformed payload entries.", result.skipped);
        }
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Value"),
        header_cell("Kind"),
        header_cell("Section"),
    ]);
    apply_table_style(&mut table);

    let shown = rendered_fields(partition, expanded);
    let visible_count = partition.visible.len();
    for (index, field) in shown.iter().enumerate() {
        let section = if index < visible_count {
            "visible"
        } else {
            "extra"
        };
        table.add_row(field_row(field, section));
    }
    for field in &partition.installation {
        table.add_row(field_row(field, "installation"));
    }
    for field in &partition.appointment {
        table.add_row(field_row(field, "appointment"));
    }
    println!("{table}");

    if !expanded && partition.has_overflow() {
        println!(
            "{} more field(s) hidden. Use --expanded to show them.",
            partition.extra.len()
        );
    }
    if result.skipped > 0 {
        println!("Skipped {} malformed payload entries.", result.skipped);
    }
}

fn field_row(field: &PartnerField, section: &str) -> Vec<Cell> {
    vec![
        Cell::new(&field.label).add_attribute(Attribute::Bold),
        value_cell(field),
        kind_cell(field.kind),
        dim_cell(section),
    ]
}

fn value_cell(field: &PartnerField) -> Cell {
    if field.value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(&field.value)
    }
}

fn kind_cell(kind: FieldKind) -> Cell {
    match kind {
        FieldKind::Text => Cell::new("Text"),
        FieldKind::Number => Cell::new("Number").fg(Color::Blue),
        FieldKind::Date => Cell::new("Date").fg(Color::Green),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
