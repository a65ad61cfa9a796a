//! Table of supported units for `--list-units`

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};

use crate::units::DurationUnit;

/// Build a table with one row per unit: label, symbol, nanoseconds per unit
pub fn units_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Unit", "Symbol", "Nanoseconds"]);

    for unit in DurationUnit::all() {
        table.add_row(vec![
            Cell::new(unit.label()),
            Cell::new(unit.symbol()),
            Cell::new(unit.nanos_per_unit()),
        ]);
    }
    table
}
