//! Terminal tables.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use voyage_dash::NavLink;
use voyage_model::TableView;

/// The navigation bar as a table.
pub fn routes_table(links: &[NavLink]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Label"), header_cell("Path")]);
    apply_table_style(&mut table);
    for link in links {
        table.add_row(vec![Cell::new(link.label), Cell::new(link.href)]);
    }
    table
}

/// One zero-based page of the dataset table.
///
/// Missing values are left blank; numeric-looking cells are right aligned.
pub fn data_table(view: &TableView, page: usize) -> Table {
    let mut table = Table::new();
    table.set_header(view.columns.iter().map(|c| header_cell(c)).collect::<Vec<_>>());
    apply_table_style(&mut table);
    for row in view.page(page) {
        table.add_row(row.iter().map(|value| value_cell(value)).collect::<Vec<_>>());
    }
    table
}

/// Footer line under a data table.
pub fn page_footer(view: &TableView, page: usize) -> String {
    format!(
        "Page {} of {} ({} rows)",
        page + 1,
        view.page_count(),
        view.total_rows()
    )
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn value_cell(value: &str) -> Cell {
    if value.parse::<f64>().is_ok() {
        Cell::new(value).set_alignment(CellAlignment::Right)
    } else {
        Cell::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_counts_pages_from_one() {
        let view = TableView {
            columns: vec!["Age".to_string()],
            rows: (0..12).map(|i| vec![i.to_string()]).collect(),
            page_size: 10,
        };
        assert_eq!(page_footer(&view, 1), "Page 2 of 2 (12 rows)");
    }
}
