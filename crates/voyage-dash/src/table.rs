//! Dataset table for the raw data page.

use voyage_model::schema::{TABLE_PAGE_SIZE, is_excluded};
use voyage_model::{Dataset, TableView};

use crate::error::Result;

/// Columns shown in the table: file order minus the fixed exclusion list.
pub fn displayed_columns(dataset: &Dataset) -> Vec<String> {
    dataset
        .column_names()
        .into_iter()
        .filter(|name| !is_excluded(name))
        .collect()
}

/// Render every row of the displayed columns as text.
pub fn build_table(dataset: &Dataset) -> Result<TableView> {
    let columns = displayed_columns(dataset);

    let mut cells = Vec::with_capacity(columns.len());
    for column in &columns {
        cells.push(dataset.display_values(column)?);
    }

    let rows = (0..dataset.height())
        .map(|row| {
            cells
                .iter()
                .map(|values| values[row].clone().unwrap_or_default())
                .collect()
        })
        .collect();

    Ok(TableView {
        columns,
        rows,
        page_size: TABLE_PAGE_SIZE,
    })
}
