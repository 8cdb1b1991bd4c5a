//! CSV export of the derived cells.

use crate::load::load_dataset;
use crate::SourceArgs;
use anyhow::Context;
use gtv_data::transform::{to_cells, Cell};
use log::info;
use std::io::Write;

/// Write `cells` as CSV with a `year,month,month_name,variance,temperature` header.
pub fn write_cells<W: Write>(writer: W, cells: &[Cell]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for cell in cells {
        wtr.serialize(cell)?;
    }
    wtr.flush()?;
    Ok(())
}

pub async fn run_cells(source: &SourceArgs, output: &str) -> anyhow::Result<()> {
    let dataset = load_dataset(source).await?;
    let cells = to_cells(&dataset)?;
    let file = std::fs::File::create(output).with_context(|| format!("Failed to create {}", output))?;
    write_cells(file, &cells)?;
    info!("Wrote {} cells to {}", cells.len(), output);
    Ok(())
}
