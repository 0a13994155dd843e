use crate::core::grid::Grid;
use serde::Serialize;

/// Flat row for JSON export, built from the rendered grid cells.
#[derive(Serialize, Clone, Debug)]
pub struct RowExport {
    pub nama: String,
    pub usia: String,
    pub gender: String,
    pub tanggal: String,
    pub detail: String,
}

pub(crate) fn grid_to_rows(grid: &Grid) -> Vec<RowExport> {
    grid.rows()
        .iter()
        .map(|r| RowExport {
            nama: r[0].clone(),
            usia: r[1].clone(),
            gender: r[2].clone(),
            tanggal: r[3].clone(),
            detail: r[4].clone(),
        })
        .collect()
}
