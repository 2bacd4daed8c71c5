//! PNG export of a resolved lattice slice

use crate::io::configuration::CELL_PIXEL_SIZE;
use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crate::lattice::Coord;
use crate::proto::tile::TilePayload;
use image::{Rgba, RgbaImage};
use ndarray::Array2;
use std::collections::HashMap;
use std::path::Path;

/// Fallback color for assets missing from the palette
const UNMAPPED_COLOR: [u8; 4] = [255, 0, 255, 255];

/// Export the z = 0 slice of a resolved assignment as a PNG
///
/// Each cell becomes a [`CELL_PIXEL_SIZE`]-square block colored by the
/// palette entry for its payload's asset. Assets without a palette entry
/// render magenta so gaps are visible rather than silent.
///
/// # Errors
///
/// Returns `InvalidParameter` when the slice is empty and `ImageExport` when
/// the encoder or filesystem rejects the write.
pub fn export_slice_as_png(
    assignments: &[(Coord, TilePayload)],
    palette: &HashMap<String, [u8; 4]>,
    path: &Path,
) -> Result<()> {
    let slice: Vec<&(Coord, TilePayload)> = assignments
        .iter()
        .filter(|(coord, _)| coord.z == 0)
        .collect();

    let Some(first) = slice.first().map(|(coord, _)| *coord) else {
        return Err(invalid_parameter(
            "assignments",
            &"<empty>",
            &"no cells at z = 0 to export",
        ));
    };

    let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);
    for (coord, _) in &slice {
        min_x = min_x.min(coord.x);
        max_x = max_x.max(coord.x);
        min_y = min_y.min(coord.y);
        max_y = max_y.max(coord.y);
    }

    let cols = (max_x - min_x + 1) as usize;
    let rows = (max_y - min_y + 1) as usize;

    let mut cells = Array2::from_elem((rows, cols), [0u8, 0, 0, 0]);
    for (coord, payload) in &slice {
        let row = (coord.y - min_y) as usize;
        let col = (coord.x - min_x) as usize;
        let color = palette
            .get(&payload.asset)
            .copied()
            .unwrap_or(UNMAPPED_COLOR);
        if let Some(cell) = cells.get_mut([row, col]) {
            *cell = color;
        }
    }

    let width = (cols * CELL_PIXEL_SIZE) as u32;
    let height = (rows * CELL_PIXEL_SIZE) as u32;
    let rendered = RgbaImage::from_fn(width, height, |x, y| {
        let row = y as usize / CELL_PIXEL_SIZE;
        let col = x as usize / CELL_PIXEL_SIZE;
        Rgba(cells.get([row, col]).copied().unwrap_or(UNMAPPED_COLOR))
    });

    rendered.save(path).map_err(|source| AlgorithmError::ImageExport {
        path: path.to_path_buf(),
        source,
    })
}
