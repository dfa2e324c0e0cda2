use derive_more::Display;
use eyre::Result;
use log::debug;

use crate::AlignmentError;

/// Restriction of the alignment grid to a subset of cells.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default, Display)]
pub enum Band {
    /// Every cell of the grid is evaluated.
    #[default]
    #[display("full grid")]
    Full,
    /// Only cells within `half_width` columns of the proportional diagonal are evaluated.
    #[display("diagonal band of half-width {half_width}")]
    Diagonal { half_width: usize },
}

impl Band {
    pub fn diagonal(half_width: usize) -> Result<Self> {
        if half_width == 0 {
            return Err(AlignmentError::InvalidBand.into());
        }
        Ok(Band::Diagonal { half_width })
    }

    /// Checks if the end of a `rows x cols` grid lies within the band around the main diagonal,
    /// i.e. the sequence lengths differ by at most `half_width`.
    pub fn reaches(&self, rows: usize, cols: usize) -> bool {
        match *self {
            Band::Full => true,
            Band::Diagonal { half_width } => rows.abs_diff(cols) <= half_width,
        }
    }

    /// Plan the in-band cells of a `(rows + 1) x (cols + 1)` grid, where `rows` and `cols`
    /// are the lengths of the first and the second sequence.
    pub fn plan(&self, rows: usize, cols: usize) -> Result<BandPlan> {
        let windows: Vec<(usize, usize)> = match *self {
            Band::Full => vec![(0, cols); rows + 1],
            Band::Diagonal { half_width: 0 } => return Err(AlignmentError::InvalidBand.into()),
            // The diagonal degenerates to a single row
            Band::Diagonal { .. } if rows == 0 => vec![(0, cols)],
            Band::Diagonal { half_width } => (0..=rows)
                .map(|row| {
                    let center = diagonal(row, rows, cols);
                    (
                        center.saturating_sub(half_width),
                        center.saturating_add(half_width).min(cols),
                    )
                })
                .collect(),
        };

        let mut offsets = Vec::with_capacity(windows.len());
        let mut cells = 0usize;
        for (lo, hi) in &windows {
            offsets.push(cells);
            cells = cells
                .checked_add(hi - lo + 1)
                .ok_or(AlignmentError::Allocation { cells: usize::MAX })?;
        }

        debug!("Planned {cells} cells of the {rows}x{cols} alignment grid ({self})");
        Ok(BandPlan {
            rows,
            cols,
            windows,
            offsets,
            cells,
        })
    }
}

/// The column of the proportional diagonal in `row`: round(row * cols / rows), halves up.
fn diagonal(row: usize, rows: usize, cols: usize) -> usize {
    debug_assert!(rows > 0);
    let (row, rows, cols) = (row as u128, rows as u128, cols as u128);
    ((2 * row * cols + rows) / (2 * rows)) as usize
}

/// Inclusive column window of every row of the grid along with the flat layout of the
/// in-band cells (row-major, each row contiguous).
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct BandPlan {
    rows: usize,
    cols: usize,
    windows: Vec<(usize, usize)>,
    offsets: Vec<usize>,
    cells: usize,
}

impl BandPlan {
    /// Length of the first sequence (the last row index).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Length of the second sequence (the last column index).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of in-band cells.
    pub fn cells(&self) -> usize {
        self.cells
    }

    /// Number of cells in the widest row.
    pub fn widest(&self) -> usize {
        self.windows
            .iter()
            .map(|(lo, hi)| hi - lo + 1)
            .max()
            .unwrap_or(0)
    }

    /// Inclusive `(lo, hi)` column range of the row.
    pub fn window(&self, row: usize) -> Option<(usize, usize)> {
        self.windows.get(row).copied()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        matches!(self.window(row), Some((lo, hi)) if lo <= col && col <= hi)
    }

    /// Flat index of an in-band cell.
    #[inline(always)]
    pub fn index(&self, row: usize, col: usize) -> Option<usize> {
        match self.window(row) {
            Some((lo, hi)) if lo <= col && col <= hi => Some(self.offsets[row] + col - lo),
            _ => None,
        }
    }
}
