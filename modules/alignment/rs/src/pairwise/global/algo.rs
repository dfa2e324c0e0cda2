use eyre::{eyre, Result};

use super::band::BandPlan;
use crate::pairwise::scoring::{self, Score};
use crate::AlignmentError;
use globalign_core_rs::alignment::Alignable;

/// DP state of an alignment prefix, ordered by the tie-breaking priority.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Default)]
pub enum State {
    /// Two symbols are aligned in the last column
    #[default]
    M,
    /// The last column is a gap in the second sequence
    Ix,
    /// The last column is a gap in the first sequence
    Iy,
}

/// How a gap state was entered.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum GapTrace {
    /// The gap starts here (the predecessor is `M`)
    #[default]
    Open,
    /// The gap continues (the predecessor is the same gap state)
    Extend,
}

/// Scores of all three states at a single cell. `S::min_value()` marks unreachable states.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Cell<S: Score> {
    pub m: S,
    pub ix: S,
    pub iy: S,
}

impl<S: Score> Cell<S> {
    pub fn unreachable() -> Self {
        Self {
            m: S::min_value(),
            ix: S::min_value(),
            iy: S::min_value(),
        }
    }

    pub fn origin() -> Self {
        Self {
            m: S::zero(),
            ..Self::unreachable()
        }
    }

    /// The best state with M > Ix > Iy on ties.
    pub fn best(&self) -> (S, State) {
        let mut best = (self.m, State::M);
        if self.ix > best.0 {
            best = (self.ix, State::Ix);
        }
        if self.iy > best.0 {
            best = (self.iy, State::Iy);
        }
        best
    }

    pub fn is_reachable(&self) -> bool {
        self.best().0 != S::min_value()
    }
}

// The scan notifies the tracer about the origin of every state of every in-band cell.
// States that can't be reached are reported as well; their traces are never followed.
#[allow(unused_variables)]
pub trait Tracer {
    fn diagonal(&mut self, row: usize, col: usize, source: State) {}
    fn row_gap(&mut self, row: usize, col: usize, trace: GapTrace) {}
    fn col_gap(&mut self, row: usize, col: usize, trace: GapTrace) {}
}

/// Tracer that records nothing, for score-only runs.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct NoTrace;

impl Tracer for NoTrace {}

/// Extend a path score by `delta`. Unreachable stays unreachable, and a sum that doesn't fit
/// the score type (or collides with the unreachable marker) is reported as an overflow.
#[inline(always)]
fn extend<S: Score>(score: S, delta: S, row: usize, col: usize) -> Result<S> {
    if score == S::min_value() {
        return Ok(score);
    }
    match score.checked_add(&delta) {
        Some(x) if x != S::min_value() => Ok(x),
        _ => Err(AlignmentError::ScoreOverflow { row, col }.into()),
    }
}

/// Empty vector with room for `capacity` items, failing instead of aborting if the memory
/// isn't available.
pub(super) fn reserve<T>(capacity: usize) -> Result<Vec<T>> {
    let mut storage = Vec::new();
    storage
        .try_reserve_exact(capacity)
        .map_err(|_| AlignmentError::Allocation { cells: capacity })?;
    Ok(storage)
}

/// Best of opening a gap from `M` and extending an existing gap, preferring the opening.
#[inline(always)]
fn gap<S: Score>(open: S, extend: S) -> (S, GapTrace) {
    if open >= extend {
        (open, GapTrace::Open)
    } else {
        (extend, GapTrace::Extend)
    }
}

/// Fill the in-band cells of the plan row by row, keeping only two rows of scores in memory,
/// and return the scores at the last cell, `(seq1.len(), seq2.len())`.
pub fn scan<S, Smb, S1, S2, Scheme, T>(
    seq1: &S1,
    seq2: &S2,
    scheme: &Scheme,
    plan: &BandPlan,
    tracer: &mut T,
) -> Result<Cell<S>>
where
    S: Score,
    S1: Alignable<Symbol = Smb>,
    S2: Alignable<Symbol = Smb>,
    Scheme: scoring::Scheme<Score = S, Symbol = Smb>,
    T: Tracer,
{
    debug_assert_eq!(plan.rows(), seq1.len());
    debug_assert_eq!(plan.cols(), seq2.len());

    let width = plan.widest();
    let mut prev: Vec<Cell<S>> = reserve(width)?;
    let mut prev_window = (0, 0);
    let mut cur: Vec<Cell<S>> = reserve(width)?;

    for row in 0..=plan.rows() {
        let (lo, hi) = plan
            .window(row)
            .ok_or_else(|| eyre!("Row {row} is missing from the band plan"))?;
        cur.clear();

        for col in lo..=hi {
            let above = |col: usize| {
                if row > 0 && prev_window.0 <= col && col <= prev_window.1 {
                    prev[col - prev_window.0]
                } else {
                    Cell::unreachable()
                }
            };

            if row == 0 && col == 0 {
                cur.push(Cell::origin());
                tracer.diagonal(row, col, State::M);
                tracer.row_gap(row, col, GapTrace::Open);
                tracer.col_gap(row, col, GapTrace::Open);
                continue;
            }

            // M: two symbols aligned, coming from the best state of the diagonal cell
            let (m, source) = if row > 0 && col > 0 {
                let (best, source) = above(col - 1).best();
                let delta = scheme.score(row - 1, seq1.at(row - 1), col - 1, seq2.at(col - 1));
                (extend(best, delta, row, col)?, source)
            } else {
                (S::min_value(), State::M)
            };
            tracer.diagonal(row, col, source);

            // Ix: a gap in the second sequence, coming from the cell above
            let up = above(col);
            let (ix, trace) = gap(
                extend(up.m, scheme.seq2_gap_open(col), row, col)?,
                extend(up.ix, scheme.seq2_gap_extend(col), row, col)?,
            );
            tracer.row_gap(row, col, trace);

            // Iy: a gap in the first sequence, coming from the cell to the left
            let left = if col > lo {
                cur[col - 1 - lo]
            } else {
                Cell::unreachable()
            };
            let (iy, trace) = gap(
                extend(left.m, scheme.seq1_gap_open(row), row, col)?,
                extend(left.iy, scheme.seq1_gap_extend(row), row, col)?,
            );
            tracer.col_gap(row, col, trace);

            cur.push(Cell { m, ix, iy });
        }

        std::mem::swap(&mut prev, &mut cur);
        prev_window = (lo, hi);
    }

    debug_assert_eq!(prev_window.1, plan.cols());
    Ok(prev.last().copied().unwrap_or_else(Cell::unreachable))
}
