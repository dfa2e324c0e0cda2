use eyre::{eyre, Result};

use super::algo::{reserve, GapTrace, State, Tracer};
use super::band::BandPlan;
use crate::pairwise::alignment::{Op, Step};
use globalign_core_rs::alignment::Alignable;

/// Origins of all three states for every in-band cell, laid out as in the [`BandPlan`].
pub struct TraceMatrix<'a> {
    plan: &'a BandPlan,
    diagonal: Vec<State>,
    row_gap: Vec<GapTrace>,
    col_gap: Vec<GapTrace>,
}

impl<'a> TraceMatrix<'a> {
    /// Allocate trace storage for all cells of the plan.
    pub fn new(plan: &'a BandPlan) -> Result<Self> {
        let cells = plan.cells();
        Ok(Self {
            plan,
            diagonal: allocate(cells)?,
            row_gap: allocate(cells)?,
            col_gap: allocate(cells)?,
        })
    }

    /// Walk from the last cell of the grid back to the origin, starting in the `end` state.
    /// Returns alignment steps in the forward order.
    pub fn trace<S1, S2>(&self, seq1: &S1, seq2: &S2, end: State) -> Result<Vec<Step<usize>>>
    where
        S1: Alignable,
        S2: Alignable<Symbol = S1::Symbol>,
        S1::Symbol: PartialEq,
    {
        let (mut row, mut col, mut state) = (self.plan.rows(), self.plan.cols(), end);
        let mut ops = reserve(row + col)?;

        while row > 0 || col > 0 {
            let ind = self
                .plan
                .index(row, col)
                .ok_or_else(|| eyre!("Traceback left the band at ({row}, {col})"))?;
            match state {
                State::M => {
                    if row == 0 || col == 0 {
                        return Err(eyre!("Diagonal move from the grid border ({row}, {col})"));
                    }
                    state = self.diagonal[ind];
                    row -= 1;
                    col -= 1;
                    if seq1.at(row) == seq2.at(col) {
                        ops.push(Op::Match);
                    } else {
                        ops.push(Op::Mismatch);
                    }
                }
                State::Ix => {
                    if row == 0 {
                        return Err(eyre!("Vertical gap from the first row at column {col}"));
                    }
                    state = match self.row_gap[ind] {
                        GapTrace::Open => State::M,
                        GapTrace::Extend => State::Ix,
                    };
                    row -= 1;
                    ops.push(Op::GapSecond);
                }
                State::Iy => {
                    if col == 0 {
                        return Err(eyre!("Horizontal gap from the first column at row {row}"));
                    }
                    state = match self.col_gap[ind] {
                        GapTrace::Open => State::M,
                        GapTrace::Extend => State::Iy,
                    };
                    col -= 1;
                    ops.push(Op::GapFirst);
                }
            }
        }

        Ok(Step::from_ops(ops.into_iter().rev()))
    }
}

fn allocate<T: Copy + Default>(cells: usize) -> Result<Vec<T>> {
    let mut storage = reserve(cells)?;
    storage.resize(cells, T::default());
    Ok(storage)
}

impl Tracer for TraceMatrix<'_> {
    #[inline(always)]
    fn diagonal(&mut self, row: usize, col: usize, source: State) {
        if let Some(ind) = self.plan.index(row, col) {
            self.diagonal[ind] = source;
        }
    }

    #[inline(always)]
    fn row_gap(&mut self, row: usize, col: usize, trace: GapTrace) {
        if let Some(ind) = self.plan.index(row, col) {
            self.row_gap[ind] = trace;
        }
    }

    #[inline(always)]
    fn col_gap(&mut self, row: usize, col: usize, trace: GapTrace) {
        if let Some(ind) = self.plan.index(row, col) {
            self.col_gap[ind] = trace;
        }
    }
}
