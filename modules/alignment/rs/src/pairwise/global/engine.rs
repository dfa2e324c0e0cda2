use std::marker::PhantomData;

use eyre::{Report, Result};
use log::debug;

use super::algo::{self, Cell, NoTrace};
use super::band::{Band, BandPlan};
use super::traceback::TraceMatrix;
use crate::pairwise::{alignment, scoring};
use crate::AlignmentError;
use globalign_core_rs::alignment::Alignable;

/// Fully global alignment engine. Holds only the configuration: every call allocates
/// its own matrices and releases them before returning.
pub struct Engine<S, Smb, Scheme>
where
    S: scoring::Score,
    Scheme: scoring::Scheme<Score = S, Symbol = Smb>,
{
    scoring: Scheme,
    band: Band,
    _phantom: PhantomData<(S, Smb)>,
}

impl<S, Smb, Scheme> Engine<S, Smb, Scheme>
where
    S: scoring::Score,
    Smb: PartialEq,
    Scheme: scoring::Scheme<Score = S, Symbol = Smb>,
{
    pub fn new(scoring: Scheme, band: Band) -> Self {
        Self {
            scoring,
            band,
            _phantom: Default::default(),
        }
    }

    pub fn with_scoring(&mut self, scoring: Scheme) {
        self.scoring = scoring;
    }

    pub fn with_band(&mut self, band: Band) {
        self.band = band;
    }

    pub fn scoring(&self) -> &Scheme {
        &self.scoring
    }

    pub fn band(&self) -> &Band {
        &self.band
    }

    /// Optimal end-to-end alignment of the two sequences.
    pub fn align<S1, S2>(&self, seq1: &S1, seq2: &S2) -> Result<alignment::Alignment<S>>
    where
        S1: Alignable<Symbol = Smb>,
        S2: Alignable<Symbol = Smb>,
    {
        let plan = self.plan(seq1.len(), seq2.len())?;
        let mut tracemat = TraceMatrix::new(&plan)?;

        let cell = algo::scan(seq1, seq2, &self.scoring, &plan, &mut tracemat)?;
        let (score, state) = self.finalize(&plan, cell)?;
        let steps = tracemat.trace(seq1, seq2, state)?;
        Ok(alignment::Alignment::new(score, steps))
    }

    /// Score of the optimal alignment, computed in memory linear in the band width.
    pub fn score<S1, S2>(&self, seq1: &S1, seq2: &S2) -> Result<S>
    where
        S1: Alignable<Symbol = Smb>,
        S2: Alignable<Symbol = Smb>,
    {
        let plan = self.plan(seq1.len(), seq2.len())?;
        let cell = algo::scan(seq1, seq2, &self.scoring, &plan, &mut NoTrace)?;
        let (score, _) = self.finalize(&plan, cell)?;
        Ok(score)
    }

    fn plan(&self, rows: usize, cols: usize) -> Result<BandPlan> {
        let plan = self.band.plan(rows, cols)?;
        if !self.band.reaches(rows, cols) {
            return Err(self.unreachable(&plan));
        }
        Ok(plan)
    }

    fn finalize(&self, plan: &BandPlan, cell: Cell<S>) -> Result<(S, algo::State)> {
        if !cell.is_reachable() {
            return Err(self.unreachable(plan));
        }
        Ok(cell.best())
    }

    fn unreachable(&self, plan: &BandPlan) -> Report {
        debug!(
            "The end of the {}x{} grid is not reachable within the {}",
            plan.rows(),
            plan.cols(),
            self.band
        );
        AlignmentError::Unreachable {
            seq1_len: plan.rows(),
            seq2_len: plan.cols(),
            band: self.band,
        }
        .into()
    }
}

impl<S, Smb, Scheme> Clone for Engine<S, Smb, Scheme>
where
    S: scoring::Score,
    Scheme: scoring::Scheme<Score = S, Symbol = Smb> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            scoring: self.scoring.clone(),
            band: self.band,
            _phantom: Default::default(),
        }
    }
}
