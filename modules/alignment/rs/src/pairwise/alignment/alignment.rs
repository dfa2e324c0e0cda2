use std::fmt::Display;

use derive_getters::{Dissolve, Getters};
use derive_more::{Constructor, From, Into};
use eyre::{eyre, Result};

use globalign_core_rs::num::PrimUInt;

use super::offset::Offset;
use super::op::Op;
use super::step::{Step, StepWithOffset, StepsWithOffsetsIterator};
use crate::Score;

/// An end-to-end alignment between two sequences.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Constructor, Dissolve, From, Into)]
pub struct Alignment<S: Score, StepLen: PrimUInt = usize> {
    score: S,
    steps: Vec<Step<StepLen>>,
}

impl<S: Score, StepLen: PrimUInt> Alignment<S, StepLen> {
    /// Checks if the alignment is empty.
    pub fn is_empty(&self) -> bool {
        // Note: length of each step is guaranteed to be non-zero.
        self.steps.is_empty()
    }

    /// Returns the total number of alignment columns - the sum of all step lengths.
    pub fn len(&self) -> usize {
        self.count(|_| true)
    }

    /// Number of symbols of the first sequence covered by the alignment.
    pub fn seq1_len(&self) -> usize {
        self.count(Op::consumes_seq1)
    }

    /// Number of symbols of the second sequence covered by the alignment.
    pub fn seq2_len(&self) -> usize {
        self.count(Op::consumes_seq2)
    }

    /// Fraction of alignment columns that are exact matches.
    pub fn identity(&self) -> f64 {
        match self.len() {
            0 => 0.0,
            total => self.count(|op| *op == Op::Match) as f64 / total as f64,
        }
    }

    /// Returns the RLE (CIGAR-like) representation of the alignment.
    pub fn rle(&self) -> String
    where
        StepLen: Display,
    {
        Step::rle_string(self.steps.iter())
    }

    /// Returns alignment steps with tracked sequence coordinates.
    pub fn tracked_steps(&self) -> impl Iterator<Item = StepWithOffset<StepLen, usize, usize>> + '_
    where
        StepLen: Into<usize>,
    {
        StepsWithOffsetsIterator::new(self.steps.iter().cloned(), Offset::default())
    }

    /// The same alignment with the roles of the two sequences swapped.
    pub fn inverted(&self) -> Self {
        Self {
            score: self.score,
            steps: self.steps.iter().map(Step::inverted).collect(),
        }
    }

    /// Render the alignment as two equal-length rows, inserting `gap` wherever a sequence
    /// is not consumed.
    pub fn render(&self, seq1: &[u8], seq2: &[u8], gap: u8) -> Result<[Vec<u8>; 2]>
    where
        StepLen: Into<usize>,
    {
        if self.seq1_len() != seq1.len() || self.seq2_len() != seq2.len() {
            return Err(eyre!(
                "Alignment covers {}x{} symbols, but sequences have lengths {}x{}",
                self.seq1_len(),
                self.seq2_len(),
                seq1.len(),
                seq2.len()
            ));
        }

        let total = self.len();
        let mut rows = [Vec::with_capacity(total), Vec::with_capacity(total)];
        for tracked in self.tracked_steps() {
            let (start, end) = (tracked.start, tracked.end());
            let len: usize = (*tracked.step.len()).into();
            match tracked.step.op() {
                Op::GapFirst => {
                    rows[0].extend(std::iter::repeat(gap).take(len));
                    rows[1].extend_from_slice(&seq2[start.seq2..end.seq2]);
                }
                Op::GapSecond => {
                    rows[0].extend_from_slice(&seq1[start.seq1..end.seq1]);
                    rows[1].extend(std::iter::repeat(gap).take(len));
                }
                Op::Match | Op::Mismatch => {
                    rows[0].extend_from_slice(&seq1[start.seq1..end.seq1]);
                    rows[1].extend_from_slice(&seq2[start.seq2..end.seq2]);
                }
            }
        }
        Ok(rows)
    }

    fn count(&self, predicate: impl Fn(&Op) -> bool) -> usize {
        self.steps
            .iter()
            .filter(|x| predicate(x.op()))
            .filter_map(|x| num::cast::<StepLen, usize>(*x.len()))
            .sum()
    }
}
