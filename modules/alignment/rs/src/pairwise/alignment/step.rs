use std::borrow::Borrow;
use std::fmt::Display;
use std::marker::PhantomData;

use derive_getters::{Dissolve, Getters};
use derive_more::{Constructor, From, Into};
use eyre::{eyre, Result};
use itertools::Itertools;

use globalign_core_rs::num::PrimUInt;

use super::offset::Offset;
use super::op::Op;

/// A run of identical operations in a pairwise alignment
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Getters, Dissolve)]
pub struct Step<Len: PrimUInt> {
    /// The length of the operation, e.g. the number of consequent matches or gaps.
    /// Guaranteed to be greater than zero.
    len: Len,
    /// The alignment operation
    op: Op,
}

impl<Len: PrimUInt> Step<Len> {
    pub fn new(op: Op, len: Len) -> Result<Self> {
        if len.is_zero() {
            return Err(eyre!("Step length must be greater than zero"));
        }
        Ok(Self { len, op })
    }

    /// The same step with the roles of the two sequences swapped.
    pub fn inverted(&self) -> Self {
        Self {
            len: self.len,
            op: self.op.inverted(),
        }
    }

    /// Run-length encode a sequence of single-column operations.
    /// Runs longer than the maximum value of the step size are divided accordingly.
    pub fn from_ops(ops: impl IntoIterator<Item = Op>) -> Vec<Self> {
        let limit = num::cast::<Len, usize>(Len::max_value()).unwrap_or(usize::MAX);

        let mut steps = Vec::new();
        for (mut count, op) in ops.into_iter().dedup_with_count() {
            while count > 0 {
                let chunk = count.min(limit);
                if let Some(len) = num::cast::<usize, Len>(chunk) {
                    steps.push(Step { len, op });
                }
                count -= chunk;
            }
        }
        steps
    }

    pub fn rle_string(steps: impl Iterator<Item: Borrow<Step<Len>>>) -> String
    where
        Len: Display,
    {
        // 2 symbols is an average length of a step
        // 1 is the length of the symbol
        let hint = match steps.size_hint() {
            (_, Some(upper)) => upper * 3,
            (lower, _) => lower * 3,
        };

        let mut result = String::with_capacity(hint);
        for step in steps {
            let step = step.borrow();
            result.push_str(&step.len().to_string());
            result.push(step.op().symbol());
        }
        result
    }

    /// Parse the output of [`Step::rle_string`] back into steps.
    pub fn parse_rle(rle: &str) -> Result<Vec<Step<Len>>> {
        let mut steps = Vec::new();
        let mut start = 0;
        for (ind, symbol) in rle.char_indices() {
            if symbol.is_ascii_digit() {
                continue;
            }
            let op = Op::try_from(symbol)
                .map_err(|_| eyre!("Unknown alignment operation {symbol:?} in {rle:?}"))?;
            let digits = &rle[start..ind];
            let len = Len::from_str_radix(digits, 10)
                .map_err(|_| eyre!("Invalid step length {digits:?} in {rle:?}"))?;

            steps.push(Step::new(op, len)?);
            start = ind + symbol.len_utf8();
        }
        if start != rle.len() {
            return Err(eyre!("Step length without an operation in {rle:?}"));
        }
        Ok(steps)
    }
}

/// A tracked alignment step with known start position (offset) in the sequence coordinates
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Getters, Dissolve, Constructor, From, Into)]
pub struct StepWithOffset<
    Len: PrimUInt + Into<Seq1Idx> + Into<Seq2Idx>,
    Seq1Idx: PrimUInt,
    Seq2Idx: PrimUInt,
> {
    pub step: Step<Len>,
    pub start: Offset<Seq1Idx, Seq2Idx>,
}

impl<Len, Seq1Idx, Seq2Idx> StepWithOffset<Len, Seq1Idx, Seq2Idx>
where
    Len: PrimUInt + Into<Seq1Idx> + Into<Seq2Idx>,
    Seq1Idx: PrimUInt,
    Seq2Idx: PrimUInt,
{
    /// Get the end position of the step in sequence coordinates (e.g. the alignment position after applying the step)
    pub fn end(&self) -> Offset<Seq1Idx, Seq2Idx> {
        self.start.apply(&self.step)
    }
}

/// An iterator that keeps track of the current offset in the alignment
pub struct StepsWithOffsetsIterator<
    T: Iterator<Item: Into<Step<Len>>>,
    Len: PrimUInt + Into<Seq1Idx> + Into<Seq2Idx>,
    Seq1Idx: PrimUInt,
    Seq2Idx: PrimUInt,
> {
    iter: T,
    offset: Offset<Seq1Idx, Seq2Idx>,
    phantom_data: PhantomData<Len>,
}

impl<T, Len, Seq1Idx, Seq2Idx> StepsWithOffsetsIterator<T, Len, Seq1Idx, Seq2Idx>
where
    T: Iterator<Item: Into<Step<Len>>>,
    Len: PrimUInt + Into<Seq1Idx> + Into<Seq2Idx>,
    Seq1Idx: PrimUInt,
    Seq2Idx: PrimUInt,
{
    pub fn new(iter: T, offset: Offset<Seq1Idx, Seq2Idx>) -> Self {
        Self {
            iter,
            offset,
            phantom_data: Default::default(),
        }
    }
}

impl<T, Len, Seq1Idx, Seq2Idx> Iterator for StepsWithOffsetsIterator<T, Len, Seq1Idx, Seq2Idx>
where
    T: Iterator<Item: Into<Step<Len>>>,
    Len: PrimUInt + Into<Seq1Idx> + Into<Seq2Idx>,
    Seq1Idx: PrimUInt,
    Seq2Idx: PrimUInt,
{
    type Item = StepWithOffset<Len, Seq1Idx, Seq2Idx>;

    fn next(&mut self) -> Option<Self::Item> {
        let step = StepWithOffset {
            start: self.offset,
            step: self.iter.next()?.into(),
        };
        self.offset = step.end();
        Some(step)
    }
}
