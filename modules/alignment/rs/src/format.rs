use std::fmt::{Display, Formatter};
use std::str::FromStr;

use derive_getters::{Dissolve, Getters};
use eyre::{eyre, Report, Result};

use crate::pairwise::{Alignment, Op, Step};
use crate::Score;

/// Field delimiter of the serialized alignment.
pub const DELIMITER: char = ',';

/// Placeholder for the symbols missing from a sequence in the aligned rows.
pub const GAP: u8 = b'-';

/// A fully global alignment rendered for the output: the score, both sequences with gaps
/// inserted and the CIGAR-like run-length summary.
///
/// Serialized as `score,aligned1,aligned2,rle`.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Dissolve)]
pub struct ScoredAlignment<S: Score = i64> {
    score: S,
    aligned1: String,
    aligned2: String,
    steps: Vec<Step<usize>>,
}

impl<S: Score> ScoredAlignment<S> {
    pub fn new(alignment: &Alignment<S>, seq1: &[u8], seq2: &[u8]) -> Result<Self> {
        let [aligned1, aligned2] = alignment.render(seq1, seq2, GAP)?;
        Ok(Self {
            score: *alignment.score(),
            aligned1: String::from_utf8(aligned1)?,
            aligned2: String::from_utf8(aligned2)?,
            steps: alignment.steps().clone(),
        })
    }

    pub fn rle(&self) -> String {
        Step::rle_string(self.steps.iter())
    }

    /// Human-readable three-line view: the first row, the match line and the second row.
    pub fn pretty(&self) -> String {
        let midline: String = self
            .steps
            .iter()
            .flat_map(|step| {
                let symbol = match step.op() {
                    Op::GapFirst | Op::GapSecond => ' ',
                    Op::Match => '|',
                    Op::Mismatch => '*',
                };
                std::iter::repeat(symbol).take(*step.len())
            })
            .collect();
        format!("{}\n{}\n{}", self.aligned1, midline, self.aligned2)
    }
}

impl<S: Score> From<ScoredAlignment<S>> for Alignment<S> {
    fn from(value: ScoredAlignment<S>) -> Self {
        Alignment::new(value.score, value.steps)
    }
}

impl<S: Score> Display for ScoredAlignment<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{DELIMITER}{}{DELIMITER}{}{DELIMITER}{}",
            self.score,
            self.aligned1,
            self.aligned2,
            self.rle()
        )
    }
}

impl<S: Score> FromStr for ScoredAlignment<S> {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self> {
        let fields: Vec<&str> = s.split(DELIMITER).collect();
        let [score, aligned1, aligned2, rle] = fields[..] else {
            return Err(eyre!(
                "Expected 4 fields separated by {DELIMITER:?}, got {}: {s:?}",
                fields.len()
            ));
        };

        let score =
            S::from_str_radix(score, 10).map_err(|_| eyre!("Invalid alignment score {score:?}"))?;
        let steps = Step::parse_rle(rle)?;

        let columns: usize = steps.iter().map(|x| *x.len()).sum();
        if aligned1.len() != columns || aligned2.len() != columns {
            return Err(eyre!(
                "Aligned rows have lengths {} and {}, but the alignment has {columns} columns",
                aligned1.len(),
                aligned2.len()
            ));
        }

        let ops = steps
            .iter()
            .flat_map(|x| std::iter::repeat(*x.op()).take(*x.len()));
        for (column, ((op, a), b)) in ops.zip(aligned1.bytes()).zip(aligned2.bytes()).enumerate() {
            let consistent = match op {
                Op::GapFirst => a == GAP && b != GAP,
                Op::GapSecond => a != GAP && b == GAP,
                Op::Match => a != GAP && a == b,
                Op::Mismatch => a != GAP && b != GAP && a != b,
            };
            if !consistent {
                return Err(eyre!(
                    "Column {column} ({}/{}) contradicts the operation {}",
                    a as char,
                    b as char,
                    op.symbol()
                ));
            }
        }

        Ok(Self {
            score,
            aligned1: aligned1.to_string(),
            aligned2: aligned2.to_string(),
            steps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(score: i64, rle: &str, seq1: &[u8], seq2: &[u8]) -> ScoredAlignment {
        let alignment = Alignment::new(score, Step::parse_rle(rle).unwrap());
        ScoredAlignment::new(&alignment, seq1, seq2).unwrap()
    }

    #[test]
    fn test_display() {
        let aln = scored(23, "3=1I6=1I2=", b"ACGTTGCAACGGT", b"ACGTGCAACGT");
        assert_eq!(aln.to_string(), "23,ACGTTGCAACGGT,ACG-TGCAAC-GT,3=1I6=1I2=");

        let aln = scored(-5, "4D", b"", b"ACGT");
        assert_eq!(aln.to_string(), "-5,----,ACGT,4D");

        let aln = scored(0, "", b"", b"");
        assert_eq!(aln.to_string(), "0,,,");
    }

    #[test]
    fn test_pretty() {
        let aln = scored(0, "1=1X1D1I", b"AGT", b"ACC");
        assert_eq!(aln.pretty(), "AG-T\n|*  \nACC-");
    }

    #[test]
    fn test_from_str() -> Result<()> {
        for line in [
            "-1,GATTACA,GCATGCU,1=2X1=1X1=1X",
            "-4,----A,ACGTA,4D1=",
            "0,,,",
        ] {
            let parsed: ScoredAlignment = line.parse()?;
            assert_eq!(parsed.to_string(), line);
        }

        let parsed: ScoredAlignment = "-1,AC,-C,1I1=".parse()?;
        assert_eq!(*parsed.score(), -1);
        assert_eq!(parsed.aligned1(), "AC");
        assert_eq!(parsed.aligned2(), "-C");

        let alignment: Alignment<i64> = parsed.into();
        assert_eq!(alignment.seq1_len(), 2);
        assert_eq!(alignment.seq2_len(), 1);
        Ok(())
    }

    #[test]
    fn test_from_str_invalid() {
        for line in [
            "",
            "1,A,A",
            "1,A,A,1=,",
            "x,A,A,1=",
            "1,A,A,1Q",
            "1,AC,A-,1=",
            "1,A,C,1=",
            "1,A,A,1X",
            "1,-,A,1I",
            "1,A,-,1D",
        ] {
            assert!(line.parse::<ScoredAlignment>().is_err(), "{line}");
        }
    }
}
