use globalign_core_rs::num::PrimUInt;

/// `Op` represents a single column of a pairwise alignment.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Op {
    /// A gap in the first sequence: one symbol of the second sequence is consumed (D)
    GapFirst,
    /// A gap in the second sequence: one symbol of the first sequence is consumed (I)
    GapSecond,
    /// Identical symbols in both sequences (=)
    Match,
    /// Different symbols in both sequences (X)
    Mismatch,
}

impl Op {
    /// Returns `true` if the operation consumes a symbol of the first sequence.
    pub fn consumes_seq1(&self) -> bool {
        !matches!(self, Op::GapFirst)
    }

    /// Returns `true` if the operation consumes a symbol of the second sequence.
    pub fn consumes_seq2(&self) -> bool {
        !matches!(self, Op::GapSecond)
    }

    /// Returns the CIGAR-like symbol of the operation.
    pub fn symbol(&self) -> char {
        match self {
            Op::GapFirst => 'D',
            Op::GapSecond => 'I',
            Op::Match => '=',
            Op::Mismatch => 'X',
        }
    }

    /// The same operation with the roles of the two sequences swapped.
    pub fn inverted(&self) -> Self {
        match self {
            Op::GapFirst => Op::GapSecond,
            Op::GapSecond => Op::GapFirst,
            Op::Match | Op::Mismatch => *self,
        }
    }

    /// Applies the operation to the given sequence indices.
    pub fn apply<Len, Seq1Idx, Seq2Idx>(&self, seq1: &mut Seq1Idx, seq2: &mut Seq2Idx, len: Len)
    where
        Len: PrimUInt + Into<Seq1Idx> + Into<Seq2Idx>,
        Seq1Idx: PrimUInt,
        Seq2Idx: PrimUInt,
    {
        match self {
            Op::GapFirst => *seq2 = *seq2 + len.into(),
            Op::GapSecond => *seq1 = *seq1 + len.into(),
            Op::Mismatch | Op::Match => {
                *seq1 = *seq1 + len.into();
                *seq2 = *seq2 + len.into();
            }
        };
    }
}

impl TryFrom<char> for Op {
    type Error = ();

    /// Tries to convert a character into an `Op`.
    /// Returns an error if the character does not represent a valid operation.
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'D' => Ok(Op::GapFirst),
            'I' => Ok(Op::GapSecond),
            '=' => Ok(Op::Match),
            'X' => Ok(Op::Mismatch),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_char() {
        assert_eq!(Op::try_from('D'), Ok(Op::GapFirst));
        assert_eq!(Op::try_from('I'), Ok(Op::GapSecond));
        assert_eq!(Op::try_from('='), Ok(Op::Match));
        assert_eq!(Op::try_from('X'), Ok(Op::Mismatch));
        assert_eq!(Op::try_from('M'), Err(()));
        assert_eq!(Op::try_from('-'), Err(()));
    }

    #[test]
    fn test_symbol() {
        for op in [Op::GapFirst, Op::GapSecond, Op::Match, Op::Mismatch] {
            assert_eq!(Op::try_from(op.symbol()), Ok(op));
        }
    }

    #[test]
    fn test_inverted() {
        assert_eq!(Op::GapFirst.inverted(), Op::GapSecond);
        assert_eq!(Op::GapSecond.inverted(), Op::GapFirst);
        assert_eq!(Op::Match.inverted(), Op::Match);
        assert_eq!(Op::Mismatch.inverted(), Op::Mismatch);
    }

    #[test]
    fn test_apply() {
        let mut seq1: u32 = 0;
        let mut seq2: u32 = 0;
        let len: u8 = 1;

        Op::GapFirst.apply(&mut seq1, &mut seq2, len);
        assert_eq!((seq1, seq2), (0, 1));

        Op::GapSecond.apply(&mut seq1, &mut seq2, len);
        assert_eq!((seq1, seq2), (1, 1));

        Op::Match.apply(&mut seq1, &mut seq2, len);
        assert_eq!((seq1, seq2), (2, 2));

        Op::Mismatch.apply(&mut seq1, &mut seq2, 3u8);
        assert_eq!((seq1, seq2), (5, 5));
    }
}
