use derive_more::{Display, Error};

use crate::pairwise::global::Band;

/// Failures of a single alignment call.
///
/// Errors travel inside [`eyre::Report`]; use `report.downcast_ref::<AlignmentError>()`
/// to tell them apart.
#[derive(Clone, Eq, PartialEq, Debug, Hash, Display, Error)]
pub enum AlignmentError {
    /// The end cell can't be reached from the origin through in-band cells.
    /// Retrying with a wider band (or without one) may succeed.
    #[display("cell ({seq1_len}, {seq2_len}) is not reachable within the {band}")]
    Unreachable {
        seq1_len: usize,
        seq2_len: usize,
        band: Band,
    },
    /// Trace storage for the requested grid could not be allocated.
    #[display("failed to allocate trace storage for {cells} cells")]
    Allocation { cells: usize },
    /// An input symbol is not printable or collides with the gap symbol / field delimiter.
    #[display("sequence {sequence} has an invalid symbol {symbol:#04x} at position {position}")]
    InvalidSymbol {
        sequence: u8,
        position: usize,
        symbol: u8,
    },
    #[display("band half-width must be at least 1")]
    InvalidBand,
    #[display("score at cell ({row}, {col}) overflows the score type")]
    ScoreOverflow { row: usize, col: usize },
}
