use eyre::Result;
use log::debug;

use crate::format::{ScoredAlignment, DELIMITER, GAP};
use crate::pairwise::global::{Band, Engine};
use crate::pairwise::scoring::{ScoreModel, Scheme};
use crate::AlignmentError;

/// Default half-width of the diagonal band.
pub const DEFAULT_BAND_SIZE: usize = 1000;

/// Check that every symbol of the sequence can be written to the serialized output: printable
/// ASCII, neither the gap symbol nor the field delimiter. `sequence` is the 1-based sequence
/// number reported in the error.
pub fn validate(seq: &[u8], sequence: u8) -> Result<()> {
    match seq
        .iter()
        .position(|&x| !x.is_ascii_graphic() || x == GAP || x == DELIMITER as u8)
    {
        None => Ok(()),
        Some(position) => Err(AlignmentError::InvalidSymbol {
            sequence,
            position,
            symbol: seq[position],
        }
        .into()),
    }
}

fn engine(
    seq1: &[u8],
    seq2: &[u8],
    model: ScoreModel<i32>,
    band: Band,
) -> Result<Engine<i64, u8, impl Scheme<Score = i64, Symbol = u8>>> {
    validate(seq1, 1)?;
    validate(seq2, 2)?;
    debug!(
        "Aligning {}x{} symbols with {model:?} over the {band}",
        seq1.len(),
        seq2.len()
    );
    Ok(Engine::new(model.cast::<i64>()?.scheme(), band))
}

/// Fully global alignment of two byte sequences, scored in 64-bit arithmetic.
pub fn align(
    seq1: &[u8],
    seq2: &[u8],
    model: ScoreModel<i32>,
    band: Band,
) -> Result<ScoredAlignment> {
    let alignment = engine(seq1, seq2, model, band)?.align(&seq1, &seq2)?;
    ScoredAlignment::new(&alignment, seq1, seq2)
}

/// Score of the fully global alignment without the traceback.
pub fn score(seq1: &[u8], seq2: &[u8], model: ScoreModel<i32>, band: Band) -> Result<i64> {
    engine(seq1, seq2, model, band)?.score(&seq1, &seq2)
}
