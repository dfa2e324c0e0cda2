use std::fmt::Display;

pub use align::{align, score, validate, DEFAULT_BAND_SIZE};
pub use error::AlignmentError;
pub use format::ScoredAlignment;
pub use globalign_core_rs::alignment::Alignable;
pub use pairwise::global::Band;
pub use pairwise::scoring::ScoreModel;

use globalign_core_rs::num::PrimSInt;

mod align;
mod error;
pub mod format;
pub mod pairwise;

/// Pairwise alignment score - any signed primitive integer.
pub trait Score: PrimSInt + Display {}

impl<T: PrimSInt + Display> Score for T {}
