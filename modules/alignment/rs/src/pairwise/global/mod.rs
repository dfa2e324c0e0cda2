//! Fully global (end-to-end) alignment with affine gaps, optionally restricted to a
//! diagonal band.
//!
//! Three cooperating states are filled row by row over the planned cells:
//! * `M`  - the last column aligns two symbols;
//! * `Ix` - the last column is a gap in the second sequence;
//! * `Iy` - the last column is a gap in the first sequence.
//!
//! Banded and unbanded runs share the same recurrence; they differ only in the
//! per-row column windows produced by [`Band::plan`].

pub use algo::{scan, Cell, GapTrace, NoTrace, State, Tracer};
pub use band::{Band, BandPlan};
pub use engine::Engine;
pub use traceback::TraceMatrix;

mod algo;
mod band;
mod engine;
mod traceback;
