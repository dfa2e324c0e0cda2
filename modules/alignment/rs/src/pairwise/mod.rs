pub use alignment::{Alignment, Offset, Op, Step};

pub mod alignment;
pub mod global;
pub mod scoring;
