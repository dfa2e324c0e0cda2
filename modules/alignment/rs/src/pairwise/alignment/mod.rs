pub use alignment::Alignment;
pub use offset::Offset;
pub use op::Op;
pub use step::Step;

pub mod alignment;
mod offset;
mod op;
pub mod step;
