pub use alignable::Alignable;

mod alignable;
