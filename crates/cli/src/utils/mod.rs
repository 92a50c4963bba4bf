pub mod input;

pub use input::read_snippet;
