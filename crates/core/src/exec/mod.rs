//! Script execution: temp-file materialization and terminal launch

mod launcher;
mod pipeline;
mod terminal;

pub use launcher::{ProcessLauncher, SystemLauncher};
pub use pipeline::ExecutionPipeline;
pub use terminal::Terminal;
