pub mod detect;
pub mod highlight;
pub mod init;
pub mod run;

pub use detect::detect_command;
pub use highlight::highlight_command;
pub use init::init_command;
pub use run::run_command;
