pub mod list;
pub mod run;

pub use list::{aliases_command, ls_command};
pub use run::run_command;
