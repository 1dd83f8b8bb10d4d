pub mod executor;
pub mod process_command;

pub use executor::{CommandExecutor, SystemExecutor};
pub use process_command::ProcessCommand;
