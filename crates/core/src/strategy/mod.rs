//! Per-language execution strategies

pub mod compiled;
pub mod interpreted;
pub mod traits;

pub use compiled::CompiledStrategy;
pub use interpreted::InterpretedStrategy;
pub use traits::{ExecutionContext, ExecutionStrategy};
