pub mod execution;

// Re-export commonly used types
pub use execution::ExecutionResult;
