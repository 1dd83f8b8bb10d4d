//! Supported languages and how to run them

pub mod registry;

pub use registry::LanguageRegistry;

use std::fmt;

use crate::strategy::ExecutionStrategy;

pub struct Language {
    /// Identifier given on the command line, e.g. "python"
    pub id: &'static str,
    /// Has to include the dot, e.g. ".py" not "py"
    pub extension: &'static str,
    pub aliases: &'static [&'static str],
    pub strategy: Box<dyn ExecutionStrategy>,
}

impl Language {
    pub fn new(
        id: &'static str,
        extension: &'static str,
        strategy: impl ExecutionStrategy + 'static,
    ) -> Self {
        Self {
            id,
            extension,
            aliases: &[],
            strategy: Box::new(strategy),
        }
    }

    pub fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn requirements(&self) -> Vec<&'static str> {
        self.strategy.requirements()
    }
}

impl fmt::Debug for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Language")
            .field("id", &self.id)
            .field("extension", &self.extension)
            .field("aliases", &self.aliases)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}
