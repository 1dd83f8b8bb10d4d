use std::collections::BTreeMap;

use super::Language;
use crate::{
    error::{Error, Result},
    strategy::{CompiledStrategy, InterpretedStrategy},
};

/// Read-only mapping from language identifier to its extension and strategy.
///
/// Built once at startup and shared by reference; there is no way to add
/// languages after construction.
#[derive(Debug)]
pub struct LanguageRegistry {
    languages: BTreeMap<&'static str, Language>,
    aliases: BTreeMap<&'static str, &'static str>,
}

impl LanguageRegistry {
    pub fn from_languages(languages: impl IntoIterator<Item = Language>) -> Self {
        let mut registry = Self {
            languages: BTreeMap::new(),
            aliases: BTreeMap::new(),
        };
        for language in languages {
            for alias in language.aliases {
                registry.aliases.insert(*alias, language.id);
            }
            registry.languages.insert(language.id, language);
        }
        registry
    }

    /// The languages runc ships with
    pub fn builtin() -> Self {
        #[rustfmt::skip]
        let languages = [
            Language::new("python", ".py", InterpretedStrategy::new("python3"))
                .with_aliases(&["py", "python3"]),
            Language::new("c", ".c", CompiledStrategy::new("gcc", &["-O3"])),
            Language::new("cpp", ".cpp", CompiledStrategy::new("g++", &["-O3"]))
                .with_aliases(&["c++", "cxx"]),
            Language::new("rust", ".rs", CompiledStrategy::new("rustc", &["-O"]))
                .with_aliases(&["rs"]),
        ];
        Self::from_languages(languages)
    }

    /// Look up by identifier or alias
    pub fn get(&self, id: &str) -> Option<&Language> {
        self.languages
            .get(id)
            .or_else(|| self.aliases.get(id).and_then(|target| self.languages.get(target)))
    }

    /// Validate a command-line language argument
    pub fn resolve(&self, id: Option<&str>) -> Result<&Language> {
        let id = id
            .filter(|id| !id.is_empty())
            .ok_or(Error::MissingLanguage)?;
        self.get(id)
            .ok_or_else(|| Error::UnsupportedLanguage(id.to_string()))
    }

    /// Languages sorted by identifier
    pub fn languages(&self) -> impl Iterator<Item = &Language> {
        self.languages.values()
    }

    /// `(alias, language id)` pairs sorted by alias
    pub fn aliases(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.aliases.iter().map(|(alias, id)| (*alias, *id))
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
