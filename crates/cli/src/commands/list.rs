use anyhow::Result;
use std::io::{self, Write};

use runc_core::LanguageRegistry;

use crate::display::{format_aliases, format_languages};

pub fn ls_command(registry: &LanguageRegistry) -> Result<()> {
    let mut out = io::stdout().lock();
    write!(out, "{}", format_languages(registry))?;
    Ok(())
}

pub fn aliases_command(registry: &LanguageRegistry) -> Result<()> {
    let mut out = io::stdout().lock();
    write!(out, "{}", format_aliases(registry))?;
    Ok(())
}
