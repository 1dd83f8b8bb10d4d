use runc_core::LanguageRegistry;

const RULE: &str = "___________________";

/// One line per language: id, extension and the tools it needs
pub fn format_languages(registry: &LanguageRegistry) -> String {
    let mut out = format!("Available languages:\n{RULE}\n");
    for language in registry.languages() {
        out.push_str(&format!(
            "   {:<8} {:<5} ({})\n",
            language.id,
            language.extension,
            language.requirements().join(", ")
        ));
    }
    out
}

pub fn format_aliases(registry: &LanguageRegistry) -> String {
    let mut out = format!("Available aliases:\n{RULE}\n");
    for (alias, id) in registry.aliases() {
        out.push_str(&format!("{alias:>10} : {id}\n"));
    }
    out
}
