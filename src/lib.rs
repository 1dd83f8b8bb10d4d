//! Shared helpers for the workspace integration tests under `tests/`

use std::fs;
use std::path::{Path, PathBuf};

use runc_core::Settings;

/// Settings that keep every scratch file and binary inside `dir`
pub fn settings_in(dir: &Path) -> Settings {
    Settings {
        temp_dir: Some(dir.to_path_buf()),
        ..Settings::default()
    }
}

/// Write an executable script that plays the editor: it copies `code` into
/// the file it is opened on.
#[cfg(unix)]
pub fn editor_writing(dir: &Path, code: &str) -> std::io::Result<PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    let source = dir.join("editor-input");
    let script = dir.join("editor.sh");
    fs::write(&source, code)?;
    fs::write(
        &script,
        format!("#!/bin/sh\ncp '{}' \"$1\"\n", source.display()),
    )?;
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755))?;
    Ok(script)
}

/// Scratch sources and binaries still present in `dir`, sorted
pub fn leftovers(dir: &Path, settings: &Settings) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let name = entry?.file_name().to_string_lossy().into_owned();
        if name.starts_with(&settings.scratch_name) || name == settings.binary_name {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}
