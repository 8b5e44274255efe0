//! System prompt selection from the on-disk prompt library.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

/// One file in the prompts directory, addressed by its stem.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptFile {
    pub stem: String,
    pub path: PathBuf,
}

/// Lists the prompt files in `dir`, sorted by stem. An empty or missing
/// directory is fatal: the run cannot proceed without a system prompt.
pub fn list_prompts(dir: &Path) -> Result<Vec<PromptFile>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("cannot read prompts directory {}", dir.display()))?;

    let mut prompts: Vec<PromptFile> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .map(|path| {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            PromptFile { stem, path }
        })
        .collect();
    prompts.sort_by(|a, b| a.stem.cmp(&b.stem));

    if prompts.is_empty() {
        bail!("no prompts found in {}", dir.display());
    }
    Ok(prompts)
}

/// Picks the prompt with the given stem, or the first one when no stem is
/// requested. `prompts` is non-empty by construction.
pub fn select_prompt<'a>(prompts: &'a [PromptFile], stem: Option<&str>) -> Result<&'a PromptFile> {
    match stem {
        None => Ok(&prompts[0]),
        Some(stem) => prompts.iter().find(|p| p.stem == stem).with_context(|| {
            let available: Vec<&str> = prompts.iter().map(|p| p.stem.as_str()).collect();
            format!("no prompt named {:?}; available: {}", stem, available.join(", "))
        }),
    }
}

/// Reads the selected prompt file; its contents become the system message
/// verbatim.
pub fn load(prompt: &PromptFile) -> Result<String> {
    fs::read_to_string(&prompt.path)
        .with_context(|| format!("cannot read prompt file {}", prompt.path.display()))
}
