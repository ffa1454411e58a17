//! Choosing the language being learned.

use super::Result;
use crate::config::AppConfig;
use crate::prompt::{Prompt, Tone};
use std::path::Path;

/// Return the configured language, asking for one (and saving it) when unset.
///
/// `Ok(None)` means input ended before a language was given.
pub fn ensure<P: Prompt>(config: &mut AppConfig, data_dir: &Path, prompt: &mut P) -> Result<Option<String>> {
    if let Some(language) = config.language() {
        return Ok(Some(language.to_string()));
    }

    let Some(language) = prompt.required_input(
        "Enter the language code you want to learn (e.g., es for Spanish, fr for French):",
        "Please enter a language code",
    )?
    else {
        return Ok(None);
    };

    set(config, data_dir, &language)?;
    prompt.say(Tone::Success, &format!("\nLanguage set to: {language}\n"))?;
    Ok(Some(language))
}

/// Show the current language, or replace it with `code`.
pub fn run<P: Prompt>(
    config: &mut AppConfig,
    data_dir: &Path,
    prompt: &mut P,
    code: Option<String>,
) -> Result<Option<String>> {
    match code.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        Some(code) => {
            set(config, data_dir, code)?;
            prompt.say(Tone::Success, &format!("Language set to: {code}"))?;
            Ok(Some(code.to_string()))
        }
        None => match config.language() {
            Some(language) => {
                prompt.say(Tone::Info, &format!("Learning: {language}"))?;
                Ok(Some(language.to_string()))
            }
            None => {
                prompt.say(Tone::Warning, "No language chosen yet.")?;
                Ok(None)
            }
        },
    }
}

fn set(config: &mut AppConfig, data_dir: &Path, code: &str) -> Result<()> {
    config.target_language = Some(code.to_string());
    config.save(data_dir)?;
    tracing::info!(language = code, "target language changed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::TerminalPrompt;
    use std::io::Cursor;

    fn scripted(input: &str) -> TerminalPrompt<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalPrompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false)
    }

    #[test]
    fn asks_once_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        let mut prompt = scripted("\nde\n");

        let language = ensure(&mut config, dir.path(), &mut prompt).unwrap();
        assert_eq!(language.as_deref(), Some("de"));
        assert_eq!(AppConfig::load(dir.path()).language(), Some("de"));

        let out = String::from_utf8(prompt.into_writer()).unwrap();
        assert!(out.contains("Please enter a language code"));
        assert!(out.contains("Language set to: de"));
    }

    #[test]
    fn configured_language_skips_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig {
            target_language: Some("ja".into()),
            ..Default::default()
        };
        let mut prompt = scripted("");
        assert_eq!(
            ensure(&mut config, dir.path(), &mut prompt).unwrap().as_deref(),
            Some("ja")
        );
        assert!(prompt.into_writer().is_empty());
        assert!(!AppConfig::path(dir.path()).exists());
    }

    #[test]
    fn end_of_input_leaves_language_unset() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        let mut prompt = scripted("");
        assert_eq!(ensure(&mut config, dir.path(), &mut prompt).unwrap(), None);
        assert_eq!(config.language(), None);
    }

    #[test]
    fn run_sets_or_shows() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();

        let mut prompt = scripted("");
        assert_eq!(run(&mut config, dir.path(), &mut prompt, None).unwrap(), None);

        let mut prompt = scripted("");
        run(&mut config, dir.path(), &mut prompt, Some(" it ".into())).unwrap();
        assert_eq!(AppConfig::load(dir.path()).language(), Some("it"));

        let mut prompt = scripted("");
        run(&mut config, dir.path(), &mut prompt, None).unwrap();
        let out = String::from_utf8(prompt.into_writer()).unwrap();
        assert_eq!(out, "Learning: it\n");
    }
}
