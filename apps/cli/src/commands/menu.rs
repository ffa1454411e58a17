//! Interactive main menu, used when no subcommand is given.

use super::{add, language, review, stats, Result};
use crate::config::AppConfig;
use crate::header::display_header;
use crate::prompt::{Prompt, Tone};
use crate::store::CollectionStore;
use crate::translate::Translator;
use chrono::Utc;
use std::path::Path;

const CHOICES: [&str; 4] = [
    "Add a new sentence",
    "Review sentences",
    "Show statistics",
    "Exit",
];

/// Show the header, make sure a language is chosen, then loop until Exit.
pub async fn run<S, T, P>(
    store: &S,
    translator: &T,
    prompt: &mut P,
    config: &mut AppConfig,
    data_dir: &Path,
) -> Result<()>
where
    S: CollectionStore + ?Sized,
    T: Translator,
    P: Prompt,
{
    display_header(prompt)?;

    let Some(target_language) = language::ensure(config, data_dir, prompt)? else {
        prompt.say(Tone::Plain, "Goodbye!")?;
        return Ok(());
    };

    loop {
        match prompt.select("What would you like to do?", &CHOICES)? {
            Some(0) => {
                add::run(store, translator, prompt, &target_language, None).await?;
            }
            Some(1) => {
                review::run(store, prompt, Utc::now())?;
            }
            Some(2) => {
                stats::run(store, prompt, Utc::now(), false)?;
            }
            _ => break,
        }
    }

    prompt.say(Tone::Plain, "Goodbye!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::TerminalPrompt;
    use crate::store::JsonFileStore;
    use crate::translate::TranslateError;
    use std::io::Cursor;

    struct Echo;

    impl Translator for Echo {
        async fn translate(&self, text: &str, language: &str) -> std::result::Result<String, TranslateError> {
            Ok(format!("{text} [{language}]"))
        }
    }

    #[tokio::test]
    async fn add_then_review_then_exit() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("sentences.json"));
        let mut config = AppConfig::default();
        let script = "nl\n1\nGood night\n2\n\n2\n4\n";
        let mut prompt = TerminalPrompt::new(Cursor::new(script.as_bytes().to_vec()), Vec::new(), false);

        run(&store, &Echo, &mut prompt, &mut config, dir.path())
            .await
            .unwrap();

        let items = store.load_all().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].target_text, "Good night [nl]");
        assert_eq!(items[0].repetitions, 1);
        assert_eq!(items[0].interval_days, 1);
        assert_eq!(config.language(), Some("nl"));

        let out = String::from_utf8(prompt.into_writer()).unwrap();
        assert!(out.contains("Terminal Language Learning Program"));
        assert!(out.contains("Review session completed!"));
        assert!(out.trim_end().ends_with("Goodbye!"));
    }

    #[tokio::test]
    async fn end_of_input_exits_quietly() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("sentences.json"));
        let mut config = AppConfig {
            target_language: Some("es".into()),
            ..Default::default()
        };
        let mut prompt = TerminalPrompt::new(Cursor::new(Vec::new()), Vec::new(), false);

        run(&store, &Echo, &mut prompt, &mut config, dir.path())
            .await
            .unwrap();

        let out = String::from_utf8(prompt.into_writer()).unwrap();
        assert!(out.contains("  4. Exit"));
        assert!(out.trim_end().ends_with("Goodbye!"));
    }
}
