//! Adding new sentences.

use super::{CommandError, Result};
use crate::prompt::{Prompt, Tone};
use crate::store::{next_id, CollectionStore};
use crate::translate::Translator;
use aniracetam_core::ReviewableItem;
use chrono::{DateTime, Utc};

/// Translate `sentence`, append it to the collection and save.
///
/// Nothing is stored when the translation fails.
pub async fn add_sentence<S, T>(
    store: &S,
    translator: &T,
    sentence: &str,
    language: &str,
    now: DateTime<Utc>,
) -> Result<ReviewableItem>
where
    S: CollectionStore + ?Sized,
    T: Translator,
{
    let sentence = sentence.trim();
    let translated = translator.translate(sentence, language).await?;

    let mut items = store.load_all()?;
    let item = ReviewableItem::new(next_id(&items), sentence, translated, language, now);
    items.push(item.clone());
    store.save_all(&items)?;

    tracing::info!(id = item.id, language, "added sentence");
    Ok(item)
}

/// Ask for a sentence when none was given, then add it and report the result.
pub async fn run<S, T, P>(
    store: &S,
    translator: &T,
    prompt: &mut P,
    language: &str,
    sentence: Option<String>,
) -> Result<Option<ReviewableItem>>
where
    S: CollectionStore + ?Sized,
    T: Translator,
    P: Prompt,
{
    let sentence = match sentence.filter(|s| !s.trim().is_empty()) {
        Some(sentence) => sentence,
        None => match prompt.required_input(
            "Enter a sentence in English to translate:",
            "Please enter a sentence",
        )? {
            Some(sentence) => sentence,
            None => return Ok(None),
        },
    };

    match add_sentence(store, translator, &sentence, language, Utc::now()).await {
        Ok(item) => {
            prompt.say(Tone::Success, "\nSentence added successfully!")?;
            prompt.say(Tone::Info, &format!("English: {}", item.source_text))?;
            prompt.say(Tone::Info, &format!("{language}: {}\n", item.target_text))?;
            Ok(Some(item))
        }
        Err(CommandError::Translate(e)) => {
            tracing::warn!(error = %e, "translation failed");
            prompt.say(Tone::Error, &format!("Translation failed: {e}"))?;
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
