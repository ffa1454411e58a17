//! Listing the items that are due.

use super::Result;
use crate::prompt::{Prompt, Tone};
use crate::store::CollectionStore;
use aniracetam_core::{select_due, ReviewableItem};
use chrono::{DateTime, Utc};

pub fn run<S, P>(store: &S, prompt: &mut P, now: DateTime<Utc>, json: bool) -> Result<Vec<ReviewableItem>>
where
    S: CollectionStore + ?Sized,
    P: Prompt,
{
    let due = select_due(&store.load_all()?, now);

    if json {
        prompt.say(Tone::Plain, &serde_json::to_string_pretty(&due)?)?;
        return Ok(due);
    }

    if due.is_empty() {
        prompt.say(Tone::Warning, "No sentences are due for review right now.")?;
        return Ok(due);
    }

    for item in &due {
        prompt.say(
            Tone::Plain,
            &format!(
                "#{:<4} {}  [{}, due {}]",
                item.id,
                item.source_text,
                item.target_language,
                item.next_review_at.format("%Y-%m-%d %H:%M")
            ),
        )?;
    }
    Ok(due)
}
