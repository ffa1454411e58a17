//! Review session over the due items.

use super::Result;
use crate::prompt::{Prompt, Tone};
use crate::store::CollectionStore;
use aniracetam_core::{record_review, select_due};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Outcome of one review session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReviewSummary {
    pub due: usize,
    pub reviewed: usize,
    pub interrupted: bool,
}

/// Walk through every due item, earliest first, and save the results.
///
/// When input ends part-way the grades given so far are still saved.
pub fn run<S, P>(store: &S, prompt: &mut P, now: DateTime<Utc>) -> Result<ReviewSummary>
where
    S: CollectionStore + ?Sized,
    P: Prompt,
{
    let mut items = store.load_all()?;
    if items.is_empty() {
        prompt.say(Tone::Warning, "No sentences to review. Add some sentences first!\n")?;
        return Ok(ReviewSummary::default());
    }

    let due = select_due(&items, now);
    if due.is_empty() {
        prompt.say(Tone::Warning, "No sentences are due for review right now.\n")?;
        return Ok(ReviewSummary::default());
    }

    let mut summary = ReviewSummary {
        due: due.len(),
        ..Default::default()
    };

    for item in &due {
        prompt.say(Tone::Info, &format!("\n{}", item.source_text))?;

        if prompt
            .input("Translate this sentence (press Enter to see answer):")?
            .is_none()
        {
            summary.interrupted = true;
            break;
        }
        prompt.say(Tone::Info, &format!("Correct translation: {}\n", item.target_text))?;

        let Some(quality) = prompt.quality("How well did you know this?")? else {
            summary.interrupted = true;
            break;
        };

        let updated = record_review(item, quality.value(), now)?;
        tracing::debug!(
            id = updated.id,
            quality = quality.value(),
            interval_days = updated.interval_days,
            ease = updated.ease,
            "scheduled next review"
        );

        if let Some(slot) = items.iter_mut().find(|i| i.id == updated.id) {
            *slot = updated;
        }
        summary.reviewed += 1;
    }

    if summary.reviewed > 0 {
        store.save_all(&items)?;
    }

    if summary.interrupted {
        prompt.say(
            Tone::Warning,
            &format!(
                "\nReview stopped after {} of {} sentences; progress saved.\n",
                summary.reviewed, summary.due
            ),
        )?;
    } else {
        prompt.say(Tone::Success, "Review session completed!\n")?;
    }

    tracing::info!(due = summary.due, reviewed = summary.reviewed, "review session finished");
    Ok(summary)
}
