//! Collection statistics.

use super::Result;
use crate::prompt::{Prompt, Tone};
use crate::store::CollectionStore;
use aniracetam_core::ReviewableItem;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Summary of the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionStats {
    pub total: usize,
    pub due_now: usize,
    pub never_reviewed: usize,
    pub average_ease: f64,
    pub average_interval: f64,
    /// Earliest review time still in the future.
    pub next_due: Option<DateTime<Utc>>,
}

impl CollectionStats {
    pub fn from_items(items: &[ReviewableItem], now: DateTime<Utc>) -> Self {
        let total = items.len();
        let mean = |f: fn(&ReviewableItem) -> f64| {
            if total == 0 {
                0.0
            } else {
                items.iter().map(f).sum::<f64>() / total as f64
            }
        };

        Self {
            total,
            due_now: items.iter().filter(|i| i.is_due(now)).count(),
            never_reviewed: items.iter().filter(|i| i.repetitions == 0).count(),
            average_ease: mean(|i| i.ease),
            average_interval: mean(|i| f64::from(i.interval_days)),
            next_due: items
                .iter()
                .filter(|i| !i.is_due(now))
                .map(|i| i.next_review_at)
                .min(),
        }
    }
}

pub fn run<S, P>(store: &S, prompt: &mut P, now: DateTime<Utc>, json: bool) -> Result<CollectionStats>
where
    S: CollectionStore + ?Sized,
    P: Prompt,
{
    let stats = CollectionStats::from_items(&store.load_all()?, now);

    if json {
        prompt.say(Tone::Plain, &serde_json::to_string_pretty(&stats)?)?;
        return Ok(stats);
    }

    prompt.say(Tone::Info, &format!("Sentences:        {}", stats.total))?;
    prompt.say(Tone::Info, &format!("Due now:          {}", stats.due_now))?;
    prompt.say(Tone::Info, &format!("Never reviewed:   {}", stats.never_reviewed))?;
    prompt.say(Tone::Info, &format!("Average ease:     {:.2}", stats.average_ease))?;
    prompt.say(Tone::Info, &format!("Average interval: {:.1} days", stats.average_interval))?;
    if let Some(next) = stats.next_due {
        prompt.say(Tone::Info, &format!("Next review:      {}", next.format("%Y-%m-%d %H:%M UTC")))?;
    }
    prompt.say(Tone::Plain, "")?;
    Ok(stats)
}
