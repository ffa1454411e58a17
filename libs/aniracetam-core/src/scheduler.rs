//! Simplified SM-2 review scheduler.
//!
//! Any grade below `Easy` restarts the interval ladder at one day, including
//! the "correct but hesitant" grades. Repetitions keep counting regardless.

use crate::error::Result;
use crate::types::{Quality, ReviewableItem};
use chrono::{DateTime, Duration, Utc};

/// Floor for the ease factor.
pub const MINIMUM_EASE: f64 = 1.3;

/// Interval after the second successful review.
const SECOND_INTERVAL_DAYS: u32 = 6;

/// Items due at `now`, earliest first.
///
/// Items sharing a due time keep their collection order.
pub fn select_due(items: &[ReviewableItem], now: DateTime<Utc>) -> Vec<ReviewableItem> {
    let mut due: Vec<ReviewableItem> = items.iter().filter(|i| i.is_due(now)).cloned().collect();
    due.sort_by_key(|i| i.next_review_at);
    due
}

/// Apply a numeric grade (0-3) reviewed at `now`.
///
/// Returns the updated item; `item` itself is left untouched, also when the
/// grade is rejected.
pub fn record_review(item: &ReviewableItem, quality: u8, now: DateTime<Utc>) -> Result<ReviewableItem> {
    let quality = Quality::from_value(quality)?;
    Ok(schedule(item, quality, now))
}

/// Apply an already validated grade reviewed at `now`.
pub fn schedule(item: &ReviewableItem, quality: Quality, now: DateTime<Utc>) -> ReviewableItem {
    let q = quality.value();

    let interval_days = if quality < Quality::Easy {
        1
    } else {
        match item.repetitions {
            0 => 1,
            1 => SECOND_INTERVAL_DAYS,
            _ => grow_interval(item.interval_days, item.ease),
        }
    };

    let lapse = f64::from(5 - q);
    let ease = (item.ease + (0.1 - lapse * (0.08 + lapse * 0.02))).max(MINIMUM_EASE);

    ReviewableItem {
        interval_days,
        ease,
        repetitions: item.repetitions.saturating_add(1),
        next_review_at: due_after(now, interval_days),
        ..item.clone()
    }
}

fn due_after(now: DateTime<Utc>, interval_days: u32) -> DateTime<Utc> {
    now.checked_add_signed(Duration::days(i64::from(interval_days)))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

fn grow_interval(interval_days: u32, ease: f64) -> u32 {
    let grown = (f64::from(interval_days) * ease).round();
    if grown >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        (grown as u32).max(1)
    }
}
