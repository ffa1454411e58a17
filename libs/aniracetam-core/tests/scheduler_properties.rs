//! Property tests for the review scheduler.

use aniracetam_core::scheduler::MINIMUM_EASE;
use aniracetam_core::{record_review, select_due, ReviewableItem};
use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

fn arb_item() -> impl Strategy<Value = ReviewableItem> {
    (1u32..100, 1.3f64..2.8, 0u32..50).prop_map(|(interval_days, ease, repetitions)| {
        ReviewableItem {
            interval_days,
            ease,
            repetitions,
            ..ReviewableItem::new(1, "source", "target", "es", start())
        }
    })
}

proptest! {
    #[test]
    fn ease_and_interval_floors_hold(
        item in arb_item(),
        grades in prop::collection::vec(0u8..=3, 1..20),
    ) {
        let mut now = start();
        let mut current = item;
        for grade in grades {
            current = record_review(&current, grade, now).unwrap();
            prop_assert!(current.ease >= MINIMUM_EASE);
            prop_assert!(current.interval_days >= 1);
            now = current.next_review_at;
        }
    }

    #[test]
    fn repetitions_increase_by_one(item in arb_item(), grade in 0u8..=3) {
        let next = record_review(&item, grade, start()).unwrap();
        prop_assert_eq!(next.repetitions, item.repetitions + 1);
    }

    #[test]
    fn next_review_is_review_time_plus_interval(item in arb_item(), grade in 0u8..=3, offset in 0i64..10_000) {
        let now = start() + Duration::minutes(offset);
        let next = record_review(&item, grade, now).unwrap();
        prop_assert_eq!(next.next_review_at, now + Duration::days(i64::from(next.interval_days)));
    }

    #[test]
    fn out_of_range_grades_are_rejected(item in arb_item(), grade in 4u8..=u8::MAX) {
        prop_assert!(record_review(&item, grade, start()).is_err());
    }

    #[test]
    fn select_due_returns_sorted_subset(offsets in prop::collection::vec(-1000i64..1000, 0..30)) {
        let now = start();
        let items: Vec<ReviewableItem> = offsets
            .iter()
            .enumerate()
            .map(|(idx, minutes)| {
                let mut item = ReviewableItem::new(idx as i64 + 1, "s", "t", "fr", now);
                item.next_review_at = now + Duration::minutes(*minutes);
                item
            })
            .collect();

        let due = select_due(&items, now);
        let expected = offsets.iter().filter(|m| **m <= 0).count();
        prop_assert_eq!(due.len(), expected);
        prop_assert!(due.iter().all(|i| i.next_review_at <= now));
        let ordered = due.windows(2).all(|w| {
            w[0].next_review_at < w[1].next_review_at
                || (w[0].next_review_at == w[1].next_review_at && w[0].id < w[1].id)
        });
        prop_assert!(ordered);
    }
}
