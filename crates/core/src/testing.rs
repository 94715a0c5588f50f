//! Randomized test-data generators (proptest strategies).
//!
//! Available to this crate's tests and, through the `test-support` feature, to
//! downstream crates that need audited sample records.

use core::ops::RangeInclusive;

use chrono::{Duration, NaiveDate, NaiveDateTime, Utc};
use proptest::prelude::*;

use crate::audit::AuditFields;
use crate::id::EntityId;

/// Probability that a nullable string is present.
pub const PRESENT_PROBABILITY: f64 = 0.7;

/// Uppercase ASCII string with a length in `min..=max`.
///
/// Bounds given in the wrong order are swapped.
pub fn bounded_string(min: usize, max: usize) -> BoxedStrategy<String> {
    chars_in('A', 'Z', min, max)
}

/// String made only of ASCII digits with a length in `min..=max`.
///
/// Bounds given in the wrong order are swapped.
pub fn digit_string(min: usize, max: usize) -> BoxedStrategy<String> {
    chars_in('0', '9', min, max)
}

fn chars_in(low: char, high: char, min: usize, max: usize) -> BoxedStrategy<String> {
    let (min, max) = if min <= max { (min, max) } else { (max, min) };
    proptest::collection::vec(proptest::char::range(low, high), min..=max)
        .prop_map(|chars| chars.into_iter().collect())
        .boxed()
}

/// Second-precision date-time in `start..=end`.
///
/// Bounds given in the wrong order are swapped.
pub fn datetime_between(start: NaiveDateTime, end: NaiveDateTime) -> BoxedStrategy<NaiveDateTime> {
    let (start, end) = if start <= end { (start, end) } else { (end, start) };
    let span = (end - start).num_seconds();
    (0..=span)
        .prop_map(move |secs| start + Duration::seconds(secs))
        .boxed()
}

/// Date-time within the ten years before now (UTC), never the current second.
pub fn past_datetime() -> BoxedStrategy<NaiveDateTime> {
    let (start, end) = past_window();
    datetime_between(start, end)
}

/// Positive identifier, as an identity column would hand out.
pub fn entity_id() -> BoxedStrategy<EntityId> {
    (1..i64::MAX).prop_map(EntityId::new).boxed()
}

fn past_window() -> (NaiveDateTime, NaiveDateTime) {
    let now = Utc::now().naive_utc();
    (now - Duration::days(3650), now - Duration::seconds(1))
}

fn default_window() -> (NaiveDateTime, NaiveDateTime) {
    let start = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default();
    let end = NaiveDate::from_ymd_opt(2099, 12, 31).unwrap_or_default();
    (
        start.and_hms_opt(0, 0, 0).unwrap_or_default(),
        end.and_hms_opt(23, 59, 59).unwrap_or_default(),
    )
}

/// Reusable generation rules for [`AuditFields`].
///
/// Defaults: id present, `created_by`/`updated_by` of 2..=10 uppercase
/// characters, timestamps anywhere in 2000..=2099, strings never absent.
#[derive(Debug, Clone)]
pub struct AuditModel {
    by_len: RangeInclusive<usize>,
    window: (NaiveDateTime, NaiveDateTime),
    with_id: bool,
    nullable: bool,
}

impl Default for AuditModel {
    fn default() -> Self {
        Self {
            by_len: 2..=10,
            window: default_window(),
            with_id: true,
            nullable: false,
        }
    }
}

impl AuditModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Length bounds for `created_by` and `updated_by`.
    pub fn by_len(mut self, len: RangeInclusive<usize>) -> Self {
        self.by_len = len;
        self
    }

    /// Inclusive window for `created_at` and `updated_at`.
    pub fn window(mut self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        self.window = (start, end);
        self
    }

    /// Restrict timestamps to the past.
    pub fn past(mut self) -> Self {
        self.window = past_window();
        self
    }

    /// Generate unpersisted records (no id).
    pub fn without_id(mut self) -> Self {
        self.with_id = false;
        self
    }

    /// Let `created_by`/`updated_by` be absent about 30% of the time.
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn strategy(&self) -> BoxedStrategy<AuditFields> {
        let (start, end) = self.window;
        let id = if self.with_id {
            entity_id().prop_map(Some).boxed()
        } else {
            Just(None).boxed()
        };
        let by = self.by_strategy();
        let at = datetime_between(start, end);

        (id, at.clone(), by.clone(), at, by)
            .prop_map(|(id, created_at, created_by, updated_at, updated_by)| {
                let mut fields = AuditFields::new();
                fields.set_id(id);
                fields.set_created_at(Some(created_at));
                fields.set_created_by(created_by);
                fields.set_updated_at(Some(updated_at));
                fields.set_updated_by(updated_by);
                fields
            })
            .boxed()
    }

    fn by_strategy(&self) -> BoxedStrategy<Option<String>> {
        let base = bounded_string(*self.by_len.start(), *self.by_len.end());
        if self.nullable {
            proptest::option::weighted(PRESENT_PROBABILITY, base).boxed()
        } else {
            base.prop_map(Some).boxed()
        }
    }
}
