//! Overlap detection for proposed weekly schedules.

use std::fmt;

use chrono::Weekday;

use crate::slot::{WeeklySlot, day_number};

/// Two slots on the same day whose time ranges overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub day: Weekday,
    /// The earlier-starting of the two colliding slots.
    pub first: WeeklySlot,
    pub second: WeeklySlot,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Schedule conflict on {}: {} overlaps {}",
            self.day,
            self.first.time_range(),
            self.second.time_range()
        )
    }
}

/// Find the first overlap within a proposed weekly schedule.
///
/// Slots that are not well-formed (start >= end) are skipped here; reporting
/// those is validation's job, not conflict checking's. Comparison happens on
/// minutes since midnight. Slots are sorted by day and start time, and only
/// adjacent same-day pairs are compared: if an earlier slot overlapped a
/// later non-adjacent one, the slot between them would already overlap the
/// earlier one.
pub fn find_conflict(slots: &[WeeklySlot]) -> Option<Conflict> {
    let mut valid: Vec<&WeeklySlot> = slots.iter().filter(|s| s.is_valid()).collect();
    valid.sort_by_key(|s| (day_number(s.day), s.start_minutes(), s.end_minutes()));

    for pair in valid.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if a.day != b.day {
            continue;
        }
        if a.end_minutes() > b.start_minutes() {
            return Some(Conflict {
                day: a.day,
                first: a.clone(),
                second: b.clone(),
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn slot(day: Weekday, start: (u32, u32), end: (u32, u32)) -> WeeklySlot {
        WeeklySlot::new(
            day,
            NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
        )
    }

    /// Oracle: compare every pair, no sorting tricks.
    fn any_pair_overlaps(slots: &[WeeklySlot]) -> bool {
        for i in 0..slots.len() {
            for j in (i + 1)..slots.len() {
                let (a, b) = (&slots[i], &slots[j]);
                if a.day == b.day
                    && a.start_minutes() < b.end_minutes()
                    && b.start_minutes() < a.end_minutes()
                {
                    return true;
                }
            }
        }
        false
    }

    // --- no conflict ---

    #[test]
    fn empty_and_single_never_conflict() {
        assert_eq!(find_conflict(&[]), None);
        assert_eq!(find_conflict(&[slot(Weekday::Mon, (10, 0), (11, 0))]), None);
    }

    #[test]
    fn distinct_days_never_conflict() {
        let slots = [
            slot(Weekday::Mon, (10, 0), (11, 0)),
            slot(Weekday::Tue, (10, 0), (11, 0)),
            slot(Weekday::Wed, (10, 30), (11, 30)),
        ];
        assert_eq!(find_conflict(&slots), None);
    }

    #[test]
    fn back_to_back_slots_do_not_conflict() {
        // End and start touching is fine: ranges are half-open.
        let slots = [
            slot(Weekday::Mon, (10, 0), (11, 0)),
            slot(Weekday::Mon, (11, 0), (12, 0)),
        ];
        assert_eq!(find_conflict(&slots), None);
    }

    // --- conflicts ---

    #[test]
    fn overlapping_ranges_conflict() {
        let slots = [
            slot(Weekday::Mon, (10, 0), (11, 30)),
            slot(Weekday::Mon, (11, 0), (12, 0)),
        ];
        let conflict = find_conflict(&slots).unwrap();
        assert_eq!(conflict.day, Weekday::Mon);
        assert_eq!(conflict.first.time_range(), "10:00-11:30");
        assert_eq!(conflict.second.time_range(), "11:00-12:00");
    }

    #[test]
    fn equal_starts_conflict() {
        let slots = [
            slot(Weekday::Fri, (9, 0), (10, 0)),
            slot(Weekday::Fri, (9, 0), (9, 30)),
        ];
        assert!(find_conflict(&slots).is_some());
    }

    #[test]
    fn containment_behind_a_closer_slot_is_caught() {
        // 09:00-12:00 fully contains 10:30-11:00, which is not adjacent to
        // it once 09:30-10:00 sorts in between. The adjacent walk still
        // trips, on the first pair.
        let slots = [
            slot(Weekday::Mon, (10, 30), (11, 0)),
            slot(Weekday::Mon, (9, 0), (12, 0)),
            slot(Weekday::Mon, (9, 30), (10, 0)),
        ];
        assert!(find_conflict(&slots).is_some());
    }

    #[test]
    fn input_order_does_not_change_the_outcome() {
        let a = slot(Weekday::Tue, (10, 0), (11, 30));
        let b = slot(Weekday::Tue, (11, 0), (12, 0));
        let c = slot(Weekday::Wed, (8, 0), (9, 0));

        for slots in [
            [a.clone(), b.clone(), c.clone()],
            [b.clone(), c.clone(), a.clone()],
            [c.clone(), a.clone(), b.clone()],
        ] {
            let conflict = find_conflict(&slots).unwrap();
            assert_eq!(conflict.day, Weekday::Tue);
        }
    }

    // --- validity filtering ---

    #[test]
    fn malformed_slots_are_ignored() {
        // The inverted slot would "overlap" everything if compared raw.
        let slots = [
            slot(Weekday::Mon, (18, 0), (9, 0)),
            slot(Weekday::Mon, (10, 0), (11, 0)),
            slot(Weekday::Mon, (11, 0), (12, 0)),
        ];
        assert_eq!(find_conflict(&slots), None);
    }

    // --- oracle agreement ---

    #[test]
    fn agrees_with_exhaustive_pairwise_check() {
        let pool: Vec<WeeklySlot> = [Weekday::Mon, Weekday::Tue]
            .into_iter()
            .flat_map(|day| {
                [
                    ((9, 0), (10, 0)),
                    ((9, 0), (12, 0)),
                    ((9, 30), (10, 0)),
                    ((10, 0), (11, 0)),
                    ((10, 30), (11, 0)),
                    ((11, 0), (12, 0)),
                ]
                .into_iter()
                .map(move |(start, end)| slot(day, start, end))
            })
            .collect();

        for i in 0..pool.len() {
            for j in (i + 1)..pool.len() {
                for k in (j + 1)..pool.len() {
                    let set = [pool[i].clone(), pool[j].clone(), pool[k].clone()];
                    assert_eq!(
                        find_conflict(&set).is_some(),
                        any_pair_overlaps(&set),
                        "mismatch for {:?}",
                        set
                    );
                }
            }
        }
    }

    // --- display ---

    #[test]
    fn conflict_names_day_and_both_ranges() {
        let slots = [
            slot(Weekday::Mon, (10, 0), (11, 30)),
            slot(Weekday::Mon, (11, 0), (12, 0)),
        ];
        let rendered = find_conflict(&slots).unwrap().to_string();
        assert_eq!(
            rendered,
            "Schedule conflict on Mon: 10:00-11:30 overlaps 11:00-12:00"
        );
    }
}
