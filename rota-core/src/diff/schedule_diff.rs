//! Schedule reconciliation.
//!
//! `reconcile` computes the minimal create/update/delete set that transforms
//! the backend's stored slots into the locally edited schedule. It is a pure
//! function; issuing the resulting calls belongs to `ClassroomDiff`.

use serde::{Deserialize, Serialize};

use crate::slot::{PersistedSlot, ScheduleEntry, SlotId, WeeklySlot};

/// A content change to a slot the backend already stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotUpdate {
    pub id: SlotId,
    pub old: WeeklySlot,
    pub new: WeeklySlot,
}

/// The difference between the backend's stored slots and the local schedule,
/// as three disjoint batches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDiff {
    pub to_create: Vec<WeeklySlot>,
    pub to_update: Vec<SlotUpdate>,
    pub to_delete: Vec<PersistedSlot>,
}

impl ScheduleDiff {
    pub fn is_empty(&self) -> bool {
        self.to_create.is_empty() && self.to_update.is_empty() && self.to_delete.is_empty()
    }

    /// (created, updated, deleted) counts.
    pub fn counts(&self) -> (usize, usize, usize) {
        (
            self.to_create.len(),
            self.to_update.len(),
            self.to_delete.len(),
        )
    }
}

/// Compute the slot operations needed to make the backend match `proposed`.
///
/// Existing slots are matched by identifier when a proposed entry carries
/// one, and by content (day + start + end) against draft entries otherwise.
/// The content fallback keeps a re-entered slot alive instead of deleting
/// and re-creating it. A persisted entry whose identifier the backend no
/// longer knows is re-created from its content: the file still wants the
/// slot in the schedule.
pub fn reconcile(existing: &[PersistedSlot], proposed: &[ScheduleEntry]) -> ScheduleDiff {
    let mut diff = ScheduleDiff::default();

    // Stored slots with no surviving counterpart get deleted.
    for current in existing {
        let kept_by_id = proposed
            .iter()
            .any(|entry| entry.id() == Some(current.id.as_str()));
        let kept_by_content = proposed
            .iter()
            .any(|entry| entry.id().is_none() && *entry.slot() == current.slot);

        if !kept_by_id && !kept_by_content {
            diff.to_delete.push(current.clone());
        }
    }

    for entry in proposed {
        match entry {
            ScheduleEntry::Persisted { id, slot } => {
                match existing.iter().find(|current| &current.id == id) {
                    // Unchanged, nothing to do.
                    Some(current) if current.slot == *slot => {}
                    Some(current) => diff.to_update.push(SlotUpdate {
                        id: id.clone(),
                        old: current.slot.clone(),
                        new: slot.clone(),
                    }),
                    None => diff.to_create.push(slot.clone()),
                }
            }
            ScheduleEntry::Draft { slot } => {
                let already_stored = existing.iter().any(|current| current.slot == *slot);
                if !already_stored {
                    diff.to_create.push(slot.clone());
                }
            }
        }
    }

    diff
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, Weekday};

    fn slot(day: Weekday, start: (u32, u32), end: (u32, u32)) -> WeeklySlot {
        WeeklySlot::new(
            day,
            NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
        )
    }

    fn stored(id: &str, day: Weekday, start: (u32, u32), end: (u32, u32)) -> PersistedSlot {
        PersistedSlot {
            id: id.to_string(),
            slot: slot(day, start, end),
        }
    }

    fn draft(day: Weekday, start: (u32, u32), end: (u32, u32)) -> ScheduleEntry {
        ScheduleEntry::Draft {
            slot: slot(day, start, end),
        }
    }

    fn persisted(id: &str, day: Weekday, start: (u32, u32), end: (u32, u32)) -> ScheduleEntry {
        ScheduleEntry::Persisted {
            id: id.to_string(),
            slot: slot(day, start, end),
        }
    }

    // --- no-ops ---

    #[test]
    fn identical_sets_produce_an_empty_diff() {
        let existing = [
            stored("a", Weekday::Mon, (10, 0), (11, 0)),
            stored("b", Weekday::Wed, (14, 0), (15, 0)),
        ];
        let proposed = [
            persisted("a", Weekday::Mon, (10, 0), (11, 0)),
            persisted("b", Weekday::Wed, (14, 0), (15, 0)),
        ];
        assert!(reconcile(&existing, &proposed).is_empty());
    }

    #[test]
    fn both_empty_is_empty() {
        assert!(reconcile(&[], &[]).is_empty());
    }

    #[test]
    fn draft_matching_stored_content_is_already_satisfied() {
        // Same slot re-entered without its identifier: neither a duplicate
        // create nor a delete of the stored one.
        let existing = [stored("a", Weekday::Tue, (8, 0), (9, 0))];
        let proposed = [draft(Weekday::Tue, (8, 0), (9, 0))];
        assert!(reconcile(&existing, &proposed).is_empty());
    }

    // --- single operations ---

    #[test]
    fn removed_slot_is_deleted() {
        let existing = [
            stored("a", Weekday::Mon, (10, 0), (11, 0)),
            stored("x", Weekday::Thu, (9, 0), (10, 0)),
        ];
        let proposed = [persisted("a", Weekday::Mon, (10, 0), (11, 0))];

        let diff = reconcile(&existing, &proposed);
        assert_eq!(diff.to_delete, vec![existing[1].clone()]);
        assert!(diff.to_create.is_empty());
        assert!(diff.to_update.is_empty());
    }

    #[test]
    fn emptied_schedule_deletes_everything() {
        let existing = [stored("x", Weekday::Thu, (9, 0), (10, 0))];
        let diff = reconcile(&existing, &[]);
        assert_eq!(diff.to_delete, existing.to_vec());
        assert!(diff.to_create.is_empty());
        assert!(diff.to_update.is_empty());
    }

    #[test]
    fn new_draft_is_created() {
        let diff = reconcile(&[], &[draft(Weekday::Wed, (14, 0), (15, 0))]);
        assert_eq!(diff.to_create, vec![slot(Weekday::Wed, (14, 0), (15, 0))]);
        assert!(diff.to_update.is_empty());
        assert!(diff.to_delete.is_empty());
    }

    #[test]
    fn changed_content_under_the_same_id_is_updated() {
        let existing = [stored("a", Weekday::Tue, (8, 0), (9, 0))];
        let proposed = [persisted("a", Weekday::Tue, (8, 0), (9, 30))];

        let diff = reconcile(&existing, &proposed);
        assert_eq!(
            diff.to_update,
            vec![SlotUpdate {
                id: "a".to_string(),
                old: slot(Weekday::Tue, (8, 0), (9, 0)),
                new: slot(Weekday::Tue, (8, 0), (9, 30)),
            }]
        );
        assert!(diff.to_create.is_empty());
        assert!(diff.to_delete.is_empty());
    }

    #[test]
    fn stale_identifier_is_recreated_from_content() {
        // The backend forgot this id (deleted elsewhere); the schedule still
        // wants the slot.
        let diff = reconcile(&[], &[persisted("gone", Weekday::Fri, (13, 0), (14, 0))]);
        assert_eq!(diff.to_create, vec![slot(Weekday::Fri, (13, 0), (14, 0))]);
        assert!(diff.to_delete.is_empty());
    }

    // --- combined ---

    #[test]
    fn mixed_edit_produces_disjoint_batches() {
        let existing = [
            stored("a", Weekday::Mon, (10, 0), (11, 0)),
            stored("b", Weekday::Wed, (14, 0), (15, 0)),
            stored("c", Weekday::Fri, (9, 0), (10, 0)),
        ];
        let proposed = [
            // a kept as-is, b rescheduled, c dropped, one new slot added
            persisted("a", Weekday::Mon, (10, 0), (11, 0)),
            persisted("b", Weekday::Wed, (15, 0), (16, 0)),
            draft(Weekday::Sat, (10, 0), (12, 0)),
        ];

        let diff = reconcile(&existing, &proposed);
        assert_eq!(diff.counts(), (1, 1, 1));
        assert_eq!(diff.to_create, vec![slot(Weekday::Sat, (10, 0), (12, 0))]);
        assert_eq!(diff.to_update[0].id, "b");
        assert_eq!(diff.to_delete[0].id, "c");
    }

    #[test]
    fn content_fallback_does_not_save_slots_kept_by_id_elsewhere() {
        // The draft matches b's content, so b survives; a is gone entirely.
        let existing = [
            stored("a", Weekday::Mon, (10, 0), (11, 0)),
            stored("b", Weekday::Tue, (10, 0), (11, 0)),
        ];
        let proposed = [draft(Weekday::Tue, (10, 0), (11, 0))];

        let diff = reconcile(&existing, &proposed);
        assert_eq!(diff.to_delete, vec![existing[0].clone()]);
        assert!(diff.to_create.is_empty());
    }
}
