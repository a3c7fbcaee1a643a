//! Loading and applying classroom schedule diffs.

use crate::classroom::Classroom;
use crate::diff::{ScheduleDiff, reconcile};
use crate::error::RotaResult;

/// A pending schedule diff bound to the classroom it belongs to.
pub struct ClassroomDiff {
    pub classroom: Classroom,
    pub diff: ScheduleDiff,
}

/// Counts of operations applied to the backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplyStats {
    pub created: usize,
    pub updated: usize,
    pub deleted: usize,
}

impl ClassroomDiff {
    /// Fetch the backend's stored slots and reconcile them with the local
    /// schedule file.
    pub async fn load(classroom: &Classroom) -> RotaResult<Self> {
        let remote = classroom.require_remote()?;

        let existing = remote.schedules().await?;
        let proposed = classroom.schedule()?;

        Ok(ClassroomDiff {
            classroom: classroom.clone(),
            diff: reconcile(&existing, &proposed),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.diff.is_empty()
    }

    /// Apply the diff to the backend: deletes first, then updates, then
    /// creates, each call awaited in turn. The backend validates overlaps
    /// per classroom, so deletions must land before anything that could
    /// transiently collide with them. The first failure aborts the rest;
    /// nothing already applied is rolled back. The backend stays the
    /// source of truth and callers re-fetch afterwards.
    pub async fn apply(&self) -> RotaResult<ApplyStats> {
        let remote = self.classroom.require_remote()?;

        let mut stats = ApplyStats::default();

        for stored in &self.diff.to_delete {
            remote.delete_slot(&stored.id).await?;
            stats.deleted += 1;
        }

        for update in &self.diff.to_update {
            remote.update_slot(&update.id, &update.new).await?;
            stats.updated += 1;
        }

        for slot in &self.diff.to_create {
            remote.create_slot(slot).await?;
            stats.created += 1;
        }

        Ok(stats)
    }
}
