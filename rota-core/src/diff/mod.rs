//! Schedule diff computation and application.

mod classroom_diff;
mod diff_kind;
mod schedule_diff;

pub use classroom_diff::{ApplyStats, ClassroomDiff};
pub use diff_kind::DiffKind;
pub use schedule_diff::{ScheduleDiff, SlotUpdate, reconcile};
