//! Wire types for the backend's schedule endpoints.
//!
//! The backend numbers days 0-6 starting from Sunday and exchanges times as
//! "HH:MM" strings; conversions to and from the chrono-based domain types
//! live here and reject out-of-range days and malformed times.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{RotaError, RotaResult};
use crate::slot::{CLOCK_FORMAT, PersistedSlot, WeeklySlot, day_from_number, day_number};

/// A slot as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotRecord {
    pub id: String,
    pub day_of_week: u8,
    pub start_time: String,
    pub end_time: String,
}

/// Request body for creating or updating a slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotPayload {
    pub day_of_week: u8,
    pub start_time: String,
    pub end_time: String,
}

impl From<&WeeklySlot> for SlotPayload {
    fn from(slot: &WeeklySlot) -> Self {
        SlotPayload {
            day_of_week: day_number(slot.day),
            start_time: slot.start.format(CLOCK_FORMAT).to_string(),
            end_time: slot.end.format(CLOCK_FORMAT).to_string(),
        }
    }
}

impl TryFrom<SlotRecord> for PersistedSlot {
    type Error = RotaError;

    fn try_from(record: SlotRecord) -> RotaResult<Self> {
        let day = day_from_number(record.day_of_week).ok_or_else(|| {
            RotaError::Serialization(format!(
                "day_of_week out of range: {}",
                record.day_of_week
            ))
        })?;

        Ok(PersistedSlot {
            id: record.id,
            slot: WeeklySlot::new(
                day,
                parse_clock(&record.start_time)?,
                parse_clock(&record.end_time)?,
            ),
        })
    }
}

fn parse_clock(s: &str) -> RotaResult<NaiveTime> {
    NaiveTime::parse_from_str(s, CLOCK_FORMAT)
        .map_err(|_| RotaError::Serialization(format!("invalid time '{}': expected HH:MM", s)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    // --- domain -> wire ---

    #[test]
    fn payload_uses_sunday_first_numbering_and_clock_strings() {
        let slot = WeeklySlot::new(
            Weekday::Mon,
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(11, 30, 0).unwrap(),
        );

        let payload = serde_json::to_value(SlotPayload::from(&slot)).unwrap();
        assert_eq!(
            payload,
            serde_json::json!({
                "day_of_week": 1,
                "start_time": "10:00",
                "end_time": "11:30",
            })
        );
    }

    // --- wire -> domain ---

    #[test]
    fn record_converts_to_persisted_slot() {
        let record = SlotRecord {
            id: "s1".to_string(),
            day_of_week: 0,
            start_time: "08:00".to_string(),
            end_time: "09:15".to_string(),
        };

        let stored = PersistedSlot::try_from(record).unwrap();
        assert_eq!(stored.id, "s1");
        assert_eq!(stored.slot.day, Weekday::Sun);
        assert_eq!(stored.slot.time_range(), "08:00-09:15");
    }

    #[test]
    fn record_rejects_out_of_range_day() {
        let record = SlotRecord {
            id: "s1".to_string(),
            day_of_week: 7,
            start_time: "08:00".to_string(),
            end_time: "09:00".to_string(),
        };
        assert!(PersistedSlot::try_from(record).is_err());
    }

    #[test]
    fn record_rejects_malformed_time() {
        let record = SlotRecord {
            id: "s1".to_string(),
            day_of_week: 2,
            start_time: "8am".to_string(),
            end_time: "09:00".to_string(),
        };
        assert!(PersistedSlot::try_from(record).is_err());
    }
}
