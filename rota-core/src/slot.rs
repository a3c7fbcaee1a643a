//! Weekly slot types.
//!
//! A classroom's timetable is a set of weekly recurring slots: a day of the
//! week plus a start and end time of day at hour:minute granularity. Slots
//! the backend has stored carry its stable identifier; freshly added slots
//! are drafts without one, and the distinction is an explicit tag rather
//! than an optional field.

use std::fmt;

use chrono::{NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{RotaError, RotaResult};

/// Time-of-day format used in schedule files and on the wire.
pub const CLOCK_FORMAT: &str = "%H:%M";

/// Stable identifier assigned by the backend once a slot is stored.
pub type SlotId = String;

/// One recurring weekly occurrence of a class session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySlot {
    #[serde(with = "weekday_str")]
    pub day: Weekday,
    #[serde(with = "clock_time")]
    pub start: NaiveTime,
    #[serde(with = "clock_time")]
    pub end: NaiveTime,
}

impl WeeklySlot {
    pub fn new(day: Weekday, start: NaiveTime, end: NaiveTime) -> Self {
        WeeklySlot { day, start, end }
    }

    /// Minutes since midnight; all ordering and overlap comparison happens
    /// on this representation.
    pub fn start_minutes(&self) -> u32 {
        minutes_of_day(self.start)
    }

    pub fn end_minutes(&self) -> u32 {
        minutes_of_day(self.end)
    }

    /// A slot is well-formed when it starts strictly before it ends.
    pub fn is_valid(&self) -> bool {
        self.start_minutes() < self.end_minutes()
    }

    pub fn validate(&self) -> RotaResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(RotaError::InvalidSlot(format!(
                "{}: start must be before end",
                self
            )))
        }
    }

    /// The time range alone, e.g. "10:00-11:30".
    pub fn time_range(&self) -> String {
        format!(
            "{}-{}",
            self.start.format(CLOCK_FORMAT),
            self.end.format(CLOCK_FORMAT)
        )
    }
}

impl fmt::Display for WeeklySlot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.day, self.time_range())
    }
}

/// A weekly slot as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSlot {
    pub id: SlotId,
    #[serde(flatten)]
    pub slot: WeeklySlot,
}

/// A slot in the locally edited schedule, tagged by whether the backend has
/// stored it yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScheduleEntry {
    /// Round-tripped from the backend; carries its stable identifier.
    Persisted {
        id: SlotId,
        #[serde(flatten)]
        slot: WeeklySlot,
    },
    /// Added locally, not yet stored.
    Draft {
        #[serde(flatten)]
        slot: WeeklySlot,
    },
}

impl ScheduleEntry {
    pub fn slot(&self) -> &WeeklySlot {
        match self {
            ScheduleEntry::Persisted { slot, .. } => slot,
            ScheduleEntry::Draft { slot } => slot,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            ScheduleEntry::Persisted { id, .. } => Some(id.as_str()),
            ScheduleEntry::Draft { .. } => None,
        }
    }
}

impl From<PersistedSlot> for ScheduleEntry {
    fn from(stored: PersistedSlot) -> Self {
        ScheduleEntry::Persisted {
            id: stored.id,
            slot: stored.slot,
        }
    }
}

pub fn minutes_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Sunday-first day numbering (0 = Sunday .. 6 = Saturday), the backend's
/// wire convention. Also used wherever slots are ordered by day.
pub fn day_number(day: Weekday) -> u8 {
    day.num_days_from_sunday() as u8
}

pub fn day_from_number(n: u8) -> Option<Weekday> {
    let day = match n {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        6 => Weekday::Sat,
        _ => return None,
    };
    Some(day)
}

/// Parse a weekday name or common abbreviation, any case.
pub fn parse_weekday(input: &str) -> Option<Weekday> {
    let day = match input.to_lowercase().as_str() {
        "mon" | "monday" => Weekday::Mon,
        "tue" | "tues" | "tuesday" => Weekday::Tue,
        "wed" | "wednesday" => Weekday::Wed,
        "thu" | "thur" | "thurs" | "thursday" => Weekday::Thu,
        "fri" | "friday" => Weekday::Fri,
        "sat" | "saturday" => Weekday::Sat,
        "sun" | "sunday" => Weekday::Sun,
        _ => return None,
    };
    Some(day)
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "mon",
        Weekday::Tue => "tue",
        Weekday::Wed => "wed",
        Weekday::Thu => "thu",
        Weekday::Fri => "fri",
        Weekday::Sat => "sat",
        Weekday::Sun => "sun",
    }
}

/// Serde helpers for weekday names ("mon", "thursday", ...).
mod weekday_str {
    use chrono::Weekday;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(super::weekday_name(*day))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_weekday(&s)
            .ok_or_else(|| de::Error::custom(format!("invalid weekday '{}'", s)))
    }
}

/// Serde helpers for "HH:MM" wall-clock times.
mod clock_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    use super::CLOCK_FORMAT;

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(CLOCK_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, CLOCK_FORMAT)
            .map_err(|_| de::Error::custom(format!("invalid time '{}': expected HH:MM", s)))
    }
}
