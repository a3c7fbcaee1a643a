use anyhow::Result;
use chrono::{NaiveTime, Weekday};
use owo_colors::OwoColorize;
use rota_core::classroom::Classroom;
use rota_core::conflict::find_conflict;
use rota_core::slot::{CLOCK_FORMAT, ScheduleEntry, WeeklySlot, parse_weekday};

pub fn run(day: &str, time: &str, classrooms: Vec<Classroom>) -> Result<()> {
    let classroom = single_classroom(&classrooms)?;

    let day = parse_day(day)?;
    let (start, end) = parse_time_range(time)?;
    let slot = WeeklySlot::new(day, start, end);
    slot.validate()?;

    let mut entries = classroom.schedule()?;

    // Reject the addition outright if it would collide with the rest of
    // the schedule.
    let mut slots: Vec<WeeklySlot> = entries.iter().map(|e| e.slot().clone()).collect();
    slots.push(slot.clone());
    if let Some(conflict) = find_conflict(&slots) {
        anyhow::bail!("{}", conflict);
    }

    entries.push(ScheduleEntry::Draft { slot: slot.clone() });
    classroom.write_schedule(&entries)?;

    println!(
        "{}",
        format!("  Added: {} to '{}'", slot, classroom.slug).green()
    );

    Ok(())
}

fn single_classroom(classrooms: &[Classroom]) -> Result<&Classroom> {
    match classrooms {
        [one] => Ok(one),
        _ => {
            let available: Vec<_> = classrooms.iter().map(|c| c.slug.as_str()).collect();
            anyhow::bail!(
                "Multiple classrooms found ({}). Use --classroom to specify one.",
                available.join(", ")
            )
        }
    }
}

/// Parse a weekday name or abbreviation.
fn parse_day(input: &str) -> Result<Weekday> {
    parse_weekday(input).ok_or_else(|| anyhow::anyhow!("Could not parse day: \"{}\"", input))
}

/// Parse a "HH:MM-HH:MM" time range.
fn parse_time_range(input: &str) -> Result<(NaiveTime, NaiveTime)> {
    let (start, end) = input.split_once('-').ok_or_else(|| {
        anyhow::anyhow!(
            "Could not parse time range \"{}\". Expected HH:MM-HH:MM",
            input
        )
    })?;

    Ok((parse_time(start.trim())?, parse_time(end.trim())?))
}

fn parse_time(input: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(input, CLOCK_FORMAT)
        .map_err(|_| anyhow::anyhow!("Could not parse time \"{}\". Expected HH:MM", input))
}
