use anyhow::Result;
use owo_colors::OwoColorize;
use rota_core::classroom::Classroom;
use rota_core::conflict::find_conflict;
use rota_core::diff::{ApplyStats, ClassroomDiff};
use rota_core::slot::{ScheduleEntry, WeeklySlot, day_number};

use super::create_spinner;
use crate::render::{Render, ScheduleDiffRender};

pub async fn run(classrooms: Vec<Classroom>) -> Result<()> {
    let mut total = ApplyStats::default();
    let mut failures = 0;

    for (i, classroom) in classrooms.iter().enumerate() {
        println!("{}", classroom.render());

        match push_classroom(classroom).await {
            Ok(stats) => {
                total.created += stats.created;
                total.updated += stats.updated;
                total.deleted += stats.deleted;
            }
            Err(e) => {
                println!("   {}", e.to_string().red());
                failures += 1;
            }
        }

        // Add spacing between classrooms (but not after the last one)
        if i < classrooms.len() - 1 {
            println!();
        }
    }

    if total.created > 0 || total.updated > 0 || total.deleted > 0 {
        println!(
            "\nPushed: {} created, {} updated, {} deleted",
            total.created, total.updated, total.deleted
        );
    }

    if failures > 0 {
        anyhow::bail!("{} classroom(s) could not be pushed", failures);
    }

    Ok(())
}

async fn push_classroom(classroom: &Classroom) -> Result<ApplyStats> {
    // Never hand the backend a schedule that collides with itself; both
    // checks run before any network traffic.
    let entries = classroom.schedule()?;
    let slots: Vec<WeeklySlot> = entries.iter().map(|e| e.slot().clone()).collect();

    if let Some(slot) = slots.iter().find(|s| !s.is_valid()) {
        anyhow::bail!("Invalid slot {} (start must be before end)", slot);
    }
    if let Some(conflict) = find_conflict(&slots) {
        anyhow::bail!("{}", conflict);
    }

    let spinner = create_spinner(classroom.render());
    let result = ClassroomDiff::load(classroom).await;
    spinner.finish_and_clear();

    let pending = result?;
    println!("{}", pending.diff.render(false));

    if pending.is_empty() {
        return Ok(ApplyStats::default());
    }

    let stats = pending.apply().await?;

    // The backend is the source of truth: rewrite the local file from a
    // re-fetch so every surviving slot carries its identifier.
    let remote = classroom.require_remote()?;
    let stored = remote.schedules().await?;
    let mut refreshed: Vec<ScheduleEntry> =
        stored.into_iter().map(ScheduleEntry::from).collect();
    refreshed.sort_by_key(|e| (day_number(e.slot().day), e.slot().start_minutes()));
    classroom.write_schedule(&refreshed)?;

    Ok(stats)
}
