use anyhow::Result;
use owo_colors::OwoColorize;
use rota_core::classroom::Classroom;
use rota_core::error::RotaResult;
use rota_core::slot::{ScheduleEntry, day_number};

use super::create_spinner;
use crate::render::Render;

pub async fn run(classrooms: Vec<Classroom>) -> Result<()> {
    let mut total = 0;
    let mut failures = 0;

    for (i, classroom) in classrooms.iter().enumerate() {
        let spinner = create_spinner(classroom.render());
        let result = pull_classroom(classroom).await;
        spinner.finish_and_clear();

        println!("{}", classroom.render());

        match result {
            Ok(count) if count == 0 => println!("   {}", "No slots on the backend".dimmed()),
            Ok(count) => {
                println!("   {}", format!("Pulled {} slot(s)", count).green());
                total += count;
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

    if total > 0 {
        println!("\nPulled {} slot(s)", total);
    }

    if failures > 0 {
        anyhow::bail!("{} classroom(s) could not be pulled", failures);
    }

    Ok(())
}

/// Replace the local schedule file with the backend state.
async fn pull_classroom(classroom: &Classroom) -> RotaResult<usize> {
    let remote = classroom.require_remote()?;
    let stored = remote.schedules().await?;

    let mut entries: Vec<ScheduleEntry> = stored.into_iter().map(ScheduleEntry::from).collect();
    entries.sort_by_key(|e| (day_number(e.slot().day), e.slot().start_minutes()));

    classroom.write_schedule(&entries)?;

    Ok(entries.len())
}
