use anyhow::Result;
use owo_colors::OwoColorize;
use rota_core::classroom::Classroom;
use rota_core::conflict::find_conflict;
use rota_core::slot::WeeklySlot;

use crate::render::Render;

pub fn run(classrooms: Vec<Classroom>) -> Result<()> {
    let mut failures = 0;

    for (i, classroom) in classrooms.iter().enumerate() {
        println!("{}", classroom.render());

        if !check_classroom(classroom) {
            failures += 1;
        }

        // Add spacing between classrooms (but not after the last one)
        if i < classrooms.len() - 1 {
            println!();
        }
    }

    if failures > 0 {
        anyhow::bail!("{} classroom(s) failed the schedule check", failures);
    }

    Ok(())
}

/// Validate and conflict-check one classroom, printing findings.
/// Returns false if anything is wrong.
fn check_classroom(classroom: &Classroom) -> bool {
    let entries = match classroom.schedule() {
        Ok(entries) => entries,
        Err(e) => {
            println!("   {}", e.to_string().red());
            return false;
        }
    };

    let slots: Vec<WeeklySlot> = entries.iter().map(|e| e.slot().clone()).collect();
    let mut ok = true;

    for slot in slots.iter().filter(|s| !s.is_valid()) {
        println!(
            "   {}",
            format!("Invalid slot {} (start must be before end)", slot).red()
        );
        ok = false;
    }

    if let Some(conflict) = find_conflict(&slots) {
        println!("   {}", conflict.to_string().red());
        ok = false;
    }

    if ok {
        println!("   {}", "No conflicts".dimmed());
    }

    ok
}
