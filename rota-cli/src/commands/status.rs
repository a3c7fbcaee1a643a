use anyhow::Result;
use owo_colors::OwoColorize;
use rota_core::classroom::Classroom;
use rota_core::diff::ClassroomDiff;

use super::create_spinner;
use crate::render::{Render, ScheduleDiffRender};

pub async fn run(classrooms: Vec<Classroom>) -> Result<()> {
    let mut failures = 0;

    for (i, classroom) in classrooms.iter().enumerate() {
        let spinner = create_spinner(classroom.render());
        let result = ClassroomDiff::load(classroom).await;
        spinner.finish_and_clear();

        // Show classroom name
        println!("{}", classroom.render());

        // Show diff or error
        match result {
            Ok(pending) => println!("{}", pending.diff.render(false)),
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

    if failures > 0 {
        anyhow::bail!("{} classroom(s) could not be checked", failures);
    }

    Ok(())
}
