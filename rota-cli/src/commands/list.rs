use anyhow::Result;
use owo_colors::OwoColorize;
use rota_core::classroom::Classroom;

use crate::render::Render;

pub fn run(classrooms: Vec<Classroom>) -> Result<()> {
    for (i, classroom) in classrooms.iter().enumerate() {
        println!("{}", classroom.render());

        match classroom.schedule() {
            Ok(entries) if entries.is_empty() => println!("   {}", "No slots".dimmed()),
            Ok(entries) => {
                for entry in &entries {
                    println!("   {}", entry.render());
                }
            }
            Err(e) => println!("   {}", e.to_string().red()),
        }

        // Add spacing between classrooms (but not after the last one)
        if i < classrooms.len() - 1 {
            println!();
        }
    }

    Ok(())
}
