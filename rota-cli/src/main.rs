mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rota_core::classroom::Classroom;
use rota_core::rota::Rota;

#[derive(Parser)]
#[command(name = "rota")]
#[command(about = "Manage classroom timetables and sync them with your school backend")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a classroom directory
    New {
        name: String,

        /// Backend classroom identifier
        #[arg(long)]
        classroom: Option<String>,

        /// Backend base URL (defaults to the global config)
        #[arg(long)]
        url: Option<String>,
    },
    /// Add a draft slot to a classroom's schedule
    Add {
        /// Day of week (e.g. "mon", "thursday")
        day: String,

        /// Time range (e.g. "10:00-11:30")
        time: String,

        /// Only operate on this classroom (by slug)
        #[arg(short, long)]
        classroom: Option<String>,
    },
    /// Validate and conflict-check local schedules
    Check {
        /// Only operate on this classroom (by slug)
        #[arg(short, long)]
        classroom: Option<String>,
    },
    /// Show classrooms and their local slots
    List,
    /// Show pending changes against the backend
    Status {
        /// Only operate on this classroom (by slug)
        #[arg(short, long)]
        classroom: Option<String>,
    },
    /// Replace local schedules with the backend state
    Pull {
        /// Only operate on this classroom (by slug)
        #[arg(short, long)]
        classroom: Option<String>,
    },
    /// Apply local schedule changes to the backend
    Push {
        /// Only operate on this classroom (by slug)
        #[arg(short, long)]
        classroom: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::New {
            name,
            classroom,
            url,
        } => commands::new::run(name, classroom, url),
        Commands::Add {
            day,
            time,
            classroom,
        } => {
            require_classrooms()?;
            let classrooms = resolve_classrooms(classroom.as_deref())?;
            commands::add::run(&day, &time, classrooms)
        }
        Commands::Check { classroom } => {
            require_classrooms()?;
            let classrooms = resolve_classrooms(classroom.as_deref())?;
            commands::check::run(classrooms)
        }
        Commands::List => {
            require_classrooms()?;
            let classrooms = resolve_classrooms(None)?;
            commands::list::run(classrooms)
        }
        Commands::Status { classroom } => {
            require_classrooms()?;
            let classrooms = resolve_classrooms(classroom.as_deref())?;
            commands::status::run(classrooms).await
        }
        Commands::Pull { classroom } => {
            require_classrooms()?;
            let classrooms = resolve_classrooms(classroom.as_deref())?;
            commands::pull::run(classrooms).await
        }
        Commands::Push { classroom } => {
            require_classrooms()?;
            let classrooms = resolve_classrooms(classroom.as_deref())?;
            commands::push::run(classrooms).await
        }
    }
}

fn require_classrooms() -> Result<()> {
    let rota = Rota::load()?;

    if rota.classrooms().is_empty() {
        anyhow::bail!(
            "No classrooms found.\n\n\
            Create your first classroom with:\n  \
            rota new <name> --classroom <backend-id>\n\n\
            Example:\n  \
            rota new \"Algebra II\" --classroom 7f3a"
        );
    }

    Ok(())
}

fn resolve_classrooms(classroom_filter: Option<&str>) -> Result<Vec<Classroom>> {
    let rota = Rota::load()?;
    let all_classrooms = rota.classrooms();

    match classroom_filter {
        Some(slug) => match all_classrooms.into_iter().find(|c| c.slug == slug) {
            Some(classroom) => Ok(vec![classroom]),
            None => {
                let available: Vec<_> =
                    rota.classrooms().iter().map(|c| c.slug.clone()).collect();
                anyhow::bail!(
                    "Classroom '{}' not found. Available: {}",
                    slug,
                    available.join(", ")
                );
            }
        },
        None => Ok(all_classrooms),
    }
}
