use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use rota_core::classroom::Classroom;
use rota_core::classroom_config::ClassroomConfig;
use rota_core::remote::Remote;
use rota_core::rota::Rota;
use url::Url;

pub fn run(name: String, classroom_id: Option<String>, url: Option<String>) -> Result<()> {
    let rota = Rota::load()?;
    let slug = Classroom::unique_slug_for(&name)?;

    let base_url = match url {
        Some(input) => Some(
            Url::parse(&input).with_context(|| format!("Invalid backend URL \"{}\"", input))?,
        ),
        None => rota.default_backend_url().cloned(),
    };

    let remote = match (base_url, classroom_id) {
        (Some(base_url), Some(classroom_id)) => Some(Remote::new(
            base_url,
            classroom_id,
            rota.default_token().map(str::to_string),
        )),
        (None, Some(_)) => anyhow::bail!(
            "No backend URL. Pass --url or set backend_url in the global config."
        ),
        _ => None,
    };

    let mut classroom = Classroom::new(&slug);
    classroom.config = ClassroomConfig { remote };

    std::fs::create_dir_all(classroom.path()?)?;
    classroom.save_config()?;
    classroom.write_schedule(&[])?;

    println!(
        "{}",
        format!("Created classroom '{}' in {}", slug, rota.display_path().display()).green()
    );

    if classroom.remote().is_none() {
        println!(
            "{}",
            "Not connected to the backend; pass --classroom (and --url) to connect it."
                .dimmed()
        );
    }

    Ok(())
}
