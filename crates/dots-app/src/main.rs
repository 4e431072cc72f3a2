use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use dots_braille::compositor::Renderer;
use dots_core::config::{RenderOptions, load_config};
use dots_source::resize::Resizer;

pub mod cli;
pub mod terminal;

/// Config lue par défaut dans le répertoire courant.
const DEFAULT_CONFIG: &str = "dots.toml";

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging (stderr, jamais mélangé à la sortie)
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config, puis appliquer les overrides CLI
    let options = cli.apply(resolve_config(cli.config.as_deref(), Path::new(DEFAULT_CONFIG))?)?;

    // 4. Environnement (NO_COLOR, taille du terminal), lu une seule fois
    let env = terminal::probe();
    log::debug!("Environnement : {env:?}");

    // 5. Décoder l'image
    let image = dots_source::image::load_image(&cli.image)?;

    // 6. Rendu
    let lines = Renderer::new(Resizer::new())
        .render(&image, &options, &env)
        .with_context(|| format!("Rendu impossible pour {}", cli.image.display()))?;

    // 7. Sortie
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for line in &lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

/// Resolve config: explicit --config must exist, otherwise `default` if present.
fn resolve_config(explicit: Option<&Path>, default: &Path) -> Result<RenderOptions> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    if default.exists() {
        log::info!("Config chargée depuis {}", default.display());
        load_config(default)
    } else {
        log::debug!("Pas de {}, valeurs par défaut", default.display());
        Ok(RenderOptions::default())
    }
}
