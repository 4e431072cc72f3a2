use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dots_core::color::parse_hex;
use dots_core::config::{Background, RenderOptions};

/// dots : images en art braille Unicode pour le terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Image à convertir (PNG, JPEG, GIF, BMP).
    pub image: PathBuf,

    /// Largeur de sortie en caractères (défaut : largeur du terminal).
    #[arg(short, long)]
    pub width: Option<u32>,

    /// Hauteur de sortie en caractères (défaut : hauteur du terminal).
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Seuil de luminance (0-255). Défaut : 20.
    #[arg(short, long)]
    pub threshold: Option<u8>,

    /// Désactiver les couleurs ANSI.
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Couleur de fond en hex (ex. "ff0000" ou "#f00").
    #[arg(long)]
    pub background: Option<String>,

    /// Tramage Floyd-Steinberg.
    #[arg(long, default_value_t = false)]
    pub dither: bool,

    /// Cadre blanc autour de l'image.
    #[arg(long, default_value_t = false)]
    pub frame: bool,

    /// Fichier de configuration TOML. Défaut : dots.toml s'il existe.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Apply command-line overrides on top of `base`.
    ///
    /// Flags only ever switch features on; `--no-color` switches color off.
    ///
    /// # Errors
    /// Returns an error if `--background` is not a valid hex color.
    pub fn apply(&self, mut base: RenderOptions) -> Result<RenderOptions> {
        if let Some(w) = self.width {
            base.width = w;
        }
        if let Some(h) = self.height {
            base.height = h;
        }
        if let Some(t) = self.threshold {
            base.threshold = t;
        }
        if self.no_color {
            base.color_enabled = false;
        }
        if let Some(ref hex) = self.background {
            let code = parse_hex(hex).context("Couleur de fond invalide")?;
            base.background = Background::Ansi(code);
        }
        if self.dither {
            base.dither = true;
        }
        if self.frame {
            base.frame = true;
        }
        Ok(base)
    }
}
