use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::color::parse_hex;
use crate::error::CoreError;

/// Seuil de luminance appliqué quand aucun n'est fourni (0).
pub const DEFAULT_THRESHOLD: u8 = 20;

/// Taille de terminal supposée quand elle ne peut pas être détectée.
pub const FALLBACK_TERMINAL_SIZE: (u32, u32) = (80, 24);

/// Background color of every rendered cell.
///
/// # Example
/// ```
/// use dots_core::config::Background;
/// assert_eq!(Background::default(), Background::None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum Background {
    /// Terminal default background, no `48;5;` code emitted.
    #[default]
    None,
    /// Pre-quantized ANSI 256 code.
    Ansi(u8),
}

impl Background {
    /// ANSI code if a background is set.
    #[must_use]
    pub fn code(self) -> Option<u8> {
        match self {
            Self::None => None,
            Self::Ansi(code) => Some(code),
        }
    }
}

/// Options de rendu fournies par l'appelant.
///
/// Never mutated by the renderer; [`RenderOptions::resolve`] derives the
/// effective values.
///
/// # Example
/// ```
/// use dots_core::config::RenderOptions;
/// let opts = RenderOptions::default();
/// assert_eq!(opts.threshold, 20);
/// assert!(opts.color_enabled);
/// ```
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RenderOptions {
    /// Largeur en cellules. 0 = automatique.
    pub width: u32,
    /// Hauteur en cellules. 0 = automatique.
    pub height: u32,
    /// Seuil de luminance [0, 255]. 0 = défaut (20).
    pub threshold: u8,
    /// Couleurs ANSI 256 activées.
    pub color_enabled: bool,
    /// Fond des cellules colorées.
    pub background: Background,
    /// Tramage Floyd-Steinberg.
    pub dither: bool,
    /// Cadre autour de l'image.
    pub frame: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            threshold: DEFAULT_THRESHOLD,
            color_enabled: true,
            background: Background::None,
            dither: false,
            frame: false,
        }
    }
}

/// Process-wide state the renderer depends on.
///
/// Built once by the binary (NO_COLOR, terminal size) and handed to the
/// renderer explicitly, so tests never touch the real environment.
///
/// # Example
/// ```
/// use dots_core::config::RenderEnv;
/// let env = RenderEnv::default();
/// assert!(!env.no_color);
/// assert_eq!(env.terminal_size, (80, 24));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderEnv {
    /// `NO_COLOR` est défini et non vide.
    pub no_color: bool,
    /// Terminal (colonnes, lignes).
    pub terminal_size: (u32, u32),
}

impl Default for RenderEnv {
    fn default() -> Self {
        Self {
            no_color: false,
            terminal_size: FALLBACK_TERMINAL_SIZE,
        }
    }
}

/// Valeurs effectives après application des défauts et de l'environnement.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedOptions {
    /// Requested width in cells (0 = auto).
    pub width: u32,
    /// Requested height in cells (0 = auto).
    pub height: u32,
    /// Effective threshold, never 0.
    pub threshold: u8,
    /// Color after the NO_COLOR override.
    pub color: bool,
    /// Background, only meaningful with `color`.
    pub background: Background,
    /// Dithering on.
    pub dither: bool,
    /// Frame on.
    pub frame: bool,
}

impl RenderOptions {
    /// Single configuration-resolution entry point.
    ///
    /// Applies the default threshold when it is 0 and forces color off
    /// when the environment asks for it.
    ///
    /// # Example
    /// ```
    /// use dots_core::config::{RenderEnv, RenderOptions};
    /// let opts = RenderOptions { threshold: 0, ..Default::default() };
    /// let env = RenderEnv { no_color: true, ..Default::default() };
    /// let resolved = opts.resolve(&env);
    /// assert_eq!(resolved.threshold, 20);
    /// assert!(!resolved.color);
    /// ```
    #[must_use]
    pub fn resolve(&self, env: &RenderEnv) -> ResolvedOptions {
        let threshold = if self.threshold == 0 {
            DEFAULT_THRESHOLD
        } else {
            self.threshold
        };
        if env.no_color && self.color_enabled {
            log::warn!("NO_COLOR défini, couleurs désactivées");
        }
        ResolvedOptions {
            width: self.width,
            height: self.height,
            threshold,
            color: self.color_enabled && !env.no_color,
            background: self.background,
            dither: self.dither,
            frame: self.frame,
        }
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    render: Option<RenderSection>,
}

/// Render section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RenderSection {
    width: Option<u32>,
    height: Option<u32>,
    threshold: Option<u8>,
    color: Option<bool>,
    /// Hex literal, e.g. `"#1e1e2e"`.
    background: Option<String>,
    dither: Option<bool>,
    frame: Option<bool>,
}

/// Parse TOML text and merge it over the defaults.
///
/// # Errors
/// Returns [`CoreError::Config`] on invalid TOML, an unknown key or an
/// invalid background color.
///
/// # Example
/// ```
/// use dots_core::config::{parse_config, Background};
/// let opts = parse_config("[render]\nthreshold = 64\nbackground = \"#f00\"\n").unwrap();
/// assert_eq!(opts.threshold, 64);
/// assert_eq!(opts.background, Background::Ansi(196));
/// ```
pub fn parse_config(content: &str) -> Result<RenderOptions> {
    let file: ConfigFile =
        toml::from_str(content).map_err(|e| CoreError::Config(format!("TOML : {e}")))?;

    let mut opts = RenderOptions::default();
    let Some(r) = file.render else {
        return Ok(opts);
    };

    if let Some(v) = r.width {
        opts.width = v;
    }
    if let Some(v) = r.height {
        opts.height = v;
    }
    if let Some(v) = r.threshold {
        opts.threshold = v;
    }
    if let Some(v) = r.color {
        opts.color_enabled = v;
    }
    if let Some(v) = r.background {
        let code = parse_hex(&v)
            .map_err(|e| CoreError::Config(format!("render.background : {e}")))?;
        opts.background = Background::Ansi(code);
    }
    if let Some(v) = r.dither {
        opts.dither = v;
    }
    if let Some(v) = r.frame {
        opts.frame = v;
    }

    Ok(opts)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use dots_core::config::load_config;
/// use std::path::Path;
/// let opts = load_config(Path::new("dots.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<RenderOptions> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Config invalide dans {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn resolve_keeps_explicit_threshold() {
        let opts = RenderOptions {
            threshold: 128,
            ..Default::default()
        };
        assert_eq!(opts.resolve(&RenderEnv::default()).threshold, 128);
    }

    #[test]
    fn resolve_does_not_touch_caller_options() {
        let opts = RenderOptions {
            threshold: 0,
            ..Default::default()
        };
        let before = opts.clone();
        let _ = opts.resolve(&RenderEnv {
            no_color: true,
            ..Default::default()
        });
        assert_eq!(opts, before);
    }

    #[test]
    fn no_color_env_wins_over_options() {
        let opts = RenderOptions::default();
        let env = RenderEnv {
            no_color: true,
            ..Default::default()
        };
        assert!(!opts.resolve(&env).color);
        assert!(opts.resolve(&RenderEnv::default()).color);
    }

    #[test]
    fn empty_config_is_default() {
        assert_eq!(parse_config("").unwrap(), RenderOptions::default());
        assert_eq!(parse_config("[render]\n").unwrap(), RenderOptions::default());
    }

    #[test]
    fn partial_config_overrides_only_given_keys() {
        let opts = parse_config("[render]\nwidth = 40\ndither = true\ncolor = false\n").unwrap();
        assert_eq!(opts.width, 40);
        assert_eq!(opts.height, 0);
        assert!(opts.dither);
        assert!(!opts.color_enabled);
        assert_eq!(opts.threshold, DEFAULT_THRESHOLD);
    }

    #[test]
    fn bad_background_is_a_config_error() {
        let err = parse_config("[render]\nbackground = \"zzz\"\n").unwrap_err();
        let Some(CoreError::Config(msg)) = err.downcast_ref::<CoreError>() else {
            panic!("unexpected error: {err:?}");
        };
        assert!(msg.starts_with("render.background"), "{msg}");
    }

    #[test]
    fn unknown_key_is_a_config_error() {
        let err = parse_config("[render]\ncolour = true\n").unwrap_err();
        assert!(matches!(err.downcast_ref::<CoreError>(), Some(CoreError::Config(_))));
    }

    #[test]
    fn invalid_file_keeps_config_error_under_context() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[render]\nthreshold = 300").unwrap();
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err.downcast_ref::<CoreError>(), Some(CoreError::Config(_))));
    }

    #[test]
    fn load_config_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[render]\nframe = true\nthreshold = 100").unwrap();
        let opts = load_config(file.path()).unwrap();
        assert!(opts.frame);
        assert_eq!(opts.threshold, 100);
    }

    #[test]
    fn load_config_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(&dir.path().join("absent.toml")).is_err());
    }
}
