use std::ffi::OsString;
use std::io::IsTerminal;

use dots_core::config::{FALLBACK_TERMINAL_SIZE, RenderEnv};

/// Lit l'environnement du processus une seule fois : `NO_COLOR` et taille
/// du terminal sur stdout.
#[must_use]
pub fn probe() -> RenderEnv {
    let size = if std::io::stdout().is_terminal() {
        crossterm::terminal::size()
            .inspect_err(|e| log::debug!("Taille du terminal indisponible : {e}"))
            .ok()
    } else {
        None
    };
    build_env(std::env::var_os("NO_COLOR"), size)
}

/// Build a [`RenderEnv`] from raw probe results.
///
/// `NO_COLOR` counts only when set to a non-empty value. A missing or
/// zero-sized terminal falls back to 80×24.
#[must_use]
pub fn build_env(no_color: Option<OsString>, size: Option<(u16, u16)>) -> RenderEnv {
    let terminal_size = match size {
        Some((cols, rows)) if cols > 0 && rows > 0 => (u32::from(cols), u32::from(rows)),
        _ => FALLBACK_TERMINAL_SIZE,
    };
    RenderEnv {
        no_color: no_color.is_some_and(|v| !v.is_empty()),
        terminal_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_color_needs_a_value() {
        assert!(!build_env(None, None).no_color);
        assert!(!build_env(Some(OsString::new()), None).no_color);
        assert!(build_env(Some("1".into()), None).no_color);
    }

    #[test]
    fn terminal_size_falls_back() {
        assert_eq!(build_env(None, None).terminal_size, (80, 24));
        assert_eq!(build_env(None, Some((0, 40))).terminal_size, (80, 24));
        assert_eq!(build_env(None, Some((120, 40))).terminal_size, (120, 40));
    }
}
