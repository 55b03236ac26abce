//! Viewer settings. There are no command line flags; the only override is the
//! `VECVIEW_FONT` environment variable.

use std::env;
use std::path::PathBuf;

/// Window title displayed in the title bar
pub const TITLE: &str = "Vector Viewer (SDL2) - Labels & Lengths";
/// Initial client width in pixels
pub const WINDOW_WIDTH: u32 = 800;
/// Initial client height in pixels
pub const WINDOW_HEIGHT: u32 = 600;
/// Font used for tick labels, captions and the status line
pub const FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf";
/// Point size for all text
pub const FONT_SIZE: u16 = 14;
/// Environment variable that replaces [`FONT_PATH`]
pub const FONT_ENV: &str = "VECVIEW_FONT";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewerConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub font_path: PathBuf,
    pub font_size: u16,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: TITLE.to_string(),
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            font_path: PathBuf::from(FONT_PATH),
            font_size: FONT_SIZE,
        }
    }
}

impl ViewerConfig {
    /// Defaults, with the font path taken from `VECVIEW_FONT` when it is set
    /// and not empty.
    pub fn from_env() -> Self {
        Self::with_font_override(env::var_os(FONT_ENV).map(PathBuf::from))
    }

    fn with_font_override(font: Option<PathBuf>) -> Self {
        let mut config = Self::default();
        if let Some(path) = font.filter(|p| !p.as_os_str().is_empty()) {
            config.font_path = path;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewerConfig::default();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert_eq!(config.font_size, 14);
        assert_eq!(config.font_path, PathBuf::from(FONT_PATH));
    }

    #[test]
    fn test_font_override() {
        let config = ViewerConfig::with_font_override(Some(PathBuf::from("/tmp/mono.ttf")));
        assert_eq!(config.font_path, PathBuf::from("/tmp/mono.ttf"));
    }

    #[test]
    fn test_empty_font_override_is_ignored() {
        let config = ViewerConfig::with_font_override(Some(PathBuf::new()));
        assert_eq!(config, ViewerConfig::default());
    }
}
