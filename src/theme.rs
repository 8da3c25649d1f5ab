//! Theme loading and color resolution.
//!
//! A theme is a TOML file of hex colors under the config themes directory;
//! anything missing falls back to the built-in `stickypad-dusk` palette.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::config::Config;
use crate::model::NoteColor;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ThemeFile {
    #[serde(default)]
    pub base: BaseColors,
    #[serde(default)]
    pub ui: UiColors,
    #[serde(default)]
    pub semantic: SemanticColors,
    #[serde(default)]
    pub notes: NotePalette,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseColors {
    #[serde(default = "defaults::background")]
    pub background: String,
    #[serde(default = "defaults::surface")]
    pub surface: String,
    #[serde(default = "defaults::foreground")]
    pub foreground: String,
    #[serde(default = "defaults::muted")]
    pub muted: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiColors {
    #[serde(default = "defaults::border")]
    pub border: String,
    #[serde(default = "defaults::border_focused")]
    pub border_focused: String,
    #[serde(default = "defaults::selection")]
    pub selection: String,
    #[serde(default = "defaults::accent")]
    pub accent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticColors {
    #[serde(default = "defaults::error")]
    pub error: String,
    #[serde(default = "defaults::warning")]
    pub warning: String,
    #[serde(default = "defaults::success")]
    pub success: String,
}

/// The five sticky-note colors. Themable so a light terminal can soften
/// them without touching the board logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotePalette {
    #[serde(default = "defaults::note_red")]
    pub red: String,
    #[serde(default = "defaults::note_green")]
    pub green: String,
    #[serde(default = "defaults::note_yellow")]
    pub yellow: String,
    #[serde(default = "defaults::note_violet")]
    pub violet: String,
    #[serde(default = "defaults::note_orange")]
    pub orange: String,
}

mod defaults {
    pub fn background() -> String { "#1a1a24".to_string() }
    pub fn surface() -> String { "#24243a".to_string() }
    pub fn foreground() -> String { "#c0caf5".to_string() }
    pub fn muted() -> String { "#565f89".to_string() }
    pub fn border() -> String { "#3b4261".to_string() }
    pub fn border_focused() -> String { "#7aa2f7".to_string() }
    pub fn selection() -> String { "#2e3c64".to_string() }
    pub fn accent() -> String { "#7aa2f7".to_string() }
    pub fn error() -> String { "#f7768e".to_string() }
    pub fn warning() -> String { "#e0af68".to_string() }
    pub fn success() -> String { "#9ece6a".to_string() }
    pub fn note_red() -> String { "#f7768e".to_string() }
    pub fn note_green() -> String { "#9ece6a".to_string() }
    pub fn note_yellow() -> String { "#e0af68".to_string() }
    pub fn note_violet() -> String { "#bb9af7".to_string() }
    pub fn note_orange() -> String { "#ff9e64".to_string() }
}

impl Default for BaseColors {
    fn default() -> Self {
        Self {
            background: defaults::background(),
            surface: defaults::surface(),
            foreground: defaults::foreground(),
            muted: defaults::muted(),
        }
    }
}

impl Default for UiColors {
    fn default() -> Self {
        Self {
            border: defaults::border(),
            border_focused: defaults::border_focused(),
            selection: defaults::selection(),
            accent: defaults::accent(),
        }
    }
}

impl Default for SemanticColors {
    fn default() -> Self {
        Self {
            error: defaults::error(),
            warning: defaults::warning(),
            success: defaults::success(),
        }
    }
}

impl Default for NotePalette {
    fn default() -> Self {
        Self {
            red: defaults::note_red(),
            green: defaults::note_green(),
            yellow: defaults::note_yellow(),
            violet: defaults::note_violet(),
            orange: defaults::note_orange(),
        }
    }
}

impl ThemeFile {
    pub fn load_by_name(name: &str) -> Option<Self> {
        let path = Config::themes_dir().join(format!("{}.toml", name));
        let content = fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!("Failed to parse theme '{}': {}", name, e);
                None
            }
        }
    }
}

/// Resolved colors, ready for ratatui styles.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub foreground: Color,
    pub muted: Color,

    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,
    pub accent: Color,

    pub error: Color,
    pub warning: Color,
    pub success: Color,

    pub note_red: Color,
    pub note_green: Color,
    pub note_yellow: Color,
    pub note_violet: Color,
    pub note_orange: Color,
}

impl Theme {
    pub fn from_file(file: &ThemeFile) -> Self {
        Self {
            background: parse_hex_color(&file.base.background),
            surface: parse_hex_color(&file.base.surface),
            foreground: parse_hex_color(&file.base.foreground),
            muted: parse_hex_color(&file.base.muted),
            border: parse_hex_color(&file.ui.border),
            border_focused: parse_hex_color(&file.ui.border_focused),
            selection: parse_hex_color(&file.ui.selection),
            accent: parse_hex_color(&file.ui.accent),
            error: parse_hex_color(&file.semantic.error),
            warning: parse_hex_color(&file.semantic.warning),
            success: parse_hex_color(&file.semantic.success),
            note_red: parse_hex_color(&file.notes.red),
            note_green: parse_hex_color(&file.notes.green),
            note_yellow: parse_hex_color(&file.notes.yellow),
            note_violet: parse_hex_color(&file.notes.violet),
            note_orange: parse_hex_color(&file.notes.orange),
        }
    }

    pub fn from_name(name: &str) -> Self {
        if let Some(file) = ThemeFile::load_by_name(name) {
            return Self::from_file(&file);
        }
        Self::from_file(&ThemeFile::default())
    }

    pub fn note_color(&self, color: NoteColor) -> Color {
        match color {
            NoteColor::Red => self.note_red,
            NoteColor::Green => self.note_green,
            NoteColor::Yellow => self.note_yellow,
            NoteColor::Violet => self.note_violet,
            NoteColor::Orange => self.note_orange,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_file(&ThemeFile::default())
    }
}

fn parse_hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() == 6 {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&hex[0..2], 16),
            u8::from_str_radix(&hex[2..4], 16),
            u8::from_str_radix(&hex[4..6], 16),
        ) {
            return Color::Rgb(r, g, b);
        }
    }
    Color::White
}
