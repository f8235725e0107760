//! Decoration style for Arabic literals
//!
//! Turns user-facing decoration settings into the style a host editor applies
//! to every matched range. The style is rebuilt from the settings each time
//! they change; nothing is cached between applications.

use serde::{Deserialize, Serialize};

/// CSS-like text decoration forcing right-to-left, isolated rendering
pub const RTL_TEXT_DECORATION: &str = "none; direction: rtl; unicode-bidi: isolate;";

/// User-facing decoration settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecorationConfig {
    /// Paint a background behind matched literals
    #[serde(default = "default_enable_background")]
    pub enable_background: bool,
    /// "#RRGGBB" hex color, or any color string the host understands
    #[serde(default = "default_background_color")]
    pub background_color: String,
    /// Alpha applied to hex background colors (0.0 - 1.0)
    #[serde(default = "default_background_opacity")]
    pub background_opacity: f64,
    /// Foreground color; empty keeps the editor's color
    #[serde(default)]
    pub text_color: String,
}

fn default_enable_background() -> bool {
    true
}

fn default_background_color() -> String {
    "#ffffff".to_string()
}

fn default_background_opacity() -> f64 {
    0.05
}

impl Default for DecorationConfig {
    fn default() -> Self {
        Self {
            enable_background: default_enable_background(),
            background_color: default_background_color(),
            background_opacity: default_background_opacity(),
            text_color: String::new(),
        }
    }
}

/// RGB color (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse from "#RRGGBB" or "RRGGBB" (case-insensitive)
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("Invalid color format: {}", s));
        }
        Ok(Color {
            r: u8::from_str_radix(&hex[0..2], 16).map_err(|e| e.to_string())?,
            g: u8::from_str_radix(&hex[2..4], 16).map_err(|e| e.to_string())?,
            b: u8::from_str_radix(&hex[4..6], 16).map_err(|e| e.to_string())?,
        })
    }

    /// Format as a CSS `rgba(...)` string with the given alpha
    pub fn to_rgba_css(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

/// Resolved style handed to the rendering host
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecorationStyle {
    /// `None` leaves the background untouched
    pub background_color: Option<String>,
    /// `None` leaves the foreground untouched
    pub color: Option<String>,
    pub text_decoration: &'static str,
}

impl DecorationStyle {
    /// Build the style from settings
    ///
    /// Hex background colors are combined with the opacity into `rgba(...)`;
    /// other color strings are passed through as given.
    pub fn from_config(config: &DecorationConfig) -> Self {
        let background_color = config
            .enable_background
            .then(|| match Color::from_hex(&config.background_color) {
                Ok(color) => color.to_rgba_css(config.background_opacity),
                Err(_) => config.background_color.clone(),
            });

        let color = (!config.text_color.is_empty()).then(|| config.text_color.clone());

        Self {
            background_color,
            color,
            text_decoration: RTL_TEXT_DECORATION,
        }
    }
}

impl Default for DecorationStyle {
    fn default() -> Self {
        Self::from_config(&DecorationConfig::default())
    }
}
