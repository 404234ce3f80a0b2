//! Presentation themes
//!
//! The reveal page ships three visual skins. A skin only selects colors and
//! typography; it carries no behavior, so the set is a closed enum mapping
//! to fixed style records rather than a string-keyed lookup.

use serde::{Deserialize, Serialize};

/// The closed set of reveal skins
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealTheme {
    /// Warm neutrals, serif headings; the default gift look
    #[default]
    Clasico,

    /// Deep reds and script type for romantic occasions
    Romantico,

    /// Bright confetti colors for birthdays and celebrations
    Festivo,
}

/// Fixed color/typography bundle for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeStyle {
    /// Page background color
    pub background: &'static str,
    /// Card/envelope surface color
    pub surface: &'static str,
    /// Accent color for controls and the progress bar
    pub accent: &'static str,
    /// Main text color
    pub text: &'static str,
    /// Heading font stack
    pub heading_font: &'static str,
    /// Body font stack
    pub body_font: &'static str,
}

const CLASICO: ThemeStyle = ThemeStyle {
    background: "#faf6f0",
    surface: "#ffffff",
    accent: "#b08968",
    text: "#2d2a26",
    heading_font: "'Playfair Display', serif",
    body_font: "'Inter', sans-serif",
};

const ROMANTICO: ThemeStyle = ThemeStyle {
    background: "#2b0a12",
    surface: "#47101f",
    accent: "#ff6b81",
    text: "#fdf2f5",
    heading_font: "'Great Vibes', cursive",
    body_font: "'Lora', serif",
};

const FESTIVO: ThemeStyle = ThemeStyle {
    background: "#101338",
    surface: "#1c2158",
    accent: "#ffd166",
    text: "#f5f6ff",
    heading_font: "'Baloo 2', cursive",
    body_font: "'Nunito', sans-serif",
};

impl RevealTheme {
    /// All themes, for selection UIs
    pub fn all() -> [RevealTheme; 3] {
        [Self::Clasico, Self::Romantico, Self::Festivo]
    }

    /// The fixed style record for this theme
    pub fn style(self) -> &'static ThemeStyle {
        match self {
            Self::Clasico => &CLASICO,
            Self::Romantico => &ROMANTICO,
            Self::Festivo => &FESTIVO,
        }
    }

    /// Pick a default theme for an occasion
    ///
    /// Purely cosmetic; unknown occasions fall back to the classic skin.
    pub fn for_occasion(occasion: &str) -> Self {
        match occasion.trim().to_lowercase().as_str() {
            "san-valentin" | "aniversario" | "boda" => Self::Romantico,
            "cumpleanos" | "graduacion" => Self::Festivo,
            _ => Self::Clasico,
        }
    }
}
