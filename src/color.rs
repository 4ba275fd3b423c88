use std::collections::BTreeMap;
use std::str::FromStr;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};
use thiserror::Error;

use crate::config::{PLOT_BACKGROUND, SPECIES_COLORS};
use crate::data::model::Species;

#[derive(Debug, Error, PartialEq)]
pub enum ThemeError {
    #[error("invalid colour {value:?}: {reason}")]
    InvalidHex { value: String, reason: String },
}

/// Parse a `#rrggbb` string.
pub fn parse_hex(value: &str) -> Result<Color32, ThemeError> {
    let rgb = Srgb::<u8>::from_str(value).map_err(|e| ThemeError::InvalidHex {
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    Ok(Color32::from_rgb(rgb.red, rgb.green, rgb.blue))
}

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: species → Color32
// ---------------------------------------------------------------------------

/// Assigns each species a fixed colour.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<Species, Color32>,
}

impl ColorMap {
    /// Map species in domain order onto the given hex colours.
    pub fn from_hex(colors: &[&str]) -> Result<Self, ThemeError> {
        let parsed = colors
            .iter()
            .map(|c| parse_hex(c))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_colors(parsed))
    }

    /// Evenly spaced hues, one per species.
    pub fn generated() -> Self {
        Self::from_colors(generate_palette(Species::ALL.len()))
    }

    fn from_colors(colors: Vec<Color32>) -> Self {
        let mapping = Species::ALL.into_iter().zip(colors).collect();
        ColorMap { mapping }
    }

    /// Look up the colour for a species.
    pub fn color_for(&self, species: Species) -> Color32 {
        self.mapping.get(&species).copied().unwrap_or(Color32::GRAY)
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Theme {
    pub species: ColorMap,
    pub plot_background: Color32,
}

impl Theme {
    /// Build the dashboard theme, falling back to generated colours when a
    /// configured colour does not parse.
    pub fn load() -> Self {
        let species = ColorMap::from_hex(&SPECIES_COLORS).unwrap_or_else(|e| {
            log::warn!("{e}; using generated species palette");
            ColorMap::generated()
        });
        let plot_background = parse_hex(PLOT_BACKGROUND).unwrap_or_else(|e| {
            log::warn!("{e}; using default plot background");
            Color32::from_gray(250)
        });
        Theme {
            species,
            plot_background,
        }
    }
}
