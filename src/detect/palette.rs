use serde::Serialize;

/// Named stroke/annotation colors used by the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    LightGreen,
    Yellow,
    Orange,
    White,
}

impl Color {
    /// Palette entry for a detection label; unrecognized labels draw white.
    pub fn for_label(label: &str) -> Self {
        match label {
            "apple" => Self::LightGreen,
            "banana" => Self::Yellow,
            "orange" => Self::Orange,
            _ => Self::White,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::LightGreen => "lightgreen",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::White => "white",
        }
    }

    /// Opaque RGBA value matching the CSS color of the same name.
    pub fn rgba(&self) -> [u8; 4] {
        match self {
            Self::LightGreen => [144, 238, 144, 255],
            Self::Yellow => [255, 255, 0, 255],
            Self::Orange => [255, 165, 0, 255],
            Self::White => [255, 255, 255, 255],
        }
    }
}
