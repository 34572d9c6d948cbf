use super::constants::{LINK_ALPHA_BASE_DARK, LINK_ALPHA_BASE_LIGHT, LINK_ALPHA_FALLOFF};

/// The persisted binary display mode. Stored in browser local storage under
/// the `"theme"` key; absence of the key means light.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to local storage (and matched on load).
    pub fn storage_value(self) -> &'static str {
        match self {
            Theme::Light => "light-mode",
            Theme::Dark => "dark-mode",
        }
    }

    /// Interpret a stored value; anything other than the dark marker
    /// (including a missing key) is light.
    pub fn from_storage(value: Option<&str>) -> Self {
        match value {
            Some("dark-mode") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// A translucent color as the canvas API consumes it.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS color string for fill/stroke styles.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Light mode: vivid multi-color.
pub const LIGHT_PALETTE: [Rgba; 5] = [
    Rgba::new(255, 0, 85, 0.6),   // pink
    Rgba::new(0, 113, 227, 0.6),  // blue
    Rgba::new(255, 149, 0, 0.6),  // orange
    Rgba::new(175, 82, 222, 0.6), // purple
    Rgba::new(52, 199, 89, 0.6),  // green
];

/// Dark mode: deep-space blues plus one luminous green pop.
pub const DARK_PALETTE: [Rgba; 5] = [
    Rgba::new(10, 132, 255, 0.4),   // soft blue
    Rgba::new(94, 92, 230, 0.4),    // soft indigo
    Rgba::new(100, 210, 255, 0.4),  // soft cyan
    Rgba::new(255, 255, 255, 0.15), // starlight
    Rgba::new(57, 255, 20, 0.5),    // luminous green
];

#[inline]
pub fn palette_for(theme: Theme) -> &'static [Rgba; 5] {
    match theme {
        Theme::Light => &LIGHT_PALETTE,
        Theme::Dark => &DARK_PALETTE,
    }
}

/// Opacity of a connecting line at the given particle distance: a decreasing
/// affine function of distance, floored at zero.
#[inline]
pub fn link_alpha(theme: Theme, dist: f32) -> f32 {
    let base = match theme {
        Theme::Light => LINK_ALPHA_BASE_LIGHT,
        Theme::Dark => LINK_ALPHA_BASE_DARK,
    };
    (base - dist * LINK_ALPHA_FALLOFF).max(0.0)
}

/// Stroke color for connecting lines: white-based on dark, black-based on
/// light, with distance-faded alpha.
#[inline]
pub fn link_color(theme: Theme, dist: f32) -> Rgba {
    let a = link_alpha(theme, dist);
    match theme {
        Theme::Light => Rgba::new(0, 0, 0, a),
        Theme::Dark => Rgba::new(255, 255, 255, a),
    }
}
