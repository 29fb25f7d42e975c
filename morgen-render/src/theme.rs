//! Visual configuration, resolved once from the environment.

/// An RGB color.
pub type Rgb = (u8, u8, u8);

/// Color palette selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    /// Dark background, bright text (default).
    Dark,
    /// iOS-grouped light background.
    Light,
}

/// Card styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Large radii and soft drop shadows (default).
    Cards,
    /// Smaller radii, no shadow, dividers between all entries.
    List,
}

/// Placement of weather glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherIconMode {
    /// One big corner icon (default).
    Mini,
    /// Additional small glyph per reading row.
    Lines,
}

/// Resolved visual configuration. Built once at startup, immutable after.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Color palette.
    pub palette: Palette,
    /// Card styling.
    pub style: Style,
    /// Whether weather glyphs are drawn at all.
    pub icons_enabled: bool,
    /// Weather glyph placement.
    pub weather_icon_mode: WeatherIconMode,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            palette: Palette::Dark,
            style: Style::Cards,
            icons_enabled: true,
            weather_icon_mode: WeatherIconMode::Mini,
        }
    }
}

impl Theme {
    /// Resolve the theme from `DASH_STYLE`, `DASH_THEME`, `DASH_ICONS` and
    /// `DASH_WEATHER_ICON_MODE`. Unrecognized values fall back to the
    /// defaults silently.
    #[must_use]
    pub fn from_env() -> Self {
        let mut theme = Self::default();

        if let Ok(style) = std::env::var("DASH_STYLE") {
            if style.trim().eq_ignore_ascii_case("list") {
                theme.style = Style::List;
            }
        }
        if let Ok(palette) = std::env::var("DASH_THEME") {
            if palette.trim().eq_ignore_ascii_case("light") {
                theme.palette = Palette::Light;
            }
        }
        if let Ok(icons) = std::env::var("DASH_ICONS") {
            let v = icons.trim().to_ascii_lowercase();
            theme.icons_enabled = !matches!(v.as_str(), "off" | "0" | "false" | "no");
        }
        if let Ok(mode) = std::env::var("DASH_WEATHER_ICON_MODE") {
            if mode.trim().eq_ignore_ascii_case("lines") {
                theme.weather_icon_mode = WeatherIconMode::Lines;
            }
        }

        theme
    }

    /// Colors for the selected palette.
    #[must_use]
    pub fn colors(&self) -> &'static ColorScheme {
        match self.palette {
            Palette::Dark => &DARK,
            Palette::Light => &LIGHT,
        }
    }

    /// Card corner radius for the selected style.
    #[must_use]
    pub fn card_radius(&self) -> f32 {
        match self.style {
            Style::Cards => 34.0,
            Style::List => 20.0,
        }
    }
}

/// The fixed color set of one palette.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    /// Canvas background.
    pub bg: Rgb,
    /// Primary card fill.
    pub card: Rgb,
    /// Secondary card fill (to-dos, birthdays).
    pub card2: Rgb,
    /// Primary text.
    pub text: Rgb,
    /// Secondary text.
    pub muted: Rgb,
    /// Divider lines.
    pub divider: Rgb,
    /// Shadow opacity, 0..1 (shadow color is black).
    pub shadow_alpha: f32,
}

/// Dark palette (default).
pub const DARK: ColorScheme = ColorScheme {
    bg: (13, 16, 22),
    card: (24, 30, 42),
    card2: (28, 36, 52),
    text: (245, 246, 250),
    muted: (175, 183, 196),
    divider: (55, 64, 82),
    shadow_alpha: 70.0 / 255.0,
};

/// Light palette, iOS grouped-background look.
pub const LIGHT: ColorScheme = ColorScheme {
    bg: (242, 242, 247),
    card: (255, 255, 255),
    card2: (255, 255, 255),
    text: (18, 18, 20),
    muted: (90, 90, 100),
    divider: (199, 199, 204),
    shadow_alpha: 35.0 / 255.0,
};

/// Format a color as an SVG `rgb(...)` literal.
#[must_use]
pub fn svg_rgb(color: Rgb) -> String {
    format!("rgb({},{},{})", color.0, color.1, color.2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let theme = Theme::default();
        assert_eq!(theme.palette, Palette::Dark);
        assert_eq!(theme.style, Style::Cards);
        assert!(theme.icons_enabled);
        assert_eq!(theme.weather_icon_mode, WeatherIconMode::Mini);
        assert!((theme.card_radius() - 34.0).abs() < f32::EPSILON);
    }

    #[test]
    fn palettes_differ() {
        assert_ne!(DARK.bg, LIGHT.bg);
        assert_ne!(DARK.text, LIGHT.text);
    }

    #[test]
    fn svg_color_literal() {
        assert_eq!(svg_rgb((13, 16, 22)), "rgb(13,16,22)");
    }
}
