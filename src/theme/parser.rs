//! Accent color parsing utilities for terminal rendering
//!
//! The store keeps accent colors as opaque strings. Only the preview needs
//! to turn them into something a terminal can draw.

use ratatui::style::Color;

/// Error type for color parsing failures
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ColorParseError {
    #[error("Expected an \"H S% L%\" triple, got: {0}")]
    InvalidTriple(String),
    #[error("Invalid HSL component: {0}")]
    InvalidComponent(String),
}

/// Parse an "H S% L%" triple (e.g. `346.8 77.2% 49.8%`) into an RGB color
pub fn parse_hsl_triple(input: &str) -> Result<Color, ColorParseError> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let [hue, saturation, lightness] = parts.as_slice() else {
        return Err(ColorParseError::InvalidTriple(input.to_string()));
    };

    let hue: f32 = hue
        .parse()
        .map_err(|_| ColorParseError::InvalidComponent(hue.to_string()))?;
    let saturation = parse_percentage(saturation)?;
    let lightness = parse_percentage(lightness)?;

    let (r, g, b) = hsl_to_rgb(hue, saturation, lightness);
    Ok(Color::Rgb(r, g, b))
}

/// Parse `NN%` (or a bare number) into a 0..=1 fraction
fn parse_percentage(component: &str) -> Result<f32, ColorParseError> {
    let value: f32 = component
        .strip_suffix('%')
        .unwrap_or(component)
        .parse()
        .map_err(|_| ColorParseError::InvalidComponent(component.to_string()))?;
    if !(0.0..=100.0).contains(&value) {
        return Err(ColorParseError::InvalidComponent(component.to_string()));
    }
    Ok(value / 100.0)
}

fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> (u8, u8, u8) {
    let hue = hue.rem_euclid(360.0);
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let m = lightness - chroma / 2.0;

    let (r, g, b) = match hue {
        h if h < 60.0 => (chroma, x, 0.0),
        h if h < 120.0 => (x, chroma, 0.0),
        h if h < 180.0 => (0.0, chroma, x),
        h if h < 240.0 => (0.0, x, chroma),
        h if h < 300.0 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let channel = |c: f32| ((c + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (channel(r), channel(g), channel(b))
}

/// Terminal color for an accent, or the terminal default when it cannot be
/// parsed
pub fn accent_to_color(accent: &str) -> Color {
    parse_hsl_triple(accent).unwrap_or(Color::Reset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0 0% 0%", Color::Rgb(0, 0, 0))]
    #[case("0 0% 100%", Color::Rgb(255, 255, 255))]
    #[case("0 100% 50%", Color::Rgb(255, 0, 0))]
    #[case("120 100% 50%", Color::Rgb(0, 255, 0))]
    #[case("240 100% 50%", Color::Rgb(0, 0, 255))]
    #[case("360 100% 50%", Color::Rgb(255, 0, 0))]
    #[case("346.8 77.2% 49.8%", Color::Rgb(225, 29, 72))]
    fn test_parse_hsl_triples(#[case] input: &str, #[case] expected: Color) {
        assert_eq!(parse_hsl_triple(input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("#ff0000")]
    #[case("0 0%")]
    #[case("0 0% 0% 0%")]
    #[case("red 10% 10%")]
    #[case("0 150% 10%")]
    fn test_invalid_triples(#[case] input: &str) {
        assert!(parse_hsl_triple(input).is_err());
    }

    #[test]
    fn test_unparsable_accent_falls_back() {
        assert_eq!(accent_to_color("not a color"), Color::Reset);
    }
}
