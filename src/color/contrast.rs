// File: ./src/color/contrast.rs
// WCAG 2.x luminance and contrast
use super::{ColorError, Rgb, hex_to_rgb};
use std::fmt;

pub const WHITE_HEX: &str = "#ffffff";
pub const BLACK_HEX: &str = "#000000";

fn linearize(channel: u8) -> f64 {
    let srgb = channel as f64 / 255.0;
    if srgb <= 0.03928 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in [0, 1].
pub fn relative_luminance(rgb: Rgb) -> f64 {
    0.2126 * linearize(rgb.r) + 0.7152 * linearize(rgb.g) + 0.0722 * linearize(rgb.b)
}

/// Contrast ratio in [1, 21]. Symmetric in its arguments.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let lighter = la.max(lb);
    let darker = la.min(lb);
    (lighter + 0.05) / (darker + 0.05)
}

/// Picks white or black text for the given background, whichever reads better.
/// Ties go to black.
pub fn text_color_for_background(hex: &str) -> Result<&'static str, ColorError> {
    let rgb = hex_to_rgb(hex)?;
    Ok(
        if contrast_ratio(rgb, Rgb::WHITE) > contrast_ratio(rgb, Rgb::BLACK) {
            WHITE_HEX
        } else {
            BLACK_HEX
        },
    )
}

/// Badge text such as `4.5:1`.
pub fn format_ratio(ratio: f64) -> String {
    format!("{:.1}:1", ratio)
}

/// WCAG conformance level reached by a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContrastGrade {
    Aaa,
    Aa,
    AaLarge,
    Fail,
}

impl ContrastGrade {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 7.0 {
            Self::Aaa
        } else if ratio >= 4.5 {
            Self::Aa
        } else if ratio >= 3.0 {
            Self::AaLarge
        } else {
            Self::Fail
        }
    }
}

impl fmt::Display for ContrastGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aaa => write!(f, "AAA"),
            Self::Aa => write!(f, "AA"),
            Self::AaLarge => write!(f, "AA Large"),
            Self::Fail => write!(f, "Fail"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_bounds() {
        assert_eq!(relative_luminance(Rgb::BLACK), 0.0);
        assert!((relative_luminance(Rgb::WHITE) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_extreme_ratios() {
        assert_eq!(contrast_ratio(Rgb::WHITE, Rgb::WHITE), 1.0);
        assert!((contrast_ratio(Rgb::WHITE, Rgb::BLACK) - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_ratio_is_symmetric() {
        let samples = [
            Rgb::new(255, 0, 0),
            Rgb::new(109, 40, 217),
            Rgb::new(12, 200, 180),
            Rgb::new(3, 3, 3),
            Rgb::WHITE,
        ];
        for a in samples {
            for b in samples {
                assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
                assert!(contrast_ratio(a, b) >= 1.0);
            }
        }
    }

    #[test]
    fn test_text_color() {
        assert_eq!(text_color_for_background("#000000").unwrap(), WHITE_HEX);
        assert_eq!(text_color_for_background("#ffffff").unwrap(), BLACK_HEX);
        assert_eq!(text_color_for_background("#6d28d9").unwrap(), WHITE_HEX);
        assert_eq!(text_color_for_background("#ffff00").unwrap(), BLACK_HEX);
        assert!(text_color_for_background("nope").is_err());
    }

    #[test]
    fn test_grades_and_badge() {
        assert_eq!(ContrastGrade::from_ratio(21.0), ContrastGrade::Aaa);
        assert_eq!(ContrastGrade::from_ratio(4.5), ContrastGrade::Aa);
        assert_eq!(ContrastGrade::from_ratio(3.2), ContrastGrade::AaLarge);
        assert_eq!(ContrastGrade::from_ratio(1.0), ContrastGrade::Fail);
        assert_eq!(format_ratio(4.54), "4.5:1");
        assert_eq!(ContrastGrade::AaLarge.to_string(), "AA Large");
    }
}
