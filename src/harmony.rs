// File: ./src/harmony.rs
// Color-theory harmonies derived from a single base color
use crate::color::{ColorError, canonical_hex, hex_to_hsl, hsl_to_hex};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyKind {
    Complementary,
    Analogous,
    Triadic,
    SplitComplementary,
    Tetradic,
}

impl HarmonyKind {
    pub const ALL: [HarmonyKind; 5] = [
        Self::Complementary,
        Self::Analogous,
        Self::Triadic,
        Self::SplitComplementary,
        Self::Tetradic,
    ];

    /// Hue offsets from the base, in degrees.
    pub fn offsets(&self) -> &'static [i32] {
        match self {
            Self::Complementary => &[180],
            Self::Analogous => &[-30, 30],
            Self::Triadic => &[120, 240],
            Self::SplitComplementary => &[150, 210],
            Self::Tetradic => &[90, 180, 270],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Complementary => "Complementary",
            Self::Analogous => "Analogous",
            Self::Triadic => "Triadic",
            Self::SplitComplementary => "Split Complementary",
            Self::Tetradic => "Tetradic",
        }
    }
}

impl fmt::Display for HarmonyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarmonyResult {
    #[serde(rename = "type")]
    pub kind: HarmonyKind,
    pub label: String,
    pub colors: Vec<String>,
}

impl HarmonyResult {
    /// The base color first, then one rotated color per offset.
    pub fn derive(kind: HarmonyKind, base_hex: &str) -> Result<Self, ColorError> {
        let base = hex_to_hsl(base_hex)?;
        let mut colors = Vec::with_capacity(1 + kind.offsets().len());
        colors.push(canonical_hex(base_hex)?);
        colors.extend(
            kind.offsets()
                .iter()
                .map(|&degrees| hsl_to_hex(base.rotate(degrees))),
        );
        Ok(Self {
            kind,
            label: kind.label().to_string(),
            colors,
        })
    }
}

/// All five harmonies for `base_hex`, in fixed order.
pub fn get_harmonies(base_hex: &str) -> Result<[HarmonyResult; 5], ColorError> {
    Ok([
        HarmonyResult::derive(HarmonyKind::Complementary, base_hex)?,
        HarmonyResult::derive(HarmonyKind::Analogous, base_hex)?,
        HarmonyResult::derive(HarmonyKind::Triadic, base_hex)?,
        HarmonyResult::derive(HarmonyKind::SplitComplementary, base_hex)?,
        HarmonyResult::derive(HarmonyKind::Tetradic, base_hex)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_red_complement_is_cyan() {
        let harmonies = get_harmonies("#FF0000").unwrap();
        let comp = &harmonies[0];
        assert_eq!(comp.kind, HarmonyKind::Complementary);
        assert_eq!(comp.colors, ["#ff0000", "#00ffff"]);
        assert_eq!(hex_to_hsl(&comp.colors[1]).unwrap().h, 180);
    }

    #[test]
    fn test_order_and_sizes() {
        let harmonies = get_harmonies("#6d28d9").unwrap();
        let kinds: Vec<HarmonyKind> = harmonies.iter().map(|h| h.kind).collect();
        assert_eq!(kinds, HarmonyKind::ALL);
        for h in &harmonies {
            assert_eq!(h.colors.len(), 1 + h.kind.offsets().len());
            assert_eq!(h.colors[0], "#6d28d9");
            assert_eq!(h.label, h.kind.label());
        }
    }

    #[test]
    fn test_negative_offset_wraps() {
        // Red at hue 0: analogous -30 lands on 330.
        let analogous = HarmonyResult::derive(HarmonyKind::Analogous, "#ff0000").unwrap();
        assert_eq!(hex_to_hsl(&analogous.colors[1]).unwrap().h, 330);
        assert_eq!(hex_to_hsl(&analogous.colors[2]).unwrap().h, 30);
    }

    #[test]
    fn test_rotation_preserves_saturation_and_lightness() {
        let tetradic = HarmonyResult::derive(HarmonyKind::Tetradic, "#3366cc").unwrap();
        let base = hex_to_hsl("#3366cc").unwrap();
        for hex in &tetradic.colors[1..] {
            let hsl = hex_to_hsl(hex).unwrap();
            assert!((hsl.s as i32 - base.s as i32).abs() <= 1, "{hex}");
            assert!((hsl.l as i32 - base.l as i32).abs() <= 1, "{hex}");
        }
    }

    #[test]
    fn test_invalid_base() {
        assert!(get_harmonies("#6d2").is_err());
    }

    #[test]
    fn test_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&HarmonyKind::SplitComplementary).unwrap();
        assert_eq!(json, "\"split-complementary\"");
    }
}
