//! Color field type.
//!
//! Accepts hex strings (`"#FF0000"`, `"#F00"`, `"FF0000"`, `"F00"`),
//! RGB triples (`[255, 0, 0]`), and a table of common named colors.
//! Always normalizes to an uppercase `#RRGGBB` string.

use serde_json::Value;

use recast_core::FieldCheck;

/// Common named colors and their hex values.
const NAMED_COLORS: &[(&str, &str)] = &[
    // Basic colors
    ("black", "#000000"),
    ("white", "#FFFFFF"),
    ("red", "#FF0000"),
    ("green", "#00FF00"),
    ("blue", "#0000FF"),
    ("yellow", "#FFFF00"),
    ("cyan", "#00FFFF"),
    ("magenta", "#FF00FF"),
    // Extended colors
    ("orange", "#FFA500"),
    ("purple", "#800080"),
    ("brown", "#A52A2A"),
    ("pink", "#FFC0CB"),
    ("gray", "#808080"),
    ("grey", "#808080"),
    ("lime", "#00FF00"),
    ("navy", "#000080"),
    ("olive", "#808000"),
    ("teal", "#008080"),
    ("silver", "#C0C0C0"),
    ("gold", "#FFD700"),
    ("maroon", "#800000"),
    ("indigo", "#4B0082"),
    ("violet", "#EE82EE"),
    ("coral", "#FF7F50"),
    ("salmon", "#FA8072"),
    ("khaki", "#F0E68C"),
    ("crimson", "#DC143C"),
    ("fuchsia", "#FF00FF"),
    ("lavender", "#E6E6FA"),
    ("plum", "#DDA0DD"),
    ("turquoise", "#40E0D0"),
    ("tan", "#D2B48C"),
    ("skyblue", "#87CEEB"),
    ("darkblue", "#00008B"),
    ("darkgreen", "#006400"),
    ("darkred", "#8B0000"),
    ("lightblue", "#ADD8E6"),
    ("lightgreen", "#90EE90"),
    ("lightgray", "#D3D3D3"),
    ("lightgrey", "#D3D3D3"),
];

/// Field check that normalizes and validates color values.
///
/// Attach to a string-typed field:
///
/// ```ignore
/// RecordSchema::builder("Theme")
///     .field("accent", TypeDesc::str())
///     .check(Color)
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Color;

impl Color {
    /// Parse a normalized `#RRGGBB` string into an RGB triple.
    pub fn to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
        let hex = hex.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some((r, g, b))
    }

    /// CSS form of a normalized color (lowercase hex).
    pub fn to_css(hex: &str) -> String {
        hex.to_ascii_lowercase()
    }

    fn convert_string(value: &str) -> String {
        let lower = value.trim().to_ascii_lowercase();
        if let Some((_, hex)) = NAMED_COLORS.iter().find(|(name, _)| *name == lower) {
            return (*hex).to_string();
        }

        let mut hex = value.trim().to_string();
        if !hex.starts_with('#') {
            hex.insert(0, '#');
        }
        // Expand #RGB to #RRGGBB.
        if hex.len() == 4 {
            let expanded: String = hex[1..].chars().flat_map(|c| [c, c]).collect();
            hex = format!("#{expanded}");
        }
        hex.to_ascii_uppercase()
    }

    fn convert_triple(items: &[Value]) -> Option<String> {
        if items.len() != 3 {
            return None;
        }
        let mut channels = [0u8; 3];
        for (slot, item) in channels.iter_mut().zip(items) {
            let n = item.as_f64()?;
            *slot = n.clamp(0.0, 255.0) as u8;
        }
        Some(format!(
            "#{:02X}{:02X}{:02X}",
            channels[0], channels[1], channels[2]
        ))
    }

    fn is_valid_hex(value: &str) -> bool {
        value.len() == 7
            && value.starts_with('#')
            && value[1..]
                .chars()
                .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
    }
}

impl FieldCheck for Color {
    fn convert(&self, _field: &str, value: Value) -> Value {
        match &value {
            Value::String(s) => Value::String(Self::convert_string(s)),
            Value::Array(items) => match Self::convert_triple(items) {
                Some(hex) => Value::String(hex),
                // Wrong shape: leave for validate to reject.
                None => value,
            },
            _ => value,
        }
    }

    fn validate(&self, field: &str, value: &Value) -> Result<(), String> {
        let Value::String(s) = value else {
            return Err(format!(
                "{field} must be a color string, RGB triple, or named color, got {value}"
            ));
        };
        if !Self::is_valid_hex(s) {
            return Err(format!(
                "{field} must be a valid hex color (#RRGGBB), got {s:?}"
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn convert(value: Value) -> Value {
        Color.convert("accent", value)
    }

    fn validate(value: &Value) -> Result<(), String> {
        Color.validate("accent", value)
    }

    #[test]
    fn named_colors_normalize() {
        assert_eq!(convert(json!("red")), json!("#FF0000"));
        assert_eq!(convert(json!("SkyBlue")), json!("#87CEEB"));
    }

    #[test]
    fn hex_forms_normalize() {
        assert_eq!(convert(json!("#ff0000")), json!("#FF0000"));
        assert_eq!(convert(json!("ff0000")), json!("#FF0000"));
        assert_eq!(convert(json!("#f00")), json!("#FF0000"));
        assert_eq!(convert(json!("f00")), json!("#FF0000"));
    }

    #[test]
    fn rgb_triples_normalize_and_clamp() {
        assert_eq!(convert(json!([255, 0, 0])), json!("#FF0000"));
        assert_eq!(convert(json!([300, -5, 128])), json!("#FF0080"));
    }

    #[test]
    fn invalid_shapes_fail_validation() {
        let wrong_len = convert(json!([1, 2]));
        assert!(validate(&wrong_len).is_err());

        let not_hex = convert(json!("not-a-color"));
        let err = validate(&not_hex).unwrap_err();
        assert!(err.contains("accent"));
        assert!(err.contains("hex color"));

        assert!(validate(&json!(42)).is_err());
    }

    #[test]
    fn converted_values_pass_validation() {
        for input in [json!("red"), json!("#abc"), json!([0, 128, 255])] {
            let normalized = convert(input);
            assert!(validate(&normalized).is_ok(), "value {normalized}");
        }
    }

    #[test]
    fn rgb_and_css_helpers() {
        assert_eq!(Color::to_rgb("#FF0080"), Some((255, 0, 128)));
        assert_eq!(Color::to_rgb("nope"), None);
        assert_eq!(Color::to_css("#FF0080"), "#ff0080");
    }
}
