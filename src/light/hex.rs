//! Decoding of the vendor's hex channel strings.

/// Decode a channel string like `"ff00aa"` into channel bytes. Returns
/// `None` for malformed input.
pub fn hex_to_channels(hex: &str) -> Option<Vec<u8>> {
    if hex.is_empty() || hex.len() % 2 != 0 || !hex.is_ascii() {
        return None;
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).ok())
        .collect()
}

/// Scale an RGB triple so its brightest channel is full-scale. An all-zero
/// triple is returned unchanged.
pub fn normalise_rgb(rgb: [u8; 3]) -> [u8; 3] {
    let max = rgb[0].max(rgb[1]).max(rgb[2]);
    if max == 0 || max == 255 {
        return rgb;
    }
    rgb.map(|c| ((u16::from(c) * 255) / u16::from(max)) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_channel_strings() {
        assert_eq!(hex_to_channels("ff0000"), Some(vec![255, 0, 0]));
        assert_eq!(hex_to_channels("0a141e28"), Some(vec![10, 20, 30, 40]));
    }

    #[test]
    fn rejects_malformed_strings() {
        assert_eq!(hex_to_channels(""), None);
        assert_eq!(hex_to_channels("fff"), None);
        assert_eq!(hex_to_channels("zz00aa"), None);
        assert_eq!(hex_to_channels("ff00aä"), None);
    }

    #[test]
    fn normalises_to_full_scale() {
        assert_eq!(normalise_rgb([127, 0, 0]), [255, 0, 0]);
        assert_eq!(normalise_rgb([64, 32, 0]), [255, 127, 0]);
    }

    #[test]
    fn full_scale_and_black_are_untouched() {
        assert_eq!(normalise_rgb([255, 10, 0]), [255, 10, 0]);
        assert_eq!(normalise_rgb([0, 0, 0]), [0, 0, 0]);
    }
}
