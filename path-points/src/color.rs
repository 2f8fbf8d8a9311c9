//! Colors parsed from hexadecimal strings.

/// An RGBA color with components in the range `0.0..=1.0`.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Color {
    /// Opaque mid gray, returned for malformed hex strings.
    pub const GRAY: Self = Self::new(0.5, 0.5, 0.5, 1.0);

    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from 8-bit red, green and blue components.
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::new(
            red as f32 / 255.0,
            green as f32 / 255.0,
            blue as f32 / 255.0,
            1.0,
        )
    }

    /// Parses a color from a `RRGGBB` or `#RRGGBB` hex string.
    ///
    /// Returns `None` if the input is not 6 or 7 characters long. The
    /// length is checked before surrounding whitespace is trimmed, and if what
    /// remains after trimming and removing a leading `#` is not exactly 6
    /// characters the result is [`Color::GRAY`].
    ///
    /// Digits are read from the start of the string until the first
    /// character that is not a hex digit; an optional `0x` prefix is
    /// accepted. A string with no leading hex digits parses as black.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let len = hex.chars().count();
        if len != 6 && len != 7 {
            return None;
        }
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.chars().count() != 6 {
            log::warn!("malformed hex color '{hex}', using gray");
            return Some(Self::GRAY);
        }
        let value = scan_hex(digits);
        Some(Self::from_rgb8(
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        ))
    }
}

/// Reads a hexadecimal integer from the start of `src`.
///
/// Stops at the first non hex digit; returns 0 if there are none.
fn scan_hex(src: &str) -> u32 {
    let src = src
        .strip_prefix("0x")
        .or_else(|| src.strip_prefix("0X"))
        .filter(|rest| rest.starts_with(|c: char| c.is_ascii_hexdigit()))
        .unwrap_or(src);
    src.chars()
        .map_while(|c| c.to_digit(16))
        .fold(0, |acc, digit| (acc << 4) | digit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("#FF8000", Color::from_rgb8(0xFF, 0x80, 0x00))]
    #[case("FF8000", Color::from_rgb8(0xFF, 0x80, 0x00))]
    #[case("ff8000", Color::from_rgb8(0xFF, 0x80, 0x00))]
    #[case("#00Ab0c", Color::from_rgb8(0x00, 0xAB, 0x0C))]
    #[case("000000", Color::new(0.0, 0.0, 0.0, 1.0))]
    #[case("#FFFFFF", Color::new(1.0, 1.0, 1.0, 1.0))]
    #[case(" ABCDE", Color::GRAY)]
    #[case("#12345 ", Color::GRAY)]
    #[case("##1234", Color::GRAY)]
    #[case("1234567", Color::GRAY)]
    fn parse(#[case] input: &str, #[case] expected: Color) {
        assert_eq!(Color::from_hex(input), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("#FFF")]
    #[case("FFFFF")]
    #[case("#FF00FF00")]
    #[case("  #FF8000  ")]
    fn wrong_length(#[case] input: &str) {
        assert_eq!(Color::from_hex(input), None);
    }

    #[test]
    fn scans_leading_digits() {
        // stops at the first non-digit
        assert_eq!(Color::from_hex("12ZZ00"), Some(Color::from_rgb8(0, 0, 0x12)));
        assert_eq!(Color::from_hex("#GG0000"), Some(Color::from_rgb8(0, 0, 0)));
        // prefix counts toward the six characters
        assert_eq!(Color::from_hex("0x1234"), Some(Color::from_rgb8(0, 0x12, 0x34)));
    }

    #[test]
    fn whitespace_counts_toward_length() {
        let _ = env_logger::builder().is_test(true).try_init();
        // seven characters before trimming, six after
        assert_eq!(Color::from_hex(" FF00FF"), Some(Color::from_rgb8(0xFF, 0, 0xFF)));
        assert_eq!(Color::from_hex("FF00FF\n"), Some(Color::from_rgb8(0xFF, 0, 0xFF)));
        // six before trimming, five after
        assert_eq!(Color::from_hex(" FF00F"), Some(Color::GRAY));
    }
}
