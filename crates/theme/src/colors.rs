use serde::Serialize;

/// Normalised RGBA colour (each channel in `[0.0, 1.0]`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK:  Self = Self { r: 0.067, g: 0.067, b: 0.067, a: 1.0 }; // #111111
    pub const TRACK:  Self = Self { r: 0.165, g: 0.165, b: 0.165, a: 1.0 }; // #2a2a2a
    pub const GRAY:   Self = Self { r: 0.4,   g: 0.4,   b: 0.4,   a: 1.0 }; // #666666
    pub const SILVER: Self = Self { r: 0.8,   g: 0.8,   b: 0.8,   a: 1.0 }; // #cccccc
    pub const GOLD:   Self = Self { r: 1.0,   g: 0.843, b: 0.0,   a: 1.0 }; // #ffd700

    /// Parse a CSS-style hex color string (`#RGB`, `#RRGGBB` or `#RRGGBBAA`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        let byte = |s: &str| -> Option<u8> { u8::from_str_radix(s, 16).ok() };
        let nibble = |s: &str| -> Option<f32> { byte(s).map(|v| (v * 17) as f32 / 255.0) };

        match hex.len() {
            3 => Some(Self {
                r: nibble(&hex[0..1])?,
                g: nibble(&hex[1..2])?,
                b: nibble(&hex[2..3])?,
                a: 1.0,
            }),
            6 => Some(Self {
                r: byte(&hex[0..2])? as f32 / 255.0,
                g: byte(&hex[2..4])? as f32 / 255.0,
                b: byte(&hex[4..6])? as f32 / 255.0,
                a: 1.0,
            }),
            8 => Some(Self {
                r: byte(&hex[0..2])? as f32 / 255.0,
                g: byte(&hex[2..4])? as f32 / 255.0,
                b: byte(&hex[4..6])? as f32 / 255.0,
                a: byte(&hex[6..8])? as f32 / 255.0,
            }),
            _ => None,
        }
    }

    /// Format as `#rrggbb`, ignoring alpha.
    pub fn to_hex(self) -> String {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_and_eight_digit_hex() {
        let gold = Color::from_hex("#ffd700").unwrap();
        assert_eq!(gold.to_hex(), "#ffd700");
        assert_eq!(gold.a, 1.0);

        let half = Color::from_hex("#00000080").unwrap();
        assert!((half.a - 0.502).abs() < 0.001);
    }

    #[test]
    fn parses_short_hex() {
        assert_eq!(Color::from_hex("#666").unwrap().to_hex(), "#666666");
        let white = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
        assert_eq!(Color::from_hex("fff").unwrap(), white);
    }

    #[test]
    fn rejects_garbage() {
        assert!(Color::from_hex("#ggg000").is_none());
        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("#ééé").is_none());
    }
}
