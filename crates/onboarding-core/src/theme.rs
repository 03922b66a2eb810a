//! Theme values handed through to the host renderer.
//!
//! The flow never reads these; they travel with the configuration so a host
//! can style every page from one record.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ConfigError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const WHITE: Color = Color(255, 255, 255, 255);
    pub const BLACK: Color = Color(0, 0, 0, 255);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(r, g, b, 255)
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    pub fn parse_hex(hex: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidColor(hex.to_string());
        let s = hex.trim().trim_start_matches('#');
        if !(s.len() == 6 || s.len() == 8) || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let byte = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).map_err(|_| invalid());
        let a = if s.len() == 8 { byte(6)? } else { 255 };
        Ok(Color(byte(0)?, byte(2)?, byte(4)?, a))
    }

    pub fn to_hex(self) -> String {
        if self.3 == 255 {
            format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.0, self.1, self.2, self.3)
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::parse_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub primary: Color,
    pub on_primary: Color,
    pub text: Color,
    pub secondary_text: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::from_rgb(0x0F, 0x0F, 0x14),
            surface: Color::from_rgb(0x1C, 0x1C, 0x24),
            primary: Color::from_rgb(0x63, 0x66, 0xF1),
            on_primary: Color::WHITE,
            text: Color::WHITE,
            secondary_text: Color::from_rgb(0x9C, 0xA3, 0xAF),
            accent: Color::from_rgb(0x22, 0xC5, 0x5E),
        }
    }
}
