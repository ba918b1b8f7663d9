//! Colour type and parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::{IconError, Result};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse any supported colour notation.
    ///
    /// Accepts `#RGB`, `#RRGGBB`, `rgb(r,g,b)` and `rgba(r,g,b,a)`.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.starts_with('#') {
            Self::from_hex(s)
        } else if s.get(..3).is_some_and(|p| p.eq_ignore_ascii_case("rgb")) {
            Self::from_functional(s)
        } else {
            Err(parse_error(
                format!("Unknown colour format: {}", s),
                "Use #RGB, #RRGGBB, rgb(r,g,b) or rgba(r,g,b,a)",
            ))
        }
    }

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RRGGBB` (6 digits)
    ///
    /// Hex digits are case-insensitive. The result is always opaque.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || {
            parse_error(
                format!("Invalid hex colour: {}", s),
                "Use #RGB or #RRGGBB format",
            )
        };

        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match hex.len() {
            3 => {
                // #RGB -> #RRGGBB
                let digits: Vec<u8> = hex.chars().map(parse_hex_digit).collect();
                let (r, g, b) = (digits[0], digits[1], digits[2]);
                Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Ok(Self::rgb(r, g, b))
            }
            _ => Err(invalid()),
        }
    }

    /// Parse `rgb(r,g,b)` or `rgba(r,g,b,a)` with decimal components.
    ///
    /// Alpha defaults to 255 when only three components are given.
    pub fn from_functional(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || {
            parse_error(
                format!("Invalid rgb colour: {}", s),
                "Use rgb(r,g,b) or rgba(r,g,b,a) with components 0-255",
            )
        };

        let (name, rest) = s.split_once('(').ok_or_else(invalid)?;
        if !matches!(name.trim().to_ascii_lowercase().as_str(), "rgb" | "rgba") {
            return Err(invalid());
        }
        let body = rest.trim_end().strip_suffix(')').ok_or_else(invalid)?;

        let mut components = Vec::with_capacity(4);
        for part in body.split(',') {
            let part = part.trim();
            if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid());
            }
            components.push(part.parse::<u8>().map_err(|_| invalid())?);
        }

        match components[..] {
            [r, g, b] => Ok(Self::rgb(r, g, b)),
            [r, g, b, a] => Ok(Self::new(r, g, b, a)),
            _ => Err(invalid()),
        }
    }

    /// Convert to RGBA array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Build from an RGBA array.
    pub const fn from_rgba([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Composite `self` over `below` (source-over).
    ///
    /// A fully transparent source leaves `below` untouched and a fully
    /// opaque source replaces it. Channels round to nearest, so a
    /// translucent pixel over a clear background keeps its exact value.
    pub fn over(self, below: Colour) -> Colour {
        match self.a {
            0 => return below,
            255 => return self,
            _ => {}
        }

        let src_a = f32::from(self.a) / 255.0;
        let dst_a = f32::from(below.a) / 255.0 * (1.0 - src_a);
        let out_a = src_a + dst_a;

        let channel = |s: u8, d: u8| {
            let v = (f32::from(s) * src_a + f32::from(d) * dst_a) / out_a;
            v.round().clamp(0.0, 255.0) as u8
        };

        Colour::new(
            channel(self.r, below.r),
            channel(self.g, below.g),
            channel(self.b, below.b),
            (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
        )
    }
}

impl FromStr for Colour {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

fn parse_error(message: String, help: &str) -> IconError {
    IconError::Parse {
        message,
        help: Some(help.to_string()),
    }
}

/// Parse a single hex digit. Callers check `is_ascii_hexdigit` first.
fn parse_hex_digit(c: char) -> u8 {
    c.to_digit(16).unwrap_or(0) as u8
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| IconError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
