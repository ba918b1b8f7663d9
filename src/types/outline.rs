//! Outline specification and its string grammar.
//!
//! The grammar is `WIDTH[px] COLOUR`, e.g. `14px #bdbabd`, `2 #fff` or
//! `3px rgba(0, 0, 0, 128)`. The width and colour are separated by
//! whitespace; colour parsing is delegated to [`Colour::parse`].

use std::fmt;
use std::str::FromStr;

use crate::error::{IconError, Result};

use super::Colour;

/// Width and colour of an outline ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutlineSpec {
    /// Ring thickness in pixels. Zero produces no outline.
    pub width_px: u32,
    pub color: Colour,
}

impl OutlineSpec {
    pub const fn new(width_px: u32, color: Colour) -> Self {
        Self { width_px, color }
    }

    /// Parse an outline string such as `"14px #bdbabd"`.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let invalid = |reason: String| IconError::InvalidOutlineSpec {
            spec: input.to_string(),
            reason,
        };

        let (width_token, colour_token) = trimmed
            .split_once(char::is_whitespace)
            .ok_or_else(|| invalid("expected a width followed by a colour".to_string()))?;

        let digits = strip_suffix_ignore_case(width_token, "px").unwrap_or(width_token);
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid(format!("invalid width '{}'", width_token)));
        }
        let width_px = digits
            .parse::<u32>()
            .map_err(|_| invalid(format!("width '{}' is out of range", width_token)))?;

        let color = Colour::parse(colour_token).map_err(|e| match e {
            IconError::Parse { message, .. } => invalid(message),
            other => invalid(other.to_string()),
        })?;

        Ok(Self { width_px, color })
    }
}

fn strip_suffix_ignore_case<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let split = s.len().checked_sub(suffix.len())?;
    let (head, tail) = (s.get(..split)?, s.get(split..)?);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}

impl FromStr for OutlineSpec {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for OutlineSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {}", self.width_px, self.color)
    }
}
