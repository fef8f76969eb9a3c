use std::str::FromStr;

use super::{Error, Result};

/// An 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// An opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// A colour with explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// True if drawing this colour has no visible effect.
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

/// Parse a single two-digit hex channel.
fn channel(s: &str, idx: usize) -> Result<u8> {
    let part = s
        .get(idx * 2..idx * 2 + 2)
        .ok_or_else(|| Error::Parse(format!("truncated colour: #{s}")))?;
    u8::from_str_radix(part, 16).map_err(|e| Error::Parse(format!("{part}: {e}")))
}

/// Parses `#rrggbb` or `#rrggbbaa`.
impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| Error::Parse(format!("colour must start with '#': {s}")))?;
        match hex.len() {
            6 => Ok(Self::rgb(channel(hex, 0)?, channel(hex, 1)?, channel(hex, 2)?)),
            8 => Ok(Self::rgba(
                channel(hex, 0)?,
                channel(hex, 1)?,
                channel(hex, 2)?,
                channel(hex, 3)?,
            )),
            _ => Err(Error::Parse(format!("bad colour length: {s}"))),
        }
    }
}
